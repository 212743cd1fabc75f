//! HTML 报告渲染
//!
//! # 设计思路
//!
//! 取代网页界面中的色块与网格表格：生成独立的 HTML 页面，
//! 色块文字颜色与每个网格单元的文字颜色都按感知亮度选取。
//!
//! # 实现思路
//!
//! - 颜色值全部来自 `Rgb::to_hex()`，输出固定为 `#RRGGBB`，可直接写入样式。
//! - 文件名等外部文本统一经过 `escape_html`。

use std::fmt::Write as _;

use crate::inspector::{ColorSample, LoadedImage, Rgb, SamplingGrid};

/// 单个色块：圆角边框，背景为颜色本身，居中显示 HEX。
pub fn swatch_html(color: Rgb, width_px: u32, height_px: u32) -> String {
    let hex = color.to_hex();
    format!(
        "<div style=\"width:{w}px;height:{h}px;border-radius:10px;border:1px solid #bbb;\
         background:{hex};display:flex;align-items:center;justify-content:center;\
         font-family:monospace;font-weight:700;color:{text};\">{hex}</div>",
        w = width_px,
        h = height_px,
        hex = hex,
        text = color.contrast_text(),
    )
}

fn cell_style(sample: &ColorSample) -> String {
    format!(
        "background-color:{};color:{};font-family:monospace;font-size:12px;text-align:center;",
        sample.hex,
        sample.rgb().contrast_text()
    )
}

/// 网格表格：列头为 X，行头为 Y。
pub fn grid_table_html(grid: &SamplingGrid) -> String {
    let mut html = String::from("<table class=\"grid\">\n<thead><tr><th></th>");
    for label in grid.x_labels() {
        let _ = write!(html, "<th>{}</th>", label);
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (label, row) in grid.y_labels().iter().zip(&grid.rows) {
        let _ = write!(html, "<tr><th>{}</th>", label);
        for sample in row {
            let _ = write!(html, "<td style=\"{}\">{}</td>", cell_style(sample), sample.hex);
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// 完整报告页面。
pub fn render_report(
    loaded: &LoadedImage,
    picked: Option<&ColorSample>,
    average: Rgb,
    grid: &SamplingGrid,
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>🧪 Color Inspector (RGB/HEX)</title>\n</head>\n<body>\n");
    html.push_str("<h1>🧪 Color Inspector (RGB/HEX)</h1>\n");
    let _ = writeln!(
        html,
        "<p><strong>{}</strong> — {}</p>",
        escape_html(&loaded.file_name),
        escape_html(&loaded.caption())
    );

    html.push_str("<h2>单点取色</h2>\n");
    match picked {
        Some(sample) => {
            let _ = writeln!(
                html,
                "<p>坐标：({}, {})<br>RGB：({}, {}, {})<br>HEX：{}</p>",
                sample.x, sample.y, sample.r, sample.g, sample.b, sample.hex
            );
            html.push_str(&swatch_html(sample.rgb(), 150, 60));
            html.push('\n');
        }
        None => html.push_str("<p>未选择取色点。</p>\n"),
    }

    html.push_str("<h2>🧮 图片平均色</h2>\n");
    let _ = writeln!(html, "<p>RGB：{}  |  HEX：{}</p>", average, average.to_hex());
    html.push_str(&swatch_html(average, 150, 40));
    html.push('\n');

    html.push_str("<h2>🎨 颜色取样网格</h2>\n");
    html.push_str(&grid_table_html(grid));
    let _ = writeln!(html, "\n<p>{}</p>", escape_html(&grid.caption()));

    html.push_str("</body>\n</html>\n");
    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::DisplayedImage;
    use image::RgbImage;

    fn loaded(rgb: [u8; 3]) -> LoadedImage {
        LoadedImage {
            file_name: "<red>.png".to_string(),
            original_width: 8,
            original_height: 8,
            displayed: DisplayedImage::new(RgbImage::from_pixel(8, 8, image::Rgb(rgb))),
        }
    }

    #[test]
    fn swatch_uses_contrasting_text() {
        let dark = swatch_html(Rgb::new(255, 0, 0), 150, 60);
        assert!(dark.contains("background:#FF0000"));
        assert!(dark.contains("color:white"));

        let light = swatch_html(Rgb::new(255, 255, 255), 150, 40);
        assert!(light.contains("color:black"));
        assert!(light.contains("height:40px"));
    }

    #[test]
    fn grid_table_has_header_per_column_and_row() {
        let image = loaded([0, 0, 0]);
        let grid = SamplingGrid::build(&image.displayed, 40, 4);
        let html = grid_table_html(&grid);

        assert_eq!(html.matches("<td ").count(), 4);
        assert!(html.contains("<th>4</th>"));
        assert!(html.contains(
            "background-color:#000000;color:white;font-family:monospace;font-size:12px;text-align:center;"
        ));
    }

    #[test]
    fn report_escapes_file_name_and_handles_missing_pick() {
        let image = loaded([10, 200, 10]);
        let grid = SamplingGrid::build(&image.displayed, 40, 4);
        let html = render_report(&image, None, image.displayed.average_color(), &grid);

        assert!(html.contains("&lt;red&gt;.png"));
        assert!(html.contains("未选择取色点"));
        assert!(html.contains("#0AC80A"));
        assert!(html.contains("每 4px 取样"));
    }
}
