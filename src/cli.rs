//! 命令行入口
//!
//! # 设计思路
//!
//! 命令行只做参数接收与结果输出，不承载业务逻辑：一次运行等价于
//! “上传一张图 → （可选）点击一个点 → 下载 CSV”的完整会话。
//!
//! 用法示例：
//!
//! ```text
//! color-inspector photo.png --pick 120,45
//! color-inspector photo.jpg --out-dir exports/ --html report.html
//! color-inspector photo.png --profile quality --json --no-csv
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;

use crate::error::AppError;
use crate::inspector::{
    ColorInspector, ColorSample, CsvExport, ImageSource, InspectorSession, InspectorSettings,
    ResizeProfile, Rgb, TextColor,
};
use crate::report;

/// Color Inspector：读取图片颜色、生成取样网格并导出 CSV。
#[derive(Parser, Debug)]
#[command(
    name = "color-inspector",
    version,
    about = "Color Inspector (RGB/HEX)：取色、网格取样、导出 CSV"
)]
pub struct CliArgs {
    /// 输入图片（PNG / JPG / JPEG）。
    pub input: PathBuf,

    /// 取色点，预览图坐标，格式 `X,Y`。越界时不取样。
    #[arg(short, long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    pub pick: Option<(i64, i64)>,

    /// CSV 输出目录，文件名自动生成为 `<名称>_samples_step<步长>.csv`。
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// CSV 输出路径，指定后忽略 `--out-dir`。
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// 不写出 CSV。
    #[arg(long, conflicts_with = "csv")]
    pub no_csv: bool,

    /// 额外写出 HTML 报告（色块 + 网格表格）。
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// 缩放档位：quality / balanced / speed。
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// JSON 配置文件（字段见 `InspectorSettings`）。
    #[arg(long, value_name = "FILE.json")]
    pub config: Option<PathBuf>,

    /// 以 JSON 输出结果摘要。
    #[arg(long)]
    pub json: bool,
}

fn parse_point(value: &str) -> Result<(i64, i64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("取色点格式应为 X,Y：{}", value))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|e| format!("无法解析坐标 '{}'：{}", part.trim(), e))
    };
    Ok((parse(x)?, parse(y)?))
}

#[derive(Debug, Serialize)]
struct ColorSummary {
    rgb: Rgb,
    hex: String,
    text_color: TextColor,
}

impl From<Rgb> for ColorSummary {
    fn from(rgb: Rgb) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            text_color: rgb.contrast_text(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RunSummary {
    file_name: String,
    original_size: (u32, u32),
    displayed_size: (u32, u32),
    pick: Option<(i64, i64)>,
    picked: Option<ColorSample>,
    average: ColorSummary,
    step: u32,
    grid_size: (usize, usize),
    csv_path: Option<PathBuf>,
    html_path: Option<PathBuf>,
    settings: InspectorSettings,
}

fn build_inspector(args: &CliArgs) -> Result<ColorInspector, AppError> {
    let mut inspector = ColorInspector::default();

    if let Some(path) = args.config.as_deref() {
        let settings = InspectorSettings::load_from_path(path)
            .map_err(|e| AppError::Config(e.to_string()))?;
        inspector
            .apply_settings(&settings)
            .map_err(|e| AppError::Config(e.to_string()))?;
    }

    if let Some(profile) = args.profile.as_deref() {
        let profile = ResizeProfile::parse(profile).map_err(|e| AppError::Usage(e.to_string()))?;
        inspector.set_profile(profile);
    }

    Ok(inspector)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// 执行一次完整会话。
pub fn run(args: CliArgs) -> Result<(), AppError> {
    let inspector = build_inspector(&args)?;
    let settings = inspector.config().to_settings();
    let mut session = InspectorSession::new(inspector);
    session.upload(ImageSource::from_path(&args.input))?;

    let picked = args.pick.and_then(|(x, y)| session.click(x, y));
    let (Some(loaded), Some(average), Some(grid)) = (
        session.current(),
        session.average_color(),
        session.sampling_grid(),
    ) else {
        return Err(AppError::Usage("没有已加载的图片".to_string()));
    };

    let csv_path = if args.no_csv {
        None
    } else {
        let export = CsvExport::from_grid(&loaded.file_name, &grid)?;
        let path = args
            .csv
            .clone()
            .unwrap_or_else(|| args.out_dir.join(&export.file_name));
        write_output(&path, export.as_bytes())?;
        log::info!("💾 CSV 已写出 - {}（{} 行）", path.display(), export.rows);
        Some(path)
    };

    if let Some(path) = args.html.as_deref() {
        let html = report::render_report(loaded, picked.as_ref(), average, &grid);
        write_output(path, html.as_bytes())?;
        log::info!("💾 HTML 报告已写出 - {}", path.display());
    }

    let summary = RunSummary {
        file_name: loaded.file_name.clone(),
        original_size: (loaded.original_width, loaded.original_height),
        displayed_size: loaded.displayed.dimensions(),
        pick: args.pick,
        picked,
        average: ColorSummary::from(average),
        step: grid.step,
        grid_size: (grid.xs.len(), grid.ys.len()),
        csv_path,
        html_path: args.html.clone(),
        settings,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::Config(format!("序列化结果失败: {}", e)))?;
        println!("{}", json);
    } else {
        print_summary(&summary, &loaded.caption(), &grid.caption());
    }

    Ok(())
}

fn print_summary(summary: &RunSummary, caption: &str, grid_caption: &str) {
    println!("{}", caption);

    match (&summary.picked, summary.pick) {
        (Some(sample), _) => println!(
            "坐标：({}, {})  RGB：({}, {}, {})  HEX：{}",
            sample.x, sample.y, sample.r, sample.g, sample.b, sample.hex
        ),
        (None, Some((x, y))) => println!("坐标 ({}, {}) 不在预览图范围内，未取样。", x, y),
        (None, None) => {}
    }

    println!(
        "平均色 RGB：{}  |  HEX：{}（文字颜色：{}）",
        summary.average.rgb, summary.average.hex, summary.average.text_color
    );
    println!("{}（{}×{} 个格点）", grid_caption, summary.grid_size.0, summary.grid_size.1);

    if let Some(path) = &summary.csv_path {
        println!("CSV 已保存：{}", path.display());
    }
    if let Some(path) = &summary.html_path {
        println!("HTML 报告已保存：{}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("color_inspector_cli_{tag}_{nanos}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([30, 60, 90])))
            .save_with_format(&path, ImageFormat::Png)
            .expect("failed to write test image");
        path
    }

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("color-inspector").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn run_writes_default_csv_and_html_report() {
        let dir = temp_dir("default");
        let input = write_png(&dir, "swatch.png", 100, 40);
        let html = dir.join("r.html");
        let (input_arg, dir_arg, html_arg) = (
            input.to_string_lossy().into_owned(),
            dir.to_string_lossy().into_owned(),
            html.to_string_lossy().into_owned(),
        );

        run(parse(&[&input_arg, "--out-dir", &dir_arg, "--pick", "9999,0", "--html", &html_arg]))
            .expect("run should succeed");

        let csv = fs::read_to_string(dir.join("swatch_samples_step4.csv")).expect("csv written");
        assert!(csv.starts_with("X,Y,R,G,B,HEX\n0,0,30,60,90,#1E3C5A\n"));
        assert_eq!(csv.lines().count(), 1 + 25 * 10);
        let report = fs::read_to_string(&html).expect("html written");
        assert!(report.contains("未选择取色点"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn run_honours_csv_path_and_no_csv() {
        let dir = temp_dir("paths");
        let input = write_png(&dir, "tiny.png", 8, 8);
        let input_arg = input.to_string_lossy().into_owned();
        let custom = dir.join("nested").join("out.csv");
        let custom_arg = custom.to_string_lossy().into_owned();
        let dir_arg = dir.to_string_lossy().into_owned();

        run(parse(&[&input_arg, "--csv", &custom_arg, "--json"])).expect("run should succeed");
        assert!(custom.exists());
        assert!(!dir.join("tiny_samples_step4.csv").exists());

        run(parse(&[&input_arg, "--out-dir", &dir_arg, "--no-csv", "--pick", "1,1"]))
            .expect("run should succeed");
        assert!(!dir.join("tiny_samples_step4.csv").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn run_fails_on_non_image_input() {
        let dir = temp_dir("bad");
        let input = dir.join("notes.png");
        fs::write(&input, b"just text").unwrap();
        let input_arg = input.to_string_lossy().into_owned();

        let result = run(parse(&[&input_arg, "--no-csv"]));
        assert!(matches!(result, Err(AppError::Inspect(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn json_summary_carries_effective_settings() {
        let inspector = ColorInspector::default();
        let json = serde_json::to_value(inspector.config().to_settings()).unwrap();
        assert_eq!(json["max_display_width"], 900);
        assert_eq!(json["profile"], "balanced");
    }

    #[test]
    fn parse_point_accepts_negative_and_spaces() {
        assert_eq!(parse_point("12,34"), Ok((12, 34)));
        assert_eq!(parse_point("-1, 5"), Ok((-1, 5)));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn args_parse_with_defaults() {
        let args = CliArgs::try_parse_from(["color-inspector", "photo.png", "--pick", "3,4"]).unwrap();
        assert_eq!(args.input, PathBuf::from("photo.png"));
        assert_eq!(args.pick, Some((3, 4)));
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(!args.json);
    }

    #[test]
    fn no_csv_conflicts_with_csv_path() {
        let result = CliArgs::try_parse_from([
            "color-inspector",
            "photo.png",
            "--no-csv",
            "--csv",
            "out.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_profile_is_usage_error() {
        let args = CliArgs::try_parse_from(["color-inspector", "photo.png", "--profile", "ultra"]).unwrap();
        assert!(matches!(build_inspector(&args), Err(AppError::Usage(_))));
    }
}
