//! # CSV 导出模块
//!
//! 长表格式：表头 `X,Y,R,G,B,HEX`，每个网格点一行，行优先顺序，UTF-8，`\n` 换行。
//! 文件名为 `<原文件名去扩展名>_samples_step<步长>.csv`。

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use super::{InspectError, SamplingGrid};

pub const CSV_HEADER: &str = "X,Y,R,G,B,HEX";
pub const CSV_MIME: &str = "text/csv";

/// 一次下载请求生成的导出内容。
#[derive(Debug, Clone, Serialize)]
pub struct CsvExport {
    pub file_name: String,
    pub mime: &'static str,
    #[serde(skip)]
    pub content: String,
    pub rows: usize,
}

impl CsvExport {
    pub fn from_grid(original_name: &str, grid: &SamplingGrid) -> Result<Self, InspectError> {
        let mut bytes = Vec::with_capacity((grid.len() + 1) * 24);
        write_csv(grid, &mut bytes)
            .map_err(|e| InspectError::Export(format!("生成 CSV 失败：{}", e)))?;
        let content = String::from_utf8(bytes)
            .map_err(|e| InspectError::Export(format!("CSV 不是合法的 UTF-8：{}", e)))?;

        Ok(Self {
            file_name: export_file_name(original_name, grid.step),
            mime: CSV_MIME,
            content,
            rows: grid.len(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

pub fn write_csv<W: Write>(grid: &SamplingGrid, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for sample in grid.records() {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            sample.x, sample.y, sample.r, sample.g, sample.b, sample.hex
        )?;
    }
    writer.flush()
}

/// 导出文件名：去掉目录与最后一个扩展名。
///
/// # 示例
/// ```rust
/// use color_inspector::inspector::export_file_name;
///
/// assert_eq!(export_file_name("sunset.jpg", 23), "sunset_samples_step23.csv");
/// assert_eq!(export_file_name("a.b.png", 4), "a.b_samples_step4.csv");
/// ```
pub fn export_file_name(original_name: &str, step: u32) -> String {
    let name = Path::new(original_name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| original_name.to_string());
    let base = name.rsplit_once('.').map_or(name.as_str(), |(base, _)| base);

    format!("{}_samples_step{}.csv", base, step)
}
