//! # 颜色工具模块
//!
//! ## 设计思路
//!
//! 取色结果统一以 `Rgb` 表示，通道为 `u8`，越界输入在类型层面即不可表达，
//! 因此 `to_hex_upper` 没有错误路径。
//!
//! ## 实现思路
//!
//! - HEX 输出固定为 `#RRGGBB`（大写、两位补零）。
//! - 叠加文字颜色按感知亮度 `(0.299R + 0.587G + 0.114B) / 255` 选择，
//!   严格小于 0.5 用白字，否则用黑字（恰好 0.5 为黑字）。

use std::fmt;

use serde::Serialize;

use super::InspectError;

/// 感知亮度阈值，严格小于该值使用白色文字。
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// 8 位 RGB 颜色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 大写 HEX 表示，例如 `#FF0000`。
    pub fn to_hex(self) -> String {
        to_hex_upper(self.r, self.g, self.b)
    }

    /// 感知亮度，范围 `[0, 1]`。
    pub fn luminance(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    pub fn contrast_text(self) -> TextColor {
        text_color_for_luminance(self.luminance())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// 叠加在色块上的文字颜色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn to_hex_upper(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// 解析 6 位 HEX 颜色，`#` 前缀可选。
///
/// # 示例
/// ```rust
/// use color_inspector::inspector::{parse_hex, Rgb};
///
/// assert_eq!(parse_hex("#1a2B3c")?, Rgb::new(0x1A, 0x2B, 0x3C));
/// assert_eq!(parse_hex("00ff00")?, Rgb::new(0, 255, 0));
/// # Ok::<(), color_inspector::inspector::InspectError>(())
/// ```
pub fn parse_hex(hex_color: &str) -> Result<Rgb, InspectError> {
    let trimmed = hex_color.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InspectError::InvalidColor(format!(
            "需要 6 位十六进制颜色：{}",
            hex_color
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| InspectError::InvalidColor(format!("{}：{}", hex_color, e)))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn text_color_for_luminance(luminance: f64) -> TextColor {
    if luminance < LUMINANCE_THRESHOLD {
        TextColor::White
    } else {
        TextColor::Black
    }
}

/// 为 HEX 背景色选择可读的文字颜色。
pub fn contrast_text_color(hex_color: &str) -> Result<TextColor, InspectError> {
    Ok(parse_hex(hex_color)?.contrast_text())
}
