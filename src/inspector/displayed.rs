//! # 预览图与取样模型
//!
//! `DisplayedImage` 是用户实际看到、也是所有取样所针对的缩放后 RGB 图。
//! 解码完成后不可变，由会话独占持有。

use image::RgbImage;
use serde::Serialize;

use super::Rgb;

/// 缩放后的预览图（RGB8）。
#[derive(Debug, Clone)]
pub struct DisplayedImage {
    pixels: RgbImage,
}

impl DisplayedImage {
    pub fn new(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// 读取像素，调用方保证坐标在界内。
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(*self.pixels.get_pixel(x, y))
    }

    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.pixels
    }
}

/// 单点取样结果，按需从预览图派生，不做存储。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSample {
    pub x: u32,
    pub y: u32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub hex: String,
}

impl ColorSample {
    pub(crate) fn new(x: u32, y: u32, color: Rgb) -> Self {
        Self {
            x,
            y,
            r: color.r,
            g: color.g,
            b: color.b,
            hex: color.to_hex(),
        }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// 一次成功上传的结果：原图信息 + 预览图。
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub file_name: String,
    pub original_width: u32,
    pub original_height: u32,
    pub displayed: DisplayedImage,
}

impl LoadedImage {
    /// 预览尺寸说明，例如 `预览：900×675px（原图 1600×1200px）`。
    pub fn caption(&self) -> String {
        format!(
            "预览：{}×{}px（原图 {}×{}px）",
            self.displayed.width(),
            self.displayed.height(),
            self.original_width,
            self.original_height
        )
    }
}
