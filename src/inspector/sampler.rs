//! # 单点取样与平均色
//!
//! ## 实现思路
//!
//! - 单点取样接受有符号坐标（点击事件可能落在边框或留白上），
//!   越界返回 `None`，不是错误。
//! - 平均色按通道累加为 `u64` 后用整数运算求均值，
//!   舍入规则为“四舍六入五成双”（round-half-to-even）。

use super::{ColorSample, DisplayedImage, Rgb};

impl DisplayedImage {
    /// 读取 `(x, y)` 处颜色；坐标须满足 `0 ≤ x < width`、`0 ≤ y < height`。
    ///
    /// # 示例
    /// ```rust
    /// use color_inspector::inspector::DisplayedImage;
    /// use image::{Rgb, RgbImage};
    ///
    /// let img = DisplayedImage::new(RgbImage::from_pixel(4, 3, Rgb([255, 0, 0])));
    /// assert_eq!(img.sample(0, 0).map(|s| s.hex), Some("#FF0000".to_string()));
    /// assert!(img.sample(4, 0).is_none());
    /// ```
    pub fn sample(&self, x: i64, y: i64) -> Option<ColorSample> {
        let (width, height) = self.dimensions();
        let inside = (0..width as i64).contains(&x) && (0..height as i64).contains(&y);

        if !inside {
            log::debug!("点击坐标 ({}, {}) 超出预览图 {}x{}，忽略", x, y, width, height);
            return None;
        }

        let (x, y) = (x as u32, y as u32);
        Some(ColorSample::new(x, y, self.pixel(x, y)))
    }

    /// 全图平均色。
    pub fn average_color(&self) -> Rgb {
        let mut sums = [0u64; 3];
        for pixel in self.as_rgb_image().pixels() {
            for (sum, channel) in sums.iter_mut().zip(pixel.0) {
                *sum += channel as u64;
            }
        }

        let count = self.width() as u64 * self.height() as u64;
        let [r, g, b] = sums.map(|sum| round_half_even_div(sum, count));
        Rgb::new(r, g, b)
    }
}

/// `sum / count` 四舍六入五成双；`count` 为 0 时返回 0。
fn round_half_even_div(sum: u64, count: u64) -> u8 {
    if count == 0 {
        return 0;
    }

    let quotient = sum / count;
    let twice_remainder = (sum % count) * 2;
    let rounded = if twice_remainder > count || (twice_remainder == count && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    rounded.min(u8::MAX as u64) as u8
}
