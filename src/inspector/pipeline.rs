//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGB → 预览图”的过程集中管理。
//! 预览宽度有上限且只缩小不放大，宽高按同一比例缩放以保持纵横比。
//!
//! ## 实现思路
//!
//! 1. 按加载阶段识别出的格式完整解码
//! 2. 强制转换为 3 通道 RGB（丢弃 alpha）
//! 3. `ratio = min(1, max_display_width / width)`，新尺寸四舍五入且不小于 1
//! 4. 优先 `fast_image_resize` 卷积缩放，失败回退 `image::imageops::resize`

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{GenericImageView, RgbImage};

use super::source::RawImageData;
use super::{ColorInspector, DisplayedImage, InspectError, InspectorConfig, LoadedImage};

/// 计算预览尺寸。
///
/// # 示例
/// ```rust
/// use color_inspector::inspector::display_dimensions;
///
/// assert_eq!(display_dimensions(1600, 1200, 900), (900, 675));
/// assert_eq!(display_dimensions(640, 480, 900), (640, 480));
/// ```
pub fn display_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    let max_width = max_width.max(1);
    if width <= max_width {
        return (width, height);
    }

    let ratio = (max_width as f64 / width as f64).min(1.0);
    let scaled = |side: u32| ((side as f64 * ratio).round() as u32).max(1);

    (scaled(width).min(max_width), scaled(height))
}

impl ColorInspector {
    /// 将原始字节解码为预览图。
    pub(super) fn decode_for_display(
        &self,
        raw: RawImageData,
        config: &InspectorConfig,
    ) -> Result<LoadedImage, InspectError> {
        let decoded = image::load_from_memory_with_format(&raw.bytes, raw.format)
            .map_err(|e| InspectError::Decode(format!("图片解码失败：{}", e)))?;

        let (original_width, original_height) = decoded.dimensions();
        if original_width == 0 || original_height == 0 {
            return Err(InspectError::Decode("图片尺寸为 0".to_string()));
        }

        let rgb = decoded.into_rgb8();
        let pixels = Self::resize_for_display(rgb, config)?;

        log::info!(
            "✅ 图片解码成功 - 来源: {} 格式: {:?} 原始尺寸: {}x{} 预览尺寸: {}x{}",
            raw.source_hint,
            raw.format,
            original_width,
            original_height,
            pixels.width(),
            pixels.height()
        );

        Ok(LoadedImage {
            file_name: raw.file_name,
            original_width,
            original_height,
            displayed: DisplayedImage::new(pixels),
        })
    }

    fn resize_for_display(rgb: RgbImage, config: &InspectorConfig) -> Result<RgbImage, InspectError> {
        let (width, height) = rgb.dimensions();
        let (target_width, target_height) =
            display_dimensions(width, height, config.max_display_width);

        if (target_width, target_height) == (width, height) {
            return Ok(rgb);
        }

        log::info!(
            "🧩 预览降采样：{}x{} -> {}x{}（filter={:?}）",
            width,
            height,
            target_width,
            target_height,
            config.resize_filter
        );

        if !config.fast_resize {
            return Ok(image::imageops::resize(
                &rgb,
                target_width,
                target_height,
                config.resize_filter,
            ));
        }

        match Self::resize_with_fast_image_resize(&rgb, target_width, target_height, config.resize_filter) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 降采样失败，回退 image::imageops::resize：{}", err);
                Ok(image::imageops::resize(
                    &rgb,
                    target_width,
                    target_height,
                    config.resize_filter,
                ))
            }
        }
    }

    fn resize_with_fast_image_resize(
        rgb: &RgbImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbImage, InspectError> {
        let (src_width, src_height) = rgb.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            rgb.as_raw().clone(),
            fr::PixelType::U8x3,
        )
        .map_err(|e| InspectError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x3);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| InspectError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbImage::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| InspectError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::ImageSource;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn create_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            let r = (x % 255) as u8;
            let g = (y % 255) as u8;
            let b = ((x + y) % 255) as u8;
            Rgba([r, g, b, 128])
        });

        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    fn decode(inspector: &ColorInspector, png: Vec<u8>) -> LoadedImage {
        let raw = inspector
            .load_source(ImageSource::from_bytes("test.png", png))
            .expect("load should succeed");
        inspector
            .decode_for_display(raw, inspector.config())
            .expect("decode pipeline should succeed")
    }

    #[test]
    fn display_dimensions_never_upscale() {
        assert_eq!(display_dimensions(900, 600, 900), (900, 600));
        assert_eq!(display_dimensions(1, 1, 900), (1, 1));
        assert_eq!(display_dimensions(1800, 1001, 900), (900, 501));
    }

    #[test]
    fn display_dimensions_keep_degenerate_height_visible() {
        assert_eq!(display_dimensions(10_000, 1, 900), (900, 1));
    }

    #[test]
    fn large_image_is_downscaled_to_preview_width() {
        let inspector = ColorInspector::new(InspectorConfig::default());
        let loaded = decode(&inspector, create_png_bytes(1600, 1200));

        assert_eq!((loaded.original_width, loaded.original_height), (1600, 1200));
        assert_eq!(loaded.displayed.dimensions(), (900, 675));
        assert_eq!(loaded.file_name, "test.png");
    }

    #[test]
    fn small_image_keeps_exact_pixels_and_drops_alpha() {
        let inspector = ColorInspector::new(InspectorConfig::default());
        let loaded = decode(&inspector, create_png_bytes(300, 200));

        assert_eq!(loaded.displayed.dimensions(), (300, 200));
        let rgb = loaded.displayed.pixel(17, 42);
        assert_eq!((rgb.r, rgb.g, rgb.b), (17, 42, 59));
    }

    #[test]
    fn image_crate_resize_path_matches_dimensions() {
        let mut config = InspectorConfig::default();
        config.fast_resize = false;
        let inspector = ColorInspector::new(config);
        let loaded = decode(&inspector, create_png_bytes(1000, 500));

        assert_eq!(loaded.displayed.dimensions(), (900, 450));
    }

    #[test]
    fn truncated_png_is_decode_error() {
        let inspector = ColorInspector::new(InspectorConfig::default());
        let mut png = create_png_bytes(64, 64);
        png.truncate(png.len() / 2);

        let raw = inspector
            .load_source(ImageSource::from_bytes("broken.png", png))
            .expect("signature is still png");
        let result = inspector.decode_for_display(raw, inspector.config());
        assert!(matches!(result, Err(InspectError::Decode(_))));
    }
}
