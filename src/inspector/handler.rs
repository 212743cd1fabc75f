//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `ColorInspector` 只负责流程编排与配置管理，不持有任何图片状态。
//! 上传处理链路固定为：
//! 1. 读取配置快照
//! 2. 按来源加载原始字节并校验格式
//! 3. 解码、转 RGB 并缩放为预览图
//!
//! 记录 `load/decode/total` 阶段耗时，便于性能诊断。

use std::time::Instant;

use super::{
    ImageSource, InspectError, InspectorConfig, InspectorSettings, LoadedImage, ResizeProfile,
    SamplingGrid, DisplayedImage,
};

/// 取色处理器。
pub struct ColorInspector {
    config: InspectorConfig,
}

impl ColorInspector {
    /// 根据初始配置创建处理器。
    ///
    /// # 示例
    /// ```rust
    /// use color_inspector::inspector::{ColorInspector, InspectorConfig};
    ///
    /// let inspector = ColorInspector::new(InspectorConfig::default());
    /// assert_eq!(inspector.config().max_display_width, 900);
    /// ```
    pub fn new(config: InspectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn set_profile(&mut self, profile: ResizeProfile) {
        self.config.apply_profile(profile);
        log::info!(
            "⚙️ 已切换缩放档位：{}（filter={:?}）",
            profile.as_str(),
            self.config.resize_filter
        );
    }

    pub fn profile(&self) -> ResizeProfile {
        self.config.infer_profile()
    }

    pub fn apply_settings(&mut self, settings: &InspectorSettings) -> Result<(), InspectError> {
        self.config.apply_settings(settings)?;
        log::info!(
            "⚙️ 已应用配置：max_display_width={} target_columns={} min_step={} profile={}",
            self.config.max_display_width,
            self.config.target_columns,
            self.config.min_step,
            self.config.infer_profile().as_str()
        );
        Ok(())
    }

    /// 处理主入口：加载、解码并生成预览图。
    pub fn load(&self, source: ImageSource) -> Result<LoadedImage, InspectError> {
        let config = self.config.clone();
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_source(source)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let loaded = self.decode_for_display(raw, &config)?;
        let decode_elapsed = decode_start.elapsed();

        log::info!(
            "✅ 图片处理完成 - load={}ms decode={}ms total={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(loaded)
    }

    /// 按当前配置在预览图上生成取样网格。
    pub fn sampling_grid(&self, image: &DisplayedImage) -> SamplingGrid {
        SamplingGrid::build(image, self.config.target_columns, self.config.min_step)
    }
}

impl Default for ColorInspector {
    fn default() -> Self {
        Self::new(InspectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn create_jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 255) as u8, (y % 255) as u8, 90])
        });
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, ImageFormat::Jpeg)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    #[test]
    fn load_jpeg_and_build_grid() {
        let inspector = ColorInspector::default();
        let loaded = inspector
            .load(ImageSource::from_bytes("wide.jpeg", create_jpeg_bytes(1600, 1200)))
            .expect("jpeg should load");

        assert_eq!(loaded.displayed.dimensions(), (900, 675));
        let grid = inspector.sampling_grid(&loaded.displayed);
        assert_eq!(grid.step, 23);
    }

    #[test]
    fn settings_change_grid_density() {
        let mut inspector = ColorInspector::default();
        inspector
            .apply_settings(&InspectorSettings {
                target_columns: Some(10),
                ..Default::default()
            })
            .unwrap();

        let image = DisplayedImage::new(RgbImage::new(100, 20));
        assert_eq!(inspector.sampling_grid(&image).step, 10);
    }

    #[test]
    fn profile_switch_is_observable() {
        let mut inspector = ColorInspector::default();
        inspector.set_profile(ResizeProfile::Quality);
        assert_eq!(inspector.profile(), ResizeProfile::Quality);
    }

    #[test]
    fn rejects_gif_upload() {
        let inspector = ColorInspector::default();
        let result = inspector.load(ImageSource::from_bytes("anim.gif", b"GIF89a\x01\x00\x01\x00".to_vec()));
        assert!(matches!(result, Err(InspectError::InvalidFormat(_))));
    }
}
