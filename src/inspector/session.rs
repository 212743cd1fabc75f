//! # 会话模块
//!
//! ## 设计思路
//!
//! 每个会话显式持有“当前已加载的图片”，替代整脚本重跑的隐式状态：
//! - 上传：解码 + 缩放一次，缓存预览图
//! - 点击：对缓存的预览图单点取样
//! - 下载：在缓存的预览图上网格取样并序列化为 CSV
//!
//! 未上传图片时所有查询返回 `None`（提示先上传），而不是错误。

use super::{
    ColorInspector, ColorSample, CsvExport, ImageSource, InspectError, LoadedImage, Rgb,
    SamplingGrid,
};

/// 单用户会话，独占当前图片。
pub struct InspectorSession {
    inspector: ColorInspector,
    current: Option<LoadedImage>,
}

impl InspectorSession {
    pub fn new(inspector: ColorInspector) -> Self {
        Self {
            inspector,
            current: None,
        }
    }

    /// 上传新图片。旧图片先被丢弃，失败时会话保持为空。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use color_inspector::inspector::{ImageSource, InspectorSession};
    ///
    /// let mut session = InspectorSession::default();
    /// let loaded = session.upload(ImageSource::from_path("photo.png"))?;
    /// println!("{}", loaded.caption());
    /// # Ok::<(), color_inspector::inspector::InspectError>(())
    /// ```
    pub fn upload(&mut self, source: ImageSource) -> Result<&LoadedImage, InspectError> {
        self.current = None;

        match self.inspector.load(source) {
            Ok(loaded) => Ok(&*self.current.insert(loaded)),
            Err(err) => {
                log::error!("❌ 上传失败，已清空当前图片：{}", err);
                Err(err)
            }
        }
    }

    pub fn current(&self) -> Option<&LoadedImage> {
        self.current.as_ref()
    }

    /// 点击取色；无图片或越界时返回 `None`。
    pub fn click(&self, x: i64, y: i64) -> Option<ColorSample> {
        self.current.as_ref()?.displayed.sample(x, y)
    }

    pub fn average_color(&self) -> Option<Rgb> {
        self.current
            .as_ref()
            .map(|loaded| loaded.displayed.average_color())
    }

    pub fn sampling_grid(&self) -> Option<SamplingGrid> {
        self.current
            .as_ref()
            .map(|loaded| self.inspector.sampling_grid(&loaded.displayed))
    }

    /// 生成本次下载的 CSV。
    pub fn export_csv(&self) -> Result<Option<CsvExport>, InspectError> {
        let Some(loaded) = self.current.as_ref() else {
            return Ok(None);
        };

        let grid = self.inspector.sampling_grid(&loaded.displayed);
        let export = CsvExport::from_grid(&loaded.file_name, &grid)?;
        log::debug!(
            "导出 CSV - 文件名: {} 行数: {} 字节: {}",
            export.file_name,
            export.rows,
            export.as_bytes().len()
        );
        Ok(Some(export))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Default for InspectorSession {
    fn default() -> Self {
        Self::new(ColorInspector::default())
    }
}
