//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `InspectorConfig`，保证运行时行为可观测、可调整、可测试。
//! 缩放质量档位（quality / balanced / speed）作为高层语义，映射到底层滤镜。
//!
//! ## 实现思路
//!
//! - `Default` 提供与预览页面一致的参数：宽度上限 900、目标约 40 列、步长下限 4。
//! - `ResizeProfile` 负责档位字符串解析与反向输出。
//! - `InspectorSettings` 是可序列化的外部配置（JSON 文件），字段全部可选，
//!   校验通过后再覆盖到 `InspectorConfig`。

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use super::InspectError;

/// 取色流程配置。
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    /// 预览图宽度上限（像素），只缩小不放大。
    pub max_display_width: u32,
    /// 取样网格的目标列数。
    pub target_columns: u32,
    /// 网格步长下限，避免窄图出现 0 步长。
    pub min_step: u32,
    /// 降采样滤镜策略。
    pub resize_filter: FilterType,
    /// 是否优先使用 `fast_image_resize`，失败时回退 `image::imageops`。
    pub fast_resize: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            max_display_width: 900,
            target_columns: 40,
            min_step: 4,
            resize_filter: FilterType::CatmullRom,
            fast_resize: true,
        }
    }
}

/// 缩放质量档位（面向用户语义）。
///
/// - `Quality`：Lanczos3，尽量保真
/// - `Balanced`：CatmullRom（双三次）
/// - `Speed`：Triangle（双线性）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeProfile {
    Quality,
    Balanced,
    Speed,
}

impl ResizeProfile {
    /// 从外部字符串解析档位。
    ///
    /// # 示例
    /// ```rust
    /// use color_inspector::inspector::ResizeProfile;
    ///
    /// let p = ResizeProfile::parse("Balanced")?;
    /// assert_eq!(p.as_str(), "balanced");
    /// # Ok::<(), color_inspector::inspector::InspectError>(())
    /// ```
    pub fn parse(profile: &str) -> Result<Self, InspectError> {
        match profile.trim().to_lowercase().as_str() {
            "quality" => Ok(Self::Quality),
            "balanced" => Ok(Self::Balanced),
            "speed" => Ok(Self::Speed),
            other => Err(InspectError::InvalidFormat(format!(
                "未知缩放档位：{}（可选：quality / balanced / speed）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Balanced => "balanced",
            Self::Speed => "speed",
        }
    }

    pub fn filter(self) -> FilterType {
        match self {
            Self::Quality => FilterType::Lanczos3,
            Self::Balanced => FilterType::CatmullRom,
            Self::Speed => FilterType::Triangle,
        }
    }
}

impl InspectorConfig {
    /// 基于当前滤镜反推档位。
    ///
    /// 不在档位表内的滤镜（`Nearest` / `Gaussian`）按最接近的语义归类。
    pub fn infer_profile(&self) -> ResizeProfile {
        match self.resize_filter {
            FilterType::Lanczos3 | FilterType::Gaussian => ResizeProfile::Quality,
            FilterType::CatmullRom => ResizeProfile::Balanced,
            FilterType::Triangle | FilterType::Nearest => ResizeProfile::Speed,
        }
    }

    pub fn apply_profile(&mut self, profile: ResizeProfile) {
        self.resize_filter = profile.filter();
    }

    /// 将外部配置覆盖到当前配置，任一字段非法则整体不生效。
    pub fn apply_settings(&mut self, settings: &InspectorSettings) -> Result<(), InspectError> {
        let mut next = self.clone();

        if let Some(width) = settings.max_display_width {
            if width == 0 {
                return Err(InspectError::InvalidFormat(
                    "max_display_width 必须大于 0".to_string(),
                ));
            }
            next.max_display_width = width;
        }
        if let Some(columns) = settings.target_columns {
            if columns == 0 {
                return Err(InspectError::InvalidFormat(
                    "target_columns 必须大于 0".to_string(),
                ));
            }
            next.target_columns = columns;
        }
        if let Some(min_step) = settings.min_step {
            if min_step == 0 {
                return Err(InspectError::InvalidFormat("min_step 必须大于 0".to_string()));
            }
            next.min_step = min_step;
        }
        if let Some(profile) = settings.profile.as_deref() {
            next.apply_profile(ResizeProfile::parse(profile)?);
        }
        if let Some(fast_resize) = settings.fast_resize {
            next.fast_resize = fast_resize;
        }

        *self = next;
        Ok(())
    }

    /// 导出当前配置为可序列化的快照。
    pub fn to_settings(&self) -> InspectorSettings {
        InspectorSettings {
            max_display_width: Some(self.max_display_width),
            target_columns: Some(self.target_columns),
            min_step: Some(self.min_step),
            profile: Some(self.infer_profile().as_str().to_string()),
            fast_resize: Some(self.fast_resize),
        }
    }
}

/// 外部配置文件（JSON），缺省字段保持默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorSettings {
    pub max_display_width: Option<u32>,
    pub target_columns: Option<u32>,
    pub min_step: Option<u32>,
    pub profile: Option<String>,
    pub fast_resize: Option<bool>,
}

impl InspectorSettings {
    pub fn load_from_path(path: &Path) -> Result<Self, InspectError> {
        let content = fs::read_to_string(path).map_err(|e| {
            InspectError::FileSystem(format!("读取配置文件 '{}' 失败：{}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| InspectError::InvalidFormat(format!("解析配置文件失败：{}", e)))
    }
}
