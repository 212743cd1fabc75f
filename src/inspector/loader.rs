//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理不同来源（上传字节 / Base64 / 本地文件）的原始字节加载，
//! 并在解码之前用文件签名校验格式，只接受 PNG 与 JPEG。
//! 目标是尽快失败，不进入解码阶段。
//!
//! ## 实现思路
//!
//! - 字节：直接做签名校验。
//! - Base64：Data URL 前缀剥离 + 解码 + 签名校验。
//! - 文件：读取 + 签名校验，文件名取路径最后一段。
//! - 不设体积上限，预览阶段的降采样是唯一的尺寸控制。

use base64::{Engine as _, engine::general_purpose};
use image::ImageFormat;
use std::path::Path;

use super::source::{ImageSource, RawImageData};
use super::{ColorInspector, InspectError};

impl ColorInspector {
    pub(super) fn load_source(&self, source: ImageSource) -> Result<RawImageData, InspectError> {
        match source {
            ImageSource::Bytes { file_name, bytes } => Self::load_from_bytes(file_name, bytes),
            ImageSource::Base64 { file_name, data } => Self::load_from_base64(file_name, &data),
            ImageSource::FilePath(path) => Self::load_from_file(&path),
        }
    }

    fn load_from_bytes(file_name: String, bytes: Vec<u8>) -> Result<RawImageData, InspectError> {
        log::info!("📥 接收上传图片 - 文件名: {} 大小: {} 字节", file_name, bytes.len());

        let format = Self::detect_accepted_format(&bytes)?;
        Ok(RawImageData {
            bytes,
            format,
            file_name,
            source_hint: "upload",
        })
    }

    fn load_from_base64(file_name: String, data: &str) -> Result<RawImageData, InspectError> {
        log::info!("📝 开始处理 base64 图片 - 文件名: {}", file_name);

        let bytes = Self::parse_base64(data)?;
        let format = Self::detect_accepted_format(&bytes)?;
        Ok(RawImageData {
            bytes,
            format,
            file_name,
            source_hint: "base64",
        })
    }

    fn load_from_file(path: &Path) -> Result<RawImageData, InspectError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| {
            InspectError::FileSystem(format!("无法读取图片文件 '{}'：{}", path.display(), e))
        })?;
        let format = Self::detect_accepted_format(&bytes)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(RawImageData {
            bytes,
            format,
            file_name,
            source_hint: "file",
        })
    }

    /// 解析 Base64，兼容 `data:image/...;base64,` 前缀。
    pub(crate) fn parse_base64(data: &str) -> Result<Vec<u8>, InspectError> {
        let normalized = data.trim();

        let payload = if normalized.starts_with("data:") {
            let base64_start = normalized
                .find(";base64,")
                .ok_or_else(|| InspectError::InvalidFormat("缺少 base64 标记".to_string()))?;
            &normalized[base64_start + 8..]
        } else {
            normalized
        };

        general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| InspectError::Decode(format!("Base64 解码失败：{}", e)))
    }

    /// 通过文件签名（magic bytes）识别格式，仅放行 PNG / JPEG。
    fn detect_accepted_format(bytes: &[u8]) -> Result<ImageFormat, InspectError> {
        if bytes.is_empty() {
            return Err(InspectError::InvalidFormat("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| InspectError::InvalidFormat("无法识别图片类型".to_string()))?;

        match kind.mime_type() {
            "image/png" => Ok(ImageFormat::Png),
            "image/jpeg" => Ok(ImageFormat::Jpeg),
            other => Err(InspectError::InvalidFormat(format!(
                "不支持的文件类型：{}（仅支持 PNG / JPG / JPEG）",
                other
            ))),
        }
    }
}
