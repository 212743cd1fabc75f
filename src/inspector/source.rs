//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入类型”和“流水线中间结果”解耦：
//! - `ImageSource` 表示上传来源语义
//! - `RawImageData` 表示已加载、已识别格式但未解码的字节

use std::path::PathBuf;

use image::ImageFormat;

/// 图片上传来源。
pub enum ImageSource {
    /// 上传控件交来的原始字节与文件名。
    Bytes { file_name: String, bytes: Vec<u8> },
    /// Base64（支持 Data URL 与纯 Base64 字符串）。
    Base64 { file_name: String, data: String },
    /// 本地文件路径。
    FilePath(PathBuf),
}

impl ImageSource {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::Bytes {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::FilePath(path.into())
    }
}

/// 加载阶段输出：原始字节、识别出的格式与来源标识。
pub(crate) struct RawImageData {
    pub(crate) bytes: Vec<u8>,
    pub(crate) format: ImageFormat,
    /// 原始文件名（用于导出文件命名）。
    pub(crate) file_name: String,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: &'static str,
}
