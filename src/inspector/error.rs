//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载取色链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 点击越界不是错误：取样器直接返回 `None`，这里不为它建分支。

/// 取色流程统一错误类型。
///
/// 该类型会在应用层被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// 字节无法解码为图片（含 Base64 解码失败），本次上传终止。
    #[error("解码错误：{0}")]
    Decode(String),

    /// 不是可接受的图片格式（仅 PNG / JPEG），或配置值非法。
    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("颜色值错误：{0}")]
    InvalidColor(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("导出错误：{0}")]
    Export(String),
}

impl InspectError {
    /// 稳定的错误码，供 JSON 输出与前端分支判断使用。
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "DECODE_ERROR",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::InvalidColor(_) => "INVALID_COLOR",
            Self::FileSystem(_) => "FILE_SYSTEM",
            Self::Export(_) => "EXPORT_ERROR",
        }
    }

    /// 是否属于“上传即失败”的解码类错误。
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::InvalidFormat(_))
    }
}
