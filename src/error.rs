//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError` 枚举，命令行入口统一返回 `Result<T, AppError>`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `InspectError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。
//! - 实现 `Serialize` 将错误序列化为字符串，满足 `--json` 输出要求。

use serde::Serialize;

use crate::inspector::InspectError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 取色流水线错误（加载 / 解码 / 导出）
    #[error("{0}")]
    Inspect(#[from] InspectError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件或配置项不可用
    #[error("配置错误: {0}")]
    Config(String),

    /// 命令行参数不合法
    #[error("参数错误: {0}")]
    Usage(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Inspect(err) => err.code(),
            Self::Io(_) => "IO_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Usage(_) => "USAGE_ERROR",
        }
    }
}

/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_errors_pass_through_unchanged() {
        let err = AppError::from(InspectError::Decode("坏数据".to_string()));
        assert_eq!(err.to_string(), "解码错误：坏数据");
        assert_eq!(err.code(), "DECODE_ERROR");
    }

    #[test]
    fn serializes_as_display_string() {
        let err = AppError::Usage("--pick 需要 X,Y".to_string());
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            "\"参数错误: --pick 需要 X,Y\""
        );
    }
}
