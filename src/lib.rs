//! # Color Inspector (RGB/HEX) — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │            命令行 (clap)  /  HTML 报告 (report)           │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ Result<T, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  │                                                       │
//! │  └─ inspector ── InspectorSession（持有当前图片）          │
//! │      ├─ handler / loader / pipeline   上传·解码·缩放      │
//! │      ├─ sampler                       单点取色·平均色     │
//! │      ├─ grid / export                 网格取样·CSV        │
//! │      └─ color / config                HEX·亮度·配置       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`inspector`] | 图片加载、预览缩放、取色、网格取样、CSV 导出 |
//! | [`report`] | 色块与网格表格的 HTML 渲染 |
//! | [`cli`] | 命令行参数与单次会话执行 |

pub mod cli;
pub mod error;
pub mod inspector;
pub mod report;
