//! # 取色模块（inspector）
//!
//! ## 设计思路
//!
//! 该模块将“上传加载 → 解码缩放 → 点击取色 → 平均色 → 网格取样 → CSV 导出”
//! 按职责拆分为多个子模块，每个子模块都是无副作用的纯计算，
//! 唯一的状态（当前图片）由 `session` 显式持有。
//!
//! - `session`：承载会话状态（`InspectorSession`）
//! - `handler`：编排上传流水线，记录阶段耗时
//! - `loader`：负责字节/Base64/文件加载与格式校验
//! - `pipeline`：负责解码、转 RGB、降采样
//! - `sampler`：单点取样与平均色
//! - `grid`：网格步长与格点取样
//! - `export`：CSV 序列化与文件命名
//! - `color/config/error/source/displayed`：颜色工具、配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! 上传 / 点击 / 下载
//!    ↓
//! session.rs（持有 LoadedImage）
//!    ↓
//! handler.rs（配置快照 + 阶段耗时日志）
//!    ├─ loader.rs（来源加载 + PNG/JPEG 签名校验）
//!    └─ pipeline.rs（解码 + RGB + 降采样）
//!    ↓
//! displayed.rs（DisplayedImage）
//!    ├─ sampler.rs（单点 / 平均色）
//!    └─ grid.rs → export.rs（网格 / CSV）
//! ```

mod color;
mod config;
mod displayed;
mod error;
mod export;
mod grid;
mod handler;
mod loader;
mod pipeline;
mod sampler;
mod session;
mod source;

pub use color::{
    LUMINANCE_THRESHOLD, Rgb, TextColor, contrast_text_color, parse_hex, text_color_for_luminance,
    to_hex_upper,
};
pub use config::{InspectorConfig, InspectorSettings, ResizeProfile};
pub use displayed::{ColorSample, DisplayedImage, LoadedImage};
pub use error::InspectError;
pub use export::{CSV_HEADER, CSV_MIME, CsvExport, export_file_name, write_csv};
pub use grid::{SamplingGrid, axis_coordinates, grid_step};
pub use handler::ColorInspector;
pub use pipeline::display_dimensions;
pub use session::InspectorSession;
pub use source::ImageSource;
