//! # Color Inspector — 应用入口
//!
//! 本文件仅负责日志初始化与命令分发，业务逻辑见 `lib.rs` 架构文档。

use std::process::ExitCode;

use clap::Parser;
use color_inspector::cli::{self, CliArgs};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let json = args.json;

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("运行失败 [{}]: {}", err.code(), err);
            if json {
                let payload = serde_json::json!({ "code": err.code(), "error": err });
                println!("{}", payload);
            } else {
                eprintln!("错误：{}", err);
            }
            ExitCode::FAILURE
        }
    }
}
