//! # 浏览器扩展图标生成工具 — 应用入口
//!
//! 无命令行参数，路径与尺寸均取自 `IconConfig::default()`。

use std::error::Error;
use std::process::ExitCode;

use icon_resizer::icon_resizer::{IconConfig, IconResizer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let resizer = IconResizer::new(IconConfig::default());
    let mut stdout = std::io::stdout().lock();

    match resizer.run(&mut stdout) {
        Ok(icons) => {
            log::info!("🎉 共生成 {} 个图标", icons.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let mut report = err.to_string();
            let mut cause = err.source();
            while let Some(inner) = cause {
                report.push_str(&format!("\n  caused by: {}", inner));
                cause = inner.source();
            }
            log::error!("❌ 图标生成失败: {}", report);
            eprintln!("Error: {}", report);
            ExitCode::FAILURE
        }
    }
}
