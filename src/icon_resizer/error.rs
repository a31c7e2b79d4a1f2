//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源。
//! 底层 `image` / `std::io` 错误作为 `source` 保留，便于在入口打印完整错误链。

use std::path::PathBuf;

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图片不存在：{}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("源图片解码失败：{}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("输出路径已存在且不是目录：{}", .0.display())]
    OutputNotADirectory(PathBuf),

    #[error("创建输出目录失败：{}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无效的图标尺寸：{0}（必须大于 0）")]
    InvalidSize(u32),

    #[error("缩放失败：{0}")]
    Resize(String),

    #[error("写入图标失败：{}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("输出提示信息失败")]
    Console(#[source] std::io::Error),
}
