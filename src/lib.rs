//! # 浏览器扩展图标生成工具 — 库入口
//!
//! 将一张源图片缩放为 16 / 48 / 128 像素的正方形 PNG，写入固定输出目录。
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`icon_resizer`] | 配置、错误类型、源图解码、缩放与写出编排 |
//! | [`storage`] | 输出目录的检查与自动创建 |

pub mod icon_resizer;
pub mod storage;
