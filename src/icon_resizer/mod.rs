//! # 图标生成模块（icon_resizer）
//!
//! ## 设计思路
//!
//! 将“读取源图 → 缩放 → 写出 PNG”按职责拆分为多个子模块：
//!
//! - `config`：路径、尺寸、滤镜等配置与默认值
//! - `error`：统一错误类型
//! - `source`：尺寸、源图、产物等数据模型
//! - `pipeline`：缩放实现
//! - `handler`：编排整条流程
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! handler.rs（run：准备目录 + 按尺寸循环）
//!    ├─ storage.rs（输出目录）
//!    ├─ source.rs（打开并解码源图）
//!    ├─ pipeline.rs（Lanczos3 缩放）
//!    └─ handler.rs（写出 PNG + 提示信息）
//! ```

mod config;
mod error;
mod handler;
mod pipeline;
mod source;

pub use config::{DEFAULT_ICON_SIZES, IconConfig, OUTPUT_DIR, SOURCE_PATH};
pub use error::IconError;
pub use handler::IconResizer;
pub use source::{GeneratedIcon, IconSize};
