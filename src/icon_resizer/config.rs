//! # 配置模块
//!
//! ## 设计思路
//!
//! 所有运行参数集中在 `IconConfig`：源图路径、输出目录、目标尺寸、缩放滤镜。
//! 可执行程序不接受任何参数，始终使用 `IconConfig::default()`。
//!
//! ## 实现思路
//!
//! - 默认值来自模块级常量，修改产物位置只需改这里。
//! - `with_*` 方法供测试与库调用方覆盖路径或尺寸。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

/// 源图片路径（相对于运行目录）。
pub const SOURCE_PATH: &str = "assets/icon_source.png";

/// 图标输出目录（相对于运行目录）。
pub const OUTPUT_DIR: &str = "icons";

/// 浏览器扩展所需的图标尺寸，按生成顺序排列。
pub const DEFAULT_ICON_SIZES: [u32; 3] = [16, 48, 128];

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图片路径。
    pub source_path: PathBuf,
    /// 输出目录，不存在时自动创建。
    pub output_dir: PathBuf,
    /// 目标边长列表（像素），依次生成。
    pub sizes: Vec<u32>,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(SOURCE_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl IconConfig {
    /// 覆盖源图片路径。
    ///
    /// # 示例
    /// ```rust
    /// use icon_resizer::icon_resizer::IconConfig;
    ///
    /// let config = IconConfig::default().with_source_path("logo.png");
    /// assert_eq!(config.source_path.to_str(), Some("logo.png"));
    /// ```
    pub fn with_source_path(mut self, path: impl AsRef<Path>) -> Self {
        self.source_path = path.as_ref().to_path_buf();
        self
    }

    /// 覆盖输出目录。
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// 覆盖目标尺寸列表。
    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// 某个尺寸对应的输出文件名，例如 `icon48.png`。
    pub fn file_name_for(size: u32) -> String {
        format!("icon{}.png", size)
    }

    /// 某个尺寸对应的完整输出路径。
    pub fn output_path_for(&self, size: u32) -> PathBuf {
        self.output_dir.join(Self::file_name_for(size))
    }
}
