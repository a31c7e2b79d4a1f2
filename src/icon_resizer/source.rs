//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“配置中的尺寸”“已解码的源图”“已写出的图标”拆成独立类型：
//! - `IconSize` 表示经过校验的目标边长
//! - `SourceImage` 表示一次打开并解码的源图，离开作用域即释放
//! - `GeneratedIcon` 表示已写入磁盘的产物

use std::fmt;
use std::path::{Path, PathBuf};

use image::{ColorType, DynamicImage, ImageReader};

use super::IconError;

/// 目标图标边长（像素），保证大于 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconSize(u32);

impl IconSize {
    pub fn new(size: u32) -> Result<Self, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }
        Ok(Self(size))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// 已解码的源图片。
///
/// 文件句柄在 `open` 返回前关闭，像素数据随值一起在作用域结束时释放，
/// 无论调用方是正常返回还是通过 `?` 提前返回。
pub(crate) struct SourceImage {
    image: DynamicImage,
    path: PathBuf,
}

impl SourceImage {
    /// 打开并解码源图片，格式按文件内容猜测。
    pub(crate) fn open(path: &Path) -> Result<Self, IconError> {
        if !path.exists() {
            return Err(IconError::SourceNotFound(path.to_path_buf()));
        }

        let decode_error = |source: image::ImageError| IconError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_error)?;

        Ok(Self {
            image,
            path: path.to_path_buf(),
        })
    }

    pub(crate) fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    pub(crate) fn color(&self) -> ColorType {
        self.image.color()
    }
}

/// 一次成功写出的图标。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// 图标边长。
    pub size: IconSize,
    /// 写入的文件路径。
    pub path: PathBuf,
}

impl GeneratedIcon {
    /// 文件名部分，例如 `icon16.png`。
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
