//! # 缩放流水线模块
//!
//! ## 设计思路
//!
//! 优先使用 `fast_image_resize` 的卷积缩放（SIMD 加速），目标图与源图保持相同的
//! 颜色类型；遇到其不支持的像素格式时回退到 `image::DynamicImage::resize_exact`。
//!
//! ## 实现思路
//!
//! 1. 按源图颜色类型创建 `size × size` 的目标图
//! 2. 用与 `image` 滤镜等价的 `fast_image_resize` 滤镜执行缩放
//! 3. 失败时记录告警并回退，两条路径输出尺寸一致（不保持宽高比）

use fast_image_resize as fr;
use image::DynamicImage;
use image::imageops::FilterType;

use super::source::{IconSize, SourceImage};
use super::{IconError, IconResizer};

impl IconResizer {
    /// 将源图缩放为 `size × size`，颜色类型与源图一致。
    pub(crate) fn resize_square(
        source: &SourceImage,
        size: IconSize,
        filter: FilterType,
    ) -> Result<DynamicImage, IconError> {
        let side = size.get();
        let (width, height) = source.dimensions();

        if width == 0 || height == 0 {
            return Err(IconError::Resize(format!(
                "源图片尺寸为空：{}x{}",
                width, height
            )));
        }

        let resized = match Self::resize_with_fast_image_resize(source.image(), side, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                    err
                );
                source.image().resize_exact(side, side, filter)
            }
        };

        if resized.width() != side || resized.height() != side {
            return Err(IconError::Resize(format!(
                "输出尺寸异常：期望 {}，实际 {}x{}",
                size,
                resized.width(),
                resized.height()
            )));
        }

        log::debug!(
            "🧩 缩放：{} {}x{} -> {}（color={:?}, filter={:?}）",
            source.path().display(),
            width,
            height,
            size,
            source.color(),
            filter
        );

        Ok(resized)
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        side: u32,
        filter: FilterType,
    ) -> Result<DynamicImage, IconError> {
        let mut dst_image = DynamicImage::new(side, side, image.color());

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        Ok(dst_image)
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
