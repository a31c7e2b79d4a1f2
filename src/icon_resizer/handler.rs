//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconResizer` 只负责流程编排：
//! 1. 准备输出目录
//! 2. 按配置顺序逐个尺寸：打开源图 → 缩放 → 写出 PNG → 输出提示
//!
//! ## 实现思路
//!
//! - 每个尺寸独立打开一次源图，`SourceImage` 在 `resize_icon` 结束时释放。
//! - 第一个失败即终止整次运行，已写出的图标保留在磁盘上（非事务）。
//! - 记录 `load/resize/save/total` 阶段耗时，便于诊断。

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, ImageFormat};

use super::source::{GeneratedIcon, IconSize, SourceImage};
use super::{IconConfig, IconError};
use crate::storage;

/// 图标生成器。
pub struct IconResizer {
    config: IconConfig,
}

impl IconResizer {
    /// 根据配置创建生成器。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use icon_resizer::icon_resizer::{IconConfig, IconResizer};
    ///
    /// let resizer = IconResizer::new(IconConfig::default());
    /// let mut stdout = std::io::stdout();
    /// resizer.run(&mut stdout)?;
    /// # Ok::<(), icon_resizer::icon_resizer::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 确保输出目录存在（含父目录），已存在时为空操作。
    pub fn ensure_output_directory(&self) -> Result<(), IconError> {
        storage::ensure_dir(&self.config.output_dir)?;
        Ok(())
    }

    /// 生成单个 `size × size` 图标，写入 `icon{size}.png` 并向 `out` 输出一行提示。
    pub fn resize_icon<W: Write>(
        &self,
        size: u32,
        out: &mut W,
    ) -> Result<GeneratedIcon, IconError> {
        let size = IconSize::new(size)?;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = SourceImage::open(&self.config.source_path)?;
        let load_elapsed = load_start.elapsed();

        let resize_start = Instant::now();
        let resized = Self::resize_square(&source, size, self.config.resize_filter)?;
        let resize_elapsed = resize_start.elapsed();

        let path = self.config.output_path_for(size.get());
        let save_start = Instant::now();
        Self::save_png(&resized, &path)?;
        let save_elapsed = save_start.elapsed();

        let (src_width, src_height) = source.dimensions();
        drop(source);

        let icon = GeneratedIcon { size, path };
        writeln!(out, "Generated {}", icon.file_name()).map_err(IconError::Console)?;

        log::info!(
            "✅ 图标生成完成 - {}x{} -> {} {} load={}ms resize={}ms save={}ms total={}ms",
            src_width,
            src_height,
            size,
            icon.path.display(),
            load_elapsed.as_millis(),
            resize_elapsed.as_millis(),
            save_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(icon)
    }

    /// 处理主入口：准备目录后按配置顺序生成全部图标。
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<GeneratedIcon>, IconError> {
        self.run_with_hook(out, |_| {})
    }

    /// 与 `run` 相同，但每写出一个图标后调用一次 `after_each`。
    pub fn run_with_hook<W, F>(
        &self,
        out: &mut W,
        mut after_each: F,
    ) -> Result<Vec<GeneratedIcon>, IconError>
    where
        W: Write,
        F: FnMut(&GeneratedIcon),
    {
        self.ensure_output_directory()?;

        log::info!(
            "🖼️ 开始生成图标 - 源图: {} 输出目录: {} 尺寸: {:?}",
            self.config.source_path.display(),
            self.config.output_dir.display(),
            self.config.sizes
        );

        let mut generated = Vec::with_capacity(self.config.sizes.len());
        for &size in &self.config.sizes {
            let icon = self.resize_icon(size, out)?;
            after_each(&icon);
            generated.push(icon);
        }

        out.flush().map_err(IconError::Console)?;
        Ok(generated)
    }

    fn save_png(icon: &DynamicImage, path: &Path) -> Result<(), IconError> {
        icon.save_with_format(path, ImageFormat::Png)
            .map_err(|source| IconError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_resizer::test_support::{TestDir, write_png};

    fn resizer_in(dir: &TestDir) -> IconResizer {
        let source = dir.path().join("source.png");
        write_png(&source, 64, 64);
        IconResizer::new(
            IconConfig::default()
                .with_source_path(source)
                .with_output_dir(dir.path().join("icons")),
        )
    }

    #[test]
    fn resize_icon_writes_file_and_message() {
        let dir = TestDir::new("handler-single");
        let resizer = resizer_in(&dir);
        resizer.ensure_output_directory().expect("dir should be created");

        let mut out = Vec::<u8>::new();
        let icon = resizer.resize_icon(48, &mut out).expect("resize should succeed");

        assert_eq!(icon.size.get(), 48);
        assert_eq!(icon.path, dir.path().join("icons").join("icon48.png"));
        assert_eq!(String::from_utf8(out).expect("utf8"), "Generated icon48.png\n");

        let written = image::open(&icon.path).expect("output should decode");
        assert_eq!((written.width(), written.height()), (48, 48));
    }

    #[test]
    fn resize_icon_rejects_zero_size_without_touching_disk() {
        let dir = TestDir::new("handler-zero");
        let resizer = resizer_in(&dir);
        resizer.ensure_output_directory().expect("dir should be created");

        let mut out = Vec::<u8>::new();
        let result = resizer.resize_icon(0, &mut out);

        assert!(matches!(result, Err(IconError::InvalidSize(0))));
        assert!(out.is_empty());
        assert!(!dir.path().join("icons").join("icon0.png").exists());
    }

    #[test]
    fn resize_icon_into_missing_directory_reports_encode_error() {
        let dir = TestDir::new("handler-no-dir");
        let resizer = resizer_in(&dir);

        let mut out = Vec::<u8>::new();
        let result = resizer.resize_icon(16, &mut out);

        assert!(matches!(result, Err(IconError::Encode { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn run_reports_generated_icons_in_order() {
        let dir = TestDir::new("handler-run");
        let resizer = resizer_in(&dir);

        let mut out = Vec::<u8>::new();
        let mut seen = Vec::new();
        let icons = resizer
            .run_with_hook(&mut out, |icon| seen.push(icon.size.get()))
            .expect("run should succeed");

        assert_eq!(seen, vec![16, 48, 128]);
        let names: Vec<String> = icons.iter().map(GeneratedIcon::file_name).collect();
        assert_eq!(names, vec!["icon16.png", "icon48.png", "icon128.png"]);
    }
}
