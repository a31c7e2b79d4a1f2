//! 图标输出目录管理模块
//!
//! # 设计思路
//!
//! 统一负责输出目录的准备：目录不存在时连同父目录一起创建，已存在时不做任何事。
//!
//! # 实现思路
//!
//! - 路径上已有同名文件（非目录）时直接返回 `OutputNotADirectory`，
//!   而不是交给 `create_dir_all` 报出含糊的 I/O 错误。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::fs;
use std::path::{Path, PathBuf};

use crate::icon_resizer::IconError;

/// 确保输出目录存在。
///
/// # 返回
/// - `Ok(PathBuf)` — 可写入的输出目录
/// - `Err(IconError::OutputNotADirectory)` — 路径被非目录条目占用
/// - `Err(IconError::OutputDirectory)` — 创建失败（权限等）
pub fn ensure_dir(dir: &Path) -> Result<PathBuf, IconError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(IconError::OutputNotADirectory(dir.to_path_buf()));
        }
        return Ok(dir.to_path_buf());
    }

    fs::create_dir_all(dir).map_err(|source| IconError::OutputDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    log::info!("📁 已创建输出目录：{}", dir.display());

    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_resizer::test_support::TestDir;

    #[test]
    fn creates_missing_nested_directories() {
        let root = TestDir::new("storage-nested");
        let target = root.path().join("a").join("b").join("icons");

        let created = ensure_dir(&target).expect("directory should be created");
        assert_eq!(created, target);
        assert!(target.is_dir());
    }

    #[test]
    fn existing_directory_is_noop() {
        let root = TestDir::new("storage-existing");
        let marker = root.path().join("keep.txt");
        fs::write(&marker, "x").expect("write marker");

        ensure_dir(root.path()).expect("existing dir is fine");
        ensure_dir(root.path()).expect("second call is fine");
        assert!(marker.exists());
    }

    #[test]
    fn regular_file_in_the_way_is_rejected() {
        let root = TestDir::new("storage-file");
        let blocker = root.path().join("icons");
        fs::write(&blocker, "not a dir").expect("write blocker");

        let result = ensure_dir(&blocker);
        assert!(matches!(result, Err(IconError::OutputNotADirectory(p)) if p == blocker));
    }
}
