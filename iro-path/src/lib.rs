use std::path::{Path, PathBuf};

/// 目录数据相关路径常量
pub const CATALOG_DATA_DIR: &str = "data";
pub const CATALOG_FILE_NAME: &str = "data.csv";
pub const RESOURCE_DIR: &str = "resources";

/// 获取可执行文件所在目录
fn exe_dir() -> Result<PathBuf, String> {
    let exe_path =
        std::env::current_exe().map_err(|e| format!("无法获取可执行文件路径: {}", e))?;
    exe_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| "无法获取可执行文件父目录".to_string())
}

/// 判断给定程序目录是否为便携布局
///
/// 检测逻辑：目录下是否存在 resources/data/data.csv
pub fn is_portable_dir(exe_dir: &Path) -> bool {
    let portable_data_dir = exe_dir.join(RESOURCE_DIR).join(CATALOG_DATA_DIR);
    let portable_catalog = portable_data_dir.join(CATALOG_FILE_NAME);
    portable_data_dir.exists() && portable_catalog.exists()
}

/// 判断是否处于便携模式
pub fn is_portable_mode() -> bool {
    exe_dir().map(|dir| is_portable_dir(&dir)).unwrap_or(false)
}

/// 根据程序目录选择基础数据目录
///
/// 便携布局下为 `exe_dir/resources`，否则调用 `system_dir` 取系统应用数据目录。
pub fn base_data_dir_in<F>(exe_dir: &Path, system_dir: F) -> Result<PathBuf, String>
where
    F: FnOnce() -> Result<PathBuf, String>,
{
    if is_portable_dir(exe_dir) {
        Ok(exe_dir.join(RESOURCE_DIR))
    } else {
        system_dir()
    }
}

/// 获取基础数据目录
pub fn get_base_data_dir() -> Result<PathBuf, String> {
    base_data_dir_in(&exe_dir()?, get_system_data_dir)
}

/// 获取系统数据目录（跨平台）
fn get_system_data_dir() -> Result<PathBuf, String> {
    use directories::BaseDirs;

    let base_dirs = BaseDirs::new().ok_or_else(|| "无法获取系统目录信息".to_string())?;

    #[cfg(any(target_os = "windows", target_os = "macos"))]
    {
        Ok(base_dirs.data_dir().join("com.iropedia.app"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        Ok(base_dirs.data_dir().join("iropedia"))
    }
}

/// 基础目录下的可写目录文件位置
pub fn catalog_path_in(base_dir: &Path) -> PathBuf {
    base_dir.join(CATALOG_DATA_DIR).join(CATALOG_FILE_NAME)
}

/// 程序目录下随包分发的只读模板位置
pub fn template_path_in(exe_dir: &Path) -> PathBuf {
    exe_dir.join(RESOURCE_DIR).join(CATALOG_FILE_NAME)
}

/// 获取可写目录文件路径
pub fn get_catalog_path() -> Result<PathBuf, String> {
    Ok(catalog_path_in(&get_base_data_dir()?))
}

/// 获取只读模板路径
pub fn get_template_path() -> Result<PathBuf, String> {
    Ok(template_path_in(&exe_dir()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn portable_layout_requires_catalog_file() {
        let dir = TempDir::new().unwrap();
        assert!(!is_portable_dir(dir.path()));

        let data_dir = dir.path().join(RESOURCE_DIR).join(CATALOG_DATA_DIR);
        fs::create_dir_all(&data_dir).unwrap();
        assert!(!is_portable_dir(dir.path()));

        fs::write(data_dir.join(CATALOG_FILE_NAME), "header\n").unwrap();
        assert!(is_portable_dir(dir.path()));
    }

    #[test]
    fn base_dir_follows_portable_layout() {
        let dir = TempDir::new().unwrap();
        let system = dir.path().join("system");
        let from_system = || Ok(system.clone());

        assert_eq!(base_data_dir_in(dir.path(), from_system).unwrap(), system);

        let data_dir = dir.path().join(RESOURCE_DIR).join(CATALOG_DATA_DIR);
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join(CATALOG_FILE_NAME), "header\n").unwrap();
        assert_eq!(
            base_data_dir_in(dir.path(), from_system).unwrap(),
            dir.path().join(RESOURCE_DIR)
        );
    }

    #[test]
    fn template_and_catalog_live_in_different_places() {
        let base = Path::new("/opt/iropedia");
        assert_eq!(
            template_path_in(base),
            Path::new("/opt/iropedia/resources/data.csv")
        );
        assert_eq!(
            catalog_path_in(&base.join(RESOURCE_DIR)),
            Path::new("/opt/iropedia/resources/data/data.csv")
        );
    }
}
