//! Tauri 桌面外壳
//!
//! 把目录接口注册为前端可调用的 commands。目录与展示状态各自放在
//! Mutex 中由 Tauri 托管，所有调用因此串行执行。

use std::collections::BTreeMap;
use std::path::PathBuf;

use parking_lot::Mutex;
use tauri::{AppHandle, Manager, State};
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};
use uuid::Uuid;

use crate::catalog::CatalogService;
use crate::entity::Entry;
use crate::shell::{ActiveView, ShellState};
use crate::utils::fs::{CatalogPaths, CATALOG_FILE_NAME, RESOURCE_DIR};
use crate::utils::logs::{self, LogLevel};

// ==================== 路径解析（使用 Tauri API） ====================

/// 基础数据目录：便携模式下为资源目录/resources，否则为应用数据目录
fn get_base_data_dir(app: &AppHandle) -> Result<PathBuf, String> {
    let resource_dir = app
        .path()
        .resource_dir()
        .map_err(|e| format!("无法获取应用目录: {}", e))?;

    iro_path::base_data_dir_in(&resource_dir, || {
        app.path()
            .app_data_dir()
            .map_err(|e| format!("无法获取应用数据目录: {}", e))
    })
}

fn resolve_paths(app: &AppHandle) -> Result<CatalogPaths, String> {
    let template = app
        .path()
        .resource_dir()
        .map_err(|e| format!("无法获取应用目录: {}", e))?
        .join(RESOURCE_DIR)
        .join(CATALOG_FILE_NAME);
    let writable = iro_path::catalog_path_in(&get_base_data_dir(app)?);
    Ok(CatalogPaths::new(template, writable))
}

// ==================== 目录相关 commands ====================

/// 重新执行初始化（首次复制 + 加载）
#[tauri::command]
pub fn initialize_catalog(catalog: State<'_, Mutex<CatalogService>>) -> Result<usize, String> {
    catalog
        .lock()
        .initialize()
        .map_err(|e| format!("初始化目录失败: {}", e))
}

/// 按名称检索条目
#[tauri::command]
pub fn current_entries(catalog: State<'_, Mutex<CatalogService>>, query: String) -> Vec<Entry> {
    catalog.lock().current_entries(&query)
}

/// 按登录编号分组的检索结果
#[tauri::command]
pub fn grouped_entries(
    catalog: State<'_, Mutex<CatalogService>>,
    query: String,
) -> BTreeMap<i64, Vec<Entry>> {
    catalog.lock().grouped_entries(&query)
}

/// 提交登录表单
#[tauri::command]
pub fn register_entry(
    catalog: State<'_, Mutex<CatalogService>>,
    name: String,
    category: String,
) -> Result<(), String> {
    catalog
        .lock()
        .register_entry(&name, &category)
        .map_err(|e| format!("登录条目失败: {}", e))
}

// ==================== 展示状态相关 commands ====================

#[tauri::command]
pub fn select_entry(
    catalog: State<'_, Mutex<CatalogService>>,
    shell: State<'_, Mutex<ShellState>>,
    id: Uuid,
) -> Result<Entry, String> {
    let entry = catalog
        .lock()
        .find_entry(id)
        .cloned()
        .ok_or_else(|| format!("条目不存在: {}", id))?;
    shell.lock().select_entry(entry.clone());
    Ok(entry)
}

#[tauri::command]
pub fn clear_selection(shell: State<'_, Mutex<ShellState>>) {
    shell.lock().clear_selection();
}

/// 更新检索文本并返回新的列表
#[tauri::command]
pub fn set_search_text(
    catalog: State<'_, Mutex<CatalogService>>,
    shell: State<'_, Mutex<ShellState>>,
    text: String,
) -> Vec<Entry> {
    let catalog = catalog.lock();
    let mut shell = shell.lock();
    shell.set_search_text(text);
    shell.visible_entries(&catalog)
}

#[tauri::command]
pub fn activate_view(shell: State<'_, Mutex<ShellState>>, view: ActiveView) {
    shell.lock().activate(view);
}

#[tauri::command]
pub fn get_shell_state(shell: State<'_, Mutex<ShellState>>) -> ShellState {
    shell.lock().clone()
}

// ==================== 日志相关 commands（运行时动态调整） ====================

#[tauri::command]
pub fn set_iro_log_level(level: String) -> Result<(), String> {
    logs::set_log_level(&level)
}

#[tauri::command]
pub fn get_iro_log_level() -> LogLevel {
    logs::current_log_level()
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            // 目录相关 commands
            initialize_catalog,
            current_entries,
            grouped_entries,
            register_entry,
            // 展示状态相关 commands
            select_entry,
            clear_selection,
            set_search_text,
            activate_view,
            get_shell_state,
            // 日志相关 commands
            set_iro_log_level,
            get_iro_log_level,
        ])
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .timezone_strategy(TimezoneStrategy::UseLocal)
                        .level(log::LevelFilter::Debug) // 允许运行时动态调整到任意级别
                        .targets([
                            Target::new(TargetKind::LogDir {
                                file_name: Some("debug".into()),
                            }),
                            Target::new(TargetKind::Stdout),
                        ])
                        .build(),
                )?;
            } else {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .timezone_strategy(TimezoneStrategy::UseLocal)
                        .level(log::LevelFilter::Debug)
                        .build(),
                )?;
            }

            let paths = match resolve_paths(app.handle()) {
                Ok(paths) => paths,
                Err(e) => {
                    log::warn!("通过 Tauri 解析目录路径失败，改用默认路径: {}", e);
                    CatalogPaths::resolve()?
                }
            };

            // 初始化失败时保持空目录，不中断启动
            let mut catalog = CatalogService::new(paths);
            match catalog.initialize() {
                Ok(count) => log::info!("目录初始化完成，共 {} 个条目", count),
                Err(e) => log::error!("目录初始化失败: {}", e),
            }

            app.manage(Mutex::new(catalog));
            app.manage(Mutex::new(ShellState::new()));

            // 设置初始日志级别为 Error（运行时可通过命令调整）
            log::set_max_level(log::LevelFilter::Error);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
