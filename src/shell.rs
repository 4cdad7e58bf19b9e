//! 展示层状态
//!
//! 检索文本、选中条目与当前视图。不涉及目录文件，只通过
//! [`CatalogService`] 读取数据。

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogService;
use crate::entity::Entry;

/// 导航栏上的功能入口，同一时刻只有一个处于激活状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Browse,
    History,
    Register,
    Credit,
    /// 词典同步：尚未实现，仅作为占位入口
    Synchronize,
}

impl ActiveView {
    /// 导航栏中的显示顺序
    pub const ALL: [ActiveView; 5] = [
        ActiveView::Browse,
        ActiveView::History,
        ActiveView::Register,
        ActiveView::Credit,
        ActiveView::Synchronize,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActiveView::Browse => "browse",
            ActiveView::History => "history",
            ActiveView::Register => "register",
            ActiveView::Credit => "credit",
            ActiveView::Synchronize => "synchronize",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellState {
    pub search_text: String,
    pub selected: Option<Entry>,
    pub active_view: ActiveView,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// 打开条目详情
    pub fn select_entry(&mut self, entry: Entry) {
        self.selected = Some(entry);
    }

    /// 从详情返回列表
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// 点击导航入口
    pub fn activate(&mut self, view: ActiveView) {
        log::info!("切换到功能入口: {}", view.as_str());
        self.active_view = view;
    }

    /// 列表中应显示的条目
    pub fn visible_entries(&self, catalog: &CatalogService) -> Vec<Entry> {
        catalog.current_entries(&self.search_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::CatalogPaths;
    use std::fs;
    use tempfile::TempDir;

    fn ready_catalog(dir: &TempDir) -> CatalogService {
        let template = dir.path().join("template.csv");
        fs::write(&template, "header\n1,Red Sunset,dawn\n2,Azure,noon\n").unwrap();
        let mut catalog =
            CatalogService::new(CatalogPaths::new(template, dir.path().join("data.csv")));
        catalog.initialize().unwrap();
        catalog
    }

    #[test]
    fn only_one_view_is_active() {
        let mut shell = ShellState::new();
        assert_eq!(shell.active_view, ActiveView::Browse);

        shell.activate(ActiveView::Register);
        shell.activate(ActiveView::Credit);
        assert_eq!(shell.active_view, ActiveView::Credit);
    }

    #[test]
    fn views_serialize_by_name() {
        for view in ActiveView::ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.as_str()));
        }
        let parsed: ActiveView = serde_json::from_str("\"synchronize\"").unwrap();
        assert_eq!(parsed, ActiveView::Synchronize);
    }

    #[test]
    fn selection_can_be_cleared() {
        let dir = TempDir::new().unwrap();
        let catalog = ready_catalog(&dir);
        let mut shell = ShellState::new();

        let first = shell.visible_entries(&catalog).remove(0);
        shell.select_entry(first.clone());
        assert_eq!(shell.selected.as_ref(), Some(&first));

        shell.clear_selection();
        assert!(shell.selected.is_none());
    }

    #[test]
    fn search_text_drives_visible_entries() {
        let dir = TempDir::new().unwrap();
        let catalog = ready_catalog(&dir);
        let mut shell = ShellState::new();
        assert_eq!(shell.visible_entries(&catalog).len(), 2);

        shell.set_search_text("RED");
        let visible = shell.visible_entries(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Red Sunset");

        shell.set_search_text("   ");
        assert_eq!(shell.visible_entries(&catalog).len(), 2);
    }
}
