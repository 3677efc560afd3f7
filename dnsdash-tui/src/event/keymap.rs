//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 SHIFT：大写字母本身已经区分了大小写。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers - KeyModifiers::SHIFT
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const CHANGE_TOKEN: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const LOGOUT: KeyBinding = KeyBinding::key(KeyCode::Char('L'));

    // 导航
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const ROW_MENU: KeyBinding = KeyBinding::key(KeyCode::Char('m'));

    // 记录页
    pub const TOGGLE_SELECT: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const SELECT_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const HEADER_MENU: KeyBinding = KeyBinding::key(KeyCode::Char('M'));
    pub const ACTION_ADD: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const ACTION_DELETE_SELECTED: KeyBinding = KeyBinding::key(KeyCode::Char('D'));
    pub const DETAIL: KeyBinding = KeyBinding::key(KeyCode::Char('i'));
    pub const COPY_VALUE: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const COPY_NAME: KeyBinding = KeyBinding::key(KeyCode::Char('C'));
    pub const NEXT_TYPE: KeyBinding = KeyBinding::key(KeyCode::Char('f'));
    pub const PREV_TYPE: KeyBinding = KeyBinding::key(KeyCode::Char('F'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));

    // 弹窗
    pub const TOGGLE_SECRET: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const ACCEPT: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const REJECT: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
}

/// 帮助弹窗中显示的快捷键说明
pub const HELP_ENTRIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("q / Ctrl+C", "Quit"),
            ("?", "Show this help"),
            ("r", "Refresh current page"),
            ("Esc", "Back / clear search, selection, filter"),
            ("t", "Change API token"),
            ("L", "Remove saved token"),
        ],
    ),
    (
        "Lists",
        &[
            ("↑↓ / j k", "Move"),
            ("Home / End", "First / last row"),
            ("Enter", "Open domain / record details"),
            ("m", "Row actions"),
        ],
    ),
    (
        "DNS records",
        &[
            ("n", "New record"),
            ("e / d", "Edit / delete record"),
            ("Space / a", "Select row / select all"),
            ("M / D", "Bulk actions / delete selected"),
            ("f / F", "Next / previous type filter"),
            ("/", "Search names and values"),
            ("i", "Record details"),
            ("c / C", "Copy value / name"),
        ],
    ),
    (
        "Dialogs",
        &[
            ("Tab / Shift+Tab", "Next / previous field"),
            ("← →", "Change record type or button"),
            ("Enter", "Confirm"),
            ("y / n", "Accept / cancel confirmation"),
            ("Alt+s", "Show or hide token"),
        ],
    ),
];
