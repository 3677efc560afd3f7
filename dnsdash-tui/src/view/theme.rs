//! 主题和样式定义
//!
//! 两套调色板（黑底 / 白底），启动时按配置选定一次。

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::{Color, Modifier, Style};

use dnsdash_core::types::NameServerKind;

use crate::config::ThemeName;
use crate::model::ToastKind;

static LIGHT: AtomicBool = AtomicBool::new(false);

/// 设置主题
pub fn set_theme(theme: ThemeName) {
    LIGHT.store(theme == ThemeName::Light, Ordering::Relaxed);
}

/// 当前主题的颜色
pub fn colors() -> ThemeColors {
    if LIGHT.load(Ordering::Relaxed) {
        LIGHT_PALETTE
    } else {
        DARK_PALETTE
    }
}

/// Palette slots used by the views.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 标题栏、状态栏与搜索框激活态
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    /// 骨架行
    pub placeholder: Color,
    /// 记录值等代码样式文本
    pub code: Color,
    pub hint_key: Color,
}

const DARK_PALETTE: ThemeColors = ThemeColors {
    bg: Color::Rgb(10, 10, 10),
    fg: Color::Rgb(237, 237, 237),
    border: Color::Rgb(46, 46, 46),
    border_focused: Color::Rgb(82, 168, 255),
    highlight: Color::Rgb(0, 112, 243),
    selected_bg: Color::Rgb(31, 31, 31),
    selected_fg: Color::White,
    success: Color::Rgb(80, 227, 194),
    warning: Color::Rgb(245, 166, 35),
    error: Color::Rgb(255, 97, 102),
    muted: Color::Rgb(136, 136, 136),
    placeholder: Color::Rgb(40, 40, 40),
    code: Color::Rgb(199, 146, 234),
    hint_key: Color::Rgb(245, 166, 35),
};

const LIGHT_PALETTE: ThemeColors = ThemeColors {
    bg: Color::White,
    fg: Color::Rgb(23, 23, 23),
    border: Color::Rgb(234, 234, 234),
    border_focused: Color::Rgb(0, 112, 243),
    highlight: Color::Rgb(0, 112, 243),
    selected_bg: Color::Rgb(235, 245, 255),
    selected_fg: Color::Black,
    success: Color::Rgb(0, 128, 96),
    warning: Color::Rgb(171, 87, 10),
    error: Color::Rgb(218, 47, 53),
    muted: Color::Rgb(102, 102, 102),
    placeholder: Color::Rgb(240, 240, 240),
    code: Color::Rgb(124, 58, 173),
    hint_key: Color::Rgb(171, 87, 10),
};

impl ThemeColors {
    /// 边框颜色与图标
    pub fn toast_accent(&self, kind: ToastKind) -> (Color, &'static str) {
        match kind {
            ToastKind::Info => (self.highlight, "ℹ"),
            ToastKind::Success => (self.success, "✓"),
            ToastKind::Error => (self.error, "✗"),
        }
    }

    pub fn name_server(&self, kind: NameServerKind) -> Color {
        match kind {
            NameServerKind::Vercel => self.success,
            NameServerKind::ThirdParty => self.muted,
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 表格选中行
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 表头
    pub fn header() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(Color::White)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().hint_key)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn code() -> Style {
        Style::default().fg(colors().code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_accent_matches_kind() {
        let c = DARK_PALETTE;
        assert_eq!(c.toast_accent(ToastKind::Error), (c.error, "✗"));
        assert_eq!(c.toast_accent(ToastKind::Success).0, c.success);
    }
}
