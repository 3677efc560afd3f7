//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::FocusGained => AppMessage::FocusGained,
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 搜索框获得焦点时，字符键全部作为输入
    if app.records.search_active && matches!(app.page, Page::Records { .. }) {
        return handle_search_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::CHANGE_TOKEN.matches(&key) {
        return AppMessage::ChangeToken;
    }
    if DefaultKeymap::LOGOUT.matches(&key) {
        return AppMessage::Logout;
    }

    if let Some(msg) = handle_list_keys(key) {
        return AppMessage::Content(msg);
    }

    match &app.page {
        Page::Domains => AppMessage::Noop,
        Page::Records { .. } => handle_records_keys(key),
    }
}

/// 列表通用按键
fn handle_list_keys(key: KeyEvent) -> Option<ContentMessage> {
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return Some(ContentMessage::Open);
    }
    if DefaultKeymap::ROW_MENU.matches(&key) {
        return Some(ContentMessage::RowMenu);
    }
    if has_command_modifier(&key) {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(ContentMessage::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => Some(ContentMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(ContentMessage::SelectLast),
        _ => None,
    }
}

/// DNS 记录页按键
fn handle_records_keys(key: KeyEvent) -> AppMessage {
    let bindings = [
        (DefaultKeymap::TOGGLE_SELECT, ContentMessage::ToggleSelection),
        (DefaultKeymap::SELECT_ALL, ContentMessage::SelectAll),
        (DefaultKeymap::HEADER_MENU, ContentMessage::HeaderMenu),
        (DefaultKeymap::ACTION_ADD, ContentMessage::NewRecord),
        (DefaultKeymap::ACTION_EDIT, ContentMessage::EditRecord),
        (DefaultKeymap::ACTION_DELETE, ContentMessage::DeleteRecord),
        (DefaultKeymap::ACTION_DELETE_SELECTED, ContentMessage::DeleteSelected),
        (DefaultKeymap::DETAIL, ContentMessage::ShowDetail),
        (DefaultKeymap::COPY_VALUE, ContentMessage::CopyValue),
        (DefaultKeymap::COPY_NAME, ContentMessage::CopyName),
        (DefaultKeymap::NEXT_TYPE, ContentMessage::NextType),
        (DefaultKeymap::PREV_TYPE, ContentMessage::PrevType),
        (DefaultKeymap::SEARCH, ContentMessage::StartSearch),
    ];
    bindings
        .into_iter()
        .find(|(binding, _)| binding.matches(&key))
        .map_or(AppMessage::Noop, |(_, msg)| AppMessage::Content(msg))
}

/// 搜索输入
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc | KeyCode::Enter => ContentMessage::EndSearch,
        KeyCode::Backspace => ContentMessage::SearchBackspace,
        KeyCode::Up => ContentMessage::SelectPrevious,
        KeyCode::Down => ContentMessage::SelectNext,
        KeyCode::Char(ch) if !has_command_modifier(&key) => ContentMessage::SearchInput(ch),
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let msg = match modal {
        Modal::Token(_) => handle_token_keys(key),
        Modal::RecordForm(_) => handle_form_keys(key),
        Modal::Confirm(_) => handle_confirm_keys(key),
        Modal::Detail(_) => handle_detail_keys(key),
        Modal::Menu(_) => handle_menu_keys(key),
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => Some(ModalMessage::Close),
            _ => None,
        },
    };
    msg.map_or(AppMessage::Noop, AppMessage::Modal)
}

fn handle_token_keys(key: KeyEvent) -> Option<ModalMessage> {
    if DefaultKeymap::TOGGLE_SECRET.matches(&key) {
        return Some(ModalMessage::ToggleSecret);
    }
    text_input_keys(key)
}

fn handle_form_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        KeyCode::Up => Some(ModalMessage::Up),
        KeyCode::Down => Some(ModalMessage::Down),
        KeyCode::Left => Some(ModalMessage::Left),
        KeyCode::Right => Some(ModalMessage::Right),
        _ => text_input_keys(key),
    }
}

/// 文本输入框通用按键
fn text_input_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        KeyCode::Tab => Some(ModalMessage::NextField),
        KeyCode::BackTab => Some(ModalMessage::PrevField),
        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Backspace => Some(ModalMessage::Backspace),
        KeyCode::Char(ch) if !has_command_modifier(&key) => Some(ModalMessage::Input(ch)),
        _ => None,
    }
}

fn handle_confirm_keys(key: KeyEvent) -> Option<ModalMessage> {
    if DefaultKeymap::ACCEPT.matches(&key) {
        return Some(ModalMessage::Accept);
    }
    if DefaultKeymap::REJECT.matches(&key) {
        return Some(ModalMessage::Close);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(ModalMessage::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(ModalMessage::Right),
        KeyCode::Tab => Some(ModalMessage::NextField),
        KeyCode::BackTab => Some(ModalMessage::PrevField),
        KeyCode::Enter => Some(ModalMessage::Confirm),
        _ => None,
    }
}

fn handle_detail_keys(key: KeyEvent) -> Option<ModalMessage> {
    if DefaultKeymap::COPY_VALUE.matches(&key) {
        return Some(ModalMessage::CopyValue);
    }
    if DefaultKeymap::COPY_NAME.matches(&key) {
        return Some(ModalMessage::CopyName);
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') => Some(ModalMessage::Confirm),
        _ => None,
    }
}

fn handle_menu_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ModalMessage::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(ModalMessage::Down),
        KeyCode::Tab => Some(ModalMessage::NextField),
        KeyCode::BackTab => Some(ModalMessage::PrevField),
        KeyCode::Enter => Some(ModalMessage::Confirm),
        _ => None,
    }
}

/// Ctrl / Alt 组合键不作为文本输入
fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
