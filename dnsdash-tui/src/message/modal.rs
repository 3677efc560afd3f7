/// 弹窗消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    NextField,
    PrevField,
    /// ↑ / ↓（菜单）
    Up,
    Down,
    /// ← / →：切换记录类型或确认按钮
    Left,
    Right,
    Input(char),
    Backspace,
    /// Enter：提交表单 / 执行焦点所在按钮 / 执行菜单项
    Confirm,
    /// `y`：不论焦点直接确认
    Accept,
    ToggleSecret,
    CopyValue,
    CopyName,
}
