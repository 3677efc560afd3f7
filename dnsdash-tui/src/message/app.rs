use dnsdash_core::TokenSource;

use super::{BackendEvent, ContentMessage, ModalMessage, TaskError};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 定时器：过期 toast、按间隔重新验证
    Tick,

    /// 终端窗口重新获得焦点
    FocusGained,

    /// 启动时的 token 恢复结果
    SessionRestored(Result<Option<TokenSource>, TaskError>),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务完成
    Backend(BackendEvent),

    /// 返回上一页 / 退出搜索 / 清空选择
    GoBack,

    /// 刷新当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 打开 token 弹窗
    ChangeToken,

    /// 删除保存的 token（需确认）
    Logout,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
