/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Enter：域名页进入记录页，记录页打开详情
    Open,
    RowMenu,
    HeaderMenu,

    // 记录页
    ToggleSelection,
    SelectAll,
    NewRecord,
    EditRecord,
    DeleteRecord,
    DeleteSelected,
    ShowDetail,
    CopyValue,
    CopyName,
    NextType,
    PrevType,
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    EndSearch,
}
