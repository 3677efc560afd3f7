//! 弹窗状态
//!
//! 同一时间最多一个弹窗，打开新弹窗会替换旧的（例如从菜单进入编辑表单）。

use dnsdash_core::types::{
    CreateDnsRecordRequest, DnsRecordType, ProviderCredentials, RecordItem,
    UpdateDnsRecordRequest,
};

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn open(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn token_form_mut(&mut self) -> Option<&mut TokenForm> {
        match &mut self.active {
            Some(Modal::Token(form)) => Some(form),
            _ => None,
        }
    }

    pub fn record_form_mut(&mut self) -> Option<&mut RecordForm> {
        match &mut self.active {
            Some(Modal::RecordForm(form)) => Some(form),
            _ => None,
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 输入 API token
    Token(TokenForm),
    /// 新建 / 编辑记录
    RecordForm(RecordForm),
    /// 二次确认
    Confirm(ConfirmDialog),
    /// 记录详情（完整名称、值与描述）
    Detail(DetailView),
    /// 行菜单 / 表头菜单
    Menu(Menu),
    Help,
}

// ===== Token =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    Token,
    Team,
}

#[derive(Debug, Clone)]
pub struct TokenForm {
    pub token: String,
    pub team_id: String,
    pub focus: TokenField,
    pub show_secret: bool,
    pub error: Option<String>,
    /// 校验请求进行中
    pub submitting: bool,
}

impl TokenForm {
    pub fn new(team_id: Option<&str>) -> Self {
        Self {
            token: String::new(),
            team_id: team_id.unwrap_or_default().to_string(),
            focus: TokenField::Token,
            show_secret: false,
            error: None,
            submitting: false,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            TokenField::Token => TokenField::Team,
            TokenField::Team => TokenField::Token,
        };
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            TokenField::Token => &mut self.token,
            TokenField::Team => &mut self.team_id,
        }
    }

    pub fn input(&mut self, ch: char) {
        self.field_mut().push(ch);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    /// Credentials to validate, or a message for the form.
    pub fn credentials(&self) -> Result<ProviderCredentials, String> {
        let credentials = ProviderCredentials::new(self.token.trim())
            .with_team(Some(self.team_id.trim().to_string()));
        credentials.validate().map_err(|e| e.to_string())?;
        Ok(credentials)
    }
}

// ===== 记录表单 =====

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(RecordItem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Type,
    Value,
    Ttl,
    Priority,
}

#[derive(Debug, Clone)]
pub struct RecordForm {
    pub mode: FormMode,
    pub domain: String,
    pub name: String,
    /// 下标对应 [`DnsRecordType::ALL`]
    pub type_index: usize,
    pub value: String,
    pub ttl: String,
    pub priority: String,
    pub focus: FormField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl RecordForm {
    pub fn create(domain: &str) -> Self {
        Self {
            mode: FormMode::Create,
            domain: domain.to_string(),
            name: String::new(),
            type_index: 0,
            value: String::new(),
            ttl: String::new(),
            priority: String::new(),
            focus: FormField::Name,
            error: None,
            submitting: false,
        }
    }

    /// Form prefilled from `record`. `None` for types the API cannot write.
    pub fn edit(domain: &str, record: &RecordItem) -> Option<Self> {
        let type_index = DnsRecordType::ALL
            .iter()
            .position(|t| *t == record.record_type)?;
        Some(Self {
            mode: FormMode::Edit(record.clone()),
            domain: domain.to_string(),
            name: record.name.clone(),
            type_index,
            value: record.value.clone(),
            ttl: record.ttl.to_string(),
            priority: record.priority.map(|p| p.to_string()).unwrap_or_default(),
            focus: FormField::Name,
            error: None,
            submitting: false,
        })
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New Record",
            FormMode::Edit(_) => "Edit Record",
        }
    }

    pub fn record_type(&self) -> DnsRecordType {
        DnsRecordType::ALL
            .get(self.type_index)
            .cloned()
            .unwrap_or(DnsRecordType::A)
    }

    /// Fields in tab order. Priority only for types that carry one.
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::Name, FormField::Type, FormField::Value, FormField::Ttl];
        if self.record_type().has_priority() {
            fields.push(FormField::Priority);
        }
        fields
    }

    pub fn next_field(&mut self) {
        self.step_field(1);
    }

    pub fn prev_field(&mut self) {
        let len = self.fields().len();
        self.step_field(len - 1);
    }

    fn step_field(&mut self, by: usize) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + by) % fields.len()];
    }

    pub fn cycle_type(&mut self, forward: bool) {
        let len = DnsRecordType::ALL.len();
        self.type_index = if forward {
            (self.type_index + 1) % len
        } else {
            (self.type_index + len - 1) % len
        };
        self.error = None;
    }

    fn field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Value => Some(&mut self.value),
            FormField::Ttl => Some(&mut self.ttl),
            FormField::Priority => Some(&mut self.priority),
            FormField::Type => None,
        }
    }

    pub fn input(&mut self, ch: char) {
        let numeric = matches!(self.focus, FormField::Ttl | FormField::Priority);
        if numeric && !ch.is_ascii_digit() {
            return;
        }
        if let Some(field) = self.field_mut() {
            field.push(ch);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.field_mut() {
            field.pop();
        }
    }

    fn parsed_numbers(&self) -> Result<(Option<u32>, Option<u16>), String> {
        let ttl = parse_optional::<u32>(&self.ttl).map_err(|()| "TTL must be a number".to_string())?;
        let priority = if self.record_type().has_priority() {
            parse_optional::<u16>(&self.priority)
                .map_err(|()| "Priority must be between 0 and 65535".to_string())?
        } else {
            None
        };
        Ok((ttl, priority))
    }

    pub fn create_request(&self) -> Result<CreateDnsRecordRequest, String> {
        let (ttl, priority) = self.parsed_numbers()?;
        Ok(CreateDnsRecordRequest {
            domain: self.domain.clone(),
            name: self.name.trim().to_string(),
            record_type: self.record_type(),
            value: self.value.trim().to_string(),
            ttl,
            priority,
        })
    }

    pub fn update_request(&self) -> Result<UpdateDnsRecordRequest, String> {
        let (ttl, priority) = self.parsed_numbers()?;
        Ok(UpdateDnsRecordRequest {
            domain: self.domain.clone(),
            name: self.name.trim().to_string(),
            record_type: self.record_type(),
            value: self.value.trim().to_string(),
            ttl,
            priority,
        })
    }
}

fn parse_optional<T: std::str::FromStr>(raw: &str) -> Result<Option<T>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| ())
}

// ===== 确认 =====

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteRecord { domain: String, record: RecordItem },
    BatchDelete { domain: String, records: Vec<RecordItem> },
    /// 删除钥匙串中保存的 token
    Logout,
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub action: ConfirmAction,
    /// 焦点在「确认」按钮上；默认停在「取消」
    pub confirm_focused: bool,
}

impl ConfirmDialog {
    pub fn new(action: ConfirmAction) -> Self {
        Self {
            action,
            confirm_focused: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.action {
            ConfirmAction::DeleteRecord { .. } => "Delete Record",
            ConfirmAction::BatchDelete { .. } => "Delete Records",
            ConfirmAction::Logout => "Remove Token",
        }
    }

    pub fn message(&self) -> String {
        match &self.action {
            ConfirmAction::DeleteRecord { domain, record } => format!(
                "Delete the {} record \"{}\" of {domain}?",
                record.record_type,
                if record.name.is_empty() { "@" } else { &record.name }
            ),
            ConfirmAction::BatchDelete { domain, records } => {
                format!("Delete {} selected records of {domain}?", records.len())
            }
            ConfirmAction::Logout => "Remove the saved API token from the keychain?".to_string(),
        }
    }
}

// ===== 详情 =====

#[derive(Debug, Clone)]
pub struct DetailView {
    pub domain: String,
    pub record: RecordItem,
    pub description: String,
}

// ===== 菜单 =====

#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    ManageRecords(String),
    EditRecord(RecordItem),
    DeleteRecord(RecordItem),
    DeleteSelected(Vec<RecordItem>),
}

impl MenuAction {
    pub fn label(&self) -> String {
        match self {
            Self::ManageRecords(_) => "Manage DNS Records".to_string(),
            Self::EditRecord(_) => "Edit".to_string(),
            Self::DeleteRecord(_) => "Delete".to_string(),
            Self::DeleteSelected(rows) => format!("Delete ({})", rows.len()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub items: Vec<MenuAction>,
    pub selected: usize,
}

impl Menu {
    pub fn new(items: Vec<MenuAction>) -> Self {
        Self { items, selected: 0 }
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn current(&self) -> Option<&MenuAction> {
        self.items.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(record_type: DnsRecordType) -> RecordItem {
        RecordItem {
            id: "rec_1".into(),
            slug: "example.com".into(),
            name: "mail".into(),
            record_type,
            priority: Some(10),
            value: "mx.example.net".into(),
            ttl: 300,
            created_at: None,
            updated_at: None,
            is_system: false,
            disable_selection: false,
        }
    }

    #[test]
    fn priority_field_only_for_mx_like_types() {
        let mut form = RecordForm::create("example.com");
        assert!(!form.fields().contains(&FormField::Priority));
        let mx = DnsRecordType::ALL
            .iter()
            .position(|t| *t == DnsRecordType::Mx)
            .unwrap();
        form.type_index = mx;
        assert!(form.fields().contains(&FormField::Priority));

        form.focus = FormField::Ttl;
        form.next_field();
        assert_eq!(form.focus, FormField::Priority);
        form.next_field();
        assert_eq!(form.focus, FormField::Name);
        form.prev_field();
        assert_eq!(form.focus, FormField::Priority);
    }

    #[test]
    fn numeric_fields_ignore_letters() {
        let mut form = RecordForm::create("example.com");
        form.focus = FormField::Ttl;
        for ch in "6x0".chars() {
            form.input(ch);
        }
        assert_eq!(form.ttl, "60");

        form.focus = FormField::Type;
        form.input('a');
        assert!(form.name.is_empty());
    }

    #[test]
    fn edit_form_round_trips_into_update_request() {
        let form = RecordForm::edit("example.com", &record(DnsRecordType::Mx)).unwrap();
        let req = form.update_request().unwrap();
        assert_eq!(req.name, "mail");
        assert_eq!(req.record_type, DnsRecordType::Mx);
        assert_eq!(req.ttl, Some(300));
        assert_eq!(req.priority, Some(10));
    }

    #[test]
    fn edit_refuses_unknown_types() {
        assert!(RecordForm::edit("example.com", &record(DnsRecordType::Other("LOC".into()))).is_none());
    }

    #[test]
    fn priority_is_dropped_for_types_without_one() {
        let mut form = RecordForm::create("example.com");
        form.value = " 192.0.2.1 ".into();
        form.priority = "10".into();
        let req = form.create_request().unwrap();
        assert_eq!(req.priority, None);
        assert_eq!(req.value, "192.0.2.1");
        assert_eq!(req.ttl, None);
    }

    #[test]
    fn out_of_range_priority_is_reported() {
        let mut form = RecordForm::edit("example.com", &record(DnsRecordType::Mx)).unwrap();
        form.priority = "70000".into();
        assert!(form.create_request().is_err());
    }

    #[test]
    fn token_form_trims_and_validates() {
        let mut form = TokenForm::new(Some("team_1"));
        assert!(form.credentials().is_err());
        for ch in " tok ".chars() {
            form.input(ch);
        }
        let creds = form.credentials().unwrap();
        assert_eq!(creds.api_token, "tok");
        assert_eq!(creds.team_id.as_deref(), Some("team_1"));

        form.toggle_focus();
        form.team_id.clear();
        assert_eq!(form.credentials().unwrap().team_id, None);
    }

    #[test]
    fn menu_labels() {
        let menu = Menu::new(vec![MenuAction::DeleteSelected(vec![
            record(DnsRecordType::A),
            record(DnsRecordType::A),
        ])]);
        assert_eq!(menu.current().map(MenuAction::label).as_deref(), Some("Delete (2)"));
        assert_eq!(MenuAction::ManageRecords("a.com".into()).label(), "Manage DNS Records");
    }
}
