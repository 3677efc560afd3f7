use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Cursor parameters for list operations.
///
/// The API pages backwards in time: `until` is the `next` cursor returned by
/// the previous page. The first request leaves it empty.
///
/// # Default
///
/// The default is `limit = 20, until = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorParams {
    /// Maximum number of items in the page.
    pub limit: u32,
    /// Cursor (epoch milliseconds) returned as `next` by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<i64>,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            limit: 20,
            until: None,
        }
    }
}

impl CursorParams {
    /// First page with the given limit.
    pub fn first(limit: u32) -> Self {
        Self { limit, until: None }
    }

    /// Clamp `limit` to `1..=max_limit`.
    #[must_use]
    pub fn validated(&self, max_limit: u32) -> Self {
        Self {
            limit: self.limit.clamp(1, max_limit),
            until: self.until,
        }
    }

    /// Parameters for the page following `page`, or `None` if `page` was the last one.
    pub fn after<T>(&self, page: &CursorPage<T>) -> Option<Self> {
        page.next.map(|next| Self {
            limit: self.limit,
            until: Some(next),
        })
    }
}

/// One page of a cursor-paginated listing.
///
/// # Type Parameters
///
/// * `T`: the item type (e.g., [`ProviderDomain`], [`DnsRecord`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Number of items reported by the API for this page.
    pub count: u32,
    /// Cursor for the next page; `None` on the last page.
    pub next: Option<i64>,
    /// Cursor for the previous page, if any.
    pub prev: Option<i64>,
}

impl<T> CursorPage<T> {
    /// Create a page; `count` defaults to the number of items.
    pub fn new(items: Vec<T>, next: Option<i64>, prev: Option<i64>) -> Self {
        let count = u32::try_from(items.len()).unwrap_or(u32::MAX);
        Self {
            items,
            count,
            next,
            prev,
        }
    }

    /// Whether there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

// ============ Credentials ============

/// Credentials for the Vercel REST API.
///
/// `team_id` scopes every request to a team; personal accounts leave it empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentials {
    /// Personal access token, sent as `Authorization: Bearer <token>`.
    pub api_token: String,
    /// Optional team identifier, sent as the `teamId` query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl ProviderCredentials {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            team_id: None,
        }
    }

    #[must_use]
    pub fn with_team(mut self, team_id: Option<String>) -> Self {
        self.team_id = team_id.filter(|t| !t.trim().is_empty());
        self
    }

    /// Returns an error if the token is blank.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        if self.api_token.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: "apiToken".to_string(),
                label: "API Token".to_string(),
            });
        }
        if self.api_token.chars().any(char::is_whitespace) {
            return Err(CredentialValidationError::InvalidFormat {
                field: "apiToken".to_string(),
                label: "API Token".to_string(),
                reason: "must not contain whitespace".to_string(),
            });
        }
        Ok(())
    }
}

// 不在 Debug 输出中暴露 token
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_token", &"<redacted>")
            .field("team_id", &self.team_id)
            .finish()
    }
}

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    EmptyField {
        field: String,
        label: String,
    },
    InvalidFormat {
        field: String,
        label: String,
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

// ============ Domain Types ============

/// Who serves DNS for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    /// Vercel nameservers (`zeit.world`).
    #[serde(rename = "zeit.world")]
    ZeitWorld,
    /// External nameservers.
    #[serde(rename = "external")]
    External,
    /// Not applicable / unknown.
    #[serde(rename = "na", other)]
    Na,
}

impl ServiceType {
    /// Whether the domain's DNS is served by the first-party provider.
    pub fn is_first_party(self) -> bool {
        matches!(self, Self::ZeitWorld)
    }
}

/// A domain registered with or added to the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDomain {
    /// Provider-specific domain identifier.
    pub id: String,
    /// Domain name (e.g., `"example.com"`).
    pub name: String,
    /// Nameserver classification.
    pub service_type: ServiceType,
    /// Whether ownership has been verified.
    pub verified: bool,
    /// Creation time in epoch milliseconds, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

// ============ DNS Record Types ============

/// DNS record type.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
/// Types the API may add later are kept verbatim in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Apex alias (flattened CNAME).
    Alias,
    /// Certificate Authority Authorization record.
    Caa,
    /// Canonical name (alias) record.
    Cname,
    /// HTTPS service binding record.
    Https,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
    /// Any other type string returned by the API.
    Other(String),
}

impl DnsRecordType {
    /// All known record types, in the order the UI lists them.
    pub const ALL: [Self; 10] = [
        Self::A,
        Self::Aaaa,
        Self::Alias,
        Self::Caa,
        Self::Cname,
        Self::Https,
        Self::Mx,
        Self::Ns,
        Self::Srv,
        Self::Txt,
    ];

    /// Uppercase wire name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Alias => "ALIAS",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Https => "HTTPS",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Other(s) => s,
        }
    }

    /// Whether the record type carries a priority.
    pub fn has_priority(&self) -> bool {
        matches!(self, Self::Mx | Self::Srv)
    }
}

impl From<&str> for DnsRecordType {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "ALIAS" => Self::Alias,
            "CAA" => Self::Caa,
            "CNAME" => Self::Cname,
            "HTTPS" => Self::Https,
            "MX" => Self::Mx,
            "NS" => Self::Ns,
            "SRV" => Self::Srv,
            "TXT" => Self::Txt,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for DnsRecordType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<DnsRecordType> for String {
    fn from(t: DnsRecordType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by the provider, before any display shaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-specific record identifier.
    pub id: String,
    /// Slug of the parent domain.
    pub slug: String,
    /// Record name relative to the domain (`""` for apex).
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    /// Record value.
    pub value: String,
    /// MX-specific priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<u16>,
    /// Generic priority (SRV/HTTPS).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Who created the record (`"system"` for provider-managed records).
    pub creator: String,
    /// Creation time in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Last update time in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Structured SRV payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvData {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

impl SrvData {
    /// Parse the `"<weight> <port> <target>"` form shown in the value column.
    pub fn parse(priority: u16, value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace();
        let weight = parts.next()?.parse().ok()?;
        let port = parts.next()?.parse().ok()?;
        let target = parts.next()?.to_string();
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            priority,
            weight,
            port,
            target,
        })
    }
}

/// Request to create a new DNS record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDnsRecordRequest {
    /// Domain name to create the record in.
    pub domain: String,
    /// Record name (`""` for apex).
    pub name: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Record value.
    pub value: String,
    /// TTL in seconds; the provider default applies when `None`.
    pub ttl: Option<u32>,
    /// Priority for MX/SRV records.
    pub priority: Option<u16>,
}

/// Request to update an existing DNS record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDnsRecordRequest {
    /// Domain name the record belongs to.
    pub domain: String,
    /// New record name.
    pub name: String,
    /// New record type.
    pub record_type: DnsRecordType,
    /// New value.
    pub value: String,
    /// New TTL in seconds.
    pub ttl: Option<u32>,
    /// New priority for MX/SRV records.
    pub priority: Option<u16>,
}

// ============ Batch Operation Types ============

/// Result of a batch delete operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResult {
    /// Number of records successfully deleted.
    pub success_count: usize,
    /// Number of records that failed to delete.
    pub failed_count: usize,
    /// Number of records skipped because they are system-managed.
    pub skipped_count: usize,
    /// Details about each failed deletion.
    pub failures: Vec<BatchDeleteFailure>,
}

/// Information about a single failed record deletion in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteFailure {
    /// ID of the record that failed to delete.
    pub record_id: String,
    /// Human-readable reason for the failure.
    pub reason: String,
}
