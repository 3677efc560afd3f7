//! Domain list row types

use serde::{Deserialize, Serialize};

use dnsdash_provider::ProviderDomain;

use crate::utils::datetime::format_date;

/// Who serves DNS for a domain, as shown in the `NameServer` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameServerKind {
    /// Served by the provider's own nameservers.
    Vercel,
    ThirdParty,
}

impl NameServerKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vercel => "Vercel",
            Self::ThirdParty => "Third Party",
        }
    }
}

impl std::fmt::Display for NameServerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the domains table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainItem {
    pub name: String,
    pub name_server: NameServerKind,
    /// Display-formatted creation time.
    pub created_at: String,
}

impl DomainItem {
    #[must_use]
    pub fn from_provider(domain: ProviderDomain) -> Self {
        let name_server = if domain.service_type.is_first_party() {
            NameServerKind::Vercel
        } else {
            NameServerKind::ThirdParty
        };
        Self {
            name: domain.name,
            name_server,
            created_at: format_date(domain.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsdash_provider::ServiceType;

    fn domain(service_type: ServiceType, created_at: Option<i64>) -> ProviderDomain {
        ProviderDomain {
            id: "dom_1".into(),
            name: "example.com".into(),
            service_type,
            verified: true,
            created_at,
        }
    }

    #[test]
    fn zeit_world_is_first_party() {
        let item = DomainItem::from_provider(domain(ServiceType::ZeitWorld, Some(0)));
        assert_eq!(item.name_server, NameServerKind::Vercel);
        assert_eq!(item.name_server.to_string(), "Vercel");
        assert_eq!(item.created_at, "1970-01-01 00:00:00");
    }

    #[test]
    fn everything_else_is_third_party() {
        for st in [ServiceType::External, ServiceType::Na] {
            let item = DomainItem::from_provider(domain(st, None));
            assert_eq!(item.name_server, NameServerKind::ThirdParty);
            assert_eq!(item.name_server.label(), "Third Party");
            assert_eq!(item.created_at, "-");
        }
    }
}
