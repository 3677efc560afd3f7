//! 页面定义

/// 当前显示的页面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// 域名列表
    Domains,
    /// 某个域名的 DNS 记录
    Records { domain: String },
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Domains => "Domains",
            Self::Records { .. } => "DNS Records",
        }
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Domains => None,
            Self::Records { domain } => Some(domain),
        }
    }
}
