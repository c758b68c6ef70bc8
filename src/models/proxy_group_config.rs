/// Type of proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyGroupType {
    Select,
    URLTest,
}

impl ProxyGroupType {
    /// Get string representation of the proxy group type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyGroupType::Select => "select",
            ProxyGroupType::URLTest => "url-test",
        }
    }
}

/// Configuration for a proxy group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyGroupConfig {
    /// Name of the proxy group
    pub name: String,
    /// Type of the proxy group
    pub group_type: ProxyGroupType,
    /// Proxy or group names in this group, in order
    pub proxies: Vec<String>,
    /// URL for testing
    pub url: Option<String>,
    /// Interval in seconds between tests
    pub interval: Option<u32>,
    /// Tolerance value for tests
    pub tolerance: Option<u32>,
}

impl ProxyGroupConfig {
    /// Create a new proxy group config
    pub fn new(name: &str, group_type: ProxyGroupType, proxies: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            group_type,
            proxies,
            url: None,
            interval: None,
            tolerance: None,
        }
    }

    /// Get string representation of the group type
    pub fn type_str(&self) -> &'static str {
        self.group_type.as_str()
    }
}

/// A collection of proxy group configurations
pub type ProxyGroupConfigs = Vec<ProxyGroupConfig>;
