use linked_hash_map::LinkedHashMap;
use serde::Serialize;

use crate::models::ProxyGroupConfig;

/// Represents a complete Clash configuration output
///
/// Field order is the key order of the rendered document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashYamlOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geox_url: Option<GeoxUrl>,

    // General settings
    pub port: u16,
    pub socks_port: u16,
    pub allow_lan: bool,
    pub mode: String,
    pub log_level: String,
    pub external_controller: String,

    // Proxy settings
    pub proxies: Vec<ClashProxy>,
    pub proxy_groups: Vec<ClashProxyGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_providers: Option<LinkedHashMap<String, RuleProvider>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

/// Remote locations of the geo databases used by Clash.Meta
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoxUrl {
    pub geoip: String,
    pub geosite: String,
    pub mmdb: String,
    pub asn: String,
}

/// A remote rule set referenced by `RULE-SET` rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleProvider {
    #[serde(rename = "type")]
    pub provider_type: String,
    pub format: String,
    pub behavior: String,
    pub url: String,
    pub path: String,
    pub interval: u32,
}

/// Represents a single proxy in Clash configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClashProxy {
    pub name: String,
    #[serde(rename = "type")]
    pub proxy_type: &'static str,
    pub server: String,
    pub port: u16,
    #[serde(flatten)]
    pub options: ClashProxyOptions,
}

/// Dialect specific keys of a Clash proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClashProxyOptions {
    VMess {
        #[serde(skip_serializing_if = "Option::is_none")]
        uuid: Option<String>,
        #[serde(rename = "alterId")]
        alter_id: u16,
        cipher: String,
        tls: bool,
        #[serde(flatten)]
        transport: TransportOptions,
    },
    Vless {
        #[serde(skip_serializing_if = "Option::is_none")]
        uuid: Option<String>,
        tls: bool,
        #[serde(flatten)]
        transport: TransportOptions,
    },
    Trojan {
        password: String,
        tls: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        sni: Option<String>,
    },
    Shadowsocks {
        cipher: String,
        password: String,
    },
}

/// Transport keys shared by VMess and VLESS proxies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_headers: Option<LinkedHashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servername: Option<String>,
}

/// Represents a proxy group in Clash configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClashProxyGroup {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<u32>,
    pub proxies: Vec<String>,
}

impl From<&ProxyGroupConfig> for ClashProxyGroup {
    fn from(group: &ProxyGroupConfig) -> Self {
        ClashProxyGroup {
            name: group.name.clone(),
            group_type: group.type_str(),
            url: group.url.clone(),
            interval: group.interval,
            tolerance: group.tolerance,
            proxies: group.proxies.clone(),
        }
    }
}
