//! Proxy model definitions
//!
//! Contains the unified record every share-link dialect is normalized into.

use std::fmt;

/// Represents the type of a proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    VMess,
    Vless,
    Trojan,
    Shadowsocks,
}

impl ProxyType {
    /// The `type` value used in Clash proxy definitions.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::VMess => "vmess",
            ProxyType::Vless => "vless",
            ProxyType::Trojan => "trojan",
            ProxyType::Shadowsocks => "ss",
        }
    }

    /// The share-link scheme prefix, including `://`.
    pub fn scheme(self) -> &'static str {
        match self {
            ProxyType::VMess => "vmess://",
            ProxyType::Vless => "vless://",
            ProxyType::Trojan => "trojan://",
            ProxyType::Shadowsocks => "ss://",
        }
    }

    /// Selects the dialect from a link's scheme prefix.
    pub fn from_link(link: &str) -> Option<Self> {
        [
            ProxyType::VMess,
            ProxyType::Vless,
            ProxyType::Trojan,
            ProxyType::Shadowsocks,
        ]
        .into_iter()
        .find(|t| link.starts_with(t.scheme()))
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a proxy parsed from a share link.
///
/// A `Proxy` only exists once its server and a non-zero port are known; it is
/// created through [`ProxyBuilder`](super::ProxyBuilder). Apart from the display
/// name, which the name deduplicator assigns once, it is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proxy {
    pub(super) proxy_type: ProxyType,
    pub(super) name: String,
    pub(super) original_name: Option<String>,
    pub(super) hostname: String,
    pub(super) port: u16,

    pub(super) user_id: Option<String>,
    pub(super) alter_id: u16,
    pub(super) encrypt_method: Option<String>,
    pub(super) password: Option<String>,

    pub(super) tls_secure: bool,
    pub(super) transfer_protocol: Option<String>,
    pub(super) path: Option<String>,
    pub(super) host: Option<String>,
    pub(super) server_name: Option<String>,
}

impl Proxy {
    pub fn proxy_type(&self) -> ProxyType {
        self.proxy_type
    }

    /// Final display name. Empty until names are deduplicated.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display tag carried by the link, before deduplication.
    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// VMess/VLESS user id.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn alter_id(&self) -> u16 {
        self.alter_id
    }

    /// VMess security setting or Shadowsocks method.
    pub fn encrypt_method(&self) -> Option<&str> {
        self.encrypt_method.as_deref()
    }

    /// Trojan/Shadowsocks password.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn tls_secure(&self) -> bool {
        self.tls_secure
    }

    /// Transport kind, e.g. `ws` or `grpc`.
    pub fn transfer_protocol(&self) -> Option<&str> {
        self.transfer_protocol.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Value of the `Host` header sent by the transport.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// TLS server name indication.
    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }

    /// Sets the final display name. Only the name deduplicator calls this.
    pub(crate) fn assign_name(&mut self, name: String) {
        self.name = name;
    }
}
