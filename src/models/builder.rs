use super::{Proxy, ProxyType};

/// Keeps only non-empty values, so absent and empty are the same thing downstream.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Builder for [`Proxy`].
///
/// Server and port are required up front; every other field is optional and an
/// empty value is treated as absent.
#[derive(Debug, Clone)]
pub struct ProxyBuilder {
    proxy: Proxy,
}

impl ProxyBuilder {
    pub fn new(proxy_type: ProxyType, hostname: &str, port: u16) -> Self {
        ProxyBuilder {
            proxy: Proxy {
                proxy_type,
                name: String::new(),
                original_name: None,
                hostname: hostname.to_string(),
                port,
                user_id: None,
                alter_id: 0,
                encrypt_method: None,
                password: None,
                tls_secure: false,
                transfer_protocol: None,
                path: None,
                host: None,
                server_name: None,
            },
        }
    }

    pub fn original_name(mut self, value: Option<&str>) -> Self {
        self.proxy.original_name = non_empty(value);
        self
    }

    pub fn user_id(mut self, value: Option<&str>) -> Self {
        self.proxy.user_id = non_empty(value);
        self
    }

    pub fn alter_id(mut self, value: u16) -> Self {
        self.proxy.alter_id = value;
        self
    }

    pub fn encrypt_method(mut self, value: Option<&str>) -> Self {
        self.proxy.encrypt_method = non_empty(value);
        self
    }

    pub fn password(mut self, value: Option<&str>) -> Self {
        self.proxy.password = non_empty(value);
        self
    }

    pub fn tls(mut self, value: bool) -> Self {
        self.proxy.tls_secure = value;
        self
    }

    pub fn transfer_protocol(mut self, value: Option<&str>) -> Self {
        self.proxy.transfer_protocol = non_empty(value);
        self
    }

    pub fn path(mut self, value: Option<&str>) -> Self {
        self.proxy.path = non_empty(value);
        self
    }

    pub fn host(mut self, value: Option<&str>) -> Self {
        self.proxy.host = non_empty(value);
        self
    }

    pub fn server_name(mut self, value: Option<&str>) -> Self {
        self.proxy.server_name = non_empty(value);
        self
    }

    pub fn build(self) -> Proxy {
        self.proxy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_absent() {
        let proxy = ProxyBuilder::new(ProxyType::Vless, "example.com", 443)
            .user_id(Some("id"))
            .path(Some(""))
            .host(None)
            .original_name(Some(""))
            .build();

        assert_eq!(proxy.user_id(), Some("id"));
        assert_eq!(proxy.path(), None);
        assert_eq!(proxy.host(), None);
        assert_eq!(proxy.original_name(), None);
        assert_eq!(proxy.name(), "");
        assert!(!proxy.tls_secure());
    }
}
