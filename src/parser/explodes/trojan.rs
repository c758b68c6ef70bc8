use crate::models::{Proxy, ProxyBuilder, ProxyType};
use crate::parser::error::{ParseError, ParseResult};
use crate::utils::url::{parse_query_into, query_value, url_decode};

use super::common::{parse_server_info, strip_scheme};

/// Parse a Trojan link into a Proxy object
///
/// Format: `trojan://password[?query]@host:port[/][?query][#remark]`. Only `sni`
/// is read from the query; TLS is always on.
pub fn explode_trojan(trojan: &str) -> ParseResult<Proxy> {
    let content = strip_scheme(trojan, ProxyType::Trojan)?;

    let (password, server_info) = content
        .split_once('@')
        .ok_or_else(|| ParseError::malformed(ProxyType::Trojan, "missing '@'"))?;

    let mut params = Vec::new();
    let password = match password.split_once('?') {
        Some((password, query)) => {
            parse_query_into(query, &mut params);
            password
        }
        None => password,
    };
    if password.is_empty() {
        return Err(ParseError::malformed(ProxyType::Trojan, "missing password"));
    }

    let server = parse_server_info(ProxyType::Trojan, server_info, &mut params)?;
    let sni = query_value(&params, "sni").map(url_decode);

    Ok(ProxyBuilder::new(ProxyType::Trojan, server.host, server.port)
        .original_name(server.remark.as_deref())
        .password(Some(password))
        .tls(true)
        .server_name(sni.as_deref())
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explode_trojan() {
        let node =
            explode_trojan("trojan://secret@example.com:443?sni=sni.example.com#My%20Trojan")
                .unwrap();

        assert_eq!(node.proxy_type(), ProxyType::Trojan);
        assert_eq!(node.hostname(), "example.com");
        assert_eq!(node.port(), 443);
        assert_eq!(node.password(), Some("secret"));
        assert!(node.tls_secure());
        assert_eq!(node.server_name(), Some("sni.example.com"));
        assert_eq!(node.original_name(), Some("My Trojan"));
    }

    #[test]
    fn test_explode_trojan_query_in_password() {
        let node = explode_trojan("trojan://secret?sni=a.example.com&type=ws@example.com:8443")
            .unwrap();

        assert_eq!(node.password(), Some("secret"));
        assert_eq!(node.port(), 8443);
        assert_eq!(node.server_name(), Some("a.example.com"));
        assert_eq!(node.transfer_protocol(), None);
        assert!(node.tls_secure());
    }

    #[test]
    fn test_explode_trojan_malformed() {
        assert_eq!(
            explode_trojan("trojan://example.com:443").unwrap_err(),
            ParseError::malformed(ProxyType::Trojan, "missing '@'")
        );
        assert_eq!(
            explode_trojan("trojan://secret@example.com").unwrap_err(),
            ParseError::malformed(ProxyType::Trojan, "missing port")
        );
        assert_eq!(
            explode_trojan("trojan://?sni=a.example.com@example.com:443").unwrap_err(),
            ParseError::malformed(ProxyType::Trojan, "missing password")
        );
    }
}
