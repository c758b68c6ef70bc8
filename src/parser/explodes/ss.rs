use crate::models::{Proxy, ProxyBuilder, ProxyType};
use crate::parser::error::{ParseError, ParseResult};
use crate::utils::base64::base64_decode_tolerant;
use crate::utils::url::{split_fragment, split_host_port};

use super::common::{parse_port, parse_server_info, strip_scheme};

/// Parse a Shadowsocks link into a Proxy object
///
/// Two layouts are accepted:
/// - SIP002: `ss://base64(method:password)@host:port[#remark]`, where the userinfo
///   may also be written literally as `method:password`
/// - legacy: `ss://base64(method:password@host:port)[#remark]`
pub fn explode_ss(ss: &str) -> ParseResult<Proxy> {
    let content = strip_scheme(ss, ProxyType::Shadowsocks)?;

    let (body, _) = split_fragment(content);
    if body.contains('@') {
        explode_ss_sip002(content)
    } else {
        explode_ss_legacy(content)
    }
}

/// Splits `method:password` on the first `:`. Both halves must be non-empty.
fn split_method_password(secret: &str) -> Option<(&str, &str)> {
    secret
        .split_once(':')
        .filter(|(method, password)| !method.is_empty() && !password.is_empty())
}

fn explode_ss_sip002(content: &str) -> ParseResult<Proxy> {
    let (user_info, server_info) = content
        .split_once('@')
        .ok_or_else(|| ParseError::malformed(ProxyType::Shadowsocks, "missing '@'"))?;

    let decoded = base64_decode_tolerant(user_info);
    let (method, password) = match decoded.as_deref().and_then(split_method_password) {
        Some((method, password)) => (method.to_string(), password.to_string()),
        None => {
            let (method, password) = split_method_password(user_info).ok_or_else(|| {
                ParseError::malformed(ProxyType::Shadowsocks, "userinfo is not method:password")
            })?;
            (method.to_string(), password.to_string())
        }
    };

    // plugin parameters are not carried over
    let mut params = Vec::new();
    let server = parse_server_info(ProxyType::Shadowsocks, server_info, &mut params)?;

    Ok(ProxyBuilder::new(ProxyType::Shadowsocks, server.host, server.port)
        .original_name(server.remark.as_deref())
        .encrypt_method(Some(&method))
        .password(Some(&password))
        .build())
}

fn explode_ss_legacy(content: &str) -> ParseResult<Proxy> {
    let (encoded, remark) = split_fragment(content);
    let encoded = match encoded.split_once('?') {
        Some((encoded, _)) => encoded,
        None => encoded,
    };
    let encoded = encoded.trim_end_matches('/');

    let decoded = base64_decode_tolerant(encoded)
        .ok_or_else(|| ParseError::decode(ProxyType::Shadowsocks, "invalid base64 payload"))?;

    let layout_error =
        || ParseError::decode(ProxyType::Shadowsocks, "payload is not method:password@host:port");
    let (secret, server_port) = decoded.rsplit_once('@').ok_or_else(layout_error)?;
    let (method, password) = split_method_password(secret).ok_or_else(layout_error)?;
    let (host, port) = split_host_port(server_port)
        .filter(|(host, _)| !host.is_empty())
        .ok_or_else(layout_error)?;
    let port = parse_port(port)?;

    Ok(ProxyBuilder::new(ProxyType::Shadowsocks, host, port)
        .original_name(remark.as_deref())
        .encrypt_method(Some(method))
        .password(Some(password))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::base64_encode;

    #[test]
    fn test_explode_ss_legacy_format() {
        // Legacy format: ss://base64(method:password@server:port)
        let legacy_ss = "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZEAxMjcuMC4wLjE6ODA4MA==";
        let node = explode_ss(legacy_ss).unwrap();

        assert_eq!(node.proxy_type(), ProxyType::Shadowsocks);
        assert_eq!(node.hostname(), "127.0.0.1");
        assert_eq!(node.port(), 8080);
        assert_eq!(node.encrypt_method(), Some("chacha20-ietf-poly1305"));
        assert_eq!(node.password(), Some("password"));
        assert_eq!(node.original_name(), None);
    }

    #[test]
    fn test_explode_ss_legacy_unpadded_with_fragment() {
        let encoded = base64_encode("aes-256-gcm:p@ss@example.com:8388");
        let link = format!("ss://{}#Legacy%20Node", encoded.trim_end_matches('='));
        let node = explode_ss(&link).unwrap();

        assert_eq!(node.hostname(), "example.com");
        assert_eq!(node.port(), 8388);
        assert_eq!(node.password(), Some("p@ss"));
        assert_eq!(node.original_name(), Some("Legacy Node"));
    }

    #[test]
    fn test_explode_ss_legacy_undecodable() {
        assert!(matches!(
            explode_ss("ss://%%%not-base64%%%#tag"),
            Err(ParseError::DecodeFailure { .. })
        ));

        let no_server = format!("ss://{}", base64_encode("aes-256-gcm:password"));
        assert!(matches!(
            explode_ss(&no_server),
            Err(ParseError::DecodeFailure { .. })
        ));
    }

    #[test]
    fn test_explode_ss_sip002_format() {
        // SIP002 format: ss://base64(method:password)@server:port
        let sip002_ss = "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZA==@example.com:8388";
        let node = explode_ss(sip002_ss).unwrap();

        assert_eq!(node.proxy_type(), ProxyType::Shadowsocks);
        assert_eq!(node.hostname(), "example.com");
        assert_eq!(node.port(), 8388);
        assert_eq!(node.encrypt_method(), Some("chacha20-ietf-poly1305"));
        assert_eq!(node.password(), Some("password"));
    }

    #[test]
    fn test_explode_ss_with_fragment() {
        let ss_with_fragment =
            "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZA==@example.com:8388#Example%20Server";
        let node = explode_ss(ss_with_fragment).unwrap();

        assert_eq!(node.original_name(), Some("Example Server"));
    }

    #[test]
    fn test_explode_ss_literal_userinfo() {
        let node = explode_ss("ss://2022-blake3-aes-128-gcm:c2VjcmV0@example.com:443#Plain").unwrap();

        assert_eq!(node.encrypt_method(), Some("2022-blake3-aes-128-gcm"));
        assert_eq!(node.password(), Some("c2VjcmV0"));
        assert_eq!(node.original_name(), Some("Plain"));
    }

    #[test]
    fn test_explode_ss_ignores_plugin() {
        let link = "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZA==@example.com:8388/?plugin=obfs-local%3Bobfs%3Dhttp#Example";
        let node = explode_ss(link).unwrap();

        assert_eq!(node.port(), 8388);
        assert_eq!(node.original_name(), Some("Example"));
    }

    #[test]
    fn test_explode_ss_sip002_malformed() {
        assert_eq!(
            explode_ss("ss://garbage@example.com:8388").unwrap_err(),
            ParseError::malformed(ProxyType::Shadowsocks, "userinfo is not method:password")
        );
        assert_eq!(
            explode_ss("ss://aes-256-gcm:pw@example.com").unwrap_err(),
            ParseError::malformed(ProxyType::Shadowsocks, "missing port")
        );
    }
}
