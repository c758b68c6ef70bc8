use crate::models::{Proxy, ProxyType};
use crate::parser::error::{ParseError, ParseResult};
use crate::utils::url::{parse_query_into, split_fragment, split_host_port};

/// Explode a proxy link into a Proxy object
///
/// The dialect is chosen once from the scheme prefix; links with any other
/// scheme yield [`ParseError::UnrecognizedScheme`].
pub fn explode(link: &str) -> ParseResult<Proxy> {
    let link = link.trim();

    match ProxyType::from_link(link) {
        Some(ProxyType::VMess) => super::vmess::explode_vmess(link),
        Some(ProxyType::Vless) => super::vless::explode_vless(link),
        Some(ProxyType::Trojan) => super::trojan::explode_trojan(link),
        Some(ProxyType::Shadowsocks) => super::ss::explode_ss(link),
        None => Err(ParseError::UnrecognizedScheme),
    }
}

/// Strips the dialect's scheme prefix from a link.
pub(super) fn strip_scheme(link: &str, proxy_type: ProxyType) -> ParseResult<&str> {
    link.strip_prefix(proxy_type.scheme())
        .ok_or(ParseError::UnrecognizedScheme)
}

/// Parses a port number, rejecting anything outside 1..=65535.
pub(super) fn parse_port(value: &str) -> ParseResult<u16> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ParseError::CoercionFailure {
            field: "port",
            value: value.to_string(),
        }),
    }
}

/// The `host:port[/][?query][#tag]` half of a share link.
#[derive(Debug)]
pub(super) struct ServerInfo<'a> {
    pub host: &'a str,
    pub port: u16,
    pub remark: Option<String>,
}

/// Parses the server half of a link, appending any query pairs to `params`.
pub(super) fn parse_server_info<'a>(
    proxy_type: ProxyType,
    server_info: &'a str,
    params: &mut Vec<(String, String)>,
) -> ParseResult<ServerInfo<'a>> {
    let (address, remark) = split_fragment(server_info);

    let address = match address.split_once('?') {
        Some((address, query)) => {
            parse_query_into(query, params);
            address
        }
        None => address,
    };
    let address = address.trim_end_matches('/');

    let (host, port) = split_host_port(address)
        .ok_or_else(|| ParseError::malformed(proxy_type, "missing port"))?;
    if host.is_empty() {
        return Err(ParseError::malformed(proxy_type, "missing server"));
    }
    if port.is_empty() {
        return Err(ParseError::malformed(proxy_type, "missing port"));
    }

    Ok(ServerInfo {
        host,
        port: parse_port(port)?,
        remark,
    })
}
