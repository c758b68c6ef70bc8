use crate::models::{Proxy, ProxyBuilder, ProxyType};
use crate::parser::error::{ParseError, ParseResult};
use crate::utils::url::{parse_query_into, query_value, url_decode};

use super::common::{parse_server_info, strip_scheme};

/// Parse a VLESS link into a Proxy object
///
/// Format: `vless://uuid[?query]@host:port[/][?query][#remark]`. Query pairs from
/// both positions are read, the ones after the port winning.
pub fn explode_vless(vless: &str) -> ParseResult<Proxy> {
    let content = strip_scheme(vless, ProxyType::Vless)?;

    let (user_info, server_info) = content
        .split_once('@')
        .ok_or_else(|| ParseError::malformed(ProxyType::Vless, "missing '@'"))?;

    let mut params = Vec::new();
    let uuid = match user_info.split_once('?') {
        Some((uuid, query)) => {
            parse_query_into(query, &mut params);
            uuid
        }
        None => user_info,
    };

    let server = parse_server_info(ProxyType::Vless, server_info, &mut params)?;
    let param = |key: &str| query_value(&params, key).map(url_decode);

    Ok(ProxyBuilder::new(ProxyType::Vless, server.host, server.port)
        .original_name(server.remark.as_deref())
        .user_id(Some(uuid))
        .tls(query_value(&params, "security") == Some("tls"))
        .transfer_protocol(param("type").as_deref())
        .path(param("path").as_deref())
        .host(param("host").as_deref())
        .server_name(param("sni").as_deref())
        .build())
}
