use crate::models::{Proxy, ProxyBuilder, ProxyType};
use crate::parser::error::{ParseError, ParseResult};
use crate::utils::base64::base64_decode_tolerant;
use serde_json::Value;

use super::common::{parse_port, strip_scheme};

/// Reads a JSON field that may be written either as a string or as a number.
///
/// Whole-number floats such as `443.0` read as their integer text.
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(u), _) => Some(u.to_string()),
            (None, Some(f)) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                Some((f as u64).to_string())
            }
            _ => Some(n.to_string()),
        },
        _ => None,
    }
}

/// Parse a VMess link into a Proxy object
///
/// Format: `vmess://` followed by base64 (padding optional) of a JSON object
/// carrying `add`, `port` and the optional `id`, `aid`, `scy`, `tls`, `net`,
/// `path`, `host`, `sni` and `ps` keys.
pub fn explode_vmess(vmess: &str) -> ParseResult<Proxy> {
    let encoded = strip_scheme(vmess, ProxyType::VMess)?;

    let decoded = base64_decode_tolerant(encoded)
        .ok_or_else(|| ParseError::decode(ProxyType::VMess, "invalid base64 payload"))?;

    let json: Value = serde_json::from_str(&decoded)
        .map_err(|e| ParseError::decode(ProxyType::VMess, e.to_string()))?;
    if !json.is_object() {
        return Err(ParseError::decode(
            ProxyType::VMess,
            "payload is not a JSON object",
        ));
    }

    let add = json["add"].as_str().unwrap_or("");
    if add.is_empty() {
        return Err(ParseError::malformed(ProxyType::VMess, "missing server"));
    }

    let port = json_text(&json["port"]).unwrap_or_default();
    if port.is_empty() || port == "0" {
        return Err(ParseError::malformed(ProxyType::VMess, "missing port"));
    }
    let port = parse_port(&port)?;

    let aid = match json_text(&json["aid"]) {
        Some(aid) if !aid.is_empty() => {
            aid.trim()
                .parse::<u16>()
                .map_err(|_| ParseError::CoercionFailure {
                    field: "alterId",
                    value: aid.clone(),
                })?
        }
        _ => 0,
    };

    let cipher = json["scy"]
        .as_str()
        .filter(|s| !s.is_empty())
        .unwrap_or("auto");
    let remark = json_text(&json["ps"]);

    Ok(ProxyBuilder::new(ProxyType::VMess, add, port)
        .original_name(remark.as_deref())
        .user_id(json["id"].as_str())
        .alter_id(aid)
        .encrypt_method(Some(cipher))
        .tls(json["tls"].as_str() == Some("tls"))
        .transfer_protocol(json["net"].as_str())
        .path(json["path"].as_str())
        .host(json["host"].as_str())
        .server_name(json["sni"].as_str())
        .build())
}
