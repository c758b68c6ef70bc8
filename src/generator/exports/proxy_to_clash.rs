use linked_hash_map::LinkedHashMap;

use crate::generator::yaml::clash_output::{ClashProxy, ClashProxyOptions, TransportOptions};
use crate::models::{Proxy, ProxyType};

fn transport_options(node: &Proxy) -> TransportOptions {
    let ws_headers = node.host().map(|host| {
        let mut headers = LinkedHashMap::new();
        headers.insert("Host".to_string(), host.to_string());
        headers
    });

    TransportOptions {
        network: node.transfer_protocol().map(str::to_string),
        ws_path: node.path().map(str::to_string),
        ws_headers,
        servername: node.server_name().map(str::to_string),
    }
}

/// Convert a proxy into its Clash proxy definition
pub fn proxy_to_clash(node: &Proxy) -> ClashProxy {
    let options = match node.proxy_type() {
        ProxyType::VMess => ClashProxyOptions::VMess {
            uuid: node.user_id().map(str::to_string),
            alter_id: node.alter_id(),
            cipher: node.encrypt_method().unwrap_or("auto").to_string(),
            tls: node.tls_secure(),
            transport: transport_options(node),
        },
        ProxyType::Vless => ClashProxyOptions::Vless {
            uuid: node.user_id().map(str::to_string),
            tls: node.tls_secure(),
            transport: transport_options(node),
        },
        ProxyType::Trojan => ClashProxyOptions::Trojan {
            password: node.password().unwrap_or_default().to_string(),
            tls: true,
            sni: node.server_name().map(str::to_string),
        },
        ProxyType::Shadowsocks => ClashProxyOptions::Shadowsocks {
            cipher: node.encrypt_method().unwrap_or_default().to_string(),
            password: node.password().unwrap_or_default().to_string(),
        },
    };

    ClashProxy {
        name: node.name().to_string(),
        proxy_type: node.proxy_type().as_str(),
        server: node.hostname().to_string(),
        port: node.port(),
        options,
    }
}
