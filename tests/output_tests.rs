use clashgen::generator::exports::clash::render_clash;
use clashgen::interfaces::subconverter::{convert, write_document, write_documents};
use clashgen::utils::base64::base64_encode;
use clashgen::{ClashTarget, Settings};
use serde_yaml::Value;

fn sample_links() -> Vec<String> {
    let vmess = serde_json::json!({
        "add": "example.com",
        "port": "443",
        "id": "12345678-1234-1234-1234-123456789012",
        "aid": 0,
        "net": "ws",
        "path": "/path",
        "host": "example.com",
        "tls": "tls",
        "ps": "Test VMess"
    });
    vec![
        format!("vmess://{}", base64_encode(&vmess.to_string())),
        "vless://12345678-1234-1234-1234-123456789012@example.com:443?security=tls&type=ws&path=/path#Test VLESS".to_string(),
        "trojan://secret@example.com:443?sni=sni.example.com#Trojan".to_string(),
        "ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ@example.com:8388#SS".to_string(),
    ]
}

#[cfg(test)]
mod output_tests {
    use super::*;

    #[test]
    fn test_rendered_proxies() {
        let conversion = convert(&sample_links(), &[ClashTarget::General], &Settings::default());
        let yaml = render_clash(conversion.document(ClashTarget::General).unwrap()).unwrap();
        let doc: Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(doc["port"].as_u64(), Some(7890));
        assert_eq!(doc["socks-port"].as_u64(), Some(7891));
        assert_eq!(doc["allow-lan"].as_bool(), Some(true));
        assert_eq!(doc["mode"].as_str(), Some("rule"));
        assert_eq!(doc["external-controller"].as_str(), Some("127.0.0.1:9090"));

        let vmess = &doc["proxies"][0];
        assert_eq!(vmess["name"].as_str(), Some("Test VMess"));
        assert_eq!(vmess["type"].as_str(), Some("vmess"));
        assert_eq!(vmess["port"].as_u64(), Some(443));
        assert_eq!(vmess["alterId"].as_u64(), Some(0));
        assert_eq!(vmess["cipher"].as_str(), Some("auto"));
        assert_eq!(vmess["tls"].as_bool(), Some(true));
        assert_eq!(vmess["network"].as_str(), Some("ws"));
        assert_eq!(vmess["ws-path"].as_str(), Some("/path"));
        assert_eq!(vmess["ws-headers"]["Host"].as_str(), Some("example.com"));
        assert!(vmess.get("servername").is_none());

        let vless = &doc["proxies"][1];
        assert_eq!(vless["type"].as_str(), Some("vless"));
        assert_eq!(vless["tls"].as_bool(), Some(true));
        assert!(vless.get("alterId").is_none());

        let trojan = &doc["proxies"][2];
        assert_eq!(trojan["password"].as_str(), Some("secret"));
        assert_eq!(trojan["sni"].as_str(), Some("sni.example.com"));
        assert_eq!(trojan["tls"].as_bool(), Some(true));

        let ss = &doc["proxies"][3];
        assert_eq!(ss["type"].as_str(), Some("ss"));
        assert_eq!(ss["cipher"].as_str(), Some("aes-256-gcm"));
        assert_eq!(ss["password"].as_str(), Some("password"));

        let auto = &doc["proxy-groups"][1];
        assert_eq!(auto["type"].as_str(), Some("url-test"));
        assert_eq!(auto["interval"].as_u64(), Some(300));
        assert_eq!(auto["tolerance"].as_u64(), Some(50));
        assert_eq!(auto["proxies"].as_sequence().map(Vec::len), Some(4));

        assert_eq!(
            doc["rule-providers"]["ir"]["path"].as_str(),
            Some("./ruleset/ir.yaml")
        );
        assert_eq!(doc["rules"].as_sequence().and_then(|r| r.last()).and_then(Value::as_str), Some("MATCH,PROXY"));
        assert!(!yaml.contains("null"));
    }

    #[test]
    fn test_write_documents_to_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.general_output = dir.path().join("clash.yaml").display().to_string();
        settings.meta_output = dir.path().join("clash_meta.yaml").display().to_string();

        let conversion = convert(
            &sample_links(),
            &[ClashTarget::General, ClashTarget::Meta],
            &settings,
        );
        assert_eq!(write_documents(&conversion, &settings), 0);

        let meta = std::fs::read_to_string(dir.path().join("clash_meta.yaml")).unwrap();
        assert!(meta.starts_with("geox-url:"));
        let meta: Value = serde_yaml::from_str(&meta).unwrap();
        assert_eq!(meta["proxies"].as_sequence().map(Vec::len), Some(4));

        let general = std::fs::read_to_string(dir.path().join("clash.yaml")).unwrap();
        assert!(general.starts_with("port: 7890"));
    }

    #[test]
    fn test_failed_write_keeps_other_documents() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.general_output = dir.path().join("missing/dir/clash.yaml").display().to_string();
        settings.meta_output = dir.path().join("clash_meta.yaml").display().to_string();

        let conversion = convert(
            &sample_links(),
            &[ClashTarget::General, ClashTarget::Meta],
            &settings,
        );
        assert_eq!(write_documents(&conversion, &settings), 1);
        assert!(dir.path().join("clash_meta.yaml").exists());
        assert_eq!(conversion.proxies.len(), 4);

        let general = conversion.document(ClashTarget::General).unwrap();
        assert!(write_document(dir.path().join("retry.yaml"), general).is_ok());
    }
}
