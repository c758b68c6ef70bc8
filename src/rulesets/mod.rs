//! Static routing skeleton shared by every generated document
//!
//! Rule sets and geo databases come from the Chocolate4U Iran rule collections.

use linked_hash_map::LinkedHashMap;

use crate::generator::yaml::clash_output::{GeoxUrl, RuleProvider};

const RULE_SET_BASE: &str = "https://raw.githubusercontent.com/Chocolate4U/Iran-clash-rules/release";
const RULE_SET_INTERVAL: u32 = 86400;

/// `(name, behavior)` of every remote rule set, in document order.
const RULE_PROVIDERS: &[(&str, &str)] = &[
    ("ir", "domain"),
    ("ads", "domain"),
    ("malware", "domain"),
    ("phishing", "domain"),
    ("cryptominers", "domain"),
    ("apps", "classical"),
    ("ircidr", "ipcidr"),
    ("private", "ipcidr"),
    ("irasn", "classical"),
];

/// Rules for clients that load remote rule sets.
pub const RULE_SET_RULES: &[&str] = &[
    "RULE-SET,private,DIRECT,no-resolve",
    "RULE-SET,apps,DIRECT",
    "RULE-SET,ads,REJECT",
    "RULE-SET,malware,REJECT",
    "RULE-SET,phishing,REJECT",
    "RULE-SET,cryptominers,REJECT",
    "RULE-SET,ir,DIRECT",
    "RULE-SET,ircidr,DIRECT",
    "RULE-SET,irasn,DIRECT",
    "MATCH,PROXY",
];

/// Rules for Clash.Meta, matched against its geo databases.
pub const GEO_RULES: &[&str] = &[
    "GEOIP,private,DIRECT,no-resolve",
    "GEOSITE,category-ads-all,REJECT",
    "GEOSITE,malware,REJECT",
    "GEOSITE,phishing,REJECT",
    "GEOSITE,cryptominers,REJECT",
    "GEOIP,malware,REJECT",
    "GEOIP,phishing,REJECT",
    "GEOSITE,ir,DIRECT",
    "GEOIP,ir,DIRECT",
    "MATCH,PROXY",
];

/// Builds the `rule-providers` mapping referenced by [`RULE_SET_RULES`].
pub fn rule_providers() -> LinkedHashMap<String, RuleProvider> {
    RULE_PROVIDERS
        .iter()
        .map(|(name, behavior)| {
            let provider = RuleProvider {
                provider_type: "http".to_string(),
                format: "yaml".to_string(),
                behavior: behavior.to_string(),
                url: format!("{}/{}.yaml", RULE_SET_BASE, name),
                path: format!("./ruleset/{}.yaml", name),
                interval: RULE_SET_INTERVAL,
            };
            (name.to_string(), provider)
        })
        .collect()
}

/// Geo database locations for Clash.Meta.
pub fn geox_url() -> GeoxUrl {
    GeoxUrl {
        geoip: "https://raw.githubusercontent.com/Chocolate4U/Iran-v2ray-rules/release/geoip.dat"
            .to_string(),
        geosite:
            "https://raw.githubusercontent.com/Chocolate4U/Iran-v2ray-rules/release/geosite.dat"
                .to_string(),
        mmdb: format!("{}/geoip.metadb", RULE_SET_BASE),
        asn: "https://raw.githubusercontent.com/Chocolate4U/Iran-v2ray-rules/geolite2/GeoLite2-ASN.mmdb"
            .to_string(),
    }
}
