use std::fmt;

use crate::generator::config::group::build_proxy_groups;
use crate::generator::yaml::clash_output::{ClashProxyGroup, ClashYamlOutput};
use crate::models::Proxy;
use crate::rulesets;
use crate::settings::Settings;

use super::proxy_to_clash::proxy_to_clash;

/// Flavour of Clash document to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClashTarget {
    /// Plain Clash, routing through remote rule sets
    General,
    /// Clash.Meta, routing through GEOIP/GEOSITE databases
    Meta,
}

impl ClashTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            ClashTarget::General => "general",
            ClashTarget::Meta => "meta",
        }
    }
}

impl fmt::Display for ClashTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert proxies to a Clash document
///
/// `nodes` must already carry their final, unique names. Group membership is
/// derived from this list, so the groups always match the proxies in order.
pub fn proxy_to_clash_output(
    nodes: &[Proxy],
    target: ClashTarget,
    settings: &Settings,
) -> ClashYamlOutput {
    let proxy_names: Vec<String> = nodes.iter().map(|node| node.name().to_string()).collect();
    let proxy_groups = build_proxy_groups(&proxy_names, settings)
        .iter()
        .map(ClashProxyGroup::from)
        .collect();

    let (geox_url, rule_providers, rules) = match target {
        ClashTarget::General => (None, Some(rulesets::rule_providers()), rulesets::RULE_SET_RULES),
        ClashTarget::Meta => (Some(rulesets::geox_url()), None, rulesets::GEO_RULES),
    };

    ClashYamlOutput {
        geox_url,
        port: settings.port,
        socks_port: settings.socks_port,
        allow_lan: settings.allow_lan,
        mode: settings.mode.clone(),
        log_level: settings.log_level.clone(),
        external_controller: settings.external_controller.clone(),
        proxies: nodes.iter().map(proxy_to_clash).collect(),
        proxy_groups,
        rule_providers,
        rules: rules.iter().map(|rule| rule.to_string()).collect(),
    }
}

/// Render a Clash document as YAML text
pub fn render_clash(output: &ClashYamlOutput) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(output)
}
