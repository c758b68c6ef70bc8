use crate::models::{ProxyGroupConfig, ProxyGroupConfigs, ProxyGroupType};
use crate::settings::Settings;

/// Name of the top-level selection group that `MATCH` rules point at.
pub const PROXY_GROUP: &str = "PROXY";
/// Name of the latency-tested automatic selection group.
pub const AUTO_GROUP: &str = "AUTO";

/// Build the fixed group topology around the given proxy names.
///
/// `PROXY` offers `AUTO` followed by every proxy, `AUTO` tests every proxy, and
/// `DIRECT`/`REJECT` wrap the built-in policies of the same name.
pub fn build_proxy_groups(
    proxy_names: &[String],
    settings: &Settings,
) -> ProxyGroupConfigs {
    let mut selectable = Vec::with_capacity(proxy_names.len() + 1);
    selectable.push(AUTO_GROUP.to_string());
    selectable.extend(proxy_names.iter().cloned());

    let mut auto =
        ProxyGroupConfig::new(AUTO_GROUP, ProxyGroupType::URLTest, proxy_names.to_vec());
    auto.url = Some(settings.test_url.clone());
    auto.interval = Some(settings.test_interval);
    auto.tolerance = Some(settings.test_tolerance);

    vec![
        ProxyGroupConfig::new(PROXY_GROUP, ProxyGroupType::Select, selectable),
        auto,
        ProxyGroupConfig::new("DIRECT", ProxyGroupType::Select, vec!["DIRECT".to_string()]),
        ProxyGroupConfig::new("REJECT", ProxyGroupType::Select, vec!["REJECT".to_string()]),
    ]
}
