use std::collections::HashMap;

use crate::models::Proxy;

/// Display name used for proxies whose link carries no usable tag.
pub const DEFAULT_PROXY_NAME: &str = "Proxy";

/// Per-run occurrence counter for base display names.
///
/// Each conversion run owns its own registry; counts depend on input order, so a
/// registry must never be shared between runs.
#[derive(Debug, Default)]
pub struct NameRegistry {
    seen: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the unique name for the next proxy with this tag.
    ///
    /// The tag is trimmed; an empty or missing tag becomes [`DEFAULT_PROXY_NAME`].
    /// The first occurrence keeps the base name, the n-th becomes `"<base> #n"`.
    /// Matching is exact and case-sensitive.
    pub fn unique_name(&mut self, original_name: Option<&str>) -> String {
        let base = original_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_PROXY_NAME);

        let count = self.seen.entry(base.to_string()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base.to_string()
        } else {
            format!("{} #{}", base, count)
        }
    }
}

/// Assigns every proxy its final, run-unique display name in list order.
pub fn dedupe_names(nodes: &mut [Proxy]) {
    let mut registry = NameRegistry::new();
    for node in nodes.iter_mut() {
        let name = registry.unique_name(node.original_name());
        node.assign_name(name);
    }
}
