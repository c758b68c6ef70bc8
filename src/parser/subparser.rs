use log::{debug, warn};

use crate::models::Proxy;
use crate::parser::error::ParseError;
use crate::parser::explodes::explode;
use crate::utils::base64::base64_decode_tolerant;

/// Outcome of exploding a batch of links.
#[derive(Debug, Default)]
pub struct ExplodeReport {
    /// Accepted proxies, in input order
    pub proxies: Vec<Proxy>,
    /// Rejected entries with their 1-based position in the input
    pub failures: Vec<(usize, ParseError)>,
}

impl ExplodeReport {
    /// Number of rejected entries that were not merely an unsupported scheme.
    pub fn malformed_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|(_, e)| *e != ParseError::UnrecognizedScheme)
            .count()
    }
}

/// Explode every link in order, keeping the ones that parse.
///
/// A bad link only removes its own entry: the failure is logged with the link's
/// 1-based position and recorded in the report, and the batch carries on.
pub fn explode_links<S: AsRef<str>>(links: &[S]) -> ExplodeReport {
    let mut report = ExplodeReport::default();

    for (idx, link) in links.iter().enumerate() {
        let idx = idx + 1;
        match explode(link.as_ref()) {
            Ok(node) => report.proxies.push(node),
            Err(ParseError::UnrecognizedScheme) => {
                debug!("Skipping link #{}: unrecognized scheme", idx);
                report.failures.push((idx, ParseError::UnrecognizedScheme));
            }
            Err(e) => {
                warn!("Failed to process link #{}: {}", idx, e);
                report.failures.push((idx, e));
            }
        }
    }

    report
}

/// Split a link list into individual links.
///
/// Content without any `://` is treated as a base64 subscription body and decoded
/// first. Blank lines and lines starting with `#` or `//` are dropped.
pub fn split_links(content: &str) -> Vec<String> {
    let decoded;
    let content = if content.contains("://") {
        content
    } else {
        match base64_decode_tolerant(&content.replace(['\r', '\n'], "")) {
            Some(body) => {
                decoded = body;
                decoded.as_str()
            }
            None => content,
        }
    };

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("//"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::base64_encode;

    #[test]
    fn test_explode_links_isolates_failures() {
        let links = vec![
            "trojan://pass@a.example.com:443#A",
            "http://example.com",
            "vless://missing-at-sign",
            "ss://%%%",
            "trojan://pass@b.example.com:443#B",
        ];
        let report = explode_links(&links);

        assert_eq!(report.proxies.len(), 2);
        assert_eq!(report.proxies[0].hostname(), "a.example.com");
        assert_eq!(report.proxies[1].hostname(), "b.example.com");

        let failed: Vec<usize> = report.failures.iter().map(|(idx, _)| *idx).collect();
        assert_eq!(failed, vec![2, 3, 4]);
        assert_eq!(report.failures[0].1, ParseError::UnrecognizedScheme);
        assert_eq!(report.malformed_count(), 2);
    }

    #[test]
    fn test_explode_links_empty() {
        let links: Vec<String> = Vec::new();
        let report = explode_links(&links);
        assert!(report.proxies.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_split_links_plain() {
        let content = "\n# comment\ntrojan://a@b:1\n  \n// note\n  ss://x@y:2  \n";
        assert_eq!(split_links(content), vec!["trojan://a@b:1", "ss://x@y:2"]);
    }

    #[test]
    fn test_split_links_base64_subscription() {
        let body = base64_encode("trojan://a@b:1\nvless://c@d:2\n");
        assert_eq!(split_links(&body), vec!["trojan://a@b:1", "vless://c@d:2"]);
    }
}
