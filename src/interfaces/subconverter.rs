//! One-call conversion from share links to Clash documents

use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info};

use crate::generator::exports::clash::{proxy_to_clash_output, render_clash, ClashTarget};
use crate::generator::yaml::clash_output::ClashYamlOutput;
use crate::models::Proxy;
use crate::parser::{dedupe_names, explode_links, ParseError};
use crate::settings::Settings;

/// Result of one conversion run
#[derive(Debug)]
pub struct Conversion {
    /// Accepted proxies with their final names, in input order
    pub proxies: Vec<Proxy>,
    /// Rejected links with their 1-based position in the input
    pub failures: Vec<(usize, ParseError)>,
    /// One document per requested target, in request order
    pub documents: Vec<(ClashTarget, ClashYamlOutput)>,
}

impl Conversion {
    pub fn document(&self, target: ClashTarget) -> Option<&ClashYamlOutput> {
        self.documents
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, doc)| doc)
    }
}

/// Convert share links into the requested Clash documents.
///
/// Links are decoded and named exactly once, however many targets are requested.
/// Bad links are skipped; this call itself never fails.
pub fn convert<S: AsRef<str>>(
    links: &[S],
    targets: &[ClashTarget],
    settings: &Settings,
) -> Conversion {
    let report = explode_links(links);
    let malformed = report.malformed_count();
    let mut proxies = report.proxies;
    dedupe_names(&mut proxies);
    info!(
        "Processed {} of {} links into proxies, {} malformed",
        proxies.len(),
        links.len(),
        malformed
    );

    let mut documents: Vec<(ClashTarget, ClashYamlOutput)> = Vec::with_capacity(targets.len());
    for &target in targets {
        if documents.iter().any(|(t, _)| *t == target) {
            continue;
        }
        documents.push((target, proxy_to_clash_output(&proxies, target, settings)));
    }

    Conversion {
        proxies,
        failures: report.failures,
        documents,
    }
}

/// Configured output path for a target.
pub fn output_path(target: ClashTarget, settings: &Settings) -> &str {
    match target {
        ClashTarget::General => &settings.general_output,
        ClashTarget::Meta => &settings.meta_output,
    }
}

/// Render a document and write it to `path`.
pub fn write_document(path: impl AsRef<Path>, output: &ClashYamlOutput) -> Result<()> {
    let path = path.as_ref();
    let content = render_clash(output).context("Failed to render Clash document")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write '{}'", path.display()))
}

/// Write every document of a conversion to its configured path.
///
/// A failed write is logged and reported but does not stop the remaining writes.
/// Returns the number of documents that could not be written.
pub fn write_documents(conversion: &Conversion, settings: &Settings) -> usize {
    let mut failed = 0;
    for (target, output) in &conversion.documents {
        let path = output_path(*target, settings);
        match write_document(path, output) {
            Ok(()) => info!("Wrote {} config to {}", target, path),
            Err(e) => {
                error!("Failed to save {} config: {:#}", target, e);
                failed += 1;
            }
        }
    }
    failed
}
