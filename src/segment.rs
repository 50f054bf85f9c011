//! Block segmentation: carve the raw document into per-transaction fragments.
//!
//! Export documents are not reliably structured, so segmentation runs a
//! tiered fallback: a precise container-element split first, then a looser
//! service-title split, and finally a raw content scan for documents whose
//! markup has been stripped or mangled. Each tier is a plain function with
//! one shared signature, tried in order.

use crate::extract::SERVICE_NAME;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// A tier must produce at least this many fragments to win outright; a
/// single marker hit in unrelated content is not trusted on its own.
const MIN_FRAGMENTS: usize = 2;

/// Tier 1: the class-attributed block element wrapping each entry.
static CONTAINER_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div class="outer-cell[^>]*>"#).expect("invalid container marker regex")
});

/// Tier 2: the service-title paragraph preceding each entry.
static TITLE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"<p class="mdl-typography--title">{}<br /></p>"#,
        regex::escape(SERVICE_NAME)
    ))
    .expect("invalid title marker regex")
});

/// Tier 3: action verb + currency amount through the trailing GMT offset.
static ENTRY_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(?:Paid|Sent|Received|Credited)\s+[₹€$£][\d.,]+.*?GMT[+-]\d{2}:\d{2}")
        .expect("invalid entry scan regex")
});

/// Segmentation strategies in decreasing order of structural confidence.
const STRATEGIES: [fn(&str) -> Vec<&str>; 3] = [container_blocks, title_blocks, entry_scan];

/// Splits a document into candidate transaction fragments.
///
/// Returns the first tier's output that reaches [`MIN_FRAGMENTS`]. When no
/// tier does, the first non-empty tier result is used instead of being
/// discarded, so a document holding exactly one well-formed entry still
/// parses. An empty vector means "no transactions found" and is not an
/// error.
pub fn segment(doc: &str) -> Vec<&str> {
    let mut fallback: Vec<&str> = Vec::new();

    for (tier, strategy) in STRATEGIES.iter().enumerate() {
        let fragments = strategy(doc);
        debug!("segmentation tier {} produced {} fragments", tier + 1, fragments.len());

        if fragments.len() >= MIN_FRAGMENTS {
            return fragments;
        }
        if fallback.is_empty() && !fragments.is_empty() {
            fallback = fragments;
        }
    }

    fallback
}

/// Slices the document from each marker occurrence up to the next one
/// (or end of document). Fragments cannot overlap.
fn split_at_markers<'a>(doc: &'a str, marker: &Regex) -> Vec<&'a str> {
    let starts: Vec<usize> = marker.find_iter(doc).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(doc.len());
            &doc[start..end]
        })
        .collect()
}

fn container_blocks(doc: &str) -> Vec<&str> {
    split_at_markers(doc, &CONTAINER_MARKER)
}

fn title_blocks(doc: &str) -> Vec<&str> {
    split_at_markers(doc, &TITLE_MARKER)
}

fn entry_scan(doc: &str) -> Vec<&str> {
    ENTRY_SCAN.find_iter(doc).map(|m| m.as_str()).collect()
}
