//! Ordering and serialization of resolved browsers
//!
//! The raw module text produced here is not yet styled; it goes through a
//! [`Formatter`](crate::format::Formatter) before being written.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use crate::browsers::ResolvedBrowser;
use crate::error::Result;

/// First line of every generated module
pub const GENERATED_BANNER: &str = "// This file is auto-generated. Do not edit directly.";

/// Compare display names the way a person reading the list would
///
/// Uses the Unicode root collation: accents and case only break ties, so
/// `Ópera` sorts with the `O`s and `iOS Safari` lands between
/// `Firefox Android` and `Opera`. Names equal apart from case put lowercase
/// first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_with(root_collator().as_ref(), a, b)
}

/// Sort ascending by name; unnamed entries go last in their original order
pub fn sort_browsers(browsers: &mut [ResolvedBrowser]) {
    let collator = root_collator();
    browsers.sort_by(|a, b| match (&a.name, &b.name) {
        (Some(a), Some(b)) => compare_with(collator.as_ref(), a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = %e, "collation data unavailable, sorting by folded case");
            None
        }
    }
}

fn compare_with(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
            // Reversed code point order puts lowercase before uppercase
            .then_with(|| b.cmp(a)),
    }
}

/// Serialize browsers into the raw module template
pub fn render_module(browsers: &[ResolvedBrowser]) -> Result<String> {
    let json = serde_json::to_string_pretty(browsers)?;
    Ok(format!("{GENERATED_BANNER}\n\nexport default {json};\n"))
}
