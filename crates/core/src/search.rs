//! Search filter and page-number helpers for planet listings.
//!
//! This module lives in `core` (zero internal deps) so the repository layer and
//! both store backends share one definition of "matches the name query".

use regex::{Regex, RegexBuilder};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Fixed number of planets per search page.
pub const PAGE_SIZE: i64 = 30;

/// Pages are 1-indexed; anything missing, unparsable, or lower clamps to this.
pub const FIRST_PAGE: i64 = 1;

// ---------------------------------------------------------------------------
// Name filter
// ---------------------------------------------------------------------------

/// A case-insensitive literal substring pattern over planet names.
#[derive(Debug, Clone)]
pub struct NamePattern {
    term: String,
    source: String,
    regex: Regex,
}

impl NamePattern {
    /// The trimmed search term as supplied by the caller.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Escaped regex source, suitable for PostgreSQL's `~*` operator.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Predicate applied to the `name` field when searching.
#[derive(Debug, Clone)]
pub enum NameFilter {
    /// Match every planet.
    All,
    /// Match planets whose name contains the pattern, ignoring case.
    Contains(NamePattern),
}

impl NameFilter {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameFilter::All => true,
            NameFilter::Contains(pattern) => pattern.is_match(name),
        }
    }

    /// Regex source for the store, or `None` when the filter matches all.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            NameFilter::All => None,
            NameFilter::Contains(pattern) => Some(pattern.source()),
        }
    }
}

/// Build the name predicate for a search.
///
/// - `None`, empty, or whitespace-only input matches everything.
/// - Anything else is matched as a literal, case-insensitive substring.
///   Regex metacharacters in the query are escaped.
pub fn build_filter(name_query: Option<&str>) -> Result<NameFilter, CoreError> {
    let term = match name_query.map(str::trim) {
        None | Some("") => return Ok(NameFilter::All),
        Some(term) => term,
    };

    let source = regex::escape(term);
    let regex = RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|e| CoreError::Validation(format!("name: invalid search term: {e}")))?;

    Ok(NameFilter::Contains(NamePattern {
        term: term.to_string(),
        source,
        regex,
    }))
}

// ---------------------------------------------------------------------------
// Page parsing
// ---------------------------------------------------------------------------

/// Parse the raw `page` query parameter.
///
/// Missing or non-numeric input yields [`FIRST_PAGE`]; numbers below it are
/// clamped up to it.
pub fn compute_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(FIRST_PAGE)
        .max(FIRST_PAGE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
