//! HTML Query Helpers
//!
//! Pure extraction functions over a page body. Missing or malformed markup is
//! never an error: every helper falls back to an empty result.

pub mod types;
mod utils;

pub use types::*;
use utils::*;

use crate::role::{Role, RoleVocabulary};
use crate::selectors::{
    CANONICAL_SELECTOR, PASSWORD_INPUT_SELECTOR, PRIMARY_ROW_SELECTOR, TABLE_LINK_SELECTOR,
};
use scraper::Html;
use std::collections::HashSet;

/// Role of a profile page, read from its canonical link.
pub fn extract_role(html: &str, vocabulary: &RoleVocabulary) -> Option<Role> {
    let doc = Html::parse_document(html);
    let href = doc
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|link| link.value().attr("href"))?;
    let (segment, _) = profile_link_parts(href)?;
    vocabulary.role_for_segment(&segment)
}

/// Number of cells in the first row of the primary data table, `0` if there
/// is no such table.
pub fn count_primary_table_columns(html: &str) -> usize {
    let doc = Html::parse_document(html);
    doc.select(&PRIMARY_ROW_SELECTOR)
        .next()
        .map(count_cells)
        .unwrap_or(0)
}

/// `name` attribute of the located form, empty if absent.
pub fn extract_form_name(html: &str, locator: &FormLocator) -> String {
    let doc = Html::parse_document(html);
    locate_form(&doc, locator)
        .and_then(|form| form.value().attr("name"))
        .map(|name| name.trim().to_string())
        .unwrap_or_default()
}

/// Person ids linked from data tables, in document order.
pub fn extract_person_ids(html: &str, vocabulary: &RoleVocabulary) -> Vec<u64> {
    let doc = Html::parse_document(html);
    let mut seen = HashSet::new();
    doc.select(&TABLE_LINK_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(profile_link_parts)
        .filter(|(segment, _)| vocabulary.role_for_segment(segment).is_some())
        .map(|(_, id)| id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Whether the page still shows the login form.
pub fn has_login_form(html: &str) -> bool {
    Html::parse_document(html)
        .select(&PASSWORD_INPUT_SELECTOR)
        .next()
        .is_some()
}
