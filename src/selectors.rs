//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for the canonical self link of a page.
pub static CANONICAL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("link[rel='canonical'][href]").expect("valid canonical selector"));

/// Selector for the first row of the body that follows a data table's header.
pub static PRIMARY_ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".dataTable tbody:nth-child(2) > tr:nth-child(1)")
        .expect("valid primary row selector")
});

/// Selector for profile links inside data tables.
pub static TABLE_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".dataTable a[href]").expect("valid table link selector"));

/// Selector for forms inside the main page container.
pub static PAGE_FORM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".page form").expect("valid page form selector"));

/// Selector for any `<form>`.
pub static FORM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("form").expect("valid form selector"));

/// Selector for section headings.
pub static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2").expect("valid heading selector"));

/// Selector for the password input of the login form.
pub static PASSWORD_INPUT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("input[name='_password']").expect("valid password selector"));
