use once_cell::sync::Lazy;
use scraper::{ElementRef, Html};
use url::Url;

use super::types::FormLocator;
use crate::selectors::{FORM_SELECTOR, HEADING_SELECTOR, PAGE_FORM_SELECTOR};

static SITE_ORIGIN: Lazy<Url> =
    Lazy::new(|| Url::parse("https://boxrec.com/").expect("valid site origin"));

/// Split a profile href into `(segment, id)`.
///
/// The path must end with `/<segment>/<digits>`; relative hrefs are resolved
/// against the site origin.
pub(super) fn profile_link_parts(href: &str) -> Option<(String, u64)> {
    let url = Url::options()
        .base_url(Some(&SITE_ORIGIN))
        .parse(href.trim())
        .ok()?;
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    let (last, rest) = segments.split_last()?;
    if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let segment = rest.last()?;
    let id = last.parse().ok()?;
    Some((segment.to_string(), id))
}

/// Count the `<td>` children of a table row.
pub(super) fn count_cells(row: ElementRef<'_>) -> usize {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .count()
}

pub(super) fn locate_form<'a>(doc: &'a Html, locator: &FormLocator) -> Option<ElementRef<'a>> {
    match locator {
        FormLocator::PageContainer => doc.select(&PAGE_FORM_SELECTOR).next(),
        FormLocator::ActionContains(fragment) => doc.select(&FORM_SELECTOR).find(|form| {
            form.value()
                .attr("action")
                .map(|action| action.contains(fragment.as_str()))
                .unwrap_or(false)
        }),
        FormLocator::UnderHeading(text) => doc
            .select(&HEADING_SELECTOR)
            .filter(|h| h.text().collect::<String>().contains(text.as_str()))
            .filter_map(|h| {
                h.ancestors()
                    .filter_map(ElementRef::wrap)
                    .find(|el| el.value().name() == "td")
            })
            .find_map(|cell| cell.select(&FORM_SELECTOR).next()),
    }
}
