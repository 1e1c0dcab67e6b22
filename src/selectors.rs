use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Answer bodies, newest markup generation first.
pub(crate) static ANSWER_BODY: Lazy<SelectorChain> = Lazy::new(|| {
    SelectorChain::new(&[".answercell .js-post-body", ".answercell .post-text"])
});

/// Tag anchors, preferring the tags container when the page has one.
pub(crate) static TAG_ANCHORS: Lazy<SelectorChain> =
    Lazy::new(|| SelectorChain::new(&[".tags a.post-tag", "a.post-tag"]));

/// A prioritized list of CSS selectors tried in order. The first selector
/// that matches anything supplies the whole match set, so alternative
/// markup generations stay a data change rather than a code path.
pub(crate) struct SelectorChain {
    entries: Vec<(&'static str, Selector)>,
}

impl SelectorChain {
    fn new(css: &[&'static str]) -> Self {
        let entries = css
            .iter()
            .map(|&s| (s, Selector::parse(s).unwrap()))
            .collect();
        Self { entries }
    }

    /// Matches for the highest-priority selector that hits, in document order.
    pub(crate) fn select_first_matching<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        for (idx, (css, selector)) in self.entries.iter().enumerate() {
            let matches: Vec<ElementRef<'a>> = document.select(selector).collect();
            if !matches.is_empty() {
                if idx > 0 {
                    tracing::debug!("fell back to selector `{}` ({} matches)", css, matches.len());
                }
                return matches;
            }
        }
        Vec::new()
    }
}
