use scraper::{ElementRef, Html};

use crate::models::Fragment;
use crate::selectors::{ANSWER_BODY, TAG_ANCHORS};

/// Returned in place of an answer when the page has no usable answer body.
pub const NO_ANSWER_MSG: &str = "< no answer given >";

/// Extracts the answer text and question tags from an answer page.
///
/// In full mode the result is the whole first answer body, fragments joined
/// with newlines. In short mode the first code snippet wins, scanning
/// answer bodies in document order; a page without any code falls back to
/// the first body's first fragment. Returns [`NO_ANSWER_MSG`] when nothing
/// qualifies. Never fails: malformed HTML parses best-effort.
pub fn extract_answer(html: &str, full: bool) -> (String, Vec<String>) {
    let document = Html::parse_document(html);
    let tags = collect_tags(&document);

    let blocks: Vec<Vec<Fragment>> = ANSWER_BODY
        .select_first_matching(&document)
        .into_iter()
        .map(fragments)
        .collect();

    let answer = if full {
        full_answer(&blocks)
    } else {
        short_answer(&blocks)
    };

    match answer {
        Some(text) => (text, tags),
        None => {
            tracing::debug!("no usable answer body, returning sentinel");
            (NO_ANSWER_MSG.to_string(), tags)
        }
    }
}

/// Tag labels in document order, verbatim (no dedup, no trimming).
fn collect_tags(document: &Html) -> Vec<String> {
    TAG_ANCHORS
        .select_first_matching(document)
        .into_iter()
        .map(element_text)
        .collect()
}

/// Walks an answer body's direct children into content fragments.
///
/// `<pre>`/`<code>` children are code; a `<code>` nested inside a `<pre>`
/// contributes through the enclosing `<pre>`. Any other child with
/// non-blank text is a text fragment; blank children yield nothing.
fn fragments(block: ElementRef) -> Vec<Fragment> {
    block
        .children()
        .filter_map(ElementRef::wrap)
        .filter_map(|child| {
            let text = element_text(child);
            if text.trim().is_empty() {
                return None;
            }
            match child.value().name() {
                "pre" | "code" => Some(Fragment::Code(text)),
                _ => Some(Fragment::Text(text)),
            }
        })
        .collect()
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join("")
}

/// Full mode: every fragment of the first body, newline-joined, trimmed.
fn full_answer(blocks: &[Vec<Fragment>]) -> Option<String> {
    let first = blocks.first()?;
    let joined = first
        .iter()
        .map(Fragment::content)
        .collect::<Vec<_>>()
        .join("\n");
    non_empty(joined.trim())
}

/// Short mode: the first code fragment of the first code-bearing body, or
/// the first body's first fragment when no body has code.
fn short_answer(blocks: &[Vec<Fragment>]) -> Option<String> {
    for block in blocks {
        if let Some(code) = block.iter().find(|fragment| fragment.is_code()) {
            return non_empty(code.content().trim());
        }
    }
    let first = blocks.first()?.first()?;
    non_empty(first.content().trim())
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<div class=\"answercell\"><div class=\"js-post-body\">{body}</div></div>")
    }

    #[test]
    fn short_mode_prefers_code_over_earlier_text() {
        let html = page("<p>use grep</p><pre>grep -r foo .</pre>");
        let (answer, _) = extract_answer(&html, false);
        assert_eq!(answer, "grep -r foo .");
    }

    #[test]
    fn full_mode_joins_fragments_in_document_order() {
        let html = page("<p>use grep</p><pre>grep -r foo .</pre><p>done</p>");
        let (answer, _) = extract_answer(&html, true);
        assert_eq!(answer, "use grep\ngrep -r foo .\ndone");
    }

    #[test]
    fn code_nested_in_pre_counts_once() {
        let html = page("<pre><code>cargo tree</code></pre>");
        let (answer, _) = extract_answer(&html, true);
        assert_eq!(answer, "cargo tree");
    }

    #[test]
    fn blank_children_yield_no_fragment() {
        let html = page("<p>   </p><p>real text</p>");
        let (answer, _) = extract_answer(&html, false);
        assert_eq!(answer, "real text");
    }

    #[test]
    fn whitespace_only_body_degrades_to_sentinel() {
        let html = page("<p>   </p>");
        let (answer, tags) = extract_answer(&html, true);
        assert_eq!(answer, NO_ANSWER_MSG);
        assert!(tags.is_empty());
    }

    #[test]
    fn post_text_body_is_accepted() {
        let html = "<div class=\"answercell\"><div class=\"post-text\"><p>hello</p></div></div>";
        let (answer, _) = extract_answer(html, false);
        assert_eq!(answer, "hello");
    }

    #[test]
    fn body_outside_answercell_does_not_qualify() {
        let html = "<div class=\"js-post-body\"><pre>orphan</pre></div>";
        let (answer, _) = extract_answer(html, false);
        assert_eq!(answer, NO_ANSWER_MSG);
    }

    #[test]
    fn selection_on_no_blocks_is_none() {
        assert_eq!(full_answer(&[]), None);
        assert_eq!(short_answer(&[]), None);
    }

    #[test]
    fn short_selection_scans_past_codeless_blocks() {
        let blocks = vec![
            vec![Fragment::Text("intro".to_string())],
            vec![
                Fragment::Text("then".to_string()),
                Fragment::Code(" ls -la ".to_string()),
            ],
        ];
        assert_eq!(short_answer(&blocks), Some("ls -la".to_string()));
    }

    #[test]
    fn short_selection_without_code_takes_first_fragment() {
        let blocks = vec![
            vec![Fragment::Text(" first ".to_string())],
            vec![Fragment::Text("second".to_string())],
        ];
        assert_eq!(short_answer(&blocks), Some("first".to_string()));
    }
}
