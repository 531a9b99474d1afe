//! Result rendering: header assembly, snippet truncation and keyword
//! highlighting.
//!
//! Highlighting runs over the already-truncated snippet, not the full item
//! text, so a match past the truncation boundary stays unhighlighted even
//! though the item matched. That mirrors what the snippet actually displays.

use regex::RegexBuilder;

use crate::models::IndexItem;

/// Snippet length in codepoints.
pub const SNIPPET_LEN: usize = 80;

/// One run of snippet text, highlighted or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSpan {
    pub text: String,
    pub highlighted: bool,
}

/// One display record per matching item.
///
/// Keeps the source [`IndexItem`] so that activating a record can recover the
/// original `part` and `page` for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// `[part] chapter section`, missing fields rendered empty.
    pub header: String,
    pub page: u32,
    /// Truncated snippet split into plain and highlighted runs, ending with
    /// an ellipsis span.
    pub spans: Vec<SnippetSpan>,
    pub item: IndexItem,
}

/// Build one display record per hit, highlighting `keyword` occurrences
/// inside each truncated snippet.
pub fn build_records(hits: &[IndexItem], keyword: &str) -> Vec<ResultRecord> {
    hits.iter()
        .map(|item| {
            let snippet: String = item.text.chars().take(SNIPPET_LEN).collect();
            let mut spans = highlight_spans(&snippet, keyword);
            spans.push(SnippetSpan { text: "…".to_string(), highlighted: false });
            ResultRecord {
                header: format!(
                    "[{}] {} {}",
                    item.part,
                    item.chapter.as_deref().unwrap_or(""),
                    item.section.as_deref().unwrap_or("")
                ),
                page: item.page,
                spans,
                item: item.clone(),
            }
        })
        .collect()
}

/// Split `snippet` into plain and highlighted runs around every
/// case-insensitive occurrence of `keyword`.
///
/// The keyword is escaped so regex metacharacters match literally. Pure
/// function of its inputs; re-rendering the same snippet and keyword yields
/// the same spans.
pub fn highlight_spans(snippet: &str, keyword: &str) -> Vec<SnippetSpan> {
    let plain = |text: &str| SnippetSpan { text: text.to_string(), highlighted: false };

    if keyword.is_empty() {
        return vec![plain(snippet)];
    }

    let Ok(re) = RegexBuilder::new(&regex::escape(keyword)).case_insensitive(true).build() else {
        // An escaped literal always compiles; fall back to no highlight if not
        return vec![plain(snippet)];
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for m in re.find_iter(snippet) {
        if m.start() > last {
            spans.push(plain(&snippet[last..m.start()]));
        }
        spans.push(SnippetSpan { text: m.as_str().to_string(), highlighted: true });
        last = m.end();
    }
    if last < snippet.len() || spans.is_empty() {
        spans.push(plain(&snippet[last..]));
    }
    spans
}

/// Render a record as plain text for CLI output; with `color` set the
/// highlighted runs are wrapped in ANSI bold yellow.
pub fn format_record(record: &ResultRecord, color: bool) -> String {
    let mut snippet = String::new();
    for span in &record.spans {
        if span.highlighted && color {
            snippet.push_str("\x1b[1;33m");
            snippet.push_str(&span.text);
            snippet.push_str("\x1b[0m");
        } else {
            snippet.push_str(&span.text);
        }
    }
    format!("{}  p.{}\n  {}", record.header, record.page, snippet)
}
