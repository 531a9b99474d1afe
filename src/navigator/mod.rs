//! PDF navigation: resolve a manual or a matched item to a viewer target and
//! drive the viewer frame to it.

pub mod viewer;

use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};

pub use viewer::{CommandViewer, ViewerFrame};

use crate::models::{IndexItem, Manual};
use crate::utils::{encode_uri, encode_uri_component};

/// Delay between clearing the viewer source and setting the new one. The
/// clear-then-set dance forces the viewer to reprocess the fragment even when
/// the target is identical to the current one.
pub const RELOAD_DELAY: Duration = Duration::from_millis(50);

/// What the user asked to open: a whole manual by short id, or a matched
/// index item.
#[derive(Debug, Clone)]
pub enum NavRequest {
    /// Header shortcut; always resolves to page 1.
    ManualId(String),
    /// Search hit; resolves via its `part` label and `page`.
    Item(IndexItem),
}

/// A fully resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    pub pdf_file: String,
    pub page: u32,
    /// Active search keyword, carried into the viewer's search fragment.
    pub keyword: Option<String>,
}

impl NavTarget {
    /// Build the viewer URI: `<file>#page=<N>`, with `&search=<keyword>`
    /// appended when a keyword is active.
    pub fn to_uri(&self) -> String {
        let mut uri = format!("{}#page={}", encode_uri(&self.pdf_file), self.page);
        if let Some(keyword) = &self.keyword {
            uri.push_str("&search=");
            uri.push_str(&encode_uri_component(keyword));
        }
        uri
    }
}

/// Resolve a request against the fixed manual-to-file mapping.
///
/// `keyword` is the session keyword; when non-empty it rides along in the
/// target so the viewer can run its in-document search.
///
/// # Errors
///
/// Fails when the manual id or the item's `part` maps to no known PDF file.
/// Nothing has been navigated at that point; callers surface the error as a
/// blocking notification.
pub fn resolve(request: &NavRequest, keyword: &str) -> Result<NavTarget> {
    let (pdf_file, page) = match request {
        NavRequest::ManualId(id) => match Manual::from_id(id) {
            Some(manual) => (manual.pdf_file(), 1),
            None => bail!("No PDF file is mapped for manual {:?}", id),
        },
        NavRequest::Item(item) => match Manual::from_label(&item.part) {
            Some(manual) => (manual.pdf_file(), item.page.max(1)),
            None => bail!("No PDF file is mapped for part {:?}", item.part),
        },
    };

    let keyword = keyword.trim();
    Ok(NavTarget {
        pdf_file: pdf_file.to_string(),
        page,
        keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
    })
}

/// Drive the viewer to `target`.
///
/// Clears the current source, waits [`RELOAD_DELAY`], sets the new one, then
/// waits for the viewer's load acknowledgment. With a keyword active the
/// viewer's native in-document search is triggered best-effort: its failure
/// (and a missing load acknowledgment) is logged and swallowed, since the
/// page navigation itself already succeeded.
pub fn navigate(viewer: &mut dyn ViewerFrame, target: &NavTarget) -> Result<()> {
    let uri = target.to_uri();

    viewer.set_source(None)?;
    thread::sleep(RELOAD_DELAY);
    viewer.set_source(Some(&uri))?;

    if let Err(e) = viewer.wait_until_loaded() {
        eprintln!("Warning: viewer did not acknowledge the new target: {e:#}");
        return Ok(());
    }

    if let Some(keyword) = &target.keyword
        && let Err(e) = viewer.find_in_document(keyword)
    {
        eprintln!("Warning: in-document search is restricted here: {e:#}");
    }

    Ok(())
}
