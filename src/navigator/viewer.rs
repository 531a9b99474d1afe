use std::process::Command;

use anyhow::{Context, Result, bail};

/// Seam to the PDF viewer frame.
///
/// The real viewer is an external program; the trait keeps navigation logic
/// testable with a mock.
pub trait ViewerFrame {
    /// Replace the viewer's current target; `None` clears it.
    fn set_source(&mut self, uri: Option<&str>) -> Result<()>;

    /// Block until the viewer reports that the current target finished
    /// loading. There is deliberately no timeout; if the viewer never
    /// signals, the caller's post-load steps simply never run.
    fn wait_until_loaded(&mut self) -> Result<()>;

    /// Ask the viewer to run its native in-document search for `keyword`.
    /// Hosting environments may restrict this; callers treat failure as
    /// non-fatal.
    fn find_in_document(&mut self, keyword: &str) -> Result<()>;
}

/// Viewer backed by the platform's document opener.
///
/// Hands the navigation URI to `xdg-open`/`open`/`start`; the page and search
/// fragments are interpreted by whatever PDF viewer the system launches.
pub struct CommandViewer {
    opener: String,
}

impl CommandViewer {
    pub fn new() -> Self {
        Self { opener: default_opener().to_string() }
    }

    /// Use a specific opener program instead of the platform default.
    pub fn with_opener(opener: impl Into<String>) -> Self {
        Self { opener: opener.into() }
    }
}

impl Default for CommandViewer {
    fn default() -> Self {
        Self::new()
    }
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "start"
    } else {
        "xdg-open"
    }
}

impl ViewerFrame for CommandViewer {
    fn set_source(&mut self, uri: Option<&str>) -> Result<()> {
        let Some(uri) = uri else {
            // An external opener has no frame to blank out
            return Ok(());
        };
        Command::new(&self.opener)
            .arg(uri)
            .spawn()
            .with_context(|| format!("Failed to launch {} for {}", self.opener, uri))?;
        Ok(())
    }

    fn wait_until_loaded(&mut self) -> Result<()> {
        // The opener detaches immediately; treat a successful spawn as loaded
        Ok(())
    }

    fn find_in_document(&mut self, _keyword: &str) -> Result<()> {
        bail!("external viewer does not expose in-document search control")
    }
}
