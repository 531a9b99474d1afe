use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::render_ui;
use crate::clipboard::copy_to_clipboard;
use crate::indexer::load_index;
use crate::models::{Manual, SearchOutcome};
use crate::navigator::{self, CommandViewer, NavRequest, ViewerFrame};
use crate::render::{ResultRecord, build_records};
use crate::search::SessionState;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

const PLACEHOLDER_NO_QUERY: &str = "Type a keyword to search the manuals.";
const PLACEHOLDER_NO_MATCHES: &str = "No matching entries.";

/// Interactive search screen state.
///
/// Every keystroke re-runs the search synchronously against the in-memory
/// collection; rendering is final, so a new search simply supersedes the
/// previous results.
pub struct App {
    manuals_dir: PathBuf,
    session: SessionState,
    input: String,
    part_filter: Option<Manual>,
    records: Vec<ResultRecord>,
    placeholder: Option<&'static str>,
    selected_idx: usize,
    notification: Option<String>,
    viewer: Box<dyn ViewerFrame>,
    should_quit: bool,
}

impl App {
    pub fn new(manuals_dir: PathBuf) -> Self {
        let session = SessionState::new(load_index(&manuals_dir));
        let mut app = Self {
            manuals_dir,
            session,
            input: String::new(),
            part_filter: None,
            records: Vec::new(),
            placeholder: None,
            selected_idx: 0,
            notification: None,
            viewer: Box::new(CommandViewer::new()),
            should_quit: false,
        };
        app.refresh_results();
        app
    }

    /// Run the event loop until quit
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                render_ui(
                    frame,
                    &self.records,
                    self.selected_idx,
                    &self.input,
                    self.part_filter,
                    self.placeholder,
                    self.session.items.len(),
                    self.notification.as_deref(),
                )
            })?;

            let action = poll_event(POLL_INTERVAL)?;
            self.handle_action(action);

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                self.input.clear();
                self.refresh_results();
            }
            Action::UpdateSearch(c) => {
                self.input.push(c);
                self.refresh_results();
            }
            Action::DeleteChar => {
                self.input.pop();
                self.refresh_results();
            }
            Action::CycleFilter => {
                self.part_filter = next_filter(self.part_filter);
                self.refresh_results();
            }
            Action::MoveUp => self.selected_idx = self.selected_idx.saturating_sub(1),
            Action::MoveDown => self.move_down(1),
            Action::PageUp => self.selected_idx = self.selected_idx.saturating_sub(10),
            Action::PageDown => self.move_down(10),
            Action::OpenSelected => self.open_selected(),
            Action::OpenManual(manual) => {
                self.navigate(NavRequest::ManualId(manual.id().to_string()));
            }
            Action::CopyUri => self.copy_selected_uri(),
            Action::Reload => {
                self.session.reload(load_index(&self.manuals_dir));
                self.refresh_results();
            }
            Action::None => {}
        }
    }

    fn move_down(&mut self, step: usize) {
        let last = self.records.len().saturating_sub(1);
        self.selected_idx = (self.selected_idx + step).min(last);
    }

    /// Re-run the search against the current collection and rebuild the
    /// display records.
    fn refresh_results(&mut self) {
        self.notification = None;
        let filter_label = self.part_filter.map(|m| m.label());

        match self.session.search(&self.input, filter_label) {
            SearchOutcome::NoQuery => {
                self.records.clear();
                self.placeholder = Some(PLACEHOLDER_NO_QUERY);
            }
            SearchOutcome::NoMatches => {
                self.records.clear();
                self.placeholder = Some(PLACEHOLDER_NO_MATCHES);
            }
            SearchOutcome::Hits(hits) => {
                self.records = build_records(&hits, &self.session.keyword);
                self.placeholder = None;
            }
        }

        self.selected_idx = self.selected_idx.min(self.records.len().saturating_sub(1));
    }

    fn open_selected(&mut self) {
        let Some(record) = self.records.get(self.selected_idx) else {
            return;
        };
        self.navigate(NavRequest::Item(record.item.clone()));
    }

    fn navigate(&mut self, request: NavRequest) {
        match navigator::resolve(&request, &self.session.keyword) {
            Ok(target) => {
                if let Err(e) = navigator::navigate(self.viewer.as_mut(), &target) {
                    self.notification = Some(format!("Navigation failed: {e:#}"));
                }
            }
            // Blocking notification; nothing was navigated
            Err(e) => self.notification = Some(format!("{e:#}")),
        }
    }

    fn copy_selected_uri(&mut self) {
        let Some(record) = self.records.get(self.selected_idx) else {
            return;
        };
        match navigator::resolve(&NavRequest::Item(record.item.clone()), &self.session.keyword) {
            Ok(target) => match copy_to_clipboard(&target.to_uri()) {
                Ok(()) => self.notification = Some("Copied navigation URI".to_string()),
                Err(e) => self.notification = Some(format!("Copy failed: {e:#}")),
            },
            Err(e) => self.notification = Some(format!("{e:#}")),
        }
    }
}

fn next_filter(current: Option<Manual>) -> Option<Manual> {
    match current {
        None => Some(Manual::Kenchiku),
        Some(Manual::Kenchiku) => Some(Manual::Denki),
        Some(Manual::Denki) => Some(Manual::Kikai),
        Some(Manual::Kikai) => None,
    }
}
