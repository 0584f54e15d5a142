// src/app.rs

use crate::core::client::BackendStatus;
use crate::core::models::{SelectedFile, ValidationResult};
use crate::core::preview::PreviewHandle;
use crate::error::UploadError;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ScrollbarState;
use std::path::Path;
use strum::Display;
use tracing::{debug, error, info, warn};

pub const UPLOAD_FAILED: &str = "❌ Upload failed. Make sure the backend is running.";
pub const NO_FILE_NOTICE: &str = "📄 Please select a file first!";
pub const SUBMIT_LABEL: &str = "Upload & Validate";
pub const SUBMITTING_LABEL: &str = "Uploading...";
pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Observable state of the upload widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WidgetState {
    Idle,
    FileSelected,
    Submitting,
    ResultReady,
    ErrorReady,
}

/// A submission that passed the precondition checks and now needs a network call.
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: u64,
    pub file: SelectedFile,
}

/// The outcome of one submission, tagged with the ticket it was issued under.
#[derive(Debug)]
pub struct Settlement {
    pub ticket: u64,
    pub outcome: Result<ValidationResult, UploadError>,
}

/// Why a submit attempt did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    NoFileSelected,
    Busy { ticket: u64 },
}

/// What the event loop must do after a key press that the widget cannot do alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    /// Ctrl+S: start an upload, which needs the HTTP client and the channel.
    Submit,
}

/// Messages background tasks send back to the UI loop.
#[derive(Debug)]
pub enum Message {
    Settled(Settlement),
    Probed(BackendStatus),
}

pub struct App {
    pub should_quit: bool,
    pub state: WidgetState,
    /// Path being typed into the picker.
    pub input: String,
    /// Blocking notice; while set, the UI only accepts a dismissal.
    pub notice: Option<String>,
    pub backend: BackendStatus,
    pub scroll_offset: usize,
    pub result_scroll_state: ScrollbarState,
    pub spinner_frame: usize,
    result_len: usize,
    file: Option<SelectedFile>,
    preview: Option<PreviewHandle>,
    result: Option<ValidationResult>,
    error: Option<String>,
    settled_at: Option<DateTime<Local>>,
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: WidgetState::Idle,
            input: String::new(),
            notice: None,
            backend: BackendStatus::Checking,
            scroll_offset: 0,
            result_scroll_state: ScrollbarState::default(),
            spinner_frame: 0,
            result_len: 0,
            file: None,
            preview: None,
            result: None,
            error: None,
            settled_at: None,
            in_flight: None,
            next_ticket: 1,
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn result(&self) -> Option<&ValidationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn settled_at(&self) -> Option<DateTime<Local>> {
        self.settled_at
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.in_flight.is_some() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    /// Makes `file` the current selection.
    ///
    /// Clears any result or error, swaps the preview, and orphans a request
    /// still in flight so its settlement is ignored.
    pub fn select_file(&mut self, file: SelectedFile) {
        info!(file = %file.name, media_type = %file.media_type, bytes = file.len(), "File selected.");
        if let Some(ticket) = self.in_flight.take() {
            info!(ticket, "Selection superseded an in-flight submission.");
        }
        // Release the old preview before decoding the new one.
        self.preview = None;
        self.preview = PreviewHandle::acquire(&file);
        self.file = Some(file);
        self.result = None;
        self.error = None;
        self.settled_at = None;
        self.reset_scroll();
        self.state = WidgetState::FileSelected;
    }

    /// Loads the file named by the path input. Failures raise a notice and leave
    /// the current selection untouched.
    pub fn select_from_input(&mut self) -> bool {
        let raw = self.input.trim();
        if raw.is_empty() {
            self.notice = Some(NO_FILE_NOTICE.to_string());
            return false;
        }
        match SelectedFile::from_path(Path::new(raw)) {
            Ok(file) => {
                self.select_file(file);
                true
            }
            Err(e) => {
                warn!(error = %e, "Could not load selected file.");
                self.notice = Some(format!("⚠️ {e}"));
                false
            }
        }
    }

    /// Starts a submission if a file is selected and nothing is in flight.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejection> {
        if let Some(ticket) = self.in_flight {
            debug!(ticket, "Submit ignored while a request is in flight.");
            return Err(SubmitRejection::Busy { ticket });
        }
        let Some(file) = self.file.clone() else {
            self.notice = Some(NO_FILE_NOTICE.to_string());
            return Err(SubmitRejection::NoFileSelected);
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.result = None;
        self.error = None;
        self.settled_at = None;
        self.reset_scroll();
        self.state = WidgetState::Submitting;
        info!(ticket, file = %file.name, "Submission started.");
        Ok(Submission { ticket, file })
    }

    /// Applies a settlement. Returns `false` when it belongs to a superseded ticket.
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        if self.in_flight != Some(settlement.ticket) {
            debug!(ticket = settlement.ticket, current = ?self.in_flight, "Dropping stale settlement.");
            return false;
        }
        self.in_flight = None;
        self.settled_at = Some(Local::now());

        match settlement.outcome {
            Ok(result) => {
                info!(ticket = settlement.ticket, keys = result.key_info.len(), "Validation succeeded.");
                self.result = Some(result);
                self.error = None;
                self.state = WidgetState::ResultReady;
            }
            Err(e) => {
                error!(ticket = settlement.ticket, error = %e, "Upload failed.");
                self.result = None;
                self.error = Some(UPLOAD_FAILED.to_string());
                self.state = WidgetState::ErrorReady;
            }
        }
        true
    }

    pub fn apply(&mut self, message: Message) {
        match message {
            Message::Settled(settlement) => {
                self.settle(settlement);
            }
            Message::Probed(status) => self.backend = status,
        }
        debug!(state = %self.state, backend = %self.backend, "Message applied.");
    }

    /// Routes one key press. While a notice is open, only its dismissal is accepted.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_notice();
            }
            return KeyAction::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('s') if ctrl => return KeyAction::Submit,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.select_from_input();
            }
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            _ => {}
        }
        KeyAction::None
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn on_tick(&mut self) {
        if self.state == WidgetState::Submitting {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.result_scroll_state = self.result_scroll_state.position(self.scroll_offset);
    }

    /// Stops once the last result line reaches the top of the pane.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.result_len {
            self.scroll_offset += 1;
        }
        self.result_scroll_state = self.result_scroll_state.position(self.scroll_offset);
    }

    /// Records how many lines the rendered result has; bounds [`App::scroll_down`].
    pub fn set_result_len(&mut self, len: usize) {
        self.result_len = len;
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(1));
        self.result_scroll_state = self.result_scroll_state.content_length(len).position(self.scroll_offset);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Back to `Idle`, dropping the selection, its preview and any outcome.
    pub fn reset(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            info!(ticket, "Reset superseded an in-flight submission.");
        }
        self.state = WidgetState::Idle;
        self.input.clear();
        self.notice = None;
        self.preview = None;
        self.file = None;
        self.result = None;
        self.error = None;
        self.settled_at = None;
        self.spinner_frame = 0;
        self.reset_scroll();
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.result_len = 0;
        self.result_scroll_state = ScrollbarState::default();
    }
}
