use chrono::{DateTime, Local};
use cliphub_types::{Clip, ClipId};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

use crate::theme::ThemeKind;

/// How long a freshly created or updated row stays highlighted.
pub const HIGHLIGHT_TTL: Duration = Duration::from_millis(800);

/// How long the copy action shows its confirmation label.
pub const COPY_FLASH_TTL: Duration = Duration::from_millis(700);

/// How long a toast lives before it starts fading.
pub const TOAST_TTL: Duration = Duration::from_millis(2600);

/// Fade-out duration for a dismissed or expired toast.
pub const TOAST_FADE: Duration = Duration::from_millis(180);

/// Border pulse after an action fires.
pub const PULSE_TTL: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Compose,
    Search,
    List,
}

/// Which buffer currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Compose,
    Search,
    List,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    Idle,
    Success,
    Error,
    Sync,
}

impl HintState {
    pub fn default_message(self) -> &'static str {
        match self {
            HintState::Idle => "Idle — ready for your next snippet.",
            HintState::Success => "Synced with the hub.",
            HintState::Error => "Something went wrong. Try again.",
            HintState::Sync => "Syncing…",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Neutral,
}

#[derive(Debug)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub born: Instant,
    pub closing_since: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct EditState {
    pub id: ClipId,
    pub buffer: String,
}

/// Abort-on-drop handle for the auto-sync ticker task.
pub struct PollHandle {
    task: tokio::task::JoinHandle<()>,
}

impl PollHandle {
    pub fn new(task: tokio::task::JoinHandle<()>) -> Self {
        Self { task }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// The whole mutable world of the client, owned by the app loop.
///
/// Everything the JS page kept in module globals and in the DOM lives here:
/// the clip cache, the session toggles, the compose/search/edit buffers, and
/// the transient visual state (hint, toasts, highlights). Network handlers
/// feed results in through the `apply_*` transitions, which are plain
/// functions over this struct and carry all the behavior worth testing.
pub struct AppState {
    pub all_clips: Vec<Clip>,
    pub sort_order: SortOrder,
    pub filter_query: String,
    pub last_sync_at: Option<DateTime<Local>>,
    pub auto_sync: Option<PollHandle>,

    pub input: String,
    pub adding: bool,
    pub focus: Focus,
    pub list_state: ListState,
    pub edit: Option<EditState>,

    pub hint_state: HintState,
    pub hint_text: Option<String>,
    pub toasts: Vec<Toast>,
    pub highlight: Option<(ClipId, Instant)>,
    pub copied: Option<(ClipId, Instant)>,
    pub pulse_since: Option<Instant>,

    pub theme: ThemeKind,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(theme: ThemeKind) -> Self {
        Self {
            all_clips: Vec::new(),
            sort_order: SortOrder::Desc,
            filter_query: String::new(),
            last_sync_at: None,
            auto_sync: None,
            input: String::new(),
            adding: false,
            focus: Focus::Compose,
            list_state: ListState::default(),
            edit: None,
            hint_state: HintState::Idle,
            hint_text: None,
            toasts: Vec::new(),
            highlight: None,
            copied: None,
            pulse_since: None,
            theme,
            should_quit: false,
        }
    }

    /* ----- derived views ----- */

    /// Visible list: case-insensitive substring filter on content, then a
    /// stable sort by `created_at` (plain string comparison) in the
    /// configured direction. Ties keep their relative order.
    pub fn visible_clips(&self) -> Vec<&Clip> {
        let query = self.filter_query.to_lowercase();
        let mut list: Vec<&Clip> = self
            .all_clips
            .iter()
            .filter(|clip| query.is_empty() || clip.content.to_lowercase().contains(&query))
            .collect();

        match self.sort_order {
            SortOrder::Asc => list.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Desc => list.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        list
    }

    /// (total, visible) counts for the metrics row.
    pub fn metrics(&self) -> (usize, usize) {
        (self.all_clips.len(), self.visible_clips().len())
    }

    /// (characters, lines) of the compose buffer.
    pub fn input_stats(&self) -> (usize, usize) {
        (self.input.chars().count(), self.input.split('\n').count())
    }

    pub fn hint_message(&self) -> &str {
        self.hint_text
            .as_deref()
            .unwrap_or_else(|| self.hint_state.default_message())
    }

    pub fn input_mode(&self) -> InputMode {
        if self.edit.is_some() {
            return InputMode::Edit;
        }
        match self.focus {
            Focus::Compose => InputMode::Compose,
            Focus::Search => InputMode::Search,
            Focus::List => InputMode::List,
        }
    }

    pub fn auto_sync_active(&self) -> bool {
        self.auto_sync.is_some()
    }

    pub fn selected_clip(&self) -> Option<Clip> {
        let visible = self.visible_clips();
        let index = self.list_state.selected()?;
        visible.get(index).cloned().cloned()
    }

    /* ----- hint & toasts ----- */

    pub fn set_hint(&mut self, state: HintState, text: Option<String>) {
        self.hint_state = state;
        self.hint_text = text;
    }

    pub fn push_toast(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.toasts.push(Toast {
            message: message.into(),
            severity,
            born: now,
            closing_since: None,
        });
    }

    /// Start the fade-out of the oldest still-open toast.
    pub fn dismiss_toast(&mut self, now: Instant) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.closing_since.is_none()) {
            toast.closing_since = Some(now);
        }
    }

    pub fn pulse(&mut self, now: Instant) {
        self.pulse_since = Some(now);
    }

    /// Advance the transient visual state: toast expiry/fade, row highlight,
    /// copy confirmation, border pulse.
    pub fn on_tick(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if toast.closing_since.is_none() && now.duration_since(toast.born) >= TOAST_TTL {
                toast.closing_since = Some(now);
            }
        }
        self.toasts.retain(|toast| match toast.closing_since {
            Some(since) => now.duration_since(since) < TOAST_FADE,
            None => true,
        });

        if let Some((_, since)) = self.highlight
            && now.duration_since(since) >= HIGHLIGHT_TTL
        {
            self.highlight = None;
        }
        if let Some((_, since)) = self.copied
            && now.duration_since(since) >= COPY_FLASH_TTL
        {
            self.copied = None;
        }
        if let Some(since) = self.pulse_since
            && now.duration_since(since) >= PULSE_TTL
        {
            self.pulse_since = None;
        }
    }

    /* ----- selection ----- */

    pub fn select_next(&mut self) {
        let len = self.visible_clips().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let len = self.visible_clips().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let previous = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(previous));
    }

    /* ----- load ----- */

    pub fn begin_load(&mut self, silent: bool) {
        if !silent {
            self.set_hint(HintState::Sync, None);
        }
    }

    pub fn apply_loaded(
        &mut self,
        outcome: Result<Vec<Clip>, String>,
        silent: bool,
        now_wall: DateTime<Local>,
        now: Instant,
    ) {
        match outcome {
            Ok(clips) => {
                self.all_clips = clips;
                self.last_sync_at = Some(now_wall);
                if !silent {
                    self.set_hint(
                        HintState::Success,
                        Some("Refreshed from the hub.".to_string()),
                    );
                }
            }
            Err(message) => {
                // Background polls fail quietly; the caller logs them.
                if !silent {
                    self.set_hint(HintState::Error, Some(format!("Load failed: {}", message)));
                    self.push_toast(format!("Load failed: {}", message), Severity::Error, now);
                }
            }
        }
    }

    /* ----- add ----- */

    /// Validate the compose buffer and, when it has content, hand back the
    /// trimmed text to send. `None` means no network call happens.
    pub fn begin_add(&mut self, now: Instant) -> Option<String> {
        if self.adding {
            return None;
        }

        let text = self.input.trim().to_string();
        if text.is_empty() {
            self.set_hint(
                HintState::Error,
                Some("Input is empty — nothing to save.".to_string()),
            );
            self.push_toast(
                "Input is empty — nothing was saved.",
                Severity::Error,
                now,
            );
            return None;
        }

        self.set_hint(HintState::Sync, Some("Saving…".to_string()));
        self.adding = true;
        Some(text)
    }

    pub fn apply_created(
        &mut self,
        outcome: Result<Clip, String>,
        now_wall: DateTime<Local>,
        now: Instant,
    ) {
        // The add control re-enables whatever the outcome, like a `finally`.
        self.adding = false;

        match outcome {
            Ok(clip) => {
                let id = clip.id.clone();
                self.all_clips.insert(0, clip);
                self.last_sync_at = Some(now_wall);
                self.input.clear();
                self.highlight = Some((id, now));
                self.set_hint(HintState::Success, Some("Saved to the hub.".to_string()));
                self.push_toast("Saved to the hub.", Severity::Success, now);
            }
            Err(message) => {
                self.set_hint(HintState::Error, Some(format!("Save failed: {}", message)));
                self.push_toast(format!("Save failed: {}", message), Severity::Error, now);
            }
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.set_hint(HintState::Idle, Some("Input cleared.".to_string()));
    }

    /* ----- copy ----- */

    pub fn apply_copied(&mut self, id: ClipId, outcome: Result<(), String>, now: Instant) {
        match outcome {
            Ok(()) => {
                self.copied = Some((id, now));
                self.push_toast("Copied to clipboard.", Severity::Success, now);
            }
            Err(_) => {
                self.set_hint(HintState::Error, Some("Copy failed".to_string()));
                self.push_toast(
                    "Copy failed — the system clipboard may be unavailable.",
                    Severity::Error,
                    now,
                );
            }
        }
    }

    /* ----- edit ----- */

    pub fn begin_edit(&mut self) {
        if let Some(clip) = self.selected_clip() {
            self.edit = Some(EditState {
                id: clip.id.clone(),
                buffer: clip.content.clone(),
            });
        }
    }

    /// Validate the edit buffer; `Some` carries the update to send, `None`
    /// means the form stays open without a network call.
    pub fn begin_save_edit(&mut self, now: Instant) -> Option<(ClipId, String)> {
        let edit = self.edit.as_ref()?;
        let text = edit.buffer.trim().to_string();
        let edit_id = edit.id.clone();

        if text.is_empty() {
            self.set_hint(
                HintState::Error,
                Some("Content is empty — cannot save.".to_string()),
            );
            self.push_toast("Content is empty — cannot save.", Severity::Error, now);
            return None;
        }

        self.set_hint(HintState::Sync, Some("Updating…".to_string()));
        Some((edit_id, text))
    }

    pub fn apply_updated(
        &mut self,
        outcome: Result<Clip, String>,
        now_wall: DateTime<Local>,
        now: Instant,
    ) {
        match outcome {
            Ok(updated) => {
                self.edit = None;
                if let Some(entry) = self.all_clips.iter_mut().find(|c| c.id == updated.id) {
                    *entry = updated.clone();
                }
                self.last_sync_at = Some(now_wall);
                self.highlight = Some((updated.id, now));
                self.set_hint(HintState::Success, Some("Content updated.".to_string()));
                self.push_toast("Content updated.", Severity::Success, now);
            }
            Err(message) => {
                // The edit form stays open so nothing typed is lost.
                self.set_hint(
                    HintState::Error,
                    Some(format!("Update failed: {}", message)),
                );
                self.push_toast(format!("Update failed: {}", message), Severity::Error, now);
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /* ----- delete ----- */

    pub fn begin_delete(&mut self) -> Option<ClipId> {
        let clip = self.selected_clip()?;
        self.set_hint(HintState::Sync, Some("Deleting…".to_string()));
        Some(clip.id)
    }

    pub fn apply_deleted(
        &mut self,
        id: &ClipId,
        outcome: Result<(), String>,
        now_wall: DateTime<Local>,
        now: Instant,
    ) {
        match outcome {
            Ok(()) => {
                self.all_clips.retain(|c| &c.id != id);
                self.last_sync_at = Some(now_wall);
                self.set_hint(HintState::Success, Some("Deleted.".to_string()));
                self.push_toast("Entry deleted.", Severity::Neutral, now);
            }
            Err(message) => {
                self.set_hint(
                    HintState::Error,
                    Some(format!("Delete failed: {}", message)),
                );
                self.push_toast(format!("Delete failed: {}", message), Severity::Error, now);
            }
        }
    }

    /* ----- auto-sync ----- */

    /// Store the ticker handle. Returns false (dropping the new handle, which
    /// aborts its task) when auto-sync is already on.
    pub fn enable_auto_sync(&mut self, handle: PollHandle, now: Instant) -> bool {
        if self.auto_sync.is_some() {
            return false;
        }
        self.auto_sync = Some(handle);
        self.push_toast("Auto-sync enabled.", Severity::Success, now);
        true
    }

    /// Drop the ticker handle (aborting the task). No-op when already off.
    pub fn disable_auto_sync(&mut self, now: Instant) -> bool {
        if self.auto_sync.is_none() {
            return false;
        }
        self.auto_sync = None;
        self.push_toast("Auto-sync disabled.", Severity::Neutral, now);
        true
    }

    /* ----- sort & filter ----- */

    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.flipped();
    }

    /* ----- text editing ----- */

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.input_mode() {
            InputMode::Edit => self.edit.as_mut().map(|e| &mut e.buffer),
            InputMode::Compose => Some(&mut self.input),
            InputMode::Search => Some(&mut self.filter_query),
            InputMode::List => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(buffer) = self.active_buffer() {
            buffer.push(c);
        }
    }

    pub fn insert_newline(&mut self) {
        // Only the multi-line buffers take newlines; search stays one line.
        match self.input_mode() {
            InputMode::Compose | InputMode::Edit => {
                if let Some(buffer) = self.active_buffer() {
                    buffer.push('\n');
                }
            }
            InputMode::Search | InputMode::List => {}
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(buffer) = self.active_buffer() {
            buffer.pop();
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Compose => Focus::Search,
            Focus::Search => Focus::List,
            Focus::List => Focus::Compose,
        };
    }
}
