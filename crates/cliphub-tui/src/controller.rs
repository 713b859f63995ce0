use chrono::Local;
use cliphub_client::HubClient;
use log::{debug, error, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::app::{AppState, Focus, PollHandle};
use crate::event::{AppEvent, UiIntent};
use crate::theme::Preferences;

/// Mediates between the UI intents, the in-memory state and the hub client.
///
/// Every network call runs as a tokio task that posts an `AppEvent` back to
/// the app loop; the loop then feeds it into `on_app_event`. Nothing here
/// blocks, and no result is applied outside the loop thread. Two in-flight
/// loads may race; the last completion wins (see DESIGN.md).
pub struct Controller {
    pub state: AppState,
    client: Arc<HubClient>,
    rt: tokio::runtime::Handle,
    tx: Sender<AppEvent>,
    poll_interval: Duration,
    prefs_path: Option<PathBuf>,
}

impl Controller {
    pub fn new(
        state: AppState,
        client: Arc<HubClient>,
        rt: tokio::runtime::Handle,
        tx: Sender<AppEvent>,
        poll_interval: Duration,
        prefs_path: Option<PathBuf>,
    ) -> Self {
        Self {
            state,
            client,
            rt,
            tx,
            poll_interval,
            prefs_path,
        }
    }

    /* ----- intent dispatch ----- */

    pub fn handle_intent(&mut self, intent: UiIntent) {
        let now = Instant::now();
        match intent {
            UiIntent::Quit => self.state.should_quit = true,
            UiIntent::CycleFocus => self.state.cycle_focus(),
            UiIntent::FocusCompose => self.state.focus = Focus::Compose,
            UiIntent::FocusSearch => self.state.focus = Focus::Search,

            UiIntent::InsertChar(c) => self.state.insert_char(c),
            UiIntent::InsertNewline => self.state.insert_newline(),
            UiIntent::DeleteChar => self.state.delete_char(),

            UiIntent::SubmitClip => {
                self.state.pulse(now);
                self.submit();
            }
            UiIntent::ClearInput => self.state.clear_input(),

            UiIntent::Refresh => {
                self.state.pulse(now);
                self.load(false);
            }
            UiIntent::ToggleAutoSync => self.toggle_auto_sync(now),
            UiIntent::ToggleSort => self.state.toggle_sort(),
            UiIntent::ToggleTheme => self.toggle_theme(),

            UiIntent::SelectNext => self.state.select_next(),
            UiIntent::SelectPrevious => self.state.select_previous(),
            UiIntent::CopySelected => {
                self.state.pulse(now);
                self.copy_selected(now);
            }
            UiIntent::EditSelected => self.state.begin_edit(),
            UiIntent::DeleteSelected => {
                self.state.pulse(now);
                self.delete_selected();
            }

            UiIntent::SaveEdit => {
                self.state.pulse(now);
                self.save_edit(now);
            }
            UiIntent::CancelEdit => self.state.cancel_edit(),

            UiIntent::DismissToast => self.state.dismiss_toast(now),
        }
    }

    /* ----- completions from the network tasks ----- */

    pub fn on_app_event(&mut self, event: AppEvent) {
        let now = Instant::now();
        match event {
            AppEvent::Loaded { outcome, silent } => {
                if let Err(message) = &outcome {
                    // Background polls stay quiet in the UI; keep a trace.
                    error!("load failed (silent: {}): {}", silent, message);
                }
                self.state.apply_loaded(outcome, silent, Local::now(), now);
            }
            AppEvent::Created(outcome) => {
                if let Err(message) = &outcome {
                    error!("create failed: {}", message);
                }
                self.state.apply_created(outcome, Local::now(), now);
            }
            AppEvent::Updated(outcome) => {
                if let Err(message) = &outcome {
                    error!("update failed: {}", message);
                }
                self.state.apply_updated(outcome, Local::now(), now);
            }
            AppEvent::Deleted { id, outcome } => {
                if let Err(message) = &outcome {
                    error!("delete failed for {}: {}", id, message);
                }
                self.state.apply_deleted(&id, outcome, Local::now(), now);
            }
            AppEvent::PollTick => {
                debug!("auto-sync tick");
                self.load(true);
            }
        }
    }

    /* ----- operations ----- */

    pub fn load(&mut self, silent: bool) {
        self.state.begin_load(silent);

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let outcome = client.fetch_clips().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Loaded { outcome, silent });
        });
    }

    fn submit(&mut self) {
        let Some(text) = self.state.begin_add(Instant::now()) else {
            return;
        };

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let outcome = client.create_clip(&text).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Created(outcome));
        });
    }

    fn copy_selected(&mut self, now: Instant) {
        let Some(clip) = self.state.selected_clip() else {
            return;
        };

        let outcome = write_to_clipboard(&clip.content);
        if let Err(message) = &outcome {
            error!("clipboard write failed: {}", message);
        }
        self.state.apply_copied(clip.id, outcome, now);
    }

    fn save_edit(&mut self, now: Instant) {
        let Some((id, text)) = self.state.begin_save_edit(now) else {
            return;
        };

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let outcome = client
                .update_clip(&id, &text)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Updated(outcome));
        });
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.state.begin_delete() else {
            return;
        };

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let outcome = client.delete_clip(&id).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Deleted { id, outcome });
        });
    }

    fn toggle_auto_sync(&mut self, now: Instant) {
        if self.state.auto_sync_active() {
            self.state.disable_auto_sync(now);
            return;
        }

        let tx = self.tx.clone();
        let period = self.poll_interval;
        let task = self.rt.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick of a tokio interval fires immediately; the
            // original timer waits a full period before its first poll.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::PollTick).is_err() {
                    break;
                }
            }
        });

        self.state.enable_auto_sync(PollHandle::new(task), now);
    }

    fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.flipped();

        if let Some(path) = &self.prefs_path {
            let prefs = Preferences {
                theme: Some(self.state.theme),
            };
            if let Err(e) = prefs.save_to(path) {
                warn!("could not persist theme preference: {}", e);
            }
        }
    }
}

fn write_to_clipboard(content: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(content).map_err(|e| e.to_string())
}
