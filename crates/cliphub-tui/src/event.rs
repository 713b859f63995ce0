use cliphub_types::{Clip, ClipId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::InputMode;

/// Completions delivered to the app loop from the network tasks and the
/// auto-sync ticker. Failures are already reduced to display messages.
#[derive(Debug)]
pub enum AppEvent {
    Loaded {
        outcome: Result<Vec<Clip>, String>,
        silent: bool,
    },
    Created(Result<Clip, String>),
    Updated(Result<Clip, String>),
    Deleted {
        id: ClipId,
        outcome: Result<(), String>,
    },
    PollTick,
}

/// Everything a key press can mean. The controller maps each intent to one
/// handler; the table below is the whole keyboard surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIntent {
    Quit,
    CycleFocus,
    FocusCompose,
    FocusSearch,

    InsertChar(char),
    InsertNewline,
    DeleteChar,

    SubmitClip,
    ClearInput,

    Refresh,
    ToggleAutoSync,
    ToggleSort,
    ToggleTheme,

    SelectNext,
    SelectPrevious,
    CopySelected,
    EditSelected,
    DeleteSelected,

    SaveEdit,
    CancelEdit,

    DismissToast,
}

/// Keyboard dispatch table.
///
/// Editing modes (compose/search/edit) swallow printable characters, so the
/// single-letter commands only exist in list mode; chords (Ctrl+...) work
/// everywhere they make sense.
pub fn intent_for(key: KeyEvent, mode: InputMode) -> Option<UiIntent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits, raw mode eats the usual signal.
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(UiIntent::Quit);
    }

    match mode {
        InputMode::Edit => match key.code {
            KeyCode::Esc => Some(UiIntent::CancelEdit),
            KeyCode::Enter if ctrl => Some(UiIntent::SaveEdit),
            KeyCode::Char('s') if ctrl => Some(UiIntent::SaveEdit),
            KeyCode::Enter => Some(UiIntent::InsertNewline),
            KeyCode::Backspace => Some(UiIntent::DeleteChar),
            KeyCode::Char(c) if !ctrl => Some(UiIntent::InsertChar(c)),
            _ => None,
        },
        InputMode::Compose => match key.code {
            KeyCode::Tab => Some(UiIntent::CycleFocus),
            KeyCode::Enter if ctrl => Some(UiIntent::SubmitClip),
            KeyCode::Char('s') if ctrl => Some(UiIntent::SubmitClip),
            KeyCode::Char('u') if ctrl => Some(UiIntent::ClearInput),
            KeyCode::Enter => Some(UiIntent::InsertNewline),
            KeyCode::Backspace => Some(UiIntent::DeleteChar),
            KeyCode::Esc => Some(UiIntent::CycleFocus),
            KeyCode::Char(c) if !ctrl => Some(UiIntent::InsertChar(c)),
            _ => None,
        },
        InputMode::Search => match key.code {
            KeyCode::Tab => Some(UiIntent::CycleFocus),
            KeyCode::Esc => Some(UiIntent::CycleFocus),
            KeyCode::Backspace => Some(UiIntent::DeleteChar),
            KeyCode::Char(c) if !ctrl => Some(UiIntent::InsertChar(c)),
            _ => None,
        },
        InputMode::List => match key.code {
            KeyCode::Tab => Some(UiIntent::CycleFocus),
            KeyCode::Char('q') => Some(UiIntent::Quit),
            KeyCode::Down | KeyCode::Char('j') => Some(UiIntent::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(UiIntent::SelectPrevious),
            KeyCode::Char('c') => Some(UiIntent::CopySelected),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiIntent::EditSelected),
            KeyCode::Char('d') => Some(UiIntent::DeleteSelected),
            KeyCode::Char('r') => Some(UiIntent::Refresh),
            KeyCode::Char('a') => Some(UiIntent::ToggleAutoSync),
            KeyCode::Char('s') => Some(UiIntent::ToggleSort),
            KeyCode::Char('t') => Some(UiIntent::ToggleTheme),
            KeyCode::Char('/') => Some(UiIntent::FocusSearch),
            KeyCode::Char('i') => Some(UiIntent::FocusCompose),
            KeyCode::Char('x') => Some(UiIntent::DismissToast),
            _ => None,
        },
    }
}
