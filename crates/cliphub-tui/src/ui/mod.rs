mod compose;
mod dashboard;
mod footer;
mod list;
mod toasts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, HintState};
use crate::theme::Palette;

pub(crate) use compose::ComposeComponent;
pub(crate) use dashboard::DashboardComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use list::ClipListComponent;
pub(crate) use toasts::ToastsComponent;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState, palette: &Palette);
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let palette = Palette::of(state.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Metrics box
            Constraint::Length(7), // Compose box
            Constraint::Length(1), // Hint line
            Constraint::Length(3), // Search + sort
            Constraint::Min(0),    // Clip list
            Constraint::Length(2), // Footer
        ])
        .split(f.area());

    let dashboard = DashboardComponent;
    dashboard.render(f, chunks[0], state, &palette);
    dashboard.render_metrics(f, chunks[1], state, &palette);

    let compose = ComposeComponent;
    compose.render(f, chunks[2], state, &palette);

    render_hint(f, chunks[3], state, &palette);

    compose.render_search(f, chunks[4], state, &palette);

    let list = ClipListComponent;
    list.render(f, chunks[5], state, &palette);

    let toasts = ToastsComponent;
    toasts.render(f, chunks[5], state, &palette);

    let footer = FooterComponent;
    footer.render(f, chunks[6], state, &palette);
}

fn render_hint(f: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let color = match state.hint_state {
        HintState::Idle => palette.dim,
        HintState::Success => palette.success,
        HintState::Error => palette.danger,
        HintState::Sync => palette.warn,
    };

    let line = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(color)),
        Span::styled(state.hint_message().to_string(), Style::default().fg(color)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Truncate to `max_len` characters, ellipsis included.
pub(crate) fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_text;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let out = truncate_text("a very long piece of text", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }
}
