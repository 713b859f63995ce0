use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, truncate_text};
use crate::app::{AppState, Focus};
use crate::theme::Palette;

pub(crate) struct ComposeComponent;

impl Component for ComposeComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState, palette: &Palette) {
        let focused = state.focus == Focus::Compose && state.edit.is_none();
        let border = if focused { palette.accent } else { palette.border };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                " New clip ",
                Style::default().fg(border).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let visible_rows = chunks[0].height as usize;
        let width = chunks[0].width as usize;
        let mut lines: Vec<Line> = state
            .input
            .split('\n')
            .map(|l| Line::from(truncate_text(l, width.max(4))))
            .collect();
        // Keep the tail in view while typing a long note.
        if lines.len() > visible_rows {
            lines = lines.split_off(lines.len() - visible_rows);
        }
        if state.input.is_empty() {
            lines = vec![Line::from(Span::styled(
                "Type a snippet…",
                Style::default().fg(palette.dim),
            ))];
        }
        f.render_widget(
            Paragraph::new(Text::from(lines)).style(Style::default().fg(palette.text)),
            chunks[0],
        );

        let (chars, line_count) = state.input_stats();
        let mut stats = vec![
            Span::styled(
                format!("{} chars · {} lines", chars, line_count),
                Style::default().fg(palette.dim),
            ),
        ];
        if state.adding {
            stats.push(Span::styled(
                "  saving…",
                Style::default().fg(palette.warn),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(stats)), chunks[1]);
    }
}

impl ComposeComponent {
    pub(crate) fn render_search(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        palette: &Palette,
    ) {
        let focused = state.focus == Focus::Search && state.edit.is_none();
        let border = if focused { palette.accent } else { palette.border };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(" Search ", Style::default().fg(border)));

        let content = if state.filter_query.is_empty() && !focused {
            Span::styled("type / to filter by content", Style::default().fg(palette.dim))
        } else {
            Span::styled(
                state.filter_query.clone(),
                Style::default().fg(palette.text),
            )
        };

        f.render_widget(Paragraph::new(Line::from(content)).block(block), area);
    }
}
