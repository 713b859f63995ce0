use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::app::{AppState, SortOrder};
use crate::format::format_time_hm;
use crate::theme::Palette;

pub(crate) struct DashboardComponent;

impl Component for DashboardComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState, palette: &Palette) {
        let title = Line::from(vec![
            Span::styled(
                "━━ ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Clipboard Hub",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ━━", Style::default().fg(palette.accent)),
        ]);

        let (sync_text, sync_style) = if state.auto_sync_active() {
            (
                "● auto-sync on",
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○ manual refresh", Style::default().fg(palette.dim))
        };

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        f.render_widget(Paragraph::new(title), layout[0]);
        f.render_widget(
            Paragraph::new(sync_text)
                .style(sync_style)
                .alignment(Alignment::Right),
            layout[1],
        );
    }
}

impl DashboardComponent {
    pub(crate) fn render_metrics(
        &self,
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        palette: &Palette,
    ) {
        let (total, visible) = state.metrics();

        let order_label = match state.sort_order {
            SortOrder::Desc => "↓ newest first",
            SortOrder::Asc => "↑ oldest first",
        };

        let line = Line::from(vec![
            Span::styled("Total: ", Style::default().fg(palette.dim)),
            Span::styled(
                total.to_string(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ Visible: ", Style::default().fg(palette.dim)),
            Span::styled(
                visible.to_string(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ Last sync: ", Style::default().fg(palette.dim)),
            Span::styled(
                format_time_hm(state.last_sync_at),
                Style::default().fg(palette.text),
            ),
            Span::styled(" │ ", Style::default().fg(palette.dim)),
            Span::styled(order_label, Style::default().fg(palette.accent)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border));

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}
