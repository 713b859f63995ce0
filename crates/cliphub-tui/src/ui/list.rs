use cliphub_types::Clip;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::{Component, truncate_text};
use crate::app::{AppState, Focus};
use crate::format::format_date_time;
use crate::theme::Palette;

/// How many content lines a row shows before eliding.
const ROW_CONTENT_LINES: usize = 2;

pub(crate) struct ClipListComponent;

impl Component for ClipListComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState, palette: &Palette) {
        let focused = state.focus == Focus::List && state.edit.is_none();
        let border = if state.pulse_since.is_some() {
            palette.border_pulse
        } else if focused {
            palette.accent
        } else {
            palette.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                " Clips ",
                Style::default().fg(border).add_modifier(Modifier::BOLD),
            ));

        let visible: Vec<Clip> = state.visible_clips().into_iter().cloned().collect();

        if visible.is_empty() {
            state.list_state.select(None);
            let message = if state.all_clips.is_empty() {
                "Nothing here yet — compose your first clip above."
            } else {
                "No clips match the current search."
            };
            let placeholder = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(palette.dim),
            )))
            .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        // The visible list shrinks under filtering; keep the cursor on it.
        match state.list_state.selected() {
            Some(i) if i >= visible.len() => state.list_state.select(Some(visible.len() - 1)),
            None => state.list_state.select(Some(0)),
            _ => {}
        }

        let width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = visible
            .iter()
            .map(|clip| self.row_for(clip, state, palette, width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(palette.selection_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut state.list_state);
    }
}

impl ClipListComponent {
    fn row_for<'a>(
        &self,
        clip: &Clip,
        state: &AppState,
        palette: &Palette,
        width: usize,
    ) -> ListItem<'a> {
        if let Some(edit) = &state.edit
            && edit.id == clip.id
        {
            return self.edit_row(&edit.buffer, clip, palette, width);
        }

        let mut lines: Vec<Line> = clip
            .content
            .split('\n')
            .take(ROW_CONTENT_LINES)
            .map(|l| {
                Line::from(Span::styled(
                    truncate_text(l, width.max(4)),
                    Style::default().fg(palette.text),
                ))
            })
            .collect();
        if clip.content.split('\n').count() > ROW_CONTENT_LINES {
            lines.push(Line::from(Span::styled(
                "…",
                Style::default().fg(palette.dim),
            )));
        }

        let copied = state
            .copied
            .as_ref()
            .is_some_and(|(id, _)| id == &clip.id);
        let mut meta = vec![
            Span::styled(
                format_date_time(clip.display_timestamp()),
                Style::default().fg(palette.dim),
            ),
            Span::styled(
                format!(" · {} chars", clip.content.chars().count()),
                Style::default().fg(palette.dim),
            ),
        ];
        if copied {
            meta.push(Span::styled(
                "  ✓ copied",
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(meta));

        let highlighted = state
            .highlight
            .as_ref()
            .is_some_and(|(id, _)| id == &clip.id);
        let style = if highlighted {
            Style::default().bg(palette.highlight_bg)
        } else {
            Style::default()
        };

        ListItem::new(Text::from(lines)).style(style)
    }

    fn edit_row<'a>(
        &self,
        buffer: &str,
        clip: &Clip,
        palette: &Palette,
        width: usize,
    ) -> ListItem<'a> {
        let mut lines: Vec<Line> = buffer
            .split('\n')
            .map(|l| {
                Line::from(Span::styled(
                    truncate_text(l, width.max(4)),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::UNDERLINED),
                ))
            })
            .collect();

        lines.push(Line::from(vec![
            Span::styled(
                format_date_time(&clip.created_at),
                Style::default().fg(palette.dim),
            ),
            Span::styled(
                "  editing — Ctrl+S save · Esc cancel",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        ListItem::new(Text::from(lines))
    }
}
