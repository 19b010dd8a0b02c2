//! One palette row: a strip of ten colored cells plus shade labels

use crate::app::state::{AppState, Focus, PaletteRow};
use crate::tui::theme::{get_theme, swatch_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use shades::{label_color, SHADES};

/// Rows used by [`render`]: title, three swatch lines, shade labels.
pub const HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, state: &AppState, row: &PaletteRow, area: Rect) {
    let theme = get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Swatches
            Constraint::Length(1), // Shade labels
        ])
        .split(area);

    let title = if row.enabled {
        Line::from(Span::styled(
            row.kind.label(),
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(row.kind.label(), Style::default().fg(theme.palette.fg_disabled)),
            Span::styled(
                "  not available for this color",
                Style::default().fg(theme.palette.fg_disabled),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(title), rows[0]);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, SHADES.len() as u32); SHADES.len()])
        .split(rows[1]);
    let labels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, SHADES.len() as u32); SHADES.len()])
        .split(rows[2]);

    let source_column = row.source_column(state.source);
    let cursor_column = (state.focus == Focus::Swatches && state.cursor.kind == row.kind && row.enabled)
        .then_some(state.cursor.column);

    for (col, (shade, color)) in row.palette.display().enumerate() {
        let bg = swatch_color(color);

        let content = if row.enabled {
            let fg = swatch_color(label_color(color));
            let mut text_style = Style::default().fg(fg).bg(bg);
            if cursor_column == Some(col) {
                text_style = text_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            let marker = if source_column == Some(col) { "●" } else { "" };
            vec![
                Line::from(Span::styled(marker, Style::default().fg(fg).bg(bg))),
                Line::from(Span::styled(color.to_string(), text_style)),
            ]
        } else {
            Vec::new()
        };

        let cell = Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg));
        frame.render_widget(cell, cells[col]);

        let label_style = if cursor_column == Some(col) {
            Style::default()
                .fg(theme.palette.bg_primary)
                .bg(theme.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else if row.enabled {
            Style::default().fg(theme.palette.fg_secondary)
        } else {
            Style::default().fg(theme.palette.fg_disabled)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(shade.to_string(), label_style)))
                .alignment(Alignment::Center),
            labels[col],
        );
    }
}
