//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Focus, ToastKind};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{help, source_input, swatches};

/// Main layout structure:
/// ┌ Palette Generator ─────────────────────────────┐
/// │ ╭ Source ────────╮  #fafafa  hsb … lch …       │
/// │ ╰────────────────╯                             │
/// │ accent                                         │
/// │ [900][800][700][600][500][400][300][200][100][50]
/// │ light                                          │
/// │ …                                              │
/// │ dark                                           │
/// │ …                                              │
/// ├────────────────────────────────────────────────┤
/// │ toast / key hints                              │
/// └────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = get_theme();
    let root = frame.area();

    let main = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set(false))
        .border_style(Style::default().fg(theme.palette.border))
        .title(" Palette Generator ")
        .title_style(
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    let inner = main.inner(root);
    frame.render_widget(main, root);

    let palette_rows = state.rows();

    let mut constraints = vec![Constraint::Length(3)];
    for _ in &palette_rows {
        constraints.push(Constraint::Length(1)); // Spacer
        constraints.push(Constraint::Length(swatches::HEIGHT));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Status line

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    source_input::render(frame, state, rows[0]);
    for (i, row) in palette_rows.iter().enumerate() {
        swatches::render(frame, state, row, rows[2 + i * 2]);
    }
    render_status_line(frame, state, rows[rows.len() - 1]);

    if state.show_help {
        let area = centered(root, 60, 16);
        frame.render_widget(Clear, area);
        help::render(frame, state, area);
    }
}

/// Toast if one is showing, key hints otherwise
fn render_status_line(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let line = match &state.toast {
        Some(toast) => {
            let color = match toast.kind {
                ToastKind::Success => theme.palette.accent,
                ToastKind::Error => theme.palette.error,
            };
            Line::from(Span::styled(
                format!(" {}", toast.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => {
            let hints = match state.focus {
                Focus::Input => " type a hex color · Enter: pick swatches · F1: help · Esc: quit",
                Focus::Swatches => " ←↑↓→: move · Enter: copy · Tab: edit source · ?: help · q: quit",
            };
            Line::from(Span::styled(hints, Style::default().fg(theme.palette.fg_secondary)))
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
