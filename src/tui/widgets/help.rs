//! Help overlay showing keybindings

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay
pub fn render(frame: &mut Frame, _state: &AppState, area: Rect) {
    let theme = get_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set(true))
        .border_style(Style::default().fg(theme.palette.accent))
        .title(" Keybinds ")
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Source", &theme),
        keybind("0-9 a-f #", "Type a color", &theme),
        keybind("Backspace", "Delete", &theme),
        keybind("Ctrl+u", "Clear input", &theme),
        keybind("Enter", "Pick swatches", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("? / F1", "Toggle help", &theme),
        keybind("Ctrl+c", "Quit", &theme),
    ];
    frame.render_widget(Paragraph::new(left_content).wrap(Wrap { trim: false }), cols[0]);

    let right_content = vec![
        section_header("Swatches", &theme),
        keybind("h / Left", "Heavier shade", &theme),
        keybind("l / Right", "Lighter shade", &theme),
        keybind("k / Up", "Previous palette", &theme),
        keybind("j / Down", "Next palette", &theme),
        keybind("Enter / y", "Copy hex", &theme),
        keybind("Tab / i", "Edit source", &theme),
        keybind("q / Esc", "Quit", &theme),
    ];
    frame.render_widget(Paragraph::new(right_content).wrap(Wrap { trim: false }), cols[1]);
}

fn section_header(title: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            format!("{:11}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
