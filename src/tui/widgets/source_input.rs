//! Source color input box

use crate::app::state::{AppState, Focus};
use crate::tui::theme::{get_theme, swatch_color};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shades::{rgb2hsb, rgb2lch};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let is_focused = state.focus == Focus::Input;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(10)])
        .split(area);

    let border_color = if is_focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set(is_focused))
        .border_style(Style::default().fg(border_color))
        .title(" Source ")
        .title_style(Style::default().fg(theme.palette.accent));

    let cursor = if is_focused { "▏" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("██ ", Style::default().fg(swatch_color(state.source))),
        Span::styled(
            format!("{}{}", state.input, cursor),
            Style::default().fg(theme.palette.fg_primary),
        ),
    ]))
    .block(block);
    frame.render_widget(input, cols[0]);

    // Color details beside the box
    let hsb = rgb2hsb(state.source);
    let lch = rgb2lch(state.source);
    let tone = state.tone();
    let mut tags = Vec::new();
    if tone.light {
        tags.push("light");
    }
    if tone.dark {
        tags.push("dark");
    }
    if tone.grey {
        tags.push("grey");
    }

    let secondary = Style::default().fg(theme.palette.fg_secondary);
    let details = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(format!(" {}", state.source), Style::default().fg(theme.palette.fg_primary)),
            Span::styled(
                format!(
                    "  hsb {:.0}° {:.0}% {:.0}%  lch {:.1} {:.1} {:.0}°",
                    hsb.hue,
                    hsb.saturation * 100.0,
                    hsb.brightness * 100.0,
                    lch.lightness,
                    lch.chroma,
                    lch.hue
                ),
                secondary,
            ),
            Span::styled(format!("  [{}]", tags.join(", ")), secondary),
        ]),
    ];
    frame.render_widget(Paragraph::new(details), cols[1]);
}
