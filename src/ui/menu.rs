//! Main menu: game list, lifetime eco-points, build footer.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{render_key_hints, render_scene_frame};
use crate::build_info::{BUILD_COMMIT, BUILD_DATE};
use crate::ledger::EcoPointsLedger;

pub const MENU_GAMES: &[(&str, &str)] = &[
    ("Ocean Cleanup", "Catch trash, spare the wildlife"),
    ("Forest Fire", "Hold the line against the flames"),
];

/// Render the main menu with `selected` highlighted.
pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize, ledger: &EcoPointsLedger) {
    let inner = render_scene_frame(frame, area, " EcoQuest ", Color::Green);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Play for the planet",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        rows[0],
    );

    let mut lines: Vec<Line> = Vec::new();
    for (i, (name, blurb)) in MENU_GAMES.iter().enumerate() {
        let marker = if i == selected { "> " } else { "  " };
        let name_style = if i == selected {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::LightGreen)),
            Span::styled(format!("{name:<16}"), name_style),
            Span::styled(blurb.to_string(), Style::default().fg(Color::DarkGray)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), rows[1]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Eco-points: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                ledger.total_points.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        rows[2],
    );

    render_key_hints(
        frame,
        rows[3],
        &[
            ("[Up/Down]", "Select"),
            ("[Enter]", "Play"),
            ("[q]", "Quit"),
        ],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{BUILD_COMMIT} · {BUILD_DATE}"),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right),
        rows[4],
    );
}
