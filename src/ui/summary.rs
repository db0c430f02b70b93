//! End-of-session summary overlay.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::centered_rect;
use crate::engine::SessionSummary;

/// Render the session summary for `game_name` centered over the scene.
pub fn render_summary(frame: &mut Frame, area: Rect, game_name: &str, summary: &SessionSummary) {
    let panel = centered_rect(area, 44, 11);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            format!(" {game_name}: Session Complete "),
            Style::default().fg(Color::LightGreen),
        ));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines: Vec<Line> = vec![
        Line::from(""),
        row("Final score", summary.final_score.to_string(), Color::White),
        row("Collected", summary.resource_total.to_string(), Color::Green),
        row("Best streak", summary.max_streak.to_string(), Color::LightYellow),
        row("Level reached", summary.level_reached.to_string(), Color::Cyan),
        Line::from(""),
        Line::from(vec![
            Span::styled("Eco-points earned: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("+{}", summary.points_earned),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Menu   [r] Play again",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn row(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
    .alignment(Alignment::Center)
}
