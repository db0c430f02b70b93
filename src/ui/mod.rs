//! Terminal rendering. Every scene is a pure `fn render_*(frame, area,
//! &state)` over game state; nothing here mutates the games.

pub mod forest_view;
pub mod menu;
pub mod ocean_view;
pub mod summary;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub use forest_view::render_forest_scene;
pub use menu::render_menu;
pub use ocean_view::render_ocean_scene;
pub use summary::render_summary;

/// A `width`×`height` rect centered inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Outer game frame with a colored title; returns the inner area.
pub fn render_scene_frame(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(title.to_string(), Style::default().fg(color)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// One-line key hint bar: `[Key] Action` pairs in dim styling.
pub fn render_key_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Latest message-feed line, pinned to the bottom edge of the frame.
pub fn render_feed_line(frame: &mut Frame, area: Rect, message: &str) {
    if area.height < 2 {
        return;
    }
    let line_area = Rect::new(area.x + 1, area.y + area.height - 1, area.width - 2, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::LightYellow),
        ))),
        line_area,
    );
}

/// Centered "PAUSED" banner over a running scene.
pub fn render_pause_banner(frame: &mut Frame, area: Rect) {
    let banner = centered_rect(area, 22, 3);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "PAUSED",
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center),
        inner,
    );
}
