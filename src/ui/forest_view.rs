//! Forest Fire scene: the cell grid with cursor, danger gauge, and
//! helicopter status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use super::{render_key_hints, render_pause_banner, render_scene_frame};
use crate::games::forest::types::{CellState, DANGER_MAX, GRID_COLS, GRID_ROWS};
use crate::games::ForestGame;

/// Each cell renders as two columns to keep the grid roughly square.
const CELL_WIDTH: u16 = 2;

fn cell_glyph(state: CellState) -> (&'static str, Color) {
    match state {
        CellState::Healthy => ("^^", Color::Green),
        CellState::Burning => ("/\\", Color::LightRed),
        CellState::Saved => ("..", Color::LightBlue),
        CellState::Burnt => ("__", Color::DarkGray),
    }
}

/// Render the Forest Fire scene.
pub fn render_forest_scene(frame: &mut Frame, area: Rect, game: &ForestGame) {
    let inner = render_scene_frame(frame, area, " Forest Fire ", Color::LightRed);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GRID_COLS as u16 * (CELL_WIDTH + 1) + 1),
            Constraint::Min(20),
        ])
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GRID_ROWS as u16 * 2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(cols[0]);

    render_grid(frame, rows[0], game);
    render_danger_gauge(frame, rows[1], game);
    render_key_hints(
        frame,
        rows[2],
        &[
            ("[Arrows]", "Aim"),
            ("[Space]", "Extinguish"),
            ("[h]", "Helicopter"),
            ("[p]", "Pause"),
        ],
    );
    render_stats_panel(frame, cols[1], game);

    if game.session.is_paused {
        render_pause_banner(frame, rows[0]);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, game: &ForestGame) {
    let mut lines: Vec<Line> = Vec::with_capacity(GRID_ROWS * 2);
    for (row, cols) in game.grid.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        for (col, cell) in cols.iter().enumerate() {
            let (glyph, color) = cell_glyph(cell.state);
            let mut style = Style::default().fg(color);
            if game.cursor == (row, col) {
                style = style.bg(Color::Rgb(70, 70, 70)).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_danger_gauge(frame: &mut Frame, area: Rect, game: &ForestGame) {
    let ratio = f64::from(game.danger) / f64::from(DANGER_MAX);
    let color = if game.danger >= 70 {
        Color::Red
    } else if game.danger >= 40 {
        Color::Yellow
    } else {
        Color::Green
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Rgb(30, 30, 30)))
        .ratio(ratio)
        .label(Span::styled(
            format!("Danger {}%", game.danger),
            Style::default().fg(Color::White),
        ));
    frame.render_widget(gauge, area);
}

fn render_stats_panel(frame: &mut Frame, area: Rect, game: &ForestGame) {
    let session = &game.session;
    let counts = game.cell_counts();
    let helicopter = if game.helicopter_ready() {
        Span::styled("READY", Style::default().fg(Color::LightGreen))
    } else {
        Span::styled(
            format!("{}s", game.helicopter_cooldown_ms.div_ceil(1000)),
            Style::default().fg(Color::DarkGray),
        )
    };

    let lines: Vec<Line> = vec![
        stat_line("Score", session.score.to_string(), Color::White),
        stat_line("Time", format!("{}s", session.time_left_secs()), Color::White),
        stat_line("Level", session.level.to_string(), Color::Cyan),
        stat_line(
            "Fires out",
            game.fires_extinguished().to_string(),
            Color::LightBlue,
        ),
        stat_line("Trees saved", game.trees_saved.to_string(), Color::Green),
        Line::from(""),
        Line::from(vec![
            Span::styled("Helicopter: ", Style::default().fg(Color::DarkGray)),
            helicopter,
        ]),
        Line::from(""),
        stat_line("Healthy", counts.healthy.to_string(), Color::Green),
        stat_line("Burning", counts.burning.to_string(), Color::LightRed),
        stat_line("Burnt", counts.burnt.to_string(), Color::DarkGray),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
