//! Ocean Cleanup scene: falling entities over a water field, the boat
//! along the bottom row, stats panel to the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{render_key_hints, render_pause_banner, render_scene_frame};
use crate::engine::{Entity, EntityKind};
use crate::games::ocean::types::{BOAT_WIDTH, FIELD_HEIGHT, FIELD_WIDTH};
use crate::games::OceanGame;

const WATER_BG: Color = Color::Rgb(8, 24, 48);
const BOAT_COLOR: Color = Color::Rgb(222, 184, 135);

fn entity_glyph(entity: &Entity) -> (char, Color) {
    match entity.kind {
        EntityKind::Collectible => match entity.subtype {
            "plastic_bottle" => ('b', Color::LightCyan),
            "soda_cup" => ('u', Color::LightRed),
            "plastic_bag" => ('~', Color::Gray),
            "food_container" => ('c', Color::LightYellow),
            "metal_can" => ('n', Color::White),
            _ => ('#', Color::Yellow),
        },
        EntityKind::Hazard => match entity.subtype {
            "shark" => ('S', Color::LightBlue),
            "octopus" => ('O', Color::Magenta),
            "turtle" => ('T', Color::Green),
            "crab" => ('x', Color::Red),
            _ => ('f', Color::Cyan),
        },
        EntityKind::Obstacle => ('%', Color::DarkGray),
        EntityKind::Powerup => match entity.subtype {
            "speed_boost" => ('>', Color::LightYellow),
            "shield" => ('@', Color::LightBlue),
            "double_points" => ('2', Color::LightMagenta),
            _ => ('+', Color::LightGreen),
        },
    }
}

/// Render the Ocean Cleanup scene.
pub fn render_ocean_scene(frame: &mut Frame, area: Rect, game: &OceanGame) {
    let inner = render_scene_frame(frame, area, " Ocean Cleanup ", Color::Cyan);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(FIELD_WIDTH as u16 + 2),
            Constraint::Min(18),
        ])
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT as u16),
            Constraint::Length(1),
        ])
        .split(cols[0]);

    render_play_field(frame, rows[0], game);
    render_key_hints(
        frame,
        rows[1],
        &[
            ("[Left/Right]", "Steer"),
            ("[p]", "Pause"),
            ("[Esc]", "Back"),
        ],
    );
    render_stats_panel(frame, cols[1], game);

    if game.session.is_paused {
        render_pause_banner(frame, rows[0]);
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &OceanGame) {
    let width = (FIELD_WIDTH as usize).min(area.width as usize);
    let height = (FIELD_HEIGHT as usize).min(area.height as usize);
    if width == 0 || height == 0 {
        return;
    }

    let mut cells: Vec<Vec<(char, Color)>> = vec![vec![(' ', WATER_BG); width]; height];

    for entity in game.entities.iter().filter(|e| e.is_active()) {
        let x = entity.x as usize;
        let y = entity.y as usize;
        if x < width && y < height {
            cells[y][x] = entity_glyph(entity);
        }
    }

    // Boat occupies the bottom row.
    if height == FIELD_HEIGHT as usize {
        let row = height - 1;
        let start = game.boat_x as usize;
        for dx in 0..BOAT_WIDTH as usize {
            let x = start + dx;
            if x < width {
                cells[row][x] = ('=', BOAT_COLOR);
            }
        }
    }

    let lines: Vec<Line> = cells
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|(ch, color)| {
                    Span::styled(ch.to_string(), Style::default().fg(color).bg(WATER_BG))
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_stats_panel(frame: &mut Frame, area: Rect, game: &OceanGame) {
    let session = &game.session;
    let lives = session.lives.unwrap_or(0) as usize;
    let hearts = "<3 ".repeat(lives);
    let multiplier = game.scoring.config().law.multiplier(session.streak);

    let mut lines: Vec<Line> = vec![
        stat_line("Score", session.score.to_string(), Color::White),
        stat_line("Time", format!("{}s", session.time_left_secs()), Color::White),
        stat_line("Lives", hearts, Color::LightRed),
        stat_line("Level", session.level.to_string(), Color::Cyan),
        stat_line(
            "Streak",
            format!("{} (x{multiplier})", session.streak),
            Color::LightYellow,
        ),
        stat_line("Trash", session.resource_collected.to_string(), Color::Green),
        Line::from(""),
    ];

    if game.effects.is_shielded() {
        lines.push(effect_line("Shield", game.effects.shield_ms, Color::LightBlue));
    }
    if game.effects.is_double_points() {
        lines.push(effect_line(
            "Double points",
            game.effects.double_points_ms,
            Color::LightMagenta,
        ));
    }
    if game.effects.is_speed_boosted() {
        lines.push(effect_line(
            "Speed boost",
            game.effects.speed_boost_ms,
            Color::LightYellow,
        ));
    }

    if game.achievements.unlocked_count() > 0 {
        lines.push(Line::from(""));
        lines.push(stat_line(
            "Badges",
            game.achievements.unlocked_count().to_string(),
            Color::Yellow,
        ));
    }

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

fn effect_line(name: &str, remaining_ms: u64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name} "), Style::default().fg(color)),
        Span::styled(
            format!("{}s", remaining_ms.div_ceil(1000)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
