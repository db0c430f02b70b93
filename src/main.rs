use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use ecoquest::build_info;
use ecoquest::engine::{SessionPhase, SessionSummary};
use ecoquest::games::{forest, ocean, ActiveMinigame, ForestGame, GameEvent, GameInput, OceanGame};
use ecoquest::ledger::EcoPointsLedger;
use ecoquest::ui;

const FRAME_MS: u64 = 50;

enum Screen {
    Menu,
    Playing,
}

struct App {
    screen: Screen,
    menu_selected: usize,
    active: Option<ActiveMinigame>,
    /// Set when the current session ends; cleared on restart or menu.
    summary: Option<SessionSummary>,
    /// Latest feed line from game events.
    last_message: Option<String>,
    ledger: EcoPointsLedger,
}

impl App {
    fn new() -> Self {
        Self {
            screen: Screen::Menu,
            menu_selected: 0,
            active: None,
            summary: None,
            last_message: None,
            ledger: EcoPointsLedger::load(),
        }
    }

    fn launch_selected(&mut self) {
        let mut game = match self.menu_selected {
            0 => ActiveMinigame::Ocean(OceanGame::new()),
            _ => ActiveMinigame::Forest(ForestGame::new()),
        };
        match &mut game {
            ActiveMinigame::Ocean(g) => {
                g.start();
            }
            ActiveMinigame::Forest(g) => {
                g.start();
            }
        }
        self.active = Some(game);
        self.summary = None;
        self.last_message = None;
        self.screen = Screen::Playing;
    }

    /// Tear the session down and return to the menu.
    fn back_to_menu(&mut self) {
        match self.active.as_mut() {
            Some(ActiveMinigame::Ocean(g)) => g.reset(),
            Some(ActiveMinigame::Forest(g)) => g.reset(),
            None => {}
        }
        self.active = None;
        self.summary = None;
        self.last_message = None;
        self.screen = Screen::Menu;
    }

    fn restart(&mut self) {
        self.summary = None;
        self.last_message = None;
        match self.active.as_mut() {
            Some(ActiveMinigame::Ocean(g)) => {
                g.reset();
                g.start();
            }
            Some(ActiveMinigame::Forest(g)) => {
                g.reset();
                g.start();
            }
            None => {}
        }
    }

    fn session_ended(&self) -> bool {
        match self.active.as_ref() {
            Some(ActiveMinigame::Ocean(g)) => g.session.phase == SessionPhase::Ended,
            Some(ActiveMinigame::Forest(g)) => g.session.phase == SessionPhase::Ended,
            None => false,
        }
    }

    fn handle_events(&mut self, events: &[GameEvent], game_name: &str) {
        for event in events {
            if let GameEvent::Ended(summary) = event {
                self.summary = Some(*summary);
                if self.ledger.credit(game_name, summary) {
                    let _ = self.ledger.save();
                }
            }
            if let Some(message) = event_message(event) {
                self.last_message = Some(message);
            }
        }
    }
}

fn event_message(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Collected {
            name,
            points,
            streak,
        } => Some(format!("+{points} {name} (streak {streak})")),
        GameEvent::Penalty { name, points, .. } => Some(format!("-{points} hit {name}!")),
        GameEvent::Shielded { name } => Some(format!("Shield absorbed the {name}")),
        GameEvent::CollectibleMissed { .. } => Some("Trash slipped past!".to_string()),
        GameEvent::PowerUp { name } => Some(format!("Power-up: {name}")),
        GameEvent::CellSaved { points } => Some(format!("+{points} tree saved")),
        GameEvent::CellBurnt { penalty } => Some(format!("-{penalty} tree lost")),
        GameEvent::HelicopterDrop {
            extinguished,
            points,
        } => Some(format!("Helicopter drop: {extinguished} fires out, +{points}")),
        GameEvent::StreakDecayed => Some("Streak fizzled out".to_string()),
        GameEvent::LevelUp { level } => Some(format!("Level {level}!")),
        GameEvent::AchievementUnlocked { name, bonus } => {
            Some(format!("Achievement: {name} (+{bonus})"))
        }
        GameEvent::Ended(_) => None,
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "ecoquest {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("EcoQuest - Terminal Eco-Arcade\n");
                println!("Usage: ecoquest\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'ecoquest --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut app = App::new();
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(Duration::from_millis(FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !handle_key(&mut app, key) {
                    return Ok(());
                }
            }
        }

        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();

        let (events, name) = match app.active.as_mut() {
            Some(ActiveMinigame::Ocean(game)) => {
                (ocean::tick_ocean(game, dt_ms, &mut rng), "Ocean Cleanup")
            }
            Some(ActiveMinigame::Forest(game)) => {
                (forest::tick_forest(game, dt_ms, &mut rng), "Forest Fire")
            }
            None => (Vec::new(), ""),
        };
        app.handle_events(&events, name);
    }
}

/// Returns false when the app should exit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.screen {
        Screen::Menu => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Up | KeyCode::Char('k') => {
                app.menu_selected = app.menu_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.menu_selected = (app.menu_selected + 1).min(ui::menu::MENU_GAMES.len() - 1);
            }
            KeyCode::Enter => app.launch_selected(),
            _ => {}
        },
        Screen::Playing => {
            if app.session_ended() {
                match key.code {
                    KeyCode::Enter | KeyCode::Esc => app.back_to_menu(),
                    KeyCode::Char('r') => app.restart(),
                    _ => {}
                }
                return true;
            }
            if key.code == KeyCode::Esc {
                app.back_to_menu();
                return true;
            }
            let input = map_game_input(key.code);
            let events = match app.active.as_mut() {
                Some(ActiveMinigame::Ocean(game)) => {
                    ocean::process_input(game, input);
                    Vec::new()
                }
                Some(ActiveMinigame::Forest(game)) => forest::process_input(game, input),
                None => Vec::new(),
            };
            app.handle_events(&events, "Forest Fire");
        }
    }
    true
}

fn map_game_input(code: KeyCode) -> GameInput {
    match code {
        KeyCode::Left | KeyCode::Char('a') => GameInput::Left,
        KeyCode::Right | KeyCode::Char('d') => GameInput::Right,
        KeyCode::Up | KeyCode::Char('w') => GameInput::Up,
        KeyCode::Down | KeyCode::Char('s') => GameInput::Down,
        KeyCode::Char(' ') | KeyCode::Enter => GameInput::Primary,
        KeyCode::Char('h') => GameInput::Tool,
        KeyCode::Char('p') => GameInput::Pause,
        _ => GameInput::Other,
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match app.screen {
        Screen::Menu => ui::render_menu(frame, area, app.menu_selected, &app.ledger),
        Screen::Playing => {
            match app.active.as_ref() {
                Some(ActiveMinigame::Ocean(game)) => ui::render_ocean_scene(frame, area, game),
                Some(ActiveMinigame::Forest(game)) => ui::render_forest_scene(frame, area, game),
                None => {}
            }
            if let Some(message) = app.last_message.as_deref() {
                ui::render_feed_line(frame, area, message);
            }
            if let (Some(summary), Some(game)) = (app.summary.as_ref(), app.active.as_ref()) {
                ui::render_summary(frame, area, game.display_name(), summary);
            }
        }
    }
}
