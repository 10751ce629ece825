// src/ui.rs

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use crate::app::App;
use crate::config::Config;
use crate::dashboard_view::draw_dashboard;
use crate::simulation::Simulation;

/// Enum for different types of events.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI.
pub async fn run_ui(config: Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    // Build the simulation before touching the terminal, so a bad config
    // never leaves raw mode enabled.
    let sim = Simulation::from_config(&config)?;
    let app = App::new(sim);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{:?}", err)
    }

    Ok(())
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Spawn a task to read user input and emit ticks
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            // Poll for input with timeout
            let timeout = Duration::from_millis(50);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if tx.send(Event::Input(event)).await.is_err() {
                        return;
                    }
                }
            }

            // Send tick event every 100ms
            if last_tick.elapsed() >= Duration::from_millis(100) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| draw_dashboard(f, &app))?;

        tokio::select! {
            Some(event) = rx.recv() => {
                match event {
                    Event::Input(event) => {
                        if handle_input(event, &mut app) {
                            break;
                        }
                    }
                    Event::Tick => {
                        app.pump();
                    }
                }
            }
            else => {
                break;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handles user input events. Returns true when the app should exit.
fn handle_input(event: CEvent, app: &mut App) -> bool {
    if let CEvent::Key(key) = event {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                app.should_quit = true;
                return true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
                return true;
            }
            KeyCode::Char(' ') => app.toggle_pause(),
            KeyCode::Up => app.scroll_up(),
            KeyCode::Down => app.scroll_down(),
            _ => {}
        }
    }
    false
}
