use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Draw, poll input and advance the curve once per tick until the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an action. Returns `true` when the app should exit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => InputAction::MenuPrev,
            KeyCode::Down | KeyCode::Tab => InputAction::MenuNext,
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => InputAction::MenuInc,
            KeyCode::Left | KeyCode::Char('-') => InputAction::MenuDec,
            KeyCode::Enter => InputAction::MenuApply,
            KeyCode::Esc => InputAction::MenuCancel,
            _ => return false,
        },
        Scene::Curve => match code {
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                InputAction::TogglePause
            }
            KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Restart,
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => InputAction::ToggleMenu,
            _ => return false,
        },
    };
    let _ = app.handle_input(action);
    false
}
