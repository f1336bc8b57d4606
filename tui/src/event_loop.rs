//! Event Loop Module
//!
//! Terminal setup, the crossterm read thread, and the main async
//! update/view loop.

use std::io;

use crossterm::event::EnableMouseCapture;
use crossterm::{execute, terminal::EnterAlternateScreen};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::interval;

use crate::app::{AppState, InputEvent, PresenterOptions};
use crate::deck::Deck;
use crate::terminal::TerminalGuard;
use crate::view::view;

pub async fn run_tui(deck: Deck, options: PresenterOptions) -> io::Result<()> {
    let _guard = TerminalGuard;
    crossterm::terminal::enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut state = AppState::new(deck, &options);

    // Input events come from a dedicated thread blocking on crossterm.
    let (internal_tx, mut internal_rx) = tokio::sync::mpsc::channel::<InputEvent>(100);
    std::thread::spawn(move || {
        loop {
            if let Ok(event) = crossterm::event::read()
                && let Some(event) = crate::event::map_crossterm_event_to_input_event(event)
                && internal_tx.blocking_send(event).is_err()
            {
                break;
            }
        }
    });

    let mut animation_interval = interval(options.tick_rate);

    // Main async update/view loop.
    terminal.draw(|f| view(f, &state))?;
    let mut should_quit = false;
    loop {
        tokio::select! {
            event = internal_rx.recv() => {
                let Some(event) = event else {
                    break;
                };
                if let InputEvent::Quit = event {
                    should_quit = true;
                } else {
                    let term_size = terminal.size()?;
                    crate::services::update::update(&mut state, event, term_size);
                }
            }
            _ = animation_interval.tick() => {
                state.on_tick();
            }
        }
        if should_quit {
            break;
        }
        terminal.draw(|f| view(f, &state))?;
    }

    crossterm::terminal::disable_raw_mode()?;
    execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableMouseCapture
    )?;
    Ok(())
}
