use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::controller::Controller;
use crate::event::{AppEvent, intent_for};
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(120);

/// Own the terminal for the lifetime of the session: raw mode + alternate
/// screen in, everything restored on the way out.
pub fn run_loop(mut controller: Controller, rx: Receiver<AppEvent>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Raw mode swallows the usual signal path; restore the terminal if the
    // process is killed from outside.
    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let result = event_loop(&mut terminal, &mut controller, &rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller,
    rx: &Receiver<AppEvent>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !controller.state.should_quit {
        terminal.draw(|f| ui::draw(f, &mut controller.state))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && let Some(intent) = intent_for(key, controller.state.input_mode())
        {
            controller.handle_intent(intent);
        }

        while let Ok(app_event) = rx.try_recv() {
            controller.on_app_event(app_event);
        }

        if last_tick.elapsed() >= TICK_RATE {
            controller.state.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }

    Ok(())
}
