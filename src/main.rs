//! BMI Calculator
//!
//! A terminal form that computes Body Mass Index from height and weight and
//! shows the value with its health category. Runs once without the UI when
//! both `--height` and `--weight` are given.

use std::io;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use bmi_calc::application::{render_report, run_headless, App, AppError};
use bmi_calc::infrastructure::{init_logging, Config, LogTarget};
use bmi_calc::presentation::{render_ui, InputHandler};

/// Entry point for the BMI calculator.
///
/// Parses the command line, installs logging, then either computes a single
/// result or runs the interactive form until the user quits.
///
/// # Errors
///
/// Returns an error if logging or terminal setup fails, if the terminal
/// fails during runtime, or if a one-shot submission is rejected.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let headless = config.headless_inputs();
    init_logging(
        &LogTarget::for_mode(headless.is_some(), config.log_file.as_deref()),
        &config.log_level,
    )?;

    if let Some((height, weight)) = headless {
        let report = match run_headless(height, weight, config.validate_submissions()) {
            Ok(report) => report,
            Err(err @ AppError::Rejected { .. }) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
            Err(err) => return Err(err.into()),
        };
        println!("{}", render_report(&report, config.json)?);
        return Ok(());
    }

    info!(validate = config.validate_submissions(), "starting interactive form");
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.validate_submissions());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("form closed");

    res?;
    Ok(())
}

/// Main application event loop.
///
/// Redraws the form after every key press and stops once the app is
/// marked to quit.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
        }
    }
    Ok(())
}
