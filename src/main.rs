use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::time::Instant;

mod app;
mod config;
mod demo;
mod error;
mod notifier;
#[cfg(test)]
mod test_utils;
mod toast;
mod widgets;

use app::App;
use toast::Severity;

/// Transient toast notifications for terminal UIs
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Show transient, severity-styled toast notifications in the terminal"
)]
struct Args {
    /// Message to show as a toast on startup
    message: Option<String>,

    /// Severity of the startup message (unknown values fall back to info)
    #[arg(short, long, default_value = "info")]
    severity: String,

    /// Run the four-toast demo sequence on startup
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/ttoast-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ttoast-debug.log")
            .expect("Failed to open /tmp/ttoast-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== TTOAST DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early so timings are settled before the app is built
    let config_result = config::load_config();

    let args = Args::parse();

    let terminal = init_terminal()?;

    let mut app = App::new(&config_result.config);

    if let Some(warning) = config_result.warning {
        app.notifier.show_message(&warning, Severity::Warning);
    }

    if let Some(message) = &args.message {
        app.notifier
            .show_message(message, Severity::parse_lossy(&args.severity));
        app.one_shot = true;
    }

    if args.demo {
        app.demo.start(Instant::now());
        app.one_shot = true;
    }

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== TTOAST DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Redraw every iteration: toast slides are time-driven
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
