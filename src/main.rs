// algotrace: step-by-step algorithm visualizer for the terminal

use std::io;
use std::path::PathBuf;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, Level};

use algotrace::algorithms::{Algorithm, Category};
use algotrace::errors::AppError;
use algotrace::settings::{cli, map_args_to_settings, Settings};
use algotrace::ui::App;

fn main() {
    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    if settings.list_only {
        print_catalog();
        return;
    }

    let logpath = match get_logging_path(&settings) {
        Ok(it) => it,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(if settings.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(logfile)
        .init();

    debug!("starting application");

    match run(settings) {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(settings: Settings) -> Result<(), AppError> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(res?)
}

fn print_catalog() {
    for category in Category::ALL {
        println!("{}", category.title());
        for algorithm in Algorithm::ALL.iter().filter(|a| a.category() == category) {
            println!("  {:<18} {}", algorithm.slug(), algorithm.title());
        }
    }
}

fn get_logging_path(settings: &Settings) -> Result<PathBuf, AppError> {
    if let Some(dir) = &settings.log_dir {
        return Ok(dir.clone());
    }
    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("algotrace").join("logs")),
        None => Err(AppError::Initialization),
    }
}
