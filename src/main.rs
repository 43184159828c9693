//! main.rs
//! Entry point for kittyfs

use kittyfs::app::AppState;
use kittyfs::config::{Config, load_theme};
use kittyfs::core::{list_roots, terminal};
use kittyfs::utils::cli::{CliAction, handle_args};

fn main() {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[kittyfs] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let config = Config::load();

    if let CliAction::Exit = handle_args(&config) {
        return;
    }

    let theme = load_theme(&config.theme_path());
    let mut app = AppState::new(&config, list_roots(), theme);

    if let Err(e) = terminal::run_terminal(&mut app, &config) {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        eprintln!("[kittyfs] Error: {}", e);
        std::process::exit(1);
    }
}
