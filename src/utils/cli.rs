//! Command-line argument parsing and help for kittyfs.
//!
//! When invoked with no args/flags (kittyfs), kittyfs simply launches the TUI.

use crate::config::{Config, ThemeColors, save_theme};

pub enum CliAction {
    RunApp,
    Exit,
}

/// A recognized command line, before anything is executed.
#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    Run,
    Version,
    Help,
    Keybinds,
    Init,
    ResetTheme,
    Invalid(String),
}

pub fn parse_args(args: &[String]) -> CliCommand {
    match args {
        [] | [_] => CliCommand::Run,
        [_, arg] => match arg.as_str() {
            "--version" | "-v" => CliCommand::Version,
            "-h" | "--help" => CliCommand::Help,
            "--keybinds" | "--keybind" | "--keys" => CliCommand::Keybinds,
            "--init" => CliCommand::Init,
            "--reset-theme" => CliCommand::ResetTheme,
            other => CliCommand::Invalid(format!("Unknown argument: {}", other)),
        },
        _ => CliCommand::Invalid("kittyfs accepts only one argument at a time.".into()),
    }
}

pub fn handle_args(config: &Config) -> CliAction {
    let args: Vec<String> = std::env::args().collect();

    match parse_args(&args) {
        CliCommand::Run => return CliAction::RunApp,
        CliCommand::Version => print_version(),
        CliCommand::Help => print_help(config),
        CliCommand::Keybinds => println!("{}", KEYBINDS_TEXT),
        CliCommand::Init => {
            let path = config.settings_path();
            match Config::generate_default(&path) {
                Ok(()) => println!("Wrote {}", path.display()),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        CliCommand::ResetTheme => {
            let path = config.theme_path();
            let theme = ThemeColors::default();
            match save_theme(&path, &theme) {
                Ok(()) => println!(
                    "Theme reset to {} in {}",
                    theme.palette_name().unwrap_or("custom"),
                    path.display()
                ),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        CliCommand::Invalid(msg) => {
            eprintln!("{}", msg);
            eprintln!("Usage: kittyfs [OPTION]");
            eprintln!("Try --help for available options");
        }
    }
    CliAction::Exit
}

fn print_version() {
    println!("kittyfs {}", env!("CARGO_PKG_VERSION"));
}

fn print_help(config: &Config) {
    println!(
        r#"kittyfs - a tiny terminal file browser =^..^=

USAGE:
  kittyfs [OPTION]

Starts on the drive selection screen. Enter a drive, walk directories,
open files with the system default application.

OPTIONS:
      --init              Generate a default kittyfs.toml
      --keybinds          Display the default keybinds
      --reset-theme       Reset the persisted color theme
  -h, --help              Print help information
  -v, --version           Display the installed version of kittyfs

ENVIRONMENT:
  KITTYFS_CONFIG_DIR      Override the config directory

CONFIG DIRECTORY:
  {}
"#,
        config.dir().display()
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  quit                      ["q", "<c-c>"]
  keybind_help              ["?"]
  activate                  ["enter"]
  go_parent                 ["backspace"]
  cycle_theme               ["t"]
  reveal                    ["o"]

[list]
  up / down                 ["up", "k"] / ["down", "j"]
  previous / next page      ["left", "h"] / ["right", "l"]
  first / last              ["home", "g"] / ["end", "G"]
  filter                    ["/"]
  clear filter              ["esc"]
"##;
