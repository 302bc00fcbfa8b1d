//! HallPass terminal front end
//!
//! Shows the current class period and runs the hall pass from a terminal.
//! Display lines go to stdout, logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin hallpass
//!
//! # Explicit config file and verbose logging
//! HALLPASS_CONFIG=./hallpass.toml RUST_LOG=debug cargo run --bin hallpass
//! ```
//!
//! # Commands
//!
//! - `pass` or an empty line: start a pass (asks for a name) or end the active one
//! - `start <name>`: start a pass directly
//! - `end`: end the active pass
//! - `show`: print the full display
//! - `json`: print the display as JSON
//! - `quit`: exit
//!
//! # Environment Variables
//!
//! - `HALLPASS_CONFIG`: path to a config file (default: search for `hallpass.toml`)
//! - `RUST_LOG`: log filter (default: info)

use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use hallpass::app::{AppState, DisplaySnapshot, HallPassConfig, PassTransition};
use hallpass::time::{Clock, SystemClock};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = HallPassConfig::load_or_default().context("loading configuration")?;
    info!(
        "Starting HallPass (period refresh {}s, timer refresh {}s)",
        config.timers.period_refresh_secs, config.timers.elapsed_refresh_secs
    );

    let mut app = AppState::new(SystemClock, config);
    print_display(app.display());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut awaiting_name = false;

    loop {
        let wait = time_until_deadline(&app);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    info!("Input closed, exiting");
                    break;
                };

                if awaiting_name {
                    awaiting_name = false;
                    submit_name(&mut app, &line);
                    continue;
                }

                match Command::parse(&line) {
                    Command::Toggle if !app.session().is_active() => {
                        println!("Enter student name:");
                        awaiting_name = true;
                    }
                    Command::Toggle | Command::End => {
                        if app.toggle_pass(None)? == PassTransition::Ended {
                            print_display(app.display());
                        }
                    }
                    Command::Start(name) => submit_name(&mut app, &name),
                    Command::Show => print_display(app.display()),
                    Command::Json => println!("{}", serde_json::to_string_pretty(app.display())?),
                    Command::Quit => break,
                    Command::Unknown(other) => {
                        println!("Unknown command {:?}. Try: pass, start <name>, end, show, json, quit", other);
                    }
                }
            }
            _ = tokio::time::sleep(wait) => {
                let before = app.display().period.clone();
                let refreshed = app.tick();
                if refreshed.period && app.display().period != before {
                    println!("{}", app.display().period);
                }
                if refreshed.timer {
                    println!("{}  {}", app.display().holder, app.display().timer);
                }
            }
        }
    }

    Ok(())
}

/// Input line commands.
#[derive(Debug, PartialEq)]
enum Command {
    Toggle,
    Start(String),
    End,
    Show,
    Json,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word.to_ascii_lowercase().as_str() {
            "" | "pass" => Command::Toggle,
            "start" => Command::Start(rest.to_string()),
            "end" => Command::End,
            "show" => Command::Show,
            "json" => Command::Json,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

fn submit_name<C: Clock>(app: &mut AppState<C>, name: &str) {
    match app.start_pass(name) {
        Ok(()) => print_display(app.display()),
        Err(e) if e.is_validation() => debug!("Pass not started: {}", e),
        Err(e) => warn!("Pass not started: {}", e),
    }
}

fn time_until_deadline<C: Clock>(app: &AppState<C>) -> Duration {
    match app.next_deadline() {
        Some(deadline) => (deadline - app.clock().now())
            .to_std()
            .unwrap_or(Duration::ZERO),
        None => app.config().timers.period_refresh(),
    }
}

fn print_display(display: &DisplaySnapshot) {
    println!("== {} ==", display.title);
    println!("{}", display.period);
    println!("{}", display.status);
    if !display.holder.is_empty() {
        println!("{}", display.holder);
    }
    println!("{}", display.timer);
    println!("[{}]", display.button);
}
