use std::io::{self, BufRead};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booking_system::{config::Config, App};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting booking system");

    let mut app = App::new(config).context("failed to restore saved seat state")?;

    // Commands come from argv when given, otherwise one per stdin line.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read command")?;
            run_command(&mut app, &line);
        }
    } else {
        for arg in &args {
            run_command(&mut app, arg);
        }
    }

    app.save().context("failed to save seat state")?;
    info!("{} of 160 seats booked", app.map.booked_seats());
    Ok(())
}

fn run_command(app: &mut App, line: &str) {
    // blank lines are REPL noise, not commands
    if line.trim().is_empty() {
        return;
    }
    match app.apply(line) {
        Ok(cmd) => println!("OK: {}", cmd),
        Err(e) => println!("rejected: {}", e),
    }
}
