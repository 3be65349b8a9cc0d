//! # GutterMuse terminal chat
//!
//! Interactive turn loop around the response engine.
//!
//! Usage: `cargo run --bin bot`

use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use tokio::sync::mpsc;

use guttermuse::core::Config;
use guttermuse::features::conversation::ChatEngine;
use guttermuse::features::personas::Persona;

const USER_PROMPT: &str = "You> ";
const BOT_PREFIX: &str = "Bot> ";
const SILENCE_NUDGE: &str = "Toss me something juicier than silence.";

fn load_persona(config: &Config) -> Result<Persona> {
    match &config.persona_path {
        Some(path) => {
            info!("📄 Loading persona from {path}");
            Persona::load(path)
        }
        None => {
            info!("Using bundled persona");
            Ok(Persona::default())
        }
    }
}

/// Read stdin on a dedicated thread so Ctrl-C never waits on a blocked read
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(1);
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines().map_while(|line| line.ok()) {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
        debug!("stdin closed");
    });
    rx
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let persona = Arc::new(load_persona(&config)?);
    info!("Starting chat as {}", persona.name);

    let mut bot = match config.rng_seed {
        Some(seed) => {
            info!("Using fixed RNG seed {seed}");
            ChatEngine::seeded(persona, seed)?
        }
        None => ChatEngine::new(persona)?,
    };

    println!("{}", bot.intro());
    let mut lines = spawn_stdin_reader();

    loop {
        print!("{USER_PROMPT}");
        io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.recv() => line,
            _ = tokio::signal::ctrl_c() => None,
        };

        // End of input or interrupt
        let Some(line) = line else {
            println!("\n{BOT_PREFIX}{}", bot.outro());
            break;
        };

        let user = line.trim();
        if user.is_empty() {
            println!("{BOT_PREFIX}{SILENCE_NUDGE}");
            continue;
        }

        let response = bot.respond(user);
        println!("{BOT_PREFIX}{response}");
        if bot.is_exit_line(&response) {
            break;
        }
    }

    Ok(())
}
