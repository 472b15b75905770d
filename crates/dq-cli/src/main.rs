//! Console explorer for the Detetive Quest mansion map.

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dq_core::{Ending, ExplorationSession, ExploreConfig, SessionResult, build_mansion};

const BANNER: &str = "\
==================================================
        DETETIVE QUEST - MAPA DA MANSÃO
             NÍVEL NOVATO - ÁRVORE BINÁRIA
==================================================";

#[derive(Parser)]
#[command(
    name = "detetive-quest",
    about = "Detetive Quest: explore the mansion map room by room",
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_logging();

    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red());
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> SessionResult<()> {
    println!("{BANNER}");

    let mansion = build_mansion();
    let config = ExploreConfig::default().with_color(io::stdout().is_terminal());

    let stdin = io::stdin();
    let mut session =
        ExplorationSession::new(&mansion, stdin.lock(), io::stdout().lock()).with_config(config);
    let ending = session.run()?;
    drop(session);

    match &ending {
        Ending::ReachedLeaf(room) => tracing::info!(%room, "reached a dead end"),
        Ending::Quit => tracing::info!("player quit"),
        Ending::InputClosed => tracing::info!("input closed"),
    }

    drop(mansion);
    println!("\nMemória da mansão liberada. Fim do programa.");
    Ok(())
}
