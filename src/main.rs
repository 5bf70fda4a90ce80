use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use chess_referee::core::{
    default_settings_path, init_logging, load_settings, save_settings, RefereeSettings,
};
use chess_referee::input::{parse_move_list, MoveInput};
use chess_referee::Referee;

#[derive(Parser)]
#[command(name = "chess_referee", version, about = "Referee chess games from move lists")]
struct Cli {
    /// Settings file (defaults to settings.json in the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game and print the move log and result
    Play {
        /// Moves in coordinate notation, e.g. e2e4 e7e5 g1f3
        moves: Vec<String>,
        /// Read moves from a file instead (one or more per line, # comments)
        #[arg(long, conflicts_with = "moves")]
        file: Option<PathBuf>,
        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the legal moves after the given moves
    Legal {
        moves: Vec<String>,
    },
    /// Write the default settings file
    InitSettings {
        /// Target path (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.settings.as_deref());
    init_logging(&settings.log_filter)?;

    match cli.command {
        Commands::Play { moves, file, json } => {
            let text = match file {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("reading moves from {}", path.display()))?,
                None => moves.join(" "),
            };
            let inputs = parse_inputs(&text, &settings)?;
            let mut referee = Referee::new(&settings)?;
            let transcript = referee.play(&inputs);

            if json {
                println!("{}", serde_json::to_string_pretty(&transcript)?);
            } else {
                for line in &transcript.moves {
                    println!("{line}");
                }
                if let Some(rejected) = &transcript.rejected {
                    println!("Illegal move #{}: {}", rejected.index + 1, rejected.text);
                }
                println!("{}", transcript.result);
            }
            if transcript.rejected.is_some() {
                std::process::exit(2);
            }
        }
        Commands::Legal { moves } => {
            let inputs = parse_inputs(&moves.join(" "), &settings)?;
            let mut referee = Referee::new(&settings)?;
            let transcript = referee.play(&inputs);
            if let Some(rejected) = transcript.rejected {
                bail!("move #{} ({}) is illegal", rejected.index + 1, rejected.text);
            }
            for mv in referee.legal_moves() {
                println!("{mv}");
            }
        }
        Commands::InitSettings { path } => {
            let path = path.or(cli.settings).unwrap_or_else(default_settings_path);
            save_settings(&RefereeSettings::default(), &path)?;
            info!("[SETTINGS] Default settings written");
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn parse_inputs(text: &str, settings: &RefereeSettings) -> Result<Vec<MoveInput>> {
    Ok(parse_move_list(text, &settings.promotion_keys)?)
}
