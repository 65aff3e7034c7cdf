//! Architect - Logic Architect board verifier
//!
//! Builds a board from a description file and grades it against a built-in
//! level's truth table.
//!
//! # Usage
//!
//! ```bash
//! architect board.lgc
//! architect board.lgc --level 4
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use architect_core::{
    circuit::{validate_board, Circuit},
    dsl,
    error::Result,
    level::builtin_level,
    ArchitectError,
};

/// Logic circuit verifier for Logic Architect boards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the board description file (.lgc)
    #[arg(value_name = "BOARD_FILE")]
    board_file: PathBuf,

    /// Built-in level to grade against (overrides the file's .level directive)
    #[arg(short, long)]
    level: Option<u32>,

    /// Log engine activity while grading
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<bool> {
    // Parse the board file
    let doc = dsl::parse_file(&args.board_file)?;

    // Pick the level: flag first, then the file's directive
    let level_id = args.level.or(doc.level).unwrap_or(1);
    let level =
        builtin_level(level_id).ok_or(ArchitectError::UnknownLevel { id: level_id })?;

    // Build and validate the board
    let mut circuit = Circuit::from_doc(&doc)?;
    validate_board(&circuit, &level)?;

    let passed = architect_core::verify(&mut circuit, &level.truth_table);

    if passed {
        println!("PASS  level {} ({})", level.id, level.name);
    } else {
        println!("FAIL  level {} ({}) - {}", level.id, level.name, level.goal);
    }

    Ok(passed)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
