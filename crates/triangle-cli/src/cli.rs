//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Compiles a Triangle source file to a TAM object file.
#[derive(Parser, Debug)]
#[command(name = "triangle-cli", version, about)]
pub struct Cli {
    /// Path to the Triangle source file.
    pub source: PathBuf,

    /// Path the object file is written to.
    pub output: PathBuf,

    /// Increases log verbosity; repeat for more (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prints a structural outline of the parsed AST to stdout.
    #[arg(long = "dump-ast")]
    pub dump_ast: bool,

    /// Prints the resolved object instructions to stdout.
    #[arg(long = "dump-ir")]
    pub dump_ir: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
