pub(crate) mod generate;
mod schema;
pub(crate) mod verify;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "user-list-seeder")]
#[command(version)]
#[command(about = "Generate user_list.json fixtures with sample users and display metadata", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a user list document
    Generate {
        /// Number of users to generate [default: 10000]
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Random seed for reproducible ages (OS entropy if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Output file, or '-' for stdout [default: user_list.json]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML config file (flags override its values)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write single-line JSON instead of indented JSON
        #[arg(long, conflicts_with = "pretty")]
        compact: bool,

        /// Write indented JSON even if the config file asks for compact
        #[arg(long)]
        pretty: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Generate but do not write the document
        #[arg(long)]
        dry_run: bool,

        /// Print a JSON summary to stdout
        #[arg(long)]
        json: bool,
    },

    /// Check that a document has the user list shape
    Verify {
        /// Document to check
        file: PathBuf,

        /// Require the built-in descriptor exactly
        #[arg(long)]
        strict: bool,

        /// Output results as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Print JSON Schemas for the document and --json outputs
    Schema {
        /// Schema to print (document, generate, verify); all if omitted
        name: Option<String>,

        /// List schema names only
        #[arg(long)]
        list: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            count,
            seed,
            output,
            config,
            compact,
            pretty,
            verbose,
            dry_run,
            json,
        } => generate::run(generate::GenerateArgs {
            count,
            seed,
            output,
            config,
            compact,
            pretty,
            verbose,
            dry_run,
            json,
        }),
        Commands::Verify { file, strict, json } => verify::run(file, strict, json),
        Commands::Schema { name, list } => schema::run(name, list),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "user-list-seeder",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
