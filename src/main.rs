use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;
use wpai_digest::cmd;

/// Structured digests of AI assistant responses
///
/// wpai-digest pulls actionable recommendations, database optimization
/// summaries and code review sections out of AI-generated WordPress reports.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract recommendations from AI responses
    Extract {
        /// Response files to read (omit or use '-' for stdin)
        #[arg(value_name = "FILE")]
        files: Vec<String>,

        /// Digest kind: security, database, code (defaults to config)
        #[arg(short, long)]
        kind: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Leave the raw response out of JSON output
        #[arg(long)]
        no_analysis: bool,
    },

    /// Initialize wpai-digest configuration
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match cli.command {
        Some(Commands::Extract {
            files,
            kind,
            json,
            no_analysis,
        }) => cmd::cmd_extract(&cmd::ExtractArgs {
            files,
            kind,
            json,
            no_analysis,
        }),
        Some(Commands::Init { force }) => cmd::cmd_init(force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell);
            Ok(())
        }
        None => {
            println!("wpai-digest v{}", env!("CARGO_PKG_VERSION"));
            println!("Structured digests of AI assistant responses\n");
            println!("Usage: wpai-digest <COMMAND>\n");
            println!("Commands:");
            println!("  extract      Extract recommendations from AI responses");
            println!("  init         Initialize wpai-digest configuration");
            println!("  completions  Generate shell completions");
            println!("\nRun 'wpai-digest <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use wpai_digest::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
