//! Completions command implementation
//!
//! Handles the `wpai-digest completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
///
/// # Examples
///
/// ```bash
/// # Bash
/// wpai-digest completions bash > /etc/bash_completion.d/wpai-digest
///
/// # Zsh
/// wpai-digest completions zsh > ~/.zfunc/_wpai-digest
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

/// Write completions for `shell` into `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    // Cli lives in main.rs, so the command tree is rebuilt here
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("wpai-digest")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Structured digests of AI assistant responses")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract recommendations from AI responses")
                .arg(Arg::new("files").num_args(0..).value_name("FILE"))
                .arg(
                    Arg::new("kind")
                        .short('k')
                        .long("kind")
                        .value_parser(["security", "database", "db", "code", "review"]),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("no-analysis")
                        .long("no-analysis")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about("Initialize wpai-digest configuration")
                .arg(Arg::new("force").long("force").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("completions").about("Generate shell completions"));

    generate(shell, &mut cmd, "wpai-digest", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_completions_for_all_shells_mentions_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut buf = Vec::new();
            write_completions(shell, &mut buf);
            let script = String::from_utf8(buf).unwrap();
            assert!(script.contains("extract"), "{:?} completions lack extract", shell);
        }
    }

    #[test]
    fn test_write_completions_offers_kind_aliases() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        for kind in ["security", "database", "db", "code", "review"] {
            assert!(script.contains(kind), "bash completions lack {}", kind);
        }
    }
}
