//! Init command implementation
//!
//! Handles the `wpai-digest init` command which writes a default
//! `.wpai-digest.toml` into the current directory.

use anyhow::Result;
use console::{style, Emoji};
use std::env;
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader, CONFIG_FILE_NAME};
use crate::error::DigestError;
use crate::fmt::{emoji, INFO};
use crate::report::DigestKind;

const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Initialize wpai-digest configuration
///
/// Refuses to overwrite an existing file unless `force` is set.
///
/// # Examples
///
/// ```no_run
/// use wpai_digest::cmd::init::cmd_init;
///
/// cmd_init(false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(force: bool) -> Result<()> {
    let dir = env::current_dir()?;
    let config = init_config(&dir, force)?;

    println!(
        "{} Created {}",
        emoji(&CHECKMARK),
        style(CONFIG_FILE_NAME).cyan().bold()
    );
    println!("   kind = {}", style(&config.kind).green());
    println!("   json = {}", style(config.json).green());
    println!(
        "   include-analysis = {}",
        style(config.include_analysis).green()
    );
    println!();

    println!("{}  Available kinds:", emoji(&INFO));
    for kind in DigestKind::ALL {
        println!("   {} {}", style("•").dim(), style(kind).bold());
    }

    Ok(())
}

/// Write the default config into `dir`
pub fn init_config(dir: &Path, force: bool) -> Result<ConfigFile> {
    if ConfigLoader::exists(dir) && !force {
        return Err(DigestError::ConfigExists {
            path: dir.join(CONFIG_FILE_NAME),
        }
        .into());
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, dir)?;
    log::debug!("wrote {}", dir.join(CONFIG_FILE_NAME).display());
    Ok(config)
}
