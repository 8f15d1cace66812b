//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show`, and `config init`.

use std::path::Path;

use clap::Subcommand;
use mapcart::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration (file values over defaults)
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init { force } => run_init(&config_file_path(), force),
    }
}

fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

fn run_show() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    print!("{}", render(&config));
    Ok(())
}

/// Write defaults to `path`, leaving an existing file alone unless `force`.
fn run_init(path: &Path, force: bool) -> Result<(), CliError> {
    let written = if force {
        ConfigFile::default().save_to(path)?;
        true
    } else {
        ConfigFile::ensure_exists_at(path)?
    };

    if written {
        println!("Wrote default configuration to {}", path.display());
    } else {
        println!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Ok(())
}

fn render(config: &ConfigFile) -> String {
    let g = &config.geocoder;
    let mut out = String::new();

    out.push_str("[geocoder]\n");
    out.push_str(&format!("  enabled = {}\n", g.enabled));
    out.push_str(&format!("  url = {}\n", g.url));
    out.push_str(&format!("  timeout_secs = {}\n", g.timeout_secs));
    out.push_str(&format!("  user_agent = {}\n", g.user_agent));
    out.push_str(&format!(
        "  language = {}\n",
        g.language.as_deref().unwrap_or("(not set)")
    ));
    out.push_str(&format!("  zoom = {}\n", g.zoom));

    out.push_str("\n[naming]\n");
    out.push_str(&format!(
        "  placeholder_prefix = {}\n",
        config.naming.placeholder_prefix
    ));
    out.push_str(&format!(
        "  timestamp_format = {}\n",
        config.naming.timestamp_format
    ));

    out.push_str("\n[style]\n");
    out.push_str(&format!("  default_color = {}\n", config.style.default_color));
    out.push_str(&format!("  committed_color = {}\n", config.style.committed_color));
    out.push_str(&format!("  selected_color = {}\n", config.style.selected_color));
    out.push_str(&format!("  weight = {}\n", config.style.weight));

    out.push_str("\n[logging]\n");
    out.push_str(&format!(
        "  directory = {}\n",
        config.logging.directory.display()
    ));
    out.push_str(&format!("  file = {}\n", config.logging.file));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_lists_every_section() {
        let text = render(&ConfigFile::default());
        for section in ["[geocoder]", "[naming]", "[style]", "[logging]"] {
            assert!(text.contains(section), "missing {}", section);
        }
        assert!(text.contains("language = (not set)"));
    }

    #[test]
    fn test_init_respects_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[style]\nweight = 9\n").unwrap();

        run_init(&path, false).unwrap();
        assert_eq!(ConfigFile::load_from(&path).unwrap().style.weight, 9);

        run_init(&path, true).unwrap();
        assert_eq!(
            ConfigFile::load_from(&path).unwrap(),
            ConfigFile::default()
        );
    }
}
