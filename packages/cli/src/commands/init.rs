use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Indent width of the JSON preview
    #[arg(short, long, default_value = "2")]
    pub indent: usize,

    /// Hide field ids in the outline
    #[arg(long)]
    pub hide_ids: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config {
        indent: args.indent,
        show_ids: !args.hide_ids,
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Run: schemabuilder shell");
    println!("  2. Type 'help' for the list of commands");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = std::env::temp_dir().join(format!("schemabuilder-init-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let cwd = dir.display().to_string();

        init(
            InitArgs {
                indent: 4,
                hide_ids: true,
                force: true,
            },
            &cwd,
        )
        .unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.indent, 4);
        assert!(!config.show_ids);

        fs::remove_dir_all(&dir).unwrap();
    }
}
