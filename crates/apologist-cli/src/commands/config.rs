//! Config commands for CLI.
//!
//! Values live in `config.toml` under the data directory; keys are dotted
//! paths such as `list.sort`.

use apologist_core::Config;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value
    Get {
        /// Dotted key (e.g. "analytics.month_window_days", "list.sort")
        key: String,
    },
    /// Change one value and save
    Set {
        /// Dotted key
        key: String,
        /// New value, parsed against the current value's type
        value: String,
    },
    /// Print the whole config file as TOML
    List,
    /// Overwrite the config file with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::debug!(%key, %value, "config updated");
            println!("{key} = {}", config.get(&key).unwrap_or(value));
        }
        ConfigAction::List => {
            print!("{}", toml::to_string_pretty(&Config::load()?)?);
        }
        ConfigAction::Reset => {
            let path = Config::path()?;
            Config::default().save_to(&path)?;
            println!("reset {}", path.display());
        }
    }
    Ok(())
}
