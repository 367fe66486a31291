//! Config command - inspect and edit the extraction settings.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use dalil_core::models::{DalilConfig, ImportConfig};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with the default values
    Init(InitArgs),

    /// Print one setting
    Get {
        /// Setting name (e.g. "import.article_max")
        key: String,
    },

    /// Change one setting
    Set {
        /// Setting name
        key: String,
        /// New value (a character count)
        value: String,
    },

    /// Print the configuration file location
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Write somewhere other than the default location
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

/// One editable setting: a named accessor pair over [`ImportConfig`].
///
/// Every setting is a character count, so `set` takes the parsed number
/// directly and unknown keys or non-numeric values are rejected before
/// anything is written.
struct Setting {
    key: &'static str,
    get: fn(&ImportConfig) -> usize,
    set: fn(&mut ImportConfig, usize),
}

const SETTINGS: &[Setting] = &[
    Setting {
        key: "import.article_min",
        get: |c| c.article_min,
        set: |c, v| c.article_min = v,
    },
    Setting {
        key: "import.article_max",
        get: |c| c.article_max,
        set: |c, v| c.article_max = v,
    },
    Setting {
        key: "import.recital_min",
        get: |c| c.recital_min,
        set: |c, v| c.recital_min = v,
    },
    Setting {
        key: "import.recital_max",
        get: |c| c.recital_max,
        set: |c, v| c.recital_max = v,
    },
    Setting {
        key: "import.final_min",
        get: |c| c.final_min,
        set: |c, v| c.final_min = v,
    },
    Setting {
        key: "import.final_max",
        get: |c| c.final_max,
        set: |c, v| c.final_max = v,
    },
    Setting {
        key: "import.summary_body_threshold",
        get: |c| c.summary_body_threshold,
        set: |c, v| c.summary_body_threshold = v,
    },
    Setting {
        key: "import.summary_min",
        get: |c| c.summary_min,
        set: |c, v| c.summary_min = v,
    },
    Setting {
        key: "import.summary_max",
        get: |c| c.summary_max,
        set: |c, v| c.summary_max = v,
    },
];

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show(&path),
        ConfigCommand::Init(init_args) => init(init_args, &path),
        ConfigCommand::Get { key } => get(&path, &key),
        ConfigCommand::Set { key, value } => set(&path, &key, &value),
        ConfigCommand::Path => show_location(&path),
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dalil")
        .join("config.json")
}

fn load(path: &Path) -> anyhow::Result<DalilConfig> {
    if path.exists() {
        Ok(DalilConfig::from_file(path)?)
    } else {
        Ok(DalilConfig::default())
    }
}

fn find_setting(key: &str) -> anyhow::Result<&'static Setting> {
    SETTINGS.iter().find(|s| s.key == key).ok_or_else(|| {
        let known: Vec<&str> = SETTINGS.iter().map(|s| s.key).collect();
        anyhow::anyhow!("Unknown setting '{}'. Known settings: {}", key, known.join(", "))
    })
}

/// Reject a configuration whose capture windows cannot match anything.
fn validate_windows(import: &ImportConfig) -> anyhow::Result<()> {
    let windows = [
        ("article", import.article_min, import.article_max),
        ("recital", import.recital_min, import.recital_max),
        ("final", import.final_min, import.final_max),
        ("summary", import.summary_min, import.summary_max),
    ];
    for (name, min, max) in windows {
        if min > max {
            anyhow::bail!("{} window is empty: min {} > max {}", name, min, max);
        }
    }
    Ok(())
}

fn show(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        println!(
            "{} {} does not exist; these are the defaults.",
            style("ℹ").blue(),
            path.display()
        );
    }
    let config = load(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init(args: InitArgs, default_path: &Path) -> anyhow::Result<()> {
    let path = args.output.as_deref().unwrap_or(default_path);

    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    ensure_parent(path)?;
    DalilConfig::default().save(path)?;

    println!(
        "{} Wrote default configuration to {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

fn get(path: &Path, key: &str) -> anyhow::Result<()> {
    let setting = find_setting(key)?;
    let config = load(path)?;
    println!("{}", (setting.get)(&config.import));
    Ok(())
}

fn set(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let setting = find_setting(key)?;
    let parsed: usize = value
        .parse()
        .map_err(|_| anyhow::anyhow!("Setting '{}' expects a number, got '{}'", key, value))?;

    let mut config = load(path)?;
    (setting.set)(&mut config.import, parsed);
    validate_windows(&config.import)?;

    ensure_parent(path)?;
    config.save(path)?;

    println!("{} Set {} = {}", style("✓").green(), key, parsed);
    Ok(())
}

fn show_location(path: &Path) -> anyhow::Result<()> {
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "{} not created yet; run 'dalil config init'",
            style("!").yellow()
        );
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_setting_reads_back_its_own_field() {
        let mut import = ImportConfig::default();
        for (i, setting) in SETTINGS.iter().enumerate() {
            (setting.set)(&mut import, 1000 + i);
            assert_eq!((setting.get)(&import), 1000 + i, "{}", setting.key);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(find_setting("import.article_max").is_ok());
        assert!(find_setting("import.article_window_max").is_err());
        assert!(find_setting("ocr.detection_threshold").is_err());
    }

    #[test]
    fn empty_window_is_rejected() {
        assert!(validate_windows(&ImportConfig::default()).is_ok());

        let mut import = ImportConfig::default();
        import.recital_min = 900;
        let err = validate_windows(&import).unwrap_err();
        assert!(err.to_string().contains("recital window is empty"));
    }
}
