use crate::config::{self, Config};
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    // Pretty print config as TOML
    // Since Config struct derives Serialize, we can just serialize it
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    // Use serde_json::to_value to inspect fields dynamically by key path
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    // Support dot notation: "backend.base_url"
    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    // Print value nicely
    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

/// Update one key in the config file, validating the result before saving.
///
/// Values are parsed as JSON first so numbers, booleans and arrays land
/// with the right type; anything unparsable is stored as a string.
pub fn set(key: &str, value: &str) -> Result<()> {
    let config_path = config::config_path()?;
    let config = if config_path.exists() {
        config::load_from_path(&config_path)?
    } else {
        Config::default()
    };

    let mut tree = serde_json::to_value(&config).context("Failed to serialize config")?;

    let parts: Vec<&str> = key.split('.').collect();
    let (last, parents) = parts.split_last().context("Config key must not be empty")?;

    let mut current = &mut tree;
    for part in parents {
        current = current
            .get_mut(*part)
            .context(format!("Key not found: {}", part))?;
    }
    let slot = current
        .get_mut(*last)
        .context(format!("Key not found: {}", last))?;

    *slot = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

    let updated: Config = serde_json::from_value(tree)
        .with_context(|| format!("Invalid value for {}: {}", key, value))?;
    updated.validate()?;

    config::save_to_path(&updated, &config_path)?;
    println!("✓ Set {} = {}", key, value);
    Ok(())
}
