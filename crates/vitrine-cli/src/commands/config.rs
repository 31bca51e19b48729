use anyhow::Result;

use vitrine_core::AppConfig;

/// Write the effective configuration (file values merged over defaults)
/// back to the config file, creating it if missing.
pub fn init(config: &AppConfig) -> Result<()> {
    config.save()?;
    println!("Wrote {}", AppConfig::config_path().display());
    Ok(())
}

/// Print the config file location.
pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
