//! Config command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::{ConfigArgs, ConfigFormat};

/// Renders the configuration in the requested format
pub fn render_config(config: &CliConfig, format: ConfigFormat) -> CliResult<String> {
    match format {
        ConfigFormat::Yaml => serde_yaml_ng::to_string(config).map_err(CliError::serialization),
        ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(CliError::serialization),
    }
}

/// Execute the config command
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let rendered = render_config(config, args.format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
