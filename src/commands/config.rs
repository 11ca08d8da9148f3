use std::fmt::Write;

use cloudcue_core::Config;

pub fn show(config: &Config) -> bool {
    let (out, valid) = report(config);
    print!("{}", out);
    valid
}

/// Config location, key status and validation findings. The flag is false
/// when any setting is invalid.
pub fn report(config: &Config) -> (String, bool) {
    let mut out = String::new();
    match Config::config_path() {
        Ok(path) => writeln!(out, "Config file:  {}", path.display()),
        Err(e) => writeln!(out, "Config file:  unavailable ({})", e),
    }
    .ok();
    writeln!(out, "Data dir:     {}", config.storage.data_dir.display()).ok();
    writeln!(
        out,
        "API keys:     {}",
        if config.has_api_keys() { "set" } else { "missing" }
    )
    .ok();

    let validation = config.validate();
    for warning in &validation.warnings {
        writeln!(out, "⚠️ {}", warning).ok();
    }
    for error in &validation.errors {
        writeln!(out, "❌ {}", error).ok();
    }
    (out, validation.is_valid())
}
