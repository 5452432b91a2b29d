use gripframe_core::config::{self, Config};

/// Prints where the config file lives and the settings in effect.
pub fn execute(config: &Config) {
    match config::config_path() {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (not found, using defaults)", path.display()),
        None => println!("Config file: unavailable (no home directory)"),
    }

    match config.to_toml() {
        Ok(text) => println!("\n{text}"),
        Err(e) => {
            eprintln!("Error: could not serialize config: {e}");
            std::process::exit(1);
        }
    }
}
