//! Logging setup.
//!
//! Routes the `log` facade to stderr through [`fern`], stamping every line with the local time.

use log::LevelFilter;

/// Installs the global logger. Must be called once, before anything logs.
pub fn init() -> Result<(), String> {
    let crate_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Info)
        .level_for(env!("CARGO_CRATE_NAME"), crate_level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| e.to_string())
}
