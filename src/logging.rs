//! Debug-build file logging
//!
//! The terminal belongs to the UI, so log output goes to `village.log` in
//! the temp directory. Release builds never initialize a logger.

use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = "village.log";

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

#[cfg(debug_assertions)]
pub fn init() -> std::io::Result<()> {
    use std::fs::OpenOptions;
    use std::io::Write;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path())?;

    // A second init (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    Ok(())
}

#[cfg(not(debug_assertions))]
pub fn init() -> std::io::Result<()> {
    Ok(())
}
