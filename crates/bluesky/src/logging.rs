use std::fs::{self, OpenOptions};
use std::path::Path;

use color_eyre::eyre::WrapErr;

/// Install the global logger, appending to `path`.
///
/// The terminal belongs to the UI, so nothing is written to stderr.
/// `filter` follows the `env_logger` syntax; without it `RUST_LOG` is used,
/// then `info`.
pub fn init_logging(filter: Option<&str>, path: &Path) -> color_eyre::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let mut builder = env_logger::Builder::new();
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()
        .wrap_err("installing logger")?;

    log::debug!("logging to {}", path.display());
    Ok(())
}
