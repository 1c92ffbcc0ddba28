use std::sync::Arc;

use itlog::{Level, LevelLogger, LogFile, set_default_logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("itlog_facade.log");
    set_default_logger(Arc::new(LevelLogger::new_default(
        LogFile::new(&path)?,
        Level::Info,
    )));
    itlog::init_log_bridge()?;

    log::debug!("not written");
    log::info!("Hello, world!");
    log::error!("written to {}", path.display());

    print!("{}", std::fs::read_to_string(&path)?);
    Ok(())
}
