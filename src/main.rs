mod appframework;
mod config;
mod event_ext;
mod history;
mod navigator;
mod router;

use crate::appframework::Application;
use crate::config::{HistoryConfig, Paths};
use crate::history::{HistoryPersistence, Location, SessionFile};
use crate::navigator::Navigator;
use crate::router::MemoryRouter;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::info;
use std::rc::Rc;

fn init_logging(paths: Option<&Paths>) -> anyhow::Result<Option<LoggerHandle>> {
    let Some(paths) = paths else {
        return Ok(None);
    };
    let handle = Logger::try_with_env_or_str("info")
        .context("Failed to configure logging")?
        .log_to_file(FileSpec::default().directory(paths.log_dir()).basename("navstack"))
        .start()
        .context("Failed to start logging")?;
    Ok(Some(handle))
}

fn load_config(paths: Option<&Paths>) -> anyhow::Result<HistoryConfig> {
    match paths {
        Some(paths) => HistoryConfig::load(paths.config_file())
            .with_context(|| format!("Invalid configuration in {}", paths.config_file().display())),
        None => Ok(HistoryConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let paths = Paths::from_env();
    let _logger = init_logging(paths.as_ref())?;
    let config = load_config(paths.as_ref())?;

    let session_id = config::session_id();
    let store = paths.as_ref().map(|p| SessionFile(p.session_file(&session_id)));
    match &store {
        Some(SessionFile(path)) => info!("Session {} stored in {}", session_id, path.display()),
        None => info!("No data directory, session {} is not persisted", session_id),
    }
    let persistence = HistoryPersistence::with_key(store, config.storage_key.clone());

    let initial = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let router = Rc::new(MemoryRouter::new(Location::parse(&initial)));
    let routed = config.enabled.then(|| router.clone());
    let history = history::connect(routed, persistence, config.max_entries);

    Navigator::new(router, history, &config)
        .run()
        .context("Terminal error")
}

