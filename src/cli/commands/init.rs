use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::store::{BackendKind, CsvSheet};
use crate::ui::messages::warning;

use crate::cli::parser::Cli;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the readings store (csv sheet or sqlite database)
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing qcgrid…");

    if !cli.test {
        let path = cfg.save()?;
        println!("📄 Config file : {}", path.display());
    }

    let store = cfg.store_path();
    println!("🗄️  Store      : {} ({})", store.display(), cfg.backend.as_str());

    match cfg.backend {
        BackendKind::Csv => CsvSheet::new(&store).ensure_exists()?,
        BackendKind::Sqlite => {
            if let Some(dir) = store.parent()
                && !dir.as_os_str().is_empty()
            {
                std::fs::create_dir_all(dir)?;
            }
            let conn = Connection::open(&store)?;
            init_db(&conn)?;

            if let Err(e) = log::ttlog(
                &conn,
                "init",
                "Database initialized",
                &format!("Database initialized at {}", store.display()),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }
        }
    }

    println!("🎉 qcgrid initialization completed!");
    Ok(())
}
