use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::BackendKind;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if cfg.backend != BackendKind::Sqlite {
            info("The internal log is only kept by the sqlite backend.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.store_path().to_string_lossy())?;
        init_db(&pool.conn)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
