use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        shift,
        force,
    } = cmd
    {
        let d = date::date_or_today(date.as_ref())?;
        let shift = shift.unwrap_or(cfg.default_shift);

        let (view, report) = session.history_view(d, shift);
        if let Some(e) = &report.warning {
            warning(format!("Store unavailable, exporting an empty grid: {}", e));
        }

        ExportLogic::export(&view, *format, file, *force)?;
    }
    Ok(())
}
