use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::grid::print_grid;
use crate::ui::messages::{info, warning};
use crate::utils::date;

/// Rebuild the grid of a date and shift from the stored readings.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Show { date, shift } = cmd {
        let d = date::date_or_today(date.as_ref())?;
        let shift = shift.unwrap_or(cfg.default_shift);

        let (view, report) = session.history_view(d, shift);

        if let Some(e) = &report.warning {
            warning(format!("Store unavailable, showing no stored data: {}", e));
        }
        if report.dropped > 0 {
            warning(format!(
                "{} malformed row(s) skipped while loading",
                report.dropped
            ));
        }
        if view.is_empty() {
            info(format!("No data yet for {} ({} shift)", d, shift));
        }

        print_grid(&view);
    }

    Ok(())
}
