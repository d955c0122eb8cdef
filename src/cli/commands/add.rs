use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calendar::ShiftCalendar;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::grid::print_grid;
use crate::ui::messages::{success, warning};
use crate::utils::{date, time};

/// Record readings, then show the live grid of the shift they fall in.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Add {
        date,
        time: at,
        machine,
        entries,
    } = cmd
    {
        let d = date::date_or_today(date.as_ref())?;
        let t = time::parse_optional_time(at.as_ref())?.unwrap_or_else(time::now);
        let machine_id = machine.as_deref().unwrap_or(&cfg.machine_id);

        let readings = AddLogic::build_readings(machine_id, d, t, entries)?;

        match session.record(&readings)? {
            None => success(format!(
                "{} reading(s) saved for {} {}",
                readings.len(),
                d,
                t.format("%H:%M:%S")
            )),
            Some(e) => warning(format!(
                "Readings kept for this session only, store not updated: {}",
                e
            )),
        }

        let shift = ShiftCalendar::shift_for(ShiftCalendar::bucket_for(t));
        print_grid(&session.live_view(d, shift));
    }

    Ok(())
}
