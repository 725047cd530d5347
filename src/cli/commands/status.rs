use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::core::session::SessionPhase;
use crate::errors::AppResult;
use crate::ui::messages::{detail, header};
use crate::ui::status;
use crate::utils::format_duration;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let log = tracker.log();

    header("Work session");
    println!("{}", status::render(tracker.display()));

    match tracker.phase()? {
        SessionPhase::Inactive => detail("No work session running."),
        _ => {
            let secs = log.work_session_seconds()?;
            detail(format!(
                "Counter: {} ({}s)",
                format_duration(secs, &cfg.long_format),
                secs
            ));
        }
    }

    let today = log.get_today_events(None)?;
    detail(format!("Blocks recorded today: {}", today.len()));

    if let Some(rate) = log.hourly_rate()? {
        detail(format!("Hourly rate: {rate}"));
    }

    Ok(())
}
