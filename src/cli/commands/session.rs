use crate::cli::commands::{log_op, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::status;

/// Handle `start` and `stop`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cfg)?;

    match cmd {
        Commands::Start => {
            if tracker.start_session()? {
                log_op(tracker.log().store(), "start", "session", "Work session started");
            }
        }
        Commands::Stop => {
            let secs = tracker.log().work_session_seconds()?;
            if tracker.stop_session()? {
                log_op(
                    tracker.log().store(),
                    "stop",
                    "session",
                    &format!("Work session stopped after {secs}s"),
                );
            }
        }
        _ => return Ok(()),
    }

    println!("{}", status::render(tracker.display()));
    Ok(())
}
