use crate::cli::commands::{log_op, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        if !*force {
            warning("This deletes the session counter and every recorded day.");
            print!("Continue? [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            let ans = answer.trim().to_ascii_lowercase();
            if ans != "y" && ans != "yes" {
                info("Reset cancelled.");
                return Ok(());
            }
        }

        let mut tracker = open_tracker(cfg)?;
        tracker.reset_all()?;
        log_op(tracker.log().store(), "reset", "all", "Counter and day log cleared");
        success("All recorded time blocks and the session counter were deleted.");
    }

    Ok(())
}
