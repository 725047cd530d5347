use crate::cli::commands::{log_op, open_log};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { set, clear } = cmd {
        let log = open_log(cfg)?;

        if let Some(rate) = set {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(AppError::InvalidRate(rate.to_string()));
            }
            log.set_hourly_rate(Some(*rate))?;
            log_op(log.store(), "rate", "set", &format!("Hourly rate set to {rate}"));
            success(format!("Hourly rate set to {}", format_amount(*rate)));
            return Ok(());
        }

        if *clear {
            log.set_hourly_rate(None)?;
            log_op(log.store(), "rate", "clear", "Hourly rate cleared");
            success("Hourly rate cleared");
            return Ok(());
        }

        match log.hourly_rate()? {
            Some(rate) => info(format!("Hourly rate: {}", format_amount(rate))),
            None => info("No hourly rate set."),
        }
    }

    Ok(())
}
