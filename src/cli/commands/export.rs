use crate::cli::commands::{log_op, open_log};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let log = open_log(cfg)?;
        let rows = ExportLogic::export(&log, *format, file, *force)?;
        if rows > 0 {
            log_op(
                log.store(),
                "export",
                format.as_str(),
                &format!("{rows} blocks exported to {file}"),
            );
        }
    }
    Ok(())
}
