use crate::cli::commands::{open_log, parse_block_type};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::block_type::BlockType;
use crate::models::time_block::TimeBlock;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_block;
use crate::utils::date::{day_key, parse_day_key};

/// Handle `today`, `day` and `last`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let log = open_log(cfg)?;

    match cmd {
        Commands::Today { kind } => {
            let filter = kind.as_deref().map(parse_block_type).transpose()?;
            let key = log.today_key();
            print_blocks(&key, &log.get_today_events(filter)?);
        }
        Commands::Day { day, kind } => {
            // validates the key, and normalises zero padding
            let key = crate::utils::date::day_key_for_date(&parse_day_key(day)?);
            let filter = kind.as_deref().map(parse_block_type).transpose()?;
            let blocks: Vec<TimeBlock> = log
                .get_events_for_day(&key)?
                .into_iter()
                .filter(|b| filter.is_none_or(|k| b.kind == k))
                .collect();
            print_blocks(&key, &blocks);
        }
        Commands::Last { kinds } => {
            let kinds: Vec<BlockType> = kinds
                .iter()
                .map(|k| parse_block_type(k))
                .collect::<AppResult<_>>()?;
            let blocks = log.last_events_of_type(&kinds)?;
            match blocks.first() {
                Some(first) => print_blocks(&day_key(&first.start_time), &blocks),
                None => info("No matching blocks recorded."),
            }
        }
        _ => {}
    }

    Ok(())
}

fn print_blocks(key: &str, blocks: &[TimeBlock]) {
    if blocks.is_empty() {
        info(format!("No time blocks for {}", key));
        return;
    }

    header(format!("Time blocks for {}", key));
    for (i, b) in blocks.iter().enumerate() {
        println!(
            "{:>3}  {}  {}",
            i + 1,
            b.time_str(),
            colorize_block(b.kind.as_str())
        );
    }
}
