pub mod block_type;
pub mod day_log;
pub mod time_block;
