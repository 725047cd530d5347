use super::time_block::TimeBlock;
use std::collections::BTreeMap;

/// Day key (`D/M/Y`) → blocks in insertion order.
///
/// The map is ordered by the raw key string, which is NOT chronological;
/// use `utils::date::sorted_day_keys` when order matters.
pub type DayLog = BTreeMap<String, Vec<TimeBlock>>;
