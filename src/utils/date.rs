use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Day key for a local timestamp: `D/M/Y`, no zero padding (e.g. `7/3/2025`).
pub fn day_key(ts: &DateTime<Local>) -> String {
    day_key_for_date(&ts.date_naive())
}

pub fn day_key_for_date(d: &NaiveDate) -> String {
    format!("{}/{}/{}", d.day(), d.month(), d.year())
}

/// Parse a `D/M/Y` key back into a date. Zero-padded parts are accepted.
pub fn parse_day_key(key: &str) -> AppResult<NaiveDate> {
    let parts: Vec<&str> = key.trim().split('/').collect();
    if parts.len() != 3 {
        return Err(AppError::InvalidDayKey(key.to_string()));
    }

    let num = |s: &str| -> AppResult<u32> {
        s.parse::<u32>()
            .map_err(|_| AppError::InvalidDayKey(key.to_string()))
    };

    let day = num(parts[0])?;
    let month = num(parts[1])?;
    let year = parts[2]
        .parse::<i32>()
        .map_err(|_| AppError::InvalidDayKey(key.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| AppError::InvalidDayKey(key.to_string()))
}

/// Keys sorted from most recent to oldest day.
/// Keys that do not parse as dates sort last, in reverse string order.
pub fn sorted_day_keys<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut keyed: Vec<(Option<NaiveDate>, &str)> = keys
        .into_iter()
        .map(|k| (parse_day_key(k).ok(), k.as_str()))
        .collect();

    // Some(date) > None, so valid keys come first once reversed
    keyed.sort();
    keyed.reverse();

    keyed.into_iter().map(|(_, k)| k).collect()
}
