//! UTC timestamp formatting for report headers and file names.

const SECS_PER_DAY: u64 = 86400;

/// Current time as seconds since the Unix epoch.
pub fn now_unix_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_utc(secs: u64) -> String {
    let (year, month, day, h, m, s) = split(secs);
    format!("{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC", year, month, day, h, m, s)
}

/// `YYYYMMDD_HHMMSS`, suitable for file names.
pub fn format_compact(secs: u64) -> String {
    let (year, month, day, h, m, s) = split(secs);
    format!("{:04}{:02}{:02}_{:02}{:02}{:02}", year, month, day, h, m, s)
}

fn split(secs: u64) -> (u64, u64, u64, u64, u64, u64) {
    let (year, month, day) = days_to_ymd(secs / SECS_PER_DAY);
    let time_of_day = secs % SECS_PER_DAY;
    (
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60,
    )
}

fn days_to_ymd(days: u64) -> (u64, u64, u64) {
    // Civil calendar conversion
    let z = days + 719468;
    let era = z / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
