//! Small shared helpers.

/// True for Gregorian leap years.
fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Format a non-negative unix timestamp as `"YYYY-MM-DD HH:MM:SS"` (UTC).
/// Negative inputs are rendered as the raw number.
pub fn format_utc(ts: i64) -> String {
    if ts < 0 {
        return ts.to_string();
    }
    let mut days = ts / 86_400;
    let sod = ts % 86_400;
    let hour = sod / 3600;
    let minute = (sod % 3600) / 60;
    let second = sod % 60;

    let mut year: i32 = 1970;
    loop {
        let diy = i64::from(if is_leap(year) { 366 } else { 365 });
        if days >= diy {
            days -= diy;
            year += 1;
        } else {
            break;
        }
    }
    let mdays = [
        31,
        if is_leap(year) { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 1usize;
    for len in mdays {
        if days >= len {
            days -= len;
            month += 1;
        } else {
            break;
        }
    }
    let day = days + 1;
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}
