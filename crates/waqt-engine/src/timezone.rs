//! Local UTC-offset resolution, the single platform primitive the engine
//! depends on.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};

/// Signed UTC offset in hours such that `local = UTC + offset`, with
/// daylight saving as observed at that local instant.
///
/// During a DST transition the instant can be ambiguous (clocks rolled back)
/// or skipped (clocks jumped forward); the earliest mapping wins in the
/// former case, and the offset in force around the gap in the latter.
pub fn timezone_offset(local: NaiveDateTime) -> f64 {
    match Local.from_local_datetime(&local) {
        LocalResult::Single(dt) => offset_hours(&dt),
        LocalResult::Ambiguous(earliest, _) => offset_hours(&earliest),
        LocalResult::None => offset_hours(&Local.from_utc_datetime(&local)),
    }
}

/// UTC offset in hours for a civil date, sampled at local noon.
///
/// Noon is safely away from the small-hours window where DST transitions
/// happen.
pub fn timezone_offset_for_date(date: NaiveDate) -> f64 {
    let noon = date.and_hms_opt(12, 0, 0).expect("noon is a valid wall-clock time");
    timezone_offset(noon)
}

fn offset_hours(dt: &DateTime<Local>) -> f64 {
    f64::from(dt.offset().fix().local_minus_utc()) / 3600.0
}
