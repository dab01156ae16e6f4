use crate::locale::Language;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

/// A seconds count split into clock components.
///
/// `hours` is `None` when the split was done without hour extraction, in
/// which case `minutes` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationComponents {
    pub hours: Option<u64>,
    pub minutes: u64,
    pub seconds: u64,
}

pub fn split_seconds(total: u64, hours_enabled: bool) -> DurationComponents {
    if !hours_enabled {
        return DurationComponents {
            hours: None,
            minutes: total / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        };
    }

    if total < SECS_PER_HOUR {
        DurationComponents {
            hours: Some(0),
            minutes: total / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    } else {
        let rest = total % SECS_PER_HOUR;
        DurationComponents {
            hours: Some(total / SECS_PER_HOUR),
            minutes: rest / SECS_PER_MINUTE,
            seconds: rest % SECS_PER_MINUTE,
        }
    }
}

/// `"<h> ч <m> мин"`; seconds are dropped and zero hours are still printed.
pub fn render_total(total: u64, lang: Language) -> String {
    let parts = split_seconds(total, true);
    format!(
        "{} {} {} {}",
        parts.hours.unwrap_or(0),
        lang.hours(),
        parts.minutes,
        lang.minutes()
    )
}

/// `"<m> мин <ss> сек"` with minutes carrying any whole hours.
pub fn render_average(total: u64, lang: Language) -> String {
    let parts = split_seconds(total, false);
    format!(
        "{} {} {:02} {}",
        parts.minutes,
        lang.minutes(),
        parts.seconds,
        lang.seconds()
    )
}

/// Spreadsheet duration value: a fraction of a 24h day.
pub fn fractional_day(total: u64) -> f64 {
    total as f64 / 86400.0
}
