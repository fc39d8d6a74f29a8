use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Number, Value};

use super::MISSING;

/// Формат отображения даты и времени, принятый в ru-RU.
const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Форматы дат без указания часового пояса. Такие даты считаются локальными.
const LOCAL_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Приводит дату неизвестного формата к строке для отображения.
///
/// Строка разбирается как дата, число считается unix timestamp в секундах.
/// Если значение разобрать не удалось, то возвращается оно само в виде строки.
/// Пустые значения превращаются в [`MISSING`].
pub fn format_date(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => MISSING.to_owned(),
        Some(Value::String(s)) if s.is_empty() => MISSING.to_owned(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => MISSING.to_owned(),
        Some(Value::String(s)) => parse_text(s).map(display).unwrap_or_else(|| s.clone()),
        Some(Value::Number(n)) => from_epoch(n).map(display).unwrap_or_else(|| n.to_string()),
        Some(other) => other.to_string(),
    }
}

fn display(date: DateTime<Local>) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

fn parse_text(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Local));
    }

    if let Ok(date) = DateTime::parse_from_rfc2822(s) {
        return Some(date.with_timezone(&Local));
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&naive).earliest();
        }
    }

    // Голая дата трактуется как полночь по UTC.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(&Local))
}

fn from_epoch(n: &Number) -> Option<DateTime<Local>> {
    let date = match n.as_i64() {
        Some(secs) => DateTime::from_timestamp(secs, 0)?,
        None => {
            let secs = n.as_f64()?;
            if !secs.is_finite() || secs.abs() >= i64::MAX as f64 {
                return None;
            }
            let whole = secs.floor();
            let nanos = ((secs - whole) * 1e9).round() as u32;
            DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))?
        }
    };

    Some(date.with_timezone(&Local))
}
