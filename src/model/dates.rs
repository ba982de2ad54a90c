// File: ./src/model/dates.rs
//
// Date/time resolution for Spanish temporal expressions, relative to an
// injected "now" in a single fixed timezone. Ordered custom handlers run
// first (day-after-tomorrow, named weekday, relative duration); a general
// future-preferring fallback covers the rest; an independent time-of-day
// override scanned from the title always wins last.
//
// Unresolvable expressions are not errors: the task moment simply stays
// absent.
use crate::model::record::ReminderLead;
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};
use chrono_tz::Tz;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("temporal pattern must compile")
}

static DAY_AFTER_TOMORROW_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)pasado\s+mañana"));

static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)(?:el\s+)?(lunes|martes|mi[eé]rcoles|jueves|viernes|s[aá]bado|domingo)")
});

/// Trailing hour inside a day-level clause ("el viernes a las 3pm"). The
/// period marker is optional; a bare digit is read as a 24-hour value.
static HOUR_TAIL_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(\d{1,2})\s*(am|pm|de\s+la\s+(?:mañana|tarde|noche))?"));

static RELATIVE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)en\s+(.+?)\s+(horas?|hr?s?|minutos?|mins?|segundos?|segs?)"));

/// "a la(s) H[:MM]" with an optional am/pm or day-period marker, as written
/// in the task title.
static TIME_OVERRIDE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)a\s+las?\s+(\d{1,2}(?::\d{2})?)\s*(am|pm|p\.?m\.?|a\.?m\.?|de\s+la\s+(?:mañana|tarde|noche))?",
    )
});

// --- Fallback parser pieces ---

static NUMBER_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(un|una|dos|tres|cuatro|cinco|seis|siete|ocho|nueve|diez|media)\b")
});

static HALF_HOUR_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)media\s+hora"));

static BARE_AMPM_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm|a\.m\.|p\.m\.)\b"));

static TOMORROW_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bmañana\b"));
static TODAY_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bhoy\b"));

static EXPLICIT_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(\d{1,2})\s+de\s+(enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|octubre|noviembre|diciembre)(?:\s+(?:de\s+)?(\d{4}))?",
    )
});

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b(\d{4})-(\d{2})-(\d{2})\b"));

/// Relative duration leftovers reaching the fallback, where number words
/// were already normalized to digits ("media hora" becomes "30 minutos"
/// with no "en" in front).
static FALLBACK_RELATIVE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(?:en\s+)?(\d+(?:\.\d+)?)\s+(horas?|hr?s?|minutos?|mins?|segundos?|segs?)\b")
});

/// Spanish quantity words one through ten plus "media" (half). Digits pass
/// through. Anything else resolves to nothing and the caller falls through.
pub fn parse_spanish_number(s: &str) -> Option<f64> {
    match s.to_lowercase().as_str() {
        "un" | "una" | "1" => Some(1.0),
        "dos" | "2" => Some(2.0),
        "tres" | "3" => Some(3.0),
        "cuatro" | "4" => Some(4.0),
        "cinco" | "5" => Some(5.0),
        "seis" | "6" => Some(6.0),
        "siete" | "7" => Some(7.0),
        "ocho" | "8" => Some(8.0),
        "nueve" | "9" => Some(9.0),
        "diez" | "10" => Some(10.0),
        "media" => Some(0.5),
        _ => s.parse::<f64>().ok(),
    }
}

/// Weekday name to index, Monday = 0, diacritics optional.
pub fn weekday_index(s: &str) -> Option<u32> {
    match s.to_lowercase().as_str() {
        "lunes" => Some(0),
        "martes" => Some(1),
        "miércoles" | "miercoles" => Some(2),
        "jueves" => Some(3),
        "viernes" => Some(4),
        "sábado" | "sabado" => Some(5),
        "domingo" => Some(6),
        _ => None,
    }
}

pub fn month_number(s: &str) -> Option<u32> {
    match s.to_lowercase().as_str() {
        "enero" => Some(1),
        "febrero" => Some(2),
        "marzo" => Some(3),
        "abril" => Some(4),
        "mayo" => Some(5),
        "junio" => Some(6),
        "julio" => Some(7),
        "agosto" => Some(8),
        "septiembre" => Some(9),
        "octubre" => Some(10),
        "noviembre" => Some(11),
        "diciembre" => Some(12),
        _ => None,
    }
}

fn is_pm_marker(period: &str) -> bool {
    period.contains("pm") || period.contains("tarde") || period.contains("noche")
}

fn is_am_marker(period: &str) -> bool {
    period.contains("am") || period.contains("mañana")
}

fn at_hour_minute(base: DateTime<Tz>, hour: u32, minute: u32) -> Option<DateTime<Tz>> {
    base.with_hour(hour)?
        .with_minute(minute)?
        .with_second(0)?
        .with_nanosecond(0)
}

/// Resolves the task moment from the rule clause, then applies the
/// independent time-of-day override found in the normalized title (the
/// override always wins last). Returns None when nothing resolves.
pub fn resolve_task_moment(
    rule_clause: &str,
    normalized_title: &str,
    now: DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    let mut moment = resolve_rule_clause(rule_clause, now);

    if let Some((hour, minute)) = find_time_override(normalized_title) {
        let base = moment.unwrap_or(now);
        if let Some(adjusted) = at_hour_minute(base, hour, minute) {
            debug!("title time override applied: {:02}:{:02}", hour, minute);
            moment = Some(adjusted);
        }
    }
    moment
}

fn resolve_rule_clause(clause: &str, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
    if clause.trim().is_empty() {
        return None;
    }

    if DAY_AFTER_TOMORROW_RE.is_match(clause) {
        debug!("date handler: day-after-tomorrow");
        return Some(apply_hour_tail(now + Duration::days(2), clause));
    }

    if let Some(caps) = WEEKDAY_RE.captures(clause)
        && let Some(target) = weekday_index(&caps[1])
    {
        let today = now.weekday().num_days_from_monday();
        let mut ahead = (target + 7 - today) % 7;
        if ahead == 0 {
            ahead = 7; // never today, always the next occurrence
        }
        debug!("date handler: weekday '{}' in {} day(s)", &caps[1], ahead);
        return Some(apply_hour_tail(now + Duration::days(i64::from(ahead)), clause));
    }

    if let Some(caps) = RELATIVE_RE.captures(clause)
        && let Some(qty) = parse_spanish_number(caps[1].trim())
        && qty > 0.0
    {
        let unit = caps[2].to_lowercase();
        debug!("date handler: relative '{} {}'", qty, unit);
        return add_relative(now, qty, &unit);
    }

    parse_general(clause, now)
}

/// None when the quantity does not fit in a chrono duration; the moment
/// then simply stays absent.
fn duration_for_unit(qty: f64, unit: &str) -> Option<Duration> {
    let seconds = if unit.contains("hora") || unit.contains("hr") {
        qty * 3600.0
    } else if unit.contains("min") {
        qty * 60.0
    } else {
        qty // seconds
    };
    if !seconds.is_finite() {
        return None;
    }
    Duration::try_seconds(seconds as i64)
}

fn add_relative(now: DateTime<Tz>, qty: f64, unit: &str) -> Option<DateTime<Tz>> {
    now.checked_add_signed(duration_for_unit(qty, unit)?)
}

/// Overwrites the hour when the clause carries a trailing hour expression.
/// pm/tarde/noche add 12 unless the hour is already in 24-hour range.
fn apply_hour_tail(base: DateTime<Tz>, clause: &str) -> DateTime<Tz> {
    if let Some(caps) = HOUR_TAIL_RE.captures(clause)
        && let Ok(mut hour) = caps[1].parse::<u32>()
    {
        let period = caps
            .get(2)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        if is_pm_marker(&period) && hour < 12 {
            hour += 12;
        }
        if let Some(adjusted) = at_hour_minute(base, hour, 0) {
            return adjusted;
        }
    }
    base
}

/// Scans text for an explicit "a la(s) H[:MM] [marker]" expression and
/// returns the 24-hour (hour, minute) it denotes.
fn find_time_override(text: &str) -> Option<(u32, u32)> {
    let caps = TIME_OVERRIDE_RE.captures(text)?;
    let raw = &caps[1];
    let (hour, minute) = split_hour_minute(raw)?;
    let period = caps
        .get(2)
        .map(|m| m.as_str().to_lowercase().replace('.', ""))
        .unwrap_or_default();
    Some((twelve_hour_adjust(hour, &period), minute))
}

fn split_hour_minute(raw: &str) -> Option<(u32, u32)> {
    if let Some((h, m)) = raw.split_once(':') {
        Some((h.parse().ok()?, m.parse().ok()?))
    } else {
        Some((raw.parse().ok()?, 0))
    }
}

fn twelve_hour_adjust(mut hour: u32, period: &str) -> u32 {
    if is_pm_marker(period) {
        if hour < 12 {
            hour += 12;
        }
    } else if is_am_marker(period) && hour == 12 {
        hour = 0;
    }
    hour
}

// --- General fallback ---

/// Replaces Spanish number words with digits so the relative-duration
/// leftovers become machine readable. "media hora" turns into "30 minutos"
/// before the word table runs, otherwise "media" would already be "0.5".
fn normalize_number_words(text: &str) -> String {
    let halved = HALF_HOUR_RE.replace_all(text, "30 minutos");
    NUMBER_WORD_RE
        .replace_all(&halved, |caps: &Captures| {
            match parse_spanish_number(&caps[1]) {
                Some(q) if q == 0.5 => "0.5".to_string(),
                Some(q) => format!("{}", q as i64),
                None => caps[1].to_string(),
            }
        })
        .into_owned()
}

/// Future-preferring parser for whatever the custom handlers did not claim:
/// "mañana"/"hoy" (keeping now's time of day), explicit "D de MONTH
/// [de YEAR]" dates, ISO dates, relative-duration leftovers, and explicit
/// times (a bare time means today at that time).
fn parse_general(clause: &str, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
    let normalized = normalize_number_words(clause);

    if let Some(caps) = FALLBACK_RELATIVE_RE.captures(&normalized)
        && let Some(qty) = parse_spanish_number(&caps[1])
        && qty > 0.0
    {
        let unit = caps[2].to_lowercase();
        debug!("fallback: relative '{} {}'", qty, unit);
        return add_relative(now, qty, &unit);
    }

    let (time, remainder) = extract_explicit_time(&normalized);
    let base = find_base_date(&remainder, now);

    match (base, time) {
        (Some(base), Some((h, m))) => at_hour_minute(base, h, m),
        (Some(base), None) => Some(base),
        (None, Some((h, m))) => at_hour_minute(now, h, m),
        (None, None) => None,
    }
}

/// Finds an explicit time expression and removes its span, so "de la
/// mañana" in a period marker can never be mistaken for "tomorrow" by the
/// base-date scan.
fn extract_explicit_time(text: &str) -> (Option<(u32, u32)>, String) {
    if let Some(caps) = TIME_OVERRIDE_RE.captures(text)
        && let Some((hour, minute)) = split_hour_minute(&caps[1])
    {
        let period = caps
            .get(2)
            .map(|m| m.as_str().to_lowercase().replace('.', ""))
            .unwrap_or_default();
        let remainder = erase_span(text, &caps);
        return (Some((twelve_hour_adjust(hour, &period), minute)), remainder);
    }
    if let Some(caps) = BARE_AMPM_RE.captures(text)
        && let Ok(hour) = caps[1].parse::<u32>()
    {
        let minute = caps
            .get(2)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        let period = caps[3].to_lowercase().replace('.', "");
        let remainder = erase_span(text, &caps);
        return (Some((twelve_hour_adjust(hour, &period), minute)), remainder);
    }
    (None, text.to_string())
}

fn erase_span(text: &str, caps: &Captures) -> String {
    let full = caps.get(0).expect("capture 0 always present");
    let mut remainder = String::with_capacity(text.len());
    remainder.push_str(&text[..full.start()]);
    remainder.push(' ');
    remainder.push_str(&text[full.end()..]);
    remainder
}

fn find_base_date(text: &str, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
    if TOMORROW_RE.is_match(text) {
        debug!("fallback: tomorrow");
        return Some(now + Duration::days(1));
    }
    if TODAY_RE.is_match(text) {
        debug!("fallback: today");
        return Some(now);
    }
    if let Some(caps) = EXPLICIT_DATE_RE.captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let explicit_year = caps.get(3).and_then(|m| m.as_str().parse::<i32>().ok());
        let year = explicit_year.unwrap_or_else(|| now.year());
        let mut date = now.timezone().with_ymd_and_hms(year, month, day, 0, 0, 0).single()?;
        // No year given and the date already went by: next occurrence.
        if explicit_year.is_none() && date.date_naive() < now.date_naive() {
            date = now
                .timezone()
                .with_ymd_and_hms(year + 1, month, day, 0, 0, 0)
                .single()?;
        }
        debug!("fallback: explicit date {}", date.date_naive());
        return Some(date);
    }
    if let Some(caps) = ISO_DATE_RE.captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return now.timezone().with_ymd_and_hms(year, month, day, 0, 0, 0).single();
    }
    None
}

/// reminder = task − lead when the lead implies a duration, task itself for
/// the manual case, absent when no task moment resolved.
pub fn compute_reminder_moment(
    task_moment: Option<DateTime<Tz>>,
    lead: ReminderLead,
) -> Option<DateTime<Tz>> {
    let task = task_moment?;
    Some(match lead.lead_duration() {
        Some(duration) => task - duration,
        None => task,
    })
}
