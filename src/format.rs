use chrono::{DateTime, Utc};

/// Placeholder rendered when a duration is missing or unparseable.
pub const DURATION_UNAVAILABLE: &str = "N/A";

/// Parses a raw count field. The catalog API sends counts as decimal strings;
/// anything unparseable counts as zero rather than failing the item.
pub fn parse_raw_count(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

const SUFFIXES: [(f64, &str); 3] = [(1.0e9, "B"), (1.0e6, "M"), (1.0e3, "K")];

/// Renders a view/like count with magnitude suffixes: `999` → "999",
/// `1500` → "1.5K", `2_500_000` → "2.5M". At most one decimal place,
/// trailing `.0` trimmed.
pub fn format_count(raw: u64) -> String {
    match suffix_for(raw, 1) {
        Some((divisor, suffix)) => abbreviate(raw as f64 / divisor, suffix),
        None => raw.to_string(),
    }
}

/// Renders a subscriber count. Same thresholds as [`format_count`] but rounded
/// to a whole unit, matching the source's subscriber display convention.
pub fn format_subscriber_count(raw: u64) -> String {
    match suffix_for(raw, 0) {
        Some((divisor, suffix)) => format!("{}{}", (raw as f64 / divisor).round(), suffix),
        None => raw.to_string(),
    }
}

/// Picks the magnitude suffix for `raw` at the given decimal precision.
/// Rounding can carry the mantissa to 1000 (999_999_999 at one decimal is
/// "1000.0"); when that happens the next suffix up applies instead.
fn suffix_for(raw: u64, decimals: u32) -> Option<(f64, &'static str)> {
    let idx = SUFFIXES.iter().position(|(divisor, _)| raw as f64 >= *divisor)?;
    let (divisor, suffix) = SUFFIXES[idx];

    let scale = 10u32.pow(decimals) as f64;
    if idx > 0 && (raw as f64 / divisor * scale).round() >= 1000.0 * scale {
        return Some(SUFFIXES[idx - 1]);
    }
    Some((divisor, suffix))
}

fn abbreviate(value: f64, suffix: &str) -> String {
    let rendered = format!("{:.1}", value);
    let trimmed = rendered.strip_suffix(".0").unwrap_or(&rendered);
    format!("{}{}", trimmed, suffix)
}

/// Renders an ISO-8601 "PT#H#M#S" duration as "H:MM:SS" or "M:SS".
/// Empty or unparseable input renders [`DURATION_UNAVAILABLE`].
pub fn format_duration(iso8601: &str) -> String {
    let Some(total_seconds) = parse_iso8601_seconds(iso8601) else {
        return DURATION_UNAVAILABLE.to_string();
    };

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Parse the "PT#H#M#S" style to total seconds. Hours, minutes, and seconds
/// are each optional; any other designator fails the parse.
fn parse_iso8601_seconds(duration: &str) -> Option<u64> {
    let body = duration.strip_prefix("PT")?;
    if body.is_empty() {
        return None;
    }

    let mut seconds: u64 = 0;
    let mut current = String::new();
    for c in body.chars() {
        match c {
            '0'..='9' => current.push(c),
            'H' => seconds = add_component(seconds, &current, 3600)?,
            'M' => seconds = add_component(seconds, &current, 60)?,
            'S' => seconds = add_component(seconds, &current, 1)?,
            _ => return None,
        }
        if !c.is_ascii_digit() {
            current.clear();
        }
    }
    // Trailing digits without a designator (e.g. "PT90") are malformed.
    if !current.is_empty() {
        return None;
    }

    Some(seconds)
}

/// Adds one duration component, treating arithmetic overflow as a failed
/// parse rather than a panic.
fn add_component(total: u64, digits: &str, unit_seconds: u64) -> Option<u64> {
    digits
        .parse::<u64>()
        .ok()?
        .checked_mul(unit_seconds)?
        .checked_add(total)
}

/// Renders the relative age of a publish timestamp against wall-clock now,
/// using the largest applicable unit ("3 days ago", "2 years ago"). Evaluated
/// at call time; two calls at different moments may legitimately differ.
pub fn format_age(published_at: DateTime<Utc>) -> String {
    age_between(published_at, Utc::now())
}

fn age_between(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // Clamp so a slightly-future timestamp never renders as "in the future".
    let elapsed = (now - published_at).num_seconds().max(0) as u64;

    const UNITS: [(u64, &str); 5] = [
        (31_536_000, "year"),
        (2_592_000, "month"),
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
    ];

    for (unit_seconds, unit_name) in UNITS {
        if elapsed >= unit_seconds {
            let count = elapsed / unit_seconds;
            let plural = if count == 1 { "" } else { "s" };
            return format!("{} {}{} ago", count, unit_name, plural);
        }
    }

    "just now".to_string()
}
