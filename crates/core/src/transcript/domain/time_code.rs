use once_cell::sync::Lazy;
use regex::Regex;

static RE_TIME_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2}):(\d{2})[,.](\d{3})$").unwrap());

/// Separator between seconds and milliseconds in a rendered timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MillisSeparator {
    /// `HH:MM:SS,mmm` (SubRip)
    Comma,
    /// `HH:MM:SS.mmm` (WebVTT)
    Dot,
}

/// Parses `HH:MM:SS,mmm` or `HH:MM:SS.mmm` into seconds.
///
/// Returns `None` when the text is not a timestamp; callers skip the
/// enclosing block. Field magnitudes are not range-checked.
pub fn parse_time_code(text: &str) -> Option<f64> {
    let caps = RE_TIME_CODE.captures(text.trim())?;
    let field = |i: usize| caps[i].parse::<u32>().ok().map(f64::from);
    let hours = field(1)?;
    let minutes = field(2)?;
    let seconds = field(3)?;
    let millis = field(4)?;
    Some(hours * 3600.0 + minutes * 60.0 + seconds + millis / 1000.0)
}

/// Renders seconds as a subtitle timestamp, rounding to the nearest millisecond.
pub fn format_time_code(seconds: f64, separator: MillisSeparator) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    let sep = match separator {
        MillisSeparator::Comma => ',',
        MillisSeparator::Dot => '.',
    };
    format!("{hours:02}:{mins:02}:{secs:02}{sep}{ms:03}")
}
