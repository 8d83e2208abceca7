//! Option-string parsing shared by the engine and its hosts.
//!
//! Options arrive as a whitespace-separated list of `key=value` tokens, the
//! same shape as a boot command line. Unknown keys are skipped by the
//! callers; a malformed value leaves the default in place.

use core::time::Duration;

pub fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("on")
        || value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value.eq_ignore_ascii_case("enabled")
        || value == "1"
    {
        Some(true)
    } else if value.eq_ignore_ascii_case("off")
        || value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("no")
        || value.eq_ignore_ascii_case("disabled")
        || value == "0"
    {
        Some(false)
    } else {
        None
    }
}

/// `"4500"` or `"4500ms"` as milliseconds.
pub fn parse_duration_ms(value: &str) -> Option<Duration> {
    value
        .trim_end_matches("ms")
        .parse::<u64>()
        .ok()
        .map(Duration::from_millis)
}

/// `"640x480"` as `(640, 480)`. Zero dimensions are rejected.
pub fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.split_once(['x', 'X'])?;
    let w = w.parse::<u32>().ok()?;
    let h = h.parse::<u32>().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}

/// Split an option string into `(key, value)` pairs. Tokens without `=`
/// are reported with an empty value.
pub fn options(cmdline: &str) -> impl Iterator<Item = (&str, &str)> {
    cmdline
        .split_whitespace()
        .map(|token| token.split_once('=').unwrap_or((token, "")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_spellings() {
        for on in ["on", "TRUE", "yes", "Enabled", "1"] {
            assert_eq!(parse_bool(on), Some(true));
        }
        for off in ["off", "False", "NO", "disabled", "0"] {
            assert_eq!(parse_bool(off), Some(false));
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_parse_duration_and_size() {
        assert_eq!(parse_duration_ms("1500ms"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_duration_ms("20"), Some(Duration::from_millis(20)));
        assert_eq!(parse_duration_ms("fast"), None);
        assert_eq!(parse_size("800x600"), Some((800, 600)));
        assert_eq!(parse_size("0x600"), None);
        assert_eq!(parse_size("800"), None);
    }

    #[test]
    fn test_options_split() {
        let pairs: Vec<_> = options("speed=fast  confetti=off bare").collect();
        assert_eq!(pairs, vec![("speed", "fast"), ("confetti", "off"), ("bare", "")]);
    }
}
