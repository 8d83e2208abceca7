//! Label text helpers.

/// Longest label the wheel draws, ellipsis included.
pub const LABEL_MAX_CHARS: usize = 15;

const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_chars` characters (not bytes), ending in
/// `...` when anything was cut. `max_chars` below the ellipsis width falls
/// back to a plain cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let ellipsis_len = ELLIPSIS.chars().count();
    if max_chars <= ellipsis_len {
        return text.chars().take(max_chars).collect();
    }
    let mut out: String = text.chars().take(max_chars - ellipsis_len).collect();
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push_str(ELLIPSIS);
    out
}

/// Wheel label: the ticket number, optionally followed by the buyer name,
/// capped at [`LABEL_MAX_CHARS`].
pub fn segment_label(number: u32, buyer: Option<&str>) -> String {
    match buyer {
        Some(name) => truncate_chars(&format!("{number} - {name}"), LABEL_MAX_CHARS),
        None => truncate_chars(&number.to_string(), LABEL_MAX_CHARS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_chars("42 - Ana", LABEL_MAX_CHARS), "42 - Ana");
    }

    #[test]
    fn test_long_text_is_cut_with_ellipsis() {
        let label = segment_label(7, Some("Maximiliano Fernandez"));
        assert_eq!(label.chars().count(), LABEL_MAX_CHARS);
        assert_eq!(label, "7 - Maximili...");
        assert!(label.ends_with("..."));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let label = truncate_chars("ñññññññññññññññññññ", 5);
        assert_eq!(label, "ññ...");
    }

    #[test]
    fn test_number_only_label() {
        assert_eq!(segment_label(123, None), "123");
    }
}
