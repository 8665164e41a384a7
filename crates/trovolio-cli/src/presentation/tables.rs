//! Table formatting utilities for CLI output.

use trovolio_core::{FallbackReason, LoadState};

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use trovolio_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}

/// Line shown above a list that is displaying sample content.
///
/// Errors and empty results read the same; the reason is only appended when
/// `detailed` is set.
pub fn load_notice<T>(state: &LoadState<T>, detailed: bool) -> Option<String> {
    let reason = state.fallback_reason()?;
    if !detailed {
        return Some(SAMPLE_NOTICE.to_string());
    }
    let detail = match reason {
        FallbackReason::Error { message } => message.as_str(),
        FallbackReason::Empty => "no rows returned",
    };
    Some(format!("{SAMPLE_NOTICE} ({detail})"))
}

const SAMPLE_NOTICE: &str = "Showing sample content.";

pub fn print_load_notice<T>(state: &LoadState<T>, detailed: bool) {
    if let Some(notice) = load_notice(state, detailed) {
        println!("{notice}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("Über lange Zeilen", 7), "Über...");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(&42), "--"), "42");
        assert_eq!(format_optional::<u32>(None, "--"), "--");
    }

    #[test]
    fn test_load_notice_is_neutral_by_default() {
        let ready: LoadState<u8> = LoadState::Ready(vec![1]);
        assert!(load_notice(&ready, true).is_none());

        let failed: LoadState<u8> = LoadState::Failed {
            reason: FallbackReason::Error {
                message: "timeout".to_string(),
            },
            fallback: vec![1],
        };
        let empty: LoadState<u8> = LoadState::Failed {
            reason: FallbackReason::Empty,
            fallback: vec![1],
        };

        let failed_notice = load_notice(&failed, false).unwrap();
        assert_eq!(failed_notice, "Showing sample content.");
        assert!(!failed_notice.contains("timeout"));
        assert_eq!(load_notice(&empty, false), Some(failed_notice));
    }

    #[test]
    fn test_load_notice_detailed_shows_reason() {
        let failed: LoadState<u8> = LoadState::Failed {
            reason: FallbackReason::Error {
                message: "timeout".to_string(),
            },
            fallback: vec![1],
        };
        assert_eq!(
            load_notice(&failed, true).as_deref(),
            Some("Showing sample content. (timeout)")
        );
    }
}
