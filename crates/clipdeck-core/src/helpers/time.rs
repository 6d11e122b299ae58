// crates/clipdeck-core/src/helpers/time.rs
//
// Shared time-formatting utilities used by clipdeck-ui. Kept here so any
// future crate that needs human-readable timestamps has one source.

/// Format a playhead position as `MM:SS` — the label style used on the trim
/// rail's needle and the In/Out read-outs.
///
/// ```
/// use clipdeck_core::helpers::time::format_clock;
/// assert_eq!(format_clock(0.0),   "00:00");
/// assert_eq!(format_clock(75.4),  "01:15");
/// assert_eq!(format_clock(599.9), "09:59");
/// ```
pub fn format_clock(s: f64) -> String {
    let m  = (s / 60.0) as u32;
    let sc = (s % 60.0) as u32;
    format!("{m:02}:{sc:02}")
}

/// Format a duration as a compact human-readable string for clip cards.
///
/// | Range    | Format    | Example   |
/// |----------|-----------|-----------|
/// | ≥ 3600 s | `H:MM:SS` | `1:04:35` |
/// | ≥ 60 s   | `M:SS`    | `3:07`    |
/// | < 60 s   | `S.Xs`    | `4.2s`    |
///
/// ```
/// use clipdeck_core::helpers::time::format_duration;
/// assert_eq!(format_duration(4.2),    "4.2s");
/// assert_eq!(format_duration(187.0),  "3:07");
/// assert_eq!(format_duration(3875.0), "1:04:35");
/// ```
pub fn format_duration(secs: f64) -> String {
    if secs >= 3600.0 {
        format!(
            "{}:{:02}:{:02}",
            secs as u64 / 3600,
            (secs as u64 % 3600) / 60,
            secs as u64 % 60,
        )
    } else if secs >= 60.0 {
        format!("{}:{:02}", secs as u64 / 60, secs as u64 % 60)
    } else {
        format!("{secs:.1}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_rolls_minutes() {
        assert_eq!(format_clock(59.99), "00:59");
        assert_eq!(format_clock(60.0),  "01:00");
    }

    #[test]
    fn duration_picks_the_right_shape() {
        assert_eq!(format_duration(0.0),    "0.0s");
        assert_eq!(format_duration(59.9),   "59.9s");
        assert_eq!(format_duration(60.0),   "1:00");
        assert_eq!(format_duration(3600.0), "1:00:00");
    }
}
