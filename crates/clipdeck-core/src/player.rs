// crates/clipdeck-core/src/player.rs
//
// The imperative playback contract consumed by the keyboard router and the
// preview panel. The underlying playback primitive is an implementation
// detail behind this trait (clipdeck-ui ships a wall-clock model).

/// Imperative control surface over a playing clip.
pub trait PlayerAdapter {
    /// Move the playhead. Implementations clamp into `[0, duration]` via
    /// clamp_seek when the duration is known.
    fn seek(&mut self, t: f64);
    fn play(&mut self);
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);
}

/// Clamp a seek target into `[0, duration]`. When the duration is not yet
/// known (media metadata not loaded) the target passes through unclamped —
/// callers supply non-negative values upstream.
pub fn clamp_seek(t: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(d) if d.is_finite() => t.clamp(0.0, d),
        _ => t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_duration_clamps_both_ends() {
        assert_eq!(clamp_seek(-1.0, Some(60.0)), 0.0);
        assert_eq!(clamp_seek(30.0, Some(60.0)), 30.0);
        assert_eq!(clamp_seek(90.0, Some(60.0)), 60.0);
    }

    #[test]
    fn unknown_duration_passes_through() {
        assert_eq!(clamp_seek(1234.5, None), 1234.5);
    }

    #[test]
    fn non_finite_duration_passes_through() {
        assert_eq!(clamp_seek(90.0, Some(f64::INFINITY)), 90.0);
        assert_eq!(clamp_seek(90.0, Some(f64::NAN)), 90.0);
    }
}
