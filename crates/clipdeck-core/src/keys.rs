// crates/clipdeck-core/src/keys.rs
//
// Keyboard command router: one pure function from a key event to an
// EditorCommand. Mirrors NLE conventions — coarse/fine scrubbing on the
// arrows, J/L shuttle, I/O mark-in/out. The UI layer attaches this only
// while the editor view is active and no text field has focus; the
// mark-in/out ordering guards live in TrimStore, not here.

use crate::commands::EditorCommand;

/// Seek step with no modifiers held.
pub const STEP_DEFAULT: f64 = 0.2;
/// Seek step with Shift held (coarse).
pub const STEP_COARSE: f64 = 1.0;
/// Seek step with Alt held (fine).
pub const STEP_FINE: f64 = 0.05;
/// Fixed J/L shuttle distance — ignores step modifiers.
pub const SHUTTLE_SECS: f64 = 5.0;

/// Keys the router cares about. Letters are matched case-insensitively by
/// the caller mapping raw input into this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterKey {
    ArrowLeft,
    ArrowRight,
    J,
    K,
    L,
    I,
    O,
    Z,
    Y,
    Space,
}

#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    pub key:     RouterKey,
    pub shift:   bool,
    pub alt:     bool,
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub command: bool,
}

impl KeyEvent {
    pub fn plain(key: RouterKey) -> Self {
        Self { key, shift: false, alt: false, command: false }
    }
}

/// Shift wins over Alt when both are held — evaluated first on purpose.
pub fn seek_step(shift: bool, alt: bool) -> f64 {
    if shift {
        STEP_COARSE
    } else if alt {
        STEP_FINE
    } else {
        STEP_DEFAULT
    }
}

/// Translate one key event into a command, given the current playhead.
/// Returns None for chords the router does not own.
pub fn route(ev: KeyEvent, current_time: f64) -> Option<EditorCommand> {
    let step = seek_step(ev.shift, ev.alt);
    match ev.key {
        RouterKey::ArrowLeft  => Some(EditorCommand::Seek((current_time - step).max(0.0))),
        RouterKey::ArrowRight => Some(EditorCommand::Seek(current_time + step)),

        RouterKey::J if !ev.command => {
            Some(EditorCommand::Seek((current_time - SHUTTLE_SECS).max(0.0)))
        }
        RouterKey::L if !ev.command => Some(EditorCommand::Seek(current_time + SHUTTLE_SECS)),
        RouterKey::K | RouterKey::Space => Some(EditorCommand::TogglePlay),

        RouterKey::I => Some(EditorCommand::MarkIn),
        RouterKey::O => Some(EditorCommand::MarkOut),

        RouterKey::Z if ev.command => {
            Some(if ev.shift { EditorCommand::Redo } else { EditorCommand::Undo })
        }
        RouterKey::Y if ev.command => Some(EditorCommand::Redo),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_mods(key: RouterKey, shift: bool, alt: bool, command: bool) -> KeyEvent {
        KeyEvent { key, shift, alt, command }
    }

    fn seek_target(cmd: Option<EditorCommand>) -> f64 {
        match cmd {
            Some(EditorCommand::Seek(t)) => t,
            other => panic!("expected Seek, got {other:?}"),
        }
    }

    #[test]
    fn default_step_is_fifth_of_a_second() {
        let t = seek_target(route(KeyEvent::plain(RouterKey::ArrowRight), 10.0));
        assert!((t - 10.2).abs() < 1e-9);
    }

    #[test]
    fn shift_step_is_coarse_and_beats_alt() {
        assert_eq!(seek_step(true, false), STEP_COARSE);
        assert_eq!(seek_step(false, true), STEP_FINE);
        // Both held: Shift is evaluated first.
        assert_eq!(seek_step(true, true), STEP_COARSE);
    }

    #[test]
    fn arrow_left_clamps_at_zero() {
        let t = seek_target(route(with_mods(RouterKey::ArrowLeft, true, false, false), 0.4));
        assert_eq!(t, 0.0);
    }

    #[test]
    fn shuttle_is_five_seconds_regardless_of_modifiers() {
        let t = seek_target(route(with_mods(RouterKey::L, true, true, false), 10.0));
        assert_eq!(t, 15.0);
        let t = seek_target(route(with_mods(RouterKey::J, false, true, false), 3.0));
        assert_eq!(t, 0.0);
    }

    #[test]
    fn marks_map_to_guarded_commands() {
        assert_eq!(route(KeyEvent::plain(RouterKey::I), 7.0), Some(EditorCommand::MarkIn));
        assert_eq!(route(KeyEvent::plain(RouterKey::O), 7.0), Some(EditorCommand::MarkOut));
    }

    #[test]
    fn undo_redo_chords() {
        assert_eq!(
            route(with_mods(RouterKey::Z, false, false, true), 0.0),
            Some(EditorCommand::Undo)
        );
        assert_eq!(
            route(with_mods(RouterKey::Z, true, false, true), 0.0),
            Some(EditorCommand::Redo)
        );
        assert_eq!(
            route(with_mods(RouterKey::Y, false, false, true), 0.0),
            Some(EditorCommand::Redo)
        );
        // Bare Z/Y belong to no one.
        assert_eq!(route(KeyEvent::plain(RouterKey::Z), 0.0), None);
        assert_eq!(route(KeyEvent::plain(RouterKey::Y), 0.0), None);
    }

    #[test]
    fn k_and_space_toggle_playback() {
        assert_eq!(route(KeyEvent::plain(RouterKey::K), 0.0), Some(EditorCommand::TogglePlay));
        assert_eq!(
            route(KeyEvent::plain(RouterKey::Space), 0.0),
            Some(EditorCommand::TogglePlay)
        );
    }
}
