// crates/clipdeck-ui/src/player_clock.rs
//
// Wall-clock playback model. The preview panel has no media decode path —
// the playhead advances with frame time, scaled by the playback rate, and
// clamps at the clip duration. Everything the rest of the app needs goes
// through the PlayerAdapter trait, so a decoding player can replace this
// without touching the router or the modules.

use crossbeam_channel::{bounded, Receiver, Sender};

use clipdeck_core::player::{clamp_seek, PlayerAdapter};

pub struct ClockPlayer {
    position: f64,
    /// None until a clip is loaded.
    duration: Option<f64>,
    playing:  bool,
    rate:     f64,
    /// Time-update stream; lossy on purpose (latest position wins next frame).
    time_tx:  Option<Sender<f64>>,
}

impl ClockPlayer {
    pub fn new() -> Self {
        Self { position: 0.0, duration: None, playing: false, rate: 1.0, time_tx: None }
    }

    /// Point the player at a clip of `duration` seconds, paused at 0.
    pub fn load(&mut self, duration: f64) {
        self.position = 0.0;
        self.duration = if duration > 0.0 { Some(duration) } else { None };
        self.playing = false;
    }

    pub fn unload(&mut self) {
        self.position = 0.0;
        self.duration = None;
        self.playing = false;
    }

    /// Subscribe to playhead updates. Capacity 32 is plenty — the app drains
    /// the channel every frame and tick() sends at most one value.
    pub fn time_updates(&mut self) -> Receiver<f64> {
        let (tx, rx) = bounded(32);
        self.time_tx = Some(tx);
        rx
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Advance the playhead by `dt` wall-clock seconds. Call once per frame.
    pub fn tick(&mut self, dt: f64) {
        if self.playing {
            self.position += dt * self.rate;
            if let Some(d) = self.duration {
                if self.position >= d {
                    self.position = d;
                    self.playing = false;
                }
            }
        }
        if let Some(tx) = &self.time_tx {
            // try_send: a full channel means the app already has fresher
            // values queued than the consumer needs.
            let _ = tx.try_send(self.position);
        }
    }
}

impl PlayerAdapter for ClockPlayer {
    fn seek(&mut self, t: f64) {
        self.position = clamp_seek(t, self.duration);
    }

    fn play(&mut self) {
        // Play at the end restarts from the top, like a video element that
        // has fired `ended`.
        if let Some(d) = self.duration {
            if self.position >= d - 0.1 {
                self.position = 0.0;
            }
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if rate.is_finite() && rate > 0.0 {
            self.rate = rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_scaled_by_rate() {
        let mut p = ClockPlayer::new();
        p.load(60.0);
        p.play();
        p.set_playback_rate(2.0);
        p.tick(0.5);
        assert!((p.current_time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tick_pauses_at_clip_end() {
        let mut p = ClockPlayer::new();
        p.load(1.0);
        p.play();
        p.tick(5.0);
        assert_eq!(p.current_time(), 1.0);
        assert!(!p.is_playing());
    }

    #[test]
    fn seek_clamps_into_clip_bounds() {
        let mut p = ClockPlayer::new();
        p.load(30.0);
        p.seek(100.0);
        assert_eq!(p.current_time(), 30.0);
        p.seek(-2.0);
        assert_eq!(p.current_time(), 0.0);
    }

    #[test]
    fn play_at_end_restarts() {
        let mut p = ClockPlayer::new();
        p.load(10.0);
        p.seek(10.0);
        p.play();
        assert_eq!(p.current_time(), 0.0);
        assert!(p.is_playing());
    }

    #[test]
    fn paused_tick_still_reports_position() {
        let mut p = ClockPlayer::new();
        p.load(30.0);
        let rx = p.time_updates();
        p.seek(4.0);
        p.tick(0.016);
        assert_eq!(rx.try_recv().ok(), Some(4.0));
    }

    #[test]
    fn invalid_rates_are_ignored() {
        let mut p = ClockPlayer::new();
        p.set_playback_rate(0.0);
        assert_eq!(p.rate(), 1.0);
        p.set_playback_rate(f64::NAN);
        assert_eq!(p.rate(), 1.0);
        p.set_playback_rate(1.5);
        assert_eq!(p.rate(), 1.5);
    }
}
