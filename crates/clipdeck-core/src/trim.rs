// crates/clipdeck-core/src/trim.rs
//
// TrimRange + TrimStore: the in/out selection for one clip and its linear
// edit history. The store is the only mutator of the range — every change
// goes through push() so undo/redo stays consistent, and every change is
// persisted synchronously so a restart resumes the last edit.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::store::KvStore;

/// Default out-point for a clip with no persisted trim.
pub const DEFAULT_TRIM_OUT: f64 = 30.0;

/// Minimum in→out gap enforced when marking an out-point.
pub const MIN_TRIM_GAP: f64 = 0.05;

/// Selected sub-interval of a source clip, in seconds.
/// Invariant: `0 <= in < out <= clip duration`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrimRange {
    #[serde(rename = "in")]
    pub in_s: f64,
    #[serde(rename = "out")]
    pub out_s: f64,
}

impl TrimRange {
    /// Range used when nothing is persisted for a clip: 0–30 s, clamped to
    /// the clip duration when it is known.
    pub fn default_for(duration: f64) -> Self {
        let out = if duration > 0.0 {
            DEFAULT_TRIM_OUT.min(duration)
        } else {
            DEFAULT_TRIM_OUT
        };
        Self { in_s: 0.0, out_s: out.max(MIN_TRIM_GAP) }
    }

    pub fn duration(&self) -> f64 {
        self.out_s - self.in_s
    }

    /// `(startMs, endMs)` for the backend PATCH body.
    pub fn to_millis(&self) -> (i64, i64) {
        ((self.in_s * 1000.0).round() as i64, (self.out_s * 1000.0).round() as i64)
    }
}

fn trim_key(clip_id: &str) -> String {
    format!("clip.{clip_id}.trim")
}

/// Current trim plus linear undo/redo stacks for one clip.
///
/// Undo pops the newest undo entry into current and moves the old current
/// to the *front* of redo; redo is the mirror. A fresh push invalidates the
/// whole redo stack (standard linear-history semantics).
pub struct TrimStore {
    clip_id: String,
    current: TrimRange,
    undo:    Vec<TrimRange>,
    redo:    VecDeque<TrimRange>,
}

impl TrimStore {
    /// Read the persisted trim for `clip_id`, or the default range when the
    /// entry is missing or malformed. Invalid JSON is treated as absent.
    pub fn load(store: &dyn KvStore, clip_id: &str, duration: f64) -> Self {
        let current = store
            .get(&trim_key(clip_id))
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(|| TrimRange::default_for(duration));
        Self {
            clip_id: clip_id.to_owned(),
            current,
            undo: Vec::new(),
            redo: VecDeque::new(),
        }
    }

    pub fn current(&self) -> TrimRange {
        self.current
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Make `next` the current range. Callers are expected to pass sane
    /// values; the guarded transitions are mark_in/mark_out.
    pub fn push(&mut self, store: &dyn KvStore, next: TrimRange) {
        self.undo.push(self.current);
        self.redo.clear();
        self.current = next;
        self.persist(store);
    }

    /// Set the in-point to `t` (floored at 0). Refused when `t` would not
    /// stay strictly below the current out-point — the invariant is kept by
    /// dropping invalid transitions, not by clamping them.
    pub fn mark_in(&mut self, store: &dyn KvStore, t: f64) -> bool {
        if t >= self.current.out_s {
            return false;
        }
        let next = TrimRange { in_s: t.max(0.0), out_s: self.current.out_s };
        self.push(store, next);
        true
    }

    /// Set the out-point to `t`, floored at `in + MIN_TRIM_GAP`. Refused
    /// when `t` is not strictly past the current in-point.
    pub fn mark_out(&mut self, store: &dyn KvStore, t: f64) -> bool {
        if t <= self.current.in_s {
            return false;
        }
        let next = TrimRange {
            in_s:  self.current.in_s,
            out_s: t.max(self.current.in_s + MIN_TRIM_GAP),
        };
        self.push(store, next);
        true
    }

    pub fn undo(&mut self, store: &dyn KvStore) {
        if let Some(prev) = self.undo.pop() {
            self.redo.push_front(self.current);
            self.current = prev;
            self.persist(store);
        }
    }

    pub fn redo(&mut self, store: &dyn KvStore) {
        if let Some(next) = self.redo.pop_front() {
            self.undo.push(self.current);
            self.current = next;
            self.persist(store);
        }
    }

    fn persist(&self, store: &dyn KvStore) {
        if let Ok(raw) = serde_json::to_string(&self.current) {
            store.set(&trim_key(&self.clip_id), &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    fn range(in_s: f64, out_s: f64) -> TrimRange {
        TrimRange { in_s, out_s }
    }

    #[test]
    fn missing_entry_yields_default_range() {
        let store = MemStore::new();
        let ts = TrimStore::load(&store, "abc", 180.0);
        assert_eq!(ts.current(), range(0.0, 30.0));
    }

    #[test]
    fn default_out_clamps_to_short_clips() {
        let store = MemStore::new();
        let ts = TrimStore::load(&store, "abc", 12.5);
        assert_eq!(ts.current(), range(0.0, 12.5));
    }

    #[test]
    fn malformed_json_is_treated_as_absent() {
        let store = MemStore::new();
        store.set("clip.abc.trim", "{not json");
        let ts = TrimStore::load(&store, "abc", 180.0);
        assert_eq!(ts.current(), range(0.0, 30.0));
    }

    #[test]
    fn push_persists_and_reload_round_trips() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        ts.push(&store, range(5.0, 40.0));

        let reloaded = TrimStore::load(&store, "abc", 180.0);
        assert_eq!(reloaded.current(), range(5.0, 40.0));

        // A different clip id is unaffected by abc's write.
        let other = TrimStore::load(&store, "xyz", 180.0);
        assert_eq!(other.current(), range(0.0, 30.0));
    }

    #[test]
    fn mark_in_at_out_point_is_refused() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        assert!(!ts.mark_in(&store, 30.0));
        assert_eq!(ts.current(), range(0.0, 30.0));
        assert_eq!(ts.undo_len(), 0);
    }

    #[test]
    fn mark_out_at_in_point_is_refused() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        ts.push(&store, range(10.0, 30.0));
        assert!(!ts.mark_out(&store, 10.0));
        assert_eq!(ts.current(), range(10.0, 30.0));
    }

    #[test]
    fn mark_out_enforces_minimum_gap() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        ts.push(&store, range(10.0, 30.0));
        // Past in, but closer than the floor: out lands at in + MIN_TRIM_GAP.
        assert!(ts.mark_out(&store, 10.01));
        assert_eq!(ts.current(), range(10.0, 10.0 + MIN_TRIM_GAP));
    }

    #[test]
    fn mark_in_floors_negative_times_at_zero() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        assert!(ts.mark_in(&store, -2.0));
        assert_eq!(ts.current().in_s, 0.0);
    }

    #[test]
    fn n_undos_restore_initial_and_n_redos_restore_final() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        let initial = ts.current();

        let pushes = [range(1.0, 30.0), range(1.0, 25.0), range(2.0, 25.0)];
        for p in pushes {
            ts.push(&store, p);
        }

        for _ in 0..pushes.len() {
            ts.undo(&store);
        }
        assert_eq!(ts.current(), initial);
        assert_eq!(ts.undo_len(), 0);

        for _ in 0..pushes.len() {
            ts.redo(&store);
        }
        assert_eq!(ts.current(), *pushes.last().unwrap());
        assert_eq!(ts.redo_len(), 0);
    }

    #[test]
    fn push_after_undo_invalidates_redo() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        ts.push(&store, range(1.0, 30.0));
        ts.push(&store, range(2.0, 30.0));
        ts.undo(&store);
        ts.push(&store, range(3.0, 30.0));

        assert_eq!(ts.redo_len(), 0);
        let before = ts.current();
        ts.redo(&store); // no-op
        assert_eq!(ts.current(), before);
    }

    #[test]
    fn undo_and_redo_persist_each_step() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        ts.push(&store, range(5.0, 40.0));
        ts.undo(&store);

        let reloaded = TrimStore::load(&store, "abc", 180.0);
        assert_eq!(reloaded.current(), range(0.0, 30.0));
    }

    #[test]
    fn undo_on_empty_stack_is_a_no_op() {
        let store = MemStore::new();
        let mut ts = TrimStore::load(&store, "abc", 180.0);
        ts.undo(&store);
        assert_eq!(ts.current(), range(0.0, 30.0));
    }

    #[test]
    fn to_millis_rounds() {
        assert_eq!(range(5.0004, 40.0006).to_millis(), (5000, 40001));
    }

    #[test]
    fn persisted_json_uses_in_out_field_names() {
        let raw = serde_json::to_string(&range(5.0, 40.0)).unwrap();
        assert_eq!(raw, r#"{"in":5.0,"out":40.0}"#);
    }
}
