// File: crates/pulse-core/src/animate.rs
// Summary: Frame-driven value animator: easing, staggering, visibility gating.

/// Default tween duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 900.0;

/// Ease-out-cubic: fast start, soft landing. Input is the elapsed-time
/// fraction, clamped to [0, 1].
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Handle to one animated value owned by an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackId(usize);

#[derive(Clone, Copy, Debug)]
struct Track {
    start: f64,
    target: f64,
    delay_ms: f64,
    duration_ms: f64,
    visible: bool,
    // Absolute start time, fixed by the first tick after the track becomes
    // visible. None = not yet scheduled.
    started_at: Option<f64>,
    value: f64,
    done: bool,
}

impl Track {
    fn advance(&mut self, now_ms: f64) {
        if !self.visible || self.done {
            return;
        }
        let started_at = *self.started_at.get_or_insert(now_ms + self.delay_ms);
        if now_ms < started_at {
            return;
        }
        let p = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (now_ms - started_at) / self.duration_ms
        };
        if p >= 1.0 {
            // Land exactly on the target; easing must leave no residue.
            self.value = self.target;
            self.done = true;
        } else {
            self.value = self.start + (self.target - self.start) * ease_out_cubic(p);
        }
    }
}

/// Cooperative animation scheduler. Each animated value is an independent
/// record advanced by one driving loop; nothing is shared between tracks
/// and no background threads exist.
///
/// The driver owns the clock: it calls [`Animator::tick`] with a
/// monotonically increasing timestamp (milliseconds) each frame and reads
/// displayed values back with [`Animator::value`].
#[derive(Debug, Default)]
pub struct Animator {
    tracks: Vec<Option<Track>>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tween from `start` to `target`. The track stays dormant
    /// until [`Animator::mark_visible`] is called for it.
    pub fn spawn(&mut self, start: f64, target: f64, duration_ms: f64) -> TrackId {
        self.spawn_delayed(start, target, duration_ms, 0.0)
    }

    /// Register a tween that waits `delay_ms` after activation before moving.
    pub fn spawn_delayed(
        &mut self,
        start: f64,
        target: f64,
        duration_ms: f64,
        delay_ms: f64,
    ) -> TrackId {
        let id = TrackId(self.tracks.len());
        self.tracks.push(Some(Track {
            start,
            target,
            delay_ms: delay_ms.max(0.0),
            duration_ms,
            visible: false,
            started_at: None,
            value: start,
            done: false,
        }));
        id
    }

    /// Register one tween per target with index-proportional start delays,
    /// so a list of counters reveals sequentially instead of all at once.
    pub fn spawn_staggered(
        &mut self,
        start: f64,
        targets: &[f64],
        duration_ms: f64,
        stagger_ms: f64,
    ) -> Vec<TrackId> {
        targets
            .iter()
            .enumerate()
            .map(|(i, &t)| self.spawn_delayed(start, t, duration_ms, stagger_ms * i as f64))
            .collect()
    }

    /// Activate a track: the owning element became visible in the viewport.
    /// Activation latches: it happens once per track, and later visibility
    /// changes never restart the animation (no re-counting on scroll).
    pub fn mark_visible(&mut self, id: TrackId) {
        if let Some(track) = self.track_mut(id) {
            track.visible = true;
        }
    }

    /// Advance every live track to `now_ms`. Returns true while any track
    /// has not finished (dormant tracks count: they are waiting on
    /// visibility, not complete).
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut running = false;
        for slot in &mut self.tracks {
            if let Some(track) = slot {
                track.advance(now_ms);
                if !track.done {
                    running = true;
                }
            }
        }
        running
    }

    /// Currently displayed value of a track; None once cancelled.
    pub fn value(&self, id: TrackId) -> Option<f64> {
        self.track(id).map(|t| t.value)
    }

    pub fn is_done(&self, id: TrackId) -> bool {
        self.track(id).map(|t| t.done).unwrap_or(false)
    }

    /// Tear down a track (owning element unmounted). The slot is vacated,
    /// so a scheduled continuation can never write to stale state.
    pub fn cancel(&mut self, id: TrackId) {
        if let Some(slot) = self.tracks.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Redirect an in-flight track to a new target. Interpolation restarts
    /// from the currently displayed value; the original stagger delay does
    /// not apply again.
    pub fn retarget(&mut self, id: TrackId, new_target: f64, now_ms: f64) {
        if let Some(track) = self.track_mut(id) {
            track.start = track.value;
            track.target = new_target;
            track.done = false;
            if track.started_at.is_some() {
                track.delay_ms = 0.0;
                track.started_at = Some(now_ms);
            }
        }
    }

    /// Number of live (not cancelled) tracks.
    pub fn live_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.is_some()).count()
    }

    fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.0).and_then(|t| t.as_ref())
    }

    fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(id.0).and_then(|t| t.as_mut())
    }
}
