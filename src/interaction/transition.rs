//! Transition guards with dwell and focus timers.

use crate::builder::TransitionSpec;
use crate::core::{in_range, is_focusing, Gesture, Vector3};
use serde::{Deserialize, Serialize};

/// An input event delivered to an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Notification {
    /// Continuous attention tick, delivered every frame or interval
    Attention {
        origin: Vector3,
        direction: Vector3,
        /// Seconds since the previous tick
        elapsed: f32,
    },

    /// A completed discrete gesture
    Gesture {
        gesture: Gesture,
        origin: Vector3,
        direction: Vector3,
    },
}

/// Snapshot of a transition's runtime accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionStatus {
    /// User stands within the distance bounds of the point of interest
    pub in_range: bool,
    /// User has stood still for the static time
    pub is_static: bool,
    /// User has looked at the point of interest for the focus time
    pub is_focusing: bool,
    /// User has looked away from the point of interest for the non-focus time
    pub is_distracted: bool,
    pub static_time: f32,
    pub focus_time: f32,
    pub non_focus_time: f32,
    /// Position seen by the previous attention tick
    pub last_position: Option<Vector3>,
}

/// A validated guard condition plus the timers it accumulates.
///
/// Transitions are only obtainable from
/// [`TransitionBuilder::build`](crate::builder::TransitionBuilder::build).
/// Their timers persist across notifications until [`reset`](Self::reset)
/// is called, which the owning interaction does whenever it leaves the state.
#[derive(Clone, Debug)]
pub struct Transition {
    spec: TransitionSpec,
    status: TransitionStatus,
}

impl Transition {
    pub(crate) fn new(spec: TransitionSpec) -> Self {
        Self {
            spec,
            status: TransitionStatus::default(),
        }
    }

    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    pub fn status(&self) -> TransitionStatus {
        self.status
    }

    /// Zero every accumulator and latch.
    pub fn reset(&mut self) {
        self.status = TransitionStatus::default();
    }

    /// Evaluate a notification, returning whether the guard is satisfied.
    pub fn notify(&mut self, notification: &Notification) -> bool {
        match *notification {
            Notification::Attention {
                origin,
                direction,
                elapsed,
            } => self.notify_attention(origin, direction, elapsed),
            Notification::Gesture {
                gesture,
                origin,
                direction,
            } => self.notify_gesture(gesture, origin, direction),
        }
    }

    /// Evaluate a continuous attention tick.
    pub fn notify_attention(&mut self, origin: Vector3, direction: Vector3, elapsed: f32) -> bool {
        let Some(poi) = self.spec.point_of_interest else {
            let is_static = self.track_stillness(origin, elapsed);
            return self.spec.gesture.is_none() && is_static;
        };

        self.update_range(origin, poi);
        if self.spec.trigger_zone {
            return self.status.in_range;
        }

        if is_focusing(origin, direction, poi, self.spec.radius) {
            self.accumulate_focus(elapsed);
            self.spec.gesture.is_none() && self.status.is_focusing && self.status.in_range
        } else {
            self.accumulate_non_focus(elapsed);
            self.spec.gesture.is_none() && self.status.is_distracted && self.status.in_range
        }
    }

    /// Evaluate a discrete gesture event.
    ///
    /// Gesture events never advance timers. Transitions that need no
    /// gesture, and trigger zones, treat the event as a zero-length tick.
    pub fn notify_gesture(&mut self, gesture: Gesture, origin: Vector3, direction: Vector3) -> bool {
        if self.spec.gesture.is_none() || self.spec.trigger_zone {
            return self.notify_attention(origin, direction, 0.0);
        }

        let matches = gesture == self.spec.gesture;
        let Some(poi) = self.spec.point_of_interest else {
            return matches;
        };

        self.update_range(origin, poi);
        if is_focusing(origin, direction, poi, self.spec.radius) {
            let dwelled = self.spec.focus_time == 0.0 || self.status.is_focusing;
            matches && dwelled && self.status.in_range
        } else if self.spec.non_focus_time.is_some() {
            matches && self.status.is_distracted && self.status.in_range
        } else {
            false
        }
    }

    // Stillness is an exact position match between consecutive ticks.
    fn track_stillness(&mut self, origin: Vector3, elapsed: f32) -> bool {
        let still = self.status.last_position == Some(origin);
        if still {
            self.status.static_time += elapsed;
        } else {
            self.status.static_time = 0.0;
        }
        self.status.last_position = Some(origin);
        self.status.is_static = still && self.status.static_time >= self.spec.static_time;
        self.status.is_static
    }

    fn update_range(&mut self, origin: Vector3, poi: Vector3) {
        self.status.in_range = in_range(
            origin.distance(poi),
            self.spec.min_distance,
            self.spec.max_distance,
        );
    }

    // Latches stay set until `reset`; reaching focus clears distraction.
    fn accumulate_focus(&mut self, elapsed: f32) {
        self.status.focus_time += elapsed;
        self.status.non_focus_time = 0.0;
        if self.spec.focus_time > 0.0 && self.status.focus_time >= self.spec.focus_time {
            self.status.is_focusing = true;
            self.status.is_distracted = false;
        }
    }

    fn accumulate_non_focus(&mut self, elapsed: f32) {
        self.status.non_focus_time += elapsed;
        self.status.focus_time = 0.0;
        if self
            .spec
            .non_focus_time
            .is_some_and(|threshold| self.status.non_focus_time >= threshold)
        {
            self.status.is_distracted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TransitionBuilder;

    const FORWARD: Vector3 = Vector3::new(0.0, 0.0, 1.0);
    const BACKWARD: Vector3 = Vector3::new(0.0, 0.0, -1.0);

    fn painting() -> Vector3 {
        Vector3::new(0.0, 0.0, 3.0)
    }

    #[test]
    fn new_transition_starts_cleared() {
        let transition = TransitionBuilder::new()
            .gesture(Gesture::Wave)
            .build()
            .unwrap();

        let status = transition.status();
        assert!(!status.in_range);
        assert!(!status.is_static);
        assert!(!status.is_focusing);
        assert!(!status.is_distracted);
        assert_eq!(status, TransitionStatus::default());
    }

    #[test]
    fn static_dwell_needs_unchanged_position() {
        let mut transition = TransitionBuilder::new().static_time(2.0).build().unwrap();
        let p = Vector3::new(1.0, 0.0, 1.0);

        assert!(!transition.notify_attention(p, FORWARD, 1.0));
        assert_eq!(transition.status().static_time, 0.0);
        assert!(!transition.notify_attention(p, FORWARD, 1.0));
        assert_eq!(transition.status().static_time, 1.0);
        assert!(transition.notify_attention(p, FORWARD, 1.0));
        assert!(transition.status().is_static);
    }

    #[test]
    fn moving_restarts_static_dwell() {
        let mut transition = TransitionBuilder::new().static_time(2.0).build().unwrap();
        let p = Vector3::new(1.0, 0.0, 1.0);
        let q = Vector3::new(1.0, 0.0, 1.1);

        transition.notify_attention(p, FORWARD, 1.0);
        transition.notify_attention(p, FORWARD, 1.0);
        assert!(!transition.notify_attention(q, FORWARD, 1.0));
        assert_eq!(transition.status().static_time, 0.0);
        assert!(!transition.notify_attention(q, FORWARD, 1.0));
        assert!(transition.notify_attention(q, FORWARD, 1.0));
    }

    #[test]
    fn looking_around_does_not_break_stillness() {
        let mut transition = TransitionBuilder::new().static_time(1.0).build().unwrap();
        let p = Vector3::new(0.0, 1.7, 0.0);

        transition.notify_attention(p, FORWARD, 0.5);
        transition.notify_attention(p, BACKWARD, 0.5);
        assert!(transition.notify_attention(p, FORWARD, 0.5));
    }

    #[test]
    fn gesture_event_counts_as_zero_length_tick_when_no_gesture_required() {
        let mut transition = TransitionBuilder::new().static_time(1.0).build().unwrap();
        let p = Vector3::new(0.0, 1.7, 0.0);

        transition.notify_attention(p, FORWARD, 1.0);
        transition.notify_attention(p, FORWARD, 1.0);
        assert!(transition.notify_gesture(Gesture::Wave, p, FORWARD));
        assert_eq!(transition.status().static_time, 1.0);
    }

    #[test]
    fn gesture_only_transition_fires_on_match() {
        let mut transition = TransitionBuilder::new()
            .gesture(Gesture::Wave)
            .build()
            .unwrap();

        assert!(!transition.notify_attention(Vector3::ZERO, FORWARD, 10.0));
        assert!(!transition.notify_gesture(Gesture::Circle, Vector3::ZERO, FORWARD));
        assert!(!transition.notify_gesture(Gesture::None, Vector3::ZERO, FORWARD));
        assert!(transition.notify_gesture(Gesture::Wave, Vector3::ZERO, FORWARD));
    }

    #[test]
    fn trigger_zone_fires_inside_bounds() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(Vector3::ZERO)
            .min_distance(1.0)
            .max_distance(5.0)
            .as_trigger_zone()
            .build()
            .unwrap();

        assert!(transition.notify_attention(Vector3::new(3.0, 0.0, 0.0), FORWARD, 0.1));
        assert!(!transition.notify_attention(Vector3::new(0.5, 0.0, 0.0), FORWARD, 0.1));
        assert!(!transition.notify_attention(Vector3::new(6.0, 0.0, 0.0), FORWARD, 0.1));
    }

    #[test]
    fn trigger_zone_ignores_gesture_kind() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(Vector3::ZERO)
            .max_distance(2.0)
            .as_trigger_zone()
            .build()
            .unwrap();

        assert!(transition.notify_gesture(Gesture::Tap, Vector3::new(1.0, 0.0, 0.0), FORWARD));
        assert!(!transition.notify_gesture(Gesture::Tap, Vector3::new(3.0, 0.0, 0.0), FORWARD));
    }

    #[test]
    fn focus_dwell_fires_after_threshold() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .focus_time(1.0)
            .build()
            .unwrap();

        assert!(!transition.notify_attention(Vector3::ZERO, FORWARD, 0.5));
        assert!(!transition.status().is_focusing);
        assert!(transition.notify_attention(Vector3::ZERO, FORWARD, 0.5));
        assert!(transition.status().is_focusing);
    }

    #[test]
    fn looking_away_resets_focus_dwell() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .focus_time(1.0)
            .build()
            .unwrap();

        transition.notify_attention(Vector3::ZERO, FORWARD, 0.8);
        assert!(!transition.notify_attention(Vector3::ZERO, BACKWARD, 0.1));
        assert_eq!(transition.status().focus_time, 0.0);
        assert_eq!(transition.status().non_focus_time, 0.1);
        assert!(!transition.status().is_focusing);
        assert!(!transition.notify_attention(Vector3::ZERO, FORWARD, 0.8));
        assert!(transition.notify_attention(Vector3::ZERO, FORWARD, 0.2));
    }

    #[test]
    fn focus_latch_survives_a_glance_away() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .focus_time(1.0)
            .build()
            .unwrap();

        assert!(transition.notify_attention(Vector3::ZERO, FORWARD, 1.0));
        assert!(!transition.notify_attention(Vector3::ZERO, BACKWARD, 0.1));
        assert!(transition.status().is_focusing);
        assert_eq!(transition.status().focus_time, 0.0);
        assert!(transition.notify_attention(Vector3::ZERO, FORWARD, 0.1));
    }

    #[test]
    fn gesture_after_glance_away_uses_reached_focus() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .focus_time(1.0)
            .gesture(Gesture::Wave)
            .build()
            .unwrap();

        transition.notify_attention(Vector3::ZERO, FORWARD, 1.0);
        transition.notify_attention(Vector3::ZERO, BACKWARD, 0.1);
        assert!(transition.notify_gesture(Gesture::Wave, Vector3::ZERO, FORWARD));
    }

    #[test]
    fn distraction_latch_survives_looking_back() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .non_focus_time(1.0)
            .gesture(Gesture::Swipe)
            .build()
            .unwrap();

        transition.notify_attention(Vector3::ZERO, BACKWARD, 1.0);
        assert!(transition.status().is_distracted);
        transition.notify_attention(Vector3::ZERO, FORWARD, 0.1);
        assert!(transition.status().is_distracted);
        assert_eq!(transition.status().non_focus_time, 0.0);
        assert!(transition.notify_gesture(Gesture::Swipe, Vector3::ZERO, BACKWARD));
    }

    #[test]
    fn focus_dwell_requires_range() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .max_distance(2.0)
            .focus_time(0.5)
            .build()
            .unwrap();

        assert!(!transition.notify_attention(Vector3::ZERO, FORWARD, 1.0));
        assert!(transition.status().is_focusing);
        assert!(!transition.status().in_range);

        let closer = Vector3::new(0.0, 0.0, 1.5);
        assert!(transition.notify_attention(closer, FORWARD, 0.1));
    }

    #[test]
    fn non_focus_dwell_fires_after_looking_away() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .non_focus_time(2.0)
            .build()
            .unwrap();

        assert!(!transition.notify_attention(Vector3::ZERO, BACKWARD, 1.0));
        assert!(!transition.notify_attention(Vector3::ZERO, FORWARD, 1.0));
        assert_eq!(transition.status().non_focus_time, 0.0);
        assert!(!transition.notify_attention(Vector3::ZERO, BACKWARD, 1.0));
        assert!(transition.notify_attention(Vector3::ZERO, BACKWARD, 1.0));
        assert!(transition.status().is_distracted);
    }

    #[test]
    fn zero_non_focus_time_fires_on_first_glance_away() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .non_focus_time(0.0)
            .build()
            .unwrap();

        assert!(!transition.notify_attention(Vector3::ZERO, FORWARD, 0.1));
        assert!(transition.notify_attention(Vector3::ZERO, BACKWARD, 0.0));
    }

    #[test]
    fn gesture_fires_only_after_focus_dwell() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .focus_time(1.0)
            .gesture(Gesture::Wave)
            .build()
            .unwrap();

        transition.notify_attention(Vector3::ZERO, FORWARD, 0.5);
        assert!(!transition.notify_gesture(Gesture::Wave, Vector3::ZERO, FORWARD));

        assert!(!transition.notify_attention(Vector3::ZERO, FORWARD, 0.5));
        assert!(transition.status().is_focusing);
        assert!(!transition.notify_gesture(Gesture::Swipe, Vector3::ZERO, FORWARD));
        assert!(transition.notify_gesture(Gesture::Wave, Vector3::ZERO, FORWARD));
    }

    #[test]
    fn gesture_without_focus_time_needs_only_current_focus() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .gesture(Gesture::Tap)
            .build()
            .unwrap();

        assert!(transition.notify_gesture(Gesture::Tap, Vector3::ZERO, FORWARD));
        assert!(!transition.notify_gesture(Gesture::Tap, Vector3::ZERO, BACKWARD));
    }

    #[test]
    fn gesture_while_distracted() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .non_focus_time(1.0)
            .gesture(Gesture::Swipe)
            .build()
            .unwrap();

        assert!(!transition.notify_attention(Vector3::ZERO, BACKWARD, 1.0));
        assert!(transition.status().is_distracted);
        assert!(transition.notify_gesture(Gesture::Swipe, Vector3::ZERO, BACKWARD));
        assert!(!transition.notify_gesture(Gesture::Wave, Vector3::ZERO, BACKWARD));
    }

    #[test]
    fn gesture_events_do_not_advance_timers() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .focus_time(1.0)
            .gesture(Gesture::Wave)
            .build()
            .unwrap();

        transition.notify_attention(Vector3::ZERO, FORWARD, 0.4);
        transition.notify_gesture(Gesture::Wave, Vector3::ZERO, FORWARD);
        transition.notify_gesture(Gesture::Wave, Vector3::ZERO, FORWARD);
        assert_eq!(transition.status().focus_time, 0.4);
    }

    #[test]
    fn nan_input_never_fires() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .as_trigger_zone()
            .build()
            .unwrap();

        let nan = Vector3::new(f32::NAN, 0.0, 0.0);
        assert!(!transition.notify_attention(nan, FORWARD, 0.1));
        assert!(!transition.status().in_range);
    }

    #[test]
    fn reset_clears_accumulators_and_is_idempotent() {
        let mut transition = TransitionBuilder::new()
            .point_of_interest(painting())
            .focus_time(1.0)
            .build()
            .unwrap();

        transition.notify_attention(Vector3::ZERO, FORWARD, 2.0);
        assert_ne!(transition.status(), TransitionStatus::default());

        transition.reset();
        let once = transition.status();
        transition.reset();
        assert_eq!(once, transition.status());
        assert_eq!(once, TransitionStatus::default());
    }

    #[test]
    fn notify_dispatches_on_notification_kind() {
        let mut transition = TransitionBuilder::new()
            .gesture(Gesture::Circle)
            .build()
            .unwrap();

        let tick = Notification::Attention {
            origin: Vector3::ZERO,
            direction: FORWARD,
            elapsed: 1.0,
        };
        let circle = Notification::Gesture {
            gesture: Gesture::Circle,
            origin: Vector3::ZERO,
            direction: FORWARD,
        };

        assert!(!transition.notify(&tick));
        assert!(transition.notify(&circle));
    }
}
