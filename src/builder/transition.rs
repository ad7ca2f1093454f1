//! Builder for constructing validated transitions.

use crate::builder::error::ValidationError;
use crate::core::{Gesture, Vector3};
use crate::interaction::Transition;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

/// Radius around a point of interest that counts as looking at it.
pub const DEFAULT_RADIUS: f32 = 1.5;

/// The parameters of a transition guard.
///
/// A spec on its own is just data. It only becomes a [`Transition`] after
/// passing through [`TransitionBuilder::build`]. Missing fields fall back to
/// their defaults when deserializing, so specs can live in host configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSpec {
    /// Gesture that must be observed, `Gesture::None` if none is required
    pub gesture: Gesture,
    /// Location the spatial conditions are evaluated against
    pub point_of_interest: Option<Vector3>,
    /// How close the look ray must pass to the point of interest
    pub radius: f32,
    /// Closest the user may stand to the point of interest
    pub min_distance: f32,
    /// Farthest the user may stand from the point of interest, unbounded if `None`
    pub max_distance: Option<f32>,
    /// Fire on range membership alone
    pub trigger_zone: bool,
    /// Seconds the user must stand still (no point of interest only)
    pub static_time: f32,
    /// Seconds the user must look at the point of interest
    pub focus_time: f32,
    /// Seconds the user must look away from the point of interest
    pub non_focus_time: Option<f32>,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            gesture: Gesture::None,
            point_of_interest: None,
            radius: DEFAULT_RADIUS,
            min_distance: 0.0,
            max_distance: None,
            trigger_zone: false,
            static_time: 0.0,
            focus_time: 0.0,
            non_focus_time: None,
        }
    }
}

type Check = fn(&TransitionSpec) -> Result<(), ValidationError>;

/// Constraints in the order `build` reports them.
const CHECKS: [Check; 9] = [
    check_static_time_without_poi,
    check_has_trigger,
    |spec| non_negative(spec.static_time, ValidationError::NegativeStaticTime),
    |spec| non_negative(spec.focus_time, ValidationError::NegativeFocusTime),
    |spec| non_negative(spec.min_distance, ValidationError::NegativeMinimumDistance),
    |spec| non_negative(spec.radius, ValidationError::NegativeRadius),
    |spec| match spec.non_focus_time {
        Some(t) => non_negative(t, ValidationError::NegativeNonFocusTime),
        None => Ok(()),
    },
    check_single_dwell_mode,
    check_distance_bounds,
];

fn check_static_time_without_poi(spec: &TransitionSpec) -> Result<(), ValidationError> {
    if spec.static_time > 0.0 && spec.point_of_interest.is_some() {
        return Err(ValidationError::StaticTimeWithPointOfInterest {
            static_time: spec.static_time,
        });
    }
    Ok(())
}

fn check_has_trigger(spec: &TransitionSpec) -> Result<(), ValidationError> {
    if spec.gesture.is_none() && spec.point_of_interest.is_none() && spec.static_time == 0.0 {
        return Err(ValidationError::NothingToTrigger);
    }
    Ok(())
}

// NaN fails the comparison and is rejected along with negatives.
fn non_negative(value: f32, error: fn(f32) -> ValidationError) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(error(value))
    }
}

fn check_single_dwell_mode(spec: &TransitionSpec) -> Result<(), ValidationError> {
    match spec.non_focus_time {
        Some(non_focus_time) if spec.focus_time > 0.0 => {
            Err(ValidationError::ConflictingDwellModes {
                focus_time: spec.focus_time,
                non_focus_time,
            })
        }
        _ => Ok(()),
    }
}

fn check_distance_bounds(spec: &TransitionSpec) -> Result<(), ValidationError> {
    match spec.max_distance {
        Some(max) if max >= spec.min_distance => Ok(()),
        Some(max) => Err(ValidationError::MaximumBelowMinimum {
            min: spec.min_distance,
            max,
        }),
        None => Ok(()),
    }
}

/// Builder for constructing transitions with a fluent API.
///
/// Setters never validate. All constraints are checked by [`build`](Self::build),
/// which borrows the builder so the same configuration can be built again.
///
/// # Example
///
/// ```rust
/// use gazeflow::builder::TransitionBuilder;
/// use gazeflow::core::{Gesture, Vector3};
///
/// let transition = TransitionBuilder::new()
///     .point_of_interest(Vector3::new(0.0, 1.6, 3.0))
///     .focus_time(1.0)
///     .gesture(Gesture::Wave)
///     .build()
///     .unwrap();
///
/// assert!(!transition.status().is_focusing);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    spec: TransitionSpec,
}

impl TransitionBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing spec, e.g. one loaded from configuration.
    pub fn from_spec(spec: TransitionSpec) -> Self {
        Self { spec }
    }

    /// Require a gesture.
    pub fn gesture(mut self, gesture: Gesture) -> Self {
        self.spec.gesture = gesture;
        self
    }

    /// Evaluate range and focus against this point.
    pub fn point_of_interest(mut self, point: Vector3) -> Self {
        self.spec.point_of_interest = Some(point);
        self
    }

    pub fn min_distance(mut self, distance: f32) -> Self {
        self.spec.min_distance = distance;
        self
    }

    pub fn max_distance(mut self, distance: f32) -> Self {
        self.spec.max_distance = Some(distance);
        self
    }

    /// Fire whenever the user is in range, ignoring dwell timers.
    pub fn as_trigger_zone(mut self) -> Self {
        self.spec.trigger_zone = true;
        self
    }

    /// Seconds the user must stand still before firing.
    pub fn static_time(mut self, seconds: f32) -> Self {
        self.spec.static_time = seconds;
        self
    }

    /// Seconds the user must look at the point of interest before firing.
    pub fn focus_time(mut self, seconds: f32) -> Self {
        self.spec.focus_time = seconds;
        self
    }

    /// Seconds the user must look away from the point of interest before firing.
    pub fn non_focus_time(mut self, seconds: f32) -> Self {
        self.spec.non_focus_time = Some(seconds);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.spec.radius = radius;
        self
    }

    /// The parameters collected so far.
    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    /// Check every constraint, accumulating ALL violations.
    ///
    /// Useful for reporting configuration problems in one pass. `build`
    /// stops at the first violation instead.
    pub fn diagnose(&self) -> Validation<(), NonEmptyVec<ValidationError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = CHECKS
            .iter()
            .map(|check| match check(&self.spec) {
                Ok(()) => Validation::success(()),
                Err(error) => Validation::fail(error),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the transition.
    ///
    /// Returns the first violated constraint. Suspicious but legal
    /// combinations are logged as warnings.
    pub fn build(&self) -> Result<Transition, ValidationError> {
        for check in CHECKS {
            check(&self.spec)?;
        }
        self.warn_ineffective_settings();

        Ok(Transition::new(self.spec))
    }

    fn warn_ineffective_settings(&self) {
        let spec = &self.spec;
        if spec.point_of_interest.is_none() {
            if spec.focus_time > 0.0 {
                warn!(
                    focus_time = spec.focus_time,
                    "focus time has no effect without a point of interest"
                );
            }
            if let Some(non_focus_time) = spec.non_focus_time {
                warn!(
                    non_focus_time,
                    "non-focus time has no effect without a point of interest"
                );
            }
        } else if !spec.trigger_zone
            && spec.gesture.is_none()
            && spec.focus_time == 0.0
            && spec.non_focus_time.is_none()
        {
            warn!("point of interest without a trigger zone, gesture or dwell time can never fire");
        }
    }
}

impl From<TransitionSpec> for TransitionBuilder {
    fn from(spec: TransitionSpec) -> Self {
        Self::from_spec(spec)
    }
}
