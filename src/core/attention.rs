//! Pure spatial predicates over a user's attention.
//!
//! These functions hold no state. Transitions call them on every
//! notification and keep their own dwell timers on top.

use super::geometry::Vector3;

/// Check whether `distance` lies within `[min, max]`.
///
/// `max = None` means unbounded. NaN never lies in range.
pub fn in_range(distance: f32, min: f32, max: Option<f32>) -> bool {
    distance >= min && max.is_none_or(|max| distance <= max)
}

/// Check whether the look ray from `origin` passes within `radius` of `poi`.
///
/// The ray is walked from `origin` along `direction` for exactly the
/// distance to `poi`, and the landing point is compared against the radius.
/// Directions without a defined length (zero, NaN, infinite) never focus.
pub fn is_focusing(origin: Vector3, direction: Vector3, poi: Vector3, radius: f32) -> bool {
    let Some(direction) = direction.normalized() else {
        return false;
    };
    let projected = origin + direction * origin.distance(poi);
    projected.distance(poi) <= radius
}
