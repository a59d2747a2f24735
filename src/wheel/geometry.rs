//! Angle arithmetic for the spin wheel.
//!
//! The pointer is fixed at 12 o'clock (angle 0). Item *i* of *n* owns the
//! clockwise angular range `[i * (360 / n), (i + 1) * (360 / n))`, measured
//! from the pointer. Rotating the wheel by `r` degrees puts the segment that
//! contains `(360 - r) mod 360` under the pointer.

/// Degrees in one full turn
pub const FULL_TURN: f64 = 360.0;

/// Angular width of one segment
pub fn segment_angle(item_count: usize) -> f64 {
    FULL_TURN / item_count as f64
}

/// Normalizes an angle into `[0, 360)`
///
/// `%` keeps the sign of the dividend; rotation deltas need the mathematical
/// modulo, so everything here goes through `rem_euclid`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(FULL_TURN)
}

/// Angular midpoint of segment `index`
pub fn segment_center(index: usize, item_count: usize) -> f64 {
    let seg = segment_angle(item_count);
    index as f64 * seg + seg / 2.0
}

/// Absolute rotation that lands the pointer on `winner_index`
///
/// The remainder aligns the winning segment's center with the pointer;
/// `full_spins` extra turns are visual energy only. The result is always
/// strictly greater than `current_rotation`, so the wheel never snaps
/// backward between spins.
pub fn target_rotation(
    current_rotation: f64,
    winner_index: usize,
    item_count: usize,
    full_spins: u32,
) -> f64 {
    let target_remainder = normalize_degrees(FULL_TURN - segment_center(winner_index, item_count));
    let current_remainder = normalize_degrees(current_rotation);
    let delta = normalize_degrees(target_remainder - current_remainder);

    current_rotation + f64::from(full_spins) * FULL_TURN + delta
}

/// Index of the segment sitting under the pointer at `rotation`
pub fn segment_under_pointer(rotation: f64, item_count: usize) -> usize {
    let pointer_angle = normalize_degrees(FULL_TURN - normalize_degrees(rotation));
    let index = (pointer_angle / segment_angle(item_count)) as usize;

    // Guard the half-open range against float rounding at the wrap point
    index.min(item_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_angle_four_items() {
        assert_eq!(segment_angle(4), 90.0);
    }

    #[test]
    fn test_normalize_negative_degrees() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-450.0), 270.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn test_segment_center() {
        // N=4: segments start at 0, 90, 180, 270; centers sit 45 further
        assert_eq!(segment_center(0, 4), 45.0);
        assert_eq!(segment_center(2, 4), 225.0);
    }

    #[test]
    fn test_target_rotation_lands_on_winner() {
        // N=4, winner index 2 ("C"): segment spans [180, 270)
        let target = target_rotation(0.0, 2, 4, 5);
        let pointer_angle = normalize_degrees(FULL_TURN - normalize_degrees(target));
        assert!((180.0..270.0).contains(&pointer_angle));
        assert_eq!(segment_under_pointer(target, 4), 2);
    }

    #[test]
    fn test_target_rotation_is_strictly_forward() {
        let mut rotation = 0.0;
        for winner in [3, 0, 2, 2, 1] {
            let next = target_rotation(rotation, winner, 4, 5);
            assert!(next > rotation);
            rotation = next;
        }
    }

    #[test]
    fn test_target_rotation_normalizes_negative_delta() {
        // Current remainder (315) exceeds the target remainder for winner 0
        // (360 - 45 = 315 is equal; use winner 1 whose target is 225), so the
        // raw subtraction is negative and must wrap into [0, 360).
        let target = target_rotation(315.0, 1, 4, 5);
        let delta = target - 315.0 - 5.0 * FULL_TURN;
        assert!((0.0..FULL_TURN).contains(&delta));
        assert_eq!(segment_under_pointer(target, 4), 1);
    }

    #[test]
    fn test_target_rotation_every_winner_every_offset() {
        for n in [1, 2, 3, 4, 7, 100] {
            for winner in 0..n {
                for offset in [0.0, 13.7, 359.9, 4321.0] {
                    let target = target_rotation(offset, winner, n, 6);
                    assert_eq!(
                        segment_under_pointer(target, n),
                        winner,
                        "n={} winner={} offset={}",
                        n,
                        winner,
                        offset
                    );
                }
            }
        }
    }

    #[test]
    fn test_segment_under_pointer_at_boundaries() {
        // Rotation 0 leaves segment 0 under the pointer
        assert_eq!(segment_under_pointer(0.0, 4), 0);
        // Rotating 90 clockwise brings the last segment around to the top
        assert_eq!(segment_under_pointer(90.0, 4), 3);
    }
}
