//! Spin-wheel selection engine.
//!
//! Given an ordered list of labels, draws a winner uniformly at random and
//! computes the rotation that lands the fixed pointer on its segment. The
//! reveal is time-driven: the caller schedules it [`SPIN_DURATION_MS`] after
//! the spin starts so the visible animation and the logical result stay in
//! lockstep.

pub mod geometry;
pub mod layout;
pub mod selector;

pub use layout::{wheel_layout, WheelLayout};
pub use selector::{
    resolve_label, sanitize_items, SpinPlan, Wheel, WheelState, DETAILS_DELAY_MS, MAX_ITEMS,
    SPIN_DURATION_MS,
};
