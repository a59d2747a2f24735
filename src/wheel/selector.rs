use rand::Rng;
use serde::Serialize;

use super::geometry;
use crate::models::RecommendedMovie;

/// Hard cap on wheel segments
pub const MAX_ITEMS: usize = 100;

/// Full extra turns every spin gets at minimum
pub const MIN_FULL_SPINS: u32 = 5;

/// Exclusive bound on the random extra turns beyond the minimum,
/// giving `{5, 6, 7, 8}` total
const EXTRA_FULL_SPINS: u32 = 4;

/// How long the rotation animation runs. The reveal timer and the animation
/// share this constant by contract; they must never drift apart.
pub const SPIN_DURATION_MS: u64 = 4000;

/// Pause between revealing the winner and opening its details, so the result
/// is readable before any navigation happens
pub const DETAILS_DELAY_MS: u64 = 800;

/// Observable state of one wheel
#[derive(Debug, Clone, Serialize)]
pub struct WheelState {
    /// Absolute rotation in degrees; only ever grows
    pub current_rotation_degrees: f64,
    pub is_spinning: bool,
    pub last_winner: Option<String>,
}

impl WheelState {
    fn new() -> Self {
        Self {
            current_rotation_degrees: 0.0,
            is_spinning: false,
            last_winner: None,
        }
    }
}

/// A planned spin: the drawn winner plus the rotation that reveals it
#[derive(Debug, Clone)]
pub struct SpinPlan {
    pub winner_index: usize,
    pub winner_label: String,
    pub target_rotation: f64,
}

/// One wheel's items and rotation state
///
/// Lives exactly as long as the wheel UI that opened it; nothing here is
/// persisted.
#[derive(Debug)]
pub struct Wheel {
    items: Vec<String>,
    state: WheelState,
}

/// Trims raw labels, drops blank ones, and caps the list at [`MAX_ITEMS`]
///
/// Segment count N reflects only the surviving labels. Duplicates are kept;
/// each occupies its own segment.
pub fn sanitize_items<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    raw.into_iter()
        .filter_map(|label| {
            let trimmed = label.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .take(MAX_ITEMS)
        .collect()
}

impl Wheel {
    pub fn new(raw_items: Vec<String>) -> Self {
        Self {
            items: sanitize_items(raw_items),
            state: WheelState::new(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning
    }

    /// Starts a spin: draws a winner uniformly, advances the rotation to the
    /// target that lands the pointer on it, and flips the spinning flag.
    ///
    /// Declines (returning `None`, touching nothing) while a spin is in
    /// flight or when the wheel has no items. The caller owns the reveal
    /// timing; state stays "spinning" until [`Wheel::complete_spin`].
    pub fn begin_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpinPlan> {
        if self.state.is_spinning || self.items.is_empty() {
            return None;
        }

        let winner_index = rng.random_range(0..self.items.len());
        let full_spins = MIN_FULL_SPINS + rng.random_range(0..EXTRA_FULL_SPINS);

        let target_rotation = geometry::target_rotation(
            self.state.current_rotation_degrees,
            winner_index,
            self.items.len(),
            full_spins,
        );

        self.state.current_rotation_degrees = target_rotation;
        self.state.is_spinning = true;

        Some(SpinPlan {
            winner_index,
            winner_label: self.items[winner_index].clone(),
            target_rotation,
        })
    }

    /// Ends the spin and records the winner
    pub fn complete_spin(&mut self, plan: &SpinPlan) {
        self.state.is_spinning = false;
        self.state.last_winner = Some(plan.winner_label.clone());
    }
}

/// Finds the full movie record behind a winning label
///
/// "Not found" means the downstream callback is skipped, never an error: the
/// winner label itself is still shown.
pub fn resolve_label<'a>(
    movies: &'a [RecommendedMovie],
    label: &str,
) -> Option<&'a RecommendedMovie> {
    movies.iter().find(|m| m.display_name() == Some(label))
}
