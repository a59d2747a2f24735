//! Server-hosted wheel sessions.
//!
//! Each open wheel UI owns one session: the movies behind the labels, the
//! rotation state, and the outcome of the latest spin. The session registry
//! lives in [`AppState`]; sessions die with the UI and are never persisted.

use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::RecommendedMovie;
use crate::state::AppState;
use crate::wheel::{
    resolve_label, wheel_layout, SpinPlan, Wheel, WheelLayout, DETAILS_DELAY_MS, SPIN_DURATION_MS,
};

/// Canvas size the layout endpoint renders against
pub const WHEEL_SIZE: f64 = 500.0;

/// One wheel UI's server-side session
pub struct WheelSession {
    pub id: Uuid,
    movies: Vec<RecommendedMovie>,
    wheel: Wheel,
    winner_movie: Option<RecommendedMovie>,
    details_open: bool,
}

/// Snapshot of a session as served to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct WheelSessionView {
    pub id: Uuid,
    pub items: Vec<String>,
    pub current_rotation_degrees: f64,
    pub is_spinning: bool,
    pub last_winner: Option<String>,
    pub winner_movie: Option<RecommendedMovie>,
    pub details_open: bool,
    /// Animation window the frontend must match
    pub spin_duration_ms: u64,
}

impl WheelSession {
    /// Builds a session over the given movies
    ///
    /// Labels are the movies' display names; placeholder entries without a
    /// name have nothing to show on a segment and are left off the wheel.
    pub fn new(movies: Vec<RecommendedMovie>) -> Self {
        let labels: Vec<String> = movies
            .iter()
            .filter_map(|m| m.display_name())
            .map(str::to_string)
            .collect();

        Self {
            id: Uuid::new_v4(),
            movies,
            wheel: Wheel::new(labels),
            winner_movie: None,
            details_open: false,
        }
    }

    pub fn view(&self) -> WheelSessionView {
        let state = self.wheel.state();
        WheelSessionView {
            id: self.id,
            items: self.wheel.items().to_vec(),
            current_rotation_degrees: state.current_rotation_degrees,
            is_spinning: state.is_spinning,
            last_winner: state.last_winner.clone(),
            winner_movie: self.winner_movie.clone(),
            details_open: self.details_open,
            spin_duration_ms: SPIN_DURATION_MS,
        }
    }

    pub fn layout(&self) -> WheelLayout {
        wheel_layout(self.wheel.items(), WHEEL_SIZE)
    }
}

/// Registers a new session and returns its initial snapshot
pub async fn create_session(state: &AppState, movies: Vec<RecommendedMovie>) -> WheelSessionView {
    let session = WheelSession::new(movies);
    let view = session.view();
    state.inner.write().await.wheels.insert(session.id, session);

    tracing::info!(
        session_id = %view.id,
        items = view.items.len(),
        "Wheel session created"
    );

    view
}

/// Starts a spin on a session
///
/// Already-spinning and empty wheels decline silently: the response is the
/// unchanged session snapshot, not an error. An accepted spin advances the
/// rotation immediately and schedules the reveal.
pub async fn spin(state: &AppState, session_id: Uuid) -> AppResult<WheelSessionView> {
    let mut inner = state.inner.write().await;
    let session = inner
        .wheels
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("No wheel session {}", session_id)))?;

    let plan = {
        let mut rng = rand::rng();
        session.wheel.begin_spin(&mut rng)
    };

    if let Some(plan) = plan {
        tracing::info!(
            session_id = %session_id,
            winner_index = plan.winner_index,
            target_rotation = plan.target_rotation,
            "Spin started"
        );
        tokio::spawn(run_spin_timer(state.clone(), session_id, plan));
    }

    Ok(session.view())
}

/// Drives one spin to completion: the reveal after the animation window,
/// then the details-open beat.
///
/// Both delays live here so the visual duration and the logical reveal can
/// never drift apart. A session torn down mid-spin makes the timer exit
/// without reporting.
async fn run_spin_timer(state: AppState, session_id: Uuid, plan: SpinPlan) {
    tokio::time::sleep(std::time::Duration::from_millis(SPIN_DURATION_MS)).await;

    let resolved = {
        let mut inner = state.inner.write().await;
        let Some(session) = inner.wheels.get_mut(&session_id) else {
            return;
        };

        session.wheel.complete_spin(&plan);
        let winner = resolve_label(&session.movies, &plan.winner_label).cloned();
        let resolved = winner.is_some();
        session.winner_movie = winner;

        tracing::info!(
            session_id = %session_id,
            winner = %plan.winner_label,
            resolved,
            "Spin complete"
        );

        resolved
    };

    // The details view opens a beat later so the result stays readable; an
    // unresolved label has no details to open.
    if resolved {
        tokio::time::sleep(std::time::Duration::from_millis(DETAILS_DELAY_MS)).await;
        let mut inner = state.inner.write().await;
        if let Some(session) = inner.wheels.get_mut(&session_id) {
            session.details_open = true;
        }
    }
}
