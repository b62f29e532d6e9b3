//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns a fresh state signal for its lifetime and a small
//! `DependentSource` adapter over the `CampaignApi` it finds in context.
//! Rendering details are delegated to `components`. Fetches only run in the
//! browser; server rendering emits the loading skeletons.

pub mod ab_manager;
pub mod agent_chat;
pub mod campaign_analytics;
pub mod campaign_builder;
pub mod dashboard;
pub mod research_papers;
pub mod view_research_paper;

use std::future::Future;

use leptos::prelude::*;

use crate::net::{FetchError, MockDataSource};
use crate::state::view_state::{DependentSource, DetailState, SelectionState};

/// Data collaborator provided by the app shell, or fixtures when absent.
pub(crate) fn campaign_api() -> MockDataSource {
    use_context::<MockDataSource>().unwrap_or_default()
}

/// Start the mount sequence (parents, auto-select, first cycle).
pub(crate) fn spawn_parent_load<S>(source: S, state: RwSignal<SelectionState<S::Parent, S::Children>>)
where
    S: DependentSource + 'static,
    S::Parent: Send + Sync + 'static,
    S::Children: Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::state::view_state::load_parents(&source, &state).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!(
            "{} deferred to the browser (loading: {})",
            source.label(),
            state.with_untracked(SelectionState::is_loading_parents)
        );
    }
}

/// Switch the selection and run the new cycle.
pub(crate) fn spawn_selection<S>(source: S, state: RwSignal<SelectionState<S::Parent, S::Children>>, parent_id: String)
where
    S: DependentSource + 'static,
    S::Parent: Send + Sync + 'static,
    S::Children: Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::state::view_state::change_selection(&source, &state, &parent_id).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!(
            "{} selection '{parent_id}' ignored outside the browser (cycle {})",
            source.label(),
            state.with_untracked(SelectionState::cycle)
        );
    }
}

/// Load a single entity into a detail signal.
pub(crate) fn spawn_detail<T, F>(state: RwSignal<DetailState<T>>, label: &'static str, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, FetchError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::state::view_state::load_detail(&state, label, fetch).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(fetch);
        log::debug!(
            "{label} deferred to the browser (loading: {})",
            state.with_untracked(DetailState::is_loading)
        );
    }
}
