//! Async view-state controller for select-then-fetch pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list-and-detail page follows the same sequence: fetch a parent list,
//! auto-select the first parent, then fetch all dependent collections for the
//! selection as one all-or-nothing join. `SelectionState` is the explicit,
//! page-owned state object for that sequence; a page constructs a fresh one
//! on every navigation and drops it on unmount.
//!
//! DESIGN
//! ======
//! State transitions are plain synchronous methods so they can be exercised
//! without a browser. The async drivers (`load_parents`, `load_children`,
//! `change_selection`, `load_detail`) are generic over a `StateCell`, which
//! is a Leptos `RwSignal` in the UI and an `Rc<RefCell<_>>` in tests.
//!
//! TRADE-OFFS
//! ==========
//! In-flight fetches are never cancelled. Whether a late result for an older
//! selection may overwrite newer state is an explicit `SupersedePolicy`:
//! `LastArrival` keeps the unguarded last-write-wins behavior, while
//! `LatestSelection` drops results whose cycle has been superseded.

#[cfg(test)]
#[path = "view_state_test.rs"]
mod view_state_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::{RwSignal, Update};

use crate::net::FetchError;
use crate::net::types::Entity;

/// Sub-state of [`ViewState::Ready`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    HasData,
    Empty,
}

/// Where a page is in its fetch sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    LoadingParents,
    LoadingChildren,
    Ready(Readiness),
    /// The most recent fetch was rejected. Pages render this like `Ready(Empty)`.
    Error(FetchError),
}

/// How late child results from a superseded selection are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupersedePolicy {
    /// Whatever resolves last is stored, even for an older selection.
    #[default]
    LastArrival,
    /// Results are stored only if their cycle is still the newest one.
    LatestSelection,
}

/// Identifies one dependent-fetch cycle for one selected parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildRequest {
    pub parent_id: String,
    pub cycle: u64,
}

/// Decides whether a fetched child bundle counts as data or as empty.
pub trait HasChildren {
    fn has_children(&self) -> bool;
}

impl<T> HasChildren for Vec<T> {
    fn has_children(&self) -> bool {
        !self.is_empty()
    }
}

/// Page state for one selectable parent list plus its dependent collections.
#[derive(Clone, Debug)]
pub struct SelectionState<P, C> {
    parents: Vec<P>,
    selected: Option<String>,
    children: Option<C>,
    view: ViewState,
    cycle: u64,
    failures: u32,
    policy: SupersedePolicy,
}

impl<P, C> Default for SelectionState<P, C> {
    fn default() -> Self {
        Self::new(SupersedePolicy::default())
    }
}

impl<P, C> SelectionState<P, C> {
    /// Fresh state in `LoadingParents`, as seen on first render of a page.
    #[must_use]
    pub fn new(policy: SupersedePolicy) -> Self {
        Self {
            parents: Vec::new(),
            selected: None,
            children: None,
            view: ViewState::LoadingParents,
            cycle: 0,
            failures: 0,
            policy,
        }
    }

    #[must_use]
    pub fn parents(&self) -> &[P] {
        &self.parents
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn children(&self) -> Option<&C> {
        self.children.as_ref()
    }

    /// Mutable access for local appends made by feature views.
    pub fn children_mut(&mut self) -> Option<&mut C> {
        self.children.as_mut()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Number of the newest dependent-fetch cycle (0 before the first one).
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Count of rejected fetches applied to this state.
    #[must_use]
    pub fn failures(&self) -> u32 {
        self.failures
    }

    #[must_use]
    pub fn policy(&self) -> SupersedePolicy {
        self.policy
    }

    #[must_use]
    pub fn is_loading_parents(&self) -> bool {
        self.view == ViewState::LoadingParents
    }

    #[must_use]
    pub fn is_loading_children(&self) -> bool {
        self.view == ViewState::LoadingChildren
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.view == ViewState::Ready(Readiness::HasData)
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match &self.view {
            ViewState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Enter `LoadingParents` before the parent list is requested.
    pub fn begin_parent_load(&mut self) {
        self.view = ViewState::LoadingParents;
    }

    fn start_cycle(&mut self, parent_id: String) -> ChildRequest {
        self.cycle += 1;
        self.selected = Some(parent_id.clone());
        self.view = ViewState::LoadingChildren;
        ChildRequest { parent_id, cycle: self.cycle }
    }
}

impl<P: Entity, C> SelectionState<P, C> {
    /// The parent record matching the current selection, if any.
    #[must_use]
    pub fn selected_parent(&self) -> Option<&P> {
        let id = self.selected.as_deref()?;
        self.parents.iter().find(|p| p.id() == id)
    }

    /// Store the parent list and auto-select the first parent when nothing
    /// valid is selected yet.
    ///
    /// Returns the dependent-fetch request to run, or `None` when the list is
    /// empty or the fetch was rejected.
    pub fn apply_parents(&mut self, result: Result<Vec<P>, FetchError>) -> Option<ChildRequest> {
        match result {
            Ok(parents) => {
                self.parents = parents;
                let keep = self
                    .selected
                    .as_deref()
                    .filter(|id| self.parents.iter().any(|p| p.id() == *id))
                    .map(str::to_owned);
                let next = keep.or_else(|| self.parents.first().map(|p| p.id().to_owned()));
                match next {
                    Some(id) => Some(self.start_cycle(id)),
                    None => {
                        self.selected = None;
                        self.children = None;
                        self.view = ViewState::Ready(Readiness::Empty);
                        None
                    }
                }
            }
            Err(err) => {
                self.failures += 1;
                self.view = ViewState::Error(err);
                None
            }
        }
    }

    /// Change the selection.
    ///
    /// Re-selecting the current id, or an id that is not among the fetched
    /// parents, returns `None` and starts no cycle.
    pub fn select(&mut self, parent_id: &str) -> Option<ChildRequest> {
        if self.selected.as_deref() == Some(parent_id) {
            return None;
        }
        if !self.parents.iter().any(|p| p.id() == parent_id) {
            return None;
        }
        Some(self.start_cycle(parent_id.to_owned()))
    }
}

impl<P, C: HasChildren> SelectionState<P, C> {
    /// Apply the joined result of one dependent-fetch cycle.
    ///
    /// A rejected join stores nothing from the cycle and clears previously
    /// held children. Returns `false` when the result was discarded by
    /// [`SupersedePolicy::LatestSelection`].
    pub fn apply_children(&mut self, request: &ChildRequest, result: Result<C, FetchError>) -> bool {
        if self.policy == SupersedePolicy::LatestSelection && request.cycle != self.cycle {
            return false;
        }
        match result {
            Ok(children) => {
                let readiness = if children.has_children() { Readiness::HasData } else { Readiness::Empty };
                self.children = Some(children);
                self.view = ViewState::Ready(readiness);
            }
            Err(err) => {
                self.failures += 1;
                self.children = None;
                self.view = ViewState::Error(err);
            }
        }
        true
    }
}

// =============================================================================
// STATE CELLS
// =============================================================================

/// Injectable handle to page state that async drivers mutate between awaits.
///
/// `update_state` returns `None` once the owning page is gone, which ends the
/// driver without touching any state.
pub trait StateCell<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

// =============================================================================
// DRIVERS
// =============================================================================

/// Parent list plus dependent collections for one page.
#[async_trait(?Send)]
pub trait DependentSource {
    type Parent: Entity;
    type Children: HasChildren;

    /// Noun used in diagnostics, e.g. `"campaigns"`.
    fn label(&self) -> &'static str;

    async fn list_parents(&self) -> Result<Vec<Self::Parent>, FetchError>;

    /// Fetch every dependent collection for `parent_id` as one join.
    async fn fetch_children(&self, parent_id: &str) -> Result<Self::Children, FetchError>;
}

/// Mount sequence: load parents, auto-select, then run the first cycle.
pub async fn load_parents<S, H>(source: &S, cell: &H)
where
    S: DependentSource,
    H: StateCell<SelectionState<S::Parent, S::Children>>,
{
    if cell.update_state(SelectionState::begin_parent_load).is_none() {
        return;
    }
    let result = source.list_parents().await;
    if let Err(err) = &result {
        log::error!("error loading {}: {err}", source.label());
    }
    if let Some(Some(request)) = cell.update_state(|state| state.apply_parents(result)) {
        load_children(source, cell, request).await;
    }
}

/// Run one dependent-fetch cycle and apply its joined result.
pub async fn load_children<S, H>(source: &S, cell: &H, request: ChildRequest)
where
    S: DependentSource,
    H: StateCell<SelectionState<S::Parent, S::Children>>,
{
    let result = source.fetch_children(&request.parent_id).await;
    let failure = result.as_ref().err().map(ToString::to_string);
    match cell.update_state(|state| state.apply_children(&request, result)) {
        Some(true) => {
            if let Some(err) = failure {
                log::error!("error loading {} data for '{}': {err}", source.label(), request.parent_id);
            }
        }
        Some(false) => log::debug!(
            "discarded superseded {} data for '{}' (cycle {}): {}",
            source.label(),
            request.parent_id,
            request.cycle,
            failure.as_deref().unwrap_or("ok")
        ),
        None => {}
    }
}

/// Select `parent_id` and, if the selection changed, run its cycle.
pub async fn change_selection<S, H>(source: &S, cell: &H, parent_id: &str)
where
    S: DependentSource,
    H: StateCell<SelectionState<S::Parent, S::Children>>,
{
    if let Some(Some(request)) = cell.update_state(|state| state.select(parent_id)) {
        load_children(source, cell, request).await;
    }
}

// =============================================================================
// DETAIL STATE
// =============================================================================

/// Page state for a single entity loaded by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState<T> {
    #[default]
    Loading,
    Loaded(T),
    /// The source answered but has no entity under the requested id.
    Missing,
    Failed(FetchError),
}

impl<T> DetailState<T> {
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    pub fn apply(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(item) => Self::Loaded(item),
            Err(FetchError::NotFound { .. }) => Self::Missing,
            Err(err) => Self::Failed(err),
        };
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::Loaded(item) => Some(item),
            _ => None,
        }
    }
}

/// Load one entity into a detail cell, logging a rejection once.
pub async fn load_detail<T, H, F>(cell: &H, label: &str, fetch: F)
where
    H: StateCell<DetailState<T>>,
    F: Future<Output = Result<T, FetchError>>,
{
    if cell.update_state(DetailState::begin).is_none() {
        return;
    }
    let result = fetch.await;
    match &result {
        Err(err @ FetchError::NotFound { .. }) => log::warn!("{label}: {err}"),
        Err(err) => log::error!("error loading {label}: {err}"),
        Ok(_) => {}
    }
    cell.update_state(|state| state.apply(result));
}
