//! ==============================================================================
//! state.rs - component state and fetch cycle lifecycle
//! ==============================================================================
//!
//! purpose:
//!     holds the (data, loading, error) triple and applies fetch cycle events
//!     to it.
//!
//! lifecycle:
//!     every cycle takes a ticket from the component's Lifecycle. unmounting
//!     or starting a newer cycle invalidates older tickets, and a cycle whose
//!     ticket is no longer current finishes without touching state.
//!
//! ==============================================================================

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::fetch::fetch_dashboard_data;
use crate::model::DashboardData;
use crate::transport::ApiTransport;

// ==============================================================================
// state
// ==============================================================================

/// what happened to a fetch cycle
#[derive(Debug, Clone, PartialEq)]
pub enum CycleEvent {
    Started,
    Finished(Result<DashboardData, FetchError>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    data: Option<DashboardData>,
    loading: bool,
    error: Option<String>,
}

impl DashboardState {
    pub fn data(&self) -> Option<&DashboardData> {
        self.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn apply(&mut self, event: CycleEvent) {
        match event {
            // error stays until a cycle succeeds
            CycleEvent::Started => self.loading = true,
            CycleEvent::Finished(Ok(data)) => {
                self.data = Some(data);
                self.error = None;
                self.loading = false;
            }
            // stale data from an earlier cycle is kept
            CycleEvent::Finished(Err(e)) => {
                self.error = Some(e.user_message());
                self.loading = false;
            }
        }
    }
}

// ==============================================================================
// lifecycle guard
// ==============================================================================

/// proof that a cycle was started at a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket {
    generation: u64,
}

impl CycleTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// generation counter tied to one mounted component
#[derive(Debug, Clone)]
pub struct Lifecycle {
    generation: Arc<AtomicU64>,
    mounted: Arc<AtomicBool>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// start a new cycle, superseding any in flight
    pub fn begin(&self) -> CycleTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        CycleTicket { generation }
    }

    pub fn is_current(&self, ticket: &CycleTicket) -> bool {
        self.is_mounted() && self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// called from the component's cleanup
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

// ==============================================================================
// fetch cycle driver
// ==============================================================================

/// run one fetch cycle, handing events to `dispatch` while the ticket is current.
///
/// returns whether the result was delivered.
pub async fn run_fetch_cycle<T, F>(
    transport: &T,
    config: &ApiConfig,
    lifecycle: &Lifecycle,
    mut dispatch: F,
) -> bool
where
    T: ApiTransport + ?Sized,
    F: FnMut(CycleEvent),
{
    let ticket = lifecycle.begin();
    if !lifecycle.is_current(&ticket) {
        return false;
    }
    log::debug!("fetch cycle {} started", ticket.generation());
    dispatch(CycleEvent::Started);

    let result = fetch_dashboard_data(transport, config).await;
    if let Err(e) = &result {
        log::error!("API Error: {}", e);
    }

    if !lifecycle.is_current(&ticket) {
        log::debug!("dropping result of stale fetch cycle {}", ticket.generation());
        return false;
    }
    log::debug!("fetch cycle {} finished", ticket.generation());
    dispatch(CycleEvent::Finished(result));
    true
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use crate::transport::{ApiRequest, ApiResponse};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    fn healthy_api() -> FakeTransport {
        FakeTransport::new()
            .respond("http://localhost:8080/health", 200, r#"{"status":"ok"}"#)
            .respond("http://localhost:8080/users", 200, "[]")
            .respond(
                "http://localhost:8080/",
                200,
                r#"{"service":"Geni Firestore API","version":"v1.0.0","endpoints":{}}"#,
            )
    }

    /// records every state the component would have rendered
    fn run(
        api: &dyn ApiTransport,
        lifecycle: &Lifecycle,
        state: &RefCell<DashboardState>,
    ) -> (bool, Vec<bool>) {
        let mut loading_seen = vec![state.borrow().loading()];
        let delivered = block_on(run_fetch_cycle(
            api,
            &ApiConfig::default(),
            lifecycle,
            |event| {
                state.borrow_mut().apply(event);
                loading_seen.push(state.borrow().loading());
            },
        ));
        (delivered, loading_seen)
    }

    /// a transport that does something to the lifecycle while the request is in flight
    struct Interfering<F: Fn()> {
        inner: FakeTransport,
        during_send: F,
    }

    #[async_trait(?Send)]
    impl<F: Fn()> ApiTransport for Interfering<F> {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
            (self.during_send)();
            self.inner.send(request).await
        }
    }

    #[test]
    fn test_initial_state() {
        let state = DashboardState::default();
        assert!(!state.loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_successful_cycle() {
        let state = RefCell::new(DashboardState::default());
        let (delivered, loading_seen) = run(&healthy_api(), &Lifecycle::new(), &state);

        assert!(delivered);
        assert_eq!(loading_seen, vec![false, true, false]);

        let state = state.into_inner();
        assert!(state.error().is_none());
        let data = state.data().unwrap();
        assert_eq!(data.health, json!({ "status": "ok" }));
        assert_eq!(data.users, json!([]));
        assert_eq!(data.api_info["version"], "v1.0.0");
    }

    #[test]
    fn test_failed_cycle_sets_error_without_data() {
        let api = healthy_api().respond("http://localhost:8080/health", 503, "{}");
        let state = RefCell::new(DashboardState::default());
        let (_, loading_seen) = run(&api, &Lifecycle::new(), &state);

        assert_eq!(loading_seen, vec![false, true, false]);
        let state = state.into_inner();
        assert!(state.data().is_none());
        assert_eq!(
            state.error(),
            Some("Failed to fetch data: HTTP error! status: 503")
        );
    }

    #[test]
    fn test_network_failure_sets_error() {
        let api = healthy_api().fail("http://localhost:8080/users", "Failed to fetch");
        let state = RefCell::new(DashboardState::default());
        run(&api, &Lifecycle::new(), &state);

        let state = state.into_inner();
        assert!(!state.loading());
        assert!(state.data().is_none());
        assert_eq!(state.error(), Some("Failed to fetch data: Failed to fetch"));
    }

    #[test]
    fn test_refetch_replaces_data_and_clears_error() {
        let mut state = DashboardState::default();
        state.apply(CycleEvent::Finished(Err(FetchError::Http { status: 500 })));
        state.apply(CycleEvent::Started);
        assert!(state.error().is_some());

        let data = DashboardData::new(json!(1), json!(2), json!(3));
        state.apply(CycleEvent::Finished(Ok(data.clone())));
        assert_eq!(state.data(), Some(&data));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_refetch_keeps_stale_data() {
        let mut state = DashboardState::default();
        let data = DashboardData::new(json!(1), json!(2), json!(3));
        state.apply(CycleEvent::Finished(Ok(data.clone())));
        state.apply(CycleEvent::Started);
        state.apply(CycleEvent::Finished(Err(FetchError::Http { status: 502 })));

        assert_eq!(state.data(), Some(&data));
        assert!(state.error().is_some());
    }

    #[test]
    fn test_unmount_during_fetch_leaves_state_alone() {
        let lifecycle = Lifecycle::new();
        let teardown = lifecycle.clone();
        let api = Interfering {
            inner: healthy_api(),
            during_send: move || teardown.unmount(),
        };
        let state = RefCell::new(DashboardState::default());
        let (delivered, loading_seen) = run(&api, &lifecycle, &state);

        assert!(!delivered);
        // only the start was applied
        assert_eq!(loading_seen, vec![false, true]);
        assert!(state.borrow().data().is_none());
        assert!(state.borrow().error().is_none());
    }

    #[test]
    fn test_superseded_cycle_is_dropped() {
        let lifecycle = Lifecycle::new();
        let newer = lifecycle.clone();
        let api = Interfering {
            inner: healthy_api(),
            during_send: move || {
                newer.begin();
            },
        };
        let state = RefCell::new(DashboardState::default());
        let (delivered, _) = run(&api, &lifecycle, &state);

        assert!(!delivered);
        assert!(state.borrow().data().is_none());
    }

    #[test]
    fn test_no_cycle_after_unmount() {
        let lifecycle = Lifecycle::new();
        lifecycle.unmount();
        let state = RefCell::new(DashboardState::default());
        let (delivered, loading_seen) = run(&healthy_api(), &lifecycle, &state);

        assert!(!delivered);
        assert_eq!(loading_seen, vec![false]);
    }
}
