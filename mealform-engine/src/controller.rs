use crate::session::{Failure, SessionState, SubmitOutcome};
use crate::traits::MenuService;
use crate::view::{ViewModel, render};
use futures_util::FutureExt;
use mealform_core::config::ClientConfig;
use mealform_core::error::FailureKind;
use mealform_core::locale::Locale;
use mealform_core::types::{MenuRequest, WeeklyMenu};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub timeout: Duration,
    pub locale: Locale,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for ControllerOptions {
    fn from(cfg: &ClientConfig) -> Self {
        Self {
            timeout: cfg.timeout(),
            locale: cfg.locale,
        }
    }
}

struct Shared {
    service: Arc<dyn MenuService>,
    options: ControllerOptions,
    state: watch::Sender<Arc<SessionState>>,

    // Last task started by `spawn_submit`, so a newer one can abort it.
    background: Mutex<Option<JoinHandle<SubmitOutcome>>>,
}

/// Owns one form session and is its only writer.
///
/// Re-entrant submits are last-submitted-wins: every `submit()` takes a new
/// submission id, and a response is applied only while its id is still the
/// current one. Older responses are dropped on arrival.
#[derive(Clone)]
pub struct FormSessionController {
    shared: Arc<Shared>,
}

impl FormSessionController {
    pub fn new(service: Arc<dyn MenuService>, options: ControllerOptions) -> Self {
        let (state, _rx) = watch::channel(Arc::new(SessionState::new()));
        Self {
            shared: Arc::new(Shared {
                service,
                options,
                state,
                background: Mutex::new(None),
            }),
        }
    }

    pub fn options(&self) -> ControllerOptions {
        self.shared.options
    }

    pub fn state(&self) -> Arc<SessionState> {
        self.shared.state.borrow().clone()
    }

    /// Receiver marked changed after every transition.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SessionState>> {
        self.shared.state.subscribe()
    }

    pub fn render(&self) -> ViewModel {
        render(&self.state(), self.shared.options.locale)
    }

    pub fn update_ingredients(&self, text: impl Into<String>) {
        let text = text.into();
        self.shared
            .state
            .send_modify(|cur| *cur = Arc::new(cur.with_ingredients(text)));
    }

    pub fn toggle_extras(&self) {
        self.shared
            .state
            .send_modify(|cur| *cur = Arc::new(cur.with_extras_toggled()));
    }

    /// Enters `Loading` before returning, then hands back the request itself.
    ///
    /// The returned future performs the call under the configured timeout and
    /// applies its result if no newer submit has started. Dropping it before
    /// it settles fails the session instead of leaving it loading.
    pub fn submit(&self) -> impl Future<Output = SubmitOutcome> + Send + use<> {
        let mut id = 0;
        let mut request = MenuRequest::default();
        self.shared.state.send_modify(|cur| {
            let (next, req) = cur.begin_submit();
            id = next.submission();
            request = req;
            *cur = Arc::new(next);
        });
        log::info!("menu request #{id}: loading");

        // Created before the first poll so an unpolled, dropped future still settles.
        let guard = SettleGuard {
            shared: self.shared.clone(),
            id,
            armed: true,
        };
        let shared = self.shared.clone();
        async move {
            let mut guard = guard;
            let timeout = shared.options.timeout;
            let service = shared.service.clone();

            // Built inside the catch so a service that panics before its
            // first await is handled like any other panic.
            let call =
                AssertUnwindSafe(async move { service.generate(&request).await }).catch_unwind();
            let result = match tokio::time::timeout(timeout, call).await {
                Ok(Ok(Ok(menu))) => Ok(menu),
                Ok(Ok(Err(e))) => Err((e.kind(), e.to_string())),
                Ok(Err(_panic)) => {
                    Err((FailureKind::Internal, "menu service panicked".to_string()))
                }
                Err(_elapsed) => Err((
                    FailureKind::Timeout,
                    format!("no response within {timeout:?}"),
                )),
            };

            guard.armed = false;
            shared.settle(id, result)
        }
    }

    /// Runs `submit()` on the tokio runtime, aborting the previous background
    /// submit if it is still running. Must be called from within a runtime.
    pub fn spawn_submit(&self) {
        let task = tokio::spawn(self.submit());
        let prev = self
            .shared
            .background
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(prev) = prev {
            prev.abort();
        }
    }

    /// Waits until the session is not `Loading` and returns that snapshot.
    pub async fn settled(&self) -> Arc<SessionState> {
        let mut rx = self.subscribe();
        let settled = rx.wait_for(|s| !s.is_loading()).await.map(|s| s.clone());
        settled.unwrap_or_else(|_| self.state())
    }
}

impl Shared {
    fn settle(&self, id: u64, result: Result<WeeklyMenu, (FailureKind, String)>) -> SubmitOutcome {
        let locale = self.options.locale;
        let mut outcome = SubmitOutcome::Superseded;

        self.state.send_if_modified(|cur| {
            if cur.submission() != id || !cur.is_loading() {
                return false;
            }
            let next = match result {
                Ok(menu) => {
                    log::info!("menu request #{id}: {} day(s) received", menu.len());
                    outcome = SubmitOutcome::Succeeded;
                    cur.succeeded(menu)
                }
                Err((kind, detail)) => {
                    log::warn!("menu request #{id} failed ({kind:?}): {detail}");
                    outcome = SubmitOutcome::Failed(kind);
                    cur.failed(Failure {
                        kind,
                        message: locale.failure_message(kind).into(),
                        detail,
                    })
                }
            };
            *cur = Arc::new(next);
            true
        });

        if outcome == SubmitOutcome::Superseded {
            log::debug!("menu request #{id}: superseded, result discarded");
        }
        outcome
    }
}

struct SettleGuard {
    shared: Arc<Shared>,
    id: u64,
    armed: bool,
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if self.armed {
            self.shared.settle(
                self.id,
                Err((FailureKind::Internal, "submit dropped before completion".into())),
            );
        }
    }
}
