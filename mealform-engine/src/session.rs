use mealform_core::error::FailureKind;
use mealform_core::types::{MenuRequest, WeeklyMenu};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,

    // Fixed, localized text for the error banner.
    pub message: String,

    // Raw cause for logs. Never rendered.
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Loading,
    Success(WeeklyMenu),
    Failed(Failure),
}

/// Immutable snapshot of one form session.
///
/// The controller swaps in a fresh snapshot on every transition, so a reader
/// holding an `Arc<SessionState>` never sees a half-applied update. The menu
/// and the failure live inside the status itself and cannot coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    ingredients_text: String,
    allow_extras: bool,
    phase: Phase,
    submission: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients_text(&self) -> &str {
        &self.ingredients_text
    }

    pub fn allow_extras(&self) -> bool {
        self.allow_extras
    }

    pub fn status(&self) -> SessionStatus {
        match self.phase {
            Phase::Idle => SessionStatus::Idle,
            Phase::Loading => SessionStatus::Loading,
            Phase::Success(_) => SessionStatus::Success,
            Phase::Failed(_) => SessionStatus::Failed,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn menu(&self) -> Option<&WeeklyMenu> {
        match &self.phase {
            Phase::Success(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match &self.phase {
            Phase::Failed(f) => Some(f),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure().map(|f| f.kind)
    }

    /// Id of the most recent submit; 0 before the first one.
    pub fn submission(&self) -> u64 {
        self.submission
    }

    pub(crate) fn with_ingredients(&self, text: String) -> Self {
        Self {
            ingredients_text: text,
            ..self.clone()
        }
    }

    pub(crate) fn with_extras_toggled(&self) -> Self {
        Self {
            allow_extras: !self.allow_extras,
            ..self.clone()
        }
    }

    /// Enters `Loading` under a new submission id and captures the payload.
    pub(crate) fn begin_submit(&self) -> (Self, MenuRequest) {
        let request = MenuRequest {
            ingredients: self.ingredients_text.clone(),
            allow_extras: self.allow_extras,
        };
        let next = Self {
            ingredients_text: self.ingredients_text.clone(),
            allow_extras: self.allow_extras,
            phase: Phase::Loading,
            submission: self.submission.wrapping_add(1),
        };
        (next, request)
    }

    pub(crate) fn succeeded(&self, menu: WeeklyMenu) -> Self {
        self.with_phase(Phase::Success(menu))
    }

    pub(crate) fn failed(&self, failure: Failure) -> Self {
        self.with_phase(Phase::Failed(failure))
    }

    fn with_phase(&self, phase: Phase) -> Self {
        Self {
            ingredients_text: self.ingredients_text.clone(),
            allow_extras: self.allow_extras,
            phase,
            submission: self.submission,
        }
    }
}

/// How a single `submit()` call ended from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(FailureKind),
    // A newer submit started first; this result was discarded.
    Superseded,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealform_core::types::Meal;

    fn failure() -> Failure {
        Failure {
            kind: FailureKind::Service,
            message: "nope".into(),
            detail: "status 500".into(),
        }
    }

    #[test]
    fn fresh_state_is_idle_and_empty() {
        let s = SessionState::new();
        assert_eq!(s.status(), SessionStatus::Idle);
        assert_eq!(s.ingredients_text(), "");
        assert!(!s.allow_extras());
        assert!(s.menu().is_none());
        assert!(s.error_message().is_none());
        assert_eq!(s.submission(), 0);
    }

    #[test]
    fn begin_submit_clears_previous_result() {
        let s = SessionState::new()
            .with_ingredients("rice".into())
            .failed(failure());
        let (loading, req) = s.begin_submit();

        assert_eq!(loading.status(), SessionStatus::Loading);
        assert!(loading.error_message().is_none());
        assert!(loading.menu().is_none());
        assert_eq!(loading.submission(), 1);
        assert_eq!(req.ingredients, "rice");
        assert!(!req.allow_extras);
    }

    #[test]
    fn success_and_failure_are_exclusive() {
        let menu = WeeklyMenu::new().with_day("Monday", vec![Meal::new("A", ["x"], "p")]);
        let ok = SessionState::new().succeeded(menu.clone());
        assert_eq!(ok.menu(), Some(&menu));
        assert!(ok.error_message().is_none());

        let failed = ok.failed(failure());
        assert!(failed.menu().is_none());
        assert_eq!(failed.error_message(), Some("nope"));
        assert_eq!(failed.failure_kind(), Some(FailureKind::Service));
    }

    #[test]
    fn input_edits_keep_status() {
        let (loading, _) = SessionState::new().begin_submit();
        let edited = loading.with_ingredients("beans".into()).with_extras_toggled();
        assert!(edited.is_loading());
        assert_eq!(edited.submission(), loading.submission());
        assert!(edited.allow_extras());
    }
}
