//! Analysis session state
//!
//! The session is an immutable value. Each event produces a new state plus,
//! for submissions, the request the caller must send. Requests carry a
//! sequence number and only the most recent submission may land: a response
//! for any older sequence is dropped.

use thiserror::Error;

use crate::models::AnalysisResult;
use crate::presentation::DashboardView;
use crate::validation::{validate_location, EMPTY_LOCATION_MESSAGE};

/// User-facing failure message for any transport-class error
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Make sure the backend is running.";

/// Errors surfaced inline in the session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("{}", EMPTY_LOCATION_MESSAGE)]
    InvalidInput,

    /// Network failure, non-2xx status, or an unreadable payload. The cause is
    /// kept for diagnostics only.
    #[error("{}", FETCH_FAILED_MESSAGE)]
    Transport { cause: String },
}

/// Events that drive the session
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Submit { location: String },
    Succeeded { seq: u64, result: AnalysisResult },
    Failed { seq: u64, cause: String },
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestAnalysis { seq: u64, location: String },
}

/// Outcome of applying an event
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: SessionState,
    pub effect: Option<Effect>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    result: Option<AnalysisResult>,
    error: Option<SessionError>,
    in_flight: Option<u64>,
    last_issued: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::Submit { location } => self.submit(location),
            SessionEvent::Succeeded { seq, result } => self.settle(seq, |state| SessionState {
                result: Some(result),
                error: None,
                in_flight: None,
                ..state
            }),
            SessionEvent::Failed { seq, cause } => self.settle(seq, |state| SessionState {
                result: None,
                error: Some(SessionError::Transport { cause }),
                in_flight: None,
                ..state
            }),
        }
    }

    fn submit(&self, location: String) -> Transition {
        if validate_location(&location).is_err() {
            return Transition {
                state: SessionState {
                    error: Some(SessionError::InvalidInput),
                    ..self.clone()
                },
                effect: None,
            };
        }

        let seq = self.last_issued + 1;
        Transition {
            state: SessionState {
                result: None,
                error: None,
                in_flight: Some(seq),
                last_issued: seq,
            },
            effect: Some(Effect::RequestAnalysis { seq, location }),
        }
    }

    fn settle(&self, seq: u64, apply: impl FnOnce(SessionState) -> SessionState) -> Transition {
        let state = if self.in_flight == Some(seq) {
            apply(self.clone())
        } else {
            self.clone()
        };
        Transition {
            state,
            effect: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Analyzing..."
        } else {
            "Analyze"
        }
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Inline message for the current error, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// The dashboard for the current result, built on demand
    pub fn dashboard(&self) -> Option<DashboardView> {
        self.result.as_ref().map(DashboardView::from_analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SoilSnapshot, WeatherSnapshot};

    fn result(location: &str) -> AnalysisResult {
        AnalysisResult {
            weather: WeatherSnapshot {
                location: location.to_string(),
                temperature: 25.0,
                humidity: 60.0,
                rainfall: 10.0,
                description: "Clear sky".to_string(),
            },
            soil: SoilSnapshot {
                ph: 6.5,
                nitrogen: 250.0,
                phosphorus: 30.0,
                potassium: 180.0,
                organic_matter: 2.0,
                moisture: 40.0,
            },
            recommendations: vec![],
            generated_at: None,
        }
    }

    fn submit(state: &SessionState, location: &str) -> (SessionState, u64) {
        let transition = state.reduce(SessionEvent::Submit {
            location: location.to_string(),
        });
        match transition.effect {
            Some(Effect::RequestAnalysis { seq, .. }) => (transition.state, seq),
            None => panic!("expected a request for {:?}", location),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert!(!state.is_loading());
        assert_eq!(state.submit_label(), "Analyze");
        assert!(state.error().is_none());
        assert!(state.dashboard().is_none());
    }

    #[test]
    fn test_blank_submit_issues_no_request() {
        let transition = SessionState::new().reduce(SessionEvent::Submit {
            location: "   ".to_string(),
        });
        assert!(transition.effect.is_none());
        assert_eq!(transition.state.error(), Some(&SessionError::InvalidInput));
        assert_eq!(
            transition.state.error_message().as_deref(),
            Some("Please enter a location")
        );
        assert!(!transition.state.is_loading());
    }

    #[test]
    fn test_submit_sends_location_as_typed() {
        let transition = SessionState::new().reduce(SessionEvent::Submit {
            location: " Delhi ".to_string(),
        });
        assert_eq!(
            transition.effect,
            Some(Effect::RequestAnalysis {
                seq: 1,
                location: " Delhi ".to_string()
            })
        );
        assert!(transition.state.is_loading());
        assert_eq!(transition.state.submit_label(), "Analyzing...");
    }

    #[test]
    fn test_success_sets_result() {
        let (loading, seq) = submit(&SessionState::new(), "Delhi");
        let done = loading
            .reduce(SessionEvent::Succeeded {
                seq,
                result: result("Delhi"),
            })
            .state;
        assert!(!done.is_loading());
        assert!(done.error().is_none());
        assert_eq!(done.result().unwrap().weather.location, "Delhi");
        assert!(done.dashboard().is_some());
    }

    #[test]
    fn test_failure_shows_generic_message_and_clears_result() {
        let (loading, seq) = submit(&SessionState::new(), "Delhi");
        let loaded = loading
            .reduce(SessionEvent::Succeeded {
                seq,
                result: result("Delhi"),
            })
            .state;

        let (loading, seq) = submit(&loaded, "Pune");
        let failed = loading
            .reduce(SessionEvent::Failed {
                seq,
                cause: "HTTP 500".to_string(),
            })
            .state;

        assert!(failed.dashboard().is_none());
        assert_eq!(
            failed.error_message().as_deref(),
            Some("Failed to fetch data. Make sure the backend is running.")
        );
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_success_after_failure_replaces_error() {
        let (loading, seq) = submit(&SessionState::new(), "Delhi");
        let failed = loading
            .reduce(SessionEvent::Failed {
                seq,
                cause: "connection refused".to_string(),
            })
            .state;

        let (loading, seq) = submit(&failed, "Delhi");
        assert!(loading.error().is_none());
        let done = loading
            .reduce(SessionEvent::Succeeded {
                seq,
                result: result("Delhi"),
            })
            .state;
        assert!(done.error().is_none());
        assert!(done.dashboard().is_some());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let (first, first_seq) = submit(&SessionState::new(), "Delhi");
        let (second, second_seq) = submit(&first, "Mumbai");
        assert!(second_seq > first_seq);

        let after_stale = second
            .reduce(SessionEvent::Succeeded {
                seq: first_seq,
                result: result("Delhi"),
            })
            .state;
        assert!(after_stale.is_loading());
        assert!(after_stale.result().is_none());

        let after_stale_failure = after_stale
            .reduce(SessionEvent::Failed {
                seq: first_seq,
                cause: "timeout".to_string(),
            })
            .state;
        assert!(after_stale_failure.error().is_none());

        let done = after_stale_failure
            .reduce(SessionEvent::Succeeded {
                seq: second_seq,
                result: result("Mumbai"),
            })
            .state;
        assert_eq!(done.result().unwrap().weather.location, "Mumbai");
    }

    #[test]
    fn test_blank_submit_keeps_current_result() {
        let (loading, seq) = submit(&SessionState::new(), "Delhi");
        let loaded = loading
            .reduce(SessionEvent::Succeeded {
                seq,
                result: result("Delhi"),
            })
            .state;

        let rejected = loaded
            .reduce(SessionEvent::Submit {
                location: String::new(),
            })
            .state;
        assert_eq!(rejected.error(), Some(&SessionError::InvalidInput));
        assert!(rejected.result().is_some());
    }

    #[test]
    fn test_prior_state_is_untouched() {
        let initial = SessionState::new();
        let _ = initial.reduce(SessionEvent::Submit {
            location: "Delhi".to_string(),
        });
        assert!(!initial.is_loading());
    }
}
