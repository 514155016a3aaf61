//! Form state and the reducer driving it
//!
//! Every user action or request completion becomes an `Event`. `reduce` turns
//! the current `FormState` plus an event into the next snapshot and, when
//! something has to happen outside the form, an `Effect` for the caller to run.

use log::debug;
use url::Url;

use crate::shortener::{build_endpoint, normalize_url, ShortenError};

/// Positive outcomes shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Shortened,
    Copied,
}

/// Failure categories shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The service answered with a non-200 status
    HttpStatus,
    /// The service could not be reached
    Transport,
    /// The request could not be built
    RequestConstruction,
}

impl From<&ShortenError> for Failure {
    fn from(error: &ShortenError) -> Self {
        match error {
            ShortenError::HttpStatus { .. } => Failure::HttpStatus,
            ShortenError::Transport(_) => Failure::Transport,
            ShortenError::RequestConstruction(_) => Failure::RequestConstruction,
        }
    }
}

/// How a status should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

/// Outcome of the most recent operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Success(Notice),
    ValidationError,
    NetworkError(Failure),
}

impl Status {
    pub fn message(&self) -> &'static str {
        match self {
            Status::Idle => "",
            Status::Pending => "Shortening...",
            Status::Success(Notice::Shortened) => "URL shortened successfully!",
            Status::Success(Notice::Copied) => "Copied to clipboard!",
            Status::ValidationError => "Please enter a URL",
            Status::NetworkError(Failure::HttpStatus) => "Error: Could not shorten URL",
            Status::NetworkError(Failure::Transport) => "Error: Network or service problem",
            Status::NetworkError(Failure::RequestConstruction) => "Error shortening URL",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Status::Idle | Status::Pending => Tone::Neutral,
            Status::Success(_) => Tone::Positive,
            Status::ValidationError | Status::NetworkError(_) => Tone::Negative,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Pending)
    }
}

/// Snapshot of everything the form displays besides the user's own input
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Last short link received, empty until the first success
    pub shortened_url: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user asked to shorten the raw entry text
    Submit(String),
    RequestSucceeded(String),
    RequestFailed(ShortenError),
    CopyRequested,
    /// The clipboard accepted the short link
    Copied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a GET against the prepared endpoint
    Shorten { endpoint: Url },
    CopyToClipboard(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: FormState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Compute the next form state for `event`.
///
/// `api_base` is the shortening endpoint the normalized link is attached to.
pub fn reduce(state: &FormState, event: Event, api_base: &str) -> Transition {
    match event {
        // One request at a time
        Event::Submit(_) if state.status.is_pending() => Transition::to(state.clone()),

        Event::Submit(raw) => {
            let Some(normalized) = normalize_url(&raw) else {
                return Transition::to(FormState {
                    status: Status::ValidationError,
                    ..state.clone()
                });
            };

            match build_endpoint(api_base, &normalized) {
                Ok(endpoint) => Transition {
                    state: FormState {
                        status: Status::Pending,
                        ..state.clone()
                    },
                    effect: Some(Effect::Shorten { endpoint }),
                },
                Err(e) => {
                    let error = ShortenError::from(e);
                    debug!("Rejected submit: {}", error);
                    Transition::to(FormState {
                        status: Status::NetworkError(Failure::from(&error)),
                        ..state.clone()
                    })
                }
            }
        }

        Event::RequestSucceeded(body) => Transition::to(FormState {
            shortened_url: body,
            status: Status::Success(Notice::Shortened),
        }),

        Event::RequestFailed(error) => Transition::to(FormState {
            status: Status::NetworkError(Failure::from(&error)),
            ..state.clone()
        }),

        Event::CopyRequested if state.shortened_url.is_empty() => Transition::to(state.clone()),

        Event::CopyRequested => Transition {
            state: state.clone(),
            effect: Some(Effect::CopyToClipboard(state.shortened_url.clone())),
        },

        // The request in flight still owns the status
        Event::Copied if state.status.is_pending() => Transition::to(state.clone()),

        Event::Copied => Transition::to(FormState {
            status: Status::Success(Notice::Copied),
            ..state.clone()
        }),
    }
}
