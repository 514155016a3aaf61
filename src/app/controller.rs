//! Glue between the reducer and the outside world
//!
//! `Controller` owns the current `FormState` and executes the effects the
//! reducer asks for. Network requests are handed back to the caller as a
//! future so the UI decides where it runs; clipboard writes happen inline.

use std::future::Future;
use std::sync::Arc;

use log::{debug, error, info};
use tokio::task::JoinError;

use crate::app::config::AppConfig;
use crate::app::state::{reduce, Effect, Event, FormState};
use crate::clipboard::ClipboardSink;
use crate::shortener::{ShortenClient, ShortenError};

/// Completion event for a request task that may have panicked or been
/// cancelled before producing one.
pub fn task_outcome(result: Result<Event, JoinError>) -> Event {
    match result {
        Ok(event) => event,
        Err(e) => {
            error!("Shortening task did not finish: {}", e);
            Event::RequestFailed(ShortenError::Transport(e.to_string()))
        }
    }
}

pub struct Controller<C> {
    state: FormState,
    client: Arc<C>,
    api_base: String,
}

impl<C: ShortenClient> Controller<C> {
    pub fn new(client: Arc<C>, config: &AppConfig) -> Self {
        Self {
            state: FormState::default(),
            client,
            api_base: config.api_base.clone(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    fn apply(&mut self, event: Event) -> Option<Effect> {
        debug!("Applying {:?}", event);
        let transition = reduce(&self.state, event, &self.api_base);
        if transition.state != self.state {
            debug!("Status is now {:?}", transition.state.status);
        }
        self.state = transition.state;
        transition.effect
    }

    /// Submit the raw entry text.
    ///
    /// Returns the request to run when one has to be issued. Its output is the
    /// completion event that must be passed to [`Controller::complete`].
    pub fn submit(
        &mut self,
        raw: &str,
    ) -> Option<impl Future<Output = Event> + Send + 'static> {
        let Some(Effect::Shorten { endpoint }) = self.apply(Event::Submit(raw.to_string())) else {
            return None;
        };

        debug!("Requesting {}", endpoint);
        let client = Arc::clone(&self.client);
        Some(async move {
            match client.shorten(endpoint).await {
                Ok(short) => Event::RequestSucceeded(short),
                Err(e) => Event::RequestFailed(e),
            }
        })
    }

    /// Record the outcome of a request started by [`Controller::submit`].
    pub fn complete(&mut self, event: Event) {
        match &event {
            Event::RequestSucceeded(short) => info!("Shortened to {}", short),
            Event::RequestFailed(e) => error!("Shortening failed: {}", e),
            _ => {}
        }
        self.apply(event);
    }

    /// Copy the current short link, if any, into `sink`.
    pub fn copy_result(&mut self, sink: &impl ClipboardSink) {
        let Some(Effect::CopyToClipboard(text)) = self.apply(Event::CopyRequested) else {
            return;
        };

        match sink.write_text(&text) {
            Ok(()) => {
                info!("Short URL copied to clipboard");
                self.apply(Event::Copied);
            }
            Err(e) => error!("Failed to copy to clipboard: {}", e),
        }
    }
}
