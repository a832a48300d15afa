//! Application module - the activity board
//!
//! `ActivityBoard` drives the three user flows (load, signup, removal) against
//! an [`ActivitiesApi`] and draws the results on a [`BoardSurface`]. Each
//! platform supplies its own surface.

use std::time::Duration;

use crate::config::{BoardConfig, MESSAGE_HIDE_DELAY};
use crate::error::Result;
use crate::interface::ActivitiesApi;
use crate::model::dtos::{RemovalParams, SignupParams};
use crate::view::{BoardView, StatusMessage, GENERIC_ERROR, LOAD_FAILED, SIGNUP_FAILED};

#[cfg(feature = "no-wasm")]
pub mod terminal;

#[cfg(feature = "wasm")]
pub mod dom;

/// Where the board draws. Methods take `&self`; implementations own their
/// interior mutability (DOM nodes, terminal handles).
pub trait BoardSurface {
    /// Replace the list area and select options with `view`.
    fn render_board(&self, view: &BoardView);

    /// Replace the list area with a static error text.
    fn render_load_error(&self, text: &str);

    /// Show `message` now and hide it again after `hide_after`.
    fn show_message(&self, message: &StatusMessage, hide_after: Duration);

    /// Clear the signup form inputs.
    fn reset_form(&self);
}

pub struct ActivityBoard<C, S> {
    client: C,
    surface: S,
    message_hide_delay: Duration,
}

impl<C: ActivitiesApi, S: BoardSurface> ActivityBoard<C, S> {
    pub fn new(client: C, surface: S) -> Self {
        Self {
            client,
            surface,
            message_hide_delay: MESSAGE_HIDE_DELAY,
        }
    }

    /// Board using the hide delay from `config`
    pub fn with_config(client: C, surface: S, config: &BoardConfig) -> Self {
        Self::new(client, surface).with_hide_delay(config.message_hide_delay)
    }

    pub fn with_hide_delay(mut self, delay: Duration) -> Self {
        self.message_hide_delay = delay;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_parts(self) -> (C, S) {
        (self.client, self.surface)
    }

    /// First render on page ready. Handler wiring is done by the platform
    /// layer before calling this.
    pub async fn initialize(&self) {
        log::debug!("Initializing activity board");
        self.load_activities().await;
    }

    /// Fetch and redraw. Failures replace the list with an error text and are
    /// logged; they never propagate.
    pub async fn load_activities(&self) {
        if let Err(e) = self.try_load_activities().await {
            self.surface.render_load_error(LOAD_FAILED);
            log::error!("Error fetching activities: {e}");
        }
    }

    /// Fetch and redraw, handing any failure back to the caller.
    pub async fn try_load_activities(&self) -> Result<BoardView> {
        let catalog = self.client.fetch_activities().await?;
        let view = BoardView::from_catalog(&catalog);
        log::debug!("Rendering {} activities", view.cards.len());
        self.surface.render_board(&view);
        Ok(view)
    }

    /// Submit the signup form. Always ends with a visible message.
    pub async fn submit_signup(&self, email: &str, activity: &str) -> StatusMessage {
        let params = SignupParams { activity, email };

        let message = match self.client.signup(params).await {
            Ok(resp) if resp.ok() => {
                // Refresh first so the new participant is on screen with the message.
                self.load_activities().await;
                self.surface.reset_form();
                StatusMessage::success(resp.message().unwrap_or_default())
            }
            Ok(resp) => {
                log::debug!("Signup rejected with status {}", resp.status);
                StatusMessage::error(resp.detail().unwrap_or_else(|| GENERIC_ERROR.to_string()))
            }
            Err(e) => {
                log::error!("Error signing up: {e}");
                StatusMessage::error(SIGNUP_FAILED)
            }
        };

        self.surface.show_message(&message, self.message_hide_delay);
        message
    }

    /// Remove a participant and reload on success. Failures are only logged.
    pub async fn remove_participant(&self, activity: &str, email: &str) -> bool {
        let params = RemovalParams { activity, email };

        match self.client.remove_participant(params).await {
            Ok(resp) if resp.ok() => {
                self.load_activities().await;
                true
            }
            Ok(resp) => {
                log::error!("Failed to remove participant: {}", resp.body);
                false
            }
            Err(e) => {
                log::error!("Error removing participant: {e}");
                false
            }
        }
    }
}
