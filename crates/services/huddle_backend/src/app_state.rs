// --- File: crates/services/huddle_backend/src/app_state.rs ---
use huddle_config::AppConfig;
use huddle_tokens::TokenStore;
use std::sync::Arc;

#[cfg(feature = "gcal")]
use huddle_gcal::{handlers::DynCalendarService, GcalState};
#[cfg(feature = "slack")]
use huddle_slack::{handlers::DynChatService, SlackState};
#[cfg(feature = "zoom")]
use huddle_zoom::{handlers::DynMeetingService, ZoomState};

/// Application state shared across all routes.
///
/// Owns the single [`TokenStore`] of the process; the token route writes it
/// and the Slack routes read it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub token_store: Arc<TokenStore>,

    #[cfg(feature = "gcal")]
    pub gcal_state: Arc<GcalState>,
    #[cfg(feature = "slack")]
    pub slack_state: Arc<SlackState>,
    #[cfg(feature = "zoom")]
    pub zoom_state: Arc<ZoomState>,
}

/// Builder for AppState. Anything not set is wired to the real implementation.
pub struct AppStateBuilder {
    config: Arc<AppConfig>,
    token_store: Option<Arc<TokenStore>>,

    #[cfg(feature = "gcal")]
    calendar: Option<Arc<DynCalendarService>>,
    #[cfg(feature = "slack")]
    chat: Option<Arc<DynChatService>>,
    #[cfg(feature = "zoom")]
    meetings: Option<Arc<DynMeetingService>>,
}

impl AppStateBuilder {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            token_store: None,
            #[cfg(feature = "gcal")]
            calendar: None,
            #[cfg(feature = "slack")]
            chat: None,
            #[cfg(feature = "zoom")]
            meetings: None,
        }
    }

    /// Use an existing store instead of a fresh empty one.
    pub fn with_token_store(mut self, token_store: Arc<TokenStore>) -> Self {
        self.token_store = Some(token_store);
        self
    }

    #[cfg(feature = "gcal")]
    pub fn with_calendar_service(mut self, calendar: Arc<DynCalendarService>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    #[cfg(feature = "slack")]
    pub fn with_chat_service(mut self, chat: Arc<DynChatService>) -> Self {
        self.chat = Some(chat);
        self
    }

    #[cfg(feature = "zoom")]
    pub fn with_meeting_service(mut self, meetings: Arc<DynMeetingService>) -> Self {
        self.meetings = Some(meetings);
        self
    }

    pub fn build(self) -> AppState {
        let config = self.config;
        let token_store = self
            .token_store
            .unwrap_or_else(|| Arc::new(TokenStore::new()));

        #[cfg(feature = "gcal")]
        let gcal_state = Arc::new(match self.calendar {
            Some(calendar) => GcalState::with_service(config.clone(), calendar),
            None => GcalState::new(config.clone()),
        });

        #[cfg(feature = "slack")]
        let slack_state = Arc::new(match self.chat {
            Some(chat) => SlackState::with_service(config.clone(), token_store.clone(), chat),
            None => SlackState::new(config.clone(), token_store.clone()),
        });

        #[cfg(feature = "zoom")]
        let zoom_state = Arc::new(match self.meetings {
            Some(meetings) => ZoomState::with_service(config.clone(), meetings),
            None => ZoomState::new(config.clone()),
        });

        AppState {
            config,
            token_store,
            #[cfg(feature = "gcal")]
            gcal_state,
            #[cfg(feature = "slack")]
            slack_state,
            #[cfg(feature = "zoom")]
            zoom_state,
        }
    }
}

impl AppState {
    /// Entry point for tests that need to inject a store or fake services.
    ///
    /// ```
    /// use huddle_backend::app_state::AppState;
    /// use huddle_config::AppConfig;
    /// use huddle_tokens::TokenStore;
    /// use std::sync::Arc;
    ///
    /// let store = Arc::new(TokenStore::new());
    /// let state = AppState::builder(Arc::new(AppConfig::minimal("127.0.0.1", 0)))
    ///     .with_token_store(store.clone())
    ///     .build();
    /// assert!(Arc::ptr_eq(&state.token_store, &store));
    /// ```
    pub fn builder(config: Arc<AppConfig>) -> AppStateBuilder {
        AppStateBuilder::new(config)
    }

    /// Wires every compiled-in integration to its real upstream client.
    pub fn new(config: Arc<AppConfig>) -> Self {
        AppStateBuilder::new(config).build()
    }
}
