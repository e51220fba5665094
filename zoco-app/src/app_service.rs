//! AppService — wires the domain services to the state stores.
//!
//! AppService owns the `ApiClient`, the `TokenStore`, and the three stores,
//! and exposes one method per user-level action. Every async action follows
//! the same shape: take a ticket from the store's status machine, call the
//! service, feed the result back through a ticketed transition. Tickets make
//! overlapping dispatches safe for hosts that run actions concurrently:
//! a stale response is discarded instead of overwriting newer state.
//!
//! The bearer token for authenticated calls is read from the session store
//! at dispatch time, never cached in the client, so a logout/login between
//! dispatches cannot attach the wrong credential.

use tracing::{error, info, warn};

use crate::convert::{advert_from_wire, query_from_filters};
use zoco_core::services::{self, NewAdvert};
use zoco_core::{ApiClient, Config, TokenStore};
use zoco_ui::{AdvertFilters, AdvertsState, SessionState, TagsState};

/// Login form data.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Durable persistence ("remember me") vs ephemeral session.
    pub remember_me: bool,
}

/// Owns the stores and coordinates the async flows against the API.
pub struct AppService {
    client: ApiClient,
    tokens: TokenStore,
    pub session: SessionState,
    pub adverts: AdvertsState,
    pub tags: TagsState,
    bootstrapped: bool,
}

impl AppService {
    pub fn new(config: &Config) -> Self {
        Self::with_parts(ApiClient::from_config(config), TokenStore::from_config(config))
    }

    pub fn with_parts(client: ApiClient, tokens: TokenStore) -> Self {
        Self {
            client,
            tokens,
            session: SessionState::default(),
            adverts: AdvertsState::default(),
            tags: TagsState::default(),
            bootstrapped: false,
        }
    }

    /// Current bearer token, read at dispatch time.
    fn bearer(&self) -> Option<String> {
        self.session.token().map(str::to_string)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Restore a persisted session at startup, durable tier first.
    ///
    /// Runs at most once per process; later calls are a warned no-op. An
    /// absent token is not a real error — the store records the sentinel
    /// "Please login" so the view can route to the login form.
    pub fn bootstrap_session(&mut self) {
        if self.bootstrapped {
            warn!("bootstrap_session called twice, ignoring");
            return;
        }
        self.bootstrapped = true;

        let ticket = self.session.begin();
        match self.tokens.load() {
            Some(token) => {
                info!("Restored persisted session");
                self.session.bootstrap_succeeded(ticket, token);
            }
            None => {
                self.session.auth_failed(ticket, "Please login");
            }
        }
    }

    /// Exchange credentials for a token, persist it to the tier chosen by
    /// `remember_me`, and authenticate the session.
    ///
    /// On failure the underlying detail is logged and only the generic
    /// "Login failed" reaches the store.
    pub async fn login(&mut self, credentials: Credentials) {
        let ticket = self.session.begin();
        match services::login(&self.client, &credentials.email, &credentials.password).await {
            Ok(resp) => {
                if let Err(e) = self.tokens.save(&resp.access_token, credentials.remember_me) {
                    warn!("Failed to persist session token: {e}");
                }
                info!("Logged in as {}", credentials.email);
                self.session
                    .login_succeeded(ticket, resp.access_token, credentials.email);
            }
            Err(e) => {
                error!("Login failed: {e}");
                self.session.auth_failed(ticket, "Login failed");
            }
        }
    }

    /// Clear both persisted token tiers and reset the session. Local-only;
    /// always succeeds from the view's perspective.
    pub fn logout(&mut self) {
        if let Err(e) = self.tokens.clear() {
            warn!("Failed to clear persisted token: {e}");
        }
        self.session.logged_out();
        info!("Logged out");
    }

    // =========================================================================
    // Adverts
    // =========================================================================

    /// Fetch the listing collection using the store's current filters.
    pub async fn fetch_adverts(&mut self) {
        let ticket = self.adverts.begin_fetch();
        let query = query_from_filters(&self.adverts.filters);
        match services::get_adverts(&self.client, &query).await {
            Ok(wire) => {
                let items = wire.into_iter().map(advert_from_wire).collect();
                self.adverts.fetch_succeeded(ticket, items);
            }
            Err(e) => {
                error!("Failed to fetch adverts: {e}");
                self.adverts.fetch_failed(ticket, e.to_string());
            }
        }
    }

    /// Fetch one listing into the detail selection.
    pub async fn fetch_advert_detail(&mut self, id: &str) {
        let ticket = self.adverts.begin_fetch();
        let token = self.bearer();
        match services::get_advert_by_id(&self.client, token.as_deref(), id).await {
            Ok(wire) => {
                self.adverts.detail_succeeded(ticket, advert_from_wire(wire));
            }
            Err(e) => {
                error!("Failed to fetch advert {id}: {e}");
                self.adverts.fetch_failed(ticket, e.to_string());
            }
        }
    }

    /// Create a listing; on success it is prepended to the collection
    /// without a re-fetch.
    pub async fn create_advert(&mut self, payload: NewAdvert) {
        let ticket = self.adverts.begin_create();
        let token = self.bearer();
        match services::create_advert(&self.client, token.as_deref(), &payload).await {
            Ok(wire) => {
                info!("Created advert {}", wire.id);
                self.adverts.create_succeeded(ticket, advert_from_wire(wire));
            }
            Err(e) => {
                error!("Failed to create advert: {e}");
                self.adverts.create_failed(ticket, e.to_string());
            }
        }
    }

    /// Delete a listing by id.
    pub async fn delete_advert(&mut self, id: &str) {
        let ticket = self.adverts.begin_delete();
        let token = self.bearer();
        match services::delete_advert_by_id(&self.client, token.as_deref(), id).await {
            Ok(()) => {
                info!("Deleted advert {id}");
                self.adverts.delete_succeeded(ticket, id);
            }
            Err(e) => {
                error!("Failed to delete advert {id}: {e}");
                self.adverts.delete_failed(ticket, e.to_string());
            }
        }
    }

    pub fn set_filters(&mut self, filters: AdvertFilters) {
        self.adverts.set_filters(filters);
    }

    pub fn clear_filters(&mut self) {
        self.adverts.clear_filters();
    }

    pub fn set_page(&mut self, page: u32) {
        self.adverts.set_page(page);
    }

    // =========================================================================
    // Tags
    // =========================================================================

    /// Fetch the server's tag vocabulary.
    pub async fn fetch_tags(&mut self) {
        let ticket = self.tags.begin_fetch();
        match services::get_available_tags(&self.client).await {
            Ok(tags) => {
                self.tags.fetch_succeeded(ticket, tags);
            }
            Err(e) => {
                error!("Failed to fetch tags: {e}");
                self.tags.fetch_failed(ticket, e.to_string());
            }
        }
    }
}
