//! Session state store.

use crate::display_types::UserIdentity;
use crate::status::{AsyncOp, OpTicket};

/// Auth session state.
///
/// The token is private and "is authenticated" is computed from it, so the
/// invariant `is_authenticated == (token != None)` holds in every reachable
/// state by construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
    /// Identity of the logged-in user; None after a bootstrap, which only
    /// recovers a token.
    pub user: Option<UserIdentity>,
    /// Where to navigate after a successful login.
    pub redirect_path: Option<String>,
    /// Status of the current auth operation (bootstrap, login, or logout).
    pub op: AsyncOp,
}

impl SessionState {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn begin(&mut self) -> OpTicket {
        self.op.begin()
    }

    /// A persisted token was found at startup. Identity stays unknown.
    pub fn bootstrap_succeeded(&mut self, ticket: OpTicket, token: String) -> bool {
        if !self.op.succeed(ticket) {
            return false;
        }
        self.token = Some(token);
        self.user = None;
        true
    }

    /// Login resolved; identity comes from the request email.
    pub fn login_succeeded(&mut self, ticket: OpTicket, token: String, email: String) -> bool {
        if !self.op.succeed(ticket) {
            return false;
        }
        self.token = Some(token);
        self.user = Some(UserIdentity { email });
        self.redirect_path = None;
        true
    }

    /// Bootstrap or login failed. Always ends unauthenticated: a failed auth
    /// operation never leaves a token behind.
    pub fn auth_failed(&mut self, ticket: OpTicket, message: impl Into<String>) -> bool {
        if !self.op.fail(ticket, message) {
            return false;
        }
        self.token = None;
        self.user = None;
        true
    }

    /// Local logout. Succeeds unconditionally — it only mutates local state.
    pub fn logged_out(&mut self) {
        self.op.settle_local();
        self.token = None;
        self.user = None;
        self.redirect_path = None;
    }

    pub fn set_redirect_path(&mut self, path: Option<String>) {
        self.redirect_path = path;
    }

    pub fn clear_error(&mut self) {
        self.op.clear_error();
    }
}
