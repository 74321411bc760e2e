//! Who is signed in.
//!
//! The session is resolved once at start and then passed down explicitly.
//! Until the first answer arrives it is `Unresolved`; pages that depend on
//! the user wait instead of assuming an anonymous visitor.

use async_trait::async_trait;
use log::{info, warn};
use shared::CurrentUser;

use crate::error::CatalogError;

#[async_trait(?Send)]
pub trait SessionSource {
    /// `Ok(None)` when nobody is signed in
    async fn current_user(&self) -> Result<Option<CurrentUser>, CatalogError>;
    async fn logout(&self) -> Result<(), CatalogError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unresolved,
    Resolved(Option<CurrentUser>),
}

impl SessionState {
    pub fn is_resolved(&self) -> bool {
        matches!(self, SessionState::Resolved(_))
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            SessionState::Resolved(user) => user.as_ref(),
            SessionState::Unresolved => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_moderator(&self) -> bool {
        self.user().is_some_and(|u| u.is_moderator)
    }

    /// Where the "add" menu entries lead
    pub fn submit_target(&self) -> SubmitTarget {
        match self.user() {
            Some(user) if user.is_moderator => SubmitTarget::Moderate,
            Some(_) => SubmitTarget::Submit,
            None => SubmitTarget::LoginRequired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    /// Moderators review the pending queue instead of submitting
    Moderate,
    Submit,
    /// Entry shown disabled
    LoginRequired,
}

/// Ask the server who is signed in; any failure counts as anonymous
pub async fn resolve_session<S: SessionSource + ?Sized>(source: &S) -> SessionState {
    match source.current_user().await {
        Ok(Some(user)) => {
            info!("Session resolved for {}", user.email);
            SessionState::Resolved(Some(user))
        }
        Ok(None) => SessionState::Resolved(None),
        Err(e) => {
            warn!("Could not resolve session, continuing anonymously: {}", e);
            SessionState::Resolved(None)
        }
    }
}

/// Sign out; the local session ends even if the server call fails
pub async fn end_session<S: SessionSource + ?Sized>(source: &S) -> SessionState {
    if let Err(e) = source.logout().await {
        warn!("Logout request failed: {}", e);
    }
    SessionState::Resolved(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSource(Result<Option<CurrentUser>, CatalogError>);

    #[async_trait(?Send)]
    impl SessionSource for FakeSource {
        async fn current_user(&self) -> Result<Option<CurrentUser>, CatalogError> {
            self.0.clone()
        }

        async fn logout(&self) -> Result<(), CatalogError> {
            Err(CatalogError::Network("offline".to_string()))
        }
    }

    fn user(is_moderator: bool) -> CurrentUser {
        CurrentUser {
            email: "ola@example.com".to_string(),
            nickname: "ola".to_string(),
            is_moderator,
        }
    }

    #[test]
    fn test_unresolved_is_not_anonymous_yet() {
        let state = SessionState::default();
        assert!(!state.is_resolved());
        assert!(!state.is_signed_in());
    }

    #[test]
    fn test_submit_target_by_role() {
        assert_eq!(SessionState::Resolved(Some(user(true))).submit_target(), SubmitTarget::Moderate);
        assert_eq!(SessionState::Resolved(Some(user(false))).submit_target(), SubmitTarget::Submit);
        assert_eq!(SessionState::Resolved(None).submit_target(), SubmitTarget::LoginRequired);
    }

    #[tokio::test]
    async fn test_resolve_session() {
        let state = resolve_session(&FakeSource(Ok(Some(user(true))))).await;
        assert!(state.is_moderator());

        let state = resolve_session(&FakeSource(Err(CatalogError::Network("down".to_string())))).await;
        assert_eq!(state, SessionState::Resolved(None));
    }

    #[tokio::test]
    async fn test_logout_always_ends_session() {
        let source = FakeSource(Ok(Some(user(false))));
        assert_eq!(end_session(&source).await, SessionState::Resolved(None));
    }
}
