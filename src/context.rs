//! Shared access to the active session.
//!
//! A presentation layer usually has several widgets (the board, the status line, the
//! computer selector) that all read and drive the same game. `GameContext` hands them a
//! shared handle and refuses access when no game has been provided yet.

use crate::error::ContextError;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

/// A session shared between the widgets of one front end.
pub type SharedSession<K = StandardRandomGenerator> = Rc<RefCell<Session<K>>>;

#[derive(Debug)]
pub struct GameContext<K: RandomGenerator = StandardRandomGenerator> {
    session: Option<SharedSession<K>>,
}

impl<K: RandomGenerator> Default for GameContext<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> GameContext<K> {
    /// Creates a context without a session.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Makes `session` the active one and returns a handle to it.
    pub fn provide(&mut self, session: Session<K>) -> SharedSession<K> {
        let shared = Rc::new(RefCell::new(session));
        self.session = Some(Rc::clone(&shared));
        shared
    }

    /// Returns the active session.
    ///
    /// # Errors
    ///
    /// `ContextError::NoActiveSession` if nothing was provided.
    pub fn session(&self) -> Result<SharedSession<K>, ContextError> {
        self.session.clone().ok_or_else(|| {
            warn!("session requested outside of a game context");
            ContextError::NoActiveSession
        })
    }

    /// Removes the active session, returning it if there was one.
    pub fn withdraw(&mut self) -> Option<SharedSession<K>> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use crate::Mark;
    use crate::context::GameContext;
    use crate::error::ContextError;
    use crate::session::Session;

    #[test]
    fn missing_session_fails_fast() {
        let context: GameContext = GameContext::new();
        let error = context.session().unwrap_err();
        assert_eq!(error, ContextError::NoActiveSession);
        assert_eq!(
            error.to_string(),
            "game session accessed outside of an active game context"
        );
    }

    #[test]
    fn handles_share_one_session() {
        // arrange
        let mut context = GameContext::new();
        let board_widget = context.provide(Session::new());
        let status_widget = context.session().unwrap();

        // act
        board_widget.borrow_mut().request_move(4);

        // assert
        let status = status_widget.borrow();
        assert_eq!(status.current_player(), Mark::O);
        assert_eq!(status.message(), "Your turn O");
    }

    #[test]
    fn withdrawn_session_is_gone() {
        let mut context = GameContext::new();
        context.provide(Session::new());
        assert!(context.withdraw().is_some());
        assert_eq!(context.session().unwrap_err(), ContextError::NoActiveSession);
    }
}
