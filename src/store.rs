//! The board store: a state snapshot plus a storage backend.
//!
//! `dispatch` is the only write path. The reducer always completes the
//! transition; the subsequent save surfaces storage failures to the caller
//! without rolling the snapshot back.

use crate::{
    error::Result,
    state::{Action, State},
    storage::Storage,
};

/// Owns the current [`State`] and persists it after every transition
pub struct BoardStore<S: Storage> {
    state: State,
    storage: S,
}

impl<S: Storage> BoardStore<S> {
    /// Loads the initial state from storage
    pub async fn load(storage: S) -> Result<Self> {
        let boards = storage.load_boards().await?;
        Ok(Self {
            state: State { boards },
            storage,
        })
    }

    /// The current state snapshot
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Applies the action and saves the new snapshot
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        tracing::debug!(?action, "dispatching");
        self.state = self.state.apply(&action);
        self.storage.save_boards(&self.state.boards).await
    }
}
