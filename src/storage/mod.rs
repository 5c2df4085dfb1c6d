use crate::{domain::Board, error::Result};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;

pub mod memory_storage;

/// Storage trait for persisting the full board list
///
/// The persisted layout is a single JSON array of boards, read once at
/// startup and overwritten wholesale after every state transition.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Loads the board list, or an empty list when no prior state exists
    async fn load_boards(&self) -> Result<Vec<Board>>;

    /// Saves the full board list, replacing whatever was stored before
    async fn save_boards(&self, boards: &[Board]) -> Result<()>;
}
