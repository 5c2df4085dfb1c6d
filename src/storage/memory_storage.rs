use crate::{domain::Board, error::Result, storage::Storage};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage backend
///
/// Holds the board list behind a shared [`RwLock`]; clones see the same
/// data, nothing survives the process. Used for tests and for embedding
/// the store without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    boards: Arc<RwLock<Vec<Board>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_boards(&self) -> Result<Vec<Board>> {
        Ok(self.boards.read().await.clone())
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        *self.boards.write().await = boards.to_vec();
        Ok(())
    }
}
