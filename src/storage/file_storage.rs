use crate::{domain::Board, error::Result, storage::Storage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation
///
/// Boards live in a single pretty-printed JSON file under the project's
/// `.tavle` directory; a missing file loads as an empty board list.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const TAVLE_DIR: &'static str = ".tavle";
    const BOARDS_FILE: &'static str = "boards.json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::TAVLE_DIR),
        }
    }

    fn boards_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARDS_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load_boards(&self) -> Result<Vec<Board>> {
        let boards_file = self.boards_file();

        if !boards_file.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&boards_file).await?;
        let boards: Vec<Board> = serde_json::from_str(&contents)?;

        tracing::debug!(count = boards.len(), "loaded boards from disk");
        Ok(boards)
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(boards)?;
        fs::write(self.boards_file(), json).await?;

        tracing::debug!(count = boards.len(), "saved boards to disk");
        Ok(())
    }
}
