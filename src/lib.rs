//! # Tavle Core
//!
//! Core state model and domain types for Tavle kanban board management.
//!
//! Boards hold ordered columns, columns hold ordered tasks, and every
//! mutation flows through a pure reducer ([`State::apply`]). A
//! [`BoardStore`] pairs the state snapshot with a [`Storage`] backend and
//! persists the full board list after each transition. No UI or network
//! surface lives in this crate.

pub mod domain;
pub mod error;
pub mod state;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardId, Column, ColumnId},
    filter::TaskFilter,
    task::{Priority, Task, TaskId, TaskPatch},
};
pub use error::{Result, TavleError};
pub use state::{Action, State};
pub use storage::Storage;
pub use store::BoardStore;
