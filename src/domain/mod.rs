pub mod board;
pub mod filter;
pub mod task;

pub use board::{Board, BoardId, Column, ColumnId};
pub use filter::{filter_tasks, search_columns, TaskFilter};
pub use task::{Priority, Task, TaskId, TaskPatch};
