//! Pure state-transition model for the board list.
//!
//! [`State::apply`] is the single place boards change: it takes the current
//! snapshot and one [`Action`] and returns a new snapshot, never mutating
//! its input. Lookups that miss (unknown board, column, or task id) leave
//! the state unchanged rather than failing; callers that need stricter
//! validation can check ids before dispatching.

use crate::domain::{
    board::{Board, BoardId, Column, ColumnId},
    task::{Task, TaskId, TaskPatch},
};
use serde::{Deserialize, Serialize};

/// The full application state: an ordered list of boards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub boards: Vec<Board>,
}

/// The closed set of state transitions
#[derive(Debug, Clone)]
pub enum Action {
    AddBoard {
        board: Board,
    },
    DeleteBoard {
        board_id: BoardId,
    },
    AddColumn {
        board_id: BoardId,
        column: Column,
    },
    DeleteColumn {
        board_id: BoardId,
        column_id: ColumnId,
    },
    AddTask {
        board_id: BoardId,
        column_id: ColumnId,
        task: Task,
    },
    DeleteTask {
        board_id: BoardId,
        column_id: ColumnId,
        task_id: TaskId,
    },
    EditTask {
        board_id: BoardId,
        column_id: ColumnId,
        task_id: TaskId,
        patch: TaskPatch,
    },
    ReorderTask {
        board_id: BoardId,
        column_id: ColumnId,
        source_index: usize,
        destination_index: usize,
    },
}

impl State {
    /// Creates an empty state with no boards
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a board by id
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id == id)
    }

    /// Applies one action, returning the next state snapshot
    pub fn apply(&self, action: &Action) -> State {
        let mut next = self.clone();

        match action {
            Action::AddBoard { board } => {
                next.boards.push(board.clone());
            }
            Action::DeleteBoard { board_id } => {
                next.boards.retain(|b| b.id != *board_id);
            }
            Action::AddColumn { board_id, column } => {
                if let Some(board) = next.board_mut(*board_id) {
                    board.columns.push(column.clone());
                }
            }
            Action::DeleteColumn {
                board_id,
                column_id,
            } => {
                if let Some(board) = next.board_mut(*board_id) {
                    board.columns.retain(|c| c.id != *column_id);
                }
            }
            Action::AddTask {
                board_id,
                column_id,
                task,
            } => {
                if let Some(column) = next.column_mut(*board_id, *column_id) {
                    column.tasks.push(task.clone());
                }
            }
            Action::DeleteTask {
                board_id,
                column_id,
                task_id,
            } => {
                if let Some(column) = next.column_mut(*board_id, *column_id) {
                    column.tasks.retain(|t| t.id != *task_id);
                }
            }
            Action::EditTask {
                board_id,
                column_id,
                task_id,
                patch,
            } => {
                if let Some(column) = next.column_mut(*board_id, *column_id) {
                    if let Some(task) = column.tasks.iter_mut().find(|t| t.id == *task_id) {
                        patch.apply(task);
                    }
                }
            }
            Action::ReorderTask {
                board_id,
                column_id,
                source_index,
                destination_index,
            } => {
                if let Some(column) = next.column_mut(*board_id, *column_id) {
                    reorder(&mut column.tasks, *source_index, *destination_index);
                }
            }
        }

        next
    }

    fn column_mut(&mut self, board_id: BoardId, column_id: ColumnId) -> Option<&mut Column> {
        self.board_mut(board_id)
            .and_then(|b| b.column_mut(column_id))
    }
}

/// Moves the item at `from` to position `to`, shifting the items between.
///
/// Out-of-range indices make the whole operation a no-op, as does `from == to`.
fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;
    use chrono::NaiveDate;

    fn due(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, day).unwrap()
    }

    fn task(title: &str) -> Task {
        Task::new(title, Priority::Medium, "You", due(1))
    }

    /// Builds a state with one board holding one column of the given tasks
    fn single_column_state(tasks: Vec<Task>) -> (State, BoardId, ColumnId) {
        let mut board = Board::new("Sprint 1");
        let mut column = Column::new("To Do");
        column.tasks = tasks;
        let board_id = board.id;
        let column_id = column.id;
        board.columns.push(column);

        let state = State::new().apply(&Action::AddBoard { board });
        (state, board_id, column_id)
    }

    #[test]
    fn test_add_board_appends() {
        let state = State::new();
        let board = Board::new("Sprint 1");
        let next = state.apply(&Action::AddBoard {
            board: board.clone(),
        });

        assert!(state.boards.is_empty(), "input state must not change");
        assert_eq!(next.boards.len(), 1);
        assert_eq!(next.boards[0], board);
    }

    #[test]
    fn test_add_then_delete_board_round_trips() {
        let state = State::new().apply(&Action::AddBoard {
            board: Board::new("Keep"),
        });

        let board = Board::new("Ephemeral");
        let board_id = board.id;
        let added = state.apply(&Action::AddBoard { board });
        let removed = added.apply(&Action::DeleteBoard { board_id });

        assert_eq!(removed, state);
    }

    #[test]
    fn test_delete_board_keeps_others() {
        let a = Board::new("A");
        let b = Board::new("B");
        let a_id = a.id;
        let state = State::new()
            .apply(&Action::AddBoard { board: a })
            .apply(&Action::AddBoard { board: b });

        let next = state.apply(&Action::DeleteBoard { board_id: a_id });

        assert_eq!(next.boards.len(), 1);
        assert_eq!(next.boards[0].title, "B");
    }

    #[test]
    fn test_add_column_appends_last() {
        let (state, board_id, _) = single_column_state(vec![]);
        let column = Column::new("Done");
        let column_id = column.id;

        let next = state.apply(&Action::AddColumn { board_id, column });

        let board = next.board(board_id).unwrap();
        assert_eq!(board.columns.len(), 2);
        assert_eq!(board.columns.last().unwrap().id, column_id);
    }

    #[test]
    fn test_delete_column() {
        let (state, board_id, column_id) = single_column_state(vec![task("A")]);

        let next = state.apply(&Action::DeleteColumn {
            board_id,
            column_id,
        });

        assert!(next.board(board_id).unwrap().columns.is_empty());
    }

    #[test]
    fn test_add_task_appends_last() {
        let (state, board_id, column_id) = single_column_state(vec![task("A")]);
        let new_task = task("B");
        let task_id = new_task.id;

        let next = state.apply(&Action::AddTask {
            board_id,
            column_id,
            task: new_task,
        });

        let tasks = &next.board(board_id).unwrap().column(column_id).unwrap().tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.last().unwrap().id, task_id);
    }

    #[test]
    fn test_delete_task() {
        let a = task("A");
        let b = task("B");
        let a_id = a.id;
        let (state, board_id, column_id) = single_column_state(vec![a, b]);

        let next = state.apply(&Action::DeleteTask {
            board_id,
            column_id,
            task_id: a_id,
        });

        let tasks = &next.board(board_id).unwrap().column(column_id).unwrap().tasks;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "B");
    }

    #[test]
    fn test_edit_task_merges_partial_fields() {
        let t = task("A");
        let task_id = t.id;
        let original = t.clone();
        let (state, board_id, column_id) = single_column_state(vec![t]);

        let next = state.apply(&Action::EditTask {
            board_id,
            column_id,
            task_id,
            patch: TaskPatch {
                description: Some("now with details".to_string()),
                due_date: Some(due(15)),
                ..Default::default()
            },
        });

        let edited = next
            .board(board_id)
            .unwrap()
            .column(column_id)
            .unwrap()
            .task(task_id)
            .unwrap();
        assert_eq!(edited.description, "now with details");
        assert_eq!(edited.due_date, due(15));
        assert_eq!(edited.title, original.title);
        assert_eq!(edited.priority, original.priority);
        assert_eq!(edited.created_by, original.created_by);
    }

    #[test]
    fn test_reorder_task_moves_and_shifts() {
        let tasks: Vec<Task> = ["A", "B", "C", "D"].iter().map(|t| task(t)).collect();
        let (state, board_id, column_id) = single_column_state(tasks);

        let next = state.apply(&Action::ReorderTask {
            board_id,
            column_id,
            source_index: 0,
            destination_index: 2,
        });

        let titles: Vec<&str> = next
            .board(board_id)
            .unwrap()
            .column(column_id)
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_reorder_preserves_task_multiset() {
        let tasks: Vec<Task> = ["A", "B", "C"].iter().map(|t| task(t)).collect();
        let ids: Vec<TaskId> = tasks.iter().map(|t| t.id).collect();
        let (state, board_id, column_id) = single_column_state(tasks);

        let next = state.apply(&Action::ReorderTask {
            board_id,
            column_id,
            source_index: 2,
            destination_index: 0,
        });

        let reordered = &next.board(board_id).unwrap().column(column_id).unwrap().tasks;
        assert_eq!(reordered.len(), 3);
        for id in ids {
            assert!(reordered.iter().any(|t| t.id == id));
        }
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let tasks: Vec<Task> = ["A", "B"].iter().map(|t| task(t)).collect();
        let (state, board_id, column_id) = single_column_state(tasks);

        let next = state.apply(&Action::ReorderTask {
            board_id,
            column_id,
            source_index: 1,
            destination_index: 1,
        });

        assert_eq!(next, state);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let tasks: Vec<Task> = ["A", "B"].iter().map(|t| task(t)).collect();
        let (state, board_id, column_id) = single_column_state(tasks);

        let next = state.apply(&Action::ReorderTask {
            board_id,
            column_id,
            source_index: 5,
            destination_index: 0,
        });
        assert_eq!(next, state);

        let next = state.apply(&Action::ReorderTask {
            board_id,
            column_id,
            source_index: 0,
            destination_index: 5,
        });
        assert_eq!(next, state);
    }

    #[test]
    fn test_unknown_ids_are_silent_noops() {
        let (state, board_id, column_id) = single_column_state(vec![task("A")]);

        let cases = [
            Action::DeleteBoard {
                board_id: BoardId::new(),
            },
            Action::AddColumn {
                board_id: BoardId::new(),
                column: Column::new("Lost"),
            },
            Action::DeleteColumn {
                board_id,
                column_id: ColumnId::new(),
            },
            Action::AddTask {
                board_id,
                column_id: ColumnId::new(),
                task: task("Lost"),
            },
            Action::DeleteTask {
                board_id,
                column_id,
                task_id: TaskId::new(),
            },
            Action::EditTask {
                board_id,
                column_id,
                task_id: TaskId::new(),
                patch: TaskPatch {
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
            },
        ];

        for action in &cases {
            assert_eq!(state.apply(action), state, "{action:?} should be a no-op");
        }
    }

    #[test]
    fn test_end_to_end_sprint_setup() {
        let board = Board::new("Sprint 1");
        let board_id = board.id;
        let column = Column::new("To Do");
        let column_id = column.id;
        let task = Task::new("Write spec", Priority::Medium, "You", due(1));

        let state = State::new()
            .apply(&Action::AddBoard { board })
            .apply(&Action::AddColumn { board_id, column })
            .apply(&Action::AddTask {
                board_id,
                column_id,
                task,
            });

        assert_eq!(state.boards.len(), 1);
        let board = &state.boards[0];
        assert_eq!(board.title, "Sprint 1");
        assert_eq!(board.columns.len(), 1);
        let column = &board.columns[0];
        assert_eq!(column.title, "To Do");
        assert_eq!(column.tasks.len(), 1);
        assert_eq!(column.tasks[0].title, "Write spec");
        assert_eq!(column.tasks[0].priority, Priority::Medium);
    }
}
