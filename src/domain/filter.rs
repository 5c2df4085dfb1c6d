use crate::domain::board::Column;
use crate::domain::task::{Priority, Task};
use chrono::NaiveDate;

/// Filter criteria for tasks within a column
///
/// All components are optional and combined with AND semantics; the default
/// (empty) filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title or description
    pub text: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl TaskFilter {
    /// Checks whether a task satisfies every set component
    pub fn matches(&self, task: &Task) -> bool {
        let text_matches = match &self.text {
            Some(query) => {
                let query = query.to_lowercase();
                task.title.to_lowercase().contains(&query)
                    || task.description.to_lowercase().contains(&query)
            }
            None => true,
        };

        let priority_matches = self
            .priority
            .map(|p| task.priority == p)
            .unwrap_or(true);

        let due_date_matches = self
            .due_date
            .map(|d| task.due_date == d)
            .unwrap_or(true);

        text_matches && priority_matches && due_date_matches
    }
}

/// Returns the tasks matching the filter, preserving column order
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Returns the columns whose title contains the query, case-insensitive
pub fn search_columns<'a>(columns: &'a [Column], query: &str) -> Vec<&'a Column> {
    let query = query.to_lowercase();
    columns
        .iter()
        .filter(|c| c.title.to_lowercase().contains(&query))
        .collect()
}
