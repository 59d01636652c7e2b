//! Named task registry
//!
//! Interactive widgets can name a task instead of holding a callback. The
//! registry maps those names to actions taking a single string parameter.
//! Entries are never removed; registering a name twice shadows rather than
//! replaces, because lookup returns the first match.

use log::debug;

/// Action invoked by a task, receiving the caller's parameter string
pub type TaskAction = Box<dyn Fn(&str)>;

struct TaskEntry {
    name: String,
    action: TaskAction,
}

/// Ordered list of named tasks
#[derive(Default)]
pub struct TaskRegistry {
    tasks: Vec<TaskEntry>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Names are not required to be unique.
    pub fn add_task(&mut self, name: impl Into<String>, action: impl Fn(&str) + 'static) {
        let name = name.into();
        debug!("Registered task '{name}'");
        self.tasks.push(TaskEntry {
            name,
            action: Box::new(action),
        });
    }

    /// Run the first task registered under `name`.
    ///
    /// Returns whether a task was found. Unknown names are ignored.
    pub fn run_task(&self, name: &str, param: &str) -> bool {
        match self.tasks.iter().find(|task| task.name == name) {
            Some(task) => {
                debug!("Running task '{name}' with param '{param}'");
                (task.action)(param);
                true
            }
            None => {
                debug!("No task named '{name}'");
                false
            }
        }
    }

    /// Whether any task is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.tasks.iter().any(|task| task.name == name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
