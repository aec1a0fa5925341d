use super::actions::Action;
use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type BackgroundTaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: BackgroundTaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Runs API calls off the UI loop. Each spawned future resolves to an
/// [`Action`] that is sent back over the action channel and handled on the
/// next tick.
pub struct TaskManager {
    tasks: HashMap<BackgroundTaskId, BackgroundTask>,
    next_task_id: BackgroundTaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Sender for components that report back outside of a spawned task
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_sender.clone()
    }

    /// Spawn a background operation whose outcome is delivered as an action.
    /// `Action::None` outcomes are dropped.
    pub fn spawn<Fut>(&mut self, description: impl Into<String>, operation: Fut) -> BackgroundTaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let description = description.into();
        log::debug!("Background: spawning #{} '{}'", task_id, description);

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = operation.await;
            if !matches!(action, Action::None) {
                let _ = action_sender.send(action);
            }
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Forget finished tasks; returns how many were removed
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let finished: Vec<BackgroundTaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Background: #{} '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.elapsed()
                );
            }
        }

        finished.len()
    }

    /// Whether any spawned task is still running
    pub fn is_busy(&self) -> bool {
        self.tasks.values().any(|task| !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of tracked tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
