//! Fire-and-forget execution of child click handlers.
//!
//! ```text
//!   check_buttons ──> ClickDispatcher::dispatch ──┬──> [thread per click]      (Spawn)
//!                      (never blocks)             └──> [queue] ──> [worker]    (Queue)
//! ```
//!
//! Neither mode hands back a completion handle. `Spawn` gives every click
//! its own thread, so handlers may overlap. `Queue` runs handlers one at a
//! time on a single worker while submission stays non-blocking. Handlers
//! are not isolated from each other: see [`Control::click`].

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DispatchConfig;
use crate::geometry::Point;
use crate::window::Control;

/// How click handlers are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// One detached thread per click.
    #[default]
    Spawn,
    /// Unbounded queue drained by one dedicated worker thread.
    Queue,
}

/// Dispatcher counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Clicks handed to the dispatcher.
    pub submitted: u64,
    /// Clicks lost because a thread could not be spawned or the worker is gone.
    pub failed: u64,
}

/// A click waiting to run.
struct ClickJob {
    control: Arc<dyn Control>,
    at: Point,
}

impl ClickJob {
    fn run(self) {
        self.control.click(self.at);
    }
}

/// Executes control click handlers off the frame loop.
pub struct ClickDispatcher {
    mode: DispatchMode,
    thread_name: String,
    queue: Option<Sender<ClickJob>>,
    stats: Arc<Mutex<DispatchStats>>,
}

impl ClickDispatcher {
    /// Creates a dispatcher. In queue mode the worker thread starts here.
    ///
    /// If the worker cannot be started the dispatcher falls back to
    /// thread-per-click.
    #[must_use]
    pub fn new(config: &DispatchConfig) -> Self {
        let mut dispatcher = Self {
            mode: config.mode,
            thread_name: config.thread_name.clone(),
            queue: None,
            stats: Arc::new(Mutex::new(DispatchStats::default())),
        };

        if config.mode == DispatchMode::Queue {
            let (sender, receiver) = unbounded();
            let spawned = thread::Builder::new()
                .name(format!("{}-worker", config.thread_name))
                .spawn(move || Self::worker_loop(&receiver));

            match spawned {
                // Detached: the worker exits once every sender is dropped.
                Ok(_) => dispatcher.queue = Some(sender),
                Err(e) => {
                    warn!(error = %e, "click worker failed to start, spawning per click");
                    dispatcher.mode = DispatchMode::Spawn;
                }
            }
        }

        dispatcher
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Returns a snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> DispatchStats {
        *self.stats.lock()
    }

    /// Schedules `control.click(at)` and returns immediately.
    pub fn dispatch(&self, control: Arc<dyn Control>, at: Point) {
        self.stats.lock().submitted += 1;
        let job = ClickJob { control, at };

        match &self.queue {
            Some(queue) => {
                if queue.send(job).is_err() {
                    warn!("click worker is gone, click dropped");
                    self.stats.lock().failed += 1;
                }
            }
            None => {
                let spawned = thread::Builder::new()
                    .name(self.thread_name.clone())
                    .spawn(move || job.run());
                if let Err(e) = spawned {
                    warn!(error = %e, "failed to spawn click handler");
                    self.stats.lock().failed += 1;
                }
            }
        }
    }

    /// Queue worker main loop.
    fn worker_loop(receiver: &Receiver<ClickJob>) {
        debug!("click worker started");
        for job in receiver {
            job.run();
        }
        debug!("click worker stopped");
    }
}

impl std::fmt::Debug for ClickDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickDispatcher")
            .field("mode", &self.mode)
            .field("thread_name", &self.thread_name)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::window::Button;
    use std::time::Duration;

    fn config(mode: DispatchMode) -> DispatchConfig {
        DispatchConfig {
            mode,
            ..DispatchConfig::default()
        }
    }

    fn recording_button() -> (Arc<dyn Control>, Receiver<Point>) {
        let (tx, rx) = unbounded();
        let button = Button::new("record", Rect::new(0.0, 0.0, 10.0, 10.0), move |at| {
            let _ = tx.send(at);
        });
        (Arc::new(button), rx)
    }

    #[test]
    fn test_spawn_mode_runs_handler() {
        let dispatcher = ClickDispatcher::new(&config(DispatchMode::Spawn));
        let (control, rx) = recording_button();

        dispatcher.dispatch(control, Point::new(1.0, 2.0));

        let at = rx.recv_timeout(Duration::from_secs(5)).expect("handler ran");
        assert_eq!(at, Point::new(1.0, 2.0));
        assert_eq!(dispatcher.stats().submitted, 1);
        assert_eq!(dispatcher.stats().failed, 0);
    }

    #[test]
    fn test_queue_mode_preserves_order() {
        let dispatcher = ClickDispatcher::new(&config(DispatchMode::Queue));
        assert_eq!(dispatcher.mode(), DispatchMode::Queue);
        let (control, rx) = recording_button();

        for i in 0..10u8 {
            dispatcher.dispatch(Arc::clone(&control), Point::new(f32::from(i), 0.0));
        }

        for i in 0..10u8 {
            let at = rx.recv_timeout(Duration::from_secs(5)).expect("handler ran");
            assert_eq!(at.x, f32::from(i));
        }
        assert_eq!(
            dispatcher.stats(),
            DispatchStats {
                submitted: 10,
                failed: 0
            }
        );
    }
}
