//! Session Sweep
//!
//! Background task that deletes expired session records on a fixed
//! interval. Started once at process start, stopped through its
//! [`SweepHandle`] during shutdown.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Shortest allowed sweep interval
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic expired-session sweeper
pub struct SessionSweeper<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    session_store: Arc<S>,
    interval: Duration,
}

impl<S> SessionSweeper<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(session_store: Arc<S>, interval: Duration) -> Self {
        Self {
            session_store,
            interval: interval.max(MIN_SWEEP_INTERVAL),
        }
    }

    /// Run one sweep now
    pub async fn sweep_once(&self) -> AuthResult<u64> {
        self.session_store.delete_expired(Utc::now()).await
    }

    /// Start the sweep loop
    ///
    /// The first sweep runs immediately. A failed sweep is logged and the
    /// loop waits for the next tick.
    pub fn spawn(self) -> SweepHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            tracing::info!(
                interval_secs = self.interval.as_secs(),
                "Session sweeper started"
            );

            loop {
                tokio::select! {
                    biased;

                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        match self.sweep_once().await {
                            Ok(deleted) => {
                                tracing::info!(sessions_deleted = deleted, "Session sweep completed");
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "Session sweep failed, retrying next interval");
                            }
                        }
                    }
                }
            }

            tracing::info!("Session sweeper stopped");
        });

        SweepHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Owned handle to a running sweeper
///
/// Dropping the handle also stops the task, but without waiting for it.
pub struct SweepHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Signal the sweeper to stop and wait for it to finish
    pub async fn shutdown(self) {
        // The receiver is gone only if the task already ended
        let _ = self.shutdown.send(true);

        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "Session sweeper task ended abnormally");
        }
    }
}
