use super::odds::Odds;
use super::simulation::Simulation;
use super::table::Table;
use crate::SIMULATION_BATCH;
use crate::error::Error;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use tokio::task::JoinHandle;

/// A simulation running as a background task.
///
/// The task checks its cancel flag before every batch and yields to the
/// runtime after every batch, so cancellation lands within one batch.
/// Cancelling is a normal way to finish: `join` still returns the totals
/// accumulated so far. Dropping the handle without joining cancels the task.
pub struct Handle {
    cancel: Arc<AtomicBool>,
    task: Option<JoinHandle<Vec<Odds>>>,
}

impl Handle {
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
    /// waits for the task and returns its final totals
    pub async fn join(mut self) -> Result<Vec<Odds>, Error> {
        match self.task.take() {
            Some(task) => Ok(task.await?),
            None => Ok(Vec::new()),
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Simulation {
    /// Runs on the current tokio runtime, calling `callback` with the
    /// running totals after every batch. Without an explicit budget the
    /// task runs until cancelled.
    pub fn spawn<F>(self, mut callback: F) -> Handle
    where
        F: FnMut(&[Odds]) + Send + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();
        let mut this = self.unbounded();
        let task = tokio::spawn(async move {
            log::debug!("{:<32}{:<32}", "simulation budget", this.budget());
            loop {
                if flag.load(Ordering::Relaxed) {
                    log::debug!("{:<32}{:<32}", "simulation cancelled", this.drawn());
                    break;
                }
                match this.next() {
                    Some(snapshot) => callback(&snapshot),
                    None => break,
                }
                tokio::task::yield_now().await;
            }
            this.odds()
        });
        Handle {
            cancel,
            task: Some(task),
        }
    }
}

/// Starts a background Monte Carlo run over `table`.
///
/// `samples` caps the number of samples (unbounded when `None`) and `batch`
/// sets how many are drawn between callbacks (`SIMULATION_BATCH` when
/// `None`). Must be called from inside a tokio runtime.
pub fn simulate<F>(
    table: &Table,
    samples: Option<u64>,
    batch: Option<u64>,
    callback: F,
) -> Result<Handle, Error>
where
    F: FnMut(&[Odds]) + Send + 'static,
{
    let simulation =
        Simulation::try_from(table)?.with_batch(batch.unwrap_or(SIMULATION_BATCH));
    let simulation = match samples {
        Some(n) => simulation.with_samples(n),
        None => simulation,
    };
    Ok(simulation.spawn(callback))
}
