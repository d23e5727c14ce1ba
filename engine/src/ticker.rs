//! Playback ticker: a cancellable repeating timer on the tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// One timer firing, tagged with the generation that started the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTick {
    pub generation: u64,
}

/// Owns at most one running timer task.
///
/// `start` cancels any previous task before spawning, so two tickers are never
/// alive at once. The task is aborted on `stop` and on drop.
#[derive(Debug)]
pub struct PlaybackTicker {
    period: Duration,
    tx: mpsc::UnboundedSender<PlaybackTick>,
    task: Option<JoinHandle<()>>,
}

impl PlaybackTicker {
    #[must_use]
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<PlaybackTick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let ticker = Self {
            period,
            tx,
            task: None,
        };
        (ticker, rx)
    }

    pub fn start(&mut self, generation: u64) {
        self.stop();

        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(generation, "No async runtime; playback ticker not started");
            return;
        };

        let tx = self.tx.clone();
        let period = self.period;
        self.task = Some(handle.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(PlaybackTick { generation }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, period_ms = period.as_millis(), "Playback ticker started");
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Playback ticker stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for PlaybackTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
