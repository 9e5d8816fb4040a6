//! Background tick source.
//!
//! A dedicated thread pushes a fixed [`ProgressIncrement`] into a channel at
//! a fixed period, whether or not anyone is listening. The frame loop drains
//! the channel once per frame and turns the pending ticks into a single
//! [`TimerAction::Tick`]. The thread never sees the timer itself.
//!
//! At most [`TICK_BACKLOG`] ticks wait in the channel. When no frame runs
//! to drain them, further ticks are dropped instead of piling up.
//!
//! The thread stops on its own once the receiving [`Ticker`] is dropped.

use std::{
    io,
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use eggtimer_core::ProgressIncrement;

use crate::action::{ActionRequestQueue, TimerAction};

/// Number of undelivered ticks kept before new ones are dropped.
const TICK_BACKLOG: usize = 64;

/// How often the ticker fires and how much each tick is worth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TickerConfig {
    pub(crate) interval: Duration,
    pub(crate) increment: ProgressIncrement,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(40),
            increment: ProgressIncrement::DEFAULT,
        }
    }
}

/// Errors that can occur while starting or polling the ticker.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum TickerError {
    #[display("failed to spawn ticker thread: {_0}")]
    Spawn(#[from] io::Error),
    #[display("ticker thread disconnected")]
    Disconnected,
}

/// The receiving end of the tick channel.
#[derive(Debug)]
pub(crate) struct Ticker {
    receiver: mpsc::Receiver<ProgressIncrement>,
    disconnected: bool,
}

/// Hands one tick to the channel, dropping it if the backlog is full.
///
/// Returns `false` once the receiver is gone.
fn offer_tick(tx: &mpsc::SyncSender<ProgressIncrement>, increment: ProgressIncrement) -> bool {
    match tx.try_send(increment) {
        Ok(()) | Err(mpsc::TrySendError::Full(_)) => true,
        Err(mpsc::TrySendError::Disconnected(_)) => false,
    }
}

impl Ticker {
    /// Starts the ticker thread.
    pub(crate) fn spawn(config: TickerConfig) -> Result<Self, TickerError> {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        let TickerConfig {
            interval,
            increment,
        } = config;
        thread::Builder::new()
            .name("eggtimer-ticker".to_owned())
            .spawn(move || {
                let mut deadline = Instant::now();
                loop {
                    // schedule against deadlines so the period does not drift
                    deadline += interval;
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                    if !offer_tick(&tx, increment) {
                        log::debug!("tick receiver dropped, stopping ticker");
                        break;
                    }
                }
            })?;
        log::debug!("ticker started: interval={interval:?}, increment={}", increment.get());
        Ok(Self::from_receiver(rx))
    }

    fn from_receiver(receiver: mpsc::Receiver<ProgressIncrement>) -> Self {
        Self {
            receiver,
            disconnected: false,
        }
    }

    /// Takes every pending tick, coalesced into one increment.
    ///
    /// Each tick is returned exactly once. Returns `Ok(None)` when nothing is
    /// pending.
    pub(crate) fn drain(&mut self) -> Result<Option<ProgressIncrement>, TickerError> {
        use mpsc::TryRecvError;

        let mut total: Option<ProgressIncrement> = None;
        loop {
            match self.receiver.try_recv() {
                Ok(tick) => {
                    total = Some(total.map_or(tick, |sum| sum.saturating_add(tick)));
                }
                Err(TryRecvError::Empty) => return Ok(total),
                Err(TryRecvError::Disconnected) => {
                    return match total {
                        Some(_) => Ok(total),
                        None => Err(TickerError::Disconnected),
                    };
                }
            }
        }
    }

    /// Queues pending ticks as a [`TimerAction::Tick`].
    ///
    /// A disconnected ticker is reported once and then left alone.
    pub(crate) fn poll(&mut self, action_queue: &mut ActionRequestQueue) {
        if self.disconnected {
            return;
        }
        match self.drain() {
            Ok(Some(increment)) => action_queue.request(TimerAction::Tick(increment).into()),
            Ok(None) => {}
            Err(err) => {
                log::warn!("{err}; the timer will no longer advance");
                self.disconnected = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    fn step(value: f32) -> ProgressIncrement {
        ProgressIncrement::new(value).unwrap()
    }

    #[test]
    fn drain_coalesces_pending_ticks_once() {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        let mut ticker = Ticker::from_receiver(rx);
        assert!(ticker.drain().unwrap().is_none());

        tx.send(step(0.25)).unwrap();
        tx.send(step(0.25)).unwrap();
        assert_eq!(ticker.drain().unwrap(), Some(step(0.5)));
        assert!(ticker.drain().unwrap().is_none());
    }

    #[test]
    fn poll_queues_a_tick_action() {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        let mut ticker = Ticker::from_receiver(rx);
        tx.send(step(0.1)).unwrap();

        let mut queue = ActionRequestQueue::default();
        ticker.poll(&mut queue);
        let actions = queue.take_all();
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::Timer(TimerAction::Tick(increment)) if increment == step(0.1)
        ));
    }

    #[test]
    fn disconnect_is_reported_after_remaining_ticks() {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        let mut ticker = Ticker::from_receiver(rx);
        tx.send(step(0.1)).unwrap();
        drop(tx);

        assert_eq!(ticker.drain().unwrap(), Some(step(0.1)));
        assert!(matches!(ticker.drain(), Err(TickerError::Disconnected)));

        let mut queue = ActionRequestQueue::default();
        ticker.poll(&mut queue);
        assert!(ticker.disconnected);
        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn backlog_is_bounded_while_nobody_drains() {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        for _ in 0..TICK_BACKLOG * 3 {
            assert!(offer_tick(&tx, step(0.001)));
        }

        let mut ticker = Ticker::from_receiver(rx);
        let mut pending = 0;
        while ticker.receiver.try_recv().is_ok() {
            pending += 1;
        }
        assert_eq!(pending, TICK_BACKLOG);
        assert!(ticker.drain().unwrap().is_none());

        // room again after draining
        assert!(offer_tick(&tx, step(0.001)));
        assert_eq!(ticker.drain().unwrap(), Some(step(0.001)));

        drop(ticker);
        assert!(!offer_tick(&tx, step(0.001)));
    }

    #[test]
    fn spawned_ticker_delivers_ticks() {
        let ticker = Ticker::spawn(TickerConfig {
            interval: Duration::from_millis(1),
            increment: step(0.001),
        })
        .unwrap();

        let first = ticker
            .receiver
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        assert_eq!(first, step(0.001));
    }
}
