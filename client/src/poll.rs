//! Bounded status poll for a submitted order.
//!
//! One request every 3 seconds, strictly sequential: a tick only fires
//! after the previous response has been awaited, so there is never more
//! than one in-flight poll per order. The loop stops at the first PRINTED
//! or once the 45 second budget has elapsed, whichever comes first; after
//! either, no further requests are issued. A timeout is a degraded terminal
//! state, not an error; the caller offers a manual refresh instead of
//! retrying automatically.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};

use menu::OrderStatus;

use crate::api::{Api, ClientError};

/// Anything that can answer "what is the status of this order now". The
/// HTTP [`Api`] in production; scripted sequences in tests.
pub trait StatusSource {
    fn status(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<OrderStatus, ClientError>> + Send;
}

impl StatusSource for Api {
    async fn status(&self, order_id: &str) -> Result<OrderStatus, ClientError> {
        Ok(self.get_order_status(order_id).await?.status)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PollSchedule {
    pub interval: Duration,
    pub budget: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            budget: Duration::from_secs(45),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Printed { elapsed: Duration },
    TimedOut,
}

/// `elapsed/budget` as a percentage, capped at 99 until the terminal state
/// is actually observed. The caller snaps to 100 on PRINTED.
pub fn progress_percent(elapsed: Duration, budget: Duration) -> u8 {
    if budget.is_zero() {
        return 99;
    }
    let percent = (elapsed.as_secs_f64() / budget.as_secs_f64() * 100.0).round() as u64;
    percent.min(99) as u8
}

/// Polls until PRINTED or the budget runs out. `on_progress` receives the
/// capped percentage after every poll and a final 100 on PRINTED.
pub async fn watch_order<S: StatusSource>(
    source: &S,
    order_id: &str,
    schedule: PollSchedule,
    mut on_progress: impl FnMut(u8),
) -> Result<PollOutcome, ClientError> {
    let started = Instant::now();

    // first poll after one full interval, then a fixed cadence
    let mut ticker = interval_at(started + schedule.interval, schedule.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let elapsed = started.elapsed();
        if elapsed >= schedule.budget {
            return Ok(PollOutcome::TimedOut);
        }

        match source.status(order_id).await? {
            OrderStatus::Printed => {
                on_progress(100);
                return Ok(PollOutcome::Printed {
                    elapsed: started.elapsed(),
                });
            }
            OrderStatus::SentToPrint => {
                on_progress(progress_percent(started.elapsed(), schedule.budget));
            }
        }
    }
}
