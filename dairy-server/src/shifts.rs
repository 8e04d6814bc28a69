//! Business-day rollover scheduler
//!
//! Fires at the configured `DAY_ROLLOVER` cutoff and resets the shift
//! tracker to Morning on the new business date. Entries keep landing on
//! the old date until the cutoff passes, which is how the cooperative
//! treats pre-dawn deliveries.

use chrono::NaiveTime;
use chrono_tz::Tz;
use tokio_util::sync::CancellationToken;

use crate::core::ServerState;
use crate::store::LedgerStore;
use crate::utils::time;

const RESOURCE: &str = "shifts";

/// Day rollover scheduler
///
/// Started from `ServerState::start_background_tasks()`.
pub struct DayRolloverScheduler {
    state: ServerState,
    shutdown: CancellationToken,
}

impl DayRolloverScheduler {
    pub fn new(state: ServerState, shutdown: CancellationToken) -> Self {
        Self { state, shutdown }
    }

    /// Main loop: catch-up roll at startup, then one roll per cutoff
    pub async fn run(self) {
        tracing::info!("Day rollover scheduler started");

        // The process may have been down across a cutoff
        self.roll_if_needed().await;

        loop {
            let cutoff = time::parse_cutoff(&self.state.config.day_rollover);
            let tz = self.state.config.timezone;
            let sleep_duration = Self::duration_until_next_cutoff(cutoff, tz);

            tracing::info!(
                "Next day rollover in {} minutes (cutoff={})",
                sleep_duration.as_secs() / 60,
                cutoff.format("%H:%M")
            );

            tokio::select! {
                _ = tokio::time::sleep(sleep_duration) => {
                    self.roll_if_needed().await;
                }
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Day rollover scheduler received shutdown signal");
                    return;
                }
            }
        }
    }

    /// Reset the tracker to Morning when the business date has moved on
    async fn roll_if_needed(&self) {
        let today = self.state.business_today();

        let mut tracker = match self.state.store.shift_tracker().await {
            Ok(tracker) => tracker,
            Err(e) => {
                tracing::error!("Failed to read shift tracker: {}", e);
                return;
            }
        };

        if tracker.current_date == today {
            tracing::debug!("Shift tracker already on business date {}", today);
            return;
        }

        tracker.roll_to(today);
        if let Err(e) = self.state.store.set_shift_tracker(tracker).await {
            tracing::error!("Failed to roll shift tracker: {}", e);
            return;
        }

        self.state.bump_version(RESOURCE);
        tracing::info!("Business day rolled to {} (Morning shift)", today);
    }

    /// Duration until the next cutoff in the cooperative's timezone
    fn duration_until_next_cutoff(cutoff: NaiveTime, tz: Tz) -> std::time::Duration {
        let now = chrono::Utc::now().with_timezone(&tz);
        let today = now.date_naive();

        let target_date = if now.time() >= cutoff {
            // Today's cutoff already passed, wait for tomorrow's
            today + chrono::Duration::days(1)
        } else {
            today
        };

        let target_datetime = target_date
            .and_time(cutoff)
            .and_local_timezone(tz)
            .single()
            .unwrap_or_else(|| {
                // DST edge case: fallback to +1 min
                (target_date.and_time(cutoff) + chrono::Duration::minutes(1))
                    .and_local_timezone(tz)
                    .latest()
                    .unwrap_or_else(|| {
                        // Ultimate fallback: use current time + 1 hour
                        tracing::error!("Cannot resolve local time for rollover, using fallback");
                        now + chrono::Duration::hours(1)
                    })
            });

        let duration = target_datetime.signed_duration_since(now);
        if duration.num_seconds() <= 0 {
            // Should not happen, one minute floor just in case
            std::time::Duration::from_secs(60)
        } else {
            duration
                .to_std()
                .unwrap_or(std::time::Duration::from_secs(60))
        }
    }
}
