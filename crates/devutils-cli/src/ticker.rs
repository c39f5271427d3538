//! Periodic refresh of the relative-time readout.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::debug;

/// A fixed-period ticker that runs until Ctrl-C or an optional tick limit.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    limit: Option<u64>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            limit: None,
        }
    }

    /// The 1000 ms refresh used by `time --watch`.
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    pub fn limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    /// Call `on_tick` once per period, starting one period from now.
    ///
    /// Blocks the calling thread on a current-thread runtime and returns the
    /// number of ticks delivered.
    pub fn run<F>(&self, mut on_tick: F) -> anyhow::Result<u64>
    where
        F: FnMut(u64),
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to start ticker runtime: {}", e))?;

        runtime.block_on(async {
            let mut interval = tokio::time::interval(self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately.
            interval.tick().await;

            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);

            let mut ticks = 0;
            while self.limit.map_or(true, |limit| ticks < limit) {
                tokio::select! {
                    _ = interval.tick() => {
                        ticks += 1;
                        on_tick(ticks);
                    }
                    _ = &mut ctrl_c => {
                        debug!(ticks, "ticker interrupted");
                        break;
                    }
                }
            }
            Ok(ticks)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_after_limit() {
        let mut seen = Vec::new();
        let ticks = Ticker::new(Duration::from_millis(5))
            .limit(Some(3))
            .run(|n| seen.push(n))
            .unwrap();
        assert_eq!(ticks, 3);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_limit_never_ticks() {
        let ticks = Ticker::new(Duration::from_millis(5))
            .limit(Some(0))
            .run(|_| panic!("no ticks expected"))
            .unwrap();
        assert_eq!(ticks, 0);
    }

    #[test]
    fn test_ticks_are_spaced_by_period() {
        let start = std::time::Instant::now();
        Ticker::new(Duration::from_millis(20))
            .limit(Some(2))
            .run(|_| {})
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
