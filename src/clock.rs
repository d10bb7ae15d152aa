use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Time source for the polling loop
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;

    /// Suspend the current task for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the system time and the tokio timer
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
