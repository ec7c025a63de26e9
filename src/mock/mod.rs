mod fixtures;

use std::time::Duration;

use crate::records::Record;

pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(300);

/// Deterministic demo rows standing in for a real data source.
pub trait MockRecord: Record + Sized {
    /// Row count the list loads when none is requested.
    const DEFAULT_COUNT: usize;

    /// Builds row `index` (1-based).
    fn mock(index: usize) -> Self;

    fn mock_many(count: usize) -> Vec<Self> {
        (1..=count).map(Self::mock).collect()
    }
}

/// Simulated backend: every call resolves after a fixed delay and never fails.
#[derive(Clone, Copy, Debug)]
pub struct MockBackend {
    delay: Duration,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_DELAY)
    }
}

impl MockBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn fetch<R: MockRecord>(&self, count: Option<usize>) -> Vec<R> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        R::mock_many(count.unwrap_or(R::DEFAULT_COUNT))
    }
}
