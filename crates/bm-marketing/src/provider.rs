//! Mock analysis provider
//!
//! Stands in for the real scoring backend: a fixed delay followed by the
//! canonical sample report. A network-backed [`ResultProvider`] can take
//! its place without touching the analysis flow.

use std::time::Duration;

use async_trait::async_trait;
use bm_core::{AnalysisResult, Report, ResultProvider};
use futures::channel::oneshot;
use leptos::set_timeout;

/// Delay before the mock resolves
const MOCK_DELAY_MS: u64 = 1600;

pub struct MockAnalyze {
    delay_ms: u64,
}

impl MockAnalyze {
    pub fn new() -> Self {
        Self {
            delay_ms: MOCK_DELAY_MS,
        }
    }
}

impl Default for MockAnalyze {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultProvider for MockAnalyze {
    async fn analyze(&self) -> AnalysisResult<Report> {
        sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(Report::sample())
    }
}

/// Event-loop sleep built on the browser timer
async fn sleep(duration: Duration) {
    let (tx, rx) = oneshot::channel::<()>();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        duration,
    );
    let _ = rx.await;
}
