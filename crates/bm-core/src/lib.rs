//! BrowserMind Core Engine
//!
//! This crate provides the presentation-agnostic core of the BrowserMind
//! landing experience: the phased analysis lifecycle, the synthetic
//! progress readout, and the async boundary to whatever actually produces
//! a fingerprint report.

pub mod flow;
pub mod progress;
pub mod provider;
pub mod report;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use flow::{AnalysisFlow, EpisodeId, FailureAction, Phase};
pub use progress::synthetic_progress;
pub use provider::{ResultProvider, StaticProvider};
pub use report::{Reason, Report, ScoreBand};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Timing and failure configuration for the analysis flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Elapsed readout time (ms) at which progress reaches its cap
    pub target_ms: u64,
    /// Interval (ms) between readout ticks
    pub tick_ms: u64,
    /// Delay (ms) between resolution and the Done transition
    pub settle_ms: u64,
    /// Highest percentage the readout may show before resolution
    pub progress_cap: u8,
    /// What to do when the provider fails
    pub failure: FailurePolicy,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            target_ms: 1400,
            tick_ms: 90,
            settle_ms: 250,
            progress_cap: 95,
            failure: FailurePolicy::Surface,
        }
    }
}

/// How the flow disposes of a failed analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Leave Loading and show a distinguishable error phase
    Surface,
    /// Discard the episode and return to Idle
    ResetToIdle,
    /// Re-issue the request up to `max_attempts` times, then surface
    Retry { max_attempts: u8 },
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self::Surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FlowConfig::default();
        assert_eq!(config.target_ms, 1400);
        assert_eq!(config.tick_ms, 90);
        assert_eq!(config.settle_ms, 250);
        assert_eq!(config.progress_cap, 95);
        assert_eq!(config.failure, FailurePolicy::Surface);
    }

    #[test]
    fn test_error_display() {
        let err = AnalysisError::AnalysisFailed("provider unreachable".to_string());
        assert_eq!(err.to_string(), "Analysis failed: provider unreachable");
    }
}
