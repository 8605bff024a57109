//! Async boundary to the analysis backend

use async_trait::async_trait;

use crate::report::Report;
use crate::AnalysisResult;

/// Source of analysis reports.
///
/// The flow treats this as an opaque asynchronous boundary: one call, one
/// eventual report or failure. Implementations range from the landing
/// page's fixed-delay mock to a real scoring backend; swapping one for the
/// other leaves the state machine untouched.
#[async_trait]
pub trait ResultProvider: Send + Sync {
    async fn analyze(&self) -> AnalysisResult<Report>;
}

/// Provider that resolves immediately with a fixed report.
///
/// Useful for tests and offline rendering.
pub struct StaticProvider {
    report: Report,
}

impl StaticProvider {
    pub fn new(report: Report) -> Self {
        Self { report }
    }

    /// Provider returning the canonical demo payload
    pub fn sample() -> Self {
        Self::new(Report::sample())
    }
}

#[async_trait]
impl ResultProvider for StaticProvider {
    async fn analyze(&self) -> AnalysisResult<Report> {
        Ok(self.report.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalysisError;

    struct FailingProvider;

    #[async_trait]
    impl ResultProvider for FailingProvider {
        async fn analyze(&self) -> AnalysisResult<Report> {
            Err(AnalysisError::AnalysisFailed("no backend".to_string()))
        }
    }

    #[tokio::test]
    async fn test_static_provider_resolves_sample() {
        let provider = StaticProvider::sample();
        let report = provider.analyze().await.unwrap();
        assert_eq!(report.final_score, 71);
        assert_eq!(report.top_reasons.len(), 2);
        assert_eq!(report.tips.len(), 2);
    }

    #[tokio::test]
    async fn test_provider_is_object_safe() {
        let providers: Vec<Box<dyn ResultProvider>> = vec![
            Box::new(StaticProvider::sample()),
            Box::new(FailingProvider),
        ];
        assert!(providers[0].analyze().await.is_ok());
        assert!(providers[1].analyze().await.is_err());
    }
}
