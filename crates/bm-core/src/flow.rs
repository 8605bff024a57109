//! Analysis lifecycle state machine
//!
//! `AnalysisFlow` coordinates one user-visible analysis episode at a time:
//! button press, synthetic progress readout, result reveal. The machine is
//! clock-free; the embedding surface owns the interval and settle timers
//! and feeds elapsed time in.
//!
//! Every episode-scoped operation carries the [`EpisodeId`] it was
//! scheduled under. Operations from a superseded episode are rejected
//! rather than applied to newer state, so a readout or request that
//! outlives its episode can never corrupt the one that replaced it.

use tracing::debug;

use crate::progress::synthetic_progress;
use crate::report::Report;
use crate::{AnalysisError, FailurePolicy, FlowConfig};

/// Identifier for one Loading episode; strictly increasing per entry.
pub type EpisodeId = u64;

/// Coarse lifecycle state of the analysis panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Done,
    Failed,
}

/// What [`AnalysisFlow::fail`] decided to do with a provider error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    /// The failure belonged to a superseded episode and was dropped
    Ignored,
    /// The flow entered `Phase::Failed`
    Surfaced,
    /// The episode was discarded and the flow returned to Idle
    Discarded,
    /// A fresh episode started; the caller should re-issue the request
    Retry(EpisodeId),
}

/// State machine driving the button -> progress -> result cycle
pub struct AnalysisFlow {
    config: FlowConfig,
    phase: Phase,
    progress: u8,
    elapsed_ms: u64,
    episode: EpisodeId,
    attempts: u8,
    pending: Option<Report>,
    report: Option<Report>,
    error: Option<String>,
}

impl AnalysisFlow {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            progress: 0,
            elapsed_ms: 0,
            episode: 0,
            attempts: 0,
            pending: None,
            report: None,
            error: None,
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Synthetic readout percentage; meaningful only while Loading
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// The received report; `Some` only while `Phase::Done`
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Surfaced failure message; `Some` only while `Phase::Failed`
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn episode(&self) -> EpisodeId {
        self.episode
    }

    /// Start a new analysis episode from any phase.
    ///
    /// Re-triggering while Loading supersedes the in-flight episode: its
    /// readout ticks and eventual resolution will be rejected.
    pub fn trigger(&mut self) -> EpisodeId {
        self.attempts = 0;
        self.enter_loading()
    }

    /// Advance the synthetic readout by `dt_ms`.
    ///
    /// Returns false when the tick belongs to a superseded episode, the
    /// flow is no longer Loading, or the episode already resolved (progress
    /// stays pinned at 100). Callers should stop their timer then.
    pub fn tick(&mut self, episode: EpisodeId, dt_ms: u64) -> bool {
        if !self.is_live(episode) || self.pending.is_some() {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        self.progress =
            synthetic_progress(self.elapsed_ms, self.config.target_ms, self.config.progress_cap);
        true
    }

    /// Record the provider's report for `episode`.
    ///
    /// Progress jumps to 100 immediately; the Done transition waits for
    /// [`settle`](Self::settle). At most one resolution is accepted per
    /// episode, and stale resolutions are discarded.
    pub fn resolve(&mut self, episode: EpisodeId, report: Report) -> bool {
        if !self.is_live(episode) || self.pending.is_some() {
            debug!("Discarding stale resolution for episode {}", episode);
            return false;
        }
        self.progress = 100;
        self.pending = Some(report);
        true
    }

    /// Publish a resolved report and enter Done.
    pub fn settle(&mut self, episode: EpisodeId) -> bool {
        if !self.is_live(episode) {
            return false;
        }
        let Some(report) = self.pending.take() else {
            return false;
        };
        self.phase = Phase::Done;
        self.report = Some(report);
        debug!("Episode {} done", episode);
        true
    }

    /// Apply the configured failure policy to a provider error.
    pub fn fail(&mut self, episode: EpisodeId, error: AnalysisError) -> FailureAction {
        if !self.is_live(episode) || self.pending.is_some() {
            return FailureAction::Ignored;
        }
        match self.config.failure {
            FailurePolicy::Surface => self.surface(error),
            FailurePolicy::ResetToIdle => {
                debug!("Episode {} failed, returning to idle: {}", episode, error);
                self.reset();
                FailureAction::Discarded
            }
            FailurePolicy::Retry { max_attempts } => {
                if self.attempts < max_attempts {
                    self.attempts += 1;
                    debug!(
                        "Episode {} failed, retry {}/{}: {}",
                        episode, self.attempts, max_attempts, error
                    );
                    FailureAction::Retry(self.enter_loading())
                } else {
                    self.surface(error)
                }
            }
        }
    }

    /// Discard any result or error and return to Idle.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.progress = 0;
        self.elapsed_ms = 0;
        self.pending = None;
        self.report = None;
        self.error = None;
    }

    fn enter_loading(&mut self) -> EpisodeId {
        self.episode += 1;
        self.phase = Phase::Loading;
        self.progress = 0;
        self.elapsed_ms = 0;
        self.pending = None;
        self.report = None;
        self.error = None;
        debug!("Episode {} entering loading", self.episode);
        self.episode
    }

    fn surface(&mut self, error: AnalysisError) -> FailureAction {
        debug!("Episode {} failed: {}", self.episode, error);
        self.phase = Phase::Failed;
        self.progress = 0;
        self.pending = None;
        self.error = Some(error.to_string());
        FailureAction::Surfaced
    }

    fn is_live(&self, episode: EpisodeId) -> bool {
        self.phase == Phase::Loading && episode == self.episode
    }
}

impl Default for AnalysisFlow {
    fn default() -> Self {
        Self::new(FlowConfig::default())
    }
}
