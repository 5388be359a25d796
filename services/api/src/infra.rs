use jee_scorecard::answer_key::{AnswerKeyStore, ShiftTable};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Process-level plumbing shared with the infrastructure endpoints.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The read-only scoring inputs, published once at startup. Every request
/// shares the same store; nothing ever writes to it after boot.
#[derive(Clone)]
pub(crate) struct ScoringState {
    pub(crate) answer_keys: Arc<AnswerKeyStore>,
    pub(crate) shifts: Arc<ShiftTable>,
}

impl ScoringState {
    pub(crate) fn new(answer_keys: AnswerKeyStore, shifts: ShiftTable) -> Self {
        Self {
            answer_keys: Arc::new(answer_keys),
            shifts: Arc::new(shifts),
        }
    }
}
