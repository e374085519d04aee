//! Reporting of failed calendar builds.

use elphi_calendar_core::upstream::UpstreamError;

/// Receives upstream failures that ended a request with a 503.
///
/// Invalid identifiers and cancelled requests are never reported.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, route: &str, error: &UpstreamError);
}

/// Logs reported errors through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, route: &str, error: &UpstreamError) {
        tracing::error!(route, class = ?error.class(), error = %error, "Failed to build calendar");
    }
}
