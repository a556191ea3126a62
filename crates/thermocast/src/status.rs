//! Status reporting for long-running projections.

/// Sink for human-readable status messages emitted during a projection.
///
/// Reporting is fire-and-forget: implementations must not fail, and the
/// messages never influence the pipeline outcome. The pipeline reports
/// once per phase and once after every intersection batch.
pub trait StatusSink {
    /// Receive one status message.
    fn report(&self, message: &str);
}

/// A sink that discards every message.
pub struct NullStatusSink;

impl StatusSink for NullStatusSink {
    fn report(&self, _message: &str) {}
}
