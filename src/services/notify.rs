/// Sink for user-facing submission signals
///
/// The workflow emits exactly two signals: a submission succeeded, or a
/// submission was blocked on an incomplete form. Whatever toast mechanism
/// fronts the workflow is opaque; implementations decide how the messages
/// reach the user.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn success(&self, message: &str);
    fn blocked(&self, message: &str);
}

/// Notification sink that writes to the tracing pipeline
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(message, "Submission succeeded");
    }

    fn blocked(&self, message: &str) {
        tracing::warn!(message, "Submission blocked");
    }
}
