pub mod notify;
pub mod providers;

pub use notify::{NotificationSink, TracingNotifier};
pub use providers::ShowProvider;
