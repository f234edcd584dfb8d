mod sink;

pub use sink::{NotificationSink, TracingNotificationSink, TransferNotice};
