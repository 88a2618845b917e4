//! Adapter implementations for the notification sink port.

mod recording;
mod tracing_sink;

pub use recording::RecordingNotificationSink;
pub use tracing_sink::TracingNotificationSink;
