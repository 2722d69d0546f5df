mod logs;
mod metrics;
mod object_id;
mod otel;
mod shutdown;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::object_id::generate_object_id;
pub use self::otel::{Telemetry, TracingContext};
pub use self::shutdown::shutdown_signal;
