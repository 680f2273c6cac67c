mod clock;
mod logs;
mod metrics;
mod otel;
mod shutdown;

pub use self::clock::{Clock, DynClock, FixedClock, SystemClock};
pub use self::logs::init_logger;
pub use self::metrics::{Metrics, Operation, Status};
pub use self::otel::{Telemetry, TracingContext};
pub use self::shutdown::shutdown_signal;
