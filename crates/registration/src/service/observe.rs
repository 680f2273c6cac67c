use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::utils::{Metrics, Operation, Status, TracingContext};
use tokio::time::Instant;
use tracing::{error, info, warn};

/// Span and metric bookkeeping shared by the services.
#[derive(Clone, Debug)]
pub(crate) struct Observer {
    tracer_name: &'static str,
    metrics: Metrics,
}

impl Observer {
    pub(crate) fn new(
        tracer_name: &'static str,
        metric_prefix: &str,
        component: &str,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(metric_prefix, component, registry);

        Self {
            tracer_name,
            metrics,
        }
    }

    fn tracer(&self) -> BoxedTracer {
        global::tracer(self.tracer_name)
    }

    pub(crate) fn start(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        TracingContext {
            cx: Context::current_with_span(span),
            start_time,
        }
    }

    pub(crate) fn complete(
        &self,
        tracing_ctx: &TracingContext,
        operation: Operation,
        status: Status,
        message: &str,
    ) {
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();
        let status_str = match status {
            Status::Success => "SUCCESS",
            Status::Rejected => "REJECTED",
            Status::Error => "ERROR",
        };

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        match status {
            Status::Success => info!("✅ Operation completed successfully: {message}"),
            Status::Rejected => warn!("⚠️ Operation rejected: {message}"),
            Status::Error => error!("❌ Operation failed: {message}"),
        }

        self.metrics.record(operation, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}
