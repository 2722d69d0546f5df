pub mod command;
pub mod filter;
pub mod query;

use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::utils::{Method, Metrics, Status as StatusUtils, TracingContext};
use tokio::time::Instant;
use tracing::{error, info};

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;

/// Span and request-metric bookkeeping shared by the product services.
#[derive(Clone, Debug)]
pub(crate) struct OperationTracer {
    name: &'static str,
    metrics: Metrics,
}

impl OperationTracer {
    /// `name` doubles as the tracer name and, with dashes swapped for
    /// underscores, as the metric prefix.
    pub(crate) fn new(name: &'static str, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, &name.replace('-', "_"));

        Self { name, metrics }
    }

    fn tracer(&self) -> BoxedTracer {
        global::tracer(self.name)
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

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    pub(crate) fn success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, true, message);
    }

    pub(crate) fn error(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, false, message);
    }

    fn complete(&self, tracing_ctx: &TracingContext, method: Method, is_success: bool, message: &str) {
        let (status_str, status) = if is_success {
            ("SUCCESS", StatusUtils::Success)
        } else {
            ("ERROR", StatusUtils::Error)
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}
