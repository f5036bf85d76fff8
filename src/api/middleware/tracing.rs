//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for every HTTP request (pages and API).
///
/// **On Request:** a span at `INFO` level with method, URI and HTTP version.
///
/// **On Response:** an `INFO` event with status code and latency in
/// milliseconds. 5xx responses additionally emit an `ERROR` event.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/?h=10&r=150&w=4&p=5000 version=HTTP/1.1}: finished processing request latency=1 ms status=200
/// INFO request{method=GET uri=/schedule version=HTTP/1.1}: finished processing request latency=0 ms status=307
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
