//! HTTP access logging middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Access log layer type produced by [`layer`].
pub type AccessLogLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
    (),
    (),
    DefaultOnFailure,
>;

/// Creates the access log layer.
///
/// Each request gets an `INFO` span carrying method, URI and version. The
/// response line records status and latency in milliseconds; 5xx responses
/// are additionally reported at `ERROR`.
///
/// ```text
/// INFO request{method=POST uri=/links version=HTTP/1.1}: finished processing request latency=3 ms status=201
/// ```
///
/// Applied once around the whole router in [`crate::routes::router`].
pub fn layer() -> AccessLogLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_body_chunk(())
        .on_eos(())
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
