//! Prometheus metrics shared by the service and server crates.
//!
//! Everything registers against the default registry so `encode_metrics`
//! sees it without extra wiring.

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "warehouse_operations_total",
        "Service operations by entity, operation and outcome",
        &["entity", "operation", "outcome"]
    )
    .expect("register operations_total")
});

/// Count one service call. `outcome` is `ok` or the error kind.
pub fn record_operation(entity: &str, operation: &str, outcome: &str) {
    OPERATIONS_TOTAL
        .with_label_values(&[entity, operation, outcome])
        .inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_operation_shows_up_in_encoded_output() {
        record_operation("category", "add", "ok");
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("warehouse_operations_total"));
        assert!(body.contains(r#"entity="category""#));
    }
}
