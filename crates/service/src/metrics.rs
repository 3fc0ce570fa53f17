use std::future::Future;

use crate::errors::ServiceError;

/// Await a service operation and count its outcome in `warehouse_operations_total`.
pub(crate) async fn observed<T, F>(entity: &'static str, operation: &'static str, fut: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    let res = fut.await;
    let outcome = match &res {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    common::metrics::record_operation(entity, operation, outcome);
    res
}
