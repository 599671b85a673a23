/// Global Tokio runtime for async HTTP operations
///
/// egui runs its own single-threaded frame loop, but reqwest requires a
/// tokio runtime. This static runtime bridges the two: handlers spawn
/// network tasks onto it from the UI thread, and results come back over the
/// app's event channel.
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     let result = some_async_operation().await;
///     let _ = event_tx.send(AppEvent::ChatResult(result)).await;
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
