//! Shared Runtime

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

/// One scrape is a strictly sequential loop, so a small pool is plenty.
const WORKER_THREADS: usize = 2;

/// Runtime backing the blocking entry points.
static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .worker_threads(WORKER_THREADS)
        .thread_name("revscrape-worker")
        .enable_all()
        .build()
        .expect("failed to build scrape runtime")
});

/// Drive `future` to completion from synchronous code.
///
/// Must not be called from inside another tokio runtime.
pub fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    RUNTIME.block_on(future)
}
