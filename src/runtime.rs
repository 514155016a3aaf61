//! Background tokio runtime for network I/O
//!
//! GTK owns the main thread, so requests run on a small multi-threaded
//! runtime and their results are awaited from the GLib main context.

use tokio::runtime::{Builder, Runtime};

pub fn build_runtime() -> std::io::Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("link-shortener-net")
        .enable_all()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_runs_spawned_tasks() {
        let runtime = build_runtime().unwrap();
        let task = runtime.spawn(async { 21 * 2 });
        assert_eq!(runtime.block_on(task).unwrap(), 42);
    }
}
