//! Process-wide owner of the explorer client.
//!
//! The client is created on first use and shared by every tool call. The
//! slot sits behind a read/write lock: the read path hands out clones of an
//! existing client, the write path re-checks before constructing, so
//! concurrent first calls build exactly one client.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;
use tracing::info;

use super::client::ExplorerClient;
use super::error::ExplorerError;
use crate::core::config::ExplorerConfig;

#[derive(Debug)]
enum Slot {
    Idle,
    Ready(ExplorerClient),
    Closed,
}

/// Lazily initialized, explicitly released explorer client.
#[derive(Debug)]
pub struct ExplorerHandle {
    config: ExplorerConfig,
    slot: RwLock<Slot>,
    constructed: AtomicUsize,
}

impl ExplorerHandle {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            slot: RwLock::new(Slot::Idle),
            constructed: AtomicUsize::new(0),
        }
    }

    /// Get the shared client, creating it on first call.
    pub async fn client(&self) -> Result<ExplorerClient, ExplorerError> {
        {
            let slot = self.slot.read().await;
            match &*slot {
                Slot::Ready(client) => return Ok(client.clone()),
                Slot::Closed => return Err(ExplorerError::Closed),
                Slot::Idle => {}
            }
        }

        let mut slot = self.slot.write().await;
        if let Slot::Ready(client) = &*slot {
            return Ok(client.clone());
        }
        if matches!(*slot, Slot::Closed) {
            return Err(ExplorerError::Closed);
        }

        let client = ExplorerClient::new(&self.config)?;
        self.constructed.fetch_add(1, Ordering::Relaxed);
        info!(
            base_url = %client.base_url(),
            timeout_secs = self.config.timeout_secs,
            "Explorer client initialized"
        );
        *slot = Slot::Ready(client.clone());
        Ok(client)
    }

    /// Whether a live client currently exists.
    pub async fn is_initialized(&self) -> bool {
        matches!(&*self.slot.read().await, Slot::Ready(_))
    }

    /// Number of clients built over the handle's lifetime (0 or 1).
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::Relaxed)
    }

    /// Release the client and its connection pool.
    ///
    /// Later calls to [`client`](Self::client) fail with
    /// [`ExplorerError::Closed`].
    pub async fn shutdown(&self) {
        let previous = std::mem::replace(&mut *self.slot.write().await, Slot::Closed);
        if let Slot::Ready(client) = previous {
            info!(base_url = %client.base_url(), "Releasing explorer client");
            drop(client);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn handle() -> ExplorerHandle {
        ExplorerHandle::new(ExplorerConfig {
            base_url: "http://127.0.0.1:9/api/v2".to_string(),
            timeout_secs: 12,
        })
    }

    #[tokio::test]
    async fn test_lazy_construction() {
        let handle = handle();
        assert!(!handle.is_initialized().await);
        assert_eq!(handle.constructed(), 0);

        let client = handle.client().await.unwrap();
        assert!(handle.is_initialized().await);
        assert_eq!(client.timeout().as_secs(), 12);
    }

    #[tokio::test]
    async fn test_sequential_calls_share_one_client() {
        let handle = handle();
        for _ in 0..5 {
            handle.client().await.unwrap();
        }
        assert_eq!(handle.constructed(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_use_builds_once() {
        let handle = Arc::new(handle());
        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let handle = handle.clone();
                tokio::spawn(async move { handle.client().await.map(|_| ()) })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(handle.constructed(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_releases_client() {
        let handle = handle();
        handle.client().await.unwrap();
        handle.shutdown().await;

        assert!(!handle.is_initialized().await);
        assert!(matches!(handle.client().await, Err(ExplorerError::Closed)));
        assert_eq!(handle.constructed(), 1);
    }

    #[tokio::test]
    async fn test_invalid_base_url_does_not_poison_slot() {
        let handle = ExplorerHandle::new(ExplorerConfig {
            base_url: "not a url".to_string(),
            timeout_secs: 30,
        });
        assert!(handle.client().await.is_err());
        assert!(handle.client().await.is_err());
        assert_eq!(handle.constructed(), 0);
    }
}
