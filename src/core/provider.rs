//! Status provider seam

use anyhow::Result;
use async_trait::async_trait;

use crate::snapshot::Snapshot;

/// The transport seam: one call per scan cycle returning the current tag
/// snapshot. A failed fetch is logged by the scan loop and the cycle
/// continues; it never stops the loop.
#[async_trait]
pub trait StatusProvider: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot>;
}
