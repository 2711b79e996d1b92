//! Host callback seam for webhook-driven status changes.
//!
//! The receiver never stores anything itself. Every status change is handed
//! to a [`StatusUpdater`] supplied by the host application. Deliveries are
//! at-least-once and are not deduplicated here, so implementations must be
//! idempotent.

mod forwarder;
mod logging;

pub use forwarder::{ForwardError, HttpStatusForwarder};
pub use logging::LoggingStatusUpdater;

use async_trait::async_trait;
use txgw_sdk::objects::{EntityKind, EntityStatus, ExternalId};

/// Records a new status for an invoice or subscription in the host.
#[async_trait]
pub trait StatusUpdater: Send + Sync {
    async fn update_status(
        &self,
        entity: EntityKind,
        id: &ExternalId,
        status: EntityStatus,
    ) -> anyhow::Result<()>;
}

#[cfg(test)]
pub(crate) use recording::RecordingUpdater;
