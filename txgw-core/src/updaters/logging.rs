use async_trait::async_trait;
use txgw_sdk::objects::{EntityKind, EntityStatus, ExternalId};

use super::StatusUpdater;

/// Logs status changes and does nothing else.
///
/// Used when no host callback URL is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingStatusUpdater;

#[async_trait]
impl StatusUpdater for LoggingStatusUpdater {
    async fn update_status(
        &self,
        entity: EntityKind,
        id: &ExternalId,
        status: EntityStatus,
    ) -> anyhow::Result<()> {
        tracing::info!(%entity, %id, %status, "Status change (no host callback configured)");
        Ok(())
    }
}
