//! Administrative operations behind the settings buttons
//!
//! Every button names an `AdminAction`. Activating a button hands the action
//! to an `AdminBackend`. No real backend ships with this crate: the default
//! `InertBackend` reports every action as unwired, so buttons stay inert.

use serde::Serialize;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminAction {
    CreateBackup,
    RestoreBackup,
    OptimizeDatabase,
    RebuildIndexes,
    GenerateSeedScript,
    ClearAllData,
    CreateGroup,
}

impl AdminAction {
    /// Operation name as an admin API would know it
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::CreateBackup => "create-backup",
            AdminAction::RestoreBackup => "restore-backup",
            AdminAction::OptimizeDatabase => "optimize-database",
            AdminAction::RebuildIndexes => "rebuild-indexes",
            AdminAction::GenerateSeedScript => "generate-seed-script",
            AdminAction::ClearAllData => "clear-all-data",
            AdminAction::CreateGroup => "create-group",
        }
    }
}

/// Result of a dispatched action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// No operation is attached to this action
    Unwired,
    /// The operation ran; the message is shown to the user
    Completed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("admin API unreachable: {0}")]
    Transport(String),

    #[error("not authorized: {0}")]
    Unauthorized(String),

    #[error("rejected: {0}")]
    Validation(String),
}

/// Executes administrative actions on behalf of the settings panels
pub trait AdminBackend {
    fn dispatch(
        &self,
        action: AdminAction,
    ) -> impl Future<Output = Result<ActionOutcome, AdminError>> + Send;
}

/// Backend with nothing attached. Every action is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertBackend;

impl AdminBackend for InertBackend {
    async fn dispatch(&self, action: AdminAction) -> Result<ActionOutcome, AdminError> {
        tracing::debug!(action = action.as_str(), "no backend attached");
        Ok(ActionOutcome::Unwired)
    }
}
