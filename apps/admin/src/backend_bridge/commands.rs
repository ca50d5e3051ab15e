//! Backend commands queued from the UI loop to the backend worker.

use crate::config::MemberSourceConfig;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    FetchMembers { source: MemberSourceConfig },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchMembers { .. } => "fetch_members",
            Self::Shutdown => "shutdown",
        }
    }
}
