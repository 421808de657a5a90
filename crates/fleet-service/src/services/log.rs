//! Log service
//!
//! Appends and lists robot log entries. Client-authored entries go through
//! [`LogService::create_log`]; the registry records status changes through
//! [`LogService::record_status_update`].

use fleet_core::entities::{LogEntry, LogSource, NewLogEntry, StatusUpdate};
use fleet_core::{DomainError, Page, PageRequest};
use tracing::{info, instrument};

use crate::dto::{CreateLogRequest, LogResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Log service
pub struct LogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LogService<'a> {
    /// Create a new LogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append a client-authored entry
    #[instrument(skip(self, request))]
    pub async fn create_log(
        &self,
        robot_id: &str,
        request: CreateLogRequest,
    ) -> ServiceResult<LogResponse> {
        // Soft reference: existence is checked here, storage does not enforce it
        self.require_robot(robot_id).await?;

        let entry = request.into_entry(robot_id.to_string())?;
        let stored = self.ctx.log_repo().append(entry).await?;

        info!(
            robot_id = %stored.robot_id,
            log_id = stored.id,
            level = %stored.level,
            source = %stored.source,
            "Log entry created"
        );

        Ok(stored.into())
    }

    /// List a robot's entries, newest first
    #[instrument(skip(self))]
    pub async fn list_logs(
        &self,
        robot_id: &str,
        request: PageRequest,
    ) -> ServiceResult<PaginatedResponse<LogResponse>> {
        self.require_robot(robot_id).await?;

        let repo = self.ctx.log_repo();
        let (entries, total) = tokio::try_join!(
            repo.find_by_robot(robot_id, request.offset(), request.limit()),
            repo.count_by_robot(robot_id)
        )?;

        Ok(PaginatedResponse::from_page(Page::new(
            entries, total, request,
        )))
    }

    /// Record the system entry that accompanies a committed status update
    #[instrument(skip(self, update))]
    pub async fn record_status_update(
        &self,
        robot_id: &str,
        update: &StatusUpdate,
    ) -> ServiceResult<LogEntry> {
        let entry = NewLogEntry::new(
            robot_id.to_string(),
            update.summary(),
            update.log_level(),
            LogSource::System,
        )
        .with_meta(Some(update.to_meta()));

        Ok(self.ctx.log_repo().append(entry).await?)
    }

    async fn require_robot(&self, robot_id: &str) -> ServiceResult<()> {
        match self.ctx.robot_repo().find_by_id(robot_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::RobotNotFound(robot_id.to_string()).into()),
        }
    }
}
