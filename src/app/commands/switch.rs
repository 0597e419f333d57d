//! Switch between a file and its counterpart, creating it on request.

use std::path::PathBuf;

use tracing::{debug, info};

use super::mapping::{Mapped, Mapping, SkipReason, map_active_file};
use crate::app::AppContext;
use crate::domain::{AppError, Resolution, decide};
use crate::ports::{
    ActiveFileProvider, DocumentPresenter, FileCreator, FileReader, FilesystemProbe,
    UserConfirmation,
};

/// What the switch command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// An existing counterpart was opened (absolute path).
    Opened { path: PathBuf },
    /// The counterpart was missing, created, then opened (absolute path).
    Created { path: PathBuf },
    /// The user declined creating the missing counterpart (root-relative path).
    Declined { path: PathBuf },
    /// Nothing to do.
    Skipped(SkipReason),
}

/// Execute the switch command.
pub fn execute<A, F, C, D>(ctx: &AppContext<A, F, C, D>) -> Result<SwitchOutcome, AppError>
where
    A: ActiveFileProvider,
    F: FilesystemProbe + FileReader + FileCreator,
    C: UserConfirmation,
    D: DocumentPresenter,
{
    let mapped = match map_active_file(ctx.active_file(), ctx.files())? {
        Mapping::Mapped(mapped) => mapped,
        Mapping::Skipped(reason) => {
            debug!(%reason, "switch skipped");
            return Ok(SwitchOutcome::Skipped(reason));
        }
    };
    let Mapped { root, candidates, .. } = mapped;

    match decide(&candidates, |candidate| ctx.files().exists(&root.join(candidate))) {
        Resolution::Existing(rel) => {
            let path = root.join(rel);
            ctx.presenter().open_and_show(&path)?;
            Ok(SwitchOutcome::Opened { path })
        }
        Resolution::Missing(rel) => {
            if !ctx.confirmation().prompt_create(&rel)? {
                debug!(path = %rel.display(), "creation declined");
                return Ok(SwitchOutcome::Declined { path: rel });
            }
            let path = root.join(rel);
            ctx.files().create(&path)?;
            info!(path = %path.display(), "created counterpart");
            ctx.presenter().open_and_show(&path)?;
            Ok(SwitchOutcome::Created { path })
        }
    }
}
