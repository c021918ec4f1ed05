//! Version control module
//!
//! Commits and pushes the reports repository:
//! - Committer: status/add/commit/push capability against a working tree
//! - GitCli: Committer backed by the `git` executable
mod git;

pub use git::GitCli;

use log::info;

use crate::error::Result;

/// Operations needed to publish report changes
pub trait Committer {
    /// Whether the working tree has anything to commit
    fn has_changes(&self) -> Result<bool>;

    /// Stage every change in the working tree
    fn add_all(&self) -> Result<()>;

    /// Record staged changes with `message`
    fn commit(&self, message: &str) -> Result<()>;

    /// Publish commits to the configured remote
    fn push(&self) -> Result<()>;
}

/// Step completed while publishing reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStep {
    Added,
    Committed,
    Pushed,
}

/// Result of a publish run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The working tree was clean; nothing was staged, committed or pushed
    NothingToCommit,
    /// Changes were committed and pushed
    Pushed,
}

/// Stage, commit and push all report changes
///
/// Stops at the first failing step and returns its error unchanged.
pub fn commit_reports<C, F>(committer: &C, message: &str, mut on_step: F) -> Result<CommitOutcome>
where
    C: Committer + ?Sized,
    F: FnMut(CommitStep),
{
    if !committer.has_changes()? {
        info!("Working tree is clean");
        return Ok(CommitOutcome::NothingToCommit);
    }

    committer.add_all()?;
    on_step(CommitStep::Added);

    committer.commit(message)?;
    on_step(CommitStep::Committed);

    committer.push()?;
    on_step(CommitStep::Pushed);

    Ok(CommitOutcome::Pushed)
}
