use log::info;

use crate::config::{self, Profile};
use crate::error::Result;
use crate::vcs::{self, CommitOutcome, CommitStep, GitCli};

/// Add, commit and push every change in the reports repository
pub fn run(profile: &Profile) -> Result<()> {
    let config = config::load(&profile.config_path())?;
    let git = GitCli::new(&config.docs_dir);
    info!("Publishing reports in {}", git.repo_dir().display());

    let outcome = vcs::commit_reports(&git, &config.commit_message, |step| match step {
        CommitStep::Added => println!("Add files to git..."),
        CommitStep::Committed => println!("Commit files to git..."),
        CommitStep::Pushed => println!("Push files to git!"),
    })?;

    if outcome == CommitOutcome::NothingToCommit {
        println!("No changes to commit");
    }

    Ok(())
}
