use chrono::NaiveDate;
use log::{debug, warn};

use crate::config::{self, Config, Profile};
use crate::editor::{EditorLauncher, Launcher};
use crate::error::Result;
use crate::models::{today_in, DateInfo};
use crate::renderer;
use crate::report::{self, WriteOutcome};

/// Options for generating a report
#[derive(Debug, Clone, Copy, Default)]
pub struct GenOptions {
    /// Target the week before the current one
    pub last_week: bool,
    /// Print the filled report instead of writing it
    pub dry_run: bool,
    /// Skip opening the report in the configured editor
    pub no_editor: bool,
}

/// Generate the weekly report for the current (or previous) week
pub fn run(profile: &Profile, options: GenOptions) -> Result<()> {
    let template = config::load_template(profile)?;
    let config = config::load(&profile.config_path())?;
    let today = today_in(&config.timezone)?;
    debug!("Today in {} is {}", config.timezone, today);

    let launcher = config
        .editor_path
        .as_ref()
        .map(|program| EditorLauncher::new(program, config.editor_args.clone()));

    generate(
        &config,
        &template,
        today,
        options,
        launcher.as_ref().map(|l| l as &dyn Launcher),
    )?;
    Ok(())
}

/// Fill, persist and open the report for the week containing `today`
///
/// Returns `None` on a dry run. An editor failure is returned after the report
/// was persisted.
fn generate(
    config: &Config,
    template: &str,
    today: NaiveDate,
    options: GenOptions,
    launcher: Option<&dyn Launcher>,
) -> Result<Option<WriteOutcome>> {
    let dates = DateInfo::resolve(today, options.last_week);
    let content = renderer::fill(template, &dates);

    if options.dry_run {
        crate::display::print_markdown(&content);
        return Ok(None);
    }

    let outcome = report::write(&config.docs_dir, &dates, &content)?;
    match &outcome {
        WriteOutcome::Created(path) => {
            println!("Weekly report saved to \"{}\" successfully", path.display());
        }
        WriteOutcome::AlreadyExists(path) => {
            println!("file \"{}\" already exists", path.display());
        }
    }

    if options.no_editor {
        return Ok(Some(outcome));
    }

    match launcher {
        Some(launcher) => launcher.open(outcome.path())?,
        None => warn!("No editor_path configured, not opening the report"),
    }

    Ok(Some(outcome))
}
