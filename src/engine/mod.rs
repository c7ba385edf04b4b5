mod builder;
pub mod executor;

use crate::config::validate_requested_targets;
use crate::domain::Targets;
use anyhow::Result;
pub use builder::BuildFailure;
use builder::build_target;
use executor::Executor;
use std::path::PathBuf;

/// Runs targets one at a time, stopping at the first failure.
pub struct Engine<'a> {
    targets: Targets,
    project_dir: PathBuf,
    executor: &'a mut dyn Executor,
}

impl<'a> Engine<'a> {
    pub fn new(targets: Targets, project_dir: PathBuf, executor: &'a mut dyn Executor) -> Self {
        Self {
            targets,
            project_dir,
            executor,
        }
    }

    /// Runs the requested targets in order, or the default target if none is requested.
    pub fn run(&mut self, requested_targets: &[String]) -> Result<()> {
        let requested_targets = if requested_targets.is_empty() {
            let default = self.targets.default_target().ok_or_else(|| {
                anyhow::anyhow!("No target specified and no default target defined")
            })?;
            vec![default.to_string()]
        } else {
            requested_targets.to_vec()
        };

        validate_requested_targets(&requested_targets, &self.targets)?;

        for target_name in &requested_targets {
            self.run_target(target_name)?;
        }

        Ok(())
    }

    fn run_target(&mut self, target_name: &str) -> Result<()> {
        let target = self
            .targets
            .get(target_name)
            .ok_or_else(|| anyhow::anyhow!("No such target: {}", target_name))?
            .clone();

        log::trace!("{} - Running dependencies", target);
        for dependency in &target.dependencies {
            self.run_target(dependency)?;
        }

        if let Some(build) = &target.build {
            build_target(&mut *self.executor, &target, build, &self.project_dir)?;
        }

        Ok(())
    }
}
