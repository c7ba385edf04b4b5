use crate::domain::{Build, Target};
use crate::run_script;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStatus {
    Success,
    /// `None` when the process was terminated by a signal.
    Failed(Option<i32>),
}

/// Runs the build of a single target, blocking until it completes.
pub trait Executor {
    fn execute(&mut self, target: &Target, build: &Build, dir: &Path) -> Result<ExecutionStatus>;
}

pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn execute(&mut self, target: &Target, build: &Build, dir: &Path) -> Result<ExecutionStatus> {
        if !dir.is_dir() {
            return Err(anyhow::anyhow!(
                "Directory {} does not exist",
                dir.display()
            ));
        }

        let status = run_script::build_command(&build.script, dir)
            .status()
            .with_context(|| format!("{} - Failed to run \"{}\"", target, build.script))?;

        if status.success() {
            Ok(ExecutionStatus::Success)
        } else {
            Ok(ExecutionStatus::Failed(status.code()))
        }
    }
}

/// Prints the commands instead of running them.
pub struct DryRunExecutor<W: Write> {
    out: W,
}

impl<W: Write> DryRunExecutor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Executor for DryRunExecutor<W> {
    fn execute(&mut self, _target: &Target, build: &Build, dir: &Path) -> Result<ExecutionStatus> {
        writeln!(self.out, "cd {} && {}", dir.display(), build.script)
            .with_context(|| "Failed to write to output")?;
        Ok(ExecutionStatus::Success)
    }
}
