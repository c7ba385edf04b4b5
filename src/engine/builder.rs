use super::executor::{ExecutionStatus, Executor};
use crate::domain::{Build, Target};
use anyhow::{Context, Result};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A delegated command completed with a failure status.
#[derive(Debug, PartialEq, Eq)]
pub struct BuildFailure {
    pub target: String,
    pub code: Option<i32>,
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} - Build failed (exit code: {})", self.target, code),
            None => write!(f, "{} - Build failed (terminated by signal)", self.target),
        }
    }
}

impl Error for BuildFailure {}

pub fn build_target(
    executor: &mut dyn Executor,
    target: &Target,
    build: &Build,
    project_dir: &Path,
) -> Result<()> {
    let target_start = Instant::now();
    log::info!("{} - Building", target);

    let dir: PathBuf = project_dir.join(&build.dir).components().collect();
    log::debug!(
        "{} - Command \"{}\" in {}",
        target,
        build.script,
        dir.display()
    );

    let status = executor
        .execute(target, build, &dir)
        .with_context(|| format!("{} - Build failed", target))?;

    if let ExecutionStatus::Failed(code) = status {
        return Err(BuildFailure {
            target: target.name.clone(),
            code,
        }
        .into());
    }

    log::info!(
        "{} - Built (took: {}ms)",
        target,
        target_start.elapsed().as_millis()
    );

    Ok(())
}
