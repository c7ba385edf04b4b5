mod builtin;
mod conversion;
mod schema;
mod validation;

use crate::domain::Targets;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
pub use validation::validate_requested_targets;

/// Name of the optional project file overriding the built-in targets.
pub const CONFIG_FILE_NAME: &str = "ibuild.yml";

pub struct Config {
    pub project_dir: PathBuf,
    pub targets: Targets,
}

impl Config {
    pub fn load(project_dir: &Path) -> Result<Self> {
        if !project_dir.is_dir() {
            return Err(anyhow::anyhow!(
                "Directory {} does not exist",
                project_dir.display()
            ));
        }

        let config_file_path = project_dir.join(CONFIG_FILE_NAME);
        let targets = if config_file_path.is_file() {
            log::debug!("Loading targets from {}", config_file_path.display());
            load_project_file(&config_file_path)?
        } else {
            log::debug!("No {} found, using built-in targets", CONFIG_FILE_NAME);
            builtin::targets()
        };

        validation::validate_targets(&targets).with_context(|| {
            format!(
                "Invalid configuration found for project {}",
                project_dir.display()
            )
        })?;

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            targets,
        })
    }
}

fn load_project_file(config_file_path: &Path) -> Result<Targets> {
    let config_file = File::open(config_file_path)
        .with_context(|| format!("Failed to open config file {}", config_file_path.display()))?;
    let project: schema::Project = serde_yaml::from_reader(config_file)
        .with_context(|| format!("Invalid format for {}", config_file_path.display()))?;

    conversion::into_targets(project)
        .with_context(|| format!("Invalid targets in {}", config_file_path.display()))
}

#[cfg(test)]
mod tests {
    use super::schema;

    #[test]
    fn test_project_file_format() {
        let project: schema::Project = serde_yaml::from_str(
            "default: all\n\
             targets:\n  \
               all:\n    \
                 dependencies: [java]\n  \
               java:\n    \
                 dir: IBJts/java\n    \
                 build: make\n",
        )
        .unwrap();

        assert_eq!(project.default.as_deref(), Some("all"));
        assert_eq!(project.targets["java"].dir.as_deref(), Some("IBJts/java"));
        assert_eq!(project.targets["all"].dependencies, vec!["java"]);
    }

    #[test]
    fn test_project_file_rejects_unknown_fields() {
        serde_yaml::from_str::<schema::Project>("targets:\n  all:\n    service: run\n")
            .expect_err("Unknown fields should be rejected");
    }
}
