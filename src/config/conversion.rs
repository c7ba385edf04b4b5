use super::schema;
use crate::domain::{Build, Target, Targets};
use anyhow::Result;
use std::path::PathBuf;

pub fn into_targets(project: schema::Project) -> Result<Targets> {
    let schema::Project { default, targets } = project;

    let targets = targets
        .into_iter()
        .map(|(name, target)| into_target(name, target))
        .collect::<Result<Vec<_>>>()?;

    Ok(Targets::new(targets, default))
}

fn into_target(name: String, target: schema::Target) -> Result<Target> {
    let schema::Target {
        dependencies,
        dir,
        build,
    } = target;

    let build = match (dir, build) {
        (Some(_), None) => {
            return Err(anyhow::anyhow!(
                "Target {} has a dir but nothing to build",
                name
            ))
        }
        (dir, Some(script)) => Some(Build {
            dir: dir.map_or_else(|| PathBuf::from("."), PathBuf::from),
            script,
        }),
        (None, None) => None,
    };

    Ok(Target {
        name,
        dependencies,
        build,
    })
}

#[cfg(test)]
mod tests {
    use super::into_targets;
    use crate::config::schema;
    use std::path::Path;

    #[test]
    fn test_into_targets_defaults_dir_to_project_root() {
        let project = build_project(vec![(
            "svn_update",
            schema::Target {
                build: Some("svn update".to_string()),
                ..Default::default()
            },
        )]);

        let targets = into_targets(project).unwrap();
        let build = targets.get("svn_update").unwrap().build.as_ref().unwrap();
        assert_eq!(build.dir, Path::new("."));
        assert_eq!(build.script, "svn update");
    }

    #[test]
    fn test_into_targets_keeps_dependency_order() {
        let project = build_project(vec![
            (
                "all",
                schema::Target {
                    dependencies: vec!["java".to_string(), "config".to_string()],
                    ..Default::default()
                },
            ),
            ("config", Default::default()),
            ("java", Default::default()),
        ]);

        let targets = into_targets(project).unwrap();
        assert_eq!(
            targets.get("all").unwrap().dependencies,
            vec!["java", "config"]
        );
    }

    #[test]
    fn test_into_targets_rejects_dir_without_build() {
        let project = build_project(vec![(
            "config",
            schema::Target {
                dir: Some("config".to_string()),
                ..Default::default()
            },
        )]);

        into_targets(project).expect_err("A dir without build should be rejected");
    }

    fn build_project(data: Vec<(&str, schema::Target)>) -> schema::Project {
        schema::Project {
            default: None,
            targets: data
                .into_iter()
                .map(|(name, target)| (name.to_string(), target))
                .collect(),
        }
    }
}
