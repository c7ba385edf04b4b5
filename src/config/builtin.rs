use crate::domain::{Build, Target, Targets};

pub const DEFAULT_TARGET: &str = "all";

/// `(name, dependencies, build dir and script)`, in declaration order.
const TARGETS: &[(&str, &[&str], Option<(&str, &str)>)] = &[
    ("all", &["java", "config"], None),
    ("config", &[], Some(("config", "make"))),
    ("fx", &[], Some(("config/fx/ib", "make"))),
    ("equities", &[], Some(("config/equities/ib", "make"))),
    ("futures", &[], Some(("config/futures/ib", "make"))),
    ("indices", &[], Some(("config/indices/ib", "make"))),
    ("java", &[], Some(("IBJts/java", "make"))),
    ("svn_update", &[], Some((".", "svn update"))),
    ("update", &["svn_update", "all"], None),
];

pub fn targets() -> Targets {
    let targets = TARGETS
        .iter()
        .map(|&(name, dependencies, build)| Target {
            name: name.to_string(),
            dependencies: dependencies.iter().map(|&dep| dep.to_string()).collect(),
            build: build.map(|(dir, script)| Build {
                dir: dir.into(),
                script: script.to_string(),
            }),
        })
        .collect();

    Targets::new(targets, Some(DEFAULT_TARGET.to_string()))
}

#[cfg(test)]
mod tests {
    use super::targets;
    use crate::config::validation::validate_targets;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn test_builtin_targets_are_valid() {
        validate_targets(&targets()).expect("Built-in targets should be valid");
    }

    #[test]
    fn test_builtin_default_builds_java_then_config() {
        let targets = targets();
        let default = targets.get(targets.default_target().unwrap()).unwrap();
        assert_eq!(default.name, "all");
        assert_eq!(default.dependencies, vec!["java", "config"]);
        assert!(default.build.is_none());
    }

    #[test]
    fn test_builtin_asset_classes_have_distinct_dirs() {
        let targets = targets();
        let dirs: HashSet<_> = ["fx", "equities", "futures", "indices"]
            .iter()
            .map(|&name| {
                let target = targets.get(name).unwrap();
                assert!(target.dependencies.is_empty(), "{} has dependencies", name);
                target.build.as_ref().unwrap().dir.clone()
            })
            .collect();
        assert_eq!(dirs.len(), 4);
        assert!(dirs.contains(Path::new("config/indices/ib")));
    }

    #[test]
    fn test_builtin_update_syncs_then_builds() {
        let targets = targets();
        assert_eq!(
            targets.get("update").unwrap().dependencies,
            vec!["svn_update", "all"]
        );
        let sync = targets.get("svn_update").unwrap().build.as_ref().unwrap();
        assert_eq!(sync.script, "svn update");
        assert_eq!(sync.dir, Path::new("."));
    }
}
