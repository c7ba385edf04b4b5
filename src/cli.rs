use clap::{crate_version, Arg, ArgAction, Command};

pub mod arg {
    pub static PROJECT_DIR: &str = "project_dir";
    pub static VERBOSITY: &str = "verbosity";
    pub static DRY_RUN: &str = "dry_run";
    pub static LIST: &str = "list";
    pub static PRINT_SCHEMA: &str = "print_schema";
    pub static TARGETS: &str = "targets";
}

pub fn get_app() -> Command {
    Command::new("ibuild")
        .version(crate_version!())
        .about("Run the checkout's sub-builds in a fixed order")
        .arg(
            Arg::new(arg::PROJECT_DIR)
                .short('p')
                .long("project")
                .value_name("PROJECT_DIR")
                .default_value(".")
                .hide_default_value(true)
                .help("Root directory of the checkout (in which 'ibuild.yml' may be located)"),
        )
        .arg(
            Arg::new(arg::VERBOSITY)
                .short('v')
                .action(ArgAction::Count)
                .help("Increases message verbosity"),
        )
        .arg(
            Arg::new(arg::DRY_RUN)
                .short('n')
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Print the commands that would run, without running them"),
        )
        .arg(
            Arg::new(arg::LIST)
                .short('l')
                .long("list")
                .action(ArgAction::SetTrue)
                .conflicts_with(arg::TARGETS)
                .help("List the available targets"),
        )
        .arg(
            Arg::new(arg::PRINT_SCHEMA)
                .long("print-schema")
                .action(ArgAction::SetTrue)
                .conflicts_with_all([arg::LIST, arg::TARGETS])
                .help("Print the JSON schema of 'ibuild.yml'"),
        )
        .arg(
            Arg::new(arg::TARGETS)
                .value_name("TARGETS")
                .num_args(1..)
                .help("Targets to build, in order (defaults to the default target)"),
        )
}

#[cfg(test)]
mod tests {
    use super::{arg, get_app};

    #[test]
    fn test_get_app_targets_are_optional() {
        let arg_matches = get_app().get_matches_from(vec!["ibuild"]);
        assert!(arg_matches.get_many::<String>(arg::TARGETS).is_none());
        assert_eq!(
            arg_matches.get_one::<String>(arg::PROJECT_DIR),
            Some(&".".to_string())
        );
    }

    #[test]
    fn test_get_app_keeps_targets_in_order() {
        let arg_matches = get_app().get_matches_from(vec!["ibuild", "fx", "java", "fx"]);
        let targets: Vec<_> = arg_matches
            .get_many::<String>(arg::TARGETS)
            .unwrap()
            .cloned()
            .collect();
        assert_eq!(targets, vec!["fx", "java", "fx"]);
    }

    #[test]
    fn test_get_app_verbosity_does_not_take_value() {
        let arg_matches = get_app().get_matches_from(vec!["ibuild", "-v", "config"]);
        assert_eq!(arg_matches.get_count(arg::VERBOSITY), 1);
        assert_eq!(
            arg_matches
                .get_many::<String>(arg::TARGETS)
                .unwrap()
                .collect::<Vec<_>>(),
            vec!["config"]
        );
    }

    #[test]
    fn test_get_app_verbosity_accepts_multiple_occurrences() {
        let arg_matches = get_app().get_matches_from(vec!["ibuild", "-vvv"]);
        assert_eq!(arg_matches.get_count(arg::VERBOSITY), 3);
    }

    #[test]
    fn test_get_app_list_conflicts_with_targets() {
        get_app()
            .try_get_matches_from(vec!["ibuild", "--list", "all"])
            .expect_err("--list should not accept targets");
    }

    #[test]
    fn test_get_app_print_schema_takes_no_targets() {
        let arg_matches = get_app().get_matches_from(vec!["ibuild", "--print-schema"]);
        assert!(arg_matches.get_flag(arg::PRINT_SCHEMA));

        get_app()
            .try_get_matches_from(vec!["ibuild", "--print-schema", "fx"])
            .expect_err("--print-schema should not accept targets");
    }
}
