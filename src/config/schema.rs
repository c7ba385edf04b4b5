use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// To change the targets of a checkout, create a file named `ibuild.yml` at its root.
/// Without this file, `ibuild` uses its built-in targets.
///
/// __Example__
///
/// `ibuild.yml`:
///
/// ```yaml
/// default: all
///
/// targets:
///   all:
///     dependencies: [java, config]
///
///   config:
///     dir: config
///     build: make
///
///   java:
///     dir: IBJts/java
///     build: make
///
///   svn_update:
///     build: svn update
///
///   update:
///     dependencies: [svn_update, all]
/// ```
///
/// In this example:
///
/// - `ibuild` runs `make` in `IBJts/java`, then `make` in `config`.
/// - `ibuild update` runs `svn update` at the root of the checkout, then does the same as `ibuild`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Name of the target to run when none is given on the command line.
    #[serde(default)]
    pub default: Option<String>,

    /// Targets of this project.
    ///
    /// The target name should start with an alphanumeric character or `_` and contain only alphanumeric characters, `-`, or `_`.
    #[serde(default)]
    pub targets: BTreeMap<String, Target>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Targets to run before this one, sequentially and in the listed order.
    ///
    /// If any of them fails, nothing else runs.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Directory in which `build` runs, relative to the root of the checkout.
    ///
    /// Defaults to the root of the checkout.
    #[serde(default)]
    pub dir: Option<String>,

    /// Shell script delegating the build of this target.
    ///
    /// It runs after all the `dependencies` completed successfully.
    #[serde(default)]
    pub build: Option<String>,
}
