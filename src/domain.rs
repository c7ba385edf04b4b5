use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    /// Targets to run, in this order, before this target's own build.
    pub dependencies: Vec<String>,
    pub build: Option<Build>,
}

impl fmt::Display for Target {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.name)
    }
}

/// A delegated command and the directory it runs in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Build {
    /// Relative to the project root.
    pub dir: PathBuf,
    pub script: String,
}

/// Ordered registry of the targets of a project.
#[derive(Clone, Debug)]
pub struct Targets {
    targets: Vec<Target>,
    default: Option<String>,
}

impl Targets {
    pub fn new(targets: Vec<Target>, default: Option<String>) -> Self {
        Self { targets, default }
    }

    pub fn get(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|target| target.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn default_target(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }
}
