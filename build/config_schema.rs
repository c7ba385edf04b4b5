include!("../src/config/schema.rs");

use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the JSON schema of `ibuild.yml` and returns its path.
pub fn generate_config_json_schema(outdir: &Path) -> PathBuf {
    let schema = schema_for!(Project);
    let schema_file = outdir.join("ibuild-schema.json");
    let contents = serde_json::to_string_pretty(&schema).unwrap();
    if let Err(e) = fs::write(&schema_file, contents) {
        panic!("failed to write {}: {}", schema_file.display(), e);
    }
    schema_file
}
