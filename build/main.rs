mod config_schema;
mod shell_completion;

use std::env;
use std::path::PathBuf;

fn main() {
    for input in &["build", "src/cli.rs", "src/config/schema.rs"] {
        println!("cargo:rerun-if-changed={}", input);
    }

    // Set by Cargo for every build script.
    let outdir = match env::var_os("OUT_DIR") {
        Some(outdir) => PathBuf::from(outdir),
        None => panic!("OUT_DIR environment variable not defined"),
    };

    shell_completion::generate_shell_completion_scripts(&outdir);

    let schema_file = config_schema::generate_config_json_schema(&outdir);
    // Embedded in the binary, printed by `ibuild --print-schema`.
    println!("cargo:rustc-env=IBUILD_SCHEMA_FILE={}", schema_file.display());
}
