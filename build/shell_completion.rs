include!("../src/cli.rs");

use clap_complete::{generate_to, Shell};
use std::path::Path;

/// Writes `ibuild.bash`, `_ibuild`, `ibuild.fish` and `_ibuild.ps1` into `outdir`.
pub fn generate_shell_completion_scripts(outdir: &Path) {
    let mut app = get_app();
    for &shell in &[Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        if let Err(e) = generate_to(shell, &mut app, "ibuild", outdir) {
            panic!("failed to generate {} completion: {}", shell, e);
        }
    }
}
