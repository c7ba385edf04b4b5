use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Shell used to interpret build scripts, with the flag passing it a script.
fn shell() -> (OsString, &'static str) {
    if cfg!(windows) {
        let comspec = std::env::var_os("COMSPEC").unwrap_or_else(|| "cmd.exe".into());
        (comspec, "/C")
    } else {
        // `-e` so that a multi-line script stops at its first failing line.
        ("/bin/sh".into(), "-ce")
    }
}

/// Command running `script` in `dir`, attached to the terminal of `ibuild`.
pub fn build_command(script: &str, dir: &Path) -> Command {
    let (program, script_flag) = shell();

    let mut command = Command::new(program);
    command
        .arg(script_flag)
        .arg(script)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    command
}
