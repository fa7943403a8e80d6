use std::ffi::OsStr;
use std::process::{Command, Output};

/// Execute the string-literals binary at `binary` with `args` and return the output.
///
/// `STRING_LITERALS_*` variables inherited from the caller are cleared so
/// only `envs` can set them.
pub fn execute_string_literals<B: AsRef<OsStr>>(
    binary: B,
    args: &[&str],
    envs: &[(&str, &str)],
) -> Result<Output, Box<dyn std::error::Error>> {
    let mut command = Command::new(binary);
    for key in [
        "STRING_LITERALS_COUNT",
        "STRING_LITERALS_FORMAT",
        "STRING_LITERALS_SEED",
        "STRING_LITERALS_OUTPUT",
    ] {
        command.env_remove(key);
    }
    let output = command
        .args(args)
        .env("RUST_LOG", "string_literals=debug,literal_emit=debug")
        .envs(envs.iter().copied())
        .output()?;
    Ok(output)
}

/// Verify CLI command succeeded
pub fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Split stdout into lines, failing if it is not valid UTF-8.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is not valid UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}
