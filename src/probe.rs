use std::process::{Command, Stdio};

use tracing::debug;

/// Test if the given external program can run without flaw.
///
/// With `display` off the child's output is captured and thrown away and
/// its exit status is not inspected: launching and running to completion
/// is enough. With `display` on the child writes straight to the terminal
/// and a nonzero exit counts as failure. Stdin is inherited either way.
///
/// Blocks until the child exits.
pub fn test_program<S: AsRef<str>>(command: &[S], display: bool) -> bool {
    let Some((program, args)) = command.split_first() else {
        debug!("Refusing to probe an empty command");
        return false;
    };

    let mut cmd = Command::new(program.as_ref());
    cmd.args(args.iter().map(|a| a.as_ref()));

    if display {
        match cmd.status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                debug!("{} exited with {}", program.as_ref(), status);
                false
            }
            Err(e) => {
                debug!("Failed to run {}: {}", program.as_ref(), e);
                false
            }
        }
    } else {
        let result = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        match result {
            Ok(_) => true,
            Err(e) => {
                debug!("Failed to run {}: {}", program.as_ref(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        assert!(!test_program(&["nonexistent-binary-xyz"], false));
        assert!(!test_program(&["nonexistent-binary-xyz"], true));
    }

    #[test]
    fn test_empty_command() {
        let empty: [&str; 0] = [];
        assert!(!test_program(&empty, false));
    }

    #[cfg(unix)]
    #[test]
    fn test_quiet_mode_ignores_exit_status() {
        assert!(test_program(&["sh", "-c", "echo noisy; exit 3"], false));
    }

    #[cfg(unix)]
    #[test]
    fn test_display_mode_checks_exit_status() {
        assert!(test_program(&["sh", "-c", "exit 0"], true));
        assert!(!test_program(&["sh", "-c", "exit 3"], true));
    }
}
