//! External commands (npm, git).

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::{GenError, Result};
use crate::report;

pub trait CommandRunner {
    /// Run `argv`, failing with `CommandExecution` (carrying `context`) on a non-zero exit.
    fn run(&mut self, argv: &[&str], context: &str) -> Result<ExitStatus>;
}

/// Runs commands for real inside the project directory.
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

/// Build the platform command: Windows needs `cmd /C` to resolve `npm.cmd`.
fn build_command(argv: &[&str], cwd: &Path) -> Option<Command> {
    let (program, args) = argv.split_first()?;
    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(program);
        cmd
    } else {
        Command::new(program)
    };
    cmd.args(args).current_dir(cwd);
    Some(cmd)
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, argv: &[&str], context: &str) -> Result<ExitStatus> {
        let mut cmd =
            build_command(argv, &self.cwd).ok_or_else(|| GenError::command(context, "empty command"))?;

        let output = cmd
            .output()
            .map_err(|e| GenError::command(context, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GenError::command(context, stderr));
        }

        report::executed(argv);
        Ok(output.status)
    }
}
