//! Running the post-run command on generated files.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use strata_manifest::PostRun;

use crate::{Error, Result};

/// A post-run command that exited successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    /// File the command ran on.
    pub path: PathBuf,
    /// The command line as executed.
    pub command: String,
    pub stdout: String,
    pub stderr: String,
}

/// Run `post_run` on `path`, waiting for it to exit.
///
/// A command that cannot be started or exits unsuccessfully is a
/// [`Error::PostRun`] carrying its status and stderr.
pub fn run_post_run(post_run: &PostRun, path: &Path) -> Result<HookOutcome> {
    let args = post_run.args_for(path);
    let command = std::iter::once(post_run.program.as_str())
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    let failure = |reason: String| Error::PostRun {
        command: command.clone(),
        path: path.to_path_buf(),
        reason,
    };

    log::info!("running `{}`", command);
    let output = Command::new(&post_run.program)
        .args(&args)
        .output()
        .map_err(|e| failure(e.to_string()))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        let mut reason = output.status.to_string();
        if !stderr.trim().is_empty() {
            reason.push_str(": ");
            reason.push_str(stderr.trim());
        }
        return Err(failure(reason));
    }

    Ok(HookOutcome {
        path: path.to_path_buf(),
        command,
        stdout,
        stderr,
    })
}
