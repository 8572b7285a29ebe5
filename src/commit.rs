//! Committing the finished message with the system `git` binary.
//!
//! Shells out so the user's git config, hooks and signing setup apply.

use std::process::Command;

use tracing::debug;

use crate::error::CommitError;

/// Run `git commit -m <message>` with any extra arguments appended.
pub fn git_commit(message: &str, extra_args: &[String]) -> Result<(), CommitError> {
    if message.trim().is_empty() {
        return Err(CommitError::EmptyMessage);
    }

    let mut args = vec!["commit".to_string(), "-m".to_string(), message.to_string()];
    args.extend(extra_args.iter().cloned());
    debug!("Running git commit with {} extra argument(s)", extra_args.len());

    let output = Command::new("git")
        .args(&args)
        .output()
        .map_err(CommitError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommitError::NonZeroExit {
            code: output.status.code(),
            stderr: stderr.trim().to_string(),
        });
    }

    print!("{}", String::from_utf8_lossy(&output.stdout));
    Ok(())
}
