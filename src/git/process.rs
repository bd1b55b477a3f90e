//! Running the git executable
//!
//! Network verbs (clone, pull, ls-remote) shell out to `git` so that the user's own
//! credential helpers, SSH config and sparse-checkout support apply unchanged.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Result, SkillsError, git_command_failed};
use crate::interrupt;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn display_command(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}

fn git_command(args: &[&str], cwd: Option<&Path>) -> Command {
    let mut cmd = Command::new("git");
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd
}

fn read_pipe(pipe: Option<impl Read>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut p) = pipe {
        let _ = p.read_to_end(&mut buf);
    }
    buf
}

/// Wait for `child`, polling for Ctrl-C and an optional deadline.
///
/// Returns `Ok(None)` when the deadline passes; the child is killed in that case.
fn wait_polling(mut child: Child, timeout: Option<Duration>) -> Result<Option<Output>> {
    let started = Instant::now();

    // Drain both pipes on helper threads so a chatty git cannot fill the pipe and block.
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let stdout_reader = thread::spawn(move || read_pipe(stdout));
    let stderr_reader = thread::spawn(move || read_pipe(stderr));

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if interrupt::is_interrupted() {
            let _ = child.kill();
            let _ = child.wait();
            return Err(SkillsError::Interrupted);
        }
        if timeout.is_some_and(|limit| started.elapsed() >= limit) {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();
    Ok(Some(Output {
        status,
        stdout,
        stderr,
    }))
}

/// Run git to completion; a non-zero exit is an error carrying git's stderr verbatim.
pub fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<Output> {
    let child = git_command(args, cwd)
        .spawn()
        .map_err(crate::error::git::unavailable)?;

    let Some(output) = wait_polling(child, None)? else {
        // Unreachable without a deadline
        return Err(git_command_failed(display_command(args), "timed out"));
    };

    // git dies on SIGINT too; report the interrupt rather than its exit status
    interrupt::check()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(git_command_failed(display_command(args), stderr));
    }

    Ok(output)
}

/// Run git with a deadline and return its stdout, or `None` on any failure.
///
/// Used for lookups whose caller has a sensible default; an interrupt is still reported.
pub fn run_git_with_timeout(args: &[&str], cwd: Option<&Path>, timeout: Duration) -> Result<Option<String>> {
    let mut cmd = git_command(args, cwd);
    // Never block on a credential prompt while probing
    cmd.env("GIT_TERMINAL_PROMPT", "0");

    let Ok(child) = cmd.spawn() else {
        return Ok(None);
    };

    let output = wait_polling(child, Some(timeout))?;
    interrupt::check()?;

    Ok(output
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).into_owned()))
}
