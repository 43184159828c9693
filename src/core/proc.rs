//! External process launches for kittyfs.
//!
//! Opening a file with the platform default handler and revealing a location in the
//! platform file manager. Both are fire-and-forget: the child is detached from the
//! terminal (null stdio) and reaped on a throwaway thread, its exit status is never
//! looked at.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

const NO_ARGS: &[&str] = &[];

/// What the launched process is asked to do with the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchKind {
    Open,
    Reveal,
}

/// Opens a file with the platform default handler.
pub fn open_default(path: &Path) -> io::Result<()> {
    launch(LaunchKind::Open, path)
}

/// Opens a directory in the platform file manager.
pub fn reveal_in_file_manager(path: &Path) -> io::Result<()> {
    launch(LaunchKind::Reveal, path)
}

/// Builds the platform command for a launch without spawning it.
pub fn launch_command(kind: LaunchKind, path: &Path) -> Command {
    let (program, args) = launcher(kind);
    let mut cmd = Command::new(program);
    cmd.args(args).arg(path);
    cmd
}

#[cfg(windows)]
fn launcher(kind: LaunchKind) -> (&'static str, &'static [&'static str]) {
    const PROTOCOL_HANDLER: &[&str] = &["url.dll,FileProtocolHandler"];
    match kind {
        LaunchKind::Open => ("rundll32", PROTOCOL_HANDLER),
        LaunchKind::Reveal => ("explorer", NO_ARGS),
    }
}

#[cfg(target_os = "macos")]
fn launcher(_kind: LaunchKind) -> (&'static str, &'static [&'static str]) {
    ("open", NO_ARGS)
}

#[cfg(not(any(windows, target_os = "macos")))]
fn launcher(_kind: LaunchKind) -> (&'static str, &'static [&'static str]) {
    ("xdg-open", NO_ARGS)
}

fn launch(kind: LaunchKind, path: &Path) -> io::Result<()> {
    let mut child = launch_command(kind, path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}
