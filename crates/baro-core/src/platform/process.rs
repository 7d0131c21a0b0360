//! Detached process spawning.
//!
//! Launches are fire-and-forget: the caller learns about spawn failures
//! (binary missing, permission denied) but never about how the child exits.

use std::process::{Command, Stdio};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

/// Spawn `cmd` detached from the caller and reap it on a background thread.
///
/// # Platform Behavior
/// - **Linux/macOS**: child gets its own process group, so a Ctrl+C aimed
///   at Baro does not reach it
/// - **Windows**: child is started with `CREATE_NEW_PROCESS_GROUP`
pub fn spawn_detached(mut cmd: Command) -> std::io::Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        cmd.creation_flags(CREATE_NEW_PROCESS_GROUP);
    }

    let mut child = cmd.spawn()?;
    debug!("Spawned {:?} (pid {})", cmd.get_program(), child.id());

    // Don't wait for the process - it should run independently
    std::thread::spawn(move || {
        let _ = child.wait();
    });

    Ok(())
}
