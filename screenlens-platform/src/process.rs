//! Pid-based worker termination.
//!
//! Stopping a process that already exited is benign on every platform;
//! callers rely on that for the "stop a possibly-absent worker" command.

#[cfg(unix)]
pub fn terminate(pid: u32) -> anyhow::Result<()> {
    use nix::errno::Errno;
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    match kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
        Ok(()) => Ok(()),
        // Already gone.
        Err(Errno::ESRCH) => Ok(()),
        Err(e) => Err(anyhow::anyhow!("SIGTERM to pid {pid} failed: {e}")),
    }
}

#[cfg(unix)]
pub fn is_alive(pid: u32) -> bool {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    // Signal 0 probes existence without delivering anything.
    kill(Pid::from_raw(pid as i32), None).is_ok()
}

#[cfg(windows)]
pub fn terminate(pid: u32) -> anyhow::Result<()> {
    use windows::Win32::Foundation::CloseHandle;
    use windows::Win32::System::Threading::{OpenProcess, PROCESS_TERMINATE, TerminateProcess};

    unsafe {
        let handle = match OpenProcess(PROCESS_TERMINATE, false, pid) {
            Ok(h) => h,
            // Already gone.
            Err(_) => return Ok(()),
        };

        let res = TerminateProcess(handle, 0);
        let _ = CloseHandle(handle);
        res.map_err(|e| anyhow::anyhow!("terminate pid {pid} failed: {e}"))
    }
}

#[cfg(windows)]
pub fn is_alive(pid: u32) -> bool {
    use windows::Win32::Foundation::CloseHandle;
    use windows::Win32::System::Threading::{OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION};

    unsafe {
        match OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) {
            Ok(h) => {
                let _ = CloseHandle(h);
                true
            }
            Err(_) => false,
        }
    }
}
