/// Ctrl-C ends the process quietly with status 0 instead of dying by signal.
#[cfg(unix)]
pub fn install_interrupt_handler() -> std::io::Result<()> {
    let handler = on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t;
    let previous = unsafe { libc::signal(libc::SIGINT, handler) };
    if previous == libc::SIG_ERR {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() -> std::io::Result<()> {
    Ok(())
}

// Only async-signal-safe calls are allowed here.
#[cfg(unix)]
extern "C" fn on_interrupt(_signal: libc::c_int) {
    unsafe { libc::_exit(0) }
}
