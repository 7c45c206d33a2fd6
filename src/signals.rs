/// Termination signals as channel messages.
///
/// SIGINT and SIGTERM are caught and forwarded so the tick loop can leave
/// through its normal exit path and restore the terminal.

use std::io;
use std::sync::mpsc;

/// Start forwarding SIGINT and SIGTERM to the returned receiver. The signal
/// number is sent; delivery stops once the receiver is dropped.
#[cfg(unix)]
pub fn watch_termination() -> io::Result<mpsc::Receiver<i32>> {
    use log::debug;
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::thread;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for sig in signals.forever() {
            debug!("caught signal {sig}");
            if tx.send(sig).is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

/// No signal source off unix; the receiver reports disconnected and never
/// yields.
#[cfg(not(unix))]
pub fn watch_termination() -> io::Result<mpsc::Receiver<i32>> {
    let (_, rx) = mpsc::channel();
    Ok(rx)
}
