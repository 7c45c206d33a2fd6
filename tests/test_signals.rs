#![cfg(unix)]

use std::time::Duration;

use signal_hook::consts::SIGTERM;
use signal_hook::low_level::raise;
use terminal_invaders::signals::watch_termination;

#[test]
fn sigterm_is_forwarded_instead_of_killing_the_process() {
    let shutdown = watch_termination().unwrap();
    raise(SIGTERM).unwrap();
    let sig = shutdown.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(sig, SIGTERM);
}
