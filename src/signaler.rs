//! Best-effort termination of processes reported in the stream.
//!
//! Delivery is fire-and-forget: the caller never waits for the target to
//! exit. A target that is already gone counts as delivered.

use std::io;

/// POSIX signals the postprocessor may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    #[default]
    Terminate,
    Kill,
}

impl Signal {
    fn as_raw(self) -> libc::c_int {
        match self {
            Signal::Terminate => libc::SIGTERM,
            Signal::Kill => libc::SIGKILL,
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Terminate => write!(f, "SIGTERM"),
            Signal::Kill => write!(f, "SIGKILL"),
        }
    }
}

/// Delivers a signal to a single process.
pub trait Signaler {
    fn deliver(&mut self, pid: i32, signal: Signal) -> io::Result<()>;
}

/// Signals real processes with `kill(2)`.
#[derive(Debug, Default)]
pub struct ProcessSignaler;

impl Signaler for ProcessSignaler {
    /// Only positive pids are accepted; kill(2) treats the rest as groups.
    fn deliver(&mut self, pid: i32, signal: Signal) -> io::Result<()> {
        if pid <= 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to signal pid {pid}"),
            ));
        }
        let ret = unsafe { libc::kill(pid as libc::pid_t, signal.as_raw()) };
        if ret == -1 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}

/// Signal every pid in order.
///
/// `ESRCH` (no such process) is treated as success. Any other failure is
/// logged and the remaining pids are still signaled.
pub fn signal_pids(signaler: &mut dyn Signaler, pids: &[i32], signal: Signal) {
    for &pid in pids {
        match signaler.deliver(pid, signal) {
            Ok(()) => tracing::debug!(pid, %signal, "signal delivered"),
            Err(e) if e.raw_os_error() == Some(libc::ESRCH) => {
                tracing::debug!(pid, %signal, "process already exited");
            }
            Err(e) => tracing::warn!(pid, %signal, error = %e, "failed to signal process"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records deliveries and answers each with a scripted result.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSignaler {
        pub delivered: Vec<(i32, Signal)>,
        pub fail_with: Option<i32>,
    }

    impl Signaler for RecordingSignaler {
        fn deliver(&mut self, pid: i32, signal: Signal) -> io::Result<()> {
            self.delivered.push((pid, signal));
            match self.fail_with {
                Some(code) => Err(io::Error::from_raw_os_error(code)),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn test_default_signal_is_terminate() {
        assert_eq!(Signal::default(), Signal::Terminate);
        assert_eq!(Signal::Terminate.to_string(), "SIGTERM");
    }

    #[test]
    fn test_signal_pids_in_order() {
        let mut signaler = RecordingSignaler::default();
        signal_pids(&mut signaler, &[10, 11, 12], Signal::Kill);
        assert_eq!(
            signaler.delivered,
            vec![(10, Signal::Kill), (11, Signal::Kill), (12, Signal::Kill)]
        );
    }

    #[test]
    fn test_missing_process_is_ignored() {
        let mut signaler = RecordingSignaler {
            fail_with: Some(libc::ESRCH),
            ..Default::default()
        };
        signal_pids(&mut signaler, &[10, 11], Signal::Terminate);
        assert_eq!(signaler.delivered.len(), 2);
    }

    #[test]
    fn test_other_failures_do_not_stop_delivery() {
        let mut signaler = RecordingSignaler {
            fail_with: Some(libc::EPERM),
            ..Default::default()
        };
        signal_pids(&mut signaler, &[1, 2], Signal::Terminate);
        assert_eq!(signaler.delivered.len(), 2);
    }

    #[test]
    fn test_process_signaler_rejects_group_pids() {
        for pid in [0, -1, -2] {
            let err = ProcessSignaler.deliver(pid, Signal::Terminate).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_process_signaler_reports_missing_process() {
        // Reap a finished child so its pid is guaranteed to be free.
        let mut child = std::process::Command::new("true").spawn().unwrap();
        let pid = child.id() as i32;
        child.wait().unwrap();

        let err = ProcessSignaler.deliver(pid, Signal::Terminate).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ESRCH));
    }
}
