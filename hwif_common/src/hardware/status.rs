//! Lifecycle status state machine shared by every driver.
//!
//! ```text
//!            configure() (from any status)
//!   UNKNOWN ──────────────► CONFIGURED ──start()──► STARTED
//!                                ▲                   │  ▲
//!                                │             stop()│  │start()
//!                                │                   ▼  │
//!                                └──configure()──── STOPPED
//! ```
//!
//! Illegal transitions are rejected with [`HwError::Lifecycle`] and leave the
//! status untouched. The machine never transitions on its own.

use crate::error::{HwError, HwResult};
use crate::types::{Status, Transition};

/// Current lifecycle status plus its transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusMachine {
    status: Status,
}

impl StatusMachine {
    /// New machine in `Unknown`.
    pub const fn new() -> Self {
        Self {
            status: Status::Unknown,
        }
    }

    /// Current status.
    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Record a successful `configure()`: forces `Configured` from any status.
    ///
    /// Call only after the driver-specific validation passed; a failed
    /// configure must leave the machine alone.
    pub fn configured(&mut self) {
        self.status = Status::Configured;
    }

    /// `Configured | Stopped → Started`.
    pub fn start(&mut self) -> HwResult {
        match self.status {
            Status::Configured | Status::Stopped => {
                self.status = Status::Started;
                Ok(())
            }
            status => Err(HwError::Lifecycle {
                transition: Transition::Start,
                status,
            }),
        }
    }

    /// `Started → Stopped`.
    pub fn stop(&mut self) -> HwResult {
        match self.status {
            Status::Started => {
                self.status = Status::Stopped;
                Ok(())
            }
            status => Err(HwError::Lifecycle {
                transition: Transition::Stop,
                status,
            }),
        }
    }

    /// True when read/write cycles are expected.
    #[inline]
    pub const fn is_started(&self) -> bool {
        matches!(self.status, Status::Started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_in(status: Status) -> StatusMachine {
        let mut sm = StatusMachine::new();
        match status {
            Status::Unknown => {}
            Status::Configured => sm.configured(),
            Status::Started => {
                sm.configured();
                sm.start().unwrap();
            }
            Status::Stopped => {
                sm.configured();
                sm.start().unwrap();
                sm.stop().unwrap();
            }
        }
        assert_eq!(sm.status(), status);
        sm
    }

    #[test]
    fn initial_status_is_unknown() {
        assert_eq!(StatusMachine::new().status(), Status::Unknown);
        assert_eq!(StatusMachine::default().status(), Status::Unknown);
    }

    #[test]
    fn start_allowed_from_configured_and_stopped() {
        for from in [Status::Configured, Status::Stopped] {
            let mut sm = machine_in(from);
            assert_eq!(sm.start(), Ok(()));
            assert_eq!(sm.status(), Status::Started);
        }
    }

    #[test]
    fn start_rejected_from_unknown_and_started() {
        for from in [Status::Unknown, Status::Started] {
            let mut sm = machine_in(from);
            assert_eq!(
                sm.start(),
                Err(HwError::Lifecycle {
                    transition: Transition::Start,
                    status: from,
                })
            );
            assert_eq!(sm.status(), from);
        }
    }

    #[test]
    fn stop_allowed_only_from_started() {
        let mut sm = machine_in(Status::Started);
        assert_eq!(sm.stop(), Ok(()));
        assert_eq!(sm.status(), Status::Stopped);

        for from in [Status::Unknown, Status::Configured, Status::Stopped] {
            let mut sm = machine_in(from);
            assert!(matches!(
                sm.stop(),
                Err(HwError::Lifecycle {
                    transition: Transition::Stop,
                    ..
                })
            ));
            assert_eq!(sm.status(), from);
        }
    }

    #[test]
    fn configure_forces_configured_from_any_status() {
        for from in [
            Status::Unknown,
            Status::Configured,
            Status::Started,
            Status::Stopped,
        ] {
            let mut sm = machine_in(from);
            sm.configured();
            assert_eq!(sm.status(), Status::Configured);
        }
    }

    #[test]
    fn status_read_does_not_mutate() {
        let sm = machine_in(Status::Started);
        assert_eq!(sm.status(), Status::Started);
        assert_eq!(sm.status(), Status::Started);
        assert!(sm.is_started());
    }
}
