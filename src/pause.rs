//! The deliberate timed pause and the cooperative interruption signal that
//! can cut it short.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::ScenarioError;

/// Sending half: fire once to interrupt a pause in progress.
pub struct Interrupter {
    signal: Sender<()>,
}

impl Interrupter {
    /// Deliver the interruption signal. Returns false when nothing is
    /// listening any more.
    pub fn interrupt(&self) -> bool {
        self.signal.send(()).is_ok()
    }
}

/// Receiving half: the pause itself blocks here.
pub struct InterruptGate {
    signal: Receiver<()>,
}

/// Create a connected interrupter/gate pair.
pub fn interrupt_pair() -> (Interrupter, InterruptGate) {
    let (signal, receiver) = mpsc::channel();
    (Interrupter { signal }, InterruptGate { signal: receiver })
}

impl InterruptGate {
    /// Block the calling thread for `duration`, or until an interruption
    /// signal arrives, whichever is first.
    ///
    /// With no interrupter left alive the wait degrades to a plain sleep for
    /// the remaining time.
    pub fn pause(&self, duration: Duration) -> Result<(), ScenarioError> {
        let started = Instant::now();
        match self.signal.recv_timeout(duration) {
            Ok(()) => Err(ScenarioError::InterruptedWait(format!(
                "pause interrupted after {} ms",
                started.elapsed().as_millis()
            ))),
            Err(RecvTimeoutError::Timeout) => Ok(()),
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(duration.saturating_sub(started.elapsed()));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_completes_when_no_signal_arrives() {
        let (_interrupter, gate) = interrupt_pair();
        assert!(gate.pause(Duration::from_millis(5)).is_ok());
    }

    #[test]
    fn zero_duration_pause_returns_immediately() {
        let (_interrupter, gate) = interrupt_pair();
        assert!(gate.pause(Duration::ZERO).is_ok());
    }

    #[test]
    fn a_signal_during_the_pause_is_an_interrupted_wait() {
        let (interrupter, gate) = interrupt_pair();
        let trigger = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            interrupter.interrupt()
        });

        let err = gate.pause(Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ScenarioError::InterruptedWait(_)));
        assert!(trigger.join().unwrap());
    }

    #[test]
    fn a_dropped_interrupter_degrades_to_a_plain_sleep() {
        let (interrupter, gate) = interrupt_pair();
        drop(interrupter);

        let started = Instant::now();
        assert!(gate.pause(Duration::from_millis(20)).is_ok());
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn interrupting_with_no_listener_reports_failure() {
        let (interrupter, gate) = interrupt_pair();
        drop(gate);
        assert!(!interrupter.interrupt());
    }
}
