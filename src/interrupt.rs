//! Ctrl-C handling
//!
//! The handler only records that an interrupt happened. Blocking operations poll the
//! flag and return [`SkillsError::Interrupted`], so scratch checkouts are dropped (and
//! removed) while the error unwinds to `main`.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SkillsError, io_error};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide Ctrl-C handler.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
        .map_err(|e| io_error(format!("Failed to install Ctrl-C handler: {e}")))
}

/// Whether an interrupt is pending.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Consume a pending interrupt, returning whether there was one.
pub fn take() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

/// Fail with [`SkillsError::Interrupted`] if an interrupt is pending.
pub fn check() -> Result<()> {
    if is_interrupted() {
        Err(SkillsError::Interrupted)
    } else {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn raise() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}
