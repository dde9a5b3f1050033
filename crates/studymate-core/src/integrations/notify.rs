//! Notifier implementations.

use super::traits::Notifier;
use crate::error::CoreError;

/// Swallows every notification. Used where no delivery surface exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Prints notifications to stdout. The CLI's delivery surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), CoreError> {
        println!("[{title}] {body}");
        Ok(())
    }
}
