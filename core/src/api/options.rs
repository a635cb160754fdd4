//! Configuration options for commands.

use core::time::Duration;

/// Configuration options for running a stack program.
///
/// # Example
///
/// ```
/// use stackbot_core::api::EvalOptions;
///
/// let options = EvalOptions { verbose: true };
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// Record one trace line per executed instruction.
    ///
    /// Default: false
    pub verbose: bool,
}

/// Configuration options for scanning messages for rickroll links.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use stackbot_core::api::ScanOptions;
///
/// let options = ScanOptions {
///     max_urls: 3,
///     ..ScanOptions::default()
/// };
/// assert_eq!(options.user_cooldown, Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Messages with more URLs than this are refused outright.
    ///
    /// Default: 5
    pub max_urls: usize,

    /// Minimum time between two checks requested by the same user.
    ///
    /// Default: 1 minute
    pub user_cooldown: Duration,

    /// Minimum time between two checks of the same message.
    ///
    /// Default: 3 minutes
    pub message_cooldown: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_urls: 5,
            user_cooldown: Duration::from_secs(60),
            message_cooldown: Duration::from_secs(3 * 60),
        }
    }
}
