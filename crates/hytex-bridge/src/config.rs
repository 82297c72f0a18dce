use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing windows of the toast lifecycle, in milliseconds.
///
/// All three are measured the way the page animates them: the entrance delay
/// and the visible window both start at insertion, the exit transition starts
/// when the visible window closes.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ToastTimings {
    /// Delay between insertion and the entrance transition.
    pub enter_ms: u64,
    /// How long a toast stays on screen, measured from insertion.
    pub visible_ms: u64,
    /// Length of the exit transition before the toast is removed.
    pub exit_ms: u64,
}

impl ToastTimings {
    pub fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    /// Remaining time between the end of the entrance and the start of the
    /// exit transition.
    pub fn shown(&self) -> Duration {
        Duration::from_millis(self.visible_ms.saturating_sub(self.enter_ms))
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_ms: 100,
            visible_ms: 6000,
            exit_ms: 300,
        }
    }
}

/// Global front-end configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the compression server all form submissions target.
    pub server_url: String,
    /// Toast lifecycle timings.
    pub toast: ToastTimings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: String::from("http://127.0.0.1:5000"),
            toast: ToastTimings::default(),
        }
    }
}
