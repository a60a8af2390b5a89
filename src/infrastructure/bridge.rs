//! Panic-to-result bridge
//!
//! The one place where an unwinding panic from foreign code is turned into
//! an `Error` value. Use it at integration boundaries only; it must not be
//! used to hide misuse of this crate (`value_or_panic` and friends).
//!
//! Panics are only capturable with `panic = "unwind"`. The default panic
//! hook still prints the panic before it is captured.

use crate::config::BridgeConfig;
use crate::domain::result::Result;
use metrics::counter;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Counter incremented for every panic converted into an `Error`
pub const CAPTURES_METRIC: &str = "resultant_bridge_captures_total";

#[derive(Debug, Clone, Default)]
pub struct Bridge {
    config: BridgeConfig,
}

impl Bridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Run a side-effecting action: `Okay(())` if it returns, `Error(message)`
    /// if it panics.
    pub fn try_action(&self, action: impl FnOnce()) -> Result<(), String> {
        self.try_function(action)
    }

    /// Run a value-returning function: `Okay(value)` or `Error(message)`.
    pub fn try_function<T>(&self, function: impl FnOnce() -> T) -> Result<T, String> {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => {
                debug!("bridge call completed");
                Result::Okay(value)
            }
            Err(payload) => Result::Error(self.capture(payload)),
        }
    }

    /// Chain a panicking step onto an existing result. An `Error` is
    /// returned unchanged and `function` is not called.
    pub fn try_catch<V, T>(
        &self,
        result: Result<V, String>,
        function: impl FnOnce(V) -> T,
    ) -> Result<T, String> {
        result.and_then(|value| self.try_function(|| function(value)))
    }

    fn capture(&self, payload: Box<dyn Any + Send>) -> String {
        let message = payload_message(payload.as_ref())
            .unwrap_or(self.config.fallback_message.as_str())
            .to_owned();

        counter!(CAPTURES_METRIC).increment(1);
        if self.config.log_captures {
            warn!(panic = %message, "captured panic as an Error result");
        }

        message
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// [`Bridge::try_action`] with the default configuration
pub fn try_action(action: impl FnOnce()) -> Result<(), String> {
    Bridge::default().try_action(action)
}

/// [`Bridge::try_function`] with the default configuration
pub fn try_function<T>(function: impl FnOnce() -> T) -> Result<T, String> {
    Bridge::default().try_function(function)
}

/// [`Bridge::try_catch`] with the default configuration
pub fn try_catch<V, T>(result: Result<V, String>, function: impl FnOnce(V) -> T) -> Result<T, String> {
    Bridge::default().try_catch(result, function)
}

impl<V> Result<V, String> {
    /// Method form of [`try_catch`] using the default bridge.
    pub fn try_catch<T>(self, function: impl FnOnce(V) -> T) -> Result<T, String> {
        try_catch(self, function)
    }
}
