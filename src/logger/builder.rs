// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;

use crate::Clock;
use crate::Formatter;
use crate::Hook;
use crate::Logger;
use crate::Trap;
use crate::logger::global::default_logger;
use crate::logger::log_impl::State;

/// Create a new [`LoggerBuilder`] starting from the default settings.
///
/// # Examples
///
/// ```
/// use otellog::trap::StderrTrap;
///
/// let logger = otellog::builder()
///     .output(std::io::stderr())
///     .trap(StderrTrap::default())
///     .build();
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        state: State::default(),
    }
}

/// A builder for configuring a [`Logger`] in one go.
///
/// Unset parts keep the defaults of [`Logger::reset`].
#[must_use = "call `build` to construct a logger or `apply` to configure the default logger"]
pub struct LoggerBuilder {
    state: State,
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("formatter", &self.state.formatter)
            .field("hooks", &self.state.hooks.len())
            .field("trap", &self.state.trap)
            .finish_non_exhaustive()
    }
}

impl LoggerBuilder {
    /// Set the output destination. Default to standard output.
    pub fn output(mut self, out: impl Write + Send + 'static) -> Self {
        self.state.out = Box::new(out);
        self
    }

    /// Set the clock. Default to the wall clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use otellog::clock::FixedClock;
    ///
    /// let logger = otellog::builder()
    ///     .time(FixedClock::new(jiff::Timestamp::UNIX_EPOCH))
    ///     .build();
    /// ```
    pub fn time(mut self, clock: impl Clock) -> Self {
        self.state.clock = Box::new(clock);
        self
    }

    /// Set the formatter. Default to [`JsonFormatter`](crate::formatter::JsonFormatter).
    pub fn formatter(mut self, formatter: impl Formatter) -> Self {
        self.state.formatter = Box::new(formatter);
        self
    }

    /// Append a hook.
    pub fn hook(mut self, hook: impl Hook) -> Self {
        self.state.hooks.push(Box::new(hook));
        self
    }

    /// Set the trap. Default to [`DiscardTrap`](crate::trap::DiscardTrap).
    pub fn trap(mut self, trap: impl Trap) -> Self {
        self.state.trap = Box::new(trap);
        self
    }

    /// Build a standalone [`Logger`].
    pub fn build(self) -> Logger {
        Logger::from_state(self.state)
    }

    /// Replace the whole configuration of the default logger, hooks included.
    ///
    /// # Examples
    ///
    /// ```
    /// use otellog::Context;
    ///
    /// otellog::builder().output(std::io::stderr()).apply();
    /// otellog::info(&Context::background(), "goes to stderr");
    /// otellog::reset();
    /// ```
    pub fn apply(self) {
        default_logger().replace_state(self.state);
    }
}
