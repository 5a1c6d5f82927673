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

//! The process-wide default logger.
//!
//! The default logger is created on first use, writing JSON to standard output with the wall
//! clock and no hooks. It lives for the rest of the process; [`reset`] brings it back to that
//! initial configuration.

use std::io::Write;
use std::sync::LazyLock;

use crate::Clock;
use crate::Context;
use crate::EventOption;
use crate::Formatter;
use crate::Hook;
use crate::Logger;
use crate::Severity;
use crate::Trap;

static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::default);

/// The logger used by the crate-level functions and macros.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Set the output destination of the default logger.
pub fn set_output(out: impl Write + Send + 'static) {
    default_logger().set_output(out);
}

/// Set the clock of the default logger.
pub fn set_time(clock: impl Clock) {
    default_logger().set_time(clock);
}

/// Set the formatter of the default logger.
pub fn set_output_formatter(formatter: impl Formatter) {
    default_logger().set_output_formatter(formatter);
}

/// Set the trap of the default logger.
pub fn set_trap(trap: impl Trap) {
    default_logger().set_trap(trap);
}

/// Append a hook to the default logger.
pub fn register_hook(hook: impl Hook) {
    default_logger().register_hook(hook);
}

/// Bring the default logger back to its initial configuration.
pub fn reset() {
    default_logger().reset();
}

/// Flush the output of the default logger.
pub fn flush() {
    default_logger().flush();
}

/// Log `message` through the default logger. See [`Logger::print`].
pub fn print(ctx: &Context, severity: Severity, message: &str, options: &[&dyn EventOption]) {
    default_logger().print(ctx, severity, message, options);
}

pub fn trace(ctx: &Context, message: &str) {
    default_logger().trace(ctx, message);
}

pub fn debug(ctx: &Context, message: &str) {
    default_logger().debug(ctx, message);
}

pub fn info(ctx: &Context, message: &str) {
    default_logger().info(ctx, message);
}

pub fn warn(ctx: &Context, message: &str) {
    default_logger().warn(ctx, message);
}

pub fn error(ctx: &Context, message: &str) {
    default_logger().error(ctx, message);
}

pub fn fatal(ctx: &Context, message: &str) {
    default_logger().fatal(ctx, message);
}
