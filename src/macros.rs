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

//! Formatting macros, one per base severity.
//!
//! Each macro takes a [`Context`](crate::Context) reference followed by `format!` arguments and
//! logs through the default logger. Prefix the arguments with `logger: <expr>,` to log through
//! another [`Logger`](crate::Logger).

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    (logger: $logger:expr, $ctx:expr, $sev:expr, $($arg:tt)+) => {
        $logger.print_fmt($ctx, $sev, ::std::format_args!($($arg)+), &[])
    };
    ($ctx:expr, $sev:expr, $($arg:tt)+) => {
        $crate::default_logger().print_fmt($ctx, $sev, ::std::format_args!($($arg)+), &[])
    };
}

/// Log a formatted message with [`Severity::Trace`](crate::Severity::Trace).
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $ctx, $crate::Severity::Trace, $($arg)+)
    };
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__log!($ctx, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a formatted message with [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $ctx, $crate::Severity::Debug, $($arg)+)
    };
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__log!($ctx, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a formatted message with [`Severity::Info`](crate::Severity::Info).
///
/// # Examples
///
/// ```
/// use otellog::Context;
/// use otellog::Logger;
///
/// let ctx = Context::background();
/// otellog::info!(&ctx, "Log {} info", "format");
///
/// let logger = Logger::new(std::io::sink());
/// otellog::info!(logger: logger, &ctx, "Log {} info", "format");
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $ctx, $crate::Severity::Info, $($arg)+)
    };
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__log!($ctx, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a formatted message with [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $ctx, $crate::Severity::Warn, $($arg)+)
    };
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__log!($ctx, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log a formatted message with [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $ctx, $crate::Severity::Error, $($arg)+)
    };
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__log!($ctx, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a formatted message with [`Severity::Fatal`](crate::Severity::Fatal).
///
/// Only logs; the process keeps running.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::__log!(logger: $logger, $ctx, $crate::Severity::Fatal, $($arg)+)
    };
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__log!($ctx, $crate::Severity::Fatal, $($arg)+)
    };
}
