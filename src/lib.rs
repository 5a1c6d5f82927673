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

//! otellog is a minimal structured logger. It turns each log call into an [`Event`] shaped after
//! the OpenTelemetry log data model, serializes it as one line of JSON and writes it to an output.
//!
//! # Overview
//!
//! A [`Logger`] holds an output, a [`Clock`], a [`Formatter`] and a list of [`Hook`]s. For every
//! log call it:
//!
//! 1. builds an event from the current time, the severity and the message,
//! 2. runs the hooks in registration order,
//! 3. runs the per-call [`EventOption`]s, which override whatever the hooks set,
//! 4. formats the event and writes it, newline-terminated, to the output.
//!
//! All of this happens under one lock, so lines written from many threads never interleave.
//! Logging never fails the caller: formatter and output errors drop the event and go to the
//! logger's [`Trap`].
//!
//! Output format:
//!
//! ```json
//! {"time":"2022-01-01T01:02:03.000000004Z","sev":9,"body":"Hello","tn":"4711"}
//! ```
//!
//! # Examples
//!
//! Log through the default logger:
//!
//! ```
//! use otellog::Context;
//!
//! let ctx = Context::background();
//! otellog::info(&ctx, "This is an info message.");
//! otellog::error!(&ctx, "Failed to load {}", "config.toml");
//! ```
//!
//! Configure a logger with a hook and per-call fields:
//!
//! ```
//! use otellog::Context;
//! use otellog::Logdata;
//! use otellog::Severity;
//! use otellog::Visibility;
//! use otellog::hook::TenantHook;
//!
//! let logger = otellog::builder()
//!     .output(std::io::stderr())
//!     .hook(TenantHook::new("tenant_id"))
//!     .build();
//!
//! let ctx = Context::background().with_value("tenant_id", "4711");
//! let logdata = Logdata::new().name("UserLoggedIn").visibility(Visibility::Public);
//! logger.print(&ctx, Severity::Info, "User logged in", &[&logdata]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod clock;
pub mod formatter;
pub mod hook;
pub mod trap;

mod context;
mod error;
mod event;
mod logger;
mod macros;
mod option;

pub use self::clock::Clock;
pub use self::context::Context;
pub use self::error::Error;
pub use self::event::Attributes;
pub use self::event::Event;
pub use self::event::Severity;
pub use self::event::Visibility;
pub use self::formatter::Formatter;
pub use self::hook::Hook;
pub use self::logger::*;
pub use self::option::EventOption;
pub use self::option::Logdata;
pub use self::trap::Trap;
