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

//! Formatters that serialize events into log lines.

use std::fmt;

use crate::Error;
use crate::Event;

mod custom;
mod json;

pub use self::custom::CustomFormatter;
pub use self::json::JsonFormatter;

/// Serializes an [`Event`] into the bytes of one log line.
///
/// The logger appends a trailing newline if the returned bytes do not end with one. Returning an
/// error drops the event.
pub trait Formatter: fmt::Debug + Send + Sync + 'static {
    /// Format `event`. `message` is the message as passed to the logging call, before any hook
    /// or option could rewrite the event body.
    fn format(&self, event: &Event, message: &str) -> Result<Vec<u8>, Error>;
}
