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

use std::fmt;

use crate::Error;
use crate::Event;
use crate::formatter::Formatter;

type FormatFunction = dyn Fn(&Event, &str) -> Result<Vec<u8>, Error> + Send + Sync + 'static;

/// A formatter that you can pass the custom format function.
///
/// # Examples
///
/// ```
/// use otellog::Event;
/// use otellog::formatter::CustomFormatter;
///
/// let formatter = CustomFormatter::new(|event: &Event, message: &str| {
///     Ok(format!("{} {}", event.severity, message).into_bytes())
/// });
/// ```
pub struct CustomFormatter {
    f: Box<FormatFunction>,
}

impl fmt::Debug for CustomFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomFormatter {{ ... }}")
    }
}

impl CustomFormatter {
    pub fn new(
        formatter: impl Fn(&Event, &str) -> Result<Vec<u8>, Error> + Send + Sync + 'static,
    ) -> Self {
        CustomFormatter {
            f: Box::new(formatter),
        }
    }
}

impl Formatter for CustomFormatter {
    fn format(&self, event: &Event, message: &str) -> Result<Vec<u8>, Error> {
        (self.f)(event, message)
    }
}
