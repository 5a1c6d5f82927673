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

//! Log events and the values they carry.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::Serialize;
use serde::Serializer;
use serde_json::Map;
use serde_json::Value;

use crate::Error;

/// Structured attributes attached to an [`Event`].
///
/// This crate does not prescribe a schema; any JSON object is accepted.
pub type Attributes = Map<String, Value>;

/// The severity of a log event, numbered as in the OpenTelemetry log data model.
///
/// Every base level has three finer-grained siblings; e.g. `Info2` is slightly more severe than
/// `Info` and less severe than `Warn`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Severity {
    /// Designates very low priority, often extremely verbose, information.
    Trace = 1,
    Trace2 = 2,
    Trace3 = 3,
    Trace4 = 4,
    /// Designates lower priority information.
    Debug = 5,
    Debug2 = 6,
    Debug3 = 7,
    Debug4 = 8,
    /// Designates useful information.
    Info = 9,
    Info2 = 10,
    Info3 = 11,
    Info4 = 12,
    /// Designates hazardous situations.
    Warn = 13,
    Warn2 = 14,
    Warn3 = 15,
    Warn4 = 16,
    /// Designates very serious errors.
    Error = 17,
    Error2 = 18,
    Error3 = 19,
    Error4 = 20,
    /// Designates errors the application cannot recover from.
    Fatal = 21,
    Fatal2 = 22,
    Fatal3 = 23,
    Fatal4 = 24,
}

const ALL_SEVERITIES: [Severity; 24] = [
    Severity::Trace,
    Severity::Trace2,
    Severity::Trace3,
    Severity::Trace4,
    Severity::Debug,
    Severity::Debug2,
    Severity::Debug3,
    Severity::Debug4,
    Severity::Info,
    Severity::Info2,
    Severity::Info3,
    Severity::Info4,
    Severity::Warn,
    Severity::Warn2,
    Severity::Warn3,
    Severity::Warn4,
    Severity::Error,
    Severity::Error2,
    Severity::Error3,
    Severity::Error4,
    Severity::Fatal,
    Severity::Fatal2,
    Severity::Fatal3,
    Severity::Fatal4,
];

impl Severity {
    /// The severity number written to the `sev` field.
    pub fn as_number(self) -> u8 {
        self as u8
    }

    /// Look up a severity by its number.
    ///
    /// Returns `None` for numbers outside `1..=24`.
    ///
    /// # Examples
    ///
    /// ```
    /// use otellog::Severity;
    ///
    /// assert_eq!(Severity::from_number(9), Some(Severity::Info));
    /// assert_eq!(Severity::from_number(0), None);
    /// ```
    pub fn from_number(number: u8) -> Option<Severity> {
        ALL_SEVERITIES.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Return the short name of the `Severity`, e.g. `INFO` or `WARN3`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Trace2 => "TRACE2",
            Severity::Trace3 => "TRACE3",
            Severity::Trace4 => "TRACE4",
            Severity::Debug => "DEBUG",
            Severity::Debug2 => "DEBUG2",
            Severity::Debug3 => "DEBUG3",
            Severity::Debug4 => "DEBUG4",
            Severity::Info => "INFO",
            Severity::Info2 => "INFO2",
            Severity::Info3 => "INFO3",
            Severity::Info4 => "INFO4",
            Severity::Warn => "WARN",
            Severity::Warn2 => "WARN2",
            Severity::Warn3 => "WARN3",
            Severity::Warn4 => "WARN4",
            Severity::Error => "ERROR",
            Severity::Error2 => "ERROR2",
            Severity::Error3 => "ERROR3",
            Severity::Error4 => "ERROR4",
            Severity::Fatal => "FATAL",
            Severity::Fatal2 => "FATAL2",
            Severity::Fatal3 => "FATAL3",
            Severity::Fatal4 => "FATAL4",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Severity, Self::Err> {
        ALL_SEVERITIES
            .into_iter()
            .find(|sev| s.eq_ignore_ascii_case(sev.name()))
            .ok_or_else(|| Error::new(format!("malformed severity: {s:?}")))
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_number())
    }
}

/// Who may see a log event. Written to the `vis` field as an integer.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Visibility {
    /// Only operators of the service.
    Intern = 0,
    /// Customers of the service, e.g. in a tenant-facing audit view.
    Public = 1,
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A single log event.
///
/// Hooks and per-call options mutate the event before it reaches the
/// [`Formatter`](crate::formatter::Formatter); formatters only see a shared reference.
///
/// Serializes to the wire format, omitting empty fields:
///
/// ```json
/// {"time":"2022-01-01T01:02:03.000000004Z","sev":5,"name":"CustomLogEvent","body":"Log message","attr":{"http":{"method":"Get"}},"tn":"tnId","vis":0}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Timestamp>,
    #[serde(rename = "sev")]
    pub severity: Severity,
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(rename = "attr", skip_serializing_if = "has_no_attributes")]
    pub attributes: Option<Attributes>,
    #[serde(rename = "tn", skip_serializing_if = "is_blank")]
    pub tenant_id: Option<String>,
    #[serde(rename = "vis", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl Event {
    /// Create an event with only time, severity and body set.
    pub fn new(time: Timestamp, severity: Severity, body: impl Into<String>) -> Event {
        Event {
            time: Some(time),
            severity,
            name: None,
            body: body.into(),
            attributes: None,
            tenant_id: None,
            visibility: None,
        }
    }

    /// Insert one attribute, creating the attribute object if absent.
    ///
    /// Returns the value previously stored under `key`, if any.
    pub fn insert_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(key.into(), value.into())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn has_no_attributes(attributes: &Option<Attributes>) -> bool {
    attributes.as_ref().is_none_or(Map::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_numbers() {
        assert_eq!(Severity::Debug.as_number(), 5);
        assert_eq!(Severity::Info.as_number(), 9);
        assert_eq!(Severity::Error.as_number(), 17);

        for number in 1..=24 {
            let sev = Severity::from_number(number).unwrap();
            assert_eq!(sev.as_number(), number);
        }
        assert_eq!(Severity::from_number(0), None);
        assert_eq!(Severity::from_number(25), None);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("WARN3".parse::<Severity>().unwrap(), Severity::Warn3);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let time = Timestamp::from_second(0).unwrap();
        let mut event = Event::new(time, Severity::Info, "");
        event.name = Some(String::new());
        event.attributes = Some(Attributes::new());
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"time":"1970-01-01T00:00:00Z","sev":9}"#
        );
    }

    #[test]
    fn test_insert_attribute() {
        let time = Timestamp::from_second(0).unwrap();
        let mut event = Event::new(time, Severity::Info, "msg");
        assert_eq!(event.insert_attribute("count", 1), None);
        assert_eq!(event.insert_attribute("count", 2), Some(Value::from(1)));
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"time":"1970-01-01T00:00:00Z","sev":9,"body":"msg","attr":{"count":2}}"#
        );
    }
}
