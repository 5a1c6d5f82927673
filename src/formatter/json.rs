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

use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::Serialize;

use crate::Attributes;
use crate::Error;
use crate::Event;
use crate::Severity;
use crate::Visibility;
use crate::formatter::Formatter;

/// A JSON formatter writing one object per event. This is the default formatter.
///
/// Fields are written in the order below and only if they are non-empty:
///
/// ```json
/// {"time":"2022-01-01T01:02:03.000000004Z","sev":5,"name":"CustomLogEvent","body":"Log message","attr":{"http":{"method":"Get"}},"tn":"tnId","vis":0}
/// ```
///
/// Timestamps are written in UTC with as many fractional digits as needed, unless a timezone is
/// set.
///
/// # Examples
///
/// ```
/// use otellog::formatter::JsonFormatter;
///
/// let json_formatter = JsonFormatter::default();
/// ```
#[derive(Default, Debug, Clone)]
pub struct JsonFormatter {
    tz: Option<TimeZone>,
}

impl JsonFormatter {
    /// Write timestamps with the offset of the given timezone instead of UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use otellog::formatter::JsonFormatter;
    ///
    /// let json_formatter = JsonFormatter::default().timezone(TimeZone::fixed(jiff::tz::offset(2)));
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

struct EventTime<'a> {
    ts: Timestamp,
    tz: Option<&'a TimeZone>,
}

impl fmt::Display for EventTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tz {
            Some(tz) => write!(f, "{}", self.ts.display_with_offset(tz.to_offset(self.ts))),
            None => write!(f, "{}", self.ts),
        }
    }
}

#[derive(Serialize)]
struct EventLine<'a> {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_time"
    )]
    time: Option<EventTime<'a>>,
    sev: Severity,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attr: Option<&'a Attributes>,
    #[serde(skip_serializing_if = "str::is_empty")]
    tn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vis: Option<Visibility>,
}

fn serialize_time<S>(time: &Option<EventTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match time {
        Some(time) => serializer.collect_str(time),
        None => serializer.serialize_none(),
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, event: &Event, _: &str) -> Result<Vec<u8>, Error> {
        let line = EventLine {
            time: event.time.map(|ts| EventTime {
                ts,
                tz: self.tz.as_ref(),
            }),
            sev: event.severity,
            name: event.name.as_deref().unwrap_or_default(),
            body: &event.body,
            attr: event.attributes.as_ref().filter(|attr| !attr.is_empty()),
            tn: event.tenant_id.as_deref().unwrap_or_default(),
            vis: event.visibility,
        };

        Ok(serde_json::to_vec(&line)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_event() -> Event {
        let ts: Timestamp = "2022-01-01T01:02:03.000000004Z".parse().unwrap();
        Event::new(ts, Severity::Debug, "Log message")
    }

    fn format(formatter: &JsonFormatter, event: &Event) -> String {
        String::from_utf8(formatter.format(event, &event.body).unwrap()).unwrap()
    }

    #[test]
    fn test_minimal_event() {
        let formatter = JsonFormatter::default();
        insta::assert_snapshot!(
            format(&formatter, &fixed_event()),
            @r#"{"time":"2022-01-01T01:02:03.000000004Z","sev":5,"body":"Log message"}"#
        );
    }

    #[test]
    fn test_all_fields_in_wire_order() {
        let mut event = fixed_event();
        event.visibility = Some(Visibility::Intern);
        event.tenant_id = Some("tnId".to_string());
        event.insert_attribute("http", serde_json::json!({"method": "Get"}));
        event.name = Some("CustomLogEvent".to_string());

        let formatter = JsonFormatter::default();
        insta::assert_snapshot!(
            format(&formatter, &event),
            @r#"{"time":"2022-01-01T01:02:03.000000004Z","sev":5,"name":"CustomLogEvent","body":"Log message","attr":{"http":{"method":"Get"}},"tn":"tnId","vis":0}"#
        );
    }

    #[test]
    fn test_matches_event_serialization() {
        let mut event = fixed_event();
        event.tenant_id = Some("tnId".to_string());
        event.visibility = Some(Visibility::Public);

        let formatter = JsonFormatter::default();
        assert_eq!(
            format(&formatter, &event),
            serde_json::to_string(&event).unwrap()
        );
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let mut event = fixed_event();
        event.time = None;
        event.body.clear();
        event.name = Some(String::new());
        event.attributes = Some(Attributes::new());

        let formatter = JsonFormatter::default();
        assert_eq!(format(&formatter, &event), r#"{"sev":5}"#);
    }

    #[test]
    fn test_timezone() {
        let formatter = JsonFormatter::default().timezone(TimeZone::fixed(jiff::tz::offset(8)));
        insta::assert_snapshot!(
            format(&formatter, &fixed_event()),
            @r#"{"time":"2022-01-01T09:02:03.000000004+08:00","sev":5,"body":"Log message"}"#
        );
    }
}
