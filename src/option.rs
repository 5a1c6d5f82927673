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

//! Per-call overrides applied after all hooks.

use serde_json::Value;

use crate::Attributes;
use crate::Event;
use crate::Visibility;

/// A per-call override of event fields.
///
/// Options run after every registered [`Hook`](crate::Hook), so their writes win. Any
/// `Fn(&mut Event)` closure is an option.
pub trait EventOption {
    /// Mutate `event` in place.
    fn apply(&self, event: &mut Event);
}

impl<F> EventOption for F
where
    F: Fn(&mut Event),
{
    fn apply(&self, event: &mut Event) {
        self(event)
    }
}

/// Optional event fields supplied with a single log call.
///
/// Only fields that are set overwrite the event; `attributes` replaces the whole attribute
/// object.
///
/// # Examples
///
/// ```
/// use otellog::Context;
/// use otellog::Logdata;
/// use otellog::Severity;
/// use otellog::Visibility;
///
/// let logdata = Logdata::new()
///     .name("CustomLogEvent")
///     .visibility(Visibility::Intern)
///     .attribute("http", serde_json::json!({"method": "Get"}));
///
/// otellog::default_logger().print(&Context::background(), Severity::Debug, "Log message", &[&logdata]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Logdata {
    pub name: Option<String>,
    pub visibility: Option<Visibility>,
    pub attributes: Option<Attributes>,
    pub tenant_id: Option<String>,
}

impl Logdata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Add a single attribute to the attributes carried by this `Logdata`.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(key.into(), value.into());
        self
    }
}

impl EventOption for Logdata {
    fn apply(&self, event: &mut Event) {
        if let Some(name) = &self.name {
            event.name = Some(name.clone());
        }
        if let Some(visibility) = self.visibility {
            event.visibility = Some(visibility);
        }
        if let Some(attributes) = &self.attributes {
            event.attributes = Some(attributes.clone());
        }
        if let Some(tenant_id) = &self.tenant_id {
            event.tenant_id = Some(tenant_id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::Severity;

    #[test]
    fn test_unset_fields_are_kept() {
        let mut event = Event::new(Timestamp::UNIX_EPOCH, Severity::Info, "msg");
        event.name = Some("FromHook".to_string());
        event.tenant_id = Some("tn".to_string());

        Logdata::new().visibility(Visibility::Public).apply(&mut event);

        assert_eq!(event.name.as_deref(), Some("FromHook"));
        assert_eq!(event.tenant_id.as_deref(), Some("tn"));
        assert_eq!(event.visibility, Some(Visibility::Public));
    }

    #[test]
    fn test_attributes_replace_whole_object() {
        let mut event = Event::new(Timestamp::UNIX_EPOCH, Severity::Info, "msg");
        event.insert_attribute("from_hook", true);

        Logdata::new().attribute("from_call", 1).apply(&mut event);

        let attributes = event.attributes.unwrap();
        assert!(!attributes.contains_key("from_hook"));
        assert_eq!(attributes["from_call"], 1);
    }
}
