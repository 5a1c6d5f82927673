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

use std::collections::BTreeMap;
use std::sync::Arc;

/// Request-scoped key-value pairs handed to every [`Hook`](crate::hook::Hook).
///
/// A `Context` is immutable; [`Context::with_value`] returns a new context and leaves the
/// original untouched, so one context can be shared by every log call of a request.
///
/// # Examples
///
/// ```
/// use otellog::Context;
///
/// let ctx = Context::background().with_value("tenant_id", "4711");
/// assert_eq!(ctx.get("tenant_id"), Some("4711"));
/// assert_eq!(Context::background().get("tenant_id"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: Arc<BTreeMap<String, String>>,
}

impl Context {
    /// An empty context.
    pub fn background() -> Context {
        Context::default()
    }

    /// Return a copy of this context with `key` set to `value`.
    #[must_use]
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<String>) -> Context {
        let mut values = Arc::clone(&self.values);
        Arc::make_mut(&mut values).insert(key.into(), value.into());
        Context { values }
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate over all pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_value_leaves_parent_untouched() {
        let parent = Context::background().with_value("a", "1");
        let child = parent.with_value("b", "2").with_value("a", "3");

        assert_eq!(parent.get("a"), Some("1"));
        assert_eq!(parent.get("b"), None);
        assert_eq!(
            child.iter().collect::<Vec<_>>(),
            vec![("a", "3"), ("b", "2")]
        );
        assert!(Context::background().is_empty());
    }
}
