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

//! Callbacks that enrich events before they are formatted.

use crate::Context;
use crate::Event;

/// A callback run on every event before it is formatted.
///
/// Hooks run in registration order, so a later hook sees and may overwrite the fields set by an
/// earlier one. Per-call [`EventOption`](crate::EventOption)s run after all hooks.
///
/// Any `Fn(&Context, &mut Event)` closure is a hook:
///
/// ```
/// use otellog::Context;
/// use otellog::Event;
///
/// otellog::register_hook(|ctx: &Context, event: &mut Event| {
///     if let Some(tenant_id) = ctx.get("tenant_id") {
///         event.tenant_id = Some(tenant_id.to_string());
///     }
/// });
/// # otellog::reset();
/// ```
///
/// Hooks run while the logger's lock is held; a hook must not log through the same logger.
pub trait Hook: Send + Sync + 'static {
    /// Mutate `event` in place.
    fn run(&self, ctx: &Context, event: &mut Event);
}

impl<F> Hook for F
where
    F: Fn(&Context, &mut Event) + Send + Sync + 'static,
{
    fn run(&self, ctx: &Context, event: &mut Event) {
        self(ctx, event)
    }
}

/// A hook that copies a context value into the event's tenant id.
///
/// Events logged with a context that lacks the key are left unchanged.
///
/// # Examples
///
/// ```
/// use otellog::hook::TenantHook;
///
/// otellog::register_hook(TenantHook::new("tenant_id"));
/// # otellog::reset();
/// ```
#[derive(Debug, Clone)]
pub struct TenantHook {
    key: String,
}

impl TenantHook {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Hook for TenantHook {
    fn run(&self, ctx: &Context, event: &mut Event) {
        if let Some(tenant_id) = ctx.get(&self.key) {
            event.tenant_id = Some(tenant_id.to_string());
        }
    }
}

/// A hook that copies every context pair into the event's attributes.
///
/// Existing attributes with the same key are overwritten.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct ContextAttributesHook {}

impl Hook for ContextAttributesHook {
    fn run(&self, ctx: &Context, event: &mut Event) {
        for (key, value) in ctx.iter() {
            event.insert_attribute(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::Severity;

    fn event() -> Event {
        Event::new(Timestamp::UNIX_EPOCH, Severity::Info, "msg")
    }

    #[test]
    fn test_tenant_hook() {
        let hook = TenantHook::new("tn");

        let mut e = event();
        hook.run(&Context::background(), &mut e);
        assert_eq!(e.tenant_id, None);

        hook.run(&Context::background().with_value("tn", "acme"), &mut e);
        assert_eq!(e.tenant_id.as_deref(), Some("acme"));
    }

    #[test]
    fn test_context_attributes_hook() {
        let ctx = Context::background()
            .with_value("request_id", "r-1")
            .with_value("user", "u-2");

        let mut e = event();
        ContextAttributesHook::default().run(&ctx, &mut e);

        let attributes = e.attributes.unwrap();
        assert_eq!(attributes["request_id"], "r-1");
        assert_eq!(attributes["user"], "u-2");
    }
}
