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

use std::sync::Arc;

use serde_json::Value;

use crate::Attributes;
use crate::Context;
use crate::Event;
use crate::Logger;
use crate::Severity;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

/// A [`log::Log`] implementation that forwards records of the `log` facade to a [`Logger`].
///
/// The record's message becomes the event body and its key-values become event attributes,
/// overriding attributes of the same name set by hooks. Hooks see an empty [`Context`].
///
/// All levels are forwarded; use [`log::set_max_level`] to drop records early.
#[derive(Debug, Default, Clone)]
pub struct LogBridge {
    logger: Option<Arc<Logger>>,
}

impl LogBridge {
    /// Forward records to `logger` instead of the default logger.
    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    fn logger(&self) -> &Logger {
        match &self.logger {
            Some(logger) => logger,
            None => crate::default_logger(),
        }
    }
}

/// Set up a [`LogBridge`] to the default logger as the global `log` logger.
///
/// # Errors
///
/// Return an error if a global logger has already been set.
///
/// # Examples
///
/// ```
/// if otellog::bridge::setup_log_bridge().is_err() {
///     eprintln!("failed to set logger");
/// }
/// log::info!(request_id = "r-1"; "Hello from the log facade");
/// ```
pub fn setup_log_bridge() -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::default()))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

struct KvCollector<'a> {
    kvs: &'a mut Attributes,
}

impl<'kvs> log::kv::VisitSource<'kvs> for KvCollector<'_> {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        self.kvs.insert(key.to_string(), to_json(&value));
        Ok(())
    }
}

fn to_json(value: &log::kv::Value) -> Value {
    if let Some(v) = value.to_bool() {
        Value::from(v)
    } else if let Some(v) = value.to_i64() {
        Value::from(v)
    } else if let Some(v) = value.to_u64() {
        Value::from(v)
    } else if let Some(v) = value.to_f64() {
        Value::from(v)
    } else {
        Value::from(value.to_string())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let mut kvs = Attributes::new();
        let mut visitor = KvCollector { kvs: &mut kvs };
        // KvCollector never fails; a failing source leaves the pairs collected so far.
        let _ = record.key_values().visit(&mut visitor);

        let with_kvs = |event: &mut Event| {
            for (key, value) in &kvs {
                event.insert_attribute(key.clone(), value.clone());
            }
        };

        self.logger().print_fmt(
            &Context::background(),
            record.level().into(),
            *record.args(),
            &[&with_kvs],
        );
    }

    fn flush(&self) {
        self.logger().flush();
    }
}
