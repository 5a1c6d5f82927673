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
use std::io;
use std::io::Write;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Clock;
use crate::Context;
use crate::Error;
use crate::Event;
use crate::EventOption;
use crate::Formatter;
use crate::Hook;
use crate::Severity;
use crate::Trap;
use crate::clock::SystemClock;
use crate::formatter::JsonFormatter;
use crate::trap::DiscardTrap;

/// A structured logger writing one formatted line per event to its output.
///
/// Every operation on a `Logger`, configuration and logging alike, takes the same lock. Log
/// statements from different threads are therefore written whole and one after another.
///
/// A logging call never fails: if the formatter or the output returns an error, the event is
/// dropped and the error is passed to the logger's [`Trap`].
///
/// # Examples
///
/// ```
/// use otellog::Context;
/// use otellog::Logger;
/// use otellog::Severity;
///
/// let logger = Logger::new(std::io::stderr());
/// logger.print(&Context::background(), Severity::Info, "Hello", &[]);
/// ```
pub struct Logger {
    state: Mutex<State>,
}

pub(super) struct State {
    pub(super) out: Box<dyn Write + Send>,
    pub(super) clock: Box<dyn Clock>,
    pub(super) formatter: Box<dyn Formatter>,
    pub(super) hooks: Vec<Box<dyn Hook>>,
    pub(super) trap: Box<dyn Trap>,
}

impl Default for State {
    fn default() -> Self {
        State {
            out: Box::new(io::stdout()),
            clock: Box::new(SystemClock::default()),
            formatter: Box::new(JsonFormatter::default()),
            hooks: vec![],
            trap: Box::new(DiscardTrap::default()),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("formatter", &state.formatter)
            .field("hooks", &state.hooks.len())
            .field("trap", &state.trap)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    /// A logger writing JSON to standard output.
    fn default() -> Self {
        Logger::from_state(State::default())
    }
}

impl Logger {
    /// Create a logger writing to `out`, with the wall clock, the JSON formatter and no hooks.
    pub fn new(out: impl Write + Send + 'static) -> Logger {
        let logger = Logger::default();
        logger.set_output(out);
        logger
    }

    pub(super) fn from_state(state: State) -> Logger {
        Logger {
            state: Mutex::new(state),
        }
    }

    // A hook that panicked while the lock was held leaves the state intact; keep logging.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn replace_state(&self, state: State) {
        *self.lock() = state;
    }

    /// Set the output destination. Replaces the previous output.
    pub fn set_output(&self, out: impl Write + Send + 'static) {
        self.lock().out = Box::new(out);
    }

    /// Set the clock used to timestamp events.
    pub fn set_time(&self, clock: impl Clock) {
        self.lock().clock = Box::new(clock);
    }

    /// Set the formatter that serializes events.
    pub fn set_output_formatter(&self, formatter: impl Formatter) {
        self.lock().formatter = Box::new(formatter);
    }

    /// Set the trap receiving formatter and output errors.
    pub fn set_trap(&self, trap: impl Trap) {
        self.lock().trap = Box::new(trap);
    }

    /// Append a hook. Hooks run in the order they were registered.
    pub fn register_hook(&self, hook: impl Hook) {
        self.lock().hooks.push(Box::new(hook));
    }

    /// Restore standard output, the wall clock, the JSON formatter and the discarding trap, and
    /// remove all hooks.
    pub fn reset(&self) {
        self.replace_state(State::default());
    }

    /// Flush the output.
    pub fn flush(&self) {
        let mut state = self.lock();
        if let Err(err) = state.out.flush() {
            state.trap.trap(&Error::from_io_error(err));
        }
    }

    /// Log `message` with the given severity.
    ///
    /// `options` run after all registered hooks and may overwrite any field they set.
    pub fn print(
        &self,
        ctx: &Context,
        severity: Severity,
        message: &str,
        options: &[&dyn EventOption],
    ) {
        self.output(ctx, severity, message, options);
    }

    /// Log a formatted message with the given severity.
    ///
    /// This is what the [`info!`](crate::info!) family of macros expands to.
    pub fn print_fmt(
        &self,
        ctx: &Context,
        severity: Severity,
        args: fmt::Arguments,
        options: &[&dyn EventOption],
    ) {
        match args.as_str() {
            Some(message) => self.output(ctx, severity, message, options),
            None => self.output(ctx, severity, &args.to_string(), options),
        }
    }

    pub fn trace(&self, ctx: &Context, message: &str) {
        self.output(ctx, Severity::Trace, message, &[]);
    }

    pub fn debug(&self, ctx: &Context, message: &str) {
        self.output(ctx, Severity::Debug, message, &[]);
    }

    pub fn info(&self, ctx: &Context, message: &str) {
        self.output(ctx, Severity::Info, message, &[]);
    }

    pub fn warn(&self, ctx: &Context, message: &str) {
        self.output(ctx, Severity::Warn, message, &[]);
    }

    pub fn error(&self, ctx: &Context, message: &str) {
        self.output(ctx, Severity::Error, message, &[]);
    }

    pub fn fatal(&self, ctx: &Context, message: &str) {
        self.output(ctx, Severity::Fatal, message, &[]);
    }

    fn output(
        &self,
        ctx: &Context,
        severity: Severity,
        message: &str,
        options: &[&dyn EventOption],
    ) {
        let mut state = self.lock();
        let State {
            out,
            clock,
            formatter,
            hooks,
            trap,
        } = &mut *state;

        let mut event = Event::new(clock.now(), severity, message);
        for hook in hooks.iter() {
            hook.run(ctx, &mut event);
        }
        for option in options {
            option.apply(&mut event);
        }

        let mut bytes = match formatter.format(&event, message) {
            Ok(bytes) => bytes,
            Err(err) => {
                trap.trap(&err.with_context("severity", severity));
                return;
            }
        };
        if bytes.last() != Some(&b'\n') {
            bytes.push(b'\n');
        }
        if let Err(err) = out.write_all(&bytes) {
            trap.trap(&Error::from_io_error(err).with_context("severity", severity));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::Timestamp;

    use super::*;
    use crate::clock::FixedClock;
    use crate::formatter::CustomFormatter;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn fixed_logger(buf: &SharedBuf) -> Logger {
        let logger = Logger::new(buf.clone());
        logger.set_time(FixedClock::new(Timestamp::UNIX_EPOCH));
        logger
    }

    #[test]
    fn test_formatted_message() {
        let buf = SharedBuf::default();
        let logger = fixed_logger(&buf);

        let name = "format";
        logger.print_fmt(
            &Context::background(),
            Severity::Info,
            format_args!("Log {name} info"),
            &[],
        );
        assert_eq!(
            buf.contents(),
            "{\"time\":\"1970-01-01T00:00:00Z\",\"sev\":9,\"body\":\"Log format info\"}\n"
        );
    }

    #[test]
    fn test_newline_is_not_doubled() {
        let buf = SharedBuf::default();
        let logger = fixed_logger(&buf);
        logger.set_output_formatter(CustomFormatter::new(|_: &Event, message: &str| {
            Ok(format!("{message}\n").into_bytes())
        }));

        logger.info(&Context::background(), "one");
        logger.set_output_formatter(CustomFormatter::new(|_: &Event, _: &str| Ok(vec![])));
        logger.info(&Context::background(), "two");

        assert_eq!(buf.contents(), "one\n\n");
    }

    #[derive(Debug, Clone, Default)]
    struct CountingTrap(Arc<Mutex<Vec<String>>>);

    impl Trap for CountingTrap {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    #[test]
    fn test_formatter_error_drops_event() {
        let buf = SharedBuf::default();
        let trap = CountingTrap::default();
        let logger = fixed_logger(&buf);
        logger.set_trap(trap.clone());
        logger.set_output_formatter(CustomFormatter::new(|_: &Event, _: &str| {
            Err(Error::new("boom"))
        }));

        logger.error(&Context::background(), "lost");

        assert_eq!(buf.contents(), "");
        assert_eq!(
            trap.0.lock().unwrap().as_slice(),
            ["boom, context: { severity: ERROR }"]
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn test_write_error_reaches_trap() {
        let trap = CountingTrap::default();
        let logger = Logger::new(FailingWriter);
        logger.set_trap(trap.clone());

        logger.info(&Context::background(), "lost");
        logger.flush();

        assert_eq!(trap.0.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_poisoned_lock_keeps_logging() {
        let buf = SharedBuf::default();
        let logger = Arc::new(fixed_logger(&buf));
        logger.register_hook(|ctx: &Context, _: &mut Event| {
            if ctx.get("panic").is_some() {
                panic!("hook failed");
            }
        });

        let cloned = Arc::clone(&logger);
        let result = std::thread::spawn(move || {
            cloned.info(&Context::background().with_value("panic", "yes"), "boom");
        })
        .join();
        assert!(result.is_err());

        logger.info(&Context::background(), "still here");
        assert_eq!(
            buf.contents(),
            "{\"time\":\"1970-01-01T00:00:00Z\",\"sev\":9,\"body\":\"still here\"}\n"
        );
    }
}
