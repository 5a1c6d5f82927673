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

#![cfg(feature = "bridge-log")]

use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use otellog::Context;
use otellog::Event;
use otellog::clock::FixedClock;

#[derive(Clone, Default)]
struct OutputRecorder(Arc<Mutex<Vec<u8>>>);

impl Write for OutputRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_log_facade_goes_through_default_logger() {
    let rec = OutputRecorder::default();
    otellog::set_output(rec.clone());
    otellog::set_time(FixedClock::new(jiff::Timestamp::UNIX_EPOCH));
    otellog::register_hook(|_: &Context, event: &mut Event| {
        event.name = Some("FacadeEvent".to_string());
    });
    otellog::bridge::setup_log_bridge().unwrap();

    log::error!("disk {} is full", "/dev/sda1");
    log::debug!(retries = 3, fatal = false; "retrying");
    log::logger().flush();

    let output = String::from_utf8(rec.0.lock().unwrap().clone()).unwrap();
    insta::assert_snapshot!(output, @r#"
    {"time":"1970-01-01T00:00:00Z","sev":17,"name":"FacadeEvent","body":"disk /dev/sda1 is full"}
    {"time":"1970-01-01T00:00:00Z","sev":5,"name":"FacadeEvent","body":"retrying","attr":{"fatal":false,"retries":3}}
    "#);
}
