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

use std::fs;
use std::sync::Arc;
use std::thread;

use otellog::Context;
use otellog::Event;
use otellog::Logger;
use otellog::Severity;

#[test]
fn test_concurrent_lines_do_not_interleave() {
    const THREADS: usize = 8;
    const LINES: usize = 200;

    let file = tempfile::NamedTempFile::new().unwrap();
    let logger = Arc::new(Logger::new(file.reopen().unwrap()));
    logger.register_hook(|_: &Context, event: &mut Event| {
        event.insert_attribute("padding", "x".repeat(512));
    });

    let handles = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let ctx = Context::background();
                for i in 0..LINES {
                    otellog::info!(logger: logger, &ctx, "thread {t} line {i}");
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }
    logger.flush();

    let contents = fs::read_to_string(file.path()).unwrap();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), THREADS * LINES);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["sev"], Severity::Info.as_number());
        assert!(value["body"].as_str().unwrap().starts_with("thread "));
    }
}
