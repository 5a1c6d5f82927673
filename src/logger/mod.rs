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

mod builder;
pub use self::builder::LoggerBuilder;
pub use self::builder::builder;

mod log_impl;
pub use self::log_impl::Logger;

mod global;
pub use self::global::debug;
pub use self::global::default_logger;
pub use self::global::error;
pub use self::global::fatal;
pub use self::global::flush;
pub use self::global::info;
pub use self::global::print;
pub use self::global::register_hook;
pub use self::global::reset;
pub use self::global::set_output;
pub use self::global::set_output_formatter;
pub use self::global::set_time;
pub use self::global::set_trap;
pub use self::global::trace;
pub use self::global::warn;
