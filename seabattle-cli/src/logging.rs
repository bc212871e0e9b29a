// Copyright 2020 Zachary Stewart
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
use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level, e.g. `debug`.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Writes records to stderr so they stay out of the way of the board on stdout.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `warn` when unset or invalid.
fn level_from(value: Option<String>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger with the level taken from [`LOG_ENV`].
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_warn() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("nonsense".to_string())), LevelFilter::Warn);
        assert_eq!(level_from(Some("debug".to_string())), LevelFilter::Debug);
        assert_eq!(level_from(Some("TRACE".to_string())), LevelFilter::Trace);
    }
}
