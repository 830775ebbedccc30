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
use std::str::FromStr;

use crate::Error;

/// Where a [`Dispatcher`](crate::Dispatcher) writes its lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sink {
    /// Discard every line.
    None,
    /// Standard output, or standard error for error lines.
    #[default]
    Console,
    /// Append to the dispatcher's log file.
    File,
}

impl Sink {
    /// The lower-case name of the sink.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sink::None => "none",
            Sink::Console => "console",
            Sink::File => "file",
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sink {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Sink::None, Sink::Console, Sink::File]
            .into_iter()
            .find(|sink| sink.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::new("unknown log sink").with_context("sink", s))
    }
}
