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

use logdispatch::Category;
use logdispatch::Dispatcher;
use logdispatch::append::Testing;

#[test]
fn test_log_crate_records_are_dispatched() {
    let console = Testing::default();
    Dispatcher::builder()
        .console(console.clone())
        .categories([Category::Info, Category::Error])
        .apply();
    logdispatch::bridge::setup_log_crate();

    log::info!("hello {}", "world");
    log::debug!("filtered out");
    log::warn!("disk almost full");

    let lines = console.lines();
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert_eq!(lines[0], "hello world");
    assert!(lines[1].starts_with("[ERROR]: tests/log_bridge.rs : "), "{lines:?}");
    assert!(lines[1].ends_with(" : log_bridge : disk almost full"), "{lines:?}");

    assert!(log::log_enabled!(log::Level::Error));
    assert!(!log::log_enabled!(log::Level::Debug));
}
