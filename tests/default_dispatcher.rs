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
use logdispatch::Sink;
use logdispatch::append::Testing;

// The default dispatcher is process-wide, so this file holds a single test.
#[test]
fn test_macros_use_default_dispatcher() {
    let console = Testing::default();
    let file = Testing::default();
    Dispatcher::builder()
        .console(console.clone())
        .file(file.clone())
        .apply();
    assert!(Dispatcher::builder().try_apply().is_err());

    let function = "default_dispatcher::test_macros_use_default_dispatcher";

    logdispatch::info!("a", 1);
    logdispatch::debug!("value", 2);
    logdispatch::success!();
    let line = line!() + 1;
    logdispatch::error!("boom");

    assert_eq!(
        console.lines(),
        vec![
            "a 1".to_string(),
            format!("[DEBUG]: {function} : value 2"),
            format!("[SUCCESS]: {function}"),
            format!("[ERROR]: {} : {line} : {function} : boom", file!()),
        ]
    );

    logdispatch::set_sink(Sink::File);
    logdispatch::set_categories([Category::Success]);
    logdispatch::info!("filtered");
    logdispatch::success!();

    assert_eq!(file.lines(), vec![format!("[SUCCESS]: {function}")]);
    assert_eq!(logdispatch::default_dispatcher().sink(), Sink::File);
}
