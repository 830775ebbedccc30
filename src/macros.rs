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

//! Log macros capturing the call site.
//!
//! Each macro accepts an optional `dispatcher: <expr>` first argument naming the
//! [`Dispatcher`](crate::Dispatcher) to log to; without it, the
//! [default dispatcher](crate::default_dispatcher) is used. The remaining arguments are any
//! values implementing [`Display`](std::fmt::Display).

/// Expands to the path of the enclosing function, e.g. `my_crate::server::run`.
///
/// Closures report the function they are defined in.
///
/// ```
/// fn handler() -> &'static str {
///     logdispatch::function_name!()
/// }
///
/// assert!(handler().ends_with("handler"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Log the given items at the info category.
///
/// ```
/// logdispatch::info!("listening on", 8080);
///
/// let dispatcher = logdispatch::Dispatcher::default();
/// logdispatch::info!(dispatcher: &dispatcher, "ready");
/// ```
#[macro_export]
macro_rules! info {
    (dispatcher: $dispatcher:expr $(, $item:expr)* $(,)?) => {
        $crate::Dispatcher::info(
            $dispatcher,
            &[$(&$item as &dyn ::std::fmt::Display),*],
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::info!(dispatcher: $crate::default_dispatcher() $(, $item)*)
    };
}

/// Log the given items at the debug category, tagged with the calling function.
///
/// ```
/// let attempt = 3;
/// logdispatch::debug!("retrying, attempt", attempt);
/// ```
#[macro_export]
macro_rules! debug {
    (dispatcher: $dispatcher:expr $(, $item:expr)* $(,)?) => {
        $crate::Dispatcher::debug(
            $dispatcher,
            $crate::function_name!(),
            &[$(&$item as &dyn ::std::fmt::Display),*],
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::debug!(dispatcher: $crate::default_dispatcher() $(, $item)*)
    };
}

/// Log a success marker for the calling function.
///
/// ```
/// fn migrate() {
///     logdispatch::success!();
/// }
/// # migrate();
/// ```
#[macro_export]
macro_rules! success {
    (dispatcher: $dispatcher:expr $(,)?) => {
        $crate::Dispatcher::success($dispatcher, $crate::function_name!())
    };
    () => {
        $crate::success!(dispatcher: $crate::default_dispatcher())
    };
}

/// Log the given items at the error category, tagged with file, line and function.
///
/// ```
/// logdispatch::error!("connection refused:", "127.0.0.1:8080");
/// ```
#[macro_export]
macro_rules! error {
    (dispatcher: $dispatcher:expr $(, $item:expr)* $(,)?) => {
        $crate::Dispatcher::error(
            $dispatcher,
            $crate::Location::new(::std::file!(), ::std::line!(), $crate::function_name!()),
            &[$(&$item as &dyn ::std::fmt::Display),*],
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::error!(dispatcher: $crate::default_dispatcher() $(, $item)*)
    };
}
