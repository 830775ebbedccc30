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

//! Logdispatch is a small logging library that filters log calls by category and routes the
//! formatted lines to the console or to an append-only log file.
//!
//! # Overview
//!
//! A [`Dispatcher`] holds the active [`Sink`] (console, file or none) and the active set of
//! [`Category`] values. It exposes four emit calls, one per category:
//!
//! * [`info`](Dispatcher::info): the given items, nothing else;
//! * [`debug`](Dispatcher::debug): a `[DEBUG]:` tag and the calling function;
//! * [`success`](Dispatcher::success): a `[SUCCESS]:` tag and the calling function;
//! * [`error`](Dispatcher::error): an `[ERROR]:` tag and the file, line and function of the
//!   call site.
//!
//! Items are any values implementing [`Display`](std::fmt::Display), joined with single spaces.
//! On the console, tags are colored and error lines go to stderr. In the log file, every line
//! starts with a `[YYYY-MM-DD HH:MM:SS]` UTC timestamp. Logging is best effort: no emit call
//! returns an error or panics, and a log file that cannot be opened is skipped.
//!
//! # Examples
//!
//! Log through the default dispatcher with the macros, which capture the call site:
//!
//! ```
//! use logdispatch::Category;
//!
//! logdispatch::set_categories([Category::Info, Category::Error]);
//!
//! logdispatch::info!("listening on", 8080);
//! logdispatch::debug!("filtered out");
//! logdispatch::error!("connection refused:", "127.0.0.1:8080");
//! ```
//!
//! Build a dispatcher and pass it around explicitly:
//!
//! ```
//! use logdispatch::Category;
//! use logdispatch::Dispatcher;
//! use logdispatch::Sink;
//!
//! let dispatcher = Dispatcher::builder()
//!     .sink(Sink::File)
//!     .log_file(std::env::temp_dir().join("logdispatch-doc.log"))
//!     .categories([Category::All])
//!     .build();
//!
//! logdispatch::success!(dispatcher: &dispatcher);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod filter;
pub mod layout;

mod category;
mod color;
mod config;
mod dispatcher;
mod error;
mod macros;
mod record;
mod sink;

pub use self::append::Append;
pub use self::category::Category;
pub use self::color::CategoryColor;
pub use self::config::CATEGORIES_ENV;
pub use self::config::Config;
pub use self::config::FILE_ENV;
pub use self::config::SINK_ENV;
pub use self::dispatcher::*;
pub use self::error::Error;
pub use self::layout::Layout;
pub use self::record::Location;
pub use self::record::Record;
pub use self::record::RecordBuilder;
pub use self::sink::Sink;
