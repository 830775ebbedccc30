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

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::Layout;
use crate::append::Append;
use crate::layout::TextLayout;
use crate::record::Record;

/// The log file written when no other path is configured.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// An appender that appends log records to a file.
///
/// The file is opened in append mode (created if missing) for every record and closed right
/// after the line is written, so no handle is held between records and existing content is
/// never truncated. Writes from the same appender are serialized; writes from other processes
/// to the same file are not coordinated.
///
/// # Examples
///
/// ```
/// use logdispatch::append::File;
///
/// let file = File::new("/var/log/my_service.log");
/// assert_eq!(file.path().to_str(), Some("/var/log/my_service.log"));
/// ```
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    layout: Box<dyn Layout>,
    lock: Mutex<()>,
}

impl Default for File {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl File {
    /// Create a new [`File`] appender writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout: Box::new(TextLayout::file()),
            lock: Mutex::new(()),
        }
    }

    /// Set the layout for the [`File`] appender.
    ///
    /// Default to [`TextLayout::file`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// The path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Append for File {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| {
                Error::new("failed to open log file")
                    .with_context("path", self.path.display())
                    .with_source(err)
            })?;
        file.write_all(&bytes).map_err(|err| {
            Error::from_io_error(err).with_context("path", self.path.display())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::Category;

    #[test]
    fn test_append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "existing\n").unwrap();

        let file = File::new(&path).with_layout(TextLayout::console().no_color());
        let items: [&dyn std::fmt::Display; 2] = [&"a", &1];
        let record = Record::builder().items(&items).build();
        file.append(&record).unwrap();
        file.append(&record).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\na 1\na 1\n");
    }

    #[test]
    fn test_append_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");

        let record = Record::builder().category(Category::Success).build();
        File::new(&path).append(&record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("[SUCCESS]: \n"), "{content:?}");
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_open_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");

        let record = Record::builder().build();
        let err = File::new(&path).append(&record).unwrap_err();
        assert_eq!(err.message(), "failed to open log file");
        assert_eq!(err.context("path"), Some(path.display().to_string().as_str()));
        assert!(!path.exists());
    }
}
