// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::detection::InsertionEvent;
use crate::observability::messages::output::{EventsSaved, OutputWriteFailed};
use crate::observability::messages::StructuredLog;
use crate::output::OutputError;

/// Column header, in [`InsertionEvent`] field order.
pub const CSV_HEADER: [&str; 4] = ["frame", "y", "x", "intensity"];

/// Write events to any sink as CSV with a `frame,y,x,intensity` header.
///
/// The header is written even when `events` is empty so downstream tools always
/// see the columns. Returns the number of rows written.
pub fn write_events<W: Write>(events: &[InsertionEvent], sink: W) -> Result<usize, OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(CSV_HEADER)?;
    for event in events {
        writer.serialize(event)?;
    }
    writer.flush()?;

    Ok(events.len())
}

/// Write events to a CSV file, creating missing parent directories.
pub fn write_events_csv<P: AsRef<Path>>(events: &[InsertionEvent], path: P) -> Result<usize, OutputError> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let result = create_file(path).and_then(|file| write_events(events, file));
    match &result {
        Ok(count) => EventsSaved {
            path: &display_path,
            count: *count,
        }
        .log(),
        Err(error) => OutputWriteFailed {
            path: &display_path,
            error,
        }
        .log(),
    }
    result
}

fn create_file(path: &Path) -> Result<File, OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(frame: usize, y: usize, x: usize, intensity: f64) -> InsertionEvent {
        InsertionEvent {
            frame,
            y,
            x,
            intensity,
        }
    }

    #[test]
    fn test_rows_follow_header_in_order() {
        let events = vec![event(1, 10, 20, 153.0), event(4, 3, 7, 88.5)];
        let mut buffer = Vec::new();

        let written = write_events(&events, &mut buffer).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "frame,y,x,intensity\n1,10,20,153.0\n4,3,7,88.5\n"
        );
    }

    #[test]
    fn test_empty_event_list_still_has_header() {
        let mut buffer = Vec::new();

        let written = write_events(&[], &mut buffer).unwrap();

        assert_eq!(written, 0);
        assert_eq!(String::from_utf8(buffer).unwrap(), "frame,y,x,intensity\n");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("run").join("events.csv");

        let written = write_events_csv(&[event(2, 0, 0, -1.0)], &path).unwrap();

        assert_eq!(written, 1);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().nth(1), Some("2,0,0,-1.0"));
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file
        let err = write_events_csv(&[], dir.path()).unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
    }
}
