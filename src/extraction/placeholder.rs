//! The canned "extracted text" shown once the progress bar fills.

use chrono::{DateTime, TimeZone};

use super::validator::SelectedFile;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam auctor,
nisl eget ultricies tincidunt, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl.
Nullam auctor, nisl eget ultricies tincidunt, nisl nisl aliquam nisl, eget ultricies nisl nisl eget nisl.";

const DISCLAIMER: &str = "This is a sample of extracted text from your PDF document using our OCR technology.
In a real application, this would contain the actual text extracted from your PDF.";

/// Render the placeholder result for `file`, stamped with `now`.
pub fn extracted_text<Tz>(file: &SelectedFile, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{LOREM}\n\nExtracted from: {name}\nSize: {kb} KB\nDate: {date}\n\n{DISCLAIMER}",
        name = file.name,
        kb = file.size_kb(),
        date = now.format("%-m/%-d/%Y, %-I:%M:%S %p"),
    )
}
