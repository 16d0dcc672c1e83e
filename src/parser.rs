// 🏗️ Student Record Parser - line-oriented `id,name,score` input
//
// All-or-nothing: the first malformed line aborts the whole read and no
// partial list is returned.
//
// Format (no header row):
//   1,Jane Doe,85
//   2,John Roe,65
//
// Every line is a record, blank ones included. Commas always separate
// fields; quotes carry no meaning. Fields are trimmed.

use crate::entities::Student;
use crate::error::ParseError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Fields per student record
pub const STUDENT_FIELD_COUNT: usize = 3;

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Parse records held in memory
pub fn parse_students(text: &str) -> Result<Vec<Student>, ParseError> {
    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes())
        .into_records();

    let mut students = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index as u64 + 1;

        // The csv reader yields nothing for an empty line; it is one empty field.
        let record = if raw.is_empty() {
            StringRecord::from(vec![""])
        } else {
            match records.next() {
                Some(result) => result?,
                None => StringRecord::new(),
            }
        };

        match parse_student(&record, line, raw) {
            Ok(student) => students.push(student),
            Err(err) => {
                warn!(line, error = %err, "aborting student read");
                return Err(err);
            }
        }
    }

    debug!(count = students.len(), "parsed student records");
    Ok(students)
}

/// Read `path` and parse every record in it
pub fn read_students_from_file(path: &Path) -> Result<Vec<Student>, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_students(&text)
}

// ============================================================================
// SINGLE RECORD
// ============================================================================

fn parse_student(record: &StringRecord, line: u64, raw: &str) -> Result<Student, ParseError> {
    if record.len() != STUDENT_FIELD_COUNT {
        return Err(ParseError::MissingField {
            line,
            expected: STUDENT_FIELD_COUNT,
            found: record.len(),
            raw: raw.to_string(),
        });
    }

    let id = record[0].parse::<i64>().map_err(|_| ParseError::InvalidFormat {
        line,
        field: "id",
        raw: raw.to_string(),
    })?;

    let full_name = &record[1];

    let score = record[2].parse::<i64>().map_err(|_| ParseError::InvalidFormat {
        line,
        field: "score",
        raw: raw.to_string(),
    })?;

    Ok(Student::new(id, full_name, score))
}

// ============================================================================
// TESTS
// ============================================================================
