// 🎓 Grades App - student records in, grade report out

use crate::entities::Student;
use crate::error::ParseError;
use crate::parser;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_INPUT_FILE: &str = "students.txt";
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

#[derive(Debug, Default, Clone, Copy)]
pub struct StudentResultProcessor;

impl StudentResultProcessor {
    pub fn new() -> Self {
        StudentResultProcessor
    }

    pub fn read_students_from_file(&self, input: &Path) -> Result<Vec<Student>, ParseError> {
        parser::read_students_from_file(input)
    }

    pub fn render_report(&self, students: &[Student]) -> Vec<String> {
        students.iter().map(Student::report_line).collect()
    }

    pub fn write_report_to_file(&self, students: &[Student], output: &Path) -> Result<()> {
        let file = File::create(output)
            .with_context(|| format!("Failed to create report: {}", output.display()))?;
        let mut writer = BufWriter::new(file);

        for line in self.render_report(students) {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;

        info!(count = students.len(), path = %output.display(), "wrote grade report");
        Ok(())
    }

    /// Read `input`, write the report to `output`, report the outcome on `out`
    ///
    /// Returns the number of students reported, or `None` when the input was
    /// rejected or the report could not be written.
    pub fn run<W: Write>(&self, input: &Path, output: &Path, out: &mut W) -> Result<Option<usize>> {
        let students = match self.read_students_from_file(input) {
            Ok(students) => students,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                return Ok(None);
            }
        };

        if let Err(e) = self.write_report_to_file(&students, output) {
            writeln!(out, "Error: {:#}", e)?;
            return Ok(None);
        }

        writeln!(out, "Report generated successfully: {}", output.display())?;
        Ok(Some(students.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_report() {
        let processor = StudentResultProcessor::new();
        let lines = processor.render_report(&[
            Student::new(1, "Jane Doe", 85),
            Student::new(2, "John Roe", 65),
        ]);

        assert_eq!(
            lines,
            vec![
                "Jane Doe (ID: 1): Score = 85, Grade = A",
                "John Roe (ID: 2): Score = 65, Grade = C",
            ]
        );
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("students.txt");
        let output = dir.path().join("report.txt");
        fs::write(&input, "1,Jane Doe,85\n2,John Roe,65\n3,Yaw Boateng,42\n").unwrap();

        let mut out = Vec::<u8>::new();
        let count = StudentResultProcessor::new()
            .run(&input, &output, &mut out)
            .unwrap();

        assert_eq!(count, Some(3));
        let report = fs::read_to_string(&output).unwrap();
        assert_eq!(report.lines().count(), 3);
        assert!(report.contains("Yaw Boateng (ID: 3): Score = 42, Grade = F"));
    }

    #[test]
    fn test_run_bad_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("students.txt");
        let output = dir.path().join("report.txt");
        fs::write(&input, "1,Jane Doe,85\n2,John Roe\n").unwrap();

        let mut out = Vec::new();
        let count = StudentResultProcessor::new()
            .run(&input, &output, &mut out)
            .unwrap();

        assert_eq!(count, None);
        assert!(!output.exists());
        assert!(String::from_utf8(out).unwrap().starts_with("Error: missing fields"));
    }

    #[test]
    fn test_run_missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let count = StudentResultProcessor::new()
            .run(
                &dir.path().join("nope.txt"),
                &dir.path().join("report.txt"),
                &mut out,
            )
            .unwrap();

        assert_eq!(count, None);
        assert!(String::from_utf8(out).unwrap().contains("failed to read"));
    }
}
