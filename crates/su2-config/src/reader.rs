//! Config file reader
//!
//! Turns `KEY= value` lines into a [`Document`]. The first bad line aborts
//! the whole read; no partial document is ever returned.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use su2_schema::{tokenize, FieldId, OptionRegistry, Value, COMMENT};

use crate::document::Document;
use crate::error::ReadError;
use crate::selection::SelectionSet;

/// A successfully read config file
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOutcome<'r> {
    /// Defaults overwritten by every option the file set
    pub document: Document<'r>,
    /// Fields the file set, whether or not they equal their default
    pub selection: SelectionSet,
}

impl<'r> ReadOutcome<'r> {
    /// Split into document and selection
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Document<'r>, SelectionSet) {
        (self.document, self.selection)
    }
}

/// One option line split into key and raw value text
struct OptionLine<'a> {
    key: &'a str,
    value: &'a str,
}

/// Split a non-blank, non-comment line at its single `=`
fn split_line(line: &str, number: usize) -> Result<OptionLine<'_>, ReadError> {
    let mut parts = line.split('=');
    let key = parts.next().unwrap_or_default();
    let Some(value) = parts.next() else {
        return Err(ReadError::malformed(
            number,
            format!("\"{}\" is not a comment and has no '='", line.trim()),
        ));
    };
    if parts.next().is_some() {
        return Err(ReadError::malformed(number, "more than one '='"));
    }
    Ok(OptionLine {
        key: key.trim(),
        value,
    })
}

/// Read a config document from a buffered stream
///
/// Starts from the registry's defaults; each option line overwrites one field.
/// Blank lines and lines whose first non-blank character is `%` are skipped.
///
/// # Errors
/// Returns error on the first malformed line, unknown key, repeated key or
/// unparsable value, or if the stream fails
pub fn read_document<'r, R: BufRead>(
    registry: &'r OptionRegistry,
    reader: R,
) -> Result<ReadOutcome<'r>, ReadError> {
    let mut document = Document::defaults(registry);
    let mut seen: BTreeSet<FieldId> = BTreeSet::new();
    let mut scanned = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        scanned = number;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
            continue;
        }

        let result = read_line(registry, trimmed, number, &mut seen);
        let (id, value) = match result {
            Ok(update) => update,
            Err(err) => {
                tracing::debug!(line = number, error = %err, "Aborting config read");
                return Err(err);
            }
        };
        tracing::trace!(line = number, field = %id, "Read option");
        document.put(id, value);
    }

    tracing::debug!(lines = scanned, fields = seen.len(), "Read config document");
    Ok(ReadOutcome {
        document,
        selection: SelectionSet::Fields(seen),
    })
}

fn read_line(
    registry: &OptionRegistry,
    line: &str,
    number: usize,
    seen: &mut BTreeSet<FieldId>,
) -> Result<(FieldId, Value), ReadError> {
    let OptionLine { key, value } = split_line(line, number)?;

    let schema = registry
        .lookup_by_key(key)
        .ok_or_else(|| ReadError::UnknownOption {
            line: number,
            key: key.to_string(),
        })?;

    if !seen.insert(schema.id()) {
        return Err(ReadError::DuplicateField {
            line: number,
            key: key.to_string(),
        });
    }

    let value = schema
        .kind()
        .parse(&tokenize(value), schema.domain())
        .map_err(|source| ReadError::InvalidValue {
            line: number,
            key: schema.key(),
            source,
        })?;
    Ok((schema.id(), value))
}

/// Read a config document from text
///
/// # Errors
/// Same as [`read_document`]
pub fn read_str<'r>(
    registry: &'r OptionRegistry,
    text: &str,
) -> Result<ReadOutcome<'r>, ReadError> {
    read_document(registry, text.as_bytes())
}

/// Read a config document from a file
///
/// # Errors
/// Same as [`read_document`]; I/O failures carry the path
pub fn read_file<'r>(
    registry: &'r OptionRegistry,
    path: impl AsRef<Path>,
) -> Result<ReadOutcome<'r>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReadError::io_error(path, e))?;
    read_document(registry, BufReader::new(file)).map_err(|err| match err {
        ReadError::Io(source) => ReadError::io_error(path, source),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use su2_schema::{builtin_registry, Field, ValueError};

    fn read(text: &str) -> Result<ReadOutcome<'static>, ReadError> {
        read_str(builtin_registry(), text)
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let outcome = read("\n% a comment\n   %indented comment\n\t\nMACH_NUMBER= 0.8\n").unwrap();
        assert_eq!(outcome.document.get(Field::MachNumber), Some(&Value::Scalar(0.8)));
        assert_eq!(outcome.selection, SelectionSet::of([Field::MachNumber]));
    }

    #[test]
    fn selection_records_default_valued_lines() {
        let outcome = read("CFL_NUMBER= 1.25\nRESTART_SOL= YES\n").unwrap();
        assert!(outcome.document.is_default(Field::CflNumber));
        assert_eq!(outcome.selection.listed_count(), Some(2));
        assert!(outcome.selection.contains(Field::CflNumber.id()));
    }

    #[test]
    fn splits_values_on_delimiters() {
        let outcome = read("MARKER_FAR= ( farfield,outer )\nDV_VALUE= {1:2}[3]\n").unwrap();
        assert_eq!(
            outcome.document.get(Field::MarkerFar),
            Some(&Value::StringArray(vec!["farfield".into(), "outer".into()]))
        );
        assert_eq!(
            outcome.document.get(Field::DvValue),
            Some(&Value::FloatArray(vec![1.0, 2.0, 3.0]))
        );
    }

    #[test]
    fn two_equals_signs_abort() {
        let err = read("MACH_NUMBER= 0.8\nAOA= 1 = 2\nCFL_NUMBER= 3\n").unwrap_err();
        assert!(matches!(err, ReadError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn line_without_equals_aborts() {
        let err = read("MACH_NUMBER 0.8\n").unwrap_err();
        assert!(matches!(err, ReadError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn unknown_key_aborts_even_when_later_lines_are_fine() {
        let err = read("MARKER_WALL= wall\nMACH_NUMBER= 0.8\n").unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.key(), Some("MARKER_WALL"));
    }

    #[test]
    fn repeated_key_aborts() {
        let err = read("AOA= 1\nAOA= 2\n").unwrap_err();
        assert!(matches!(err, ReadError::DuplicateField { line: 2, .. }));
    }

    #[test]
    fn bad_values_carry_line_and_key() {
        let err = read("RESTART_SOL= MAYBE\n").unwrap_err();
        match err {
            ReadError::InvalidValue { line, key, source } => {
                assert_eq!(line, 1);
                assert_eq!(key, "RESTART_SOL");
                assert_eq!(source, ValueError::InvalidBoolToken("MAYBE".into()));
            }
            other => panic!("unexpected error {other:?}"),
        }

        let err = read("KIND_TURB_MODEL= K_EPSILON\n").unwrap_err();
        assert!(matches!(
            err,
            ReadError::InvalidValue {
                source: ValueError::UnknownEnumValue { .. },
                ..
            }
        ));
    }

    #[test]
    fn empty_value_gives_empty_list() {
        let outcome = read("MARKER_EULER=\n").unwrap();
        assert_eq!(outcome.document.get(Field::MarkerEuler), Some(&Value::StringArray(vec![])));
        assert!(matches!(read("MACH_NUMBER=\n"), Err(ReadError::InvalidValue { .. })));
    }

    #[test]
    fn read_file_reports_path() {
        let err = read_file(builtin_registry(), "/nonexistent/dir/case.cfg").unwrap_err();
        match err {
            ReadError::File { path, .. } => assert!(path.ends_with("case.cfg")),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
