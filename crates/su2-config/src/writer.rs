//! Config file writer
//!
//! Emits options in registry write order (category rank, then key). An option
//! is printed when the selection names it or when its text differs from the
//! default text; everything else is left for the reader's defaults to supply.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use su2_schema::{Category, OptionSchema};

use crate::config::WriterConfig;
use crate::document::Document;
use crate::error::WriteError;
use crate::selection::SelectionSet;

/// Fixed block written at the top of every config file
pub const HEADER: &str = "
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
%                                                               %
% Stanford University unstructured (SU2) configuration file     %
%                                                               %
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
";

const BOOKEND: &str = " ----------- ";

fn push_banner(out: &mut String, category: &Category) {
    out.push_str("\n\n%");
    out.push_str(BOOKEND);
    out.push_str(category.name);
    out.push_str(BOOKEND);
    out.push_str("% \n");
    if !category.description.is_empty() {
        out.push_str(&format!("% {}\n", category.description));
    }
}

fn push_annotation(out: &mut String, schema: &OptionSchema) {
    out.push_str(&format!("\n% {}\n", schema.description()));
    out.push_str(&format!(
        "% Type: {} Default: {}\n",
        schema.kind(),
        schema.default_text()
    ));
    if schema.is_enumerable() {
        out.push_str(&format!("% Options: ( {} )\n", schema.domain().join(", ")));
    }
}

/// Render a document as config file text
#[must_use]
pub fn to_config_string(
    document: &Document<'_>,
    selection: &SelectionSet,
    config: &WriterConfig,
) -> String {
    let mut out = String::new();
    if config.header {
        out.push_str(HEADER);
    }

    let categories = document.registry().categories();
    let mut current: Option<usize> = None;
    let mut printed = 0usize;

    for (schema, value) in document.entries() {
        let text = value.render();
        if !selection.contains(schema.id()) && text == schema.default_text() {
            continue;
        }

        let rank = schema.category_rank();
        if current != Some(rank) {
            current = Some(rank);
            if config.category_banners {
                if let Some(category) = categories.get(rank) {
                    push_banner(&mut out, category);
                }
            }
        }

        if config.annotate {
            push_annotation(&mut out, schema);
        }
        out.push_str(schema.key());
        out.push_str("= ");
        out.push_str(&text);
        out.push('\n');
        printed += 1;
    }

    tracing::debug!(
        options = printed,
        bytes = out.len(),
        all = selection.is_all(),
        "Rendered config document"
    );
    out
}

/// Write a document to a stream
///
/// Returns the number of bytes written.
///
/// # Errors
/// Returns [`WriteError::Io`] if the stream fails
pub fn write_document<W: Write>(
    mut writer: W,
    document: &Document<'_>,
    selection: &SelectionSet,
    config: &WriterConfig,
) -> Result<usize, WriteError> {
    let text = to_config_string(document, selection, config);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(text.len())
}

/// Write a document to a file, creating or truncating it
///
/// # Errors
/// Returns [`WriteError::File`] if the file cannot be created or written
pub fn write_file(
    path: impl AsRef<Path>,
    document: &Document<'_>,
    selection: &SelectionSet,
    config: &WriterConfig,
) -> Result<usize, WriteError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| WriteError::io_error(path, e))?;
    write_document(BufWriter::new(file), document, selection, config).map_err(|err| match err {
        WriteError::Io(source) => WriteError::io_error(path, source),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use su2_schema::{builtin_registry, Field, Value};

    fn doc() -> Document<'static> {
        Document::defaults(builtin_registry())
    }

    #[test]
    fn defaults_with_empty_selection_write_only_header() {
        let text = to_config_string(&doc(), &SelectionSet::none(), &WriterConfig::new());
        assert_eq!(text, HEADER);
    }

    #[test]
    fn changed_option_gets_banner_and_annotation() {
        let mut doc = doc();
        doc.set_field(Field::RestartSol, Value::Bool(true)).unwrap();
        let config = WriterConfig::new().with_header(false);
        let text = to_config_string(&doc, &SelectionSet::none(), &config);
        assert_eq!(
            text,
            "\n\n% ----------- Problem Definition ----------- % \n\
             % Governing equations, regime and restart\n\
             \n% Restart solution from native solution file\n\
             % Type: Bool Default: NO\n\
             RESTART_SOL= YES\n"
        );
    }

    #[test]
    fn enum_options_list_their_domain() {
        let mut doc = doc();
        doc.set_enum(Field::KindTransModel, "LM").unwrap();
        let text = to_config_string(&doc, &SelectionSet::none(), &WriterConfig::new());
        assert!(text.contains(
            "% Type: Enum Default: NONE\n% Options: ( NONE, LM )\nKIND_TRANS_MODEL= LM\n"
        ));
    }

    #[test]
    fn selected_defaults_are_printed() {
        let selection = SelectionSet::of([Field::CflNumber]);
        let text = to_config_string(&doc(), &selection, &WriterConfig::compact());
        assert_eq!(text, "CFL_NUMBER= 1.25\n");
    }

    #[test]
    fn banners_only_for_categories_with_output() {
        let mut doc = doc();
        doc.set_field(Field::MachNumber, Value::Scalar(0.5)).unwrap();
        let text = to_config_string(&doc, &SelectionSet::none(), &WriterConfig::new());
        assert_eq!(text.matches("-----------").count(), 2);
        assert!(text.contains("Freestream Conditions"));
        assert!(!text.contains("Problem Definition"));
    }

    #[test]
    fn all_selection_prints_every_option() {
        let text = to_config_string(&doc(), &SelectionSet::All, &WriterConfig::compact());
        assert_eq!(text.lines().count(), builtin_registry().len());
        assert_eq!(text.lines().next(), Some("AXISYMMETRIC= NO"));
    }

    #[test]
    fn write_document_reports_bytes() {
        let mut buffer = Vec::new();
        let written =
            write_document(&mut buffer, &doc(), &SelectionSet::All, &WriterConfig::new()).unwrap();
        assert_eq!(written, buffer.len());
        assert!(buffer.starts_with(HEADER.as_bytes()));
    }
}
