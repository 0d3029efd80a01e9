//! Reading and writing SU2 config files with the builtin option table

use pretty_assertions::assert_eq;
use su2_config::{
    read_file, read_str, to_config_string, write_file, ConfigError, Document, ReadError,
    SelectionSet, SetError, WriteError, WriterConfig,
};
use su2_schema::{builtin_registry, Field, InletList, StringDoubleList, Value};
use su2_test_utils::{assert_renders, floats};

const CASE: &str = "
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
% Inviscid ONERA M6 wing                                                       %
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%

PHYSICAL_PROBLEM= EULER
MATH_PROBLEM= DIRECT
RESTART_SOL= NO

% Free-stream
MACH_NUMBER= 0.8395
AOA= 3.06
FREESTREAM_PRESSURE= 101325.0

MARKER_EULER= ( WING )
MARKER_FAR= ( FARFIELD )
MARKER_OUTLET= ( OUTFLOW, 101325 )
MARKER_INLET= ( INFLOW, 288.6, 102010.0, 1.0, 0.0, 0.0 )

CONV_NUM_METHOD_FLOW= JST
AD_COEFF_FLOW= ( 0.15, 0.5, 0.02 )
CFL_NUMBER= 3.5
MESH_FILENAME= mesh_ONERAM6_inv.su2
";

#[test]
fn reads_a_case_file() {
    let outcome = read_str(builtin_registry(), CASE).unwrap();
    let doc = &outcome.document;

    assert_eq!(doc.get(Field::PhysicalProblem), Some(&Value::Enum("EULER".into())));
    assert_eq!(doc.get(Field::MachNumber), Some(&Value::Scalar(0.8395)));
    assert_eq!(doc.get(Field::FreestreamPressure), Some(&Value::Scalar(101_325.0)));
    assert_eq!(
        doc.get(Field::MarkerEuler),
        Some(&Value::StringArray(vec!["WING".into()]))
    );

    let inlet = doc.get(Field::MarkerInlet).and_then(Value::as_compound).unwrap();
    let record = inlet.downcast_ref::<InletList>().unwrap().marker("INFLOW").unwrap();
    assert_eq!(record.total_pressure, 102_010.0);
    assert_eq!(record.direction, [1.0, 0.0, 0.0]);

    let outlet = doc.get(Field::MarkerOutlet).and_then(Value::as_compound).unwrap();
    assert_eq!(
        outlet.downcast_ref::<StringDoubleList>().unwrap().entries(),
        &[("OUTFLOW".to_string(), 101_325.0)]
    );

    assert_eq!(outcome.selection.listed_count(), Some(14));
    assert!(outcome.selection.contains(Field::MathProblem.id()));
    assert!(doc.is_default(Field::MathProblem));
}

#[test]
fn case_file_round_trips_through_every_layout() {
    let original = read_str(builtin_registry(), CASE).unwrap().document;
    for config in [
        WriterConfig::new(),
        WriterConfig::new().with_annotate(false),
        WriterConfig::compact(),
    ] {
        for selection in [SelectionSet::All, SelectionSet::none()] {
            let text = to_config_string(&original, &selection, &config);
            let reread = read_str(builtin_registry(), &text).unwrap().document;
            assert_eq!(reread, original);
        }
    }
}

#[test]
fn bool_fields_write_yes_and_no() {
    let mut doc = Document::defaults(builtin_registry());
    let selection = SelectionSet::of([Field::RestartSol]);

    doc.set_field(Field::RestartSol, Value::Bool(true)).unwrap();
    let text = to_config_string(&doc, &selection, &WriterConfig::compact());
    assert_eq!(text, "RESTART_SOL= YES\n");
    let reread = read_str(builtin_registry(), &text).unwrap().document;
    assert_eq!(reread.get(Field::RestartSol), Some(&Value::Bool(true)));

    doc.set_field(Field::RestartSol, Value::Bool(false)).unwrap();
    let text = to_config_string(&doc, &selection, &WriterConfig::compact());
    assert_eq!(text, "RESTART_SOL= NO\n");
    let reread = read_str(builtin_registry(), &text).unwrap().document;
    assert_eq!(reread.get(Field::RestartSol), Some(&Value::Bool(false)));
}

#[test]
fn float_arrays_write_as_parenthesized_lists() {
    let mut doc = Document::defaults(builtin_registry());
    let angles = floats(&[1.0, 30.0, 45.0]);
    doc.set_field(Field::MotionOriginX, angles.clone()).unwrap();
    assert_renders(&angles, "( 1, 30, 45 )");

    let text = to_config_string(&doc, &SelectionSet::All, &WriterConfig::new());
    assert!(text.contains("MOTION_ORIGIN_X= ( 1, 30, 45 )\n"));
    let reread = read_str(builtin_registry(), &text).unwrap().document;
    assert_eq!(reread.get(Field::MotionOriginX), Some(&angles));
}

#[test]
fn two_equals_signs_abort_the_read() {
    let text = format!("{CASE}\nMESH_OUT_FILENAME= a=b\nCFL_NUMBER= 1\n");
    let err = read_str(builtin_registry(), &text).unwrap_err();
    assert!(matches!(err, ReadError::MalformedLine { .. }));
}

#[test]
fn unknown_option_aborts_the_read() {
    let text = "MARKER_WALL= ( wing )\nMACH_NUMBER= 0.5\nAOA= 2\n";
    let err = read_str(builtin_registry(), text).unwrap_err();
    match err {
        ReadError::UnknownOption { line, key } => {
            assert_eq!(line, 1);
            assert_eq!(key, "MARKER_WALL");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn invalid_enum_assignment_keeps_prior_value() {
    let mut doc = read_str(builtin_registry(), CASE).unwrap().document;
    let err = doc.set_enum(Field::ConvNumMethodFlow, "WENO").unwrap_err();
    assert!(matches!(err, SetError::InvalidEnumAssignment { .. }));
    assert_eq!(doc.get(Field::ConvNumMethodFlow), Some(&Value::Enum("JST".into())));
}

#[test]
fn diff_reports_changed_fields() {
    let base = read_str(builtin_registry(), CASE).unwrap().document;
    let mut variant = base.clone();
    variant.set_from_text("AOA", "4.5").unwrap();
    variant.set_from_text("CONV_NUM_METHOD_FLOW", "ROE").unwrap();

    let report: Vec<String> = base.diff(&variant).iter().map(ToString::to_string).collect();
    assert_eq!(
        report,
        vec![
            "CONV_NUM_METHOD_FLOW: left is JST, right is ROE".to_string(),
            "AOA: left is 3.06, right is 4.5".to_string(),
        ]
    );
}

#[test]
fn file_helpers_round_trip() -> Result<(), ConfigError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("onera_m6.cfg");

    let doc = read_str(builtin_registry(), CASE)?.document;
    let written = write_file(&path, &doc, &SelectionSet::none(), &WriterConfig::new())?;
    assert_eq!(written, std::fs::read_to_string(&path).unwrap().len());

    let outcome = read_file(builtin_registry(), &path)?;
    assert_eq!(outcome.document, doc);
    Ok(())
}

#[test]
fn file_errors_carry_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing").join("case.cfg");
    let doc = Document::defaults(builtin_registry());

    let err = write_file(&missing, &doc, &SelectionSet::All, &WriterConfig::new()).unwrap_err();
    assert!(matches!(err, WriteError::File { ref path, .. } if path == &missing));

    let err = read_file(builtin_registry(), &missing).unwrap_err();
    assert!(matches!(err, ReadError::File { ref path, .. } if path == &missing));
}

#[test]
fn json_export_uses_config_keys() {
    let doc = read_str(builtin_registry(), CASE).unwrap().document;
    let json = doc.to_json();
    assert_eq!(json["PHYSICAL_PROBLEM"], serde_json::json!("EULER"));
    assert_eq!(json["MARKER_FAR"], serde_json::json!(["FARFIELD"]));
    assert_eq!(json["MARKER_OUTLET"], serde_json::json!("( OUTFLOW, 101325 )"));
}
