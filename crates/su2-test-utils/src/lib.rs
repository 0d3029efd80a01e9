//! Testing utilities for the SU2 configuration workspace
//!
//! A compact registry that exercises every option kind, plus value builders
//! and assertions shared by the crates' tests.

#![allow(missing_docs)]

use once_cell::sync::Lazy;
use su2_schema::{
    tokenize, Category, CompoundPlugin, InletList, Kind, OptionDecl, OptionRegistry, ParamList,
    PeriodicList, StringDoubleList, Value,
};

pub const FLOW: &str = "Flow";
pub const NUMERICS: &str = "Numerics";
pub const BOUNDARIES: &str = "Boundaries";

pub static SAMPLE_CATEGORIES: &[Category] = &[
    Category::new(FLOW, "Flow state"),
    Category::new(NUMERICS, ""),
    Category::new(BOUNDARIES, "Boundary markers"),
];

pub const SOLVERS: &[&str] = &["EULER", "NAVIER_STOKES", "RANS"];
pub const SCHEMES: &[&str] = &["JST", "ROE", "AUSM", "HLLC"];

pub const PARAMS: CompoundPlugin = CompoundPlugin::new::<ParamList>("PARAMS");
pub const PAIRS: CompoundPlugin = CompoundPlugin::new::<StringDoubleList>("STRING_DOUBLE_LIST");
pub const INLET: CompoundPlugin = CompoundPlugin::new::<InletList>("INLET");
pub const PERIODIC: CompoundPlugin = CompoundPlugin::new::<PeriodicList>("PERIODIC");

/// One option of every kind, deliberately listed out of write order
pub static SAMPLE_DECLS: &[OptionDecl] = &[
    OptionDecl::compound("MARKER_PERIODIC", BOUNDARIES, "Periodic markers", PERIODIC),
    OptionDecl::scalar("MACH_NUMBER", FLOW, "Mach number", "0.8"),
    OptionDecl::boolean("RESTART_SOL", FLOW, "Restart", false),
    OptionDecl::enumeration("SOLVER", FLOW, "Governing equations", SOLVERS, "RANS"),
    OptionDecl::enum_list("SCHEMES", NUMERICS, "Candidate schemes", SCHEMES, "ROE"),
    OptionDecl::float_array("RK_ALPHA", NUMERICS, "Runge-Kutta coefficients", "( 0.25, 0.5, 1 )"),
    OptionDecl::fixed_floats(
        "AD_COEFF",
        NUMERICS,
        "Dissipation coefficients",
        3,
        "( 0.15, 0.5, 0.02 )",
    ),
    OptionDecl::string("MESH_FILENAME", FLOW, "Mesh file", "mesh.su2"),
    OptionDecl::string_array("MARKER_WALL", BOUNDARIES, "Wall markers", "NONE"),
    OptionDecl::compound("DV_PARAM", NUMERICS, "Design parameters", PARAMS),
    OptionDecl::compound("MARKER_OUTLET", BOUNDARIES, "Outlet markers", PAIRS),
    OptionDecl::compound("MARKER_INLET", BOUNDARIES, "Inlet markers", INLET),
];

static SAMPLE: Lazy<OptionRegistry> = Lazy::new(|| {
    OptionRegistry::build(SAMPLE_DECLS, SAMPLE_CATEGORIES)
        .expect("sample option table is consistent")
});

/// Registry built from [`SAMPLE_DECLS`]
pub fn sample_registry() -> &'static OptionRegistry {
    &SAMPLE
}

/// Keys of the sample registry in write order
pub fn sample_keys() -> Vec<&'static str> {
    sample_registry().ordered().map(|schema| schema.key()).collect()
}

/// Parse config-file value text as the named option's kind
pub fn parse_value(registry: &OptionRegistry, key: &str, text: &str) -> Value {
    let schema = registry
        .lookup_by_key(key)
        .unwrap_or_else(|| panic!("no option {key}"));
    schema
        .kind()
        .parse(&tokenize(text), schema.domain())
        .unwrap_or_else(|err| panic!("{key}= {text}: {err}"))
}

/// Parse with a bare kind and domain
pub fn parse_kind(kind: Kind, domain: &[&str], text: &str) -> Value {
    kind.parse(&tokenize(text), domain)
        .unwrap_or_else(|err| panic!("{kind}: {text}: {err}"))
}

pub fn floats(values: &[f64]) -> Value {
    Value::FloatArray(values.to_vec())
}

pub fn strings(values: &[&str]) -> Value {
    Value::StringArray(values.iter().map(|s| (*s).to_string()).collect())
}

pub fn enums(values: &[&str]) -> Value {
    Value::EnumList(values.iter().map(|s| (*s).to_string()).collect())
}

/// Assert the canonical text of a value
pub fn assert_renders(value: &Value, expected: &str) {
    assert_eq!(value.render(), expected, "rendering {value:?}");
}

/// Assert that text parses as `kind` and renders back to `canonical`
pub fn assert_canonical(kind: Kind, domain: &[&str], text: &str, canonical: &str) {
    let value = parse_kind(kind, domain, text);
    assert_renders(&value, canonical);
    assert_eq!(parse_kind(kind, domain, canonical), value, "reparsing {canonical}");
}
