//! Option registry
//!
//! An [`OptionRegistry`] is built once from a static table of
//! [`OptionDecl`]s and a category table, and is read-only afterwards. Building
//! parses every default, normalizes enum domains so the default comes first,
//! and rejects any table that is inconsistent with itself.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::category::{has_line_break, Category, CategoryOrder};
use crate::compound::CompoundPlugin;
use crate::error::{SchemaError, SchemaResult};
use crate::kind::Kind;
use crate::token::{is_sentinel, is_single_token, tokenize, NONE};
use crate::value::Value;

/// Stable index of an option within its registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldId(u16);

impl FieldId {
    /// Create from a raw index
    #[inline]
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Position in the registry's schema list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static declaration of one option, as written in an option table
///
/// `default` is config-file text, parsed with the kind's rule when the
/// registry is built.
#[derive(Debug, Clone, Copy)]
pub struct OptionDecl {
    /// Config-file key, case-sensitive
    pub key: &'static str,
    /// Category name, must appear in the category table
    pub category: &'static str,
    /// Free text emitted as a comment
    pub description: &'static str,
    /// Declared kind
    pub kind: Kind,
    /// Admissible values of enumerable kinds, empty otherwise
    pub domain: &'static [&'static str],
    /// Default value text
    pub default: &'static str,
}

impl OptionDecl {
    const fn plain(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        kind: Kind,
        default: &'static str,
    ) -> Self {
        Self {
            key,
            category,
            description,
            kind,
            domain: &[],
            default,
        }
    }

    /// `YES`/`NO` option
    #[must_use]
    pub const fn boolean(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        default: bool,
    ) -> Self {
        let default = if default { "YES" } else { "NO" };
        Self::plain(key, category, description, Kind::Bool, default)
    }

    /// Floating point option
    #[must_use]
    pub const fn scalar(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> Self {
        Self::plain(key, category, description, Kind::Scalar, default)
    }

    /// Single-token string option
    #[must_use]
    pub const fn string(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> Self {
        Self::plain(key, category, description, Kind::String, default)
    }

    /// Enum option with its domain
    #[must_use]
    pub const fn enumeration(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        domain: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            domain,
            ..Self::plain(key, category, description, Kind::Enum, default)
        }
    }

    /// Enum list option with its domain
    #[must_use]
    pub const fn enum_list(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        domain: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            domain,
            ..Self::plain(key, category, description, Kind::EnumList, default)
        }
    }

    /// Variable length float list option
    #[must_use]
    pub const fn float_array(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> Self {
        Self::plain(key, category, description, Kind::FloatArray, default)
    }

    /// Float list option of fixed length
    #[must_use]
    pub const fn fixed_floats(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        len: usize,
        default: &'static str,
    ) -> Self {
        Self::plain(key, category, description, Kind::FixedFloatArray(len), default)
    }

    /// Variable length string list option
    #[must_use]
    pub const fn string_array(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> Self {
        Self::plain(key, category, description, Kind::StringArray, default)
    }

    /// Plugin-typed option, defaulting to the zero value
    #[must_use]
    pub const fn compound(
        key: &'static str,
        category: &'static str,
        description: &'static str,
        plugin: CompoundPlugin,
    ) -> Self {
        Self::plain(key, category, description, Kind::Compound(plugin), NONE)
    }
}

/// Metadata for one registered option
#[derive(Debug, Clone)]
pub struct OptionSchema {
    id: FieldId,
    key: &'static str,
    category: &'static str,
    category_rank: usize,
    description: &'static str,
    kind: Kind,
    domain: Vec<&'static str>,
    default: Value,
    default_text: String,
}

impl OptionSchema {
    /// Field identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Config-file key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Category name
    #[inline]
    #[must_use]
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Rank of the category in the category order
    #[inline]
    #[must_use]
    pub fn category_rank(&self) -> usize {
        self.category_rank
    }

    /// Description text
    #[inline]
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Declared kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Enum domain with the default first; empty unless enumerable
    #[inline]
    #[must_use]
    pub fn domain(&self) -> &[&'static str] {
        &self.domain
    }

    /// Typed default value
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// Canonical text of the default value
    #[inline]
    #[must_use]
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// True for Enum and `EnumList` options
    #[inline]
    #[must_use]
    pub fn is_enumerable(&self) -> bool {
        self.kind.is_enumerable()
    }
}

/// Read-only set of option schemas with key lookup and write order
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    schemas: Vec<OptionSchema>,
    by_key: HashMap<&'static str, FieldId>,
    order: Vec<FieldId>,
    categories: CategoryOrder,
}

impl OptionRegistry {
    /// Build a registry from an option table and a category table
    ///
    /// # Errors
    /// Returns the first inconsistency found in the tables
    pub fn build(decls: &[OptionDecl], categories: &[Category]) -> SchemaResult<Self> {
        if decls.len() > usize::from(u16::MAX) {
            return Err(SchemaError::TooManyOptions(decls.len()));
        }
        let categories = CategoryOrder::new(categories)?;

        let mut schemas = Vec::with_capacity(decls.len());
        let mut by_key = HashMap::with_capacity(decls.len());
        for (index, decl) in decls.iter().enumerate() {
            // bounded by the length check above
            #[allow(clippy::cast_possible_truncation)]
            let id = FieldId::new(index as u16);
            if by_key.insert(decl.key, id).is_some() {
                return Err(SchemaError::DuplicateKey(decl.key));
            }
            schemas.push(build_schema(id, decl, &categories)?);
        }

        let mut order: Vec<FieldId> = schemas.iter().map(OptionSchema::id).collect();
        order.sort_by(|a, b| {
            let (a, b) = (&schemas[a.index()], &schemas[b.index()]);
            (a.category_rank, a.key).cmp(&(b.category_rank, b.key))
        });

        tracing::debug!(
            options = schemas.len(),
            categories = categories.len(),
            "Built option registry"
        );

        Ok(Self {
            schemas,
            by_key,
            order,
            categories,
        })
    }

    /// Schema for a config-file key
    #[inline]
    #[must_use]
    pub fn lookup_by_key(&self, key: &str) -> Option<&OptionSchema> {
        self.by_key.get(key).map(|id| &self.schemas[id.index()])
    }

    /// True if `key` names a registered option
    #[inline]
    #[must_use]
    pub fn is_config_option(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Schema for a field id
    #[inline]
    #[must_use]
    pub fn schema(&self, id: FieldId) -> Option<&OptionSchema> {
        self.schemas.get(id.index())
    }

    /// Schemas sorted by category rank, then key
    pub fn ordered(&self) -> impl Iterator<Item = &OptionSchema> + '_ {
        self.order.iter().map(|id| &self.schemas[id.index()])
    }

    /// Schemas in field id order
    pub fn iter(&self) -> impl Iterator<Item = &OptionSchema> + '_ {
        self.schemas.iter()
    }

    /// Default values in field id order
    pub fn default_values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.schemas.iter().map(OptionSchema::default_value)
    }

    /// The category order
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &CategoryOrder {
        &self.categories
    }

    /// Number of options
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True if no options are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

fn build_schema(
    id: FieldId,
    decl: &OptionDecl,
    categories: &CategoryOrder,
) -> SchemaResult<OptionSchema> {
    check_writable(decl)?;
    let category_rank = categories
        .rank(decl.category)
        .ok_or(SchemaError::UnlistedCategory {
            key: decl.key,
            category: decl.category,
        })?;

    let tokens = tokenize(decl.default);
    let domain = if decl.kind.is_enumerable() {
        normalize_domain(decl, &tokens)?
    } else {
        Vec::new()
    };

    let default = decl
        .kind
        .parse(&tokens, &domain)
        .map_err(|source| SchemaError::InvalidDefault {
            key: decl.key,
            source,
        })?;
    let default_text = default.render();

    Ok(OptionSchema {
        id,
        key: decl.key,
        category: decl.category,
        category_rank,
        description: decl.description,
        kind: decl.kind,
        domain,
        default,
        default_text,
    })
}

/// Reject declarations whose key, domain or description could not be written
/// and read back
fn check_writable(decl: &OptionDecl) -> SchemaResult<()> {
    if !is_single_token(decl.key) {
        return Err(SchemaError::InvalidKey(decl.key));
    }
    if let Some(&value) = decl.domain.iter().find(|member| !is_single_token(member)) {
        return Err(SchemaError::InvalidDomainMember {
            key: decl.key,
            value,
        });
    }
    if has_line_break(decl.description) {
        return Err(SchemaError::MultilineDescription(decl.key));
    }
    if decl.kind == Kind::FixedFloatArray(0) {
        return Err(SchemaError::EmptyFixedArray(decl.key));
    }
    Ok(())
}

/// Check the default against the domain and move it to the front
///
/// For enum lists every default element moves to the front, in default
/// order.
fn normalize_domain(decl: &OptionDecl, tokens: &[String]) -> SchemaResult<Vec<&'static str>> {
    if decl.domain.is_empty() {
        return Err(SchemaError::MissingDomain(decl.key));
    }
    if decl.kind == Kind::EnumList && decl.domain.contains(&NONE) {
        return Err(SchemaError::ReservedSentinel(decl.key));
    }

    let defaults: &[String] = if decl.kind == Kind::EnumList && is_sentinel(tokens) {
        &[]
    } else {
        tokens
    };

    let mut front: Vec<&'static str> = Vec::with_capacity(decl.domain.len());
    for token in defaults {
        let mut matches = decl.domain.iter().filter(|member| **member == token.as_str());
        let Some(member) = matches.next() else {
            return Err(SchemaError::DefaultNotInDomain {
                key: decl.key,
                value: token.clone(),
            });
        };
        if matches.next().is_some() {
            return Err(SchemaError::DuplicateDefaultInDomain {
                key: decl.key,
                value: token.clone(),
            });
        }
        if !front.contains(member) {
            front.push(*member);
        }
    }

    let rest: Vec<&'static str> = decl
        .domain
        .iter()
        .copied()
        .filter(|member| !front.contains(member))
        .collect();
    front.extend(rest);
    Ok(front)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::StringDoubleList;
    use pretty_assertions::assert_eq;

    const PROBLEM: &str = "Problem Definition";
    const MARKERS: &str = "Boundary Markers";

    const CATEGORIES: &[Category] = &[Category::new(PROBLEM, ""), Category::new(MARKERS, "")];

    const SOLVERS: &[&str] = &["EULER", "NAVIER_STOKES", "RANS"];

    fn table() -> Vec<OptionDecl> {
        vec![
            OptionDecl::enumeration("PHYSICAL_PROBLEM", PROBLEM, "Solver", SOLVERS, "RANS"),
            OptionDecl::boolean("RESTART_SOL", PROBLEM, "Restart", false),
            OptionDecl::string_array("MARKER_EULER", MARKERS, "Euler walls", "NONE"),
            OptionDecl::compound(
                "MARKER_OUTLET",
                MARKERS,
                "Outlets",
                CompoundPlugin::new::<StringDoubleList>("STRING_DOUBLE_LIST"),
            ),
            OptionDecl::scalar("CFL_NUMBER", PROBLEM, "CFL", "1.25"),
        ]
    }

    #[test]
    fn builds_and_looks_up() {
        let registry = OptionRegistry::build(&table(), CATEGORIES).unwrap();
        assert_eq!(registry.len(), 5);
        let schema = registry.lookup_by_key("CFL_NUMBER").unwrap();
        assert_eq!(schema.id(), FieldId::new(4));
        assert_eq!(schema.default_value(), &Value::Scalar(1.25));
        assert_eq!(schema.default_text(), "1.25");
        assert!(registry.lookup_by_key("cfl_number").is_none());
        assert!(registry.is_config_option("MARKER_EULER"));
        assert!(!registry.is_config_option("MARKER_WALL"));
    }

    #[test]
    fn default_moves_to_front_of_domain() {
        let registry = OptionRegistry::build(&table(), CATEGORIES).unwrap();
        let schema = registry.lookup_by_key("PHYSICAL_PROBLEM").unwrap();
        assert_eq!(schema.domain(), &["RANS", "EULER", "NAVIER_STOKES"]);
        assert!(schema.is_enumerable());
    }

    #[test]
    fn enum_list_defaults_move_to_front() {
        let decls = [OptionDecl::enum_list(
            "GRID_MOVEMENT_KIND",
            PROBLEM,
            "Motion",
            &["NO_MOVEMENT", "RIGID_MOTION", "DEFORMING"],
            "( DEFORMING, RIGID_MOTION )",
        )];
        let registry = OptionRegistry::build(&decls, CATEGORIES).unwrap();
        let schema = registry.lookup_by_key("GRID_MOVEMENT_KIND").unwrap();
        assert_eq!(schema.domain(), &["DEFORMING", "RIGID_MOTION", "NO_MOVEMENT"]);
        assert_eq!(schema.default_text(), "( DEFORMING, RIGID_MOTION )");
    }

    #[test]
    fn ordered_by_category_then_key() {
        let registry = OptionRegistry::build(&table(), CATEGORIES).unwrap();
        let keys: Vec<&str> = registry.ordered().map(OptionSchema::key).collect();
        assert_eq!(
            keys,
            vec![
                "CFL_NUMBER",
                "PHYSICAL_PROBLEM",
                "RESTART_SOL",
                "MARKER_EULER",
                "MARKER_OUTLET"
            ]
        );
    }

    #[test]
    fn duplicate_key_is_fatal() {
        let mut decls = table();
        decls.push(OptionDecl::scalar("CFL_NUMBER", PROBLEM, "again", "2"));
        assert_eq!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::DuplicateKey("CFL_NUMBER")
        );
    }

    #[test]
    fn duplicate_default_in_domain_is_fatal() {
        let decls = [OptionDecl::enumeration(
            "KIND_TURB_MODEL",
            PROBLEM,
            "Turbulence",
            &["NONE", "SA", "SA"],
            "SA",
        )];
        assert_eq!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::DuplicateDefaultInDomain {
                key: "KIND_TURB_MODEL",
                value: "SA".into()
            }
        );
    }

    #[test]
    fn default_outside_domain_is_fatal() {
        let decls = [OptionDecl::enumeration("PHYSICAL_PROBLEM", PROBLEM, "", SOLVERS, "LES")];
        assert!(matches!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::DefaultNotInDomain { .. }
        ));
    }

    #[test]
    fn unlisted_category_is_fatal() {
        let decls = [OptionDecl::scalar("MACH_NUMBER", "Freestream Conditions", "", "0.8")];
        assert_eq!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::UnlistedCategory {
                key: "MACH_NUMBER",
                category: "Freestream Conditions"
            }
        );
    }

    #[test]
    fn enumerable_without_domain_is_fatal() {
        let decls = [OptionDecl::enumeration("GAS_MODEL", PROBLEM, "", &[], "AIR")];
        assert_eq!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::MissingDomain("GAS_MODEL")
        );
    }

    #[test]
    fn enum_list_domain_may_not_hold_sentinel() {
        let domain = &["NONE", "HICKS_HENNE"];
        let decls = [OptionDecl::enum_list("DV_KIND", PROBLEM, "", domain, "NONE")];
        assert_eq!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::ReservedSentinel("DV_KIND")
        );
    }

    #[test]
    fn unparsable_default_is_fatal() {
        let decls = [OptionDecl::fixed_floats("AD_COEFF_FLOW", PROBLEM, "", 3, "( 0.15, 0.5 )")];
        assert!(matches!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::InvalidDefault { key: "AD_COEFF_FLOW", .. }
        ));
    }

    #[test]
    fn unwritable_keys_are_fatal() {
        for key in ["", "MACH NUMBER", "MACH=NUMBER", "%MACH", "MARKER(1)"] {
            let decls = [OptionDecl::scalar(key, PROBLEM, "", "0.8")];
            assert_eq!(
                OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
                SchemaError::InvalidKey(key)
            );
        }
    }

    #[test]
    fn domain_members_must_be_single_tokens() {
        let domain = &["ROE", "JST=2"];
        let decls = [OptionDecl::enumeration("CONV_NUM_METHOD", PROBLEM, "", domain, "ROE")];
        assert_eq!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::InvalidDomainMember {
                key: "CONV_NUM_METHOD",
                value: "JST=2"
            }
        );
    }

    #[test]
    fn multiline_description_is_fatal() {
        let decls = [OptionDecl::scalar("MACH_NUMBER", PROBLEM, "Mach\nAOA= 5", "0.8")];
        assert_eq!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::MultilineDescription("MACH_NUMBER")
        );
    }

    #[test]
    fn multiline_category_is_fatal() {
        let categories = [Category::new(PROBLEM, "Solver\nsettings")];
        let decls = [OptionDecl::scalar("MACH_NUMBER", PROBLEM, "", "0.8")];
        assert_eq!(
            OptionRegistry::build(&decls, &categories).unwrap_err(),
            SchemaError::MultilineCategory(PROBLEM)
        );
    }

    #[test]
    fn empty_fixed_array_is_fatal() {
        let decls = [OptionDecl::fixed_floats("AD_COEFF_FLOW", PROBLEM, "", 0, "NONE")];
        assert_eq!(
            OptionRegistry::build(&decls, CATEGORIES).unwrap_err(),
            SchemaError::EmptyFixedArray("AD_COEFF_FLOW")
        );
    }
}
