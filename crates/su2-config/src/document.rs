//! Configuration documents
//!
//! A [`Document`] holds one typed value for every option of its registry.
//! It starts as a copy of the defaults and is only ever changed through
//! validated setters, so it is always complete and always writable.

use std::fmt::{self, Display, Formatter};

use serde_json::{Map, Value as JsonValue};
use su2_schema::{tokenize, FieldId, OptionRegistry, OptionSchema, Value, ValueError};

use crate::error::SetError;

/// One typed value per registered option
#[derive(Debug, Clone)]
pub struct Document<'r> {
    registry: &'r OptionRegistry,
    values: Vec<Value>,
}

impl<'r> Document<'r> {
    /// Document holding every option's default value
    #[must_use]
    pub fn defaults(registry: &'r OptionRegistry) -> Self {
        Self {
            registry,
            values: registry.default_values().cloned().collect(),
        }
    }

    /// Registry the document was built from
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &'r OptionRegistry {
        self.registry
    }

    /// Current value of a field
    #[inline]
    #[must_use]
    pub fn get(&self, field: impl Into<FieldId>) -> Option<&Value> {
        self.values.get(field.into().index())
    }

    /// Current value of the option with a config-file key
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&Value> {
        let schema = self.registry.lookup_by_key(key)?;
        self.get(schema.id())
    }

    /// Set a field after checking it against the option's kind and domain
    ///
    /// # Errors
    /// Returns error, leaving the field unchanged, if the value has the wrong
    /// kind, is outside the enum domain, or cannot be written and read back
    pub fn set_field(&mut self, field: impl Into<FieldId>, value: Value) -> Result<(), SetError> {
        let id = field.into();
        self.check(id, &value)?;
        tracing::trace!(field = %id, value = %value, "Setting field");
        self.values[id.index()] = value;
        Ok(())
    }

    /// Set an enum field from a domain member name
    ///
    /// # Errors
    /// Returns [`SetError::InvalidEnumAssignment`] if `value` is outside the
    /// domain, or [`SetError::KindMismatch`] if the field is not an enum
    pub fn set_enum(&mut self, field: impl Into<FieldId>, value: &str) -> Result<(), SetError> {
        self.set_field(field, Value::Enum(value.to_string()))
    }

    /// Set several fields at once
    ///
    /// Every update is checked before any is applied; if one fails, the
    /// document is unchanged.
    ///
    /// # Errors
    /// Returns the first failing update's error
    pub fn set_fields<I, F>(&mut self, updates: I) -> Result<(), SetError>
    where
        I: IntoIterator<Item = (F, Value)>,
        F: Into<FieldId>,
    {
        let staged = updates
            .into_iter()
            .map(|(field, value)| {
                let id = field.into();
                self.check(id, &value).map(|()| (id, value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(fields = staged.len(), "Applying field updates");
        for (id, value) in staged {
            self.values[id.index()] = value;
        }
        Ok(())
    }

    /// Set a field from config-file value text, as if read from `KEY= text`
    ///
    /// # Errors
    /// Returns error if the key is unknown or the text does not parse as the
    /// option's kind
    pub fn set_from_text(&mut self, key: &str, text: &str) -> Result<FieldId, SetError> {
        let schema = self
            .registry
            .lookup_by_key(key)
            .ok_or_else(|| SetError::UnknownKey(key.to_string()))?;
        let value = schema
            .kind()
            .parse(&tokenize(text), schema.domain())
            .map_err(|source| value_error(schema, source))?;
        let id = schema.id();
        self.set_field(id, value)?;
        Ok(id)
    }

    /// Restore a field to its default
    ///
    /// # Errors
    /// Returns [`SetError::UnknownField`] if the id is not registered
    pub fn reset(&mut self, field: impl Into<FieldId>) -> Result<(), SetError> {
        let id = field.into();
        let schema = self.schema(id)?;
        self.values[id.index()] = schema.default_value().clone();
        Ok(())
    }

    /// True if the field's text equals its default's text
    ///
    /// Unknown fields report `false`.
    #[must_use]
    pub fn is_default(&self, field: impl Into<FieldId>) -> bool {
        let id = field.into();
        match (self.registry.schema(id), self.values.get(id.index())) {
            (Some(schema), Some(value)) => value.render() == schema.default_text(),
            _ => false,
        }
    }

    /// Fields whose text differs from the default, in write order
    pub fn non_default_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.registry
            .ordered()
            .map(OptionSchema::id)
            .filter(move |id| !self.is_default(*id))
    }

    /// Options paired with their current values, in write order
    pub fn entries(&self) -> impl Iterator<Item = (&'r OptionSchema, &Value)> + '_ {
        self.registry
            .ordered()
            .map(move |schema| (schema, &self.values[schema.id().index()]))
    }

    /// Fields whose values differ between two documents, in write order
    ///
    /// Both documents are expected to come from the same registry.
    #[must_use]
    pub fn diff(&self, other: &Document<'_>) -> Vec<FieldDiff> {
        self.entries()
            .filter_map(|(schema, left)| {
                let right = other.values.get(schema.id().index())?;
                (left != right).then(|| FieldDiff {
                    field: schema.id(),
                    key: schema.key(),
                    left: left.clone(),
                    right: right.clone(),
                })
            })
            .collect()
    }

    /// JSON object mapping each key to its value, in write order
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = self
            .entries()
            .map(|(schema, value)| {
                let json = serde_json::to_value(value).unwrap_or_default();
                (schema.key().to_string(), json)
            })
            .collect();
        JsonValue::Object(map)
    }

    /// Store a value produced by the parse rule of the field's own kind
    pub(crate) fn put(&mut self, id: FieldId, value: Value) {
        self.values[id.index()] = value;
    }

    fn schema(&self, id: FieldId) -> Result<&'r OptionSchema, SetError> {
        self.registry.schema(id).ok_or(SetError::UnknownField(id))
    }

    fn check(&self, id: FieldId, value: &Value) -> Result<(), SetError> {
        let schema = self.schema(id)?;
        let kind = schema.kind();
        if !kind.accepts(value) {
            return Err(SetError::KindMismatch {
                key: schema.key(),
                expected: kind,
                found: value.variant_name(),
            });
        }
        kind.validate(value, schema.domain())
            .map_err(|source| value_error(schema, source))
    }
}

impl PartialEq for Document<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.registry, other.registry) && self.values == other.values
    }
}

/// Map a value error to a mutation error for an option
fn value_error(schema: &OptionSchema, source: ValueError) -> SetError {
    match source {
        ValueError::UnknownEnumValue { value } => SetError::InvalidEnumAssignment {
            key: schema.key(),
            value,
        },
        source => SetError::InvalidValue {
            key: schema.key(),
            source,
        },
    }
}

/// A field whose value differs between two documents
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDiff {
    /// Field id
    pub field: FieldId,
    /// Config-file key
    pub key: &'static str,
    /// Value in the document `diff` was called on
    pub left: Value,
    /// Value in the other document
    pub right: Value,
}

impl Display for FieldDiff {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: left is {}, right is {}", self.key, self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use su2_schema::{builtin_registry, CompoundBox, Field, Kind, ParamList, StringDoubleList};

    fn doc() -> Document<'static> {
        Document::defaults(builtin_registry())
    }

    #[test]
    fn starts_at_defaults() {
        let doc = doc();
        assert_eq!(doc.get(Field::CflNumber), Some(&Value::Scalar(1.25)));
        assert_eq!(doc.get_by_key("RESTART_SOL"), Some(&Value::Bool(false)));
        assert_eq!(doc.non_default_fields().count(), 0);
        assert_eq!(doc, Document::defaults(builtin_registry()));
    }

    #[test]
    fn set_field_checks_kind() {
        let mut doc = doc();
        let err = doc.set_field(Field::CflNumber, Value::Bool(true)).unwrap_err();
        assert_eq!(
            err,
            SetError::KindMismatch {
                key: "CFL_NUMBER",
                expected: Kind::Scalar,
                found: "Bool"
            }
        );
        assert_eq!(doc.get(Field::CflNumber), Some(&Value::Scalar(1.25)));
    }

    #[test]
    fn enum_outside_domain_leaves_field_unchanged() {
        let mut doc = doc();
        doc.set_enum(Field::KindTurbModel, "SA").unwrap();
        let err = doc.set_enum(Field::KindTurbModel, "K_EPSILON").unwrap_err();
        assert_eq!(
            err,
            SetError::InvalidEnumAssignment {
                key: "KIND_TURB_MODEL",
                value: "K_EPSILON".into()
            }
        );
        assert_eq!(doc.get(Field::KindTurbModel), Some(&Value::Enum("SA".into())));
    }

    #[test]
    fn enum_list_members_are_checked() {
        let mut doc = doc();
        let bad = Value::EnumList(vec!["HICKS_HENNE".into(), "BOGUS".into()]);
        assert!(matches!(
            doc.set_field(Field::DvKind, bad),
            Err(SetError::InvalidEnumAssignment { .. })
        ));
        assert!(doc.is_default(Field::DvKind));
    }

    #[test]
    fn unrepresentable_strings_are_rejected() {
        let mut doc = doc();
        let err = doc
            .set_field(Field::MeshFilename, Value::String("my mesh.su2".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            SetError::InvalidValue {
                source: ValueError::Unrepresentable(_),
                ..
            }
        ));
    }

    #[test]
    fn compound_values_with_equals_sign_are_rejected() {
        let mut doc = doc();
        let outlet = StringDoubleList::new(vec![("a=b".into(), 1.0)]);
        let err = doc
            .set_field(Field::MarkerOutlet, Value::Compound(CompoundBox::new(outlet)))
            .unwrap_err();
        assert!(matches!(
            err,
            SetError::InvalidValue {
                source: ValueError::Unrepresentable(_),
                ..
            }
        ));

        let params = ParamList::from_text("x=y 1");
        let err = doc
            .set_field(Field::DvParam, Value::Compound(CompoundBox::new(params)))
            .unwrap_err();
        assert!(matches!(err, SetError::InvalidValue { .. }));
        assert!(doc.is_default(Field::MarkerOutlet));
        assert!(doc.is_default(Field::DvParam));
    }

    #[test]
    fn fixed_arrays_keep_their_length() {
        let mut doc = doc();
        let err = doc
            .set_field(Field::FreestreamVelocity, Value::FloatArray(vec![1.0, 2.0]))
            .unwrap_err();
        assert!(matches!(err, SetError::InvalidValue { .. }));
        doc.set_field(Field::FreestreamVelocity, Value::FloatArray(vec![0.0, 1.0, 0.0]))
            .unwrap();
    }

    #[test]
    fn set_fields_is_all_or_nothing() {
        let mut doc = doc();
        let result = doc.set_fields([
            (Field::MachNumber, Value::Scalar(0.8)),
            (Field::Aoa, Value::Enum("HIGH".into())),
        ]);
        assert!(result.is_err());
        assert!(doc.is_default(Field::MachNumber));

        doc.set_fields([
            (Field::MachNumber, Value::Scalar(0.8)),
            (Field::Aoa, Value::Scalar(1.25)),
        ])
        .unwrap();
        assert_eq!(doc.get(Field::Aoa), Some(&Value::Scalar(1.25)));
    }

    #[test]
    fn set_from_text_uses_parse_rules() {
        let mut doc = doc();
        let id = doc.set_from_text("MARKER_EULER", "( airfoil, flap )").unwrap();
        assert_eq!(id, Field::MarkerEuler.id());
        assert_eq!(
            doc.get(Field::MarkerEuler),
            Some(&Value::StringArray(vec!["airfoil".into(), "flap".into()]))
        );

        doc.set_from_text("MARKER_OUTLET", "( outlet, 101325 )").unwrap();
        let outlet = doc.get(Field::MarkerOutlet).unwrap().as_compound().unwrap();
        assert_eq!(
            outlet.downcast_ref::<StringDoubleList>().unwrap().get("outlet"),
            Some(101_325.0)
        );

        assert_eq!(
            doc.set_from_text("MARKER_WALL", "wall").unwrap_err(),
            SetError::UnknownKey("MARKER_WALL".into())
        );
        assert!(matches!(
            doc.set_from_text("PHYSICAL_PROBLEM", "LES").unwrap_err(),
            SetError::InvalidEnumAssignment { .. }
        ));
    }

    #[test]
    fn reset_restores_default() {
        let mut doc = doc();
        doc.set_field(Field::CflNumber, Value::Scalar(5.0)).unwrap();
        assert!(!doc.is_default(Field::CflNumber));
        doc.reset(Field::CflNumber).unwrap();
        assert!(doc.is_default(Field::CflNumber));
    }

    #[test]
    fn diff_lists_changed_fields() {
        let base = doc();
        let mut changed = base.clone();
        changed.set_field(Field::MachNumber, Value::Scalar(0.8)).unwrap();
        changed.set_field(Field::RestartSol, Value::Bool(true)).unwrap();

        let diffs = base.diff(&changed);
        let keys: Vec<&str> = diffs.iter().map(|d| d.key).collect();
        assert_eq!(keys, vec!["RESTART_SOL", "MACH_NUMBER"]);
        assert_eq!(diffs[1].to_string(), "MACH_NUMBER: left is 0, right is 0.8");
        assert_ne!(base, changed);
        assert!(base.diff(&base.clone()).is_empty());
    }

    #[test]
    fn json_follows_write_order() {
        let mut doc = doc();
        doc.set_field(Field::Aoa, Value::Scalar(2.0)).unwrap();
        let json = doc.to_json();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), builtin_registry().len());
        assert_eq!(object.keys().next().map(String::as_str), Some("AXISYMMETRIC"));
        assert_eq!(object["AOA"], serde_json::json!(2.0));
        assert_eq!(object["MARKER_EULER"], serde_json::json!([]));
    }
}
