//! Value kinds and their parse rules
//!
//! A [`Kind`] is resolved once per option when the table is declared. It
//! turns raw tokens into a [`Value`] and validates values assigned in code;
//! the matching render rule lives on [`Value::render`].

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

use crate::compound::CompoundPlugin;
use crate::error::ValueError;
use crate::token::{is_sentinel, is_single_token, NONE};
use crate::value::Value;

/// Declared kind of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `YES` / `NO`
    Bool,
    /// Single floating point number
    Scalar,
    /// Single bare token
    String,
    /// Single member of the option's domain
    Enum,
    /// Sequence of domain members
    EnumList,
    /// Variable length float sequence
    FloatArray,
    /// Float sequence of exactly this length
    FixedFloatArray(usize),
    /// Variable length string sequence
    StringArray,
    /// Plugin-defined value
    Compound(CompoundPlugin),
}

impl Kind {
    /// True if the option carries an enum domain
    #[inline]
    #[must_use]
    pub fn is_enumerable(&self) -> bool {
        matches!(self, Self::Enum | Self::EnumList)
    }

    /// Parse raw value tokens into a typed value
    ///
    /// `domain` is only consulted for enumerable kinds.
    ///
    /// # Errors
    /// Returns error if the tokens do not form a value of this kind
    pub fn parse(&self, tokens: &[String], domain: &[&str]) -> Result<Value, ValueError> {
        match self {
            Self::Bool => match single(tokens)? {
                "YES" => Ok(Value::Bool(true)),
                "NO" => Ok(Value::Bool(false)),
                other => Err(ValueError::InvalidBoolToken(other.to_string())),
            },
            Self::Scalar => parse_float(single(tokens)?).map(Value::Scalar),
            Self::String => Ok(Value::String(single(tokens)?.to_string())),
            Self::Enum => {
                let token = single(tokens)?;
                check_member(token, domain)?;
                Ok(Value::Enum(token.to_string()))
            }
            Self::EnumList => {
                let items = sequence(tokens);
                for item in items {
                    check_member(item, domain)?;
                }
                Ok(Value::EnumList(items.to_vec()))
            }
            Self::FloatArray => sequence(tokens)
                .iter()
                .map(|token| parse_float(token))
                .collect::<Result<_, _>>()
                .map(Value::FloatArray),
            Self::FixedFloatArray(len) => {
                if tokens.len() != *len {
                    return Err(ValueError::arity(*len, tokens.len()));
                }
                tokens
                    .iter()
                    .map(|token| parse_float(token))
                    .collect::<Result<_, _>>()
                    .map(Value::FloatArray)
            }
            Self::StringArray => Ok(Value::StringArray(sequence(tokens).to_vec())),
            Self::Compound(plugin) => Ok(Value::Compound(plugin.parse(tokens)?)),
        }
    }

    /// True if `value` has the variant (and plugin type) this kind stores
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Scalar, Value::Scalar(_))
            | (Self::String, Value::String(_))
            | (Self::Enum, Value::Enum(_))
            | (Self::EnumList, Value::EnumList(_))
            | (Self::FloatArray | Self::FixedFloatArray(_), Value::FloatArray(_))
            | (Self::StringArray, Value::StringArray(_)) => true,
            (Self::Compound(plugin), Value::Compound(value)) => plugin.accepts(value),
            _ => false,
        }
    }

    /// Check a value of this kind before it is stored
    ///
    /// Verifies domain membership for enumerable kinds, the length of fixed
    /// arrays, and that the value comes back unchanged from its own text.
    /// Callers check [`Kind::accepts`] first.
    ///
    /// # Errors
    /// Returns the first problem found with the value
    pub fn validate(&self, value: &Value, domain: &[&str]) -> Result<(), ValueError> {
        match (self, value) {
            (Self::Enum, Value::Enum(token)) => check_member(token, domain),
            (Self::EnumList, Value::EnumList(items)) => {
                items.iter().try_for_each(|item| check_member(item, domain))?;
                check_not_sentinel(items)
            }
            (Self::String, Value::String(text)) => check_token(text),
            (Self::StringArray, Value::StringArray(items)) => {
                items.iter().try_for_each(|item| check_token(item))?;
                check_not_sentinel(items)
            }
            (Self::FixedFloatArray(len), Value::FloatArray(items)) if items.len() != *len => {
                Err(ValueError::arity(*len, items.len()))
            }
            (Self::Compound(plugin), Value::Compound(value)) => plugin.check_representable(value),
            _ => Ok(()),
        }
    }

    /// Name shown in the `Type:` comment line
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("Bool"),
            Self::Scalar => f.write_str("Scalar"),
            Self::String => f.write_str("String"),
            Self::Enum => f.write_str("Enum"),
            Self::EnumList => f.write_str("EnumList"),
            Self::FloatArray => f.write_str("FloatArray"),
            Self::FixedFloatArray(len) => write!(f, "FloatArray[{len}]"),
            Self::StringArray => f.write_str("StringArray"),
            Self::Compound(plugin) => f.write_str(plugin.tag()),
        }
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn single(tokens: &[String]) -> Result<&str, ValueError> {
    match tokens {
        [only] => Ok(only),
        _ => Err(ValueError::arity(1, tokens.len())),
    }
}

/// Variable length tokens with the sentinel mapped to empty
fn sequence(tokens: &[String]) -> &[String] {
    if is_sentinel(tokens) {
        &[]
    } else {
        tokens
    }
}

fn parse_float(token: &str) -> Result<f64, ValueError> {
    token.parse().map_err(|_| ValueError::number(token))
}

fn check_member(token: &str, domain: &[&str]) -> Result<(), ValueError> {
    if domain.contains(&token) {
        Ok(())
    } else {
        Err(ValueError::UnknownEnumValue {
            value: token.to_string(),
        })
    }
}

fn check_token(text: &str) -> Result<(), ValueError> {
    if is_single_token(text) {
        Ok(())
    } else {
        Err(ValueError::Unrepresentable(text.to_string()))
    }
}

fn check_not_sentinel(items: &[String]) -> Result<(), ValueError> {
    if matches!(items, [only] if only == NONE) {
        Err(ValueError::Unrepresentable(NONE.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::{ParamList, StringDoubleList};
    use crate::token::tokenize;

    const SOLVERS: &[&str] = &["EULER", "NAVIER_STOKES", "RANS"];

    fn parse(kind: Kind, text: &str) -> Result<Value, ValueError> {
        kind.parse(&tokenize(text), SOLVERS)
    }

    #[test]
    fn bool_tokens() {
        assert_eq!(parse(Kind::Bool, "YES").unwrap(), Value::Bool(true));
        assert_eq!(parse(Kind::Bool, "NO").unwrap(), Value::Bool(false));
        assert_eq!(
            parse(Kind::Bool, "yes").unwrap_err(),
            ValueError::InvalidBoolToken("yes".into())
        );
    }

    #[test]
    fn scalar_arity_and_format() {
        assert_eq!(parse(Kind::Scalar, "1.25").unwrap(), Value::Scalar(1.25));
        assert_eq!(parse(Kind::Scalar, "").unwrap_err(), ValueError::arity(1, 0));
        assert_eq!(parse(Kind::Scalar, "1 2").unwrap_err(), ValueError::arity(1, 2));
        assert_eq!(parse(Kind::Scalar, "fast").unwrap_err(), ValueError::number("fast"));
    }

    #[test]
    fn string_is_verbatim() {
        assert_eq!(
            parse(Kind::String, " mesh_NACA0012.su2 ").unwrap(),
            Value::String("mesh_NACA0012.su2".into())
        );
        assert!(parse(Kind::String, "a b").is_err());
    }

    #[test]
    fn enum_must_match_exactly() {
        assert_eq!(parse(Kind::Enum, "RANS").unwrap(), Value::Enum("RANS".into()));
        assert_eq!(
            parse(Kind::Enum, "rans").unwrap_err(),
            ValueError::UnknownEnumValue { value: "rans".into() }
        );
    }

    #[test]
    fn enum_list_checks_each_item() {
        assert_eq!(
            parse(Kind::EnumList, "( EULER, RANS )").unwrap(),
            Value::EnumList(vec!["EULER".into(), "RANS".into()])
        );
        assert_eq!(parse(Kind::EnumList, "NONE").unwrap(), Value::EnumList(vec![]));
        assert!(parse(Kind::EnumList, "( EULER, LES )").is_err());
    }

    #[test]
    fn arrays_honour_sentinel() {
        assert_eq!(parse(Kind::FloatArray, "NONE").unwrap(), Value::FloatArray(vec![]));
        assert_eq!(parse(Kind::StringArray, "NONE").unwrap(), Value::StringArray(vec![]));
        assert_eq!(
            parse(Kind::FloatArray, "( 1, 30, 45 )").unwrap(),
            Value::FloatArray(vec![1.0, 30.0, 45.0])
        );
        assert_eq!(
            parse(Kind::FloatArray, "( 1, x )").unwrap_err(),
            ValueError::number("x")
        );
    }

    #[test]
    fn fixed_array_requires_length() {
        let kind = Kind::FixedFloatArray(3);
        assert_eq!(
            parse(kind, "( 0.15, 0.5, 0.02 )").unwrap(),
            Value::FloatArray(vec![0.15, 0.5, 0.02])
        );
        assert_eq!(parse(kind, "( 1, 2 )").unwrap_err(), ValueError::arity(3, 2));
        assert_eq!(parse(kind, "NONE").unwrap_err(), ValueError::arity(3, 1));
    }

    #[test]
    fn compound_delegates_to_plugin() {
        let kind = Kind::Compound(CompoundPlugin::new::<StringDoubleList>("STRING_DOUBLE_LIST"));
        assert!(parse(kind, "( a, 1 )").is_ok());
        assert!(matches!(
            parse(kind, "( a, 1, b )").unwrap_err(),
            ValueError::CompoundParse(_)
        ));
    }

    #[test]
    fn accepts_checks_variant_and_plugin() {
        let blob = CompoundPlugin::new::<ParamList>("DV_PARAM");
        let pairs = CompoundPlugin::new::<StringDoubleList>("STRING_DOUBLE_LIST");
        assert!(Kind::FixedFloatArray(2).accepts(&Value::FloatArray(vec![])));
        assert!(!Kind::Enum.accepts(&Value::String("RANS".into())));
        assert!(Kind::Compound(blob).accepts(&Value::Compound(blob.zero())));
        assert!(!Kind::Compound(blob).accepts(&Value::Compound(pairs.zero())));
    }

    #[test]
    fn validate_rejects_unrepresentable() {
        assert!(Kind::String
            .validate(&Value::String("two words".into()), &[])
            .is_err());
        assert!(Kind::StringArray
            .validate(&Value::StringArray(vec!["NONE".into()]), &[])
            .is_err());
        assert!(Kind::StringArray
            .validate(&Value::StringArray(vec!["NONE".into(), "wall".into()]), &[])
            .is_ok());
        assert_eq!(
            Kind::FixedFloatArray(3)
                .validate(&Value::FloatArray(vec![1.0]), &[])
                .unwrap_err(),
            ValueError::arity(3, 1)
        );
        assert!(Kind::Enum
            .validate(&Value::Enum("LES".into()), SOLVERS)
            .is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(Kind::FixedFloatArray(3).to_string(), "FloatArray[3]");
        assert_eq!(
            Kind::Compound(CompoundPlugin::new::<ParamList>("DV_PARAM")).name(),
            "DV_PARAM"
        );
    }
}
