//! Field annotation parsing.
//!
//! Two annotation channels are read per field:
//! - the naming channel (`json` by default): `name[,omitempty]` or the literal `-`
//! - the validation channel (`validate` by default): comma-separated `token` or
//!   `key=value` entries
//!
//! Parsing is lenient. Unknown keys, unparseable numbers, and unsupported formats
//! are dropped without an error so that a typo costs one constraint, not the
//! whole document.

use crate::schema::Format;

/// Parsed naming/omission annotation of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingDirective {
    /// Property name to emit. Empty means "use the declared field name".
    pub exposed_name: String,
    /// `omitempty` was present.
    pub omit_when_empty: bool,
    /// The annotation was exactly `-`: the field is left out of the schema.
    pub skip: bool,
}

/// Parse a naming annotation such as `"id,omitempty"`.
///
/// ```text
/// ""               -> { exposed_name: "",   omit_when_empty: false, skip: false }
/// "-"              -> { exposed_name: "",   omit_when_empty: false, skip: true  }
/// "id"             -> { exposed_name: "id", omit_when_empty: false, skip: false }
/// "id, omitempty"  -> { exposed_name: "id", omit_when_empty: true,  skip: false }
/// ",omitempty"     -> { exposed_name: "",   omit_when_empty: true,  skip: false }
/// ```
#[must_use]
pub fn parse_naming_directive(raw: &str) -> NamingDirective {
    if raw.is_empty() {
        return NamingDirective::default();
    }

    if raw == "-" {
        return NamingDirective {
            skip: true,
            ..NamingDirective::default()
        };
    }

    let mut parts = raw.split(',');
    let exposed_name = parts.next().unwrap_or_default().trim().to_string();
    let omit_when_empty = parts.any(|part| part.trim() == "omitempty");

    NamingDirective {
        exposed_name,
        omit_when_empty,
        skip: false,
    }
}

/// One schema keyword contributed by a validation annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Minimum(f64),
    Maximum(f64),
    ExclusiveMinimum(f64),
    ExclusiveMaximum(f64),
    MultipleOf(f64),
    Pattern(String),
    Format(Format),
    MinItems(i64),
    MaxItems(i64),
}

impl Constraint {
    /// The JSON Schema keyword this constraint sets.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Minimum(_) => "minimum",
            Self::Maximum(_) => "maximum",
            Self::ExclusiveMinimum(_) => "exclusiveMinimum",
            Self::ExclusiveMaximum(_) => "exclusiveMaximum",
            Self::MultipleOf(_) => "multipleOf",
            Self::Pattern(_) => "pattern",
            Self::Format(_) => "format",
            Self::MinItems(_) => "minItems",
            Self::MaxItems(_) => "maxItems",
        }
    }
}

/// Constraints parsed from one validation annotation, in annotation order.
///
/// A later entry for the same keyword overrides an earlier one when merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Look up the last constraint for a keyword.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&Constraint> {
        self.constraints.iter().rev().find(|c| c.keyword() == keyword)
    }
}

impl IntoIterator for ConstraintSet {
    type Item = Constraint;
    type IntoIter = std::vec::IntoIter<Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.into_iter()
    }
}

/// Parse a validation annotation such as `"required,minimum=1,pattern=^a=b$"`.
///
/// Bare tokens (`required`, `omitempty`, ...) are not recorded; requiredness is
/// decided from the raw annotation by the generator. `key=value` entries split
/// on the first `=` only, so values may themselves contain `=`.
#[must_use]
pub fn parse_constraints(raw: &str) -> ConstraintSet {
    let mut set = ConstraintSet::default();
    if raw.is_empty() {
        return set;
    }

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match parse_constraint(key, value) {
            Some(constraint) => set.constraints.push(constraint),
            None => tracing::debug!(key, value, "dropping unusable validation constraint"),
        }
    }

    set
}

fn parse_constraint(key: &str, value: &str) -> Option<Constraint> {
    match key {
        "minimum" | "min" => parse_float(value).map(Constraint::Minimum),
        "maximum" | "max" => parse_float(value).map(Constraint::Maximum),
        "exclusiveMinimum" => parse_float(value).map(Constraint::ExclusiveMinimum),
        "exclusiveMaximum" => parse_float(value).map(Constraint::ExclusiveMaximum),
        "multipleOf" => parse_float(value).map(Constraint::MultipleOf),
        "pattern" => Some(Constraint::Pattern(value.to_string())),
        "format" => value.parse().ok().map(Constraint::Format),
        "minItems" => value.parse().ok().map(Constraint::MinItems),
        "maxItems" => value.parse().ok().map(Constraint::MaxItems),
        _ => None,
    }
}

// Non-finite values have no JSON encoding. Hex float literals (`0x1p3`)
// are not accepted.
fn parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "", false, false)]
    #[case("-", "", false, true)]
    #[case("id", "id", false, false)]
    #[case("id,omitempty", "id", true, false)]
    #[case("id, omitempty ", "id", true, false)]
    #[case(",omitempty", "", true, false)]
    #[case(" name ,string", "name", false, false)]
    #[case("-,", "-", false, false)]
    fn naming_directive_table(
        #[case] raw: &str,
        #[case] name: &str,
        #[case] omit: bool,
        #[case] skip: bool,
    ) {
        assert_eq!(
            parse_naming_directive(raw),
            NamingDirective {
                exposed_name: name.to_string(),
                omit_when_empty: omit,
                skip,
            }
        );
    }

    #[test]
    fn empty_validation_is_empty_set() {
        assert!(parse_constraints("").is_empty());
    }

    #[test]
    fn required_token_is_not_a_constraint() {
        let set = parse_constraints("required,omitempty");
        assert!(set.is_empty());
    }

    #[test]
    fn numeric_keys_and_aliases() {
        let set = parse_constraints("min=1, max = 10,exclusiveMinimum=0,exclusiveMaximum=11,multipleOf=0.5");
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec![
                Constraint::Minimum(1.0),
                Constraint::Maximum(10.0),
                Constraint::ExclusiveMinimum(0.0),
                Constraint::ExclusiveMaximum(11.0),
                Constraint::MultipleOf(0.5),
            ]
        );
    }

    #[test]
    fn pattern_keeps_everything_after_first_equals() {
        let set = parse_constraints("pattern=^a=b$");
        assert_eq!(set.get("pattern"), Some(&Constraint::Pattern("^a=b$".into())));
    }

    #[rstest]
    #[case("minimum=abc")]
    #[case("maximum=")]
    #[case("minimum=inf")]
    #[case("multipleOf=NaN")]
    #[case("minItems=1.5")]
    #[case("maxItems=ten")]
    #[case("format=bogus")]
    #[case("unknownKey=5")]
    #[case("=5")]
    #[case("minimum=0x1p3")]
    #[case("maximum=0x10")]
    fn malformed_entries_are_dropped(#[case] raw: &str) {
        assert!(parse_constraints(raw).is_empty(), "expected {raw:?} to be dropped");
    }

    #[test]
    fn dropped_entry_does_not_affect_neighbours() {
        let set = parse_constraints("minimum=x,maximum=5,format=bogus,format=email");
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec![Constraint::Maximum(5.0), Constraint::Format(Format::Email)]
        );
    }

    #[test]
    fn item_counts_are_integers() {
        let set = parse_constraints("minItems=0,maxItems=-2");
        assert_eq!(set.get("minItems"), Some(&Constraint::MinItems(0)));
        assert_eq!(set.get("maxItems"), Some(&Constraint::MaxItems(-2)));
    }

    #[test]
    fn every_supported_format_is_kept() {
        for format in Format::ALL {
            let set = parse_constraints(&format!("format={format}"));
            assert_eq!(set.get("format"), Some(&Constraint::Format(format)));
        }
    }

    #[test]
    fn later_entry_wins_on_lookup() {
        let set = parse_constraints("minimum=1,minimum=2");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("minimum"), Some(&Constraint::Minimum(2.0)));
    }
}
