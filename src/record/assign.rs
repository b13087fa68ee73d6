//! `key=value` edits given on the command line.

use crate::record::{AddressRecord, Field};
use anyhow::{Context, bail};
use regex::Regex;
use std::sync::LazyLock;

// Key is an identifier; everything after the first '=' is the value.
static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("assignment regex is valid")
});

/// Parse "city=Springfield" into (Field::City, "Springfield").
///
/// The value may be empty or contain further '=' characters.
pub fn parse_assignment(s: &str) -> anyhow::Result<(Field, String)> {
    let caps = match ASSIGNMENT_RE.captures(s) {
        Some(c) => c,
        None => bail!("assignment must look like key=value: {:?}", s),
    };

    let key = &caps[1];
    let field: Field = key
        .parse()
        .with_context(|| format!("bad assignment {:?}", s))?;

    Ok((field, caps[2].to_string()))
}

/// Apply assignments in order; a later one for the same key wins.
pub fn apply_assignments(rec: &mut AddressRecord, assignments: &[String]) -> anyhow::Result<()> {
    for a in assignments {
        let (field, value) = parse_assignment(a)?;
        tracing::info!(field = field.key(), value = %value, "set field");
        rec.set(field, value);
    }
    Ok(())
}

/// Unset `unset` fields, then apply `assignments` in order.
///
/// Unsets go first, so `--unset city city=X` ends with city set.
pub fn edit(rec: &mut AddressRecord, unset: &[Field], assignments: &[String]) -> anyhow::Result<()> {
    for &f in unset {
        if rec.get(f).is_none() {
            tracing::warn!(field = f.key(), "field already unset");
        }
        rec.set(f, None::<String>);
    }
    apply_assignments(rec, assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_simple_assignment() {
        assert_eq!(
            parse_assignment("street=742 Evergreen Terrace").unwrap(),
            (Field::Street, "742 Evergreen Terrace".to_string())
        );
    }

    #[test]
    fn value_may_contain_equals_or_be_empty() {
        assert_eq!(
            parse_assignment("city=a=b").unwrap(),
            (Field::City, "a=b".to_string())
        );
        assert_eq!(parse_assignment("zip=").unwrap(), (Field::Zip, String::new()));
    }

    #[test]
    fn rejects_malformed_and_unknown() {
        assert!(parse_assignment("city").is_err());
        assert!(parse_assignment("=Springfield").is_err());
        let err = parse_assignment("country=US").unwrap_err();
        assert_eq!(err.to_string(), r#"bad assignment "country=US""#);
    }

    #[test]
    fn later_assignment_wins() {
        let mut rec = AddressRecord::new().with_street("1 Main St");
        apply_assignments(
            &mut rec,
            &["city=Springfield".to_string(), "city=Shelbyville".to_string()],
        )
        .unwrap();
        assert_eq!(rec.city(), Some("Shelbyville"));
        assert_eq!(rec.street(), Some("1 Main St"));
        assert_eq!(rec.zip(), None);
    }

    #[test]
    fn failed_assignment_keeps_earlier_edits() {
        let mut rec = AddressRecord::new();
        let res = apply_assignments(&mut rec, &["zip=49007".to_string(), "bogus".to_string()]);
        assert!(res.is_err());
        assert_eq!(rec.zip(), Some("49007"));
    }

    #[test]
    fn edit_unsets_before_assigning() {
        let mut rec = AddressRecord::new()
            .with_city("Springfield")
            .with_street("742 Evergreen Terrace")
            .with_zip("49007");
        edit(
            &mut rec,
            &[Field::City, Field::Street],
            &["city=X".to_string(), "street=".to_string()],
        )
        .unwrap();
        assert_eq!(rec.city(), Some("X"));
        assert_eq!(rec.street(), Some(""));
        assert_eq!(rec.zip(), Some("49007"));
    }

    #[test]
    fn edit_unset_of_unset_field_is_harmless() {
        let mut rec = AddressRecord::new().with_zip("49007");
        edit(&mut rec, &[Field::City, Field::City], &[]).unwrap();
        assert_eq!(rec, AddressRecord::new().with_zip("49007"));

        edit(&mut rec, &[Field::Zip], &[]).unwrap();
        assert!(rec.is_empty());
    }
}
