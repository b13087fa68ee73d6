//! Field names of an address record and their external keys.

use anyhow::bail;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    City,
    Street,
    Zip,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::City, Field::Street, Field::Zip];

    /// Key used in the JSON representation and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Field::City => "city",
            Field::Street => "street",
            Field::Zip => "zip",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match Field::ALL.into_iter().find(|f| f.key() == s) {
            Some(f) => Ok(f),
            None => {
                let known: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
                bail!("unknown field {:?} (expected one of: {})", s, known.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keys_parse_back() {
        for f in Field::ALL {
            assert_eq!(f.key().parse::<Field>().unwrap(), f);
            assert_eq!(f.to_string(), f.key());
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        let err = "City".parse::<Field>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"unknown field "City" (expected one of: city, street, zip)"#
        );
        assert!("".parse::<Field>().is_err());
    }
}
