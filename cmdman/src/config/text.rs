//! Lenient decoding of free-text settings.
//!
//! Environment variables and TOML scalars such as `8` or `true` arrive as
//! numbers or booleans; text settings take their textual form instead of
//! rejecting them.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => text,
            Scalar::Unsigned(number) => number.to_string(),
            Scalar::Signed(number) => number.to_string(),
            Scalar::Float(number) => number.to_string(),
            Scalar::Bool(flag) => flag.to_string(),
        }
    }
}

/// Decodes an optional text setting from any scalar.
pub(super) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "optional_text")]
        value: Option<String>,
    }

    #[rstest]
    #[case("value = \"eight\"", Some("eight"))]
    #[case("value = 8", Some("8"))]
    #[case("value = -3", Some("-3"))]
    #[case("value = true", Some("true"))]
    #[case("", None)]
    fn scalars_become_text(#[case] input: &str, #[case] expected: Option<&str>) {
        let holder: Holder = toml::from_str(input).expect("valid toml");
        assert_eq!(holder.value.as_deref(), expected);
    }

    #[rstest]
    fn tables_are_rejected() {
        let result: Result<Holder, _> = toml::from_str("[value]\nnested = 1\n");
        assert!(result.is_err());
    }
}
