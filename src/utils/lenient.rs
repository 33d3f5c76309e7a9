//! Field deserializers that accept the loosely typed bodies browser forms send.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// A list field that also accepts a single string, as a one-element list.
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// An integer field that also accepts its decimal text. Blank text reads as 0.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => 0,
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => 0,
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected a whole number, got {text:?}")))?,
    };
    i32::try_from(value).map_err(|_| D::Error::custom(format!("{value} is out of range")))
}
