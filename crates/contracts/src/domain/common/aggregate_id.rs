use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a domain record
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
