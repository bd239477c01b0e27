//! Named configuration values handed through to concrete algorithms.
//!
//! The core never interprets these; each algorithm reads the keys it knows
//! with a caller-supplied fallback. Deserializes from plain JSON objects so
//! tool configs can embed them directly.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single parameter value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// String-keyed parameter bag passed verbatim to algorithms.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Parameters(HashMap<String, ParamValue>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion for call sites.
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    /// Integer parameter, or `default` when absent. A float value stored
    /// under the name is truncated.
    pub fn int(&self, name: &str, default: i64) -> i64 {
        match self.0.get(name) {
            Some(ParamValue::Int(v)) => *v,
            Some(ParamValue::Float(v)) => *v as i64,
            None => default,
        }
    }

    /// Float parameter, or `default` when absent.
    pub fn float(&self, name: &str, default: f64) -> f64 {
        match self.0.get(name) {
            Some(ParamValue::Float(v)) => *v,
            Some(ParamValue::Int(v)) => *v as f64,
            None => default,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_default() {
        let params = Parameters::new().with("window", 31).with("k", 0.2);
        assert_eq!(params.int("window", 75), 31);
        assert_eq!(params.int("missing", 75), 75);
        assert!((params.float("k", 0.5) - 0.2).abs() < 1e-12);
        assert!((params.float("missing", 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn numeric_kinds_coerce() {
        let params = Parameters::new().with("threshold", 100).with("scale", 2.9);
        assert!((params.float("threshold", 0.0) - 100.0).abs() < 1e-12);
        assert_eq!(params.int("scale", 0), 2);
    }

    #[test]
    fn deserializes_from_json_object() {
        let params: Parameters =
            serde_json::from_str(r#"{ "threshold": 100, "k": 0.34 }"#).expect("valid parameters");
        assert_eq!(params.int("threshold", 0), 100);
        assert!((params.float("k", 0.0) - 0.34).abs() < 1e-12);
    }
}
