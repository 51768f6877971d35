//! Canonical text serializer
//!
//! Renders any `Serialize` graph to the canonical JSON form:
//!
//! - keys rewritten by the configured [`NamingStrategy`] (map keys included),
//! - map entries whose value is null left out entirely,
//! - value enums written as their wire scalar (their own `Serialize` impl),
//! - non-finite floats rejected instead of silently becoming null.
//!
//! The graph is first rendered through serde's generic structure, so types
//! with a lossy `Serialize` (such as [`HostRef`](crate::HostRef)) lose
//! whatever that structure cannot hold. The reinjector restores those.

use crate::error::{PipelineError, Result};
use crate::finite::check_finite;
use crate::naming::NamingStrategy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

/// What to do with map entries whose value is null
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullHandling {
    /// Leave the key out
    #[default]
    Ignore,
    /// Keep the key with a `null` value
    Include,
}

/// Immutable settings for one serializer call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    pub naming: NamingStrategy,
    pub nulls: NullHandling,
    /// Limit on nested maps and lists; deeper graphs are rejected. Values
    /// above [`MAX_PARSEABLE_DEPTH`] are capped to it.
    pub max_depth: usize,
    /// Indented output (diagnostics only)
    pub pretty: bool,
}

/// Deepest container nesting the normalizer's JSON parser accepts
pub const MAX_PARSEABLE_DEPTH: usize = 127;

pub const DEFAULT_MAX_DEPTH: usize = MAX_PARSEABLE_DEPTH;

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            naming: NamingStrategy::LowerCamel,
            nulls: NullHandling::Ignore,
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: false,
        }
    }
}

impl SerializerConfig {
    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_nulls(mut self, nulls: NullHandling) -> Self {
        self.nulls = nulls;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Render `graph` to canonical JSON text
pub fn serialize<T>(graph: &T, config: &SerializerConfig) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let value = to_canonical_value(graph, config)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(|e| PipelineError::serialization(e.to_string()))?;

    trace!("canonical text: {}", text);
    Ok(text)
}

/// Render `graph` to the canonical JSON value, without the text step
pub fn to_canonical_value<T>(graph: &T, config: &SerializerConfig) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    check_finite(graph)?;
    let raw = serde_json::to_value(graph).map_err(|e| PipelineError::serialization(e.to_string()))?;
    render(raw, config, 0)
}

/// `depth` counts the maps and lists enclosing `value`
fn render(value: Value, config: &SerializerConfig, depth: usize) -> Result<Value> {
    match value {
        Value::Object(fields) => {
            let depth = enter_container(config, depth)?;
            let mut out = Map::with_capacity(fields.len());
            for (name, field) in fields {
                if field.is_null() && config.nulls == NullHandling::Ignore {
                    continue;
                }
                let key = config.naming.apply(&name).into_owned();
                if out.contains_key(&key) {
                    return Err(PipelineError::serialization(format!(
                        "field '{}' maps to key '{}' which is already present",
                        name, key
                    )));
                }
                let rendered = render(field, config, depth)?;
                out.insert(key, rendered);
            }
            Ok(Value::Object(out))
        }
        Value::Array(items) => {
            let depth = enter_container(config, depth)?;
            items
                .into_iter()
                .map(|item| render(item, config, depth))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        scalar => Ok(scalar),
    }
}

fn enter_container(config: &SerializerConfig, depth: usize) -> Result<usize> {
    let limit = config.max_depth.min(MAX_PARSEABLE_DEPTH);
    let depth = depth + 1;
    if depth > limit {
        return Err(PipelineError::serialization(format!(
            "graph is nested deeper than {} levels",
            limit
        )));
    }
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Legend {
        display: Option<bool>,
        full_width: Option<bool>,
        label_filter: Option<String>,
    }

    #[derive(Serialize)]
    struct Options {
        responsive: bool,
        legend: Option<Legend>,
        padding: Vec<Option<u32>>,
    }

    #[test]
    fn test_elides_null_fields_and_cases_names() {
        let options = Options {
            responsive: true,
            legend: Some(Legend {
                display: Some(false),
                full_width: None,
                label_filter: None,
            }),
            padding: vec![],
        };

        let value = to_canonical_value(&options, &SerializerConfig::default()).unwrap();
        assert_eq!(
            value,
            json!({ "responsive": true, "legend": { "display": false }, "padding": [] })
        );
    }

    #[test]
    fn test_absent_record_is_elided() {
        let options = Options {
            responsive: false,
            legend: None,
            padding: vec![],
        };
        let text = serialize(&options, &SerializerConfig::default()).unwrap();
        assert_eq!(text, r#"{"responsive":false,"padding":[]}"#);
    }

    #[test]
    fn test_list_nulls_keep_their_position() {
        let options = Options {
            responsive: true,
            legend: None,
            padding: vec![Some(1), None, Some(3)],
        };
        let value = to_canonical_value(&options, &SerializerConfig::default()).unwrap();
        assert_eq!(value["padding"], json!([1, null, 3]));
    }

    #[test]
    fn test_include_nulls() {
        let legend = Legend {
            display: None,
            full_width: Some(true),
            label_filter: None,
        };
        let config = SerializerConfig::default().with_nulls(NullHandling::Include);
        let value = to_canonical_value(&legend, &config).unwrap();
        assert_eq!(
            value,
            json!({ "display": null, "fullWidth": true, "labelFilter": null })
        );
    }

    #[test]
    fn test_preserve_naming() {
        let legend = Legend {
            display: None,
            full_width: Some(true),
            label_filter: None,
        };
        let config = SerializerConfig::default().with_naming(NamingStrategy::Preserve);
        let value = to_canonical_value(&legend, &config).unwrap();
        assert_eq!(value, json!({ "full_width": true }));
    }

    #[test]
    fn test_map_keys_are_cased_and_null_values_dropped() {
        let mut colors: BTreeMap<&str, Option<&str>> = BTreeMap::new();
        colors.insert("border_color", Some("red"));
        colors.insert("fill_color", None);
        let value = to_canonical_value(&colors, &SerializerConfig::default()).unwrap();
        assert_eq!(value, json!({ "borderColor": "red" }));
    }

    #[test]
    fn test_canonical_input_is_unchanged() {
        let canonical = json!({ "someInt": 2, "axes": [{}, { "someString": "axisString" }] });
        let again = to_canonical_value(&canonical, &SerializerConfig::default()).unwrap();
        assert_eq!(again, canonical);
    }

    #[test]
    fn test_depth_limit() {
        let mut nested = json!(1);
        for _ in 0..10 {
            nested = json!({ "inner": nested });
        }
        let config = SerializerConfig::default().with_max_depth(5);
        let err = to_canonical_value(&nested, &config).unwrap_err();
        assert!(matches!(err, PipelineError::Serialization(_)));
    }

    #[test]
    fn test_colliding_keys_are_rejected() {
        let value = json!({ "on_click": 1, "onClick": 2 });
        let err = to_canonical_value(&value, &SerializerConfig::default()).unwrap_err();
        assert!(err.to_string().contains("onClick"));
    }

    #[test]
    fn test_non_string_map_keys_fail() {
        let mut by_pair: BTreeMap<(u8, u8), u8> = BTreeMap::new();
        by_pair.insert((1, 2), 3);
        let err = serialize(&by_pair, &SerializerConfig::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Serialization(_)));
    }

    fn nested_lists(levels: usize) -> Value {
        (0..levels).fold(json!(1), |inner, _| json!([inner]))
    }

    #[test]
    fn test_deepest_parseable_graph_round_trips() {
        let text = serialize(&nested_lists(MAX_PARSEABLE_DEPTH), &SerializerConfig::default()).unwrap();
        assert!(crate::normalize(&text).is_ok());
    }

    #[test]
    fn test_one_level_past_parser_limit_fails_early() {
        let config = SerializerConfig::default().with_max_depth(1000);
        let err = serialize(&nested_lists(MAX_PARSEABLE_DEPTH + 1), &config).unwrap_err();
        assert!(matches!(err, PipelineError::Serialization(_)));
    }

    #[test]
    fn test_scalars_do_not_count_as_levels() {
        let config = SerializerConfig::default().with_max_depth(2);
        assert!(to_canonical_value(&json!({ "a": { "b": 1 } }), &config).is_ok());
        assert!(to_canonical_value(&json!({ "a": { "b": [1] } }), &config).is_err());
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        #[derive(Serialize)]
        struct Ticks {
            min: Option<f64>,
        }

        let err = to_canonical_value(&Ticks { min: Some(f64::NAN) }, &SerializerConfig::default()).unwrap_err();
        assert!(err.to_string().contains("min"));
        assert!(to_canonical_value(&Ticks { min: Some(-1.5) }, &SerializerConfig::default()).is_ok());
    }
}
