//! Access to the two record attributes placement cares about

use serde_json::Value;

use crate::config::PlacementConfig;
use crate::placement::specifier::integral;
use crate::placement::OrderSpec;

/// A record that can be rearranged.
///
/// Implementations locate the identifier and order specifier through the
/// attribute names in [`PlacementConfig`]. Typed records are free to ignore
/// the config and read their own fields.
pub trait Record {
    /// The unique identifier, or `None` if the record has no usable one
    fn identifier(&self, config: &PlacementConfig) -> Option<String>;

    /// The declared placement specifiers
    fn order_spec(&self, config: &PlacementConfig) -> OrderSpec;
}

impl Record for Value {
    fn identifier(&self, config: &PlacementConfig) -> Option<String> {
        self.get(&config.id_key).and_then(identifier_text)
    }

    fn order_spec(&self, config: &PlacementConfig) -> OrderSpec {
        OrderSpec::from_value(self.get(&config.order_key))
    }
}

/// Text form of an identifier value: strings as-is, numbers in decimal.
///
/// Whole numbers are written without a fraction, so `1` and `1.0` name the
/// same record.
pub fn identifier_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match integral(n) {
            Some(whole) => whole.to_string(),
            None => n.to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Specifier;
    use serde_json::json;

    #[test]
    fn test_json_record_identifier() {
        let config = PlacementConfig::default();
        assert_eq!(json!({ "id": "a" }).identifier(&config), Some("a".to_string()));
        assert_eq!(json!({ "id": 12 }).identifier(&config), Some("12".to_string()));
        assert_eq!(json!({ "id": null }).identifier(&config), None);
        assert_eq!(json!({ "name": "a" }).identifier(&config), None);
        assert_eq!(json!("a").identifier(&config), None);
    }

    #[test]
    fn test_whole_float_identifier_matches_integer() {
        assert_eq!(identifier_text(&json!(1.0)), Some("1".to_string()));
        assert_eq!(identifier_text(&json!(-4.0)), Some("-4".to_string()));
        assert_eq!(identifier_text(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(
            identifier_text(&json!(u64::MAX)),
            Some(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_json_record_custom_keys() {
        let config = PlacementConfig::new().with_id_key("name").with_order_key("slot");
        let record = json!({ "name": "a", "slot": { "at": 4 }, "position": { "at": 1 } });
        assert_eq!(record.identifier(&config), Some("a".to_string()));
        assert_eq!(record.order_spec(&config), OrderSpec::from(Specifier::at(4)));
    }

    #[test]
    fn test_json_record_without_order() {
        let config = PlacementConfig::default();
        assert!(json!({ "id": "a" }).order_spec(&config).is_empty());
    }
}
