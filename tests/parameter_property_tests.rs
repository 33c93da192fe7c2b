// Property-based tests for parameter extraction and coercion

use custom_job::models::{InventoryParameters, JobConfiguration, SampleParameters};
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashMap;

fn config_with(properties: serde_json::Value) -> JobConfiguration {
    let map: HashMap<_, _> = properties
        .as_object()
        .expect("test properties must be an object")
        .clone()
        .into_iter()
        .collect();
    JobConfiguration::new(1, map)
}

proptest! {
    /// Any i64, delivered either as a JSON number or as its string form,
    /// extracts to the same value.
    #[test]
    fn property_integer_coercion_agrees(value in any::<i64>()) {
        let as_number = config_with(json!({"ParamInt": value}));
        let as_string = config_with(json!({"ParamInt": value.to_string()}));

        prop_assert_eq!(as_number.get_i64("ParamInt").unwrap(), value);
        prop_assert_eq!(as_string.get_i64("ParamInt").unwrap(), value);
    }

    /// Any valid parameter set extracts and produces a status line
    /// containing every parameter's string form.
    #[test]
    fn property_sample_status_line_contains_all_parameters(
        param_string in "[a-zA-Z0-9 ]{1,30}",
        param_int in any::<i64>(),
        param_bool in any::<bool>(),
    ) {
        let config = config_with(json!({
            "ParamString": param_string.clone(),
            "ParamInt": param_int,
            "ParamDate": "2024-06-15 08:00:00",
            "ParamBool": param_bool,
        }));

        let params = SampleParameters::from_config(&config).unwrap();
        let line = params.status_line();

        prop_assert!(line.contains(&param_string));
        prop_assert!(line.contains(&param_int.to_string()));
        prop_assert!(line.contains(&param_bool.to_string()));
        prop_assert!(line.contains("2024-06-15 08:00:00 UTC"));
    }

    /// Non-numeric strings never extract as integers, and the error names
    /// the offending field.
    #[test]
    fn property_garbage_integers_are_rejected(value in "[a-zA-Z]{1,10}") {
        let config = config_with(json!({"ParamInt": value}));
        let err = config.get_i64("ParamInt").unwrap_err();
        prop_assert!(err.to_string().contains("ParamInt"));
    }

    /// Dropping any one of the four inventory fields fails extraction with
    /// an error naming the dropped field.
    #[test]
    fn property_inventory_requires_every_field(index in 0usize..4) {
        let keys = ["CorrelationId", "Certificate", "Pin", "PrivateKey"];
        let mut properties = serde_json::Map::new();
        for (i, key) in keys.iter().enumerate() {
            if i != index {
                properties.insert(key.to_string(), json!("value"));
            }
        }

        let config = config_with(serde_json::Value::Object(properties));
        let err = InventoryParameters::from_config(&config).unwrap_err();
        prop_assert!(err.to_string().contains(keys[index]));
    }
}
