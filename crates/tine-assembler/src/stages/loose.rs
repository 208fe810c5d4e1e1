use serde_json::{Value, json};
use tine_config::BabelOptions;

/// Options for the class-properties transform.
///
/// `loose` is always present as a boolean: `true` only when the options bag
/// sets it to `true`.
pub fn class_properties_options(options: &BabelOptions) -> Value {
    json!({ "loose": options.is_loose() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_is_explicit_false_by_default() {
        let value = class_properties_options(&BabelOptions::default());
        assert_eq!(value, json!({ "loose": false }));
    }

    #[test]
    fn loose_follows_options() {
        let on = BabelOptions {
            loose: Some(true),
            ..Default::default()
        };
        let off = BabelOptions {
            loose: Some(false),
            ..Default::default()
        };
        assert_eq!(class_properties_options(&on)["loose"], json!(true));
        assert_eq!(class_properties_options(&off)["loose"], json!(false));
    }
}
