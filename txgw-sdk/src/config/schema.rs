use serde::Serialize;

/// Value type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Text,
    Boolean,
}

/// One entry in the gateway's settings schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigField {
    pub name: &'static str,
    pub friendly_name: &'static str,
    #[serde(rename = "type")]
    pub kind: SettingKind,
    pub description: &'static str,
    pub required: bool,
}

pub const API_KEY: ConfigField = ConfigField {
    name: "tripletex_api_key",
    friendly_name: "Tripletex API Key",
    kind: SettingKind::Text,
    description: "The API key for accessing the Tripletex API.",
    required: true,
};

pub const WEBHOOK_SECRET: ConfigField = ConfigField {
    name: "tripletex_webhook_secret",
    friendly_name: "Tripletex Webhook Secret",
    kind: SettingKind::Text,
    description: "The secret used for verifying webhooks from Tripletex.",
    required: true,
};

pub const TEST_MODE: ConfigField = ConfigField {
    name: "tripletex_test_mode",
    friendly_name: "Tripletex Test Mode",
    kind: SettingKind::Boolean,
    description: "Enable test mode to simulate payments without processing real transactions.",
    required: false,
};

pub const ACCOUNT_ID: ConfigField = ConfigField {
    name: "tripletex_account_id",
    friendly_name: "Tripletex Account ID",
    kind: SettingKind::Text,
    description: "The Tripletex account ID associated with your invoices.",
    required: true,
};

/// Settings shared by the invoice and subscription gateways, in display order.
pub const GATEWAY_SETTINGS: [ConfigField; 4] = [API_KEY, WEBHOOK_SECRET, TEST_MODE, ACCOUNT_ID];

/// Names of required text settings whose value is missing or blank.
///
/// `lookup` returns the raw value of a setting by name. Boolean settings are
/// never reported; an absent boolean simply reads as `false`.
pub fn missing_required<'a>(
    lookup: impl Fn(&str) -> Option<&'a str>,
) -> Vec<&'static str> {
    GATEWAY_SETTINGS
        .iter()
        .filter(|field| field.required && field.kind == SettingKind::Text)
        .filter(|field| lookup(field.name).is_none_or(|v| v.trim().is_empty()))
        .map(|field| field.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_serializes_like_the_extension_settings_screen_expects() {
        let value = serde_json::to_value(TEST_MODE).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "tripletex_test_mode",
                "friendlyName": "Tripletex Test Mode",
                "type": "boolean",
                "description": "Enable test mode to simulate payments without processing real transactions.",
                "required": false,
            })
        );
    }

    #[test]
    fn blank_required_values_are_reported() {
        let missing = missing_required(|name| match name {
            "tripletex_api_key" => Some("key"),
            "tripletex_webhook_secret" => Some("   "),
            _ => None,
        });
        assert_eq!(missing, vec!["tripletex_webhook_secret", "tripletex_account_id"]);
    }
}
