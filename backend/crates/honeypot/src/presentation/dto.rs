//! API DTOs (Data Transfer Objects)

use crate::application::honeypot::InputProps;
use serde::Serialize;

/// Response for GET /api/honeypot/props
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputPropsResponse {
    pub name_field_name: String,
    pub valid_from_field_name: Option<String>,
    pub encrypted_valid_from: Option<String>,
}

impl From<InputProps> for InputPropsResponse {
    fn from(props: InputProps) -> Self {
        Self {
            name_field_name: props.name_field_name,
            valid_from_field_name: props.valid_from_field_name,
            encrypted_valid_from: props.encrypted_valid_from,
        }
    }
}
