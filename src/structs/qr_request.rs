use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::data_type::DataType;
use crate::models::qr_options::QrOptions;
use crate::utils::format::format_qr_data;
use crate::utils::validate::validate_qr_data;

pub const INVALID_DATA_MESSAGE: &str = "Please enter valid data for the selected type";

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_payload", skip_on_field_errors = false))]
pub struct QrRequest {
    pub data: String,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    #[validate(nested)]
    pub options: QrOptions,
}

impl QrRequest {
    pub fn new(data: impl Into<String>, data_type: DataType) -> Self {
        Self {
            data: data.into(),
            data_type,
            options: QrOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QrOptions) -> Self {
        self.options = options;
        self
    }

    /// The string handed to the QR encoder.
    pub fn payload(&self) -> String {
        format_qr_data(&self.data, self.data_type)
    }

    pub fn is_data_valid(&self) -> bool {
        validate_qr_data(&self.data, self.data_type)
    }
}

fn validate_payload(req: &QrRequest) -> Result<(), ValidationError> {
    if req.is_data_valid() {
        return Ok(());
    }
    let mut err = ValidationError::new("invalid_payload");
    err.message = Some(INVALID_DATA_MESSAGE.into());
    err.add_param("data_type".into(), &req.data_type.as_str());
    Err(err)
}
