use crate::models::data_type::DataType;
use crate::models::qr_options::QrOptions;
use crate::structs::qr_request::{INVALID_DATA_MESSAGE, QrRequest};

/// Edits coming from whatever front end drives the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum QrEvent {
    /// Switching tabs discards whatever was typed for the previous type.
    DataTypeChanged(DataType),
    DataChanged(String),
    OptionsChanged(QrOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionUpdate {
    pub valid: bool,
    /// Set when there is data but it isn't valid for the selected type.
    pub warning: Option<&'static str>,
}

/// Current state of one generator form.
#[derive(Debug, Clone)]
pub struct QrSession {
    request: QrRequest,
    valid: bool,
}

impl Default for QrSession {
    fn default() -> Self {
        Self::new(QrRequest::new("", DataType::default()))
    }
}

impl QrSession {
    pub fn new(request: QrRequest) -> Self {
        let valid = request.is_data_valid();
        Self { request, valid }
    }

    pub fn apply(&mut self, event: QrEvent) -> SessionUpdate {
        log::debug!("session event: {:?}", event);
        match event {
            QrEvent::DataTypeChanged(data_type) => {
                self.request.data_type = data_type;
                self.request.data.clear();
            }
            QrEvent::DataChanged(data) => self.request.data = data,
            QrEvent::OptionsChanged(options) => self.request.options = options,
        }

        self.valid = self.request.is_data_valid();
        let warning = if !self.valid && !self.request.data.is_empty() {
            log::warn!("{} ({})", INVALID_DATA_MESSAGE, self.request.data_type);
            Some(INVALID_DATA_MESSAGE)
        } else {
            None
        };

        SessionUpdate {
            valid: self.valid,
            warning,
        }
    }

    pub fn request(&self) -> &QrRequest {
        &self.request
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Formatted payload; empty means there is nothing to render yet.
    pub fn payload(&self) -> String {
        self.request.payload()
    }
}
