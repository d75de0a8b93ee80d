use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Control `{0}` has no aria-controls target")]
    MissingControls(String),

    #[error("Control `{control}` points at missing panel `{panel_id}`")]
    MissingPanel { control: String, panel_id: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
