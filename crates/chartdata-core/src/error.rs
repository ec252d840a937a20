pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported chart type: {chart_type}")]
    UnsupportedChartType { chart_type: String },

    #[error("Unsupported bar type: {bar_type} (expected `stacked` or `grouped`)")]
    UnsupportedBarType { bar_type: String },

    #[error("Invalid transform config: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid chart input JSON: {0}")]
    Json(#[from] serde_json::Error),
}
