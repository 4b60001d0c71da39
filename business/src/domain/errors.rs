/// Failures raised while populating the catalog from the remote API.
///
/// Transport and payload failures keep the underlying message so it can be
/// surfaced in the catalog state as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    Network(String),
    #[error("Request failed with status code {status}")]
    HttpStatus { status: u16 },
    #[error("{0}")]
    MalformedResponse(String),
    #[error("Invalid product ID")]
    InvalidProductId,
}

impl CatalogError {
    pub fn network(message: impl Into<String>) -> Self {
        CatalogError::Network(message.into())
    }
    pub fn http_status(status: u16) -> Self {
        CatalogError::HttpStatus { status }
    }
    pub fn malformed_response(message: impl Into<String>) -> Self {
        CatalogError::MalformedResponse(message.into())
    }

    /// Code-style identifier of the failure kind, used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Network(_) => "catalog.network_failure",
            CatalogError::HttpStatus { .. } => "catalog.http_status_failure",
            CatalogError::MalformedResponse(_) => "catalog.malformed_response",
            CatalogError::InvalidProductId => "catalog.invalid_product_id",
        }
    }
}
