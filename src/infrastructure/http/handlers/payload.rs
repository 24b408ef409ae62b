//! Fixed Payload Handlers - `POST /file`, `POST /html`, `POST /json`

use crate::domain::{Endpoint, Payload};
use crate::infrastructure::http::error::ApiError;

pub async fn binary_data() -> Result<Payload, ApiError> {
    Ok(Payload::for_endpoint(Endpoint::BinaryData)?)
}

pub async fn html_page() -> Result<Payload, ApiError> {
    Ok(Payload::for_endpoint(Endpoint::HtmlPage)?)
}

pub async fn contact_json() -> Result<Payload, ApiError> {
    Ok(Payload::for_endpoint(Endpoint::ContactJson)?)
}
