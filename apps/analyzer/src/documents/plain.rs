use async_trait::async_trait;
use bytes::Bytes;

use crate::documents::{ExtractError, TextExtractor};

/// Plain text uploads. Invalid UTF-8 is replaced rather than rejected.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractError> {
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
