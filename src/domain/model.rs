use serde::{Deserialize, Serialize};

/// NFe document category, encoded on the wire by the `tipo` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceCategory {
    /// Goods received (`tipo=0`).
    Inbound,
    /// Goods shipped (`tipo=1`).
    Outbound,
}

impl InvoiceCategory {
    pub const ALL: [InvoiceCategory; 2] = [InvoiceCategory::Inbound, InvoiceCategory::Outbound];

    pub fn wire_code(self) -> u8 {
        match self {
            InvoiceCategory::Inbound => 0,
            InvoiceCategory::Outbound => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvoiceCategory::Inbound => "inbound",
            InvoiceCategory::Outbound => "outbound",
        }
    }
}

impl std::fmt::Display for InvoiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Single invoice record inside the response envelope. Only the document
/// number matters; the service returns it string-encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct NfeRecord {
    pub numero: String,
}

/// Envelope returned by `GET /nfe`. A missing `data` field decodes as an
/// empty list, which downstream treats the same as "no record".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NfeEnvelope {
    #[serde(default)]
    pub data: Vec<NfeRecord>,
}

/// OAuth token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_match_api_discriminators() {
        assert_eq!(InvoiceCategory::Inbound.wire_code(), 0);
        assert_eq!(InvoiceCategory::Outbound.wire_code(), 1);
    }

    #[test]
    fn envelope_without_data_field_decodes_as_empty() {
        let envelope: NfeEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn envelope_with_records_keeps_order() {
        let envelope: NfeEnvelope =
            serde_json::from_str(r#"{"data":[{"numero":"123"},{"numero":"122"}]}"#).unwrap();
        assert_eq!(envelope.data[0].numero, "123");
        assert_eq!(envelope.data.len(), 2);
    }

    #[test]
    fn token_response_without_token_decodes() {
        let token: TokenResponse = serde_json::from_str(r#"{"error":"invalid_grant"}"#).unwrap();
        assert!(token.access_token.is_none());
    }
}
