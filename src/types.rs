//! Request and authorization record types

use crate::Result;
use serde::{Deserialize, Serialize};

/// Caller-supplied request for a mint authorization
///
/// Produced by an upstream API handler; this component does not persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRequest {
    /// Address that will submit the on-chain claim
    pub recipient: String,
    /// Metadata URI of the token to be minted
    pub token_uri: String,
}

impl AuthorizationRequest {
    /// Create a new authorization request
    pub fn new(recipient: impl Into<String>, token_uri: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            token_uri: token_uri.into(),
        }
    }
}

/// A single-use, replay-resistant mint authorization
///
/// `hash` is the 0x-prefixed packed Keccak-256 digest over
/// (recipient, uri, nonce, contract); `signature` is the 0x-prefixed 65-byte
/// recoverable signature over that digest. Immutable once produced; its only
/// valid consumer is the on-chain claim routine, which re-derives the hash and
/// recovers the authority address from the signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintAuthorization {
    pub uri: String,
    pub nonce: String,
    pub hash: String,
    pub signature: String,
}

impl MintAuthorization {
    /// Serialize to the JSON shape submitted with the on-chain claim
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an authorization from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_json_field_names() {
        // The JSON keys are part of the claim-submission contract
        let authorization = MintAuthorization {
            uri: "ipfs://abc".to_string(),
            nonce: "deadbeefdeadbeefdeadbeefdeadbeef".to_string(),
            hash: "0xc8a515cad59f0971a9609ab720b563f05156cead62b9344e0dc97c4a90589f89"
                .to_string(),
            signature: "0x00".to_string(),
        };

        let json: serde_json::Value =
            serde_json::from_str(&authorization.to_json().unwrap()).unwrap();
        assert_eq!(json["uri"], "ipfs://abc");
        assert_eq!(json["nonce"], "deadbeefdeadbeefdeadbeefdeadbeef");
        assert!(json["hash"].as_str().unwrap().starts_with("0x"));
        assert!(json.get("signature").is_some());
    }

    #[test]
    fn test_request_uses_camel_case() {
        let request: AuthorizationRequest = serde_json::from_str(
            r#"{"recipient":"0x1111111111111111111111111111111111111111","tokenUri":"ipfs://abc"}"#,
        )
        .unwrap();

        assert_eq!(request.token_uri, "ipfs://abc");
    }
}
