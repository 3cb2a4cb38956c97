//! Encoding for the query response channel.
//!
//! Responses carry opaque bytes; this module is the one place that decides
//! what those bytes are. JSON keeps payloads self-describing for clients
//! and round-trips every model type losslessly.

use serde::{Serialize, de::DeserializeOwned};

use crate::Result;

/// Encode a value for a response payload.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Decode a response payload.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, DeploymentId, LedgerError, Order, OrderState, Orders};

    #[test]
    fn collection_roundtrip() {
        let d = DeploymentId::new(Address::new(vec![7; 8]), 1);
        let coll = Orders {
            items: vec![
                Order::open(d.group(1).order(1), 10),
                Order::dummy(d.group(2).order(1), OrderState::Matched),
            ],
        };
        let bytes = encode(&coll).unwrap();
        let back: Orders = decode(&bytes).unwrap();
        assert_eq!(coll, back);
    }

    #[test]
    fn garbage_is_serialization_error() {
        let err = decode::<Orders>(b"not json").unwrap_err();
        assert!(matches!(err, LedgerError::Serialization(_)));
        assert!(!err.is_rejection());
    }
}
