use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display};

/// External naming space for network participants: a fixed-width,
/// public-key-shaped identifier. Equality and hashing are bytewise.
///
/// Serializes as a 64-character lowercase hex string rather than a raw byte
/// array, so that graph snapshots and API payloads stay human-inspectable.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PeerId(pub [u8; 32]);

/// Returned by [`PeerId::from_hex`] when a string is not a valid 64-character
/// hex-encoded peer id.
#[derive(thiserror::Error, Debug)]
#[error("invalid peer id {0:?}: expected 64 hex characters")]
pub struct InvalidPeerId(String);

impl PeerId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_hex(s: &str) -> Result<Self, InvalidPeerId> {
        if s.len() != 64 {
            return Err(InvalidPeerId(s.to_string()));
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| InvalidPeerId(s.to_string()))?;
        }
        Ok(Self(bytes))
    }

    pub fn to_hex(self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::str::FromStr for PeerId {
    type Err = InvalidPeerId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "…")
    }
}

impl Debug for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PeerId({self})")
    }
}

impl Serialize for PeerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PeerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PeerId::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_and_hash_are_bytewise() {
        let a = PeerId::from_bytes([1u8; 32]);
        let b = PeerId::from_bytes([1u8; 32]);
        let c = PeerId::from_bytes([2u8; 32]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_is_truncated_hex() {
        let id = PeerId::from_bytes([0xab; 32]);
        assert_eq!(format!("{id}"), "abababab…");
    }

    #[test]
    fn hex_round_trips() {
        let id = PeerId::from_bytes([0x01; 32]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(PeerId::from_hex(&hex).unwrap(), id);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(PeerId::from_hex("abcd").is_err());
    }

    #[test]
    fn serde_round_trips_through_hex_json() {
        let id = PeerId::from_bytes([0x42; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_hex()));
        let back: PeerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
