//! Checkpoint - Save/Restore Generator State
//!
//! A snapshot captures everything that determines future output: the four
//! engine words, the `uint32` half-word buffer and the byte-stream buffer.
//! Restoring a snapshot and continuing produces exactly the output the
//! original generator would have produced.
//!
//! # Binary layout (version 1, 51 bytes, little-endian)
//!
//! | offset | size | field                          |
//! |-------:|-----:|--------------------------------|
//! | 0      | 1    | version tag (`1`)              |
//! | 1      | 32   | engine words `a`, `b`, `c`, `w` |
//! | 33     | 8    | half-word buffer               |
//! | 41     | 1    | half-word pending flag (0/1)   |
//! | 42     | 8    | byte-stream buffer             |
//! | 50     | 1    | unread stream bytes (0..=7)    |
//!
//! # Critical Invariants
//!
//! - **Round-trip**: re-marshaling a freshly restored generator yields the
//!   same bytes
//! - **No partial restores**: a rejected snapshot leaves the target untouched

use crate::rng::{Generator, Sfc64};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u8 = 1;

/// Encoded size of a version 1 snapshot
pub const SNAPSHOT_LEN: usize = 51;

const ENGINE_OFFSET: usize = 1;
const HALF_WORD_OFFSET: usize = 33;
const HALF_PENDING_OFFSET: usize = 41;
const STREAM_WORD_OFFSET: usize = 42;
const STREAM_UNREAD_OFFSET: usize = 50;

/// Largest valid count of buffered stream bytes
const MAX_STREAM_UNREAD: u8 = 7;

/// Malformed snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error("Snapshot must be {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Unknown snapshot version {0}")]
    UnknownVersion(u8),

    #[error("Corrupt snapshot field {field}: {value}")]
    CorruptField { field: &'static str, value: u64 },
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete generator state, field for field with the binary layout
///
/// This is also the serde form of [`Generator`], so a generator embedded in
/// a JSON document is validated the same way as a binary snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub version: u8,

    /// Engine words `[a, b, c, w]`
    pub engine: [u64; 4],

    pub half_word: u64,
    pub half_pending: bool,

    pub stream_word: u64,
    pub stream_unread: u8,
}

impl StateSnapshot {
    /// Encode in the version 1 layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SNAPSHOT_LEN);
        out.push(self.version);
        for word in self.engine {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.extend_from_slice(&self.half_word.to_le_bytes());
        out.push(self.half_pending as u8);
        out.extend_from_slice(&self.stream_word.to_le_bytes());
        out.push(self.stream_unread);
        out
    }

    /// Decode and validate a version 1 snapshot
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        if bytes.len() != SNAPSHOT_LEN {
            return Err(CheckpointError::WrongLength {
                expected: SNAPSHOT_LEN,
                actual: bytes.len(),
            });
        }
        if bytes[0] != SNAPSHOT_VERSION {
            return Err(CheckpointError::UnknownVersion(bytes[0]));
        }

        let half_pending = match bytes[HALF_PENDING_OFFSET] {
            0 => false,
            1 => true,
            other => {
                return Err(CheckpointError::CorruptField {
                    field: "half_pending",
                    value: other as u64,
                })
            }
        };

        let mut engine = [0u64; 4];
        for (i, word) in engine.iter_mut().enumerate() {
            *word = read_u64(bytes, ENGINE_OFFSET + 8 * i);
        }

        let snapshot = StateSnapshot {
            version: SNAPSHOT_VERSION,
            engine,
            half_word: read_u64(bytes, HALF_WORD_OFFSET),
            half_pending,
            stream_word: read_u64(bytes, STREAM_WORD_OFFSET),
            stream_unread: bytes[STREAM_UNREAD_OFFSET],
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the fields that the binary layout cannot constrain by type
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(CheckpointError::UnknownVersion(self.version));
        }
        if self.stream_unread > MAX_STREAM_UNREAD {
            return Err(CheckpointError::CorruptField {
                field: "stream_unread",
                value: self.stream_unread as u64,
            });
        }
        Ok(())
    }
}

/// Little-endian word at `offset`; the caller has checked the length
fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(word)
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&Generator> for StateSnapshot {
    fn from(rng: &Generator) -> Self {
        StateSnapshot {
            version: SNAPSHOT_VERSION,
            engine: rng.engine.to_words(),
            half_word: rng.half_word,
            half_pending: rng.half_pending,
            stream_word: rng.stream_word,
            stream_unread: rng.stream_unread,
        }
    }
}

impl From<Generator> for StateSnapshot {
    fn from(rng: Generator) -> Self {
        StateSnapshot::from(&rng)
    }
}

impl TryFrom<StateSnapshot> for Generator {
    type Error = CheckpointError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        if let Err(e) = snapshot.validate() {
            log::warn!("rejected generator snapshot: {}", e);
            return Err(e);
        }
        Ok(Generator {
            engine: Sfc64::from_words(snapshot.engine),
            half_word: snapshot.half_word,
            half_pending: snapshot.half_pending,
            stream_word: snapshot.stream_word,
            stream_unread: snapshot.stream_unread,
        })
    }
}

// ============================================================================
// Generator API
// ============================================================================

impl Generator {
    /// Encode the full state in the version 1 binary layout
    ///
    /// # Example
    /// ```
    /// use sfc_rand::Generator;
    ///
    /// let mut rng = Generator::new(12345);
    /// rng.uint32();
    /// let saved = rng.marshal_binary();
    ///
    /// let mut resumed = Generator::unmarshal_binary(&saved).unwrap();
    /// assert_eq!(rng.uint64(), resumed.uint64());
    /// ```
    pub fn marshal_binary(&self) -> Vec<u8> {
        StateSnapshot::from(self).to_bytes()
    }

    /// Build a generator from bytes produced by [`Generator::marshal_binary`]
    ///
    /// # Errors
    /// [`CheckpointError`] on wrong length, unknown version or an out of
    /// range buffer field.
    pub fn unmarshal_binary(bytes: &[u8]) -> Result<Generator, CheckpointError> {
        let snapshot = StateSnapshot::from_bytes(bytes).map_err(|e| {
            log::warn!("rejected generator snapshot: {}", e);
            e
        })?;
        Generator::try_from(snapshot)
    }

    /// Replace this generator's state with a decoded snapshot
    ///
    /// On error the generator is left exactly as it was.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), CheckpointError> {
        *self = Self::unmarshal_binary(bytes)?;
        log::debug!("restored generator state from {} byte snapshot", bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy_generator() -> Generator {
        let mut rng = Generator::new(2718);
        rng.uint64();
        rng.uint32();
        let mut buf = [0u8; 3];
        rng.read(&mut buf);
        rng
    }

    #[test]
    fn test_layout_offsets() {
        let rng = busy_generator();
        let bytes = rng.marshal_binary();
        let words = rng.engine.to_words();

        assert_eq!(bytes.len(), SNAPSHOT_LEN);
        assert_eq!(bytes[0], 1);
        assert_eq!(read_u64(&bytes, 1), words[0]);
        assert_eq!(read_u64(&bytes, 25), words[3]);
        assert_eq!(read_u64(&bytes, HALF_WORD_OFFSET), rng.half_word);
        assert_eq!(bytes[HALF_PENDING_OFFSET], 1);
        assert_eq!(read_u64(&bytes, STREAM_WORD_OFFSET), rng.stream_word);
        assert_eq!(bytes[STREAM_UNREAD_OFFSET], 5);
    }

    #[test]
    fn test_round_trip_bytes() {
        let bytes = busy_generator().marshal_binary();
        let restored = Generator::unmarshal_binary(&bytes).unwrap();
        assert_eq!(restored.marshal_binary(), bytes);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let bytes = busy_generator().marshal_binary();
        assert_eq!(
            Generator::unmarshal_binary(&bytes[1..42]),
            Err(CheckpointError::WrongLength {
                expected: 51,
                actual: 41
            })
        );
        assert!(Generator::unmarshal_binary(&[]).is_err());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut bytes = busy_generator().marshal_binary();
        bytes[0] = 2;
        assert_eq!(
            Generator::unmarshal_binary(&bytes),
            Err(CheckpointError::UnknownVersion(2))
        );
    }

    #[test]
    fn test_rejects_corrupt_buffers() {
        let mut bytes = busy_generator().marshal_binary();
        bytes[HALF_PENDING_OFFSET] = 2;
        assert!(matches!(
            Generator::unmarshal_binary(&bytes),
            Err(CheckpointError::CorruptField { field: "half_pending", value: 2 })
        ));

        let mut bytes = busy_generator().marshal_binary();
        bytes[STREAM_UNREAD_OFFSET] = 8;
        assert!(matches!(
            Generator::unmarshal_binary(&bytes),
            Err(CheckpointError::CorruptField { field: "stream_unread", value: 8 })
        ));
    }

    #[test]
    fn test_failed_restore_leaves_state() {
        let mut rng = busy_generator();
        let before = rng.clone();
        assert!(rng.restore(&[1, 2, 3]).is_err());
        assert_eq!(rng, before);
    }

    #[test]
    fn test_serde_goes_through_snapshot() {
        let rng = busy_generator();
        let snapshot = StateSnapshot::from(&rng);
        let back = Generator::try_from(snapshot).unwrap();
        assert_eq!(back, rng);

        let bad = StateSnapshot {
            stream_unread: 9,
            ..StateSnapshot::from(&rng)
        };
        assert!(Generator::try_from(bad).is_err());
    }
}
