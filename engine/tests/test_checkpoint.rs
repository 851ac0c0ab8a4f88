//! Checkpoint Tests - Save/Restore Generator State
//!
//! Critical invariants tested:
//! - Determinism: a restored generator continues the original sequence
//! - Round-trip: re-marshaling without draws gives identical bytes
//! - Rejection: malformed snapshots fail cleanly and mutate nothing

use sfc_rand::{CheckpointError, Generator, StateSnapshot, SNAPSHOT_LEN, SNAPSHOT_VERSION};

// ============================================================================
// Test Helpers
// ============================================================================

/// Generator with both sub-word buffers partly consumed
fn generator_mid_stream(seed: u64) -> Generator {
    let mut rng = Generator::new(seed);
    for _ in 0..17 {
        rng.uint64();
    }
    rng.uint32();
    let mut buf = [0u8; 11];
    rng.read(&mut buf);
    rng
}

/// Mixed draws touching every buffer
fn draw_sequence(rng: &mut Generator) -> Vec<u64> {
    let mut out = Vec::new();
    for _ in 0..20 {
        out.push(rng.uint32() as u64);
        out.push(rng.uint64n(1 << 40).unwrap());
        out.push(rng.norm_float64().to_bits());
        let mut buf = [0u8; 3];
        rng.read(&mut buf);
        out.extend(buf.iter().map(|&b| b as u64));
        out.push(rng.float32().to_bits() as u64);
    }
    out
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_restored_generator_continues_sequence() {
    let mut original = generator_mid_stream(42);
    let saved = original.marshal_binary();

    let mut restored = Generator::unmarshal_binary(&saved).unwrap();
    assert_eq!(draw_sequence(&mut original), draw_sequence(&mut restored));
}

#[test]
fn test_pending_half_word_survives_snapshot() {
    let mut original = Generator::new(7);
    original.uint32();
    let saved = original.marshal_binary();

    let mut restored = Generator::unmarshal_binary(&saved).unwrap();
    assert_eq!(original.uint32(), restored.uint32());
    assert_eq!(original.uint32(), restored.uint32());
}

#[test]
fn test_stream_leftover_survives_snapshot() {
    let mut original = Generator::new(7);
    let mut head = [0u8; 5];
    original.read(&mut head);
    let saved = original.marshal_binary();

    let mut restored = Generator::unmarshal_binary(&saved).unwrap();
    let mut a = [0u8; 12];
    let mut b = [0u8; 12];
    original.read(&mut a);
    restored.read(&mut b);
    assert_eq!(a, b);
}

#[test]
fn test_restore_in_place() {
    let source = generator_mid_stream(1);
    let mut target = Generator::new(999);

    target.restore(&source.marshal_binary()).unwrap();
    assert_eq!(target, source);
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_marshal_twice_identical() {
    let rng = generator_mid_stream(5);
    assert_eq!(rng.marshal_binary(), rng.marshal_binary());
}

#[test]
fn test_fresh_generator_layout() {
    let bytes = Generator::new(0).marshal_binary();
    assert_eq!(bytes.len(), SNAPSHOT_LEN);
    assert_eq!(bytes[0], SNAPSHOT_VERSION);
    // Counter word after seeding is 13
    assert_eq!(&bytes[25..33], &13u64.to_le_bytes());
    // No buffered half-word, no buffered stream bytes
    assert!(bytes[33..].iter().all(|&b| b == 0));
}

#[test]
fn test_json_snapshot_round_trip() {
    let mut rng = generator_mid_stream(77);
    let json = serde_json::to_string(&rng).unwrap();

    let mut back: Generator = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rng);
    assert_eq!(back.uint64(), rng.uint64());
}

#[test]
fn test_json_and_binary_agree() {
    let rng = generator_mid_stream(3);
    let snapshot = StateSnapshot::from(&rng);
    assert_eq!(snapshot.to_bytes(), rng.marshal_binary());
    assert_eq!(StateSnapshot::from_bytes(&snapshot.to_bytes()), Ok(snapshot));
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_reject_wrong_length() {
    let bytes = generator_mid_stream(1).marshal_binary();

    let mut long = bytes.clone();
    long.push(0);
    assert_eq!(
        Generator::unmarshal_binary(&long),
        Err(CheckpointError::WrongLength {
            expected: SNAPSHOT_LEN,
            actual: SNAPSHOT_LEN + 1
        })
    );
    assert!(matches!(
        Generator::unmarshal_binary(&bytes[..50]),
        Err(CheckpointError::WrongLength { actual: 50, .. })
    ));
}

#[test]
fn test_reject_version_zero() {
    let mut bytes = generator_mid_stream(1).marshal_binary();
    bytes[0] = 0;
    assert_eq!(
        Generator::unmarshal_binary(&bytes),
        Err(CheckpointError::UnknownVersion(0))
    );
}

#[test]
fn test_rejected_restore_mutates_nothing() {
    let mut rng = generator_mid_stream(8);
    let before = rng.clone();

    let mut bad = rng.marshal_binary();
    bad[50] = 200;
    assert!(rng.restore(&bad).is_err());
    assert_eq!(rng, before);
}

#[test]
fn test_reject_bad_json_snapshot() {
    let rng = generator_mid_stream(8);
    let mut value = serde_json::to_value(&rng).unwrap();
    value["stream_unread"] = serde_json::json!(12);

    let result: Result<Generator, _> = serde_json::from_value(value);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("stream_unread"), "unexpected error: {}", err);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CheckpointError::UnknownVersion(9).to_string(),
        "Unknown snapshot version 9"
    );
    assert_eq!(
        CheckpointError::WrongLength {
            expected: 51,
            actual: 3
        }
        .to_string(),
        "Snapshot must be 51 bytes, got 3"
    );
}
