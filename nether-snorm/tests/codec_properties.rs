//! Exhaustive checks over every supported width, for both precisions.

use std::io;
use std::sync::{Arc, Mutex};

use nether_snorm::{
    BitWidth, SnormError, decode_with_zero, decode_without_zero, encode_with_zero,
    encode_without_zero,
};

fn widths() -> impl Iterator<Item = u32> {
    BitWidth::all().map(BitWidth::get)
}

/// Evenly spaced samples over [-1, 1], endpoints included
fn unit_sweep(count: u32) -> impl Iterator<Item = f64> {
    (0..=count).map(move |i| -1.0 + 2.0 * f64::from(i) / f64::from(count))
}

#[test]
fn test_without_zero_round_trips_extremes() {
    for bits in widths() {
        for value in [-1.0f64, 1.0] {
            let code = encode_without_zero(value, bits).unwrap();
            let decoded: f64 = decode_without_zero(code, bits).unwrap();
            assert!((decoded - value).abs() <= 1e-15, "f64, {bits} bits, {value}");
            assert_eq!(decoded, value, "f64, {bits} bits");

            let code = encode_without_zero(value as f32, bits).unwrap();
            let decoded: f32 = decode_without_zero(code, bits).unwrap();
            assert_eq!(decoded, value as f32, "f32, {bits} bits");
        }
    }
}

#[test]
fn test_without_zero_extremes_are_nonzero_and_symmetric() {
    for bits in widths() {
        let pos = encode_without_zero(1.0f64, bits).unwrap();
        let neg = encode_without_zero(-1.0f64, bits).unwrap();
        assert_ne!(pos, 0, "{bits} bits");
        assert_ne!(neg, 0, "{bits} bits");
        assert_eq!(neg, -pos, "{bits} bits");

        let pos = encode_without_zero(1.0f32, bits).unwrap();
        let neg = encode_without_zero(-1.0f32, bits).unwrap();
        assert_ne!(pos, 0, "{bits} bits");
        assert_eq!(neg, -pos, "{bits} bits");
    }
}

#[test]
fn test_with_zero_round_trips_extremes_and_zero() {
    for bits in widths() {
        for value in [-1.0f64, 0.0, 1.0] {
            let code = encode_with_zero(value, bits).unwrap();
            let decoded: f64 = decode_with_zero(code, bits).unwrap();
            assert_eq!(decoded, value, "f64, {bits} bits");

            let code = encode_with_zero(value as f32, bits).unwrap();
            let decoded: f32 = decode_with_zero(code, bits).unwrap();
            assert_eq!(decoded, value as f32, "f32, {bits} bits");
        }
        assert_eq!(encode_with_zero(0.0f64, bits), Ok(0));
        assert_eq!(decode_with_zero::<f64>(0, bits), Ok(0.0));
    }
}

#[test]
fn test_encode_is_monotonic() {
    for bits in widths() {
        let mut prev_f64 = i32::MIN;
        let mut prev_f32 = i32::MIN;
        for value in unit_sweep(4096) {
            let code = encode_with_zero(value, bits).unwrap();
            assert!(code >= prev_f64, "f64, {bits} bits, {value}");
            prev_f64 = code;

            let code = encode_without_zero(value as f32, bits).unwrap();
            assert!(code >= prev_f32, "f32, {bits} bits, {value}");
            prev_f32 = code;
        }
    }
}

#[test]
fn test_codes_stay_within_width() {
    for bits in widths() {
        let width = BitWidth::new(bits).unwrap();
        for value in unit_sweep(1000) {
            assert!(width.contains(encode_with_zero(value, bits).unwrap()));
            assert!(width.contains(encode_without_zero(value as f32, bits).unwrap()));
        }
    }
}

#[test]
fn test_two_bit_width() {
    assert_eq!(encode_without_zero(1.0f32, 2), Ok(1));
    assert_eq!(encode_without_zero(-1.0f32, 2), Ok(-1));
    assert_eq!(decode_without_zero::<f32>(1, 2), Ok(1.0));
    assert_eq!(decode_without_zero::<f32>(-1, 2), Ok(-1.0));
    assert_eq!(encode_with_zero(1.0f64, 2), Ok(1));
    assert_eq!(encode_with_zero(-1.0f64, 2), Ok(-1));
}

#[test]
fn test_full_width_uses_i32_range() {
    assert_eq!(encode_without_zero(1.0f64, 32), Ok(i32::MAX));
    assert_eq!(encode_without_zero(-1.0f64, 32), Ok(-i32::MAX));
    assert_eq!(encode_with_zero(1.0f32, 32), Ok(i32::MAX));
    assert_eq!(encode_with_zero(-1.0f32, 32), Ok(-i32::MAX));
    assert_eq!(decode_with_zero::<f64>(i32::MAX, 32), Ok(1.0));
}

#[test]
fn test_eight_bit_with_zero_never_produces_minus_128() {
    assert_eq!(encode_with_zero(0.0f32, 8), Ok(0));
    assert_eq!(encode_with_zero(1.0f32, 8), Ok(127));
    assert_eq!(encode_with_zero(-1.0f32, 8), Ok(-127));

    for value in unit_sweep(20_000) {
        assert_ne!(encode_with_zero(value, 8), Ok(-128));
        assert_ne!(encode_with_zero(value as f32, 8), Ok(-128));
    }
    assert_ne!(encode_with_zero(-1.0f64 - 1e-9, 8), Ok(-128));
}

#[test]
fn test_invalid_width_fails_every_operation() {
    for bits in [0, 1, 33, 64, u32::MAX] {
        let expected = Err(SnormError::InvalidBitWidth(bits));
        assert_eq!(encode_without_zero(0.5f32, bits), expected);
        assert_eq!(encode_with_zero(0.5f64, bits), expected);
        assert_eq!(
            decode_without_zero::<f32>(0, bits),
            Err(SnormError::InvalidBitWidth(bits))
        );
        assert_eq!(
            decode_with_zero::<f64>(0, bits),
            Err(SnormError::InvalidBitWidth(bits))
        );
    }
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a trace-level subscriber and return everything it logged
fn capture_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("nether_snorm=trace"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_clamping_emits_trace_events() {
    let logs = capture_logs(|| {
        assert_eq!(encode_with_zero(1.5f32, 8), Ok(127));
        assert_eq!(encode_with_zero(-1.5f64, 8), Ok(-127));
        assert_eq!(encode_without_zero(f32::NAN, 8), Ok(0));
        assert_eq!(decode_with_zero::<f32>(-128, 8), Ok(-1.0));
    });

    assert!(logs.contains("clamping value to 1.0"), "{logs}");
    assert!(logs.contains("clamping value to -1.0"), "{logs}");
    assert!(logs.contains("encoding NaN as zero"), "{logs}");
    assert!(logs.contains("saturating out-of-range code"), "{logs}");
}

#[test]
fn test_in_range_values_log_nothing() {
    let logs = capture_logs(|| {
        assert_eq!(encode_with_zero(0.5f32, 8), Ok(64));
        assert_eq!(decode_without_zero::<f64>(127, 8), Ok(1.0));
    });

    assert!(logs.is_empty(), "{logs}");
}
