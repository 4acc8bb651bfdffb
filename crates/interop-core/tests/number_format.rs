use interop_core::base::{split_marker, Base, NumberFormat};
use interop_core::errors::InteropError;
use proptest::prelude::*;

#[test]
fn hex_field_carries_radix_marker() {
    let format = NumberFormat::new(Base::BASE16, true);
    assert_eq!(format.write_i64(255), "16rff");
    assert_eq!(format.read_i64("16rff").unwrap(), 255);
    assert_eq!(format.write_i64(-255), "16r-ff");
    assert_eq!(format.read_i64("16r-ff").unwrap(), -255);
}

#[test]
fn decimal_fields_are_unmarked() {
    let format = NumberFormat::default();
    assert_eq!(format.write_i64(-42), "-42");
    assert_eq!(format.read_i64("-42").unwrap(), -42);
    assert_eq!(format.join_i64([1, 2, 3]), "1 2 3");
}

#[test]
fn reader_ignores_its_own_base() {
    let hex = NumberFormat::new(Base::BASE16, true);
    let binary = NumberFormat::new(Base::BASE2, true);
    let field = hex.join_i64([10, 11, -12]);
    assert_eq!(field, "16ra b -c");
    assert_eq!(binary.split_i64(&field).unwrap(), vec![10, 11, -12]);
    assert_eq!(binary.read_i64("255").unwrap(), 255);
}

#[test]
fn uppercase_digits_read_back() {
    let base = Base::BASE36.with_uppercase(true);
    assert_eq!(base.unsigned(35), "Z");
    assert_eq!(Base::BASE36.read_u64("Z").unwrap(), 35);
}

#[test]
fn extreme_integers_survive() {
    let format = NumberFormat::new(Base::BASE2, true);
    for value in [i64::MIN, i64::MAX, 0, -1] {
        assert_eq!(format.read_i64(&format.write_i64(value)).unwrap(), value);
    }
    let unsigned = NumberFormat::new(Base::BASE36, true);
    assert_eq!(unsigned.read_u64(&unsigned.write_u64(u64::MAX)).unwrap(), u64::MAX);
}

#[test]
fn radix_out_of_range_is_rejected() {
    assert!(matches!(Base::new(1), Err(InteropError::InvalidArgument(_))));
    assert!(matches!(Base::new(37), Err(InteropError::InvalidArgument(_))));
    assert_eq!(Base::new(7).unwrap().radix(), 7);
}

#[test]
fn marker_detection() {
    assert_eq!(split_marker("8r17").unwrap(), (Some(Base::BASE8), "17"));
    assert_eq!(split_marker("17").unwrap(), (None, "17"));
    assert_eq!(split_marker("-1.5").unwrap(), (None, "-1.5"));
    assert!(split_marker("99r1").is_err());
}

#[test]
fn out_of_range_markers_are_codec_errors() {
    for field in ["1r5", "0r5", "37r1", "99r1"] {
        let err = split_marker(field).unwrap_err();
        assert!(matches!(err, InteropError::Codec(_)), "{field}");
        assert_eq!(err.info().code, "radix-marker");
    }
    let err = NumberFormat::default().read_i64("1r5").unwrap_err();
    assert!(matches!(err, InteropError::Codec(_)));
}

#[test]
fn malformed_digits_report_codec_error() {
    let err = NumberFormat::default().read_i64("12x").unwrap_err();
    assert!(matches!(err, InteropError::Codec(_)));
    assert_eq!(err.info().code, "number-parse");
}

#[test]
fn compact_floats_keep_exact_bits() {
    let format = NumberFormat::new(Base::BASE10, false);
    let text = format.write_f64(0.1);
    assert!(text.starts_with("10r"));
    assert_eq!(format.read_f64(&text).unwrap().to_bits(), 0.1f64.to_bits());

    let nan = format.write_f32(f32::NAN);
    assert!(format.read_f32(&nan).unwrap().is_nan());
}

#[test]
fn legible_floats_are_plain_decimal() {
    let format = NumberFormat::default();
    assert_eq!(format.write_f64(1.5), "1.5");
    assert_eq!(format.join_f32([0.25, -2.0]), "0.25 -2");
    assert_eq!(format.split_f32("0.25 -2").unwrap(), vec![0.25, -2.0]);
    let tiny = format.write_f64(1.0e-300);
    assert_eq!(format.read_f64(&tiny).unwrap(), 1.0e-300);
}

proptest! {
    #[test]
    fn integers_roundtrip_in_any_base(value in any::<i64>(), radix in 2u32..=36) {
        let format = NumberFormat::new(Base::new(radix).unwrap(), true);
        prop_assert_eq!(format.read_i64(&format.write_i64(value)).unwrap(), value);
    }

    #[test]
    fn compact_doubles_roundtrip(bits in any::<u64>(), radix in 2u32..=36) {
        let format = NumberFormat::new(Base::new(radix).unwrap(), false);
        let value = f64::from_bits(bits);
        let joined = format.join_f64([value, 1.0]);
        let back = format.split_f64(&joined).unwrap();
        prop_assert_eq!(back[0].to_bits(), bits);
        prop_assert_eq!(back[1], 1.0);
    }
}
