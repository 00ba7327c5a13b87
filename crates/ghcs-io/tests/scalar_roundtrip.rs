use std::f64::consts::PI;

use ghcs_io::{ByteReader, ByteWriter, Endian};

/// Writes one of every scalar/vector/string/color primitive in a
/// single pass, then reads them back in the same order, asserting
/// bit-for-bit equality. Run once per endianness.
fn round_trip(endian: Endian) {
    let mut w = ByteWriter::new(endian);
    w.append_byte(0x12).unwrap();
    w.append_uint32(0x1234_5678).unwrap();
    w.append_int32(-7).unwrap();
    w.append_float(1.0).unwrap();
    w.append_double(PI).unwrap();
    w.append_string_zero_terminated("Hello").unwrap();
    w.append_string_after_u32_length("Is this thing on?").unwrap();
    w.append_rgba(ghcs_io::Rgba {
        r: 200,
        g: 100,
        b: 50,
        a: 255,
    })
    .unwrap();
    w.append_rgb(ghcs_io::Rgba {
        r: 238,
        g: 221,
        b: 204,
        a: 0,
    })
    .unwrap();
    w.append_intvec2(glam::IVec2::new(1920, 1080)).unwrap();
    w.append_vec2(glam::Vec2::new(-0.6, 0.8)).unwrap();

    let bytes = w.into_bytes();
    let mut r = ByteReader::new(&bytes, endian);

    assert_eq!(r.parse_byte().unwrap(), 0x12);
    assert_eq!(r.parse_uint32().unwrap(), 0x1234_5678);
    assert_eq!(r.parse_int32().unwrap(), -7);
    assert_eq!(r.parse_float().unwrap(), 1.0);
    assert_eq!(r.parse_double().unwrap(), PI);
    assert_eq!(r.parse_string_zero_terminated().unwrap(), "Hello");
    assert_eq!(r.parse_string_after_u32_length().unwrap(), "Is this thing on?");

    let rgba = r.parse_rgba().unwrap();
    assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (200, 100, 50, 255));

    let rgb = r.parse_rgb().unwrap();
    assert_eq!((rgb.r, rgb.g, rgb.b, rgb.a), (238, 221, 204, 255));

    assert_eq!(r.parse_intvec2().unwrap(), glam::IVec2::new(1920, 1080));
    assert_eq!(r.parse_vec2().unwrap(), glam::Vec2::new(-0.6, 0.8));
    assert!(r.is_at_end());
}

#[test]
fn scalar_round_trip_little_endian() {
    round_trip(Endian::Little);
}

#[test]
fn scalar_round_trip_big_endian() {
    round_trip(Endian::Big);
}

#[test]
fn little_and_big_endian_payloads_differ_in_bytes_but_agree_in_value() {
    let mut le = ByteWriter::new(Endian::Little);
    le.append_uint32(0x1234_5678).unwrap();
    let mut be = ByteWriter::new(Endian::Big);
    be.append_uint32(0x1234_5678).unwrap();

    let le_bytes = le.into_bytes();
    let be_bytes = be.into_bytes();
    assert_ne!(le_bytes, be_bytes);

    let mut le_reader = ByteReader::new(&le_bytes, Endian::Little);
    let mut be_reader = ByteReader::new(&be_bytes, Endian::Big);
    assert_eq!(le_reader.parse_uint32().unwrap(), be_reader.parse_uint32().unwrap());
}
