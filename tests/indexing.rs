use bitstring::{BitString, Error};
use num_bigint::BigUint;

const TEST_VALS: [&str; 8] = [
    "00000000000001111111111111",
    "00101001010100101010111001101101",
    "1100111000111100001111100000",
    "101100111000111100001111100000",
    "101010101010101010101010101010",
    "010101010101010101010101010101",
    "0000000000000000000000000000",
    "1111111111111111111111111111",
];

fn val(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 2).unwrap()
}

// bit i of the string value, LSB at the right-hand end of the text
fn char_bit(s: &str, i: usize) -> u8 {
    s.as_bytes()[s.len() - 1 - i] - b'0'
}

#[test]
fn single_bit_fetch() {
    for s in TEST_VALS {
        let bs = BitString::new(s).unwrap();
        for i in 0..s.len() {
            assert_eq!(bs.bit(i).unwrap(), char_bit(s, i), "bit {i} of '{s}'");
            assert_eq!(bs[i], char_bit(s, i));
        }
    }
}

#[test]
fn single_bit_set() {
    for s in TEST_VALS {
        // setting each bit to itself leaves the value alone
        let mut bs = BitString::new(s).unwrap();
        for i in 0..s.len() {
            bs.set_bit(i, char_bit(s, i)).unwrap();
            assert_eq!(bs.bit(i).unwrap(), char_bit(s, i));
        }
        assert_eq!(bs.to_uint(), val(s));

        // setting each bit to its complement flips every position
        let mut bs = BitString::new(s).unwrap();
        for i in 0..s.len() {
            bs.set_bit(i, 1 - char_bit(s, i)).unwrap();
            assert_ne!(bs.bit(i).unwrap(), char_bit(s, i));
        }
    }
}

#[test]
fn set_rejects_non_digits() {
    let mut bs = BitString::bounded("1010", 4).unwrap();
    assert_eq!(
        bs.set_bit(0, 2).unwrap_err(),
        Error::InvalidDigit("2".to_owned())
    );
    assert_eq!(bs.to_uint(), BigUint::from(10u8));
}

#[test]
fn index_bounds() {
    for s in TEST_VALS {
        let l = s.len();
        let bs = BitString::new(s).unwrap();
        // an unbounded string reads implicit zeros past its value
        assert_eq!(bs.bit(l + 10).unwrap(), 0);

        let mut bs = BitString::bounded(s, l).unwrap();
        assert!(bs.bit(l - 1).is_ok());
        assert_eq!(
            bs.bit(l).unwrap_err(),
            Error::IndexOutOfRange { index: l, length: l }
        );
        assert_eq!(
            bs.bit(l + 10).unwrap_err(),
            Error::IndexOutOfRange {
                index: l + 10,
                length: l
            }
        );
        assert!(matches!(
            bs.set_bit(l, 0).unwrap_err(),
            Error::IndexOutOfRange { .. }
        ));
    }
}

#[test]
#[should_panic(expected = "out of range")]
fn index_sugar_panics_past_the_end() {
    let bs = BitString::bounded("1010", 4).unwrap();
    let _ = bs[4];
}

#[test]
fn substring_fetch() {
    for s in TEST_VALS {
        let l = s.len();
        for width in [2usize, 5, l - 1] {
            let bs = BitString::new(s).unwrap();
            for i in 0..=(l - width) {
                let excerpt = val(&s[l - width - i..l - i]);
                let sub = bs.substring(i, width).unwrap();
                assert_eq!(sub.to_uint(), excerpt, "'{s}'[{i}, {width}]");
                assert_eq!(sub.width(), Some(width));
                assert_eq!(bs.slice(i..=i + width - 1).unwrap().to_uint(), excerpt);
            }
        }
    }
}

#[test]
fn substring_fetch_bounded_matches_unbounded() {
    for s in TEST_VALS {
        let l = s.len();
        let unbounded = BitString::new(s).unwrap();
        let bounded = BitString::bounded(s, l).unwrap();
        for i in 0..l - 3 {
            assert_eq!(
                bounded.substring(i, 3).unwrap(),
                unbounded.substring(i, 3).unwrap()
            );
        }
    }
}

#[test]
fn slice_endpoints_normalize() {
    let bs = BitString::bounded("110010110", 9).unwrap();
    assert_eq!(bs.slice(2..=5).unwrap(), bs.slice(5..=2).unwrap());
    let mut a = bs.clone();
    let mut b = bs.clone();
    a.set_slice(2..=5, 0b1001u8).unwrap();
    b.set_slice(5..=2, 0b1001u8).unwrap();
    assert_eq!(a, b);
}

#[test]
fn substring_write() {
    for s in TEST_VALS {
        let l = s.len();
        let width = 5usize;
        for i in 0..=(l - width) {
            let mut bs = BitString::new(s).unwrap();
            let excerpt = val(&s[l - width - i..l - i]);
            let flipped =
                ((BigUint::from(1u8) << width) - BigUint::from(1u8)) ^ &excerpt;
            let written = bs.set_substring(i, width, flipped.clone()).unwrap();
            assert_eq!(written, flipped);
            assert_eq!(bs.substring(i, width).unwrap().to_uint(), flipped);
            // bits outside the span are untouched
            if i > 0 {
                assert_eq!(bs.substring(0, i).unwrap().to_uint(), val(s) & ((BigUint::from(1u8) << i) - BigUint::from(1u8)));
            }
        }
    }
}

#[test]
fn substring_write_truncates_to_span() {
    let mut bs = BitString::bounded("0000", 4).unwrap();
    // only the low two bits of the source land in the span
    let written = bs.set_substring(1, 2, 0b1111u8).unwrap();
    assert_eq!(written, BigUint::from(3u8));
    assert_eq!(bs.to_string(), "0110");
}

#[test]
fn substring_write_extends_unbounded() {
    let mut bs = BitString::new("1").unwrap();
    bs.set_substring(4, 2, 3u8).unwrap();
    assert_eq!(bs.to_string(), "110001");
}

#[test]
fn substring_bounds_and_arguments() {
    let mut bs = BitString::bounded("110010110", 9).unwrap();
    assert_eq!(bs.substring(0, 0).unwrap_err(), Error::NegativeWidth);
    assert_eq!(
        bs.substring(7, 3).unwrap_err(),
        Error::IndexOutOfRange { index: 9, length: 9 }
    );
    assert_eq!(
        bs.set_substring(8, 2, 0u8).unwrap_err(),
        Error::IndexOutOfRange { index: 9, length: 9 }
    );
    assert!(matches!(
        bs.substring(usize::MAX, 2).unwrap_err(),
        Error::BadArguments(_)
    ));

    // reading past the significant bits of an unbounded string sees zeros
    let unbounded = BitString::new("101").unwrap();
    let tail = unbounded.substring(5, 4).unwrap();
    assert!(tail.is_zero());
    assert_eq!(tail.to_string(), "0000");
}
