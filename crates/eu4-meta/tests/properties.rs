use eu4_meta::codec::{decode_payload, next_token};
use eu4_meta::{decode_date, find_date_field, format_date, scan, DecodeError, GameDate, Token};
use proptest::prelude::*;

const SIGNATURE: [u8; 4] = [0x34, 0x62, 0x69, 0x6e];

fn meta(v: i32) -> Vec<u8> {
    let mut buf = vec![0x45, 0x55];
    buf.extend_from_slice(&SIGNATURE);
    buf.extend_from_slice(&[0x4D, 0x28, 0x01, 0x00, 0x0C, 0x00]);
    buf.extend_from_slice(&v.to_le_bytes());
    buf
}

/// Independent calendar computation with month names looked up by day range.
fn reference_date(v: i32) -> String {
    const STARTS: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let days = v / 24;
    let doy = days % 365;
    let month = STARTS.iter().rposition(|&s| s <= doy).unwrap();
    format!("{:04}_{:02}_{:02}", days / 365 - 5000, month + 1, doy - STARTS[month] + 1)
}

#[test]
fn roundtrip_scenario() {
    let v = ((1444 + 5000) * 365 + 314) * 24;
    let buf = meta(v);
    assert_eq!(
        &buf[..10],
        &[0x45, 0x55, 0x34, 0x62, 0x69, 0x6e, 0x4D, 0x28, 0x01, 0x00]
    );
    assert_eq!(find_date_field(&buf).unwrap(), v);
    assert_eq!(format_date(v), reference_date(v));
    assert_eq!(decode_date(&buf).unwrap(), "1444_11_11");
}

proptest! {
    #[test]
    fn finds_any_integer(v in any::<i32>()) {
        prop_assert_eq!(find_date_field(&meta(v)).unwrap(), v);
    }

    #[test]
    fn format_matches_reference(v in 0i32..=i32::MAX) {
        prop_assert_eq!(format_date(v), reference_date(v));
    }

    #[test]
    fn formatted_date_parses_back(v in 0i32..=i32::MAX) {
        let date = GameDate::from_hours(v);
        prop_assert_eq!(GameDate::parse(&format_date(v)).unwrap(), date);
        prop_assert_eq!(date.to_hours(), i64::from(v - v % 24));
    }

    #[test]
    fn bad_signature_is_rejected(sig in any::<[u8; 4]>(), tail in proptest::collection::vec(any::<u8>(), 0..32)) {
        prop_assume!(sig != SIGNATURE);
        let mut buf = vec![0x45, 0x55];
        buf.extend_from_slice(&sig);
        buf.extend_from_slice(&tail);

        let err = find_date_field(&buf).unwrap_err();
        match err.root_cause() {
            DecodeError::InvalidSignature { found } => prop_assert_eq!(found.as_slice(), &sig[..]),
            other => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn signature_check_stays_within_header(sig in any::<[u8; 4]>()) {
        prop_assume!(sig != SIGNATURE);
        // Nothing past byte 6 exists, so any read beyond it would surface as truncation
        let mut buf = vec![0x45, 0x55];
        buf.extend_from_slice(&sig);
        let err = find_date_field(&buf).unwrap_err();
        let rejected = matches!(err.root_cause(), DecodeError::InvalidSignature { .. });
        prop_assert!(rejected, "unexpected error {:?}", err);
    }

    #[test]
    fn truncation_never_panics(v in any::<i32>(), cut in 0usize..16) {
        let buf = meta(v);
        let err = find_date_field(&buf[..cut]).unwrap_err();
        if cut >= 12 {
            let truncated = matches!(err.root_cause(), DecodeError::TruncatedInput { .. });
            prop_assert!(truncated, "unexpected error {:?}", err);
        }
    }

    #[test]
    fn arbitrary_input_never_panics(buf in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = find_date_field(&buf);
        let _ = decode_date(&buf);
        for item in scan(&buf) {
            let _ = item;
        }
    }

    #[test]
    fn unknown_opcodes_always_advance(ops in proptest::collection::vec(any::<u16>(), 1..64)) {
        let mut buf = Vec::new();
        for op in &ops {
            buf.extend_from_slice(&op.to_be_bytes());
        }
        let mut pos = 0;
        loop {
            // A 1-byte payload can leave a lone trailing byte
            let Ok((token, header)) = next_token(&buf, pos) else { break };
            if token.is_eof() {
                break;
            }
            prop_assert_eq!(header, 2);
            let next = match decode_payload(&token, &buf, pos + header) {
                Ok((_, width)) => pos + header + width,
                Err(_) => break,
            };
            prop_assert!(next > pos);
            if let Token::Id(name) = &token {
                if name != "date" {
                    let op = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
                    prop_assert_eq!(u16::from_str_radix(name, 16).unwrap(), op);
                }
            }
            pos = next;
        }
    }

    #[test]
    fn scanner_positions_strictly_increase(buf in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut last: Option<usize> = None;
        for item in scan(&buf) {
            let Ok(t) = item else { break };
            if let Some(prev) = last {
                prop_assert!(t.position > prev);
            }
            prop_assert!(t.position + t.width <= buf.len());
            last = Some(t.position);
        }
    }
}
