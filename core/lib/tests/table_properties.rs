//! Observable properties of the generated tables, checked over every
//! context and every byte value.

use encset::{build, Context, Entry};
use percent_encoding::percent_encode;
use pretty_assertions::assert_eq;

fn decode_escape(text: &str) -> u8 {
    let hex = text.strip_prefix('%').expect("escape must start with %");
    assert_eq!(hex.len(), 2, "escape must be two hex digits: {:?}", text);
    assert_eq!(hex, hex.to_uppercase(), "escape must be uppercase: {:?}", text);
    u8::from_str_radix(hex, 16).expect("escape must be valid hex")
}

#[test]
fn every_entry_round_trips() {
    for context in Context::ALL {
        let table = context.table();
        for i in 0..=255u8 {
            match table[i] {
                Entry::Literal(c) => {
                    assert!(matches!(i, 0x20..=0x7E), "{}: non-printable literal", context.name());
                    assert_eq!(c as u32, i as u32);
                }
                Entry::Percent(_) => {
                    assert_eq!(decode_escape(&table[i].to_string()), i);
                }
            }
        }
    }
}

#[test]
fn non_printables_escape_in_every_context() {
    for context in Context::ALL {
        let table = context.table();
        for i in (0x00..=0x1F).chain(0x7F..=0xFF) {
            assert!(
                table[i as u8].is_escaped(),
                "{} leaves {:#04x} bare",
                context.name(),
                i
            );
        }
    }
}

#[test]
fn baseline_punctuation_escapes_in_every_context() {
    for context in Context::ALL {
        let table = context.table();
        for &b in b" \"#<>`" {
            assert!(
                table[b].is_escaped(),
                "{} leaves {:?} bare",
                context.name(),
                b as char
            );
        }
    }
}

#[test]
fn alphanumerics_never_escape() {
    for context in Context::ALL {
        let table = context.table();
        for b in (b'0'..=b'9').chain(b'A'..=b'Z').chain(b'a'..=b'z') {
            assert_eq!(table[b], Entry::Literal(b as char), "in {}", context.name());
        }
    }
}

#[test]
fn extras_subset_implies_escape_subset() {
    for a in Context::ALL {
        for b in Context::ALL {
            let subset = a.extras().iter().all(|c| b.extras().contains(c));
            if !subset {
                continue;
            }

            let (table_a, table_b) = (a.table(), b.table());
            for i in 0..=255u8 {
                if table_a[i].is_escaped() {
                    assert!(
                        table_b[i].is_escaped(),
                        "{} escapes {:#04x} but {} does not",
                        a.name(),
                        i,
                        b.name()
                    );
                }
            }
        }
    }
}

#[test]
fn matches_percent_encoding_crate() {
    // The crate escapes a byte iff it is non-ASCII or a set member; the
    // tables must agree with it on every byte in every context.
    for context in Context::ALL {
        let table = context.table();
        for i in 0..=255u8 {
            let reference = percent_encode(&[i], context.ascii_set()).to_string();
            assert_eq!(table[i].to_string(), reference, "in {}", context.name());
        }
    }
}

#[test]
fn rebuilding_yields_identical_tables() {
    for context in Context::ALL {
        assert_eq!(build(context.ascii_set()), build(context.ascii_set()));
        assert_eq!(context.table(), context.table());
    }
}

#[test]
fn known_bytes() {
    assert_eq!(Context::Simple.table()[65], Entry::Literal('A'));
    assert_eq!(Context::Simple.table()[0].to_string(), "%00");
    assert_eq!(Context::Query.table()[39].to_string(), "%27");
    assert_eq!(Context::Default.table()[123].to_string(), "%7B");

    // QUERY leaves `@` bare; USERNAME escapes it.
    assert_eq!(Context::Username.table()[64].to_string(), "%40");
    assert_eq!(Context::Query.table()[64], Entry::Literal('@'));

    for context in Context::ALL {
        assert_eq!(context.table()[255].to_string(), "%FF");
    }
}
