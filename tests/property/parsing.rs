//! Properties for octal field parsing and CSV field access.

use proptest::prelude::*;

use bdclog::{get_field, parse_embedded_date, parse_octal, RowSelector};

proptest! {
    /// Re-encoding a parsed value and parsing again is the identity.
    #[test]
    fn octal_roundtrip(v in 0u64..=0o777_7777_7777) {
        let field = format!("{v:011o}\0");
        prop_assert_eq!(parse_octal(field.as_bytes()), v);
    }

    /// Leading space/NUL padding never changes the parsed value.
    #[test]
    fn octal_padding_is_ignored(v in 0u64..=0o7777_7777, pad in 0usize..6) {
        let mut field = Vec::new();
        field.extend(std::iter::repeat(b' ').take(pad));
        field.extend(format!("{v:o} ").into_bytes());
        prop_assert_eq!(parse_octal(&field), v);
    }

    /// All-space and all-NUL fields parse to zero.
    #[test]
    fn octal_blank_is_zero(len in 0usize..16, nul in proptest::bool::ANY) {
        let field = vec![if nul { 0u8 } else { b' ' }; len];
        prop_assert_eq!(parse_octal(&field), 0);
    }

    /// Field access agrees with a naive splitter on unquoted tables.
    #[test]
    fn csv_matches_naive_split_on_unquoted_tables(
        table in proptest::collection::vec(
            proptest::collection::vec("[a-z0-9]{0,8}", 1..6),
            1..6,
        ),
        col in 0usize..6,
        row in 0usize..6,
    ) {
        let width = table[0].len();
        let col = col % width;
        // Header c0..cN, then the generated rows, all width-normalized.
        let header: Vec<String> = (0..width).map(|i| format!("c{i}")).collect();
        let mut text = header.join(",");
        text.push('\n');
        for cells in &table {
            let mut cells = cells.clone();
            cells.resize(width, String::new());
            text.push_str(&cells.join(","));
            text.push('\n');
        }

        let name = format!("c{col}");
        if row < table.len() {
            let mut expected = table[row].clone();
            expected.resize(width, String::new());
            prop_assert_eq!(
                get_field(&text, RowSelector::Absolute(row), &name).unwrap(),
                expected[col].as_str()
            );
        } else if row > table.len() {
            // `row == table.len()` addresses the empty segment after the
            // final newline (unit-tested separately); beyond that the text
            // has run out.
            prop_assert!(get_field(&text, RowSelector::Absolute(row), &name).is_err());
        }

        let mut last = table[table.len() - 1].clone();
        last.resize(width, String::new());
        prop_assert_eq!(
            get_field(&text, RowSelector::Last, &name).unwrap(),
            last[col].as_str()
        );
    }

    /// Embedded dates order exactly as their (year, month, day, h, m, s)
    /// tuples do.
    #[test]
    fn date_ordering_matches_tuple_ordering(
        a in (1970i32..=2100, 1u8..=12, 1u8..=31, 0u8..=23, 0u8..=59, 0u8..=59),
        b in (1970i32..=2100, 1u8..=12, 1u8..=31, 0u8..=23, 0u8..=59, 0u8..=59),
    ) {
        // Restrict to day <= 28 so both tuples are calendar-valid and the
        // tuple order is the ground truth.
        prop_assume!(a.2 <= 28 && b.2 <= 28);
        let fmt = |t: &(i32, u8, u8, u8, u8, u8)| {
            format!(
                "{:04}-{:02}-{:02}_{:02}:{:02}:{:02}",
                t.0, t.1, t.2, t.3, t.4, t.5
            )
        };
        let ia = parse_embedded_date(&fmt(&a)).unwrap();
        let ib = parse_embedded_date(&fmt(&b)).unwrap();
        prop_assert_eq!(a.cmp(&b), ia.cmp(&ib));
    }
}
