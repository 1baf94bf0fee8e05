// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An example demonstrating `BidiMap` use as a two-way lookup table between
//! element symbols and atomic numbers.

use bidimap::{bidi_map, BidiMap, DupPolicy, OnDup, PutOutcome};

fn main() {
    // Start from a few known elements. The macro panics if a symbol or a
    // number is listed twice.
    let mut elements: BidiMap<String, u32> = bidi_map! {
        "H".to_owned() => 1,
        "He".to_owned() => 2,
        "Li".to_owned() => 3,
    };

    // Lookups work in both directions, and by borrowed key.
    assert_eq!(elements.get("He"), Some(&2));
    assert_eq!(elements.get_inverse(&3).map(String::as_str), Some("Li"));

    // Typos happen. The default policy lets a symbol be re-pointed...
    elements.insert("Be".to_owned(), 5).unwrap();
    let outcome = elements.insert("Be".to_owned(), 4).unwrap();
    assert_eq!(
        outcome,
        PutOutcome::Overwrote {
            by_key: Some(("Be".to_owned(), 5)),
            by_value: None,
        }
    );

    // ...but refuses to give an existing number to a second symbol.
    let err = elements.insert("Bx".to_owned(), 4).unwrap_err();
    println!("rejected: {err}");

    // A policy can be passed per call instead. Here, a newer spelling
    // replaces the old one for the same number.
    let rename = DupPolicy::RAISE.with_on_value(OnDup::Overwrite);
    elements.put("Hy".to_owned(), 1, rename).unwrap();
    elements.put("H".to_owned(), 1, rename).unwrap();
    assert_eq!(elements.get_inverse(&1).map(String::as_str), Some("H"));
    assert!(!elements.contains_key("Hy"));

    // Batches either stop at the first rejection, or collect all of them.
    let errors = elements.put_all_collecting(
        [
            ("B".to_owned(), 5),
            ("C".to_owned(), 6),
            ("Carbon".to_owned(), 6),
        ],
        DupPolicy::RAISE,
    );
    for error in &errors {
        println!("skipped: {error}");
    }

    // The inverse view answers "which symbol has this number?" as a map of
    // its own, without copying anything.
    let by_number = elements.inverse();
    assert_eq!(by_number.get(&6).map(String::as_str), Some("C"));
    let mut rows: Vec<_> = by_number.iter().collect();
    rows.sort_unstable();
    for (number, symbol) in rows {
        println!("{number:>2} => {symbol}");
    }

    // A cursor walks the elements in the order they were added, and notices
    // if the map changes underneath it.
    let mut cursor = elements.cursor();
    while let Some((symbol, number)) = cursor.next(&elements).unwrap() {
        println!("added: {symbol} ({number})");
    }

    elements.remove("C").unwrap();
    assert!(cursor.next(&elements).is_err());
}
