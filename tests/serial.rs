//! Integration tests for the `key:value` line format.

use std::fs;
use std::io::Write;

use tempfile::tempdir;
use treemap::{Error, TreeMap};

fn sample_map() -> TreeMap<i32, i32> {
    let mut map = TreeMap::new();
    for key in [1, 2, 5, 7, 3] {
        map.add(key, key * key);
    }
    map
}

#[test]
fn round_trip_preserves_the_mapping() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");

    let map = sample_map();
    map.dump(&path).unwrap();

    let mut loaded = TreeMap::new();
    loaded.load(&path).unwrap();

    assert_eq!(loaded, map);
    // The reload re-inserts ascending keys, so the chain shape differs but
    // enumeration does not.
    assert_eq!(loaded.keys(), vec![1, 2, 3, 5, 7]);
}

#[test]
fn dump_writes_ascending_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");

    sample_map().dump(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "1:1\n2:4\n3:9\n5:25\n7:49\n");
}

#[test]
fn load_replaces_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");
    sample_map().dump(&path).unwrap();

    let mut map = TreeMap::new();
    map.add(999, 999);
    map.load(&path).unwrap();

    assert!(!map.contains(&999));
    assert_eq!(map.len(), 5);
}

#[test]
fn load_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-file.txt");

    let mut map: TreeMap<i32, i32> = TreeMap::new();
    match map.load(&path) {
        Err(Error::Io(_)) => {}
        other => panic!("expected Error::Io, got {:?}", other),
    }
}

#[test]
fn line_without_separator_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");
    let mut file = fs::File::create(&path).unwrap();
    write!(file, "1:10\nbogus\n3:30\n").unwrap();

    let mut map: TreeMap<i32, i32> = TreeMap::new();
    match map.load(&path) {
        Err(Error::Parse { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "bogus");
        }
        other => panic!("expected Error::Parse, got {:?}", other),
    }
}

#[test]
fn unparsable_token_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");
    let mut file = fs::File::create(&path).unwrap();
    write!(file, "1:10\ntwo:20\n").unwrap();

    let mut map: TreeMap<i32, i32> = TreeMap::new();
    match map.load(&path) {
        Err(Error::Parse { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "two:20");
        }
        other => panic!("expected Error::Parse, got {:?}", other),
    }
}

#[test]
fn value_containing_colon_survives_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");

    let mut map = TreeMap::new();
    map.add(1, String::from("a:b"));
    map.dump(&path).unwrap();

    let mut loaded: TreeMap<i32, String> = TreeMap::new();
    loaded.load(&path).unwrap();

    // The split takes the first `:` only, so the value keeps its colon.
    assert_eq!(loaded.get(&1), Some(&String::from("a:b")));
}

#[test]
fn keys_can_be_reparsed_as_another_type() {
    // The original demo dumps an <int, int> map and reloads it as
    // <int, string>; the format carries no type information.
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");
    sample_map().dump(&path).unwrap();

    let mut loaded: TreeMap<i32, String> = TreeMap::new();
    loaded.load(&path).unwrap();

    assert_eq!(loaded.get(&7), Some(&String::from("49")));
}

quickcheck::quickcheck! {
    fn round_trip_any_distinct_keys(pairs: std::collections::BTreeMap<i16, i16>) -> bool {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.txt");

        let mut map = TreeMap::new();
        for (k, v) in &pairs {
            map.add(*k, *v);
        }
        map.dump(&path).unwrap();

        let mut loaded = TreeMap::new();
        loaded.load(&path).unwrap();
        loaded == map
    }
}
