use crate::error::ErrorKind;
use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

#[test]
fn typed_accessors() {
    let mut c = Compound::new();
    c.put_byte("b", 1);
    c.put_short("s", 2);
    c.put_int("i", 3);
    c.put_long("l", 4);
    c.put_float("f", 5.5);
    c.put_double("d", 6.5);
    c.put_string("str", "seven");
    c.put_bool("yes", true);

    assert_eq!(c.get_byte("b"), Some(1));
    assert_eq!(c.get_short("s"), Some(2));
    assert_eq!(c.get_int("i"), Some(3));
    assert_eq!(c.get_long("l"), Some(4));
    assert_eq!(c.get_float("f"), Some(5.5));
    assert_eq!(c.get_double("d"), Some(6.5));
    assert_eq!(c.get_string("str"), Some("seven"));
    assert_eq!(c.get_byte("yes"), Some(1));
}

#[test]
fn missing_and_wrong_kind_look_the_same() {
    let mut c = Compound::new();
    c.put_int("i", 3);

    assert_eq!(c.get_int("missing"), None);
    assert_eq!(c.get_short("i"), None);
    assert_eq!(c.get_string("i"), None);
    assert!(c.get_list("i").is_none());
    assert!(c.get_compound("i").is_none());
    assert!(c.get_byte_array("i").is_none());
}

#[test]
fn put_overwrites() {
    let mut c = Compound::new();
    c.put_int("a", 1);
    c.put_int("a", 2);

    assert_eq!(c.len(), 1);
    assert_eq!(c.get_int("a"), Some(2));
}

#[test]
fn overwrite_with_other_kind() {
    let mut c = Compound::new();
    c.put_int("a", 1);
    let old = c.insert("a", "now a string");

    assert_eq!(old, Some(Value::Int(1)));
    assert_eq!(c.get_int("a"), None);
    assert_eq!(c.get_string("a"), Some("now a string"));
}

#[test]
fn overwrite_keeps_position() {
    let mut c = Compound::new();
    c.put_int("first", 1);
    c.put_int("second", 2);
    c.put_int("first", 3);

    let keys: Vec<_> = c.keys().map(String::as_str).collect();
    assert_eq!(keys, ["first", "second"]);
}

#[test]
fn remove_keeps_order() {
    let mut c: Compound = vec![("a", 1i32), ("b", 2), ("c", 3)].into_iter().collect();

    assert_eq!(c.remove("b"), Some(Value::Int(2)));
    assert_eq!(c.remove("b"), None);
    assert!(!c.contains_key("b"));

    let keys: Vec<_> = c.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "c"]);
}

#[test]
fn try_get_reports_not_found() {
    let c = Compound::new();
    let err = c.try_get("nope").unwrap_err();
    match err.kind() {
        ErrorKind::NotFound(key) => assert_eq!(key, "nope"),
        other => panic!("expected not found, got {:?}", other),
    }
}

#[test]
fn containers_and_arrays() {
    let mut c = Compound::new();
    c.put_byte_array("ba", ByteArray::new(vec![1]));
    c.insert("ia", IntArray::new(vec![2]));
    c.put_long_array("la", LongArray::new(vec![3]));
    c.put_list("list", List::new(Tag::Int));
    c.put_compound("nested", Compound::new());

    c.get_byte_array_mut("ba").unwrap().push(4);
    c.get_int_array_mut("ia").unwrap().push(5);
    c.get_long_array_mut("la").unwrap().push(6);
    c.get_list_mut("list").unwrap().push(7i32).unwrap();
    c.get_compound_mut("nested").unwrap().put_int("x", 8);

    assert_eq!(c.get_byte_array("ba").unwrap()[..], [1, 4]);
    assert_eq!(c.get_int_array("ia").unwrap()[..], [2, 5]);
    assert_eq!(c.get_long_array("la").unwrap()[..], [3, 6]);
    assert_eq!(c.get_list("list").unwrap().values(), &[Value::Int(7)]);
    assert_eq!(c.get_compound("nested").unwrap().get_int("x"), Some(8));
}

#[test]
fn get_mut_changes_in_place() {
    let mut c = Compound::new();
    c.put_int("i", 1);

    if let Some(Value::Int(i)) = c.get_mut("i") {
        *i += 41;
    }
    assert_eq!(c["i"], Value::Int(42));
}

#[test]
#[should_panic]
fn index_missing_key_panics() {
    let c = Compound::new();
    let _ = &c["missing"];
}

#[test]
fn equality_ignores_order() {
    let a: Compound = vec![("x", 1i32), ("y", 2)].into_iter().collect();
    let b: Compound = vec![("y", 2i32), ("x", 1)].into_iter().collect();
    assert_eq!(a, b);
}

#[test]
fn implicit_flag() {
    let mut c = Compound::new();
    assert!(!c.is_implicit());
    c.set_implicit(true);
    assert!(c.is_implicit());
    assert!(Compound::new_implicit().is_implicit());
}

#[test]
fn equality_ignores_implicit_flag() {
    let mut explicit = Compound::new();
    explicit.put_int("i", 1);

    let mut implicit = explicit.clone();
    implicit.set_implicit(true);

    assert_eq!(explicit, implicit);
}
