use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

#[test]
fn tags() {
    let cases = [
        (Value::from(1i8), Tag::Byte),
        (Value::from(1i16), Tag::Short),
        (Value::from(1i32), Tag::Int),
        (Value::from(1i64), Tag::Long),
        (Value::from(1f32), Tag::Float),
        (Value::from(1f64), Tag::Double),
        (Value::from("s"), Tag::String),
        (Value::from(ByteArray::default()), Tag::ByteArray),
        (Value::from(IntArray::default()), Tag::IntArray),
        (Value::from(LongArray::default()), Tag::LongArray),
        (Value::from(List::new(Tag::Int)), Tag::List),
        (Value::from(Compound::new()), Tag::Compound),
    ];

    for (value, tag) in cases {
        assert_eq!(value.tag(), tag);
    }
}

#[test]
fn unsigned_conversions_keep_bits() {
    assert_eq!(Value::from(255u8), Value::Byte(-1));
    assert_eq!(Value::from(u32::MAX), Value::Int(-1));
    assert_eq!(Value::from(true), Value::Byte(1));
    assert_eq!(Value::from(false), Value::Byte(0));
}

#[test]
fn widening_accessors() {
    assert_eq!(Value::Byte(-3).as_i64(), Some(-3));
    assert_eq!(Value::Double(2.9).as_i64(), Some(2));
    assert_eq!(Value::Short(7).as_f64(), Some(7.0));
    assert_eq!(Value::from("x").as_i64(), None);
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert_eq!(Value::Int(1).as_str(), None);
    assert_eq!(Value::Int(1).as_i8(), None);
}

#[test]
fn exact_accessors() {
    let arr = Value::from(IntArray::new(vec![4, 5]));
    assert_eq!(arr.as_int_array().map(|a| a.len()), Some(2));
    assert_eq!(arr.as_long_array(), None);
    assert_eq!(Value::Float(0.5).as_f32(), Some(0.5));
    assert_eq!(Value::Float(0.5).as_i32(), None);
    assert!(Value::from(Compound::new()).as_compound().is_some());
}

#[test]
fn json() {
    let mut list = List::new(Tag::Short);
    list.push(1i16).unwrap();

    let mut root = Compound::new_implicit();
    root.put_int("b", 1);
    root.put_string("a", "x");
    root.insert("l", list);
    root.insert("arr", LongArray::new(vec![2, 3]));

    let json = serde_json::to_string(&root).unwrap();
    assert_eq!(json, r#"{"b":1,"a":"x","l":[1],"arr":[2,3]}"#);
}
