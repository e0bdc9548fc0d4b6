use crate::error::{ErrorKind, Result};
use crate::path::{Path, Segment, Selected};
use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, Value};

fn tree() -> Compound {
    let mut item = Compound::new();
    item.put_string("id", "minecraft:stone");

    let mut inventory = List::new(Tag::Compound);
    inventory.push(item).unwrap();

    let mut grid = List::new(Tag::List);
    let mut row = List::new(Tag::Int);
    row.push(5i32).unwrap();
    row.push(6i32).unwrap();
    grid.push(row).unwrap();

    let mut data = Compound::new();
    data.put_int("SpawnX", 10);
    data.insert("Inventory", inventory);
    data.insert("Grid", grid);
    data.insert("Bytes", ByteArray::new(vec![-1, 2]));
    data.insert("Ints", IntArray::new(vec![3]));
    data.insert("Longs", LongArray::new(vec![4, 5]));

    let mut root = Compound::new_implicit();
    root.insert("", data);
    root
}

#[test]
fn parse() -> Result<()> {
    let path = Path::parse("a.b[1][22].c")?;
    assert_eq!(
        path.segments(),
        &[
            Segment::Key("a".into()),
            Segment::Key("b".into()),
            Segment::Index(1),
            Segment::Index(22),
            Segment::Key("c".into()),
        ]
    );
    assert_eq!(path.to_string(), "a.b[1][22].c");
    Ok(())
}

#[test]
fn parse_empty_keys() -> Result<()> {
    assert!(Path::parse("")?.is_empty());
    assert_eq!(
        Path::parse(".Data")?.segments(),
        &[Segment::Key("".into()), Segment::Key("Data".into())]
    );
    Ok(())
}

#[test]
fn parse_errors() {
    for bad in ["a[", "a[x]", "a[1]b", "a]", "a[-1]", "a[1"] {
        let err = bad.parse::<Path>().unwrap_err();
        assert!(
            matches!(err.kind(), ErrorKind::InvalidPath(_)),
            "{} gave {:?}",
            bad,
            err
        );
    }
}

#[test]
fn empty_path_is_root() -> Result<()> {
    let root = tree();
    assert!(matches!(root.query("")?, Selected::Root(c) if c.len() == 1));
    Ok(())
}

#[test]
fn keys() -> Result<()> {
    let root = tree();
    assert_eq!(root.query(".SpawnX")?, Selected::Value(&Value::Int(10)));
    Ok(())
}

#[test]
fn list_index() -> Result<()> {
    let root = tree();
    assert_eq!(
        root.query(".Inventory[0].id")?,
        Selected::Value(&Value::String("minecraft:stone".into()))
    );
    assert_eq!(root.query(".Grid[0][1]")?, Selected::Value(&Value::Int(6)));
    Ok(())
}

#[test]
fn array_index() -> Result<()> {
    let root = tree();
    assert_eq!(root.query(".Bytes[0]")?, Selected::Byte(-1));
    assert_eq!(root.query(".Ints[0]")?, Selected::Int(3));
    assert_eq!(root.query(".Longs[1]")?, Selected::Long(5));
    assert_eq!(root.query(".Longs[1]")?.tag(), Tag::Long);
    Ok(())
}

#[test]
fn missing_key() {
    let root = tree();
    let err = root.query(".Nope").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NotFound(k) if k == "Nope"));
}

#[test]
fn index_out_of_range() {
    let root = tree();
    for path in [".Inventory[1]", ".Bytes[2]", ".Grid[0][2]"] {
        let err = root.query(path).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::IndexOutOfRange { .. }), "{}", path);
    }
}

#[test]
fn wrong_kind() {
    let root = tree();

    let err = root.query(".SpawnX.deeper").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::TypeMismatch {
            expected: Tag::Compound,
            found: Tag::Int
        }
    ));

    let err = root.query(".SpawnX[0]").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));

    let err = root.query(".Bytes[0][0]").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
}
