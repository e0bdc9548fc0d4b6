use std::convert::TryFrom;

use crate::Tag;

pub mod builder;

mod compound;
mod path;
mod value;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_names_match_documentation() {
    assert_eq!(Tag::ByteArray.to_string(), "Byte_Array");
    assert_eq!(Tag::IntArray.to_string(), "Int_Array");
    assert_eq!(Tag::LongArray.to_string(), "Long_Array");
    assert_eq!(Tag::Compound.to_string(), "Compound");
}
