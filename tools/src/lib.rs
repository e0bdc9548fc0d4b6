//! Text rendering of tag trees for the command line tools.
//!
//! The layout is one line per tag, `TAG_<Kind>('<name>'): <data>`, with the
//! children of compounds wrapped in `{}` and those of lists in `[]`, each
//! level indented by a tab. List elements have no name and show as `N/A`.
use std::io::{self, Write};

use nbtag::path::Selected;
use nbtag::{Compound, Tag, Value};

/// Short description of a value's data. Containers give their size only.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Byte(b) => format!("0x{:02x}", *b as u8),
        Value::Short(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::Long(v) => v.to_string(),
        Value::Float(v) => format!("{:e}", v),
        Value::Double(v) => format!("{:e}", v),
        Value::String(s) => format!("'{}'", s),
        Value::ByteArray(arr) => elements(arr.iter().map(|b| format!("0x{:02x}", *b as u8))),
        Value::IntArray(arr) => elements(arr.iter().map(|v| v.to_string())),
        Value::LongArray(arr) => elements(arr.iter().map(|v| v.to_string())),
        Value::List(list) => format!("{} entries", list.len()),
        Value::Compound(c) => format!("{} entries", c.len()),
    }
}

fn elements<I: ExactSizeIterator<Item = String>>(items: I) -> String {
    let len = items.len();
    format!("{} elements [{}]", len, items.collect::<Vec<_>>().join(", "))
}

pub struct TreePrinter<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> TreePrinter<W> {
    /// In raw mode only the data part of each line is printed.
    pub fn new(out: W, raw: bool) -> Self {
        Self { out, raw }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print whatever a path query selected, labelled with `key`.
    pub fn print_selected(&mut self, selected: Selected<'_>, key: &str) -> io::Result<()> {
        match selected {
            Selected::Root(c) => self.print_compound(c, key, 0),
            Selected::Value(v) => self.print_value(v, key, 0),
            Selected::Byte(b) => self.print_value(&Value::Byte(b), key, 0),
            Selected::Int(i) => self.print_value(&Value::Int(i), key, 0),
            Selected::Long(l) => self.print_value(&Value::Long(l), key, 0),
        }
    }

    pub fn print_value(&mut self, value: &Value, key: &str, indent: usize) -> io::Result<()> {
        match value {
            Value::Compound(c) => self.print_compound(c, key, indent),
            Value::List(list) => {
                self.line(indent, Tag::List, key, &describe(value))?;
                self.bracket(indent, "[")?;
                for child in list {
                    self.print_value(child, "N/A", indent + 1)?;
                }
                self.bracket(indent, "]")
            }
            other => self.line(indent, other.tag(), key, &describe(other)),
        }
    }

    pub fn print_compound(&mut self, c: &Compound, key: &str, indent: usize) -> io::Result<()> {
        self.line(indent, Tag::Compound, key, &format!("{} entries", c.len()))?;
        self.bracket(indent, "{")?;
        for (name, child) in c {
            self.print_value(child, name, indent + 1)?;
        }
        self.bracket(indent, "}")
    }

    fn line(&mut self, indent: usize, tag: Tag, key: &str, data: &str) -> io::Result<()> {
        if self.raw {
            writeln!(self.out, "{}", data)
        } else {
            let tabs = "\t".repeat(indent);
            writeln!(self.out, "{}TAG_{}('{}'): {}", tabs, tag, key, data)
        }
    }

    fn bracket(&mut self, indent: usize, bracket: &str) -> io::Result<()> {
        if self.raw {
            return Ok(());
        }
        writeln!(self.out, "{}{}", "\t".repeat(indent), bracket)
    }
}

/// Render a selection as pretty JSON.
pub fn to_json(selected: Selected<'_>) -> serde_json::Result<String> {
    match selected {
        Selected::Root(c) => serde_json::to_string_pretty(c),
        Selected::Value(v) => serde_json::to_string_pretty(v),
        Selected::Byte(b) => serde_json::to_string_pretty(&b),
        Selected::Int(i) => serde_json::to_string_pretty(&i),
        Selected::Long(l) => serde_json::to_string_pretty(&l),
    }
}
