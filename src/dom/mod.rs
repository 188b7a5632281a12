//! In-memory model of the `.ui` schema.
//!
//! Every element type of the schema is a `Dom*` struct. Optional attributes and
//! children are `Option`s, repeated children are `Vec`s, and nodes that hold one
//! payload out of several alternatives ([`DomProperty`], [`DomBrush`],
//! [`DomLayoutItem`]) keep it in a single enum so only one can ever be present.
//!
//! Reading validates attribute names and child tags against the schema and aborts
//! on the first mismatch. Writing always emits attributes and children in schema
//! order, so serializing an already serialized tree is a fixed point.

#[macro_use]
mod macros;

mod connection;
mod form;
mod image;
mod paint;
mod property;
mod value;
mod widget;

pub use connection::*;
pub use form::*;
pub use image::*;
pub use paint::*;
pub use property::*;
pub use value::*;
pub use widget::*;

use crate::error::Result;
use crate::xml::{XmlReader, XmlWriter};
use quick_xml::events::BytesStart;
use std::io::Write;

pub trait DomNode: Default {
    /// Canonical lower-case tag name.
    const TAG: &'static str;

    /// Consumes the attributes of `start` and everything up to its end tag.
    fn read(&mut self, reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<()>;

    /// Writes the node as `tag`, or as [`DomNode::TAG`] when `tag` is empty.
    fn write<W: Write>(&self, writer: &mut XmlWriter<W>, tag: &str) -> Result<()>;

    /// Drops all children. Attributes and text survive unless `clear_all` is set.
    fn clear(&mut self, clear_all: bool);

    fn text(&self) -> &str;
}

/// Anything that can appear as a child element: Dom nodes and text-only values.
pub trait Element: Sized {
    fn read_element(reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<Self>;
    fn write_element<W: Write>(&self, writer: &mut XmlWriter<W>, tag: &str) -> Result<()>;
}

/// Scalar carried in attribute values and text-only elements.
pub trait Value: Sized {
    fn parse_value(text: &str) -> Self;
    fn format_value(&self) -> String;
}

fn parse_number<T: std::str::FromStr + Default>(text: &str, what: &str) -> T {
    let trimmed = text.trim();
    match trimmed.parse() {
        Ok(v) => v,
        Err(_) => {
            if !trimmed.is_empty() {
                tracing::warn!(value = trimmed, "invalid {what}, using 0");
            }
            T::default()
        }
    }
}

impl Value for String {
    fn parse_value(text: &str) -> Self {
        text.to_owned()
    }
    fn format_value(&self) -> String {
        self.clone()
    }
}

impl Value for bool {
    fn parse_value(text: &str) -> Self {
        text == "true"
    }
    fn format_value(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_owned()
    }
}

macro_rules! integer_value {
    ($($ty:ty),*) => {$(
        impl Value for $ty {
            fn parse_value(text: &str) -> Self {
                parse_number(text, "integer")
            }
            fn format_value(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

integer_value!(i32, u32, i64, u64);

impl Value for f64 {
    fn parse_value(text: &str) -> Self {
        parse_number(text, "number")
    }
    fn format_value(&self) -> String {
        format!("{self:.15}")
    }
}

impl Value for f32 {
    fn parse_value(text: &str) -> Self {
        parse_number(text, "number")
    }
    fn format_value(&self) -> String {
        format!("{self:.8}")
    }
}

macro_rules! text_element {
    ($($ty:ty),*) => {$(
        impl Element for $ty {
            fn read_element(reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<Self> {
                let tag = reader.tag_name(start);
                Ok(<$ty as Value>::parse_value(&reader.read_element_text(&tag)?))
            }

            fn write_element<W: Write>(&self, writer: &mut XmlWriter<W>, tag: &str) -> Result<()> {
                writer.text_element(tag, &self.format_value())
            }
        }
    )*};
}

text_element!(String, bool, i32, u32, i64, u64, f32, f64);

/// Parses a single node from `src`, whose root element must be the node itself.
pub fn from_str<T: DomNode>(src: &str) -> Result<T> {
    let mut reader = XmlReader::new(src);
    loop {
        match reader.next_token()? {
            crate::xml::Token::Start(start) => {
                let mut node = T::default();
                node.read(&mut reader, &start)?;
                return Ok(node);
            }
            crate::xml::Token::Eof => return Err(reader.premature_eof()),
            _ => {}
        }
    }
}

/// Serializes a single node without XML declaration.
pub fn to_string<T: DomNode>(node: &T) -> Result<String> {
    let mut writer = XmlWriter::new(Vec::new());
    node.write(&mut writer, "")?;
    let out = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_precision() {
        assert_eq!(0.1f64.format_value(), "0.100000000000000");
        assert_eq!(1.5f32.format_value(), "1.50000000");
    }

    #[test]
    fn lenient_integers() {
        assert_eq!(i32::parse_value(" 42 "), 42);
        assert_eq!(i32::parse_value("forty"), 0);
        assert_eq!(u64::parse_value(""), 0);
        assert!(bool::parse_value("true"));
        assert!(!bool::parse_value("True"));
    }
}
