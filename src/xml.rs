//! Thin pull/push layers over quick-xml used by every Dom node.
//!
//! [`XmlReader`] hands out start tags, end tags and unescaped character data and
//! knows how to turn a byte offset into a [`Position`]. [`XmlWriter`] defers each
//! start tag until its first content arrives so that elements without content are
//! serialized as `<tag/>`.

use crate::error::{Error, Position, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event as xmlEvent};
use std::io::Write;

pub enum Token<'a> {
    Start(BytesStart<'a>),
    End,
    Text(String),
    Eof,
}

pub struct XmlReader<'a> {
    src: &'a str,
    xml: quick_xml::Reader<&'a [u8]>,
}

impl<'a> XmlReader<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut xml = quick_xml::Reader::from_str(src);
        xml.trim_text(false);
        xml.expand_empty_elements(true);
        XmlReader { src, xml }
    }

    pub fn position(&self) -> Position {
        Position::from_offset(self.src, self.xml.buffer_position())
    }

    /// Next structurally relevant event. Comments, declarations and processing
    /// instructions are skipped.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        loop {
            let evt = self.xml.read_event().map_err(|e| self.xml_error(e))?;
            match evt {
                xmlEvent::Start(start) => return Ok(Token::Start(start)),
                xmlEvent::End(_) => return Ok(Token::End),
                xmlEvent::Text(txt) => {
                    let txt = txt.unescape().map_err(|e| self.xml_error(e))?;
                    return Ok(Token::Text(txt.into_owned()));
                }
                xmlEvent::CData(txt) => {
                    return Ok(Token::Text(String::from_utf8_lossy(&txt.into_inner()).into_owned()))
                }
                xmlEvent::Eof => return Ok(Token::Eof),
                xmlEvent::Comment(_)
                | xmlEvent::Decl(_)
                | xmlEvent::PI(_)
                | xmlEvent::DocType(_)
                | xmlEvent::Empty(_) => {}
            }
        }
    }

    /// Lower-cased local name of a start tag.
    pub fn tag_name(&self, start: &BytesStart<'_>) -> String {
        String::from_utf8_lossy(start.local_name().as_ref()).to_lowercase()
    }

    /// Attribute `(name, value)` pairs of `start`, names kept case-sensitive.
    pub fn attributes(&self, start: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
        let mut attrs = vec![];
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.xml_error(e.into()))?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value().map_err(|e| self.xml_error(e))?;
            attrs.push((key, value.into_owned()));
        }
        Ok(attrs)
    }

    /// Collects character data up to the end tag of the current element.
    pub fn read_element_text(&mut self, tag: &str) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_token()? {
                Token::Text(txt) => text.push_str(&txt),
                Token::End => return Ok(text),
                Token::Start(_) => {
                    return Err(Error::ExpectedCharacterData {
                        pos: self.position(),
                        tag: tag.to_owned(),
                    })
                }
                Token::Eof => return Err(self.premature_eof()),
            }
        }
    }

    pub fn unexpected_attribute(&self, node: &'static str, name: &str) -> Error {
        Error::UnexpectedAttribute { pos: self.position(), node, name: name.to_owned() }
    }

    pub fn unexpected_element(&self, node: &'static str, tag: &str) -> Error {
        Error::UnexpectedElement { pos: self.position(), node, tag: tag.to_owned() }
    }

    pub fn unexpected_root(&self, tag: &str) -> Error {
        Error::UnexpectedRoot { pos: self.position(), tag: tag.to_owned() }
    }

    pub fn premature_eof(&self) -> Error {
        Error::UnexpectedEof { pos: self.position() }
    }

    pub fn xml_error(&self, source: quick_xml::Error) -> Error {
        Error::Xml { pos: self.position(), source }
    }
}

pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

pub struct XmlWriter<W: Write> {
    xml: quick_xml::Writer<W>,
    pending: Option<BytesStart<'static>>,
    open: Vec<String>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W) -> Self {
        XmlWriter { xml: quick_xml::Writer::new_with_indent(out, b' ', 1), pending: None, open: vec![] }
    }

    pub fn declaration(&mut self) -> Result<()> {
        self.xml.write_event(xmlEvent::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    pub fn start_element(&mut self, tag: &str) -> Result<()> {
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(tag.to_owned()));
        self.open.push(tag.to_owned());
        Ok(())
    }

    /// Adds an attribute to the start tag written last. Ignored once content
    /// has been emitted for that element.
    pub fn attribute(&mut self, key: &str, value: &str) {
        if let Some(start) = self.pending.as_mut() {
            start.push_attribute((key, value));
        }
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        self.xml.write_event(xmlEvent::Text(BytesText::new(text)))?;
        Ok(())
    }

    pub fn end_element(&mut self) -> Result<()> {
        let tag = self.open.pop().unwrap_or_default();
        match self.pending.take() {
            Some(start) => self.xml.write_event(xmlEvent::Empty(start))?,
            None => self.xml.write_event(xmlEvent::End(BytesEnd::new(tag)))?,
        }
        Ok(())
    }

    pub fn text_element(&mut self, tag: &str, text: &str) -> Result<()> {
        self.start_element(tag)?;
        if !text.is_empty() {
            self.text(text)?;
        }
        self.end_element()
    }

    pub fn into_inner(mut self) -> Result<W> {
        self.flush_pending()?;
        let mut out = self.xml.into_inner();
        out.write_all(b"\n")?;
        Ok(out)
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(start) = self.pending.take() {
            self.xml.write_event(xmlEvent::Start(start))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_skips_comments_and_reports_text() {
        let mut rdr = XmlReader::new("<!-- c --><a x=\"1\">t&amp;u<b/></a>");
        let Token::Start(a) = rdr.next_token().unwrap() else { panic!("expected <a>") };
        assert_eq!(rdr.tag_name(&a), "a");
        assert_eq!(rdr.attributes(&a).unwrap(), vec![("x".to_string(), "1".to_string())]);
        let Token::Text(txt) = rdr.next_token().unwrap() else { panic!("expected text") };
        assert_eq!(txt, "t&u");
        assert!(matches!(rdr.next_token().unwrap(), Token::Start(_)));
        assert!(matches!(rdr.next_token().unwrap(), Token::End));
        assert!(matches!(rdr.next_token().unwrap(), Token::End));
        assert!(matches!(rdr.next_token().unwrap(), Token::Eof));
    }

    #[test]
    fn element_text_rejects_children() {
        let mut rdr = XmlReader::new("<class>Foo<b/></class>");
        rdr.next_token().unwrap();
        let err = rdr.read_element_text("class").unwrap_err();
        assert!(matches!(err, Error::ExpectedCharacterData { .. }), "{err}");
    }

    #[test]
    fn writer_collapses_empty_elements() {
        let mut w = XmlWriter::new(Vec::new());
        w.start_element("a").unwrap();
        w.attribute("k", "v\"");
        w.start_element("b").unwrap();
        w.end_element().unwrap();
        w.text_element("c", "x<y").unwrap();
        w.end_element().unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert_eq!(out, "<a k=\"v&quot;\">\n <b/>\n <c>x&lt;y</c>\n</a>\n");
    }
}
