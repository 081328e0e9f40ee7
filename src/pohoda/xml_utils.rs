use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::ConvertError;

fn xml_io(e: std::io::Error) -> ConvertError {
    ConvertError::Xml(format!("XML write error: {e}"))
}

/// Tab-indented XML writer over an in-memory buffer.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    /// Start a document whose declaration names `encoding`.
    ///
    /// The buffer itself is always UTF-8; transcoding happens afterwards.
    pub fn new(encoding: &str) -> Result<Self, ConvertError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b'\t', 1);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some(encoding), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, ConvertError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| ConvertError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, ConvertError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, ConvertError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, ConvertError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// `<name>text</name>` on one line, also when `text` is empty.
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, ConvertError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Like [`text_element`](Self::text_element); `None` becomes an empty element.
    pub fn optional_element(
        &mut self,
        name: &str,
        text: Option<&str>,
    ) -> Result<&mut Self, ConvertError> {
        self.text_element(name, text.unwrap_or(""))
    }

    /// `<outer><inner>text</inner></outer>`
    pub fn wrapped_text_element(
        &mut self,
        outer: &str,
        inner: &str,
        text: &str,
    ) -> Result<&mut Self, ConvertError> {
        self.start_element(outer)?;
        self.text_element(inner, text)?;
        self.end_element(outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_stays_on_one_line() {
        let mut w = XmlWriter::new("UTF-8").unwrap();
        w.start_element("a").unwrap();
        w.optional_element("b", None).unwrap();
        w.text_element("c", "x < y").unwrap();
        w.end_element("a").unwrap();
        let xml = w.into_string().unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>\n\t<b></b>\n\t<c>x &lt; y</c>\n</a>"
        );
    }
}
