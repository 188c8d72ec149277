//! Thin XML emitter over quick-xml.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::model::Color;

pub(crate) const NS_APP: &str = "http://www.hancom.co.kr/hwpml/2011/app";
pub(crate) const NS_PARAGRAPH: &str = "http://www.hancom.co.kr/hwpml/2011/paragraph";
pub(crate) const NS_SECTION: &str = "http://www.hancom.co.kr/hwpml/2011/section";
pub(crate) const NS_CORE: &str = "http://www.hancom.co.kr/hwpml/2011/core";
pub(crate) const NS_HEAD: &str = "http://www.hancom.co.kr/hwpml/2011/head";
pub(crate) const NS_VERSION: &str = "http://www.hancom.co.kr/hwpml/2011/version";
pub(crate) const NS_HPF: &str = "http://www.hancom.co.kr/schema/2011/hpf";
pub(crate) const NS_OPF: &str = "http://www.idpf.org/2007/opf/";
pub(crate) const NS_DC: &str = "http://purl.org/dc/elements/1.1/";
pub(crate) const NS_OCF: &str = "urn:oasis:names:tc:opendocument:xmlns:container";
pub(crate) const NS_ODF_MANIFEST: &str = "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";
pub(crate) const NS_CONFIG: &str = "urn:oasis:names:tc:opendocument:xmlns:config:1.0";

/// Namespace declarations carried by the header and section roots.
pub(crate) fn content_namespaces(attrs: Attrs) -> Attrs {
    attrs
        .add("xmlns:ha", NS_APP)
        .add("xmlns:hp", NS_PARAGRAPH)
        .add("xmlns:hs", NS_SECTION)
        .add("xmlns:hc", NS_CORE)
        .add("xmlns:hh", NS_HEAD)
}

/// Ordered attribute list.
#[derive(Debug, Default)]
pub(crate) struct Attrs {
    pairs: Vec<(&'static str, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Boolean attribute as `1` / `0`.
    pub fn flag(self, key: &'static str, value: bool) -> Self {
        self.add(key, if value { "1" } else { "0" })
    }

    pub fn color(self, key: &'static str, value: Color) -> Self {
        self.add(key, value)
    }

    pub fn opt<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.add(key, value),
            None => self,
        }
    }

    fn apply<'a>(&'a self, mut start: BytesStart<'a>) -> BytesStart<'a> {
        for (key, value) in &self.pairs {
            start.push_attribute((*key, value.as_str()));
        }
        start
    }
}

/// Streaming XML document builder.
pub(crate) struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Start a standalone UTF-8 document.
    pub fn new() -> Result<Self> {
        let mut inner = Writer::new(Vec::new());
        inner.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { inner })
    }

    pub fn start(&mut self, name: &str, attrs: Attrs) -> Result<()> {
        let start = attrs.apply(BytesStart::new(name));
        self.inner.write_event(Event::Start(start))?;
        Ok(())
    }

    pub fn empty(&mut self, name: &str, attrs: Attrs) -> Result<()> {
        let start = attrs.apply(BytesStart::new(name));
        self.inner.write_event(Event::Empty(start))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> Result<()> {
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        if !text.is_empty() {
            self.inner.write_event(Event::Text(BytesText::new(text)))?;
        }
        Ok(())
    }

    /// `<name attrs>text</name>`
    pub fn leaf(&mut self, name: &str, attrs: Attrs, text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    pub fn finish(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_escaped_document() {
        let mut xml = XmlWriter::new().unwrap();
        xml.start("root", Attrs::new().add("a", "x&y").flag("on", true))
            .unwrap();
        xml.text("1 < 2").unwrap();
        xml.empty("child", Attrs::new().opt::<u32>("skip", None))
            .unwrap();
        xml.end("root").unwrap();

        let out = String::from_utf8(xml.finish()).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <root a=\"x&amp;y\" on=\"1\">1 &lt; 2<child/></root>"
        );
    }
}
