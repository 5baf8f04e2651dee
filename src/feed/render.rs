//! RSS 1.0 document writer
//!
//! The layout is fixed: header, channel, optional image, items, footer.
//! Line breaks sit exactly where historical RSS 1.0 output put them so that
//! documents stay byte-comparable with feeds produced before.

use std::borrow::Cow;

use quick_xml::escape::escape;

use super::types::{ChannelInfo, ImageInfo, Item};
use crate::config::{Escaping, RenderConfig};

/// RDF syntax namespace, bound to the `rdf` prefix
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RSS 1.0 namespace, the document's default namespace
pub const RSS_NAMESPACE: &str = "http://purl.org/rss/1.0/";

/// Borrowed view of builder state for one render pass
pub(crate) struct Document<'a> {
    pub channel: Option<&'a ChannelInfo>,
    pub image: Option<&'a ImageInfo>,
    pub items: &'a [Item],
    pub config: RenderConfig,
}

impl Document<'_> {
    pub(crate) fn render(&self) -> String {
        let mut out = String::with_capacity(self.size_hint());
        self.write_header(&mut out);
        self.write_channel(&mut out);
        self.write_image(&mut out);
        self.write_items(&mut out);
        out.push_str("</rdf:RDF>");
        out
    }

    fn size_hint(&self) -> usize {
        512 + self.items.len() * 256
    }

    fn field<'v>(&self, value: &'v str) -> Cow<'v, str> {
        match self.config.escaping {
            Escaping::None => Cow::Borrowed(value),
            Escaping::Xml => escape(value),
        }
    }

    fn write_header(&self, out: &mut String) {
        out.push_str("<?xml version=\"1.0\"?>\n");
        out.push_str("<rdf:RDF xmlns:rdf=\"");
        out.push_str(RDF_NAMESPACE);
        out.push_str("\" xmlns=\"");
        out.push_str(RSS_NAMESPACE);
        out.push_str("\">\n");
    }

    fn write_channel(&self, out: &mut String) {
        // Unset channel renders with empty fields
        let empty = ChannelInfo::default();
        let channel = self.channel.unwrap_or(&empty);

        out.push_str("<channel rdf:about=\"");
        out.push_str(&self.field(&channel.about));
        out.push_str("\">\n");
        self.write_element(out, "title", &channel.title);
        out.push('\n');
        self.write_element(out, "link", &channel.link);
        out.push('\n');
        self.write_element(out, "description", &channel.description);

        if let Some(image) = self.image {
            out.push_str("<image rdf:resource=\"");
            out.push_str(&self.field(&image.url));
            out.push_str("\"/>");
        }

        if !self.items.is_empty() {
            out.push_str(" <items>\n<rdf:Seq>");
            for item in self.items {
                out.push_str("<rdf:li resource=\"");
                out.push_str(&self.field(&item.link));
                out.push_str("\"/>");
            }
            out.push_str("</rdf:Seq>\n</items>\n");
        }

        out.push_str("</channel>\n");
    }

    fn write_image(&self, out: &mut String) {
        let Some(image) = self.image else {
            return;
        };

        out.push_str("<image rdf:about=\"");
        out.push_str(&self.field(&image.url));
        out.push_str("\">\n");
        self.write_element(out, "title", &image.title);
        out.push('\n');
        self.write_element(out, "link", &image.link);
        out.push('\n');
        self.write_element(out, "url", &image.url);
        out.push_str("\n</image>");
    }

    fn write_items(&self, out: &mut String) {
        for item in self.items {
            out.push_str("<item rdf:about=\"");
            out.push_str(&self.field(&item.link));
            out.push_str("\">\n");
            self.write_element(out, "title", &item.title);
            out.push('\n');
            self.write_element(out, "link", &item.link);
            out.push('\n');
            self.write_element(out, "description", &item.description);
            out.push_str("\n</item>");
        }
    }

    fn write_element(&self, out: &mut String, name: &str, value: &str) {
        out.push('<');
        out.push_str(name);
        out.push('>');
        out.push_str(&self.field(value));
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
}
