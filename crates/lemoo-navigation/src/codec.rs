//! XML codec for navigation files.
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8" standalone="yes"?>
//! <Navigation>
//!   <NavigationItems>
//!     <Item Title="Files" Icon="&#xE8A5;" IsExpanded="true">
//!       <Children>
//!         <Item Title="Home" Icon="&#xE80F;" PageKey="Home"/>
//!       </Children>
//!     </Item>
//!   </NavigationItems>
//!   <BottomNavigationItems>
//!     <Item Title="Settings" Icon="&#xE713;" PageKey="Settings"/>
//!   </BottomNavigationItems>
//! </Navigation>
//! ```
//!
//! `IsExpanded` is true only for the literal `true`; `IsEnabled` is false only
//! for the literal `false`. Both are written only when they differ from that
//! default.

use std::borrow::Cow;
use std::path::Path;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::error::CodecError;
use crate::node::NavigationNode;

const ROOT: &str = "Navigation";
const PRIMARY_SECTION: &str = "NavigationItems";
const BOTTOM_SECTION: &str = "BottomNavigationItems";
const ITEM: &str = "Item";
const CHILDREN: &str = "Children";

const ATTR_TITLE: &str = "Title";
const ATTR_ICON: &str = "Icon";
const ATTR_PAGE_KEY: &str = "PageKey";
const ATTR_PAGE_TYPE: &str = "PageType";
const ATTR_IS_EXPANDED: &str = "IsExpanded";
const ATTR_IS_ENABLED: &str = "IsEnabled";

/// Primary and bottom forests, in that order.
pub type Forests = (Vec<NavigationNode>, Vec<NavigationNode>);

/// Load both forests from the navigation file at `path`.
///
/// # Errors
///
/// Returns [`CodecError::NotFound`] if the file does not exist,
/// [`CodecError::Malformed`] if it has no root element, and XML or I/O errors
/// otherwise.
pub fn load(path: &Path) -> Result<Forests, CodecError> {
    if !path.exists() {
        return Err(CodecError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    decode(&content)
}

/// Save both forests to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save(
    path: &Path,
    primary: &[NavigationNode],
    bottom: &[NavigationNode],
) -> Result<(), CodecError> {
    let content = encode(primary, bottom)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, content)?;
    Ok(())
}

/// Decode both forests from navigation XML.
///
/// Missing sections decode to empty forests. Items without a title are
/// dropped together with their children.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if the document has no root element,
/// or [`CodecError::Xml`] on syntax errors.
pub fn decode(content: &str) -> Result<Forests, CodecError> {
    let root = parse_document(content)?
        .ok_or_else(|| CodecError::Malformed("missing root element".to_owned()))?;

    let primary = root
        .child(PRIMARY_SECTION)
        .map(decode_items)
        .unwrap_or_default();
    let bottom = root
        .child(BOTTOM_SECTION)
        .map(decode_items)
        .unwrap_or_default();

    Ok((primary, bottom))
}

/// Encode both forests as navigation XML.
///
/// # Errors
///
/// Returns an error only if the XML writer fails.
pub fn encode(primary: &[NavigationNode], bottom: &[NavigationNode]) -> Result<String, CodecError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT)))?;
    write_section(&mut writer, PRIMARY_SECTION, primary)?;
    write_section(&mut writer, BOTTOM_SECTION, bottom)?;
    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err).into())
}

fn decode_items(container: &Element) -> Vec<NavigationNode> {
    container
        .children_named(ITEM)
        .filter_map(decode_item)
        .collect()
}

fn decode_item(element: &Element) -> Option<NavigationNode> {
    let Some(title) = element.attr(ATTR_TITLE).filter(|t| !t.trim().is_empty()) else {
        tracing::debug!("Dropping navigation item without title");
        return None;
    };

    let children = element
        .child(CHILDREN)
        .map(decode_items)
        .unwrap_or_default();

    Some(NavigationNode {
        title: title.to_owned(),
        icon: element.attr(ATTR_ICON).map(decode_icon).unwrap_or_default(),
        page_key: non_empty(element.attr(ATTR_PAGE_KEY)),
        page_type_name: non_empty(element.attr(ATTR_PAGE_TYPE)),
        is_expanded: element.attr(ATTR_IS_EXPANDED) == Some("true"),
        is_enabled: element.attr(ATTR_IS_ENABLED) != Some("false"),
        is_selected: false,
        children,
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

fn write_section<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    nodes: &[NavigationNode],
) -> Result<(), CodecError> {
    if nodes.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(name)))?;
    for node in nodes {
        write_item(writer, node)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_item<W: std::io::Write>(
    writer: &mut Writer<W>,
    node: &NavigationNode,
) -> Result<(), CodecError> {
    let mut element = BytesStart::new(ITEM);
    element.push_attribute((ATTR_TITLE, node.title.as_str()));

    if !node.icon.is_empty() {
        // Character references are written raw so the reader resolves them.
        element.push_attribute(Attribute {
            key: QName(ATTR_ICON.as_bytes()),
            value: Cow::Owned(encode_icon(&node.icon).into_bytes()),
        });
    }
    if let Some(page_key) = node.page_key.as_deref().filter(|k| !k.is_empty()) {
        element.push_attribute((ATTR_PAGE_KEY, page_key));
    }
    if let Some(page_type) = node.page_type_name.as_deref().filter(|t| !t.is_empty()) {
        element.push_attribute((ATTR_PAGE_TYPE, page_type));
    }
    if node.is_expanded {
        element.push_attribute((ATTR_IS_EXPANDED, "true"));
    }
    if !node.is_enabled {
        element.push_attribute((ATTR_IS_ENABLED, "false"));
    }

    if !node.has_children() {
        writer.write_event(Event::Empty(element))?;
        return Ok(());
    }

    writer.write_event(Event::Start(element))?;
    writer.write_event(Event::Start(BytesStart::new(CHILDREN)))?;
    for child in &node.children {
        write_item(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(CHILDREN)))?;
    writer.write_event(Event::End(BytesEnd::new(ITEM)))?;
    Ok(())
}

/// Encode an icon as hexadecimal character references.
///
/// Values already in `&#x..;` form are kept as they are.
fn encode_icon(icon: &str) -> String {
    if icon.starts_with("&#x") && icon.ends_with(';') {
        return icon.to_owned();
    }
    icon.chars().map(|c| format!("&#x{:X};", u32::from(c))).collect()
}

/// Resolve character references left in an attribute value.
///
/// The XML reader already resolves references written raw; this handles
/// values that were escaped a second time (`&amp;#xE8A5;`). Values that do
/// not unescape cleanly are kept verbatim.
fn decode_icon(value: &str) -> String {
    quick_xml::escape::unescape(value).map_or_else(|_| value.to_owned(), Cow::into_owned)
}

/// Minimal element tree used while decoding.
#[derive(Debug, Default)]
struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Self {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let attrs = start
            .attributes()
            .flatten()
            .map(|attr| {
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = attr.unescape_value().map_or_else(
                    |_| String::from_utf8_lossy(&attr.value).into_owned(),
                    Cow::into_owned,
                );
                (key, value)
            })
            .collect();

        Self {
            name,
            attrs,
            children: Vec::new(),
        }
    }

    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// Parse the document into an element tree rooted at its first element.
fn parse_document(content: &str) -> Result<Option<Element>, CodecError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let mut root = Element::from_start(&start);
                parse_children(&mut reader, &mut root)?;
                return Ok(Some(root));
            }
            Event::Empty(start) => return Ok(Some(Element::from_start(&start))),
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn parse_children(reader: &mut Reader<&[u8]>, parent: &mut Element) -> Result<(), CodecError> {
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let mut child = Element::from_start(&start);
                parse_children(reader, &mut child)?;
                parent.children.push(child);
            }
            Event::Empty(start) => parent.children.push(Element::from_start(&start)),
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(CodecError::Malformed(format!(
                    "unexpected end of document inside <{}>",
                    parent.name
                )));
            }
            _ => {}
        }
    }
}
