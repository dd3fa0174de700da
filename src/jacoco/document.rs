//! JaCoCo report document model
//!
//! Materializes the XML report into a node tree so callers can navigate
//! it: root lookup, tag search in document order, and node-local
//! attribute and counter access.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use super::Counter;

/// One element of the report document
#[derive(Debug, Clone)]
pub struct ReportNode {
    pub tag: String,
    attributes: Vec<(String, String)>,
    pub children: Vec<ReportNode>,
}

impl ReportNode {
    /// Attribute value, or `MissingAttribute` if the element lacks it
    pub fn attribute(&self, name: &str) -> Result<&str> {
        self.get_attribute(name)
            .ok_or_else(|| Error::MissingAttribute {
                tag: self.tag.clone(),
                attribute: name.to_string(),
            })
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First counter of the given kind attached directly to this node,
    /// not inherited from ancestors or children. Absence is a normal
    /// outcome, not an error.
    pub fn counter(&self, kind: &str) -> Result<Option<Counter>> {
        let counter = self
            .children
            .iter()
            .find(|child| child.tag == "counter" && child.get_attribute("type") == Some(kind));

        match counter {
            Some(node) => Ok(Some(Counter {
                covered: parse_count(node, "covered")?,
                missed: parse_count(node, "missed")?,
            })),
            None => Ok(None),
        }
    }
}

fn parse_count(node: &ReportNode, attribute: &'static str) -> Result<u64> {
    let value = node.get_attribute(attribute).unwrap_or_default();
    value
        .parse::<u64>()
        .map_err(|_| Error::InvalidCounterValue {
            attribute,
            value: value.to_string(),
        })
}

/// A parsed report document
#[derive(Debug, Clone)]
pub struct ReportDocument {
    root: Option<ReportNode>,
}

impl ReportDocument {
    /// Build the node tree from XML content
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<ReportNode> = Vec::new();
        let mut root: Option<ReportNode> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(node_from_element(e));
                }
                Ok(Event::Empty(ref e)) => {
                    attach(&mut stack, &mut root, node_from_element(e));
                }
                Ok(Event::End(_)) => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
        }

        Ok(ReportDocument { root })
    }

    /// The single top-level element of the document
    pub fn root(&self) -> Result<&ReportNode> {
        self.root.as_ref().ok_or(Error::MalformedDocument)
    }

    /// Every node with the given tag anywhere in the tree, in document
    /// order. Empty when none exist.
    pub fn find_all(&self, tag: &str) -> Vec<&ReportNode> {
        let mut found = Vec::new();
        if let Some(root) = &self.root {
            collect(root, tag, &mut found);
        }
        found
    }
}

fn collect<'a>(node: &'a ReportNode, tag: &str, found: &mut Vec<&'a ReportNode>) {
    if node.tag == tag {
        found.push(node);
    }
    for child in &node.children {
        collect(child, tag, found);
    }
}

fn attach(stack: &mut Vec<ReportNode>, root: &mut Option<ReportNode>, node: ReportNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

fn node_from_element(e: &BytesStart) -> ReportNode {
    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let attributes = e
        .attributes()
        .filter_map(|a| a.ok())
        .map(|attr| {
            (
                String::from_utf8_lossy(attr.key.as_ref()).to_string(),
                String::from_utf8_lossy(&attr.value).to_string(),
            )
        })
        .collect();

    ReportNode {
        tag,
        attributes,
        children: Vec::new(),
    }
}
