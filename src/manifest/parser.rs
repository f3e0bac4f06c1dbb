//! Namespace-aware extraction of file entries from a METS manifest.
//!
//! Extraction runs in two phases. First the `xmlns:<prefix>` declarations on
//! the manifest's root element are collected into a prefix-to-URI map and
//! checked for the expected URIs. Then file entries are selected by namespace
//! URI, so a manifest using `<m:fileGrp>` is treated exactly like one using
//! `<mets:fileGrp>` as long as the URIs match.

use crate::error::{Error, Result};
use crate::manifest::resource::Resource;

use roxmltree::{Document, Node};
use std::collections::HashMap;
use tracing::debug;

/// Namespace URI of the Metadata Encoding & Transmission Standard.
pub const METS_NS: &str = "http://www.loc.gov/METS/";

/// Namespace URI of the XLink attributes carrying the file locations.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Extracts the resources of the file group selected by `use_attrib`.
///
/// `use_attrib` is matched exactly and case-sensitively against the `USE`
/// attribute of the manifest's file groups; callers are expected to have
/// normalized it to upper case already (the [`FetcherBuilder`] does this for
/// the download side).
///
/// Resources are returned in document order. An empty result is not an error
/// here: the manifest may legitimately carry no matching group, and the
/// caller decides whether that is a usage error ([`Error::EmptySelection`]).
///
/// A file entry missing its `ID` attribute, or whose first child element
/// carries no `xlink:href`, aborts the whole extraction.
///
/// [`FetcherBuilder`]: crate::fetcher::FetcherBuilder
pub fn extract_resources(xml: &str, use_attrib: &str) -> Result<Vec<Resource>> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    // Phase one: namespace bindings declared on the root element.
    let bindings = declared_namespaces(&root);
    debug!("Manifest declares {} namespace binding(s)", bindings.len());
    for required in [METS_NS, XLINK_NS] {
        if !bindings.values().any(|uri| *uri == required) {
            return Err(Error::MissingNamespace(required));
        }
    }

    // Phase two: select the file entries of the matching group(s) by URI.
    let mut resources = Vec::new();
    for group in root
        .descendants()
        .filter(|n| is_mets_element(n, "fileGrp"))
        .filter(|n| n.attribute("USE") == Some(use_attrib))
    {
        for file in group.children().filter(|n| is_mets_element(n, "file")) {
            resources.push(read_file_entry(&file)?);
        }
    }

    debug!(
        "Extracted {} resource(s) for USE=\"{}\"",
        resources.len(),
        use_attrib
    );
    Ok(resources)
}

/// Collect the `xmlns:<prefix>` declarations of the root element.
///
/// The default namespace declaration, if any, is recorded under the empty
/// prefix.
fn declared_namespaces(root: &Node) -> HashMap<String, String> {
    root.namespaces()
        .map(|ns| (ns.name().unwrap_or("").to_string(), ns.uri().to_string()))
        .collect()
}

fn is_mets_element(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(METS_NS)
        && node.tag_name().name() == name
}

/// Read one `file` element into a [`Resource`].
///
/// The URL comes from the `xlink:href` attribute of the first child element
/// (the file location element).
fn read_file_entry(file: &Node) -> Result<Resource> {
    let id = file
        .attribute("ID")
        .ok_or(Error::MissingAttribute { attribute: "ID" })?;

    let href = file
        .first_element_child()
        .and_then(|locat| locat.attribute((XLINK_NS, "href")))
        .ok_or(Error::MissingAttribute {
            attribute: "xlink:href",
        })?;

    Ok(Resource::new(id, href))
}
