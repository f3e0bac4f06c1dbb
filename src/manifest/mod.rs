//! Manifest parsing and resource extraction.
//!
//! A METS manifest describes a digital object as one or more file groups,
//! discriminated by their `USE` attribute. This module extracts the
//! `(ID, href)` pairs of a single file group into an ordered list of
//! [`Resource`] values, resolving namespace prefixes from the declarations on
//! the manifest's root element so the selection works with whatever prefixes
//! the manifest author chose.
//!
//! # Examples
//!
//! ```rust
//! use metsfetch::manifest::extract_resources;
//!
//! # fn main() -> Result<(), metsfetch::Error> {
//! let xml = r#"<?xml version="1.0"?>
//! <mets:mets xmlns:mets="http://www.loc.gov/METS/"
//!            xmlns:xlink="http://www.w3.org/1999/xlink">
//!   <mets:fileSec>
//!     <mets:fileGrp USE="DEFAULT">
//!       <mets:file ID="DEFAULT_page001">
//!         <mets:FLocat xlink:href="http://example.com/page001.jpg"/>
//!       </mets:file>
//!     </mets:fileGrp>
//!   </mets:fileSec>
//! </mets:mets>"#;
//!
//! let resources = extract_resources(xml, "DEFAULT")?;
//! assert_eq!(resources.len(), 1);
//! assert_eq!(resources[0].id, "DEFAULT_page001");
//! # Ok(())
//! # }
//! ```

pub(crate) mod parser;
pub(crate) mod resource;

pub use parser::{extract_resources, METS_NS, XLINK_NS};
pub use resource::Resource;
