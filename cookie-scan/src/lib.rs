//! Read named values out of raw HTTP `Cookie` headers.
//!
//! The scan is a single left-to-right pass over the `;`-delimited header
//! string: leading spaces are stripped from each segment, the first segment
//! starting with `name=` wins, and the stored text is returned exactly as
//! it appears. Nothing here sets, expires, or percent-decodes cookies.

pub mod header;
pub mod lookup;

pub use header::find_in_headers;
pub use lookup::{find, lookup, segments, Segments};
