//! Card vector scene: a tiny retained model plus its SVG serialization.

pub(crate) mod model;
pub(crate) mod svg;
