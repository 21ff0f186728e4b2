//! Layout utilities

mod layout_probe;

pub use layout_probe::{LayoutProbe, SurfaceBounds};
