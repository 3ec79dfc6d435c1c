//! Region Renderer Port - markdown to displayable HTML.

use crate::domain::notes::RenderedRegion;

/// Port for turning generated markdown into the rendered region.
///
/// Rendering is synchronous and infallible: any markdown renders to some
/// HTML, possibly empty.
pub trait RegionRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> RenderedRegion;
}
