use crate::{Constraints, PanelRect, Size};

/// The host layout/render system, as seen by the pager.
///
/// The pager does not own panels, canvases or bitmaps. It is handed a `&mut impl PanelHost<K>`
/// whenever an operation needs to lay out, draw, toggle caches or touch focus, and addresses
/// panels only by their key `K`.
pub trait PanelHost<K> {
    /// Measures a panel. The reported width is the panel's natural width in the strip.
    fn measure(&mut self, panel: &K, constraints: Constraints) -> Size;

    /// Hidden panels take no space in the strip.
    fn is_hidden(&self, panel: &K) -> bool {
        let _ = panel;
        false
    }

    /// Places a panel in content coordinates.
    fn position(&mut self, panel: &K, rect: PanelRect);

    /// Draws a panel live at its laid-out position.
    fn render_panel(&mut self, panel: &K, time_ms: u64);

    /// Draws the panel's cached bitmap at content coordinates `(x, y)`.
    ///
    /// Only called for panels whose cache has been enabled through [`Self::enable_cache`].
    fn draw_cached_bitmap(&mut self, panel: &K, x: i64, y: i64);

    fn enable_cache(&mut self, panel: &K, enabled: bool);

    /// Index of the panel that contains the focused descendant, if any.
    fn focused_panel(&self) -> Option<usize> {
        None
    }

    fn clear_focus(&mut self, panel: &K) {
        let _ = panel;
    }
}
