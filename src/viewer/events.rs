//! Pointer event routing for `GridView`.
//!
//! A gesture starts on pointer-down over a matching region, is fed every
//! pointer-move in arrival order, and ends on pointer-up or cancel. While one
//! gesture is active, pointer-down does not start another.

use super::GridView;
use crate::interaction::{GridCallbacks, InteractionKind};
use crate::layout::ViewportX;
use crate::types::ResolvedRegion;

impl GridView {
    /// Handle pointer-down at viewport `(x, y)`.
    ///
    /// Tries, in order, a column resize, a freeze drag and a selection change.
    pub fn pointer_down(
        &mut self,
        x: f32,
        y: f32,
        callbacks: &mut dyn GridCallbacks,
    ) -> ResolvedRegion {
        let region = self.resolve(x, y);
        if let Some(active) = self.active_interaction() {
            tracing::debug!(?active, "pointer down ignored while a gesture is active");
            return region;
        }
        self.hover = None;

        if self.resize.begin(&region, &self.coords) {
            return region;
        }
        if self.freeze.begin(&region, &self.coords) {
            return region;
        }
        if self.selection.begin(&region, &self.coords) {
            callbacks.on_selection_change(self.selection.selection());
        }
        region
    }

    /// Handle pointer-move at viewport `(x, y)`.
    pub fn pointer_move(
        &mut self,
        x: f32,
        y: f32,
        callbacks: &mut dyn GridCallbacks,
    ) -> ResolvedRegion {
        let region = self.resolve(x, y);
        match self.active_interaction() {
            Some(InteractionKind::Resize) => {
                if let Some((col, width)) = self.resize.update(ViewportX(x)) {
                    callbacks.on_resize_preview(col, width);
                }
            }
            Some(InteractionKind::Freeze) => {
                self.freeze
                    .update(ViewportX(x), self.scroll.scroll_left, &self.coords);
            }
            Some(InteractionKind::Selection) => {
                if self.selection.update(&region) {
                    callbacks.on_selection_change(self.selection.selection());
                }
            }
            None => {
                self.resize.update_hover(&region);
                self.hover = Some(region);
            }
        }
        region
    }

    /// Handle pointer-up: commit whichever gesture is active.
    ///
    /// Idempotent when no gesture is active.
    pub fn pointer_up(&mut self, callbacks: &mut dyn GridCallbacks) {
        self.resize
            .end(|col, width| callbacks.on_column_resize(col, width));
        self.freeze
            .end(|count| callbacks.on_column_freeze_change(count));
        self.selection.end();
    }

    /// Abandon any active gesture without committing.
    pub fn cancel(&mut self) {
        self.resize.cancel();
        self.freeze.cancel();
        self.selection.end();
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::{Column, CombinedSelection, GridConfig, GridTheme, RegionType};

    #[derive(Default)]
    struct Recorder {
        resizes: Vec<(usize, f32)>,
        freezes: Vec<usize>,
        previews: usize,
        selections: usize,
    }

    impl GridCallbacks for Recorder {
        fn on_column_resize(&mut self, column_index: usize, width: f32) {
            self.resizes.push((column_index, width));
        }

        fn on_column_freeze_change(&mut self, freeze_column_count: usize) {
            self.freezes.push(freeze_column_count);
        }

        fn on_resize_preview(&mut self, _column_index: usize, _width: f32) {
            self.previews += 1;
        }

        fn on_selection_change(&mut self, _selection: &CombinedSelection) {
            self.selections += 1;
        }
    }

    fn view() -> GridView {
        GridView::new(GridConfig {
            columns: vec![
                Column::new("a", 100.0),
                Column::new("b", 80.0),
                Column::new("c", 80.0),
            ],
            freeze_column_count: 1,
            row_count: 10,
            header_height: 24.0,
            theme: GridTheme::standard(),
            ..GridConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_resize_gesture() {
        let mut view = view();
        let mut rec = Recorder::default();
        let down = view.pointer_down(179.0, 10.0, &mut rec);
        assert_eq!(down.region_type, RegionType::ColumnResizeHandler);
        assert_eq!(view.active_interaction(), Some(InteractionKind::Resize));
        view.pointer_move(200.0, 10.0, &mut rec);
        view.pointer_move(220.0, 10.0, &mut rec);
        assert!(rec.resizes.is_empty());
        assert_eq!(rec.previews, 2);
        view.pointer_up(&mut rec);
        assert_eq!(rec.resizes, vec![(1, 121.0)]);
        assert_eq!(view.active_interaction(), None);
        // Geometry is untouched until the owner applies the commit
        assert_eq!(view.coords().column_width(1), 80.0);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut view = view();
        let mut rec = Recorder::default();
        view.pointer_down(179.0, 10.0, &mut rec);
        view.pointer_down(50.0, 60.0, &mut rec);
        assert_eq!(view.active_interaction(), Some(InteractionKind::Resize));
        assert_eq!(rec.selections, 0);
    }

    #[test]
    fn test_cancel_commits_nothing() {
        let mut view = view();
        let mut rec = Recorder::default();
        view.pointer_down(179.0, 10.0, &mut rec);
        view.pointer_move(260.0, 10.0, &mut rec);
        view.cancel();
        view.pointer_up(&mut rec);
        assert!(rec.resizes.is_empty());
    }

    #[test]
    fn test_hover_tracks_resize_handle() {
        let mut view = view();
        let mut rec = Recorder::default();
        view.pointer_move(179.0, 10.0, &mut rec);
        assert!(view.is_resize_handle_hovered());
        assert_eq!(view.cursor(), "col-resize");
        view.pointer_move(140.0, 10.0, &mut rec);
        assert!(!view.is_resize_handle_hovered());
    }
}
