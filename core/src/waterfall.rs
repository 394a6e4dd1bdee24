//! Multi-column waterfall (masonry) layout: each item goes into the column
//! that is currently shortest.

use crate::types::{Anchor, Measurable, Placement, Point, Proposal, Rect, Size};

/// Waterfall packer configuration. `columns` must be at least 1; passing 0
/// is a caller contract violation, not a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterfallLayout {
    pub columns: usize,
    pub spacing: f32,
}

impl Default for WaterfallLayout {
    fn default() -> Self {
        Self {
            columns: 2,
            spacing: 0.0,
        }
    }
}

/// Per-pass geometry cache: one origin per item, the shared column width,
/// and the height of the tallest column. Valid only for the exact
/// `(items, proposal)` pair that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaterfallGeometry {
    pub origins: Vec<Point>,
    pub column_width: f32,
    pub height: f32,
}

impl WaterfallLayout {
    pub fn new(columns: usize, spacing: f32) -> Self {
        Self { columns, spacing }
    }

    /// Runs the greedy packing pass. This is the classic multiprocessor
    /// scheduling heuristic: O(n * columns), deterministic, not globally
    /// optimal. An undefined proposal width or an empty item set yields an
    /// empty geometry.
    pub fn calculate_geometry<T: Measurable>(
        &self,
        items: &[T],
        proposal: Proposal,
    ) -> WaterfallGeometry {
        let Some(width) = proposal.width else {
            return WaterfallGeometry::default();
        };
        if items.is_empty() {
            return WaterfallGeometry::default();
        }

        let columns = self.columns;
        let column_width = (width - (columns as f32 - 1.0) * self.spacing) / columns as f32;
        let column_x: Vec<f32> = (0..columns)
            .map(|index| index as f32 * (column_width + self.spacing))
            .collect();

        let mut heights = vec![0.0f32; columns];
        let mut origins = Vec::with_capacity(items.len());
        let mut max_height = 0.0f32;

        for item in items {
            let item_height = item
                .size_that_fits(Proposal::width_only(column_width))
                .height;

            // Strictly-less comparison in index order: ties go to the
            // lowest-indexed column.
            let mut selected = 0;
            for index in 1..columns {
                if heights[index] < heights[selected] {
                    selected = index;
                }
            }

            origins.push(Point::new(column_x[selected], heights[selected]));
            heights[selected] += item_height;
            max_height = max_height.max(heights[selected]);
        }

        WaterfallGeometry {
            origins,
            column_width,
            height: max_height,
        }
    }

    /// Container size for a computed geometry: the proposed width and the
    /// tallest column's height. Empty geometry reports zero.
    pub fn size_that_fits(&self, geometry: &WaterfallGeometry, proposal: Proposal) -> Size {
        if geometry.origins.is_empty() {
            return Size::ZERO;
        }
        Size::new(proposal.width.unwrap_or(0.0), geometry.height)
    }

    /// Replays the cached origins as top-leading placements, proposing the
    /// column width to every item.
    pub fn place<F>(&self, bounds: Rect, geometry: &WaterfallGeometry, mut place: F)
    where
        F: FnMut(usize, Placement),
    {
        let proposal = Proposal::width_only(geometry.column_width);
        for (index, origin) in geometry.origins.iter().enumerate() {
            // The bounds origin is not always (0, 0).
            place(
                index,
                Placement {
                    origin: Point::new(bounds.min_x() + origin.x, bounds.min_y() + origin.y),
                    anchor: Anchor::TopLeft,
                    proposal,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FixedSize;

    fn items(heights: &[f32]) -> Vec<FixedSize> {
        heights.iter().map(|&h| FixedSize::from_height(h)).collect()
    }

    #[test]
    fn two_columns_no_spacing_scenario() {
        let layout = WaterfallLayout::new(2, 0.0);
        let items = items(&[10.0, 20.0, 30.0]);
        let geometry = layout.calculate_geometry(&items, Proposal::width_only(100.0));

        assert_eq!(geometry.column_width, 50.0);
        assert_eq!(geometry.origins[0], Point::new(0.0, 0.0));
        assert_eq!(geometry.origins[1], Point::new(50.0, 0.0));
        // Column 0 (height 10) is shorter than column 1 (height 20).
        assert_eq!(geometry.origins[2], Point::new(0.0, 10.0));
        assert_eq!(geometry.height, 40.0);

        let size = layout.size_that_fits(&geometry, Proposal::width_only(100.0));
        assert_eq!(size, Size::new(100.0, 40.0));
    }

    #[test]
    fn ties_go_to_the_lowest_column_index() {
        let layout = WaterfallLayout::new(2, 0.0);
        let items = items(&[5.0]);
        let geometry = layout.calculate_geometry(&items, Proposal::width_only(80.0));

        // Both columns start at height 0; the first item must land in
        // column 0.
        assert_eq!(geometry.origins[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn every_item_lands_in_exactly_one_column() {
        let layout = WaterfallLayout::new(3, 4.0);
        let heights: Vec<f32> = (0..40).map(|i| 10.0 + (i % 7) as f32 * 13.0).collect();
        let items = items(&heights);
        let geometry = layout.calculate_geometry(&items, Proposal::width_only(300.0));

        let column_x: Vec<f32> = (0..3)
            .map(|k| k as f32 * (geometry.column_width + 4.0))
            .collect();
        let mut accumulated = vec![0.0f32; 3];
        for (index, origin) in geometry.origins.iter().enumerate() {
            let column = column_x
                .iter()
                .position(|&x| (x - origin.x).abs() < 1e-4)
                .expect("origin x must match a column x");
            assert!((accumulated[column] - origin.y).abs() < 1e-3);
            accumulated[column] += heights[index];
        }

        let tallest = accumulated.iter().fold(0.0f32, |a, &b| a.max(b));
        assert!((geometry.height - tallest).abs() < 1e-3);
    }

    #[test]
    fn spacing_shrinks_columns_and_offsets_origins() {
        let layout = WaterfallLayout::new(2, 10.0);
        let items = items(&[10.0, 10.0]);
        let geometry = layout.calculate_geometry(&items, Proposal::width_only(110.0));

        assert_eq!(geometry.column_width, 50.0);
        assert_eq!(geometry.origins[1], Point::new(60.0, 0.0));
    }

    #[test]
    fn undefined_width_or_empty_items_produce_nothing() {
        let layout = WaterfallLayout::default();

        let geometry = layout.calculate_geometry(&items(&[10.0]), Proposal::UNSPECIFIED);
        assert_eq!(geometry, WaterfallGeometry::default());
        assert_eq!(
            layout.size_that_fits(&geometry, Proposal::UNSPECIFIED),
            Size::ZERO
        );

        let empty: Vec<FixedSize> = Vec::new();
        let geometry = layout.calculate_geometry(&empty, Proposal::width_only(100.0));
        assert!(geometry.origins.is_empty());

        let mut called = false;
        layout.place(Rect::default(), &geometry, |_, _| called = true);
        assert!(!called);
    }

    #[test]
    fn placements_are_offset_by_the_bounds_origin() {
        let layout = WaterfallLayout::new(2, 0.0);
        let items = items(&[10.0, 20.0]);
        let geometry = layout.calculate_geometry(&items, Proposal::width_only(100.0));
        let bounds = Rect::new(Point::new(7.0, 11.0), Size::new(100.0, 20.0));

        let mut placements = Vec::new();
        layout.place(bounds, &geometry, |index, placement| {
            placements.push((index, placement));
        });

        assert_eq!(placements[0].1.origin, Point::new(7.0, 11.0));
        assert_eq!(placements[0].1.anchor, Anchor::TopLeft);
        assert_eq!(placements[1].1.origin, Point::new(57.0, 11.0));
        assert_eq!(
            placements[0].1.proposal,
            Proposal::width_only(geometry.column_width)
        );
    }
}
