//! Horizontal stack whose children all get the width of the widest child.

use crate::types::{Anchor, Measurable, Placement, Point, Proposal, Rect, Size};

/// Sizing results memoized for one layout pass. Valid only for the item set
/// that produced it; recompute whenever the items change.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCache {
    /// Component-wise maximum over every item's ideal size.
    pub max_size: Size,
    /// Preferred gap after each item. The last entry is always zero.
    pub spacing: Vec<f32>,
    pub total_spacing: f32,
}

/// Builds the sizing cache, asking `gap` for the preferred distance between
/// item `i` and item `i + 1`. Gaps are passed through unclamped, negative
/// values included.
pub fn make_cache<T, F>(items: &[T], gap: F) -> RowCache
where
    T: Measurable,
    F: Fn(usize) -> f32,
{
    let max_size = items.iter().fold(Size::ZERO, |current_max, item| {
        let size = item.size_that_fits(Proposal::UNSPECIFIED);
        Size::new(
            current_max.width.max(size.width),
            current_max.height.max(size.height),
        )
    });

    let spacing: Vec<f32> = (0..items.len())
        .map(|index| {
            if index + 1 < items.len() {
                gap(index)
            } else {
                0.0
            }
        })
        .collect();
    let total_spacing = spacing.iter().sum();

    RowCache {
        max_size,
        spacing,
        total_spacing,
    }
}

/// Equal-width horizontal packer with a uniform preferred gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualWidthRow {
    pub spacing: f32,
}

impl Default for EqualWidthRow {
    fn default() -> Self {
        Self { spacing: 0.0 }
    }
}

impl EqualWidthRow {
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    pub fn make_cache<T: Measurable>(&self, items: &[T]) -> RowCache {
        make_cache(items, |_| self.spacing)
    }

    /// Total container size for `count` items under `cache`:
    /// `(max_width * count + total_spacing, max_height)`.
    pub fn size_that_fits(&self, count: usize, cache: &RowCache) -> Size {
        Size::new(
            cache.max_size.width * count as f32 + cache.total_spacing,
            cache.max_size.height,
        )
    }

    /// Hands every item a center-anchored placement: vertically centered in
    /// `bounds`, advancing horizontally by the shared width plus the cached
    /// gap. Empty item sets produce no callbacks.
    pub fn place<T, F>(&self, items: &[T], bounds: Rect, cache: &RowCache, mut place: F)
    where
        T: Measurable,
        F: FnMut(usize, Placement),
    {
        if items.is_empty() {
            return;
        }

        let max_size = cache.max_size;
        let proposal = Proposal::new(max_size.width, max_size.height);
        let mut next_x = bounds.min_x() + max_size.width / 2.0;

        for index in 0..items.len() {
            place(
                index,
                Placement {
                    origin: Point::new(next_x, bounds.mid_y()),
                    anchor: Anchor::Center,
                    proposal,
                },
            );
            next_x += max_size.width + cache.spacing[index];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FixedSize;

    fn items(sizes: &[(f32, f32)]) -> Vec<FixedSize> {
        sizes
            .iter()
            .map(|&(w, h)| FixedSize(Size::new(w, h)))
            .collect()
    }

    #[test]
    fn width_is_max_width_times_count_plus_spacing() {
        let row = EqualWidthRow::new(10.0);
        let items = items(&[(40.0, 20.0), (90.0, 30.0), (60.0, 25.0)]);
        let cache = row.make_cache(&items);

        assert_eq!(cache.max_size, Size::new(90.0, 30.0));
        assert_eq!(cache.spacing, vec![10.0, 10.0, 0.0]);
        assert_eq!(cache.total_spacing, 20.0);

        let size = row.size_that_fits(items.len(), &cache);
        assert_eq!(size, Size::new(90.0 * 3.0 + 20.0, 30.0));
    }

    #[test]
    fn every_item_gets_the_shared_width() {
        let row = EqualWidthRow::new(8.0);
        let items = items(&[(40.0, 20.0), (90.0, 30.0)]);
        let cache = row.make_cache(&items);

        let mut proposals = Vec::new();
        row.place(
            &items,
            Rect::new(Point::ZERO, row.size_that_fits(items.len(), &cache)),
            &cache,
            |_, placement| proposals.push(placement.proposal),
        );

        assert_eq!(proposals.len(), 2);
        for proposal in proposals {
            assert_eq!(proposal, Proposal::new(90.0, 30.0));
        }
    }

    #[test]
    fn placements_advance_by_width_plus_gap_and_center_vertically() {
        let row = EqualWidthRow::new(10.0);
        let items = items(&[(50.0, 20.0), (30.0, 40.0)]);
        let cache = row.make_cache(&items);
        let bounds = Rect::new(Point::new(100.0, 200.0), Size::new(110.0, 40.0));

        let mut placements = Vec::new();
        row.place(&items, bounds, &cache, |index, placement| {
            placements.push((index, placement));
        });

        // Shared size is 50x40; first center at min_x + 25, both at mid_y.
        assert_eq!(placements[0].1.origin, Point::new(125.0, 220.0));
        assert_eq!(placements[0].1.anchor, Anchor::Center);
        assert_eq!(placements[1].1.origin, Point::new(185.0, 220.0));
    }

    #[test]
    fn empty_items_yield_zero_size_and_no_placements() {
        let row = EqualWidthRow::default();
        let items: Vec<FixedSize> = Vec::new();
        let cache = row.make_cache(&items);

        assert_eq!(cache.max_size, Size::ZERO);
        assert_eq!(row.size_that_fits(0, &cache), Size::ZERO);

        let mut called = false;
        row.place(&items, Rect::default(), &cache, |_, _| called = true);
        assert!(!called);
    }

    #[test]
    fn per_pair_gap_function_and_negative_spacing_pass_through() {
        let items = items(&[(10.0, 10.0), (10.0, 10.0), (10.0, 10.0)]);
        let cache = make_cache(&items, |index| if index == 0 { -4.0 } else { 6.0 });

        assert_eq!(cache.spacing, vec![-4.0, 6.0, 0.0]);
        assert_eq!(cache.total_spacing, 2.0);
    }
}
