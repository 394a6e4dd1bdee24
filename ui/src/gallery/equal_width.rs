use gallery_core::{
    Anchor, EqualWidthRow, Measurable, Point, Proposal, Rect, Size,
};
use gpui::{div, prelude::*, px, rgb, Context, Window};

use crate::components::widgets::header_chip;

const LABELS: [&str; 3] = ["Save", "Don't Save", "Restore All Defaults"];

/// A text chip measured by rough character metrics. The demo only needs
/// relative widths, not shaped text.
struct LabelChip {
    label: &'static str,
}

impl Measurable for LabelChip {
    fn size_that_fits(&self, _proposal: Proposal) -> Size {
        Size::new(self.label.chars().count() as f32 * 8.0 + 28.0, 36.0)
    }
}

/// Resolves every chip's frame from the packer's center-anchored
/// placements. Returns the row's total size and one frame per label.
fn chip_frames(row: EqualWidthRow, labels: &[&'static str]) -> (Size, Vec<Rect>) {
    let items: Vec<LabelChip> = labels.iter().map(|&label| LabelChip { label }).collect();
    let cache = row.make_cache(&items);
    let total = row.size_that_fits(items.len(), &cache);

    let mut frames = Vec::with_capacity(items.len());
    row.place(
        &items,
        Rect::new(Point::ZERO, total),
        &cache,
        |_, placement| {
            debug_assert_eq!(placement.anchor, Anchor::Center);
            let width = placement.proposal.width.unwrap_or(0.0);
            let height = placement.proposal.height.unwrap_or(0.0);
            frames.push(Rect::new(
                Point::new(
                    placement.origin.x - width / 2.0,
                    placement.origin.y - height / 2.0,
                ),
                Size::new(width, height),
            ));
        },
    );

    (total, frames)
}

/// Equal-width row demo: the same labels rendered at their natural widths
/// and through the packer, which widens every chip to the widest one.
pub struct EqualWidthDemo {
    row: EqualWidthRow,
}

impl EqualWidthDemo {
    pub fn new() -> Self {
        Self {
            row: EqualWidthRow::new(12.0),
        }
    }
}

impl Render for EqualWidthDemo {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let (total, frames) = chip_frames(self.row, &LABELS);

        let natural_row = div()
            .flex()
            .gap_3()
            .children(LABELS.iter().map(|&label| {
                div()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .bg(rgb(0x1f2937))
                    .border_1()
                    .border_color(rgb(0x374151))
                    .text_sm()
                    .text_color(rgb(0xe5e7eb))
                    .child(label)
            }));

        let equalized_row = div()
            .relative()
            .w(px(total.width))
            .h(px(total.height))
            .children(frames.iter().zip(LABELS.iter()).map(|(frame, &label)| {
                div()
                    .absolute()
                    .left(px(frame.min_x()))
                    .top(px(frame.min_y()))
                    .w(px(frame.size.width))
                    .h(px(frame.size.height))
                    .rounded_md()
                    .bg(rgb(0xb45309))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_sm()
                    .text_color(gpui::white())
                    .child(label)
            }));

        let toolbar = div()
            .flex()
            .items_center()
            .gap_2()
            .px_3()
            .py_2()
            .bg(rgb(0x0f172a))
            .border_b_1()
            .border_color(rgb(0x1f2937))
            .child(div().text_sm().text_color(rgb(0x9ca3af)).child("Equal Width Row"))
            .child(div().flex_1())
            .child(header_chip(format!("row {:.0} x {:.0}", total.width, total.height)))
            .child(header_chip(format!("gap {:.0}", self.row.spacing)));

        div()
            .flex()
            .flex_col()
            .w_full()
            .h_full()
            .child(toolbar)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap_8()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(div().text_xs().text_color(rgb(0x9ca3af)).child("natural widths"))
                            .child(natural_row),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(div().text_xs().text_color(rgb(0x9ca3af)).child("equalized"))
                            .child(equalized_row),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_share_the_widest_label_width() {
        let (total, frames) = chip_frames(EqualWidthRow::new(12.0), &LABELS);

        let widest = LabelChip {
            label: "Restore All Defaults",
        }
        .size_that_fits(Proposal::UNSPECIFIED)
        .width;

        assert_eq!(frames.len(), 3);
        for frame in &frames {
            assert_eq!(frame.size.width, widest);
        }
        assert_eq!(total.width, widest * 3.0 + 24.0);
    }

    #[test]
    fn frames_are_spaced_by_the_row_gap() {
        let (_, frames) = chip_frames(EqualWidthRow::new(12.0), &LABELS);
        let gap = frames[1].min_x() - (frames[0].min_x() + frames[0].size.width);
        assert_eq!(gap, 12.0);
    }
}
