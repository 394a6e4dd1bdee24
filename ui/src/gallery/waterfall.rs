use gallery_core::{FixedSize, Proposal, Rect, WaterfallLayout};
use gpui::{
    div, prelude::*, px, rgb, Bounds, Context, Div, MouseButton, MouseDownEvent, Pixels, Window,
};

use crate::components::{
    button_effect,
    widgets::{header_chip, toolbar_button},
};
use crate::perf::{generate_block_heights, time_seed};

const BLOCK_COUNT: usize = 100;
const MAX_COLUMNS: usize = 5;

/// Waterfall layout demo: a scrollable wall of fixed-height blocks packed
/// by the greedy shortest-column algorithm, with a column-count picker and
/// a Randomize button.
pub struct WaterfallDemo {
    layout: WaterfallLayout,
    heights: Vec<f32>,
    content_bounds: Option<Bounds<Pixels>>,
}

impl WaterfallDemo {
    pub fn new(columns: usize, spacing: f32) -> Self {
        Self {
            layout: WaterfallLayout::new(columns, spacing),
            heights: generate_block_heights(BLOCK_COUNT, time_seed()),
            content_bounds: None,
        }
    }

    fn column_button(&self, columns: usize, cx: &mut Context<Self>) -> gpui::Stateful<Div> {
        let active = self.layout.columns == columns;
        let handler = cx.listener(move |this: &mut Self, _: &MouseDownEvent, window: &mut Window, _| {
            this.layout.columns = columns;
            window.refresh();
        });

        let bg_hex = if active { 0x1f2937 } else { 0x111827 };
        let button = toolbar_button(format!("{columns}"), active)
            .on_mouse_down(MouseButton::Left, handler)
            .id(columns);
        button_effect::apply(button, bg_hex)
    }
}

impl Render for WaterfallDemo {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let track_content_bounds =
            cx.processor(|this: &mut Self, bounds: Vec<Bounds<Pixels>>, window: &mut Window, _| {
                if let Some(first) = bounds.first() {
                    if this.content_bounds != Some(*first) {
                        this.content_bounds = Some(*first);
                        window.refresh();
                    }
                }
            });

        let layout = self.layout;
        let mut blocks: Vec<Div> = Vec::new();
        let mut content_height = 0.0f32;
        if let Some(bounds) = self.content_bounds {
            let width = f32::from(bounds.size.width);
            let items: Vec<FixedSize> = self
                .heights
                .iter()
                .map(|&height| FixedSize::from_height(height))
                .collect();
            let geometry = layout.calculate_geometry(&items, Proposal::width_only(width));
            content_height = geometry.height;

            let heights = &self.heights;
            layout.place(Rect::default(), &geometry, |index, placement| {
                blocks.push(
                    div()
                        .absolute()
                        .left(px(placement.origin.x))
                        .top(px(placement.origin.y))
                        .w(px(geometry.column_width))
                        .h(px(heights[index]))
                        .border_1()
                        .border_color(rgb(0xf59e0b))
                        .rounded_sm()
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_sm()
                        .text_color(rgb(0xe5e7eb))
                        .child(format!("{index}")),
                );
            });
        }

        let randomize = cx.listener(|this: &mut Self, _: &MouseDownEvent, window: &mut Window, _| {
            this.heights = generate_block_heights(BLOCK_COUNT, time_seed());
            window.refresh();
        });
        let randomize_button = button_effect::apply(
            toolbar_button("Randomize", false)
                .on_mouse_down(MouseButton::Left, randomize)
                .id("waterfall-randomize"),
            0x111827,
        );

        let mut toolbar = div()
            .flex()
            .items_center()
            .gap_2()
            .px_3()
            .py_2()
            .bg(rgb(0x0f172a))
            .border_b_1()
            .border_color(rgb(0x1f2937))
            .child(div().text_sm().text_color(rgb(0x9ca3af)).child("Columns"));
        for columns in 1..=MAX_COLUMNS {
            toolbar = toolbar.child(self.column_button(columns, cx));
        }
        toolbar = toolbar
            .child(div().flex_1())
            .child(randomize_button)
            .child(header_chip(format!("{BLOCK_COUNT} blocks")))
            .child(header_chip(format!("spacing {:.0}", layout.spacing)))
            .child(header_chip(format!("height {content_height:.0}")));

        let content = div()
            .relative()
            .w_full()
            .h(px(content_height.max(1.0)))
            .children(blocks);

        let scroll_region = div()
            .flex_1()
            .w_full()
            .min_h(px(0.))
            .p_4()
            .id("waterfall-scroll")
            .overflow_y_scroll()
            .child(
                div()
                    .relative()
                    .w_full()
                    .on_children_prepainted(track_content_bounds)
                    .child(content),
            );

        div()
            .flex()
            .flex_col()
            .w_full()
            .h_full()
            .child(toolbar)
            .child(scroll_region)
    }
}
