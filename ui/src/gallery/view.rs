use gallery_core::WeatherSample;
use gpui::{
    div, prelude::*, px, rgb, Context, Entity, MouseButton, MouseDownEvent, Window,
};

use crate::components::button_effect;

use super::chart::WeatherChartView;
use super::equal_width::EqualWidthDemo;
use super::waterfall::WaterfallDemo;
use super::{DemoKind, GalleryOptions};

/// The gallery shell: a sidebar listing the demos and a detail pane showing
/// the selected one. Each demo keeps its own entity so its state survives
/// switching away and back.
pub struct GalleryView {
    selected: DemoKind,
    waterfall: Entity<WaterfallDemo>,
    equal_width: Entity<EqualWidthDemo>,
    chart: Entity<WeatherChartView>,
}

impl GalleryView {
    pub fn new(
        samples: Result<Vec<WeatherSample>, String>,
        options: GalleryOptions,
        cx: &mut Context<Self>,
    ) -> Self {
        let waterfall = cx.new(|_| WaterfallDemo::new(options.columns, options.spacing));
        let equal_width = cx.new(|_| EqualWidthDemo::new());
        let chart = cx.new(|_| WeatherChartView::new(samples, options.source.clone()));

        Self {
            selected: options.initial_demo,
            waterfall,
            equal_width,
            chart,
        }
    }

    fn sidebar_entry(&self, kind: DemoKind, cx: &mut Context<Self>) -> gpui::Stateful<gpui::Div> {
        let active = self.selected == kind;
        let handler = cx.listener(move |this: &mut Self, _: &MouseDownEvent, window: &mut Window, _| {
            this.selected = kind;
            window.refresh();
        });

        let bg_hex = if active { 0x1f2937 } else { 0x111827 };
        let entry = div()
            .px_3()
            .py_2()
            .rounded_md()
            .bg(rgb(bg_hex))
            .border_1()
            .border_color(if active { rgb(0xf59e0b) } else { rgb(0x1f2937) })
            .text_sm()
            .text_color(gpui::white())
            .on_mouse_down(MouseButton::Left, handler)
            .child(kind.label())
            .id(kind.label());
        button_effect::apply(entry, bg_hex)
    }
}

impl Render for GalleryView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut sidebar = div()
            .w(px(220.))
            .h_full()
            .flex()
            .flex_col()
            .gap_2()
            .p_3()
            .bg(rgb(0x0f172a))
            .border_r_1()
            .border_color(rgb(0x1f2937))
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(0x9ca3af))
                    .pb_1()
                    .child("Demos"),
            );
        for kind in DemoKind::ALL {
            sidebar = sidebar.child(self.sidebar_entry(kind, cx));
        }

        let detail = match self.selected {
            DemoKind::Waterfall => self.waterfall.clone().into_any_element(),
            DemoKind::EqualWidth => self.equal_width.clone().into_any_element(),
            DemoKind::Chart => self.chart.clone().into_any_element(),
        };

        div()
            .flex()
            .w_full()
            .h_full()
            .bg(rgb(0x0b1220))
            .text_color(gpui::white())
            .child(sidebar)
            .child(div().flex_1().h_full().min_w(px(0.)).child(detail))
    }
}
