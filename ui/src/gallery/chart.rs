use gallery_core::{
    axis_value_at, demo_day, y_axis_domain, Selection, WeatherSample, TIME_DOMAIN_MAX,
};
use gpui::{
    div, prelude::*, px, rgb, Bounds, Context, Div, MouseButton, MouseMoveEvent, MouseUpEvent,
    Pixels, SharedString, Window,
};
use time::OffsetDateTime;

use crate::components::widgets::header_chip;

use super::canvas::weather_canvas;

const TIP_WIDTH: f32 = 150.0;

/// Interactive weather chart: hover or press to inspect a specific hour.
/// The selection is a core [`Selection`] fed from plot-local pointer
/// coordinates through the linear axis inversion.
pub struct WeatherChartView {
    samples: Vec<WeatherSample>,
    source: String,
    load_error: Option<String>,
    current_time: i32,
    selection: Selection,
    plot_bounds: Option<Bounds<Pixels>>,
}

impl WeatherChartView {
    pub fn new(samples: Result<Vec<WeatherSample>, String>, source: String) -> Self {
        let (samples, load_error) = match samples {
            Ok(samples) => (samples, None),
            Err(err) => (demo_day(), Some(err)),
        };

        Self {
            samples,
            source,
            load_error,
            current_time: current_hour(),
            selection: Selection::new(),
            plot_bounds: None,
        }
    }

    fn handle_pointer_move(&mut self, x: f32, y: f32) {
        let Some(bounds) = self.plot_bounds else {
            return;
        };
        let bx = f32::from(bounds.origin.x);
        let by = f32::from(bounds.origin.y);
        let bw = f32::from(bounds.size.width);
        let bh = f32::from(bounds.size.height);

        if x >= bx && x <= bx + bw && y >= by && y <= by + bh {
            self.selection
                .pointer_moved(x - bx, |local_x| axis_value_at(local_x, bw, TIME_DOMAIN_MAX));
        } else {
            // The pointer left the plot: the hover ended.
            self.selection.ended();
        }
    }

    fn annotation_overlay(&self) -> Option<Div> {
        let time = self.selection.indicator_time()?;
        let sample = self.samples.get(time as usize)?;
        let bounds = self.plot_bounds?;
        let left = annotation_left(time, f32::from(bounds.size.width), TIP_WIDTH);

        Some(
            div()
                .absolute()
                .left(px(left))
                .top(px(10.))
                .w(px(TIP_WIDTH))
                .bg(rgb(0x111827))
                .border_1()
                .border_color(rgb(0x1f2937))
                .rounded_md()
                .shadow_lg()
                .p_2()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_lg()
                        .child(format!("{} {}°", sample.condition.glyph(), sample.temperature)),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(0x9ca3af))
                        .child(format!("{:02}:00 - {}", time, sample.condition.label())),
                ),
        )
    }
}

/// Places the annotation trailing the rule for the morning half of the
/// domain and leading it for the rest, so it never hangs off the plot.
fn annotation_left(time: i32, plot_width: f32, tip_width: f32) -> f32 {
    let anchor_x = time as f32 / TIME_DOMAIN_MAX as f32 * plot_width;
    if time <= TIME_DOMAIN_MAX / 2 {
        anchor_x + 10.0
    } else {
        anchor_x - tip_width - 10.0
    }
}

/// Axis labels at every 6-degree mark, top down.
fn axis_labels(lower: i32, upper: i32) -> Vec<String> {
    let mut labels = Vec::new();
    let mut mark = upper;
    while mark >= lower {
        labels.push(format!("{mark}"));
        mark -= 6;
    }
    labels
}

fn current_hour() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .hour() as i32
}

impl Render for WeatherChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let domain = y_axis_domain(&self.samples);
        let selected = self.selection.indicator_time();

        let track_plot_bounds =
            cx.processor(|this: &mut Self, bounds: Vec<Bounds<Pixels>>, _, _| {
                if let Some(canvas_bounds) = bounds.first() {
                    this.plot_bounds = Some(*canvas_bounds);
                }
            });

        let handle_mouse_move = cx.listener(|this: &mut Self, event: &MouseMoveEvent, window: &mut Window, _| {
            this.handle_pointer_move(f32::from(event.position.x), f32::from(event.position.y));
            window.refresh();
        });

        let handle_mouse_up = cx.listener(|this: &mut Self, _: &MouseUpEvent, window: &mut Window, _| {
            // Drag ended: clear regardless of the prior selection.
            this.selection.ended();
            window.refresh();
        });

        let chart = weather_canvas(self.samples.clone(), domain, self.current_time, selected)
            .flex_1()
            .w_full()
            .h_full();

        let mut canvas_region = div()
            .flex_1()
            .w_full()
            .h_full()
            .relative()
            .on_children_prepainted(track_plot_bounds)
            .child(chart);
        if let Some(tip) = self.annotation_overlay() {
            canvas_region = canvas_region.child(tip);
        } else {
            canvas_region = canvas_region.child(
                div()
                    .absolute()
                    .left(px(10.))
                    .top(px(10.))
                    .max_w(px(180.))
                    .p_2()
                    .rounded_md()
                    .bg(rgb(0x111827))
                    .text_xs()
                    .text_color(rgb(0x9ca3af))
                    .child("Hover or press to inspect the weather at a specific hour"),
            );
        }

        let temp_axis = div()
            .w(px(44.))
            .h_full()
            .flex()
            .flex_col()
            .justify_between()
            .items_end()
            .px_2()
            .text_xs()
            .text_color(rgb(0x9ca3af))
            .children(axis_labels(domain.0, domain.1));

        let chart_row = div()
            .flex_1()
            .flex()
            .w_full()
            .h_full()
            .min_h(px(320.))
            .on_mouse_move(handle_mouse_move)
            .on_mouse_up(MouseButton::Left, handle_mouse_up)
            .child(temp_axis)
            .child(canvas_region);

        let time_axis = div()
            .h(px(28.))
            .pl(px(44.))
            .pr_3()
            .flex()
            .items_center()
            .justify_between()
            .text_xs()
            .text_color(rgb(0x9ca3af))
            .bg(rgb(0x0f172a))
            .children((0..=TIME_DOMAIN_MAX).step_by(4).map(|hour| format!("{hour}")));

        let mut header = div()
            .flex()
            .justify_between()
            .items_center()
            .gap_2()
            .p_3()
            .bg(rgb(0x111827))
            .border_b_1()
            .border_color(rgb(0x1f2937))
            .child(
                div()
                    .text_sm()
                    .child(SharedString::from(self.source.clone())),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .child(header_chip(format!("samples: {}", self.samples.len())))
                    .child(header_chip(format!("domain: {}..{}", domain.0, domain.1)))
                    .child(header_chip(format!("now: {:02}:00", self.current_time))),
            );
        if let Some(err) = self.load_error.clone() {
            header = header.child(div().text_xs().text_color(rgb(0xef4444)).child(err));
        }

        div()
            .flex()
            .flex_col()
            .w_full()
            .h_full()
            .bg(rgb(0x0b1220))
            .text_color(gpui::white())
            .child(header)
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .w_full()
                    .h_full()
                    .min_h(px(360.))
                    .child(chart_row)
                    .child(time_axis),
            )
    }
}
