use gallery_core::{WeatherSample, TIME_DOMAIN_MAX};
use gpui::{
    canvas, point, px, quad, rgb, rgba, size, transparent_black, BorderStyle, Bounds, Canvas,
    PathBuilder,
};

/// Paints the weather plot: past-time shading, gridlines aligned with the
/// axis labels, the filled temperature area and line, the current-time
/// rule, and the selection rule/point.
pub(super) fn weather_canvas(
    samples: Vec<WeatherSample>,
    domain: (i32, i32),
    current_time: i32,
    selected: Option<i32>,
) -> Canvas<Vec<WeatherSample>> {
    canvas(
        move |_, _, _| samples.clone(),
        move |bounds, samples, window, _| {
            window.paint_quad(quad(
                bounds,
                px(0.),
                rgb(0x0b1220),
                px(0.),
                transparent_black(),
                BorderStyle::default(),
            ));

            let width = f32::from(bounds.size.width);
            let height = f32::from(bounds.size.height);
            let ox = f32::from(bounds.origin.x);
            let oy = f32::from(bounds.origin.y);
            if samples.is_empty() || width <= 0.0 || height <= 0.0 {
                return;
            }

            let (lower, upper) = domain;
            let range = (upper - lower).max(1) as f32;
            let domain_max = TIME_DOMAIN_MAX as f32;

            let time_to_x = |time: f32| ox + (time / domain_max).clamp(0.0, 1.0) * width;
            let temp_to_y = |temperature: i32| {
                let normalized = ((temperature - lower) as f32 / range).clamp(0.0, 1.0);
                oy + (1.0 - normalized) * height
            };

            // Fade out the hours that have already passed.
            if current_time > 0 {
                let shade_end = time_to_x(current_time as f32);
                window.paint_quad(quad(
                    Bounds {
                        origin: point(px(ox), px(oy)),
                        size: size(px(shade_end - ox), px(height)),
                    },
                    px(0.),
                    rgba(0x00000033),
                    px(0.),
                    transparent_black(),
                    BorderStyle::default(),
                ));
            }

            // Horizontal gridlines at the 6-degree label marks.
            let mut mark = lower;
            while mark <= upper {
                let y = temp_to_y(mark);
                let mut builder = PathBuilder::stroke(px(1.));
                builder.move_to(point(px(ox), px(y)));
                builder.line_to(point(px(ox + width), px(y)));
                if let Ok(path) = builder.build() {
                    window.paint_path(path, rgb(0x1f2937));
                }
                mark += 6;
            }

            // Vertical gridlines every 4 hours.
            for hour in (0..=TIME_DOMAIN_MAX).step_by(4) {
                let x = time_to_x(hour as f32);
                let mut builder = PathBuilder::stroke(px(1.));
                builder.move_to(point(px(x), px(oy)));
                builder.line_to(point(px(x), px(oy + height)));
                if let Ok(path) = builder.build() {
                    window.paint_path(path, rgb(0x1f2937));
                }
            }

            // Filled area under the temperature curve.
            let mut builder = PathBuilder::fill();
            builder.move_to(point(px(time_to_x(samples[0].time as f32)), px(oy + height)));
            for sample in samples.iter() {
                builder.line_to(point(
                    px(time_to_x(sample.time as f32)),
                    px(temp_to_y(sample.temperature)),
                ));
            }
            let last_time = samples[samples.len() - 1].time as f32;
            builder.line_to(point(px(time_to_x(last_time)), px(oy + height)));
            if let Ok(path) = builder.build() {
                window.paint_path(path, rgba(0x2dd4bf2e));
            }

            // Temperature line on top of the area.
            let mut builder = PathBuilder::stroke(px(3.));
            for (index, sample) in samples.iter().enumerate() {
                let target = point(
                    px(time_to_x(sample.time as f32)),
                    px(temp_to_y(sample.temperature)),
                );
                if index == 0 {
                    builder.move_to(target);
                } else {
                    builder.line_to(target);
                }
            }
            if let Ok(path) = builder.build() {
                window.paint_path(path, rgb(0x2dd4bf));
            }

            // Rule marking the current hour.
            if current_time > 0 && current_time <= TIME_DOMAIN_MAX {
                let x = time_to_x(current_time as f32);
                let mut builder = PathBuilder::stroke(px(1.));
                builder.move_to(point(px(x), px(oy)));
                builder.line_to(point(px(x), px(oy + height)));
                if let Ok(path) = builder.build() {
                    window.paint_path(path, rgba(0x9ca3afb3));
                }
            }

            // Selection rule and point.
            if let Some(time) = selected {
                if let Some(sample) = samples.get(time as usize) {
                    let x = time_to_x(time as f32);
                    let mut builder = PathBuilder::stroke(px(1.));
                    builder.move_to(point(px(x), px(oy)));
                    builder.line_to(point(px(x), px(oy + height)));
                    if let Ok(path) = builder.build() {
                        window.paint_path(path, rgb(0x9ca3af));
                    }

                    let y = temp_to_y(sample.temperature);
                    let point_bounds = Bounds {
                        origin: point(px(x - 7.0), px(y - 7.0)),
                        size: size(px(14.), px(14.)),
                    };
                    window.paint_quad(quad(
                        point_bounds,
                        px(7.),
                        rgb(0xe5e7eb),
                        px(0.),
                        transparent_black(),
                        BorderStyle::default(),
                    ));
                }
            }
        },
    )
}
