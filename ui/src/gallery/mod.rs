use gallery_core::WeatherSample;
use gpui::{prelude::*, px, size, App, Application, Bounds, WindowBounds, WindowOptions};

mod canvas;
mod chart;
mod equal_width;
mod view;
mod waterfall;

pub use view::GalleryView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Waterfall,
    EqualWidth,
    Chart,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::Waterfall, DemoKind::EqualWidth, DemoKind::Chart];

    pub fn label(&self) -> &'static str {
        match self {
            DemoKind::Waterfall => "Waterfall Layout",
            DemoKind::EqualWidth => "Equal Width Row",
            DemoKind::Chart => "Interactive Chart",
        }
    }
}

#[derive(Clone)]
pub struct GalleryOptions {
    pub initial_demo: DemoKind,
    /// Waterfall column count; must be at least 1.
    pub columns: usize,
    pub spacing: f32,
    /// Where the chart samples came from, for the header.
    pub source: String,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            initial_demo: DemoKind::Waterfall,
            columns: 3,
            spacing: 10.0,
            source: "built-in demo day".into(),
        }
    }
}

/// Opens the gallery window. A failed sample load is carried into the chart
/// demo as an error banner rather than aborting.
pub fn launch_gallery(samples: Result<Vec<WeatherSample>, String>, options: GalleryOptions) {
    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1200.), px(800.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                focus: true,
                ..Default::default()
            },
            move |_, cx| cx.new(|cx| GalleryView::new(samples, options, cx)),
        )
        .expect("failed to open window");
        cx.activate(true);
    });
}
