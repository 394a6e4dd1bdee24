use gpui::{div, prelude::*, rgb, Div, SharedString};

pub fn toolbar_button(label: impl Into<SharedString>, active: bool) -> Div {
    let label = label.into();
    let bg = if active { rgb(0x1f2937) } else { rgb(0x111827) };
    let border = if active { rgb(0xf59e0b) } else { rgb(0x1f2937) };
    div()
        .px_3()
        .py_1()
        .rounded_md()
        .border_1()
        .border_color(border)
        .bg(bg)
        .text_sm()
        .text_color(gpui::white())
        .child(label)
}

pub fn header_chip(label: impl Into<SharedString>) -> Div {
    let label = label.into();
    div()
        .px_3()
        .py_1()
        .rounded_md()
        .bg(rgb(0x111827))
        .border_1()
        .border_color(rgb(0x1f2937))
        .text_sm()
        .text_color(rgb(0xe5e7eb))
        .child(label)
}

