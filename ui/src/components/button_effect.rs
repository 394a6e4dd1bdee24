use gpui::{prelude::*, rgb, Div, Stateful};

/// Hover/active background styling shared by every interactive chip in the
/// gallery.
pub fn apply(button: Stateful<Div>, base_bg: u32) -> Stateful<Div> {
    let (hover_bg, active_bg) = hover_and_active_bg(base_bg);
    button
        .cursor_pointer()
        .hover(move |style| style.bg(rgb(hover_bg)))
        .active(move |style| style.bg(rgb(active_bg)))
        .on_hover(|_, window, _| window.refresh())
}

fn hover_and_active_bg(base_bg: u32) -> (u32, u32) {
    // The gallery palette steps are hand-picked; anything else is derived.
    match base_bg {
        0x0f172a => (0x111827, 0x0b1220),
        0x111827 => (0x1f2937, 0x0f172a),
        0x1f2937 => (0x374151, 0x111827),
        _ => (tint(base_bg, 0.18), shade(base_bg, 0.18)),
    }
}

fn tint(color: u32, amount: f32) -> u32 {
    map_channels(color, |channel| channel + (255.0 - channel) * amount)
}

fn shade(color: u32, amount: f32) -> u32 {
    map_channels(color, |channel| channel * (1.0 - amount))
}

fn map_channels(color: u32, f: impl Fn(f32) -> f32) -> u32 {
    let apply = |channel: u32| -> u32 { f(channel as f32).round().clamp(0.0, 255.0) as u32 };
    let r = apply((color >> 16) & 0xff);
    let g = apply((color >> 8) & 0xff);
    let b = apply(color & 0xff);
    (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_moves_toward_white_and_shade_toward_black() {
        assert_eq!(tint(0x000000, 1.0), 0xffffff);
        assert_eq!(shade(0xffffff, 1.0), 0x000000);
        assert!(tint(0x808080, 0.2) > 0x808080);
        assert!(shade(0x808080, 0.2) < 0x808080);
    }

    #[test]
    fn palette_colors_use_the_fixed_steps() {
        assert_eq!(hover_and_active_bg(0x111827), (0x1f2937, 0x0f172a));
    }
}
