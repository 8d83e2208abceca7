//! Wheel rasterizer.
//!
//! Draws a [`RenderModel`] through a [`WheelBackend`]: background, one
//! triangle fan per segment, dividers, border ring, hub, pointer, labels and
//! the winner banner. Wheel-space angles map to the screen with the pointer
//! angle at twelve o'clock and growing angles turning clockwise.

use core::f64::consts::FRAC_PI_2;

use raffle_abi::{Color32, FontSpec, PointerStyle};
use raffle_draw::render_model::{PointerMark, RenderModel, Segment};
use raffle_draw::session::WinnerBanner;
use raffle_lib::{klog_debug, klog_trace};

use crate::backend::WheelBackend;
use crate::error::{VideoError, VideoResult};

pub const WHEEL_BG_COLOR: Color32 = Color32::from_rgb_u32(0x1A1A1A);
pub const HUB_COLOR: Color32 = Color32::from_rgb_u32(0xC7C7C7);
pub const DIVIDER_COLOR: Color32 = Color32::from_rgb_u32(0xE6E6E6);
pub const EMPTY_WHEEL_COLOR: Color32 = Color32::from_rgb_u32(0x2A2A2A);
pub const BANNER_BG_COLOR: Color32 = Color32::from_rgb_u32(0x144E44);
pub const BANNER_EDGE_COLOR: Color32 = Color32::from_rgb_u32(0x2DD4B3);
pub const BANNER_TEXT_COLOR: Color32 = Color32::WHITE;

const TEXT_EMPTY_POOL: &str = "No paid tickets";

/// Widest angle covered by one triangle of a segment fan.
const FAN_STEP: f64 = 0.035;
/// Label anchor as a fraction of the wheel radius.
const LABEL_RADIUS: f64 = 0.62;
/// Rough glyph advance as a fraction of the font pixel size.
const GLYPH_ADVANCE: f64 = 0.6;
const POINTER_HALF_WIDTH: f64 = 8.0;
const POINTER_DEPTH: f64 = 8.0;

fn point_at(center: (f64, f64), radius: f64, wheel_angle: f64) -> (i32, i32) {
    let screen = wheel_angle - FRAC_PI_2;
    (
        (center.0 + radius * screen.cos()).round() as i32,
        (center.1 + radius * screen.sin()).round() as i32,
    )
}

/// Approximate pixel width of `text` in `font`.
pub fn text_width_px(text: &str, font: &FontSpec) -> i32 {
    (text.chars().count() as f64 * font.size_px as f64 * GLYPH_ADVANCE).round() as i32
}

fn draw_segment_wedge<B: WheelBackend + ?Sized>(
    b: &mut B,
    center: (f64, f64),
    radius: f64,
    segment: &Segment,
) -> VideoResult {
    let span = segment.end_angle - segment.start_angle;
    let steps = (span / FAN_STEP).ceil().max(1.0) as usize;
    let hub = (center.0.round() as i32, center.1.round() as i32);

    let mut from = point_at(center, radius, segment.start_angle);
    for step in 1..=steps {
        let angle = segment.start_angle + span * step as f64 / steps as f64;
        let to = point_at(center, radius, angle);
        b.fill_triangle(hub, from, to, segment.color)?;
        from = to;
    }
    Ok(())
}

fn draw_segment_divider<B: WheelBackend + ?Sized>(
    b: &mut B,
    center: (f64, f64),
    radius: f64,
    angle: f64,
) -> VideoResult {
    let hub = (center.0.round() as i32, center.1.round() as i32);
    let rim = point_at(center, radius, angle);
    b.draw_line(hub.0, hub.1, rim.0, rim.1, DIVIDER_COLOR)
}

fn draw_segment_label<B: WheelBackend + ?Sized>(
    b: &mut B,
    model: &RenderModel,
    segment: &Segment,
) {
    let Some(label) = segment.label.as_deref() else {
        return;
    };
    let anchor_radius = model.radius * LABEL_RADIUS;
    let arc = (segment.end_angle - segment.start_angle) * anchor_radius;
    if arc < model.font.size_px as f64 {
        klog_trace!("video: label for #{} does not fit", segment.ticket_number);
        return;
    }

    let (x, y) = point_at(model.center, anchor_radius, segment.mid_angle());
    let x = x - text_width_px(label, &model.font) / 2;
    let y = y - model.font.size_px as i32 / 2;
    if let Err(err) = b.draw_text(x, y, label, segment.text_color, &model.font) {
        klog_debug!("video: label for #{} skipped: {}", segment.ticket_number, err);
    }
}

fn draw_border<B: WheelBackend + ?Sized>(
    b: &mut B,
    cx: i32,
    cy: i32,
    radius: i32,
    width: u32,
    color: Color32,
) -> VideoResult {
    if width == 0 {
        return Ok(());
    }
    b.fill_ring(cx, cy, radius, radius + width as i32, color)
}

fn draw_pointer<B: WheelBackend + ?Sized>(
    b: &mut B,
    model: &RenderModel,
    pointer: &PointerMark,
) -> VideoResult {
    let border = model.border.map_or(0.0, |border| border.width as f64);
    let screen = model.pointer_angle - FRAC_PI_2;
    let (dir_x, dir_y) = (screen.cos(), screen.sin());
    let (perp_x, perp_y) = (-dir_y, dir_x);
    let (cx, cy) = model.center;

    let tip_radius = (model.radius - POINTER_DEPTH).max(0.0);
    let base_radius = model.radius + border + 2.0;
    let tip = (
        (cx + dir_x * tip_radius).round() as i32,
        (cy + dir_y * tip_radius).round() as i32,
    );
    let base = (cx + dir_x * base_radius, cy + dir_y * base_radius);
    let corner = |sign: f64| {
        (
            (base.0 + sign * perp_x * POINTER_HALF_WIDTH).round() as i32,
            (base.1 + sign * perp_y * POINTER_HALF_WIDTH).round() as i32,
        )
    };
    let (left, right) = (corner(1.0), corner(-1.0));
    let base_px = (base.0.round() as i32, base.1.round() as i32);

    match pointer.style {
        PointerStyle::Triangle => b.fill_triangle(tip, left, right, pointer.color),
        PointerStyle::Arrow => {
            b.fill_triangle(tip, left, right, pointer.color)?;
            let tail = (
                (base.0 + dir_x * POINTER_DEPTH).round() as i32,
                (base.1 + dir_y * POINTER_DEPTH).round() as i32,
            );
            b.draw_line(base_px.0, base_px.1, tail.0, tail.1, pointer.color)
        }
        PointerStyle::Pin => {
            b.fill_triangle(tip, left, right, pointer.color)?;
            b.draw_circle_filled(
                base_px.0,
                base_px.1,
                POINTER_HALF_WIDTH as i32,
                pointer.color,
            )
        }
    }
}

fn draw_empty_wheel<B: WheelBackend + ?Sized>(
    b: &mut B,
    model: &RenderModel,
    cx: i32,
    cy: i32,
    radius: i32,
) -> VideoResult {
    b.draw_circle_filled(cx, cy, radius, EMPTY_WHEEL_COLOR)?;
    let x = cx - text_width_px(TEXT_EMPTY_POOL, &model.font) / 2;
    let y = cy - model.font.size_px as i32 / 2;
    if let Err(err) = b.draw_text(x, y, TEXT_EMPTY_POOL, DIVIDER_COLOR, &model.font) {
        klog_debug!("video: empty wheel notice skipped: {}", err);
    }
    Ok(())
}

/// Redraw the whole wheel for `model`.
///
/// Shape failures abort the frame. Text failures only drop that label.
pub fn render_wheel<B: WheelBackend + ?Sized>(b: &mut B, model: &RenderModel) -> VideoResult {
    let (width, height) = b.size()?;
    if width == 0 || height == 0 {
        return Err(VideoError::ZeroSized);
    }

    b.begin_frame()?;
    b.fill_rect(0, 0, width as i32, height as i32, WHEEL_BG_COLOR)?;

    let cx = model.center.0.round() as i32;
    let cy = model.center.1.round() as i32;
    let radius = model.radius.round() as i32;

    if model.segments.is_empty() {
        draw_empty_wheel(b, model, cx, cy, radius)?;
    } else {
        for segment in &model.segments {
            draw_segment_wedge(b, model.center, model.radius, segment)?;
        }
        if model.segments.len() > 1 {
            for segment in &model.segments {
                draw_segment_divider(b, model.center, model.radius, segment.start_angle)?;
            }
        }
    }

    if let Some(border) = model.border {
        draw_border(b, cx, cy, radius, border.width, border.color)?;
    }

    let hub_radius = (radius / 10).max(4);
    b.draw_circle_filled(cx, cy, hub_radius, HUB_COLOR)?;

    for segment in &model.segments {
        draw_segment_label(b, model, segment);
    }

    if let Some(pointer) = &model.pointer {
        draw_pointer(b, model, pointer)?;
    }

    if let Some(banner) = model.banner.as_ref().filter(|_| !model.is_spinning) {
        render_winner_banner(b, banner, &model.font)?;
    }
    Ok(())
}

/// Banner strip along the bottom edge announcing `banner`.
pub fn render_winner_banner<B: WheelBackend + ?Sized>(
    b: &mut B,
    banner: &WinnerBanner,
    font: &FontSpec,
) -> VideoResult {
    let (width, height) = b.size()?;
    if width == 0 || height == 0 {
        return Err(VideoError::ZeroSized);
    }
    let (width, height) = (width as i32, height as i32);

    let strip_h = (font.size_px as i32 * 2).min(height);
    let x = width / 10;
    let w = width - 2 * x;
    let y = height - strip_h - height / 20;

    b.fill_rect(x, y, w, strip_h, BANNER_BG_COLOR)?;
    b.draw_line(x, y, x + w - 1, y, BANNER_EDGE_COLOR)?;
    b.draw_line(x, y + strip_h - 1, x + w - 1, y + strip_h - 1, BANNER_EDGE_COLOR)?;

    let headline = banner.headline();
    let text_x = width / 2 - text_width_px(&headline, font) / 2;
    let text_y = y + (strip_h - font.size_px as i32) / 2;
    if let Err(err) = b.draw_text(text_x, text_y, &headline, BANNER_TEXT_COLOR, font) {
        klog_debug!("video: banner text skipped: {}", err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CanvasBackend;
    use raffle_abi::{Canvas, Ticket};
    use raffle_draw::{DrawSession, VisualConfig};
    use raffle_gfx::DrawBuffer;

    const SIZE: u32 = 200;

    fn visual() -> VisualConfig {
        VisualConfig {
            width: SIZE,
            height: SIZE,
            ..VisualConfig::default()
        }
    }

    fn session(numbers: &[u32]) -> DrawSession {
        let tickets: Vec<Ticket> = numbers.iter().map(|&n| Ticket::paid(n, "Ana")).collect();
        DrawSession::new(&tickets, 1)
    }

    fn surface() -> Vec<u8> {
        vec![0u8; (SIZE * SIZE * 4) as usize]
    }

    /// Delegates to a canvas backend but fails the selected calls.
    struct Flaky<'a> {
        inner: CanvasBackend<DrawBuffer<'a>>,
        fail_text: bool,
        fail_shapes: bool,
    }

    impl WheelBackend for Flaky<'_> {
        fn size(&self) -> VideoResult<(u32, u32)> {
            self.inner.size()
        }

        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color32) -> VideoResult {
            self.inner.fill_rect(x, y, w, h, color)
        }

        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Color32) -> VideoResult {
            self.inner.draw_line(x0, y0, x1, y1, c)
        }

        fn draw_circle_filled(&mut self, cx: i32, cy: i32, r: i32, c: Color32) -> VideoResult {
            self.inner.draw_circle_filled(cx, cy, r, c)
        }

        fn fill_ring(&mut self, cx: i32, cy: i32, i: i32, o: i32, c: Color32) -> VideoResult {
            self.inner.fill_ring(cx, cy, i, o, c)
        }

        fn fill_triangle(
            &mut self,
            a: (i32, i32),
            b: (i32, i32),
            c: (i32, i32),
            color: Color32,
        ) -> VideoResult {
            if self.fail_shapes {
                return Err(VideoError::Unsupported("triangles"));
            }
            self.inner.fill_triangle(a, b, c, color)
        }

        fn draw_text(
            &mut self,
            x: i32,
            y: i32,
            text: &str,
            color: Color32,
            font: &FontSpec,
        ) -> VideoResult {
            if self.fail_text {
                return Err(VideoError::Unsupported("text"));
            }
            self.inner.draw_text(x, y, text, color, font)
        }
    }

    #[test]
    fn test_segments_painted_clockwise_from_pointer() {
        let model = RenderModel::build(&session(&[1, 2, 3, 4]), &visual());
        let mut data = surface();
        let mut backend = CanvasBackend::new(DrawBuffer::packed(&mut data, SIZE, SIZE).unwrap());
        render_wheel(&mut backend, &model).unwrap();

        let canvas = backend.canvas();
        assert_eq!(canvas.read_pixel(133, 67), Some(model.segments[0].color));
        assert_eq!(canvas.read_pixel(133, 133), Some(model.segments[1].color));
        assert_eq!(canvas.read_pixel(67, 133), Some(model.segments[2].color));
        assert_eq!(canvas.read_pixel(67, 67), Some(model.segments[3].color));
        assert_eq!(canvas.read_pixel(0, 0), Some(WHEEL_BG_COLOR));
        assert_eq!(canvas.read_pixel(100, 100), Some(HUB_COLOR));
    }

    #[test]
    fn test_rotation_moves_segments() {
        let mut model = RenderModel::build(&session(&[1, 2, 3, 4]), &visual());
        // A quarter turn back brings segment 1 to the top right.
        let quarter = core::f64::consts::FRAC_PI_2;
        for segment in &mut model.segments {
            segment.start_angle -= quarter;
            segment.end_angle -= quarter;
        }
        model.rotation_angle = -quarter;
        let mut data = surface();
        let mut backend = CanvasBackend::new(DrawBuffer::packed(&mut data, SIZE, SIZE).unwrap());
        render_wheel(&mut backend, &model).unwrap();
        assert_eq!(backend.canvas().read_pixel(133, 67), Some(model.segments[1].color));
        assert_eq!(model.segment_under_pointer().map(|s| s.index), Some(1));
    }

    #[test]
    fn test_pointer_drawn_at_top() {
        let model = RenderModel::build(&session(&[1, 2, 3]), &visual());
        let pointer = model.pointer.unwrap();
        let mut data = surface();
        let mut backend = CanvasBackend::new(DrawBuffer::packed(&mut data, SIZE, SIZE).unwrap());
        render_wheel(&mut backend, &model).unwrap();
        assert_eq!(backend.canvas().read_pixel(100, 8), Some(pointer.color));
        assert_ne!(backend.canvas().read_pixel(100, 192), Some(pointer.color));
    }

    #[test]
    fn test_labels_go_to_text_overlay() {
        let model = RenderModel::build(&session(&[4, 8, 15]), &visual());
        let mut data = surface();
        let mut backend = CanvasBackend::new(DrawBuffer::packed(&mut data, SIZE, SIZE).unwrap());
        render_wheel(&mut backend, &model).unwrap();
        render_wheel(&mut backend, &model).unwrap();

        let texts: Vec<&str> = backend.texts().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["4", "8", "15"]);
        assert_eq!(backend.texts()[2].color, model.segments[2].text_color);
    }

    #[test]
    fn test_label_failures_skipped_shape_failures_propagate() {
        let model = RenderModel::build(&session(&[1, 2]), &visual());
        let mut data = surface();
        let mut backend = Flaky {
            inner: CanvasBackend::new(DrawBuffer::packed(&mut data, SIZE, SIZE).unwrap()),
            fail_text: true,
            fail_shapes: false,
        };
        assert_eq!(render_wheel(&mut backend, &model), Ok(()));

        backend.fail_shapes = true;
        assert_eq!(
            render_wheel(&mut backend, &model),
            Err(VideoError::Unsupported("triangles"))
        );
    }

    #[test]
    fn test_wide_border_is_solid() {
        let visual = VisualConfig {
            border_width: 6,
            ..visual()
        };
        let model = RenderModel::build(&session(&[1, 2, 3, 4, 5]), &visual);
        let mut data = surface();
        let mut backend = CanvasBackend::new(DrawBuffer::packed(&mut data, SIZE, SIZE).unwrap());
        render_wheel(&mut backend, &model).unwrap();

        let (cx, cy) = model.center;
        let inner = model.radius + 1.5;
        let outer = model.radius + 6.0 - 0.5;
        let mut band = 0;
        let mut holes = 0;
        for y in 0..SIZE as i32 {
            for x in 0..SIZE as i32 {
                let d = (x as f64 - cx).hypot(y as f64 - cy);
                if d > inner && d < outer {
                    band += 1;
                    if backend.canvas().read_pixel(x, y) == Some(WHEEL_BG_COLOR) {
                        holes += 1;
                    }
                }
            }
        }
        assert!(band > 2000);
        assert_eq!(holes, 0);
    }

    #[test]
    fn test_zero_sized_surface() {
        let mut empty: [u8; 0] = [];
        let mut backend = CanvasBackend::new(DrawBuffer::packed(&mut empty, 0, 0).unwrap());
        let model = RenderModel::build(&session(&[1]), &visual());
        assert_eq!(render_wheel(&mut backend, &model), Err(VideoError::ZeroSized));
    }

    #[test]
    fn test_banner_after_settle() {
        let mut session = session(&[5]);
        assert!(session.spin().accepted);
        session.tick(core::time::Duration::ZERO);
        session.tick(core::time::Duration::from_secs(60));

        let model = RenderModel::build(&session, &visual());
        let mut data = surface();
        let mut backend = CanvasBackend::new(DrawBuffer::packed(&mut data, SIZE, SIZE).unwrap());
        render_wheel(&mut backend, &model).unwrap();

        let texts: Vec<&str> = backend.texts().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec![TEXT_EMPTY_POOL, "Prize 1 - #5 Ana"]);
        assert_eq!(backend.canvas().read_pixel(25, 170), Some(BANNER_BG_COLOR));
    }
}
