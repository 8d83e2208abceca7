//! Drawing backends for the wheel rasterizer.

use raffle_abi::{Canvas, Color32, FontSpec};
use raffle_gfx::canvas_ops;

use crate::error::{VideoError, VideoResult};

/// The drawing calls the wheel needs from a host surface.
pub trait WheelBackend {
    fn size(&self) -> VideoResult<(u32, u32)>;

    /// Called once before each full redraw.
    fn begin_frame(&mut self) -> VideoResult {
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color32) -> VideoResult;

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color32) -> VideoResult;

    fn draw_circle_filled(&mut self, cx: i32, cy: i32, radius: i32, color: Color32)
    -> VideoResult;

    /// Fill every pixel farther than `inner` and no farther than `outer`
    /// from the centre.
    fn fill_ring(&mut self, cx: i32, cy: i32, inner: i32, outer: i32, color: Color32)
    -> VideoResult;

    fn fill_triangle(
        &mut self,
        a: (i32, i32),
        b: (i32, i32),
        c: (i32, i32),
        color: Color32,
    ) -> VideoResult;

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color32,
        font: &FontSpec,
    ) -> VideoResult;
}

/// Text the host still has to composite over the pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRun {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub color: Color32,
    pub font: FontSpec,
}

/// Backend over any [`Canvas`]. Shapes are rasterized directly; text is
/// collected as [`TextRun`]s for the host's font renderer.
pub struct CanvasBackend<C> {
    canvas: C,
    texts: Vec<TextRun>,
}

impl<C: Canvas> CanvasBackend<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            texts: Vec::new(),
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    pub fn into_parts(self) -> (C, Vec<TextRun>) {
        (self.canvas, self.texts)
    }
}

impl<C: Canvas> WheelBackend for CanvasBackend<C> {
    fn size(&self) -> VideoResult<(u32, u32)> {
        Ok((self.canvas.width(), self.canvas.height()))
    }

    fn begin_frame(&mut self) -> VideoResult {
        self.texts.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color32) -> VideoResult {
        if w < 0 || h < 0 {
            return Err(VideoError::InvalidArgument("negative rectangle size"));
        }
        canvas_ops::fill_rect(&mut self.canvas, x, y, w, h, color);
        Ok(())
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color32) -> VideoResult {
        canvas_ops::line(&mut self.canvas, x0, y0, x1, y1, color);
        Ok(())
    }

    fn draw_circle_filled(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color32,
    ) -> VideoResult {
        if radius < 0 {
            return Err(VideoError::InvalidArgument("negative radius"));
        }
        canvas_ops::circle_filled(&mut self.canvas, cx, cy, radius, color);
        Ok(())
    }

    fn fill_ring(
        &mut self,
        cx: i32,
        cy: i32,
        inner: i32,
        outer: i32,
        color: Color32,
    ) -> VideoResult {
        if inner < 0 || outer < inner {
            return Err(VideoError::InvalidArgument("bad ring radii"));
        }
        canvas_ops::ring(&mut self.canvas, cx, cy, inner, outer, color);
        Ok(())
    }

    fn fill_triangle(
        &mut self,
        a: (i32, i32),
        b: (i32, i32),
        c: (i32, i32),
        color: Color32,
    ) -> VideoResult {
        canvas_ops::triangle_filled(&mut self.canvas, a.0, a.1, b.0, b.1, c.0, c.1, color);
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color32,
        font: &FontSpec,
    ) -> VideoResult {
        if text.is_empty() {
            return Ok(());
        }
        self.texts.push(TextRun {
            x,
            y,
            text: String::from(text),
            color,
            font: *font,
        });
        Ok(())
    }
}
