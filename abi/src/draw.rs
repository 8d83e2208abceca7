/// Canonical color representation: 0xAARRGGBB.
///
/// Palettes, border and pointer colors and the software canvas all use this
/// layout, which matches the `#rrggbb` web convention with an alpha byte on
/// top.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color32(pub u32);

impl Color32 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x00000000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF000000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFFFFFF);

    /// Construct from individual RGBA components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Construct an opaque color from RGB.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Construct an opaque color from a 0xRRGGBB literal.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    /// Parse `#rrggbb` (the leading `#` is optional). Anything else is
    /// rejected.
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_rgb_u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Perceived brightness in `0..=255` (ITU-R BT.601 weights).
    pub const fn luma(self) -> u8 {
        let r = self.red() as u32;
        let g = self.green() as u32;
        let b = self.blue() as u32;
        ((r * 299 + g * 587 + b * 114) / 1000) as u8
    }

    /// Black or white, whichever reads better on top of this color.
    pub const fn contrasting_text(self) -> Self {
        if self.luma() > 150 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

#[inline]
fn clip_row_span_bounds(
    width: u32,
    height: u32,
    row: i32,
    x0: i32,
    x1: i32,
) -> Option<(usize, usize, usize)> {
    if row < 0 || row >= height as i32 {
        return None;
    }
    let w = width as i32;
    let x0 = x0.max(0);
    let x1 = x1.min(w - 1);
    if x0 > x1 {
        return None;
    }
    Some((row as usize, x0 as usize, x1 as usize))
}

/// Drawing surface with 32-bit ARGB pixels.
///
/// Implementors provide the pixel store; span, pixel and rect helpers are
/// default methods built on `write_pixel_at`.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Row stride in pixels.
    fn stride(&self) -> usize {
        self.width() as usize
    }

    /// Write one pixel at a linear pixel index. Callers keep `index` within
    /// `stride * height`.
    fn write_pixel_at(&mut self, index: usize, color: Color32);

    /// Read one pixel back, if the surface supports it.
    fn read_pixel(&self, x: i32, y: i32) -> Option<Color32>;

    #[inline]
    fn clip_row_span(&self, row: i32, x0: i32, x1: i32) -> Option<(usize, usize, usize)> {
        clip_row_span_bounds(self.width(), self.height(), row, x0, x1)
    }

    /// Fill columns `x0..=x1` on `row`, clipped to the surface.
    #[inline]
    fn fill_row_span(&mut self, row: i32, x0: i32, x1: i32, color: Color32) {
        let Some((row, x0, x1)) = self.clip_row_span(row, x0, x1) else {
            return;
        };
        let row_start = row * self.stride();
        for x in x0..=x1 {
            self.write_pixel_at(row_start + x, color);
        }
    }

    /// Out-of-bounds writes are ignored.
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Color32) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let index = (y as usize) * self.stride() + x as usize;
        self.write_pixel_at(index, color);
    }

    #[inline]
    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color32) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.fill_row_span(y, x0, x1, color);
    }

    #[inline]
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color32) {
        if w <= 0 || h <= 0 {
            return;
        }
        for row in y..y + h {
            self.fill_row_span(row, x, x + w - 1, color);
        }
    }
}
