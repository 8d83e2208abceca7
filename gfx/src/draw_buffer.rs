use raffle_abi::draw::{Canvas, Color32};

pub const BYTES_PER_PIXEL: usize = 4;

/// A heap-free ARGB8888 pixel buffer that implements [`Canvas`].
///
/// `DrawBuffer` wraps a caller-supplied `&mut [u8]` slice (memory layout
/// `[B, G, R, A]` per pixel) and provides bounds-checked pixel writes. Hosts
/// hand it a shared-memory surface, an image buffer or a plain `Vec<u8>`.
pub struct DrawBuffer<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    pitch: usize,
}

impl<'a> DrawBuffer<'a> {
    /// `pitch` is the row stride in bytes and must hold a whole number of
    /// pixels.
    pub fn new(data: &'a mut [u8], width: u32, height: u32, pitch: usize) -> Option<Self> {
        if pitch < width as usize * BYTES_PER_PIXEL || pitch % BYTES_PER_PIXEL != 0 {
            return None;
        }
        let required_size = pitch * (height as usize);
        if data.len() < required_size {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            pitch,
        })
    }

    /// Tightly packed buffer (`pitch == width * 4`).
    pub fn packed(data: &'a mut [u8], width: u32, height: u32) -> Option<Self> {
        Self::new(data, width, height, width as usize * BYTES_PER_PIXEL)
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn data(&self) -> &[u8] {
        self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data
    }
}

impl Canvas for DrawBuffer<'_> {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn stride(&self) -> usize {
        self.pitch / BYTES_PER_PIXEL
    }

    #[inline]
    fn write_pixel_at(&mut self, index: usize, color: Color32) {
        let off = index * BYTES_PER_PIXEL;
        if off + BYTES_PER_PIXEL <= self.data.len() {
            self.data[off..off + BYTES_PER_PIXEL].copy_from_slice(&color.to_u32().to_le_bytes());
        }
    }

    fn read_pixel(&self, x: i32, y: i32) -> Option<Color32> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let off = (y as usize) * self.pitch + (x as usize) * BYTES_PER_PIXEL;
        let bytes = self.data.get(off..off + BYTES_PER_PIXEL)?;
        Some(Color32(u32::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ])))
    }

    #[inline]
    fn fill_row_span(&mut self, row: i32, x0: i32, x1: i32, color: Color32) {
        let Some((row, x0, x1)) = self.clip_row_span(row, x0, x1) else {
            return;
        };
        let row_off = row * self.pitch + x0 * BYTES_PER_PIXEL;
        let end = row_off + (x1 - x0 + 1) * BYTES_PER_PIXEL;
        if end > self.data.len() {
            return;
        }
        let row_slice = &mut self.data[row_off..end];
        if color.to_u32() == 0 {
            row_slice.fill(0);
        } else {
            let bytes = color.to_u32().to_le_bytes();
            for chunk in row_slice.chunks_exact_mut(BYTES_PER_PIXEL) {
                chunk.copy_from_slice(&bytes);
            }
        }
    }
}
