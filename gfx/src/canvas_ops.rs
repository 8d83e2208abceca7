use raffle_abi::draw::{Canvas, Color32};

pub fn line<T: Canvas>(target: &mut T, x0: i32, y0: i32, x1: i32, y1: i32, color: Color32) {
    let w = target.width() as i32;
    let h = target.height() as i32;

    if (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h) {
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cx = x0;
    let mut cy = y0;

    loop {
        target.put_pixel(cx, cy, color);
        if cx == x1 && cy == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            cx += sx;
        }
        if e2 <= dx {
            err += dx;
            cy += sy;
        }
    }
}

pub fn fill_rect<T: Canvas>(target: &mut T, x: i32, y: i32, w: i32, h: i32, color: Color32) {
    target.fill_rect(x, y, w, h, color);
}

/// Filled annulus between `inner` (exclusive) and `outer` (inclusive).
/// An `inner` of zero or less fills the whole disc.
pub fn ring<T: Canvas>(target: &mut T, cx: i32, cy: i32, inner: i32, outer: i32, color: Color32) {
    if outer <= 0 || inner >= outer {
        return;
    }

    let outer_sq = (outer as u64) * (outer as u64);
    let inner_sq = (inner.max(0) as u64) * (inner.max(0) as u64);

    for dy in -outer..=outer {
        let dy_sq = (dy as i64 * dy as i64) as u64;
        let xo = (outer_sq - dy_sq).isqrt() as i32;
        let y = cy + dy;
        if inner > 0 && dy_sq <= inner_sq {
            let xi = (inner_sq - dy_sq).isqrt() as i32;
            if xi < xo {
                target.hline(cx - xo, cx - xi - 1, y, color);
                target.hline(cx + xi + 1, cx + xo, y, color);
            }
        } else {
            target.hline(cx - xo, cx + xo, y, color);
        }
    }
}

pub fn circle_filled<T: Canvas>(target: &mut T, cx: i32, cy: i32, radius: i32, color: Color32) {
    if radius <= 0 {
        return;
    }

    let mut x = 0i32;
    let mut y = radius;
    let mut d = 1 - radius;

    target.hline(cx - radius, cx + radius, cy, color);

    while x < y {
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            target.hline(cx - x + 1, cx + x - 1, cy + y, color);
            target.hline(cx - x + 1, cx + x - 1, cy - y, color);
            y -= 1;
            d += 2 * (x - y) + 1;
        }

        target.hline(cx - y, cx + y, cy + x, color);
        target.hline(cx - y, cx + y, cy - x, color);
    }
}

#[allow(clippy::too_many_arguments)]
pub fn triangle_filled<T: Canvas>(
    target: &mut T,
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    mut x2: i32,
    mut y2: i32,
    color: Color32,
) {
    if y0 > y1 {
        core::mem::swap(&mut y0, &mut y1);
        core::mem::swap(&mut x0, &mut x1);
    }
    if y1 > y2 {
        core::mem::swap(&mut y1, &mut y2);
        core::mem::swap(&mut x1, &mut x2);
    }
    if y0 > y1 {
        core::mem::swap(&mut y0, &mut y1);
        core::mem::swap(&mut x0, &mut x1);
    }

    let total_height = y2 - y0;
    if total_height == 0 {
        let min_x = x0.min(x1).min(x2);
        let max_x = x0.max(x1).max(x2);
        target.hline(min_x, max_x, y0, color);
        return;
    }

    for y in y0..=y2 {
        let second_half = y > y1 || y1 == y0;
        let segment_height = if second_half { y2 - y1 } else { y1 - y0 };
        if segment_height == 0 {
            continue;
        }

        let dy = y - if second_half { y1 } else { y0 };
        let alpha = ((y - y0) as i64 * 65536) / total_height as i64;
        let beta = (dy as i64 * 65536) / segment_height as i64;

        let ax = x0 + (((x2 - x0) as i64 * alpha) >> 16) as i32;
        let bx = if second_half {
            x1 + (((x2 - x1) as i64 * beta) >> 16) as i32
        } else {
            x0 + (((x1 - x0) as i64 * beta) >> 16) as i32
        };

        let (xa, xb) = if ax < bx { (ax, bx) } else { (bx, ax) };
        target.hline(xa, xb, y, color);
    }
}
