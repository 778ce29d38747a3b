use image::{GrayImage, Luma, Rgb, RgbImage};

/// Icon sizes declared by the web app manifest, smallest first.
pub const SIZES: [u32; 9] = [72, 96, 128, 144, 152, 167, 180, 192, 512];

/// Gradient endpoints: indigo (#6366f1) at the top, violet (#8b5cf6) at the bottom.
pub const PRIMARY_COLOR: Rgb<u8> = Rgb([99, 102, 241]);
pub const SECONDARY_COLOR: Rgb<u8> = Rgb([139, 92, 246]);

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Sizes at or above this get rounded-corner masking.
const ROUNDED_CORNER_MIN_SIZE: u32 = 192;

/// Render a single icon: vertical gradient background, white checkmark,
/// and rounded corners for the larger sizes.
///
/// The result is always exactly `size`x`size`, fully opaque RGB.
pub fn render(size: u32) -> RgbImage {
    let mut canvas = RgbImage::new(size, size);

    fill_vertical_gradient(&mut canvas, PRIMARY_COLOR, SECONDARY_COLOR);
    draw_checkmark(&mut canvas);

    if size >= ROUNDED_CORNER_MIN_SIZE {
        canvas = round_corners(&canvas, size / 5);
    }

    canvas
}

/// Fill the canvas with a row-by-row blend from `top` to `bottom`.
fn fill_vertical_gradient(canvas: &mut RgbImage, top: Rgb<u8>, bottom: Rgb<u8>) {
    let height = canvas.height();
    for y in 0..height {
        let t = y as f32 / height as f32;
        let row_color = blend(top, bottom, t);
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, row_color);
        }
    }
}

/// Per-channel linear blend, truncated to 8 bits.
fn blend(a: Rgb<u8>, b: Rgb<u8>, t: f32) -> Rgb<u8> {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Rgb([
        channel(a.0[0], b.0[0]),
        channel(a.0[1], b.0[1]),
        channel(a.0[2], b.0[2]),
    ])
}

/// Draw the two-segment white checkmark through its relative vertices.
fn draw_checkmark(canvas: &mut RgbImage) {
    let size = canvas.width();
    let s = size as f32;
    let vertices = [(s * 0.25, s * 0.50), (s * 0.40, s * 0.65), (s * 0.75, s * 0.35)];
    let stroke_width = (size / 20).max(2) as f32;

    draw_polyline(canvas, &vertices, stroke_width, WHITE);
}

/// Stroke a polyline by per-pixel distance-to-segment coverage (round caps).
fn draw_polyline(canvas: &mut RgbImage, vertices: &[(f32, f32)], stroke_width: f32, color: Rgb<u8>) {
    let half = stroke_width / 2.0;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let covered = vertices
                .windows(2)
                .any(|seg| segment_distance(px, py, seg[0], seg[1]) <= half);
            if covered {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Distance from a point to the closest point on a line segment.
fn segment_distance(px: f32, py: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let (x1, y1) = from;
    let (x2, y2) = to;
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let cx = x1 + t * dx;
    let cy = y1 + t * dy;
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

/// Composite the canvas over a white background through a rounded-rectangle
/// mask, so the corners outside the radius come out white. Output stays
/// opaque RGB; the mask is transient.
fn round_corners(canvas: &RgbImage, radius: u32) -> RgbImage {
    let size = canvas.width();
    let mask = rounded_rect_mask(size, radius);

    let mut rounded = RgbImage::from_pixel(size, size, WHITE);
    for (x, y, pixel) in rounded.enumerate_pixels_mut() {
        if mask.get_pixel(x, y).0[0] != 0 {
            *pixel = *canvas.get_pixel(x, y);
        }
    }
    rounded
}

/// Full-canvas rounded rectangle as a single-channel coverage mask.
///
/// Membership is inclusive at the radius boundary: a pixel is inside when its
/// distance to the inner rectangle is at most `radius`.
fn rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    let r = radius as f32;
    let lo = r;
    let hi = (size - 1) as f32 - r;
    GrayImage::from_fn(size, size, |x, y| {
        let dx = (x as f32).clamp(lo, hi) - x as f32;
        let dy = (y as f32).clamp(lo, hi) - y as f32;
        if dx * dx + dy * dy <= r * r {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
