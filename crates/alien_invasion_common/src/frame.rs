use crate::color::Color;
use crate::rect::Rect;

/// Bytes per pixel in the RGB24 screen buffer.
pub const BYTES_PER_PIXEL: usize = 3;

/// A 1-bit pixel-art mask. Each row is a string where `#` marks an opaque
/// pixel and any other character is transparent. All rows have the same length.
#[derive(Copy, Clone, Debug)]
pub struct Sprite {
    pub rows: &'static [&'static str],
}

impl Sprite {
    pub const fn new(rows: &'static [&'static str]) -> Sprite {
        Sprite { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_opaque(&self, col: usize, row: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.as_bytes().get(col))
            .is_some_and(|&b| b == b'#')
    }
}

/// Software RGB24 surface over a borrowed screen buffer.
///
/// All drawing is clipped to the surface; callers may pass rectangles that
/// are partially or entirely off-screen.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height * BYTES_PER_PIXEL);
        FrameBuffer {
            pixels,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(visible) = rect.clip(&self.bounds()) else {
            return;
        };
        for y in visible.top()..visible.bottom() {
            for x in visible.left()..visible.right() {
                self.put_pixel(x as usize, y as usize, color);
            }
        }
    }

    /// Draw `sprite` stretched over `rect` with nearest-neighbour sampling.
    /// Transparent sprite pixels leave the surface untouched.
    pub fn blit_sprite(&mut self, sprite: &Sprite, rect: Rect, color: Color) {
        let (sprite_w, sprite_h) = (sprite.width(), sprite.height());
        if sprite_w == 0 || sprite_h == 0 {
            return;
        }
        let Some(visible) = rect.clip(&self.bounds()) else {
            return;
        };
        for y in visible.top()..visible.bottom() {
            let row = ((y - rect.y) as usize * sprite_h) / rect.height as usize;
            for x in visible.left()..visible.right() {
                let col = ((x - rect.x) as usize * sprite_w) / rect.width as usize;
                if sprite.is_opaque(col, row) {
                    self.put_pixel(x as usize, y as usize, color);
                }
            }
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let index = (y * self.width + x) * BYTES_PER_PIXEL;
        Color::new_rgb(
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
        )
    }

    #[inline]
    fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = (y * self.width + x) * BYTES_PER_PIXEL;
        self.pixels[index] = color.r;
        self.pixels[index + 1] = color.g;
        self.pixels[index + 2] = color.b;
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameBuffer, Sprite, BYTES_PER_PIXEL};
    use crate::{Color, Rect};

    const RED: Color = Color::new_rgb(255, 0, 0);

    fn screen(width: usize, height: usize) -> Vec<u8> {
        vec![0u8; width * height * BYTES_PER_PIXEL]
    }

    #[test]
    fn fill_paints_every_pixel() {
        let mut pixels = screen(4, 3);
        let mut frame = FrameBuffer::new(&mut pixels, 4, 3);
        frame.fill(Color::WHITE);
        assert!(pixels.iter().all(|&b| b == 255));
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut pixels = screen(8, 8);
        let mut frame = FrameBuffer::new(&mut pixels, 8, 8);
        frame.fill_rect(Rect::new(6, -2, 5, 4), RED);

        assert_eq!(frame.pixel(6, 0), RED);
        assert_eq!(frame.pixel(7, 1), RED);
        assert_eq!(frame.pixel(6, 2), Color::BLACK);
        assert_eq!(frame.pixel(5, 0), Color::BLACK);

        // Entirely off-screen is a no-op.
        frame.fill_rect(Rect::new(-10, -10, 5, 5), Color::WHITE);
        assert_eq!(frame.pixel(0, 0), Color::BLACK);
    }

    #[test]
    fn blit_scales_sprite_and_skips_transparent_pixels() {
        const CHECKER: Sprite = Sprite::new(&["#.", ".#"]);
        let mut pixels = screen(4, 4);
        let mut frame = FrameBuffer::new(&mut pixels, 4, 4);
        frame.blit_sprite(&CHECKER, Rect::new(0, 0, 4, 4), RED);

        assert_eq!(frame.pixel(0, 0), RED);
        assert_eq!(frame.pixel(1, 1), RED);
        assert_eq!(frame.pixel(2, 0), Color::BLACK);
        assert_eq!(frame.pixel(0, 3), Color::BLACK);
        assert_eq!(frame.pixel(3, 3), RED);
    }

    #[test]
    fn sprite_dimensions() {
        const SHAPE: Sprite = Sprite::new(&[".#.", "###"]);
        assert_eq!(SHAPE.width(), 3);
        assert_eq!(SHAPE.height(), 2);
        assert!(SHAPE.is_opaque(1, 0));
        assert!(!SHAPE.is_opaque(0, 0));
        assert!(!SHAPE.is_opaque(5, 5));
    }
}
