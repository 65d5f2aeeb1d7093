/// Integer axis-aligned rectangle in screen pixels.
///
/// `x`/`y` is the top-left corner. The rectangle covers the half-open ranges
/// `x..x + width` and `y..y + height`, so `right()` and `bottom()` are one
/// past the last covered pixel.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Place the rectangle so its bottom edge is centered on `(center_x, bottom)`.
    pub fn set_mid_bottom(&mut self, center_x: i32, bottom: i32) {
        self.x = center_x - self.width / 2;
        self.y = bottom - self.height;
    }

    /// Place the rectangle so its top edge is centered on `(center_x, top)`.
    pub fn set_mid_top(&mut self, center_x: i32, top: i32) {
        self.x = center_x - self.width / 2;
        self.y = top;
    }

    /// True when the two rectangles share at least one pixel. Rectangles that
    /// only touch along an edge do not overlap, and empty rectangles never do.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// The part of `self` that lies inside `bounds`, if any.
    pub fn clip(&self, bounds: &Rect) -> Option<Rect> {
        let left = self.left().max(bounds.left());
        let top = self.top().max(bounds.top());
        let right = self.right().min(bounds.right());
        let bottom = self.bottom().min(bounds.bottom());
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.center_x(), 25);
    }

    #[test]
    fn mid_bottom_and_mid_top_placement() {
        let mut ship = Rect::new(0, 0, 60, 48);
        ship.set_mid_bottom(640, 800);
        assert_eq!((ship.x, ship.y), (610, 752));

        let mut bullet = Rect::new(0, 0, 3, 15);
        bullet.set_mid_top(ship.center_x(), ship.top());
        assert_eq!((bullet.x, bullet.y), (639, 752));
    }

    #[test]
    fn overlap_requires_shared_pixels() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(9, 9, 5, 5)));
        assert!(a.overlaps(&Rect::new(2, 2, 2, 2)));
        // Touching edges only.
        assert!(!a.overlaps(&Rect::new(10, 0, 5, 5)));
        assert!(!a.overlaps(&Rect::new(0, 10, 5, 5)));
        assert!(!a.overlaps(&Rect::new(3, 3, 0, 4)));
    }

    #[test]
    fn clip_to_bounds() {
        let screen = Rect::new(0, 0, 100, 50);
        assert_eq!(
            Rect::new(-5, 40, 20, 20).clip(&screen),
            Some(Rect::new(0, 40, 15, 10))
        );
        assert_eq!(Rect::new(0, -20, 3, 15).clip(&screen), None);
        assert_eq!(Rect::new(10, 10, 5, 5).clip(&screen), Some(Rect::new(10, 10, 5, 5)));
    }
}
