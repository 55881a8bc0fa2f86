/// Axis-aligned box in playfield pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict overlap: boxes that only share an edge do not touch.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x + self.w > other.x
            && self.x < other.x + other.w
            && self.y + self.h > other.y
            && self.y < other.y + other.h
    }
}
