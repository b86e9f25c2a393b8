/// A 2D point in layout coordinates (pixels, y grows downwards).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_both() {
        let a = Bounds::new(Point::new(0.0, -8.0), Point::new(10.0, 2.0));
        let b = Bounds::new(Point::new(10.0, -12.0), Point::new(25.0, 1.0));
        let u = a.union(&b);
        assert_eq!(u, Bounds::new(Point::new(0.0, -12.0), Point::new(25.0, 2.0)));
        assert_eq!(u.width(), 25.0);
        assert_eq!(u.height(), 14.0);
    }
}
