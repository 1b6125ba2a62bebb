//! The immutable program grid.

use piet_types::{PietError, Point, Rgb};

/// A read-only 2D grid of exact color values.
///
/// Constructed once from decoded image data and never mutated; every
/// region and classification result is a pure function of it.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
}

impl Grid {
    /// Build a grid from row-major pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, PietError> {
        if width == 0 || height == 0 {
            return Err(PietError::InvalidGrid(format!(
                "empty grid ({width}x{height})"
            )));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(PietError::InvalidGrid(format!(
                "{}x{} grid needs {expected} pixels, got {}",
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
            pixels,
        })
    }

    /// Build a grid by sampling a function at every coordinate.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut pixel: impl FnMut(u32, u32) -> Rgb,
    ) -> Result<Self, PietError> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The starting coordinate of execution (the grid's minimum corner).
    pub fn origin(&self) -> Point {
        Point::new(0, 0)
    }

    /// Whether `p` lies within the grid bounds.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The color at `p`, or `None` when out of bounds.
    pub fn get(&self, p: Point) -> Option<Rgb> {
        if self.contains(p) {
            Some(self.pixels[p.y as usize * self.width as usize + p.x as usize])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_pixel_count() {
        let result = Grid::new(2, 2, vec![Rgb::BLACK; 3]);
        assert!(matches!(result, Err(PietError::InvalidGrid(_))));
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(matches!(
            Grid::new(0, 3, vec![]),
            Err(PietError::InvalidGrid(_))
        ));
    }

    #[test]
    fn indexes_row_major() {
        let grid = Grid::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        assert_eq!(grid.get(Point::new(2, 1)), Some(Rgb::new(2, 1, 0)));
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.get(Point::new(0, -1)), None);
    }
}
