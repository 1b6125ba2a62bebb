//! Region analysis: maximal same-colored 4-connected components.
//!
//! Membership is exact RGB equality, not hue/lightness equality — two
//! touching blocks of different exact colors are never merged even if they
//! classify into the same bucket. Regions are pure functions of the
//! immutable grid, so [`RegionLocator`] memoizes them per member codel.

use crate::grid::Grid;
use piet_types::{Cc, Dp, Point, Rect};
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::rc::Rc;

/// A maximal 4-connected set of codels sharing one exact color, plus its
/// bounding rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    codels: BTreeSet<Point>,
    bounds: Rect,
    anchor: Point,
}

impl Region {
    /// Number of codels — the value `push` pushes on departure.
    pub fn size(&self) -> usize {
        self.codels.len()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn contains(&self, p: Point) -> bool {
        self.codels.contains(&p)
    }

    pub fn codels(&self) -> impl Iterator<Item = Point> + '_ {
        self.codels.iter().copied()
    }

    /// The codel the navigator leaves from for a given DP/CC.
    ///
    /// Among the codels on the boundary face extreme in the DP direction,
    /// pick the one furthest to the CC side:
    ///
    /// | DP    | face  | CC=Left | CC=Right |
    /// |-------|-------|---------|----------|
    /// | East  | max x | min y   | max y    |
    /// | South | max y | max x   | min x    |
    /// | West  | min x | max y   | min y    |
    /// | North | min y | min x   | max x    |
    pub fn exit_codel(&self, dp: Dp, cc: Cc) -> Point {
        let mut best: Option<Point> = None;
        for &p in &self.codels {
            let on_face = match dp {
                Dp::East => p.x == self.bounds.max_x,
                Dp::South => p.y == self.bounds.max_y,
                Dp::West => p.x == self.bounds.min_x,
                Dp::North => p.y == self.bounds.min_y,
            };
            if !on_face {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => match (dp, cc) {
                    (Dp::East, Cc::Left) => p.y < b.y,
                    (Dp::East, Cc::Right) => p.y > b.y,
                    (Dp::South, Cc::Left) => p.x > b.x,
                    (Dp::South, Cc::Right) => p.x < b.x,
                    (Dp::West, Cc::Left) => p.y > b.y,
                    (Dp::West, Cc::Right) => p.y < b.y,
                    (Dp::North, Cc::Left) => p.x < b.x,
                    (Dp::North, Cc::Right) => p.x > b.x,
                },
            };
            if better {
                best = Some(p);
            }
        }
        // A region always has at least one codel on each extreme face.
        best.unwrap_or(self.anchor)
    }
}

/// Flood-fill the maximal region containing `start`.
///
/// Breadth-first over 4-adjacent neighbors, admitting a neighbor iff it is
/// in bounds and exactly matches the start color. Deterministic and
/// order-independent: the result is the same from any member codel.
pub fn locate(grid: &Grid, start: Point) -> Region {
    let mut codels = BTreeSet::new();
    let mut bounds = Rect::point(start);
    let Some(color) = grid.get(start) else {
        // Out-of-bounds start: degenerate single-point region. The
        // navigator never asks for one.
        codels.insert(start);
        return Region {
            codels,
            bounds,
            anchor: start,
        };
    };

    let mut queue = VecDeque::new();
    codels.insert(start);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        bounds = bounds.extend(p);
        for next in p.neighbors() {
            if grid.get(next) == Some(color) && codels.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Region {
        codels,
        bounds,
        anchor: start,
    }
}

/// Memoizing region lookup.
///
/// The grid never mutates, so a region computed once is valid forever;
/// every member codel maps to the same shared region.
#[derive(Debug, Default)]
pub struct RegionLocator {
    cache: HashMap<Point, Rc<Region>>,
}

impl RegionLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The region containing `p`, flood-filling on first sight.
    pub fn region_at(&mut self, grid: &Grid, p: Point) -> Rc<Region> {
        if let Some(region) = self.cache.get(&p) {
            return Rc::clone(region);
        }
        let region = Rc::new(locate(grid, p));
        for member in region.codels() {
            self.cache.insert(member, Rc::clone(&region));
        }
        Rc::clone(&region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use piet_types::Rgb;

    const R: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    const G: Rgb = Rgb::new(0x00, 0xFF, 0x00);

    /// Build a grid from single-char rows ('r' red, 'g' green, '.' black).
    fn grid(rows: &[&str]) -> Grid {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        Grid::from_fn(width, height, |x, y| {
            match rows[y as usize].as_bytes()[x as usize] {
                b'r' => R,
                b'g' => G,
                _ => Rgb::BLACK,
            }
        })
        .unwrap()
    }

    #[test]
    fn flood_fill_is_4_connected() {
        // The diagonal 'r' at (2,2) must not join the L-shaped block.
        let g = grid(&["rr.", "r..", "..r"]);
        let region = locate(&g, Point::new(0, 0));
        assert_eq!(region.size(), 3);
        assert!(!region.contains(Point::new(2, 2)));
    }

    #[test]
    fn locate_is_member_independent() {
        let g = grid(&["rrr", "r.r", "rrr"]);
        let from_corner = locate(&g, Point::new(0, 0));
        let from_edge = locate(&g, Point::new(2, 1));
        assert_eq!(
            from_corner.codels().collect::<Vec<_>>(),
            from_edge.codels().collect::<Vec<_>>()
        );
        assert_eq!(from_corner.bounds(), from_edge.bounds());
        assert_eq!(from_corner.size(), 8);
    }

    #[test]
    fn different_exact_colors_never_merge() {
        let g = grid(&["rg"]);
        assert_eq!(locate(&g, Point::new(0, 0)).size(), 1);
        assert_eq!(locate(&g, Point::new(1, 0)).size(), 1);
    }

    #[test]
    fn bounds_cover_the_region() {
        let g = grid(&[".rr", ".r.", ".r."]);
        let region = locate(&g, Point::new(1, 2));
        assert_eq!(
            region.bounds(),
            Rect {
                min_x: 1,
                min_y: 0,
                max_x: 2,
                max_y: 2
            }
        );
    }

    #[test]
    fn exit_codel_tie_breaks_match_the_table() {
        // 2x2 block at (0,0)-(1,1): each (DP, CC) pair picks a corner.
        let g = grid(&["rr", "rr"]);
        let region = locate(&g, Point::new(0, 0));
        let cases = [
            (Dp::East, Cc::Left, Point::new(1, 0)),
            (Dp::East, Cc::Right, Point::new(1, 1)),
            (Dp::South, Cc::Left, Point::new(1, 1)),
            (Dp::South, Cc::Right, Point::new(0, 1)),
            (Dp::West, Cc::Left, Point::new(0, 1)),
            (Dp::West, Cc::Right, Point::new(0, 0)),
            (Dp::North, Cc::Left, Point::new(0, 0)),
            (Dp::North, Cc::Right, Point::new(1, 0)),
        ];
        for (dp, cc, expected) in cases {
            assert_eq!(region.exit_codel(dp, cc), expected, "dp {dp:?} cc {cc:?}");
        }
    }

    #[test]
    fn locator_shares_cached_regions() {
        let g = grid(&["rrr"]);
        let mut locator = RegionLocator::new();
        let a = locator.region_at(&g, Point::new(0, 0));
        let b = locator.region_at(&g, Point::new(2, 0));
        assert!(Rc::ptr_eq(&a, &b));
    }
}
