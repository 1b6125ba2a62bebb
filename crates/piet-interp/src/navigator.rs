//! The DP/CC navigation state machine.
//!
//! Owns the entire control-flow state of a Piet program: current position,
//! direction pointer, and codel chooser. One [`Navigator::advance`] call is
//! one attempted transition between regions, including the 8-state
//! recovery protocol that doubles as the halting detector: a program halts
//! exactly when no (DP, CC) orientation offers an exit from the current
//! region.

use crate::grid::Grid;
use crate::region::{Region, RegionLocator};
use crate::trace::{TraceEvent, Tracer};
use piet_types::{Cc, Codel, Dp, PietError, Point, Rgb};
use std::rc::Rc;

/// The outcome of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Position moved to a new codel.
    Moved {
        from: Point,
        to: Point,
        /// Classification of the codel left behind.
        departed: Codel,
        /// Classification of the codel entered.
        entered: Codel,
        /// Size of the region departed (0 when gliding out of white).
        block_size: usize,
    },
    /// All 8 (DP, CC) states were exhausted without a legal move.
    Halted,
}

/// Position, direction pointer, and codel chooser.
#[derive(Debug)]
pub struct Navigator {
    pos: Point,
    dp: Dp,
    cc: Cc,
    regions: RegionLocator,
}

impl Navigator {
    /// A navigator at `start`, heading East with the chooser Left.
    pub fn new(start: Point) -> Self {
        Self {
            pos: start,
            dp: Dp::East,
            cc: Cc::Left,
            regions: RegionLocator::new(),
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn dp(&self) -> Dp {
        self.dp
    }

    pub fn cc(&self) -> Cc {
        self.cc
    }

    /// The `pointer` operation: rotate DP clockwise `count` times.
    /// Counter-clockwise rotation (negative count) is unsupported.
    pub fn rotate_pointer(&mut self, count: i64) -> Result<(), PietError> {
        if count < 0 {
            return Err(PietError::Unsupported(format!(
                "pointer rotation with negative count {count}"
            )));
        }
        for _ in 0..(count % 4) {
            self.dp = self.dp.rotate();
        }
        Ok(())
    }

    /// The `switch` operation: toggle CC iff `count` is odd.
    pub fn switch_chooser(&mut self, count: i64) {
        if count.rem_euclid(2) == 1 {
            self.cc = self.cc.toggle();
        }
    }

    /// Attempt one transition, running recovery if the direct move is
    /// blocked.
    ///
    /// Attempts alternate between toggling CC and rotating DP (CC first),
    /// and stop the moment one succeeds. If DP and CC return to their
    /// pre-recovery values the program has no exit: report `Halted`.
    pub fn advance(
        &mut self,
        grid: &Grid,
        tracer: &mut dyn Tracer,
    ) -> Result<Advance, PietError> {
        let from = self.pos;
        let departed = Codel::classify(self.color_at(grid, from)?)?;

        // White movement ignores region logic entirely; everything else
        // leaves via the region's exit codel. The region is computed once:
        // recovery re-picks exit codels, never the region.
        let region = if departed == Codel::White {
            None
        } else {
            Some(self.regions.region_at(grid, from))
        };

        let origin = (self.dp, self.cc);
        let mut toggle_cc_next = true;
        let mut in_recovery = false;

        loop {
            let attempt = match &region {
                Some(region) => self.attempt_step(grid, region)?,
                None => self.attempt_glide(grid)?,
            };

            if let Some((to, entered)) = attempt {
                self.pos = to;
                if in_recovery {
                    tracer.record(&TraceEvent::RecoveryEnd {
                        dp: self.dp,
                        cc: self.cc,
                        halted: false,
                    });
                }
                let event = if departed == Codel::White {
                    TraceEvent::Glide {
                        from,
                        to,
                        dp: self.dp,
                    }
                } else {
                    TraceEvent::Step {
                        from,
                        to,
                        dp: self.dp,
                        cc: self.cc,
                    }
                };
                tracer.record(&event);
                let block_size = region.as_ref().map_or(0, |r| r.size());
                return Ok(Advance::Moved {
                    from,
                    to,
                    departed,
                    entered,
                    block_size,
                });
            }

            if !in_recovery {
                in_recovery = true;
                tracer.record(&TraceEvent::RecoveryStart {
                    pos: self.pos,
                    dp: self.dp,
                    cc: self.cc,
                });
            }
            if toggle_cc_next {
                self.cc = self.cc.toggle();
            } else {
                self.dp = self.dp.rotate();
            }
            toggle_cc_next = !toggle_cc_next;

            if (self.dp, self.cc) == origin {
                tracer.record(&TraceEvent::RecoveryEnd {
                    dp: self.dp,
                    cc: self.cc,
                    halted: true,
                });
                tracer.record(&TraceEvent::Halt { pos: self.pos });
                return Ok(Advance::Halted);
            }
        }
    }

    /// One attempted step out of a colored region: move to the exit codel
    /// for the current DP/CC, then try to cross into the adjacent codel.
    fn attempt_step(
        &mut self,
        grid: &Grid,
        region: &Rc<Region>,
    ) -> Result<Option<(Point, Codel)>, PietError> {
        let exit = region.exit_codel(self.dp, self.cc);
        self.pos = exit;
        let (dx, dy) = self.dp.offset();
        let next = exit.offset(dx, dy);
        let Some(color) = grid.get(next) else {
            return Ok(None);
        };
        match Codel::classify(color)? {
            Codel::Black => Ok(None),
            entered => Ok(Some((next, entered))),
        }
    }

    /// One attempted glide through white: advance codel by codel in the
    /// DP direction until the first non-white codel. Entering a colored
    /// codel succeeds; black or the grid edge leaves the position on the
    /// last white codel for recovery to handle.
    fn attempt_glide(&mut self, grid: &Grid) -> Result<Option<(Point, Codel)>, PietError> {
        let (dx, dy) = self.dp.offset();
        loop {
            let next = self.pos.offset(dx, dy);
            let Some(color) = grid.get(next) else {
                return Ok(None);
            };
            match Codel::classify(color)? {
                Codel::White => self.pos = next,
                Codel::Black => return Ok(None),
                entered => return Ok(Some((next, entered))),
            }
        }
    }

    fn color_at(&self, grid: &Grid, p: Point) -> Result<Rgb, PietError> {
        grid.get(p)
            .ok_or_else(|| PietError::InvalidGrid(format!("position {p} outside the grid")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_rotates_clockwise_modulo_four() {
        let mut nav = Navigator::new(Point::new(0, 0));
        nav.rotate_pointer(1).unwrap();
        assert_eq!(nav.dp(), Dp::South);
        nav.rotate_pointer(6).unwrap();
        assert_eq!(nav.dp(), Dp::North);
        nav.rotate_pointer(0).unwrap();
        assert_eq!(nav.dp(), Dp::North);
    }

    #[test]
    fn negative_pointer_rotation_is_unsupported() {
        let mut nav = Navigator::new(Point::new(0, 0));
        let err = nav.rotate_pointer(-1);
        assert!(matches!(err, Err(PietError::Unsupported(_))));
        assert_eq!(nav.dp(), Dp::East);
    }

    #[test]
    fn switch_toggles_on_odd_counts_only() {
        let mut nav = Navigator::new(Point::new(0, 0));
        nav.switch_chooser(2);
        assert_eq!(nav.cc(), Cc::Left);
        nav.switch_chooser(-3);
        assert_eq!(nav.cc(), Cc::Right);
        nav.switch_chooser(1);
        assert_eq!(nav.cc(), Cc::Left);
    }
}
