use std::collections::HashSet;

use glam::IVec2;
use itertools::Itertools;
use tracing::trace;

use crate::error::GardenError;

/// A directed straight stretch of fence.
///
/// Unit sides are created per exposed plot edge and later merged with their
/// collinear neighbours. All sides facing the same way around a region run
/// in the same direction, so opposing fences on one line never merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Side {
    pub start: IVec2,
    pub end: IVec2,
}

impl Side {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        Self { start, end }
    }

    /// Unit side along the edge between a region plot and its `neighbor`,
    /// where `outward` is the step from the plot to that neighbor.
    pub fn facing(neighbor: IVec2, outward: IVec2) -> Self {
        // quarter turn of the outward step
        let along = IVec2::new(-outward.y, outward.x);
        Self::new(neighbor, neighbor + along)
    }

    /// Unit step from `start` towards `end`.
    pub fn heading(&self) -> IVec2 {
        (self.end - self.start).signum()
    }

    /// True when `next` carries on where this side ends, in the same heading.
    pub fn continues_into(&self, next: &Side) -> bool {
        self.end == next.start && self.start != next.end && self.heading() == next.heading()
    }

    pub fn merge(&self, next: &Side) -> Side {
        Side::new(self.start, next.end)
    }
}

/// Merges collinear, touching sides until none are left to merge.
///
/// Returns the number of merges performed. Every merge removes one side, so
/// running past `len - 1` merges means the set is corrupt.
pub fn reduce_sides(sides: &mut HashSet<Side>) -> Result<usize, GardenError> {
    let initial = sides.len();
    let limit = initial.saturating_sub(1);
    let mut merges = 0;

    while let Some((first, second)) = find_mergeable(sides) {
        if merges >= limit {
            return Err(GardenError::SideReduction {
                sides: initial,
                merges,
            });
        }

        sides.remove(&first);
        sides.remove(&second);
        sides.insert(first.merge(&second));
        merges += 1;
    }

    trace!(initial, remaining = sides.len(), merges, "Reduced sides");
    Ok(merges)
}

fn find_mergeable(sides: &HashSet<Side>) -> Option<(Side, Side)> {
    let by_start = sides.iter().into_group_map_by(|side| side.start);

    sides.iter().find_map(|side| {
        by_start
            .get(&side.end)?
            .iter()
            .find(|next| side.continues_into(next))
            .map(|next| (*side, **next))
    })
}
