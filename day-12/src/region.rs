use std::collections::HashSet;

use glam::IVec2;
use tracing::{debug, instrument};

use crate::error::GardenError;
use crate::garden::Garden;
use crate::side::{reduce_sides, Side};

const DIRECTIONS: [IVec2; 4] = [IVec2::NEG_Y, IVec2::Y, IVec2::NEG_X, IVec2::X];

/// A maximal group of touching plots growing the same plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub label: char,
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

impl Region {
    pub fn price(&self) -> usize {
        self.area * self.perimeter
    }

    pub fn discounted_price(&self) -> usize {
        self.area * self.sides
    }
}

/// Plots already assigned to a region.
#[derive(Debug, Clone)]
struct Visited {
    cells: Vec<Vec<bool>>,
}

impl Visited {
    fn new(garden: &Garden) -> Self {
        Self {
            cells: vec![vec![false; garden.width()]; garden.height()],
        }
    }

    fn contains(&self, position: IVec2) -> bool {
        self.cell(position).is_some_and(|visited| visited)
    }

    /// Marks `position`, returning false if it was already marked.
    fn mark(&mut self, position: IVec2) -> bool {
        let Some(cell) = self.cell_mut(position) else {
            return false;
        };
        !std::mem::replace(cell, true)
    }

    fn cell(&self, position: IVec2) -> Option<bool> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        self.cells.get(y)?.get(x).copied()
    }

    fn cell_mut(&mut self, position: IVec2) -> Option<&mut bool> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        self.cells.get_mut(y)?.get_mut(x)
    }
}

/// Splits a garden into its regions.
pub struct RegionScanner<'a> {
    garden: &'a Garden,
    visited: Visited,
}

impl<'a> RegionScanner<'a> {
    pub fn new(garden: &'a Garden) -> Self {
        Self {
            garden,
            visited: Visited::new(garden),
        }
    }

    /// Flood fills every unvisited plot in row-major order and returns one
    /// region per connected component.
    #[instrument(skip(self), fields(width = self.garden.width(), height = self.garden.height()))]
    pub fn scan(mut self) -> Result<Vec<Region>, GardenError> {
        let garden = self.garden;
        let mut regions = Vec::new();

        for position in garden.positions() {
            if self.visited.contains(position) {
                continue;
            }
            let Some(label) = garden.label(position) else {
                continue;
            };

            let region = self.flood_fill(position, label)?;
            debug!(
                label = %region.label,
                area = region.area,
                perimeter = region.perimeter,
                sides = region.sides,
                "Found region"
            );
            regions.push(region);
        }

        debug!(count = regions.len(), "Scanned garden");
        Ok(regions)
    }

    fn flood_fill(&mut self, seed: IVec2, label: char) -> Result<Region, GardenError> {
        let mut stack = vec![seed];
        let mut area = 0;
        let mut perimeter = 0;
        let mut sides = HashSet::new();

        while let Some(position) = stack.pop() {
            if !self.visited.mark(position) {
                continue;
            }
            area += 1;

            for direction in DIRECTIONS {
                let neighbor = position + direction;
                if self.garden.label(neighbor) == Some(label) {
                    if !self.visited.contains(neighbor) {
                        stack.push(neighbor);
                    }
                } else {
                    perimeter += 1;
                    sides.insert(Side::facing(neighbor, direction));
                }
            }
        }

        reduce_sides(&mut sides)?;

        Ok(Region {
            label,
            area,
            perimeter,
            sides: sides.len(),
        })
    }
}

/// How a region's fence is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceModel {
    /// Area times perimeter.
    Perimeter,
    /// Area times number of straight sides.
    BulkDiscount,
}

impl PriceModel {
    pub fn price(&self, region: &Region) -> usize {
        match self {
            Self::Perimeter => region.price(),
            Self::BulkDiscount => region.discounted_price(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pricing {
    pub regions: Vec<Region>,
}

impl Pricing {
    pub fn total(&self, model: PriceModel) -> usize {
        self.regions.iter().map(|region| model.price(region)).sum()
    }

    pub fn total_price(&self) -> usize {
        self.total(PriceModel::Perimeter)
    }

    pub fn total_price_with_discount(&self) -> usize {
        self.total(PriceModel::BulkDiscount)
    }
}

impl From<Vec<Region>> for Pricing {
    fn from(regions: Vec<Region>) -> Self {
        Self { regions }
    }
}

/// Parses and scans a garden map.
pub fn survey(input: &str) -> Result<Pricing, GardenError> {
    let garden = Garden::parse(input)?;
    let regions = RegionScanner::new(&garden).scan()?;
    Ok(Pricing::from(regions))
}
