use crate::disjoint_sets::{self, DisjointSets};
use fnv::FnvHashSet;
use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Sets(#[from] disjoint_sets::Error),
    #[error("maze must be at least 2x2 (got {width}x{height})")]
    TooSmall { width: usize, height: usize },
    #[error("a {width}x{height} maze has too many cells")]
    TooLarge { width: usize, height: usize },
    #[error("ran out of candidate edges with {sets} sets remaining")]
    Exhausted { sets: usize },
}

/// An undirected edge between two adjacent cells, stored with `x < y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    x: usize,
    y: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Edge {
        if a < b {
            Edge { x: a, y: b }
        } else {
            Edge { x: b, y: a }
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

/// Number of cells in a `width` by `height` grid, if the generator can build
/// a maze of that size. Set sizes are stored as negative `isize` values.
pub fn num_cells(width: usize, height: usize) -> Result<usize, Error> {
    if width < 2 || height < 2 {
        return Err(Error::TooSmall { width, height });
    }

    match width.checked_mul(height) {
        Some(num_cells) if num_cells <= isize::MAX as usize => Ok(num_cells),
        _ => Err(Error::TooLarge { width, height }),
    }
}

fn is_on_right(cell: usize, width: usize) -> bool {
    (cell + 1) % width == 0
}

fn is_on_bottom(cell: usize, width: usize, height: usize) -> bool {
    cell >= width * (height - 1)
}

/// Every edge between horizontally or vertically adjacent cells, in row-major
/// order: the right neighbour of a cell comes before its lower neighbour.
/// Sizes are not checked here; see [`num_cells`].
pub fn edge_universe(width: usize, height: usize) -> Vec<Edge> {
    let num_cells = width * height;
    let mut edges = Vec::with_capacity((2 * num_cells).saturating_sub(width + height));

    for cell in 0..num_cells {
        if !is_on_right(cell, width) {
            edges.push(Edge::new(cell, cell + 1));
        }

        if !is_on_bottom(cell, width, height) {
            edges.push(Edge::new(cell, cell + width));
        }
    }

    edges
}

/// Draws edges from `edges` at random until every cell is connected and
/// returns the edges that stay walls.
///
/// An edge whose cells are still in different sets is knocked down and merges
/// the two sets. An edge whose cells are already connected is a wall, as is
/// every edge left undrawn once a single set remains.
pub fn generate<R>(
    mut edges: Vec<Edge>,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Vec<Edge>, Error>
where
    R: Rng + ?Sized,
{
    let mut sets = DisjointSets::new(num_cells(width, height)?)?;
    let mut walls = Vec::with_capacity(edges.len().saturating_sub(sets.len() - 1));
    let mut num_sets = sets.len();

    debug!(
        "generating {}x{} maze from {} candidate edges",
        width,
        height,
        edges.len()
    );

    while num_sets > 1 {
        if edges.is_empty() {
            return Err(Error::Exhausted { sets: num_sets });
        }

        let edge = edges.swap_remove(rng.gen_range(0, edges.len()));
        let u = sets.find(edge.x())?;
        let v = sets.find(edge.y())?;

        if u != v {
            sets.union(u, v)?;
            num_sets -= 1;
            trace!("knocked down {:?}, {} sets remain", edge, num_sets);
        } else {
            walls.push(edge);
        }
    }

    debug_assert_eq!(sets.num_sets(), 1);

    walls.append(&mut edges);

    debug!("maze has {} standing walls", walls.len());

    Ok(walls)
}

/// A generated maze: its dimensions and the walls left standing between
/// cells. Walls on the outer boundary are implicit.
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<Edge>,
    wall_set: FnvHashSet<Edge>,
}

impl Maze {
    pub fn generate<R>(width: usize, height: usize, rng: &mut R) -> Result<Maze, Error>
    where
        R: Rng + ?Sized,
    {
        num_cells(width, height)?;

        let walls = generate(edge_universe(width, height), width, height, rng)?;
        Ok(Maze::from_walls(width, height, walls))
    }

    pub fn from_walls(width: usize, height: usize, walls: Vec<Edge>) -> Maze {
        let wall_set = walls.iter().copied().collect();

        Maze {
            width,
            height,
            walls,
            wall_set,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    /// Standing walls, in the order the generator produced them.
    pub fn walls(&self) -> &[Edge] {
        &self.walls
    }

    pub fn has_wall(&self, edge: Edge) -> bool {
        self.wall_set.contains(&edge)
    }

    /// Edges between adjacent cells that were knocked down.
    pub fn passages(&self) -> Vec<Edge> {
        edge_universe(self.width, self.height)
            .into_iter()
            .filter(|edge| !self.has_wall(*edge))
            .collect()
    }

    pub fn is_on_right(&self, cell: usize) -> bool {
        is_on_right(cell, self.width)
    }

    pub fn is_on_bottom(&self, cell: usize) -> bool {
        is_on_bottom(cell, self.width, self.height)
    }
}
