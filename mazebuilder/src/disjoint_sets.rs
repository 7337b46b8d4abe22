use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("disjoint sets must contain at least one element")]
    Empty,
    #[error("element {0} is not a valid element")]
    InvalidElement(usize),
    #[error("element {0} must be a set name")]
    NotSetName(usize),
}

/// A partition of the elements `0..n` into disjoint sets.
///
/// Each slot of `up` holds either the negated size of a set, when the element
/// is the root (name) of that set, or the index of another element of the same
/// set. For the sets `{1, 3}`, `{2}` and `{0, 4, 5}` the slots could be:
///
/// ```text
/// index:  0   1   2   3   4   5
/// value: -3  -2  -1   1   0   4
/// ```
///
/// Unions attach the root with the larger label under the root with the
/// smaller label, regardless of set size. Generated mazes depend on this rule,
/// so it is kept even though union by size would give shallower trees.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    up: Vec<isize>,
}

impl DisjointSets {
    pub fn new(len: usize) -> Result<DisjointSets, Error> {
        if len < 1 {
            return Err(Error::Empty);
        }

        Ok(DisjointSets { up: vec![-1; len] })
    }

    /// Returns the name of the set containing `x`, pointing every element on
    /// the way directly at that name.
    pub fn find(&mut self, x: usize) -> Result<usize, Error> {
        self.check_element(x)?;

        let mut root = x;

        while self.up[root] >= 0 {
            root = self.up[root] as usize;
        }

        let mut xf = x;

        while xf != root {
            let parent = self.up[xf] as usize;
            self.up[xf] = root as isize;
            xf = parent;
        }

        Ok(root)
    }

    pub fn union(&mut self, set1: usize, set2: usize) -> Result<(), Error> {
        self.check_set_name(set1)?;
        self.check_set_name(set2)?;

        if set1 == set2 {
            return Ok(());
        }

        let size = self.up[set1].abs() + self.up[set2].abs();
        let (root, child) = if set1 < set2 {
            (set1, set2)
        } else {
            (set2, set1)
        };

        self.up[child] = root as isize;
        self.up[root] = -size;

        Ok(())
    }

    pub fn num_sets(&self) -> usize {
        self.up.iter().filter(|&&slot| slot < 0).count()
    }

    pub fn len(&self) -> usize {
        self.up.len()
    }

    /// Number of elements in the set named `set`.
    pub fn set_len(&self, set: usize) -> Result<usize, Error> {
        self.check_set_name(set)?;
        Ok(self.up[set].unsigned_abs())
    }

    pub fn is_set_name(&self, x: usize) -> Result<bool, Error> {
        self.check_element(x)?;
        Ok(self.up[x] < 0)
    }

    /// Elements of the set named `set`, in ascending order.
    pub fn elements(&mut self, set: usize) -> Result<Vec<usize>, Error> {
        self.check_set_name(set)?;

        let mut elements = Vec::with_capacity(self.set_len(set)?);

        for x in 0..self.len() {
            if self.find(x)? == set {
                elements.push(x);
            }
        }

        Ok(elements)
    }

    /// Names of all current sets, in ascending order.
    pub fn set_names(&self) -> Vec<usize> {
        (0..self.len()).filter(|&x| self.up[x] < 0).collect()
    }

    pub fn sets(&self) -> Vec<Vec<usize>> {
        let mut sparse_sets = vec![vec![]; self.len()];

        for x in 0..self.len() {
            sparse_sets[self.root(x)].push(x);
        }

        sparse_sets.into_iter().filter(|s| !s.is_empty()).collect()
    }

    // Root lookup without compression, for callers holding only `&self`.
    fn root(&self, x: usize) -> usize {
        let mut root = x;

        while self.up[root] >= 0 {
            root = self.up[root] as usize;
        }

        root
    }

    fn check_element(&self, x: usize) -> Result<(), Error> {
        if x >= self.up.len() {
            return Err(Error::InvalidElement(x));
        }

        Ok(())
    }

    fn check_set_name(&self, x: usize) -> Result<(), Error> {
        self.check_element(x)?;

        if self.up[x] >= 0 {
            return Err(Error::NotSetName(x));
        }

        Ok(())
    }
}

impl fmt::Display for DisjointSets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        for (i, set) in self.sets().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{:?}", set)?;
        }

        write!(f, "}}")
    }
}
