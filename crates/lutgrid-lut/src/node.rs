//! Integer grid coordinates.
//!
//! 3D samples are stored R-fastest: `index(r, g, b) = r + size*g + size^2*b`.
//! [`Node`] keeps the three indices apart so that "step one along this axis"
//! and "is this the first or last index" are written once per axis.

/// One of the three input axes of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Red, stride 1
    R = 0,
    /// Green, stride `size`
    G = 1,
    /// Blue, stride `size^2`
    B = 2,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::R, Axis::G, Axis::B];

    /// Position of this axis in an `[r, g, b]` array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Distance between neighbouring samples along this axis.
    #[inline]
    pub fn stride(self, size: usize) -> usize {
        match self {
            Axis::R => 1,
            Axis::G => size,
            Axis::B => size * size,
        }
    }
}

/// Integer position of a sample in a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Node([usize; 3]);

impl Node {
    /// Creates a node from its red, green and blue indices.
    #[inline]
    pub const fn new(r: usize, g: usize, b: usize) -> Self {
        Self([r, g, b])
    }

    /// Node on the grey diagonal.
    #[inline]
    pub const fn diagonal(i: usize) -> Self {
        Self([i, i, i])
    }

    /// Index along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> usize {
        self.0[axis.index()]
    }

    /// Same node with the index along `axis` replaced.
    #[inline]
    pub fn with(mut self, axis: Axis, i: usize) -> Self {
        self.0[axis.index()] = i;
        self
    }

    /// Node `delta` steps away along `axis`.
    ///
    /// The caller keeps the result inside the grid.
    #[inline]
    pub fn neighbor(self, axis: Axis, delta: isize) -> Self {
        let i = self.get(axis).wrapping_add_signed(delta);
        self.with(axis, i)
    }

    /// Flat offset into an R-fastest sample buffer of edge length `size`.
    #[inline]
    pub fn index(self, size: usize) -> usize {
        Axis::ALL.iter().map(|&a| self.get(a) * a.stride(size)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_red_fastest() {
        let size = 17;
        assert_eq!(Node::new(0, 0, 0).index(size), 0);
        assert_eq!(Node::new(1, 0, 0).index(size), 1);
        assert_eq!(Node::new(0, 1, 0).index(size), 17);
        assert_eq!(Node::new(0, 0, 1).index(size), 289);
        assert_eq!(Node::new(3, 2, 1).index(size), 3 + 2 * 17 + 289);
    }

    #[test]
    fn test_neighbor_matches_stride() {
        let size = 9;
        let n = Node::new(4, 4, 4);
        for axis in Axis::ALL {
            let up = n.neighbor(axis, 1);
            let down = n.neighbor(axis, -1);
            assert_eq!(up.index(size) - n.index(size), axis.stride(size));
            assert_eq!(n.index(size) - down.index(size), axis.stride(size));
            assert_eq!(up.get(axis), 5);
            assert_eq!(down.get(axis), 3);
        }
    }

    #[test]
    fn test_diagonal_stride() {
        let size = 33;
        let step = Node::diagonal(1).index(size) - Node::diagonal(0).index(size);
        assert_eq!(step, 1 + size + size * size);
        assert_eq!(Node::diagonal(5).index(size), 5 * step);
    }
}
