//! Generic flat 2D grid

/// Row-major 2D grid backed by one `Vec`, indexed by `y * width + x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T: Clone + Default> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Wrap an existing row-major buffer
    ///
    /// Returns the buffer back if its length does not match the shape.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Vec<T>> {
        if data.len() != width * height {
            return Err(data);
        }
        Ok(Self { width, height, data })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Signed coordinate to flat index, `None` outside bounds
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index_of(x, y).map(|i| &self.data[i])
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.index_of(x, y) {
            self.data[i] = value;
        }
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// True when `other` has the same width, height and length
    pub fn same_shape<U: Clone + Default>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height && self.len() == other.len()
    }
}
