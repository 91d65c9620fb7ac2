use std::ops::*;

///
/// A point on the integer lattice in 3D space
///
/// Components can be read by position (0 = x, 1 = y, 2 = z), which is how the rasterizer treats
/// every axis the same way regardless of which one is the major axis.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3 {
    ///
    /// Creates a new vector from its components
    ///
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Vector3 {
        Vector3 { x, y, z }
    }

    ///
    /// Returns a vector where every component is the absolute value of the corresponding component in this one
    ///
    #[inline]
    pub fn abs(&self) -> Vector3 {
        Vector3 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    ///
    /// The largest of the three components
    ///
    #[inline]
    pub fn max_component(&self) -> i32 {
        self.x.max(self.y).max(self.z)
    }

    ///
    /// The distance between two points, measured as the largest difference along any one axis
    ///
    /// This is the number of steps the rasterizer takes to walk from one point to the other. The distance between
    /// two `i32` points can be larger than `i32::MAX`, so it's calculated using 64-bit values.
    ///
    #[inline]
    pub fn chebyshev_distance(&self, other: &Vector3) -> u64 {
        (0..3)
            .map(|axis| (other[axis] as i64 - self[axis] as i64).unsigned_abs())
            .fold(0, u64::max)
    }
}

impl From<(i32, i32, i32)> for Vector3 {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Vector3 {
        Vector3 { x, y, z }
    }
}

impl From<Vector3> for (i32, i32, i32) {
    #[inline]
    fn from(vector: Vector3) -> (i32, i32, i32) {
        (vector.x, vector.y, vector.z)
    }
}

impl Index<usize> for Vector3 {
    type Output = i32;

    #[inline]
    fn index(&self, axis: usize) -> &i32 {
        match axis {
            0   => &self.x,
            1   => &self.y,
            2   => &self.z,
            _   => panic!("Vector3 has no axis {}", axis),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut i32 {
        match axis {
            0   => &mut self.x,
            1   => &mut self.y,
            2   => &mut self.z,
            _   => panic!("Vector3 has no axis {}", axis),
        }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline]
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, other: Vector3) {
        *self = *self + other;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, other: Vector3) {
        *self = *self - other;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
