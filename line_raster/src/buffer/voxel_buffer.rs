use tracing::{debug};

///
/// A 3D buffer of values, which can be used as the target of lines that make use of their z coordinate
///
/// Values are stored as a stack of `depth` row-major planes, so `(x, y, z)` is at `x + y*width + z*width*height`.
///
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelBuffer<TPixel> {
    width:  usize,
    height: usize,
    depth:  usize,
    data:   Vec<TPixel>,
}

impl<TPixel> VoxelBuffer<TPixel>
where
    TPixel: Copy,
{
    ///
    /// Creates a new voxel buffer with every voxel set to `fill_value`
    ///
    /// Panics if any dimension is 0
    ///
    pub fn new(width: usize, height: usize, depth: usize, fill_value: TPixel) -> VoxelBuffer<TPixel> {
        assert!(width > 0 && height > 0 && depth > 0, "Cannot create a {}x{}x{} voxel buffer", width, height, depth);

        debug!(width, height, depth, "Creating voxel buffer");

        VoxelBuffer {
            width:  width,
            height: height,
            depth:  depth,
            data:   vec![fill_value; width*height*depth],
        }
    }

    /// Reads the voxel at the specified coordinates
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> TPixel {
        self.data[self.offset(x, y, z)]
    }

    /// Replaces the voxel at the specified coordinates
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: TPixel) {
        let offset = self.offset(x, y, z);
        self.data[offset] = value;
    }
}

impl<TPixel> VoxelBuffer<TPixel> {
    /// The width of this buffer in voxels
    #[inline]
    pub fn width(&self) -> usize { self.width }

    /// The height of this buffer in voxels
    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// The depth of this buffer in voxels
    #[inline]
    pub fn depth(&self) -> usize { self.depth }

    ///
    /// Retrieves a single z-plane of this buffer as a row-major slice
    ///
    #[inline]
    pub fn plane(&self, z: usize) -> &[TPixel] {
        assert!(z < self.depth, "Plane {} is outside of a buffer with depth {}", z, self.depth);

        let plane_size  = self.width * self.height;
        let start       = z * plane_size;
        &self.data[start..(start + plane_size)]
    }

    #[inline]
    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        assert!(x < self.width && y < self.height && z < self.depth,
            "Voxel ({}, {}, {}) is outside of a {}x{}x{} buffer", x, y, z, self.width, self.height, self.depth);

        x + y * self.width + z * self.width * self.height
    }
}
