use crate::geo::*;

use tracing::{trace};

use std::iter::{FusedIterator};

///
/// The state of a line that's being rasterized, created when the first point is requested
///
#[derive(Copy, Clone, Debug)]
struct RasterState {
    /// The direction to move along each axis (always 1 or -1)
    step: Vector3,

    /// The accumulated residual for each of the minor axes
    d: [i64; 3],

    /// The axis with the largest distance to travel, which moves by one unit on every step
    major_axis: usize,
}

impl RasterState {
    ///
    /// Works out how to step from one point to another
    ///
    fn between(from: Vector3, to: Vector3) -> RasterState {
        let mut step        = Vector3::default();
        let mut major_axis  = 0;
        let mut max_delta   = 0;

        for axis in 0..3 {
            let delta = to[axis] as i64 - from[axis] as i64;

            // Axes that don't move never accumulate any residual, so their step direction is never used
            step[axis] = if delta > 0 { 1 } else { -1 };

            // Ties are resolved in favour of the first axis
            let delta = delta.abs();
            if delta > max_delta {
                max_delta   = delta;
                major_axis  = axis;
            }
        }

        RasterState {
            step:       step,
            d:          [0; 3],
            major_axis: major_axis,
        }
    }
}

///
/// The distance between two points along a single axis
///
/// Lines can span the whole `i32` range, so distances and residuals are kept as 64-bit values
///
#[inline]
fn axis_distance(from: Vector3, to: Vector3, axis: usize) -> i64 {
    (to[axis] as i64 - from[axis] as i64).abs()
}

///
/// Generates every point on the integer lattice along a line between two 3D points
///
/// This is a generalisation of Bresenham's line algorithm: the 'major' axis (the one with the largest distance to
/// cover) advances by one unit on every step. The other two axes accumulate the distance they have left to travel
/// and advance whenever that reaches the distance left on the major axis, so the line stays close to the ideal
/// line while only using integer arithmetic.
///
/// The first point generated is always `from` and the last is always `to`, so a line generates
/// `max(|dx|, |dy|, |dz|) + 1` points. A line whose endpoints are the same generates a single point.
///
/// ```
/// # use flo_line_raster::geo::*;
/// # use flo_line_raster::raster::*;
/// let mut line = LineRasterizer::new(Vector3::new(0, 0, 0), Vector3::new(2, 1, 0));
///
/// assert!(line.next_point() == Some(Vector3::new(0, 0, 0)));
/// assert!(line.next_point() == Some(Vector3::new(1, 1, 0)));
/// assert!(line.next_point() == Some(Vector3::new(2, 1, 0)));
/// assert!(line.next_point() == None);
/// ```
///
#[derive(Clone, Debug)]
pub struct LineRasterizer {
    /// The most recently generated point (or the start of the line if no points have been generated yet)
    from: Vector3,

    /// The end of the line
    to: Vector3,

    /// None until the first point has been generated
    state: Option<RasterState>,
}

impl LineRasterizer {
    ///
    /// Creates a rasterizer for the line between two points
    ///
    #[inline]
    pub fn new(from: Vector3, to: Vector3) -> LineRasterizer {
        LineRasterizer {
            from:   from,
            to:     to,
            state:  None,
        }
    }

    ///
    /// The current position of the rasterizer
    ///
    /// This is the start of the line before any points are generated, and the last point generated afterwards
    ///
    #[inline]
    pub fn from(&self) -> Vector3 {
        self.from
    }

    /// The point where this line ends
    #[inline]
    pub fn to(&self) -> Vector3 {
        self.to
    }

    ///
    /// The axis (0 = x, 1 = y, 2 = z) that advances on every step, or None if no points have been generated yet
    ///
    #[inline]
    pub fn major_axis(&self) -> Option<usize> {
        self.state.as_ref().map(|state| state.major_axis)
    }

    ///
    /// True if every point on this line has been generated
    ///
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.is_some() && self.from == self.to
    }

    ///
    /// The number of points that have not been generated yet
    ///
    #[inline]
    pub fn remaining(&self) -> usize {
        match &self.state {
            None        => self.from.chebyshev_distance(&self.to) as usize + 1,
            Some(state) => axis_distance(self.from, self.to, state.major_axis) as usize,
        }
    }

    ///
    /// Generates the next point on this line, or returns None once the end of the line has been reached
    ///
    /// Once this has returned None, it will keep returning None.
    ///
    pub fn next_point(&mut self) -> Option<Vector3> {
        match &mut self.state {
            None => {
                // The first point is always the start of the line
                let state = RasterState::between(self.from, self.to);
                trace!(from = ?self.from, to = ?self.to, major_axis = state.major_axis, "Starting line");

                self.state = Some(state);
                Some(self.from)
            }

            Some(state) => {
                if self.from == self.to {
                    return None;
                }

                let from        = &mut self.from;
                let to          = self.to;
                let major_axis  = state.major_axis;

                // The major axis always advances
                from[major_axis] += state.step[major_axis];
                let major_remaining = axis_distance(*from, to, major_axis);

                // The minor axes advance when their residual catches up with the distance left on the major axis
                for axis in (0..3).filter(|axis| *axis != major_axis) {
                    let remaining = axis_distance(*from, to, axis);

                    if remaining > 0 {
                        state.d[axis] += remaining;

                        if state.d[axis] >= major_remaining {
                            state.d[axis]   -= major_remaining;
                            from[axis]      += state.step[axis];
                        }
                    }
                }

                Some(*from)
            }
        }
    }
}

impl Iterator for LineRasterizer {
    type Item = Vector3;

    #[inline]
    fn next(&mut self) -> Option<Vector3> {
        self.next_point()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineRasterizer { }
impl FusedIterator for LineRasterizer { }
