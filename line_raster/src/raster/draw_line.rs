use super::line_rasterizer::*;
use crate::buffer::*;
use crate::geo::*;

use itertools::*;
use smallvec::*;

///
/// Converts a lattice coordinate to a canvas coordinate
///
/// Lines are not clipped, so a negative coordinate means the caller tried to draw outside of the canvas
///
#[inline]
fn canvas_coord(pos: i32) -> usize {
    assert!(pos >= 0, "Cannot draw at negative coordinate {}", pos);
    pos as usize
}

///
/// Draws a line on a 2D canvas, ignoring the z coordinates of the endpoints
///
/// Returns the number of pixels that were written
///
pub fn draw_line<TCanvas>(canvas: &mut TCanvas, from: Vector3, to: Vector3, color: TCanvas::Pixel) -> usize
where
    TCanvas:        Canvas + ?Sized,
    TCanvas::Pixel: Copy,
{
    draw_points(canvas, LineRasterizer::new(from, to), color)
}

///
/// Draws a line into a 3D canvas
///
/// Returns the number of voxels that were written
///
pub fn draw_line_3d<TCanvas>(canvas: &mut TCanvas, from: Vector3, to: Vector3, color: TCanvas::Pixel) -> usize
where
    TCanvas:        VoxelCanvas + ?Sized,
    TCanvas::Pixel: Copy,
{
    let mut count = 0;

    for point in LineRasterizer::new(from, to) {
        canvas.set_voxel(canvas_coord(point.x), canvas_coord(point.y), canvas_coord(point.z), color);
        count += 1;
    }

    count
}

///
/// Draws a series of connected lines on a 2D canvas
///
/// Each point where two lines meet is only written once. This includes the start of a closed polyline (one whose
/// last point is the same as its first): the final line stops just short of it. Returns the number of pixels
/// that were written.
///
pub fn draw_polyline<TCanvas>(canvas: &mut TCanvas, points: impl IntoIterator<Item=Vector3>, color: TCanvas::Pixel) -> usize
where
    TCanvas:        Canvas + ?Sized,
    TCanvas::Pixel: Copy,
{
    let points = points.into_iter().collect::<SmallVec<[Vector3; 8]>>();

    match points.len() {
        0 => 0,
        1 => draw_line(canvas, points[0], points[0], color),

        num_points => {
            let last_line   = num_points - 2;
            let is_closed   = num_points > 2 && points[0] == points[num_points-1];
            let mut count   = 0;

            for (idx, (from, to)) in points.iter().copied().tuple_windows().enumerate() {
                let line    = LineRasterizer::new(from, to);
                let len     = line.len();

                // The first point of each line was the last point of the previous one, and the last point of a closed polyline was its first point
                let skip    = if idx == 0 { 0 } else { 1 };
                let take    = if is_closed && idx == last_line { len - 1 } else { len };

                count += draw_points(canvas, line.take(take).skip(skip), color);
            }

            count
        }
    }
}

///
/// Writes a sequence of points to a 2D canvas
///
fn draw_points<TCanvas>(canvas: &mut TCanvas, points: impl Iterator<Item=Vector3>, color: TCanvas::Pixel) -> usize
where
    TCanvas:        Canvas + ?Sized,
    TCanvas::Pixel: Copy,
{
    let mut count = 0;

    for point in points {
        canvas.set_pixel(canvas_coord(point.x), canvas_coord(point.y), color);
        count += 1;
    }

    count
}
