use flo_line_raster::*;

use tracing_subscriber::{EnvFilter};

use std::fs::{File};

///
/// Draws a fan of lines and writes the result to lines.png
///
/// Set `RUST_LOG=flo_line_raster=trace` to see each line as it is rasterized
///
pub fn main() -> Result<(), RasterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut canvas  = PixelBuffer::new(300, 300, U8RgbaPixel::BLACK);
    let center      = Vector3::new(150, 150, 0);

    // Spokes from the centre to points around the edge of the canvas
    for pos in (0..300).step_by(20) {
        let color = U8RgbaPixel::rgb(pos as u8, 255 - (pos as u8), 128);

        draw_line(&mut canvas, center, Vector3::new(pos, 0, 0), color);
        draw_line(&mut canvas, center, Vector3::new(299, pos, 0), color);
        draw_line(&mut canvas, center, Vector3::new(299 - pos, 299, 0), color);
        draw_line(&mut canvas, center, Vector3::new(0, 299 - pos, 0), color);
    }

    // A border, using a polyline
    draw_polyline(&mut canvas, vec![
        Vector3::new(0, 0, 0),
        Vector3::new(299, 0, 0),
        Vector3::new(299, 299, 0),
        Vector3::new(0, 299, 0),
        Vector3::new(0, 0, 0),
    ], U8RgbaPixel::WHITE);

    // The z coordinate is ignored when drawing to a 2D canvas
    let mut line = LineRasterizer::new(Vector3::new(0, 0, 0), Vector3::new(10, 5, -4));
    while let Some(point) = line.next_point() {
        canvas.set(point.x as usize, point.y as usize, U8RgbaPixel::from(0xff0000ffu32));
        println!("point: x: {}, y: {}, z: {}", point.x, point.y, point.z);
    }

    canvas.write_png(File::create("lines.png")?)?;

    Ok(())
}
