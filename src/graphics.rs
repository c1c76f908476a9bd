use crate::color::Rgb;
use crate::math::{diffuse_intensity, edge_function, normalize};
use crate::scene::Lighting;
use crate::vertex::Vertex;

/// Colour buffer with a matching depth buffer
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    depth: Vec<f64>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
            depth: vec![f64::INFINITY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Rgb::BLACK; width * height];
        self.depth = vec![f64::INFINITY; width * height];
    }

    /// Fills the colour buffer and resets every depth to infinity
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.depth.fill(f64::INFINITY);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

/// Draws a triangle with per-pixel lighting.
///
/// Both windings are filled; hidden surfaces are resolved by the depth
/// buffer alone.
pub fn draw_triangle(
    v0: &Vertex,
    v1: &Vertex,
    v2: &Vertex,
    frame: &mut FrameBuffer,
    lighting: &Lighting,
    base_color: Rgb,
) {
    let (width, height) = (frame.width, frame.height);
    if width == 0 || height == 0 {
        return;
    }

    // Compute bounding box of the triangle
    let min_x = v0.screen_position[0]
        .min(v1.screen_position[0])
        .min(v2.screen_position[0])
        .floor()
        .max(0.0);
    let max_x = v0.screen_position[0]
        .max(v1.screen_position[0])
        .max(v2.screen_position[0])
        .ceil()
        .min(width as f64 - 1.0);
    let min_y = v0.screen_position[1]
        .min(v1.screen_position[1])
        .min(v2.screen_position[1])
        .floor()
        .max(0.0);
    let max_y = v0.screen_position[1]
        .max(v1.screen_position[1])
        .max(v2.screen_position[1])
        .ceil()
        .min(height as f64 - 1.0);
    if min_x > max_x || min_y > max_y {
        return;
    }
    let (min_x, max_x, min_y, max_y) = (min_x as usize, max_x as usize, min_y as usize, max_y as usize);

    // Precompute area of the triangle
    let area = edge_function(&v0.screen_position, &v1.screen_position, &v2.screen_position);
    if area == 0.0 {
        return;
    }

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = [x as f64 + 0.5, y as f64 + 0.5];

            // Normalize barycentric coordinates; all three are non-negative inside
            let w0 = edge_function(&v1.screen_position, &v2.screen_position, &p) / area;
            let w1 = edge_function(&v2.screen_position, &v0.screen_position, &p) / area;
            let w2 = edge_function(&v0.screen_position, &v1.screen_position, &p) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            // Depth test
            let depth = v0.depth() * w0 + v1.depth() * w1 + v2.depth() * w2;
            let offset = y * width + x;
            if depth >= frame.depth[offset] {
                continue;
            }
            frame.depth[offset] = depth;

            // Interpolate normal
            let normal = normalize(&[
                v0.normal[0] * w0 + v1.normal[0] * w1 + v2.normal[0] * w2,
                v0.normal[1] * w0 + v1.normal[1] * w1 + v2.normal[1] * w2,
                v0.normal[2] * w0 + v1.normal[2] * w1 + v2.normal[2] * w2,
            ]);

            frame.pixels[offset] = apply_lighting(base_color, &normal, lighting);
        }
    }
}

/// Shades a surface colour with the scene's ambient and directional light
pub fn apply_lighting(color: Rgb, normal: &[f64; 3], lighting: &Lighting) -> Rgb {
    let diffuse = diffuse_intensity(normal, &lighting.direction);
    color.scaled(lighting.ambient + lighting.directional * diffuse)
}
