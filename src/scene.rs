use crate::catalog::ShapeSpec;
use crate::color::Rgb;
use crate::geometry::Mesh;
use crate::graphics::{draw_triangle, FrameBuffer};
use crate::math::{multiply_matrix_vector, normalize, rotation_matrix, subtract};
use crate::vertex::Vertex;

/// Perspective camera looking down -Z
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: [f64; 3],
}

impl Camera {
    pub fn new(aspect: f64) -> Self {
        Camera {
            fov: 75.0,
            aspect,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 0.0, 5.0],
        }
    }

    pub fn set_aspect(&mut self, aspect: f64) {
        self.aspect = aspect;
    }

    /// Projects a view-space point onto a `width` x `height` pixel grid.
    /// Points outside the near/far range project to `None`.
    pub fn project(&self, view: &[f64; 3], width: usize, height: usize) -> Option<[f64; 2]> {
        let depth = -view[2];
        if depth < self.near || depth > self.far {
            return None;
        }
        let focal = 1.0 / (self.fov.to_radians() / 2.0).tan();
        let ndc_x = view[0] * focal / (self.aspect * depth);
        let ndc_y = view[1] * focal / depth;
        Some([
            (ndc_x + 1.0) * 0.5 * width as f64,
            (1.0 - ndc_y) * 0.5 * height as f64,
        ])
    }
}

/// Ambient light plus a single directional light
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: f64,
    pub directional: f64,
    /// Unit vector from the surface towards the light
    pub direction: [f64; 3],
}

impl Default for Lighting {
    fn default() -> Self {
        Lighting {
            ambient: 0.5,
            directional: 1.0,
            direction: normalize(&[5.0, 5.0, 5.0]),
        }
    }
}

/// The mesh currently inserted into the scene, with the catalog entry it
/// was built from
#[derive(Debug, Clone)]
pub struct ActiveShape {
    pub spec: &'static ShapeSpec,
    pub mesh: Mesh,
}

impl ActiveShape {
    pub fn new(spec: &'static ShapeSpec) -> Self {
        ActiveShape {
            spec,
            mesh: spec.build_mesh(),
        }
    }
}

/// Scene graph holding at most one shape
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Rgb,
    pub lighting: Lighting,
    shape: Option<ActiveShape>,
}

impl Default for Scene {
    fn default() -> Self {
        Scene {
            background: Rgb::WHITE,
            lighting: Lighting::default(),
            shape: None,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `shape`, returning whatever it replaced
    pub fn add(&mut self, shape: ActiveShape) -> Option<ActiveShape> {
        self.shape.replace(shape)
    }

    pub fn remove(&mut self) -> Option<ActiveShape> {
        self.shape.take()
    }

    pub fn shape(&self) -> Option<&ActiveShape> {
        self.shape.as_ref()
    }

    /// Rasterizes the scene with the shape rotated by `angles`
    pub fn render(&self, camera: &Camera, angles: &[f64; 3], frame: &mut FrameBuffer) {
        frame.clear(self.background);

        let Some(shape) = &self.shape else {
            return;
        };

        let (width, height) = (frame.width(), frame.height());
        let rotation = rotation_matrix(angles);

        'triangles: for triangle in &shape.mesh.triangles {
            let mut vertices = [Vertex {
                position: [0.0; 3],
                screen_position: [0.0; 2],
                normal: [0.0; 3],
            }; 3];
            for (i, vertex) in vertices.iter_mut().enumerate() {
                let world = multiply_matrix_vector(&rotation, &triangle.positions[i]);
                let view = subtract(&world, &camera.position);
                let Some(screen_position) = camera.project(&view, width, height) else {
                    continue 'triangles;
                };
                *vertex = Vertex {
                    position: view,
                    screen_position,
                    normal: multiply_matrix_vector(&rotation, &triangle.normals[i]),
                };
            }

            draw_triangle(
                &vertices[0],
                &vertices[1],
                &vertices[2],
                frame,
                &self.lighting,
                shape.spec.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_centre() {
        let camera = Camera::new(2.0);
        let p = camera.project(&[0.0, 0.0, -5.0], 80, 40).unwrap();
        assert_eq!(p, [40.0, 20.0]);
    }

    #[test]
    fn behind_camera_is_clipped() {
        let camera = Camera::new(1.0);
        assert_eq!(camera.project(&[0.0, 0.0, 1.0], 10, 10), None);
        assert_eq!(camera.project(&[0.0, 0.0, -0.05], 10, 10), None);
    }

    #[test]
    fn positive_y_is_up_on_screen() {
        let camera = Camera::new(1.0);
        let p = camera.project(&[0.0, 1.0, -5.0], 100, 100).unwrap();
        assert!(p[1] < 50.0);
    }

    #[test]
    fn empty_scene_renders_background() {
        let scene = Scene::new();
        let mut frame = FrameBuffer::new(8, 8);
        scene.render(&Camera::new(1.0), &[0.0; 3], &mut frame);
        assert!(frame.pixels().iter().all(|&p| p == Rgb::WHITE));
    }
}
