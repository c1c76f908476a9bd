/// Vertex structure with view-space position, screen position, and world-space normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f64; 3],
    pub screen_position: [f64; 2],
    pub normal: [f64; 3],
}

impl Vertex {
    /// Distance from the camera, used for the depth test
    pub fn depth(&self) -> f64 {
        -self.position[2]
    }
}
