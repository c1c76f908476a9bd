/// Edge function used in rasterization
pub fn edge_function(a: &[f64; 2], b: &[f64; 2], c: &[f64; 2]) -> f64 {
    (c[0] - a[0]) * (b[1] - a[1]) - (c[1] - a[1]) * (b[0] - a[0])
}

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Multiplies two 3x3 matrices
pub fn multiply_matrices(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Builds the rotation matrix for Euler angles applied in X, Y, Z order
/// (`R = Rx * Ry * Rz`).
pub fn rotation_matrix(angles: &[f64; 3]) -> [[f64; 3]; 3] {
    let (sin_x, cos_x) = angles[0].sin_cos();
    let (sin_y, cos_y) = angles[1].sin_cos();
    let (sin_z, cos_z) = angles[2].sin_cos();

    let rotation_x = [[1.0, 0.0, 0.0], [0.0, cos_x, -sin_x], [0.0, sin_x, cos_x]];
    let rotation_y = [[cos_y, 0.0, sin_y], [0.0, 1.0, 0.0], [-sin_y, 0.0, cos_y]];
    let rotation_z = [[cos_z, -sin_z, 0.0], [sin_z, cos_z, 0.0], [0.0, 0.0, 1.0]];

    multiply_matrices(&multiply_matrices(&rotation_x, &rotation_y), &rotation_z)
}

pub fn subtract(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn cross(u: &[f64; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

pub fn dot(u: &[f64; 3], v: &[f64; 3]) -> f64 {
    u[0] * v[0] + u[1] * v[1] + u[2] * v[2]
}

pub fn length(v: &[f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

/// Scales a vector to unit length. The zero vector is returned unchanged.
pub fn normalize(v: &[f64; 3]) -> [f64; 3] {
    let length = length(v);
    if length == 0.0 {
        return *v;
    }
    [v[0] / length, v[1] / length, v[2] / length]
}

/// Calculates the normal vector of a triangle
pub fn calculate_normal(a: &[f64; 3], b: &[f64; 3], c: &[f64; 3]) -> [f64; 3] {
    let u = subtract(b, a);
    let v = subtract(c, a);
    normalize(&cross(&u, &v))
}

/// Lambertian term for a surface normal lit from `light_dir`, which points
/// from the surface towards the light. Both must be unit vectors.
pub fn diffuse_intensity(normal: &[f64; 3], light_dir: &[f64; 3]) -> f64 {
    dot(normal, light_dir).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: [f64; 3], b: [f64; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-9, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn zero_rotation_is_identity() {
        let m = rotation_matrix(&[0.0, 0.0, 0.0]);
        assert_vec_eq(multiply_matrix_vector(&m, &[1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn quarter_turn_about_z() {
        let m = rotation_matrix(&[0.0, 0.0, std::f64::consts::FRAC_PI_2]);
        assert_vec_eq(multiply_matrix_vector(&m, &[1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn x_is_applied_last() {
        // Rx * Ry * Rz: rotate about Z first, then X.
        let half_pi = std::f64::consts::FRAC_PI_2;
        let m = rotation_matrix(&[half_pi, 0.0, half_pi]);
        assert_vec_eq(multiply_matrix_vector(&m, &[1.0, 0.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn normal_follows_right_hand_rule() {
        let n = calculate_normal(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert_vec_eq(n, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn diffuse_is_clamped_at_zero() {
        assert_eq!(diffuse_intensity(&[0.0, 0.0, -1.0], &[0.0, 0.0, 1.0]), 0.0);
        assert!((diffuse_intensity(&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_leaves_zero_vector() {
        assert_eq!(normalize(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }
}
