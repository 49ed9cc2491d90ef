/// Column-major 4x4 matrix, laid out the way `uniformMatrix4fv` expects it
/// with `transpose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub fn new_identity() -> Self {
        let mut data = [0.0; 16];
        data[0] = 1.0;
        data[5] = 1.0;
        data[10] = 1.0;
        data[15] = 1.0;
        Self { data }
    }

    /// Creates a perspective projection matrix.
    ///
    /// # Parameters
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect` - Viewport width divided by height
    /// * `near` - Distance to the near clipping plane
    /// * `far` - Distance to the far clipping plane; `f32::INFINITY` yields an
    ///   infinite projection
    pub fn new_perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();

        let mut data = [0.0; 16];
        data[0] = f / aspect;
        data[5] = f;
        data[11] = -1.0;

        if far.is_finite() {
            let nf = 1.0 / (near - far);
            data[10] = (far + near) * nf;
            data[14] = 2.0 * far * near * nf;
        } else {
            data[10] = -1.0;
            data[14] = -2.0 * near;
        }

        Self { data }
    }

    pub fn from_translation(v: [f32; 3]) -> Self {
        let mut result = Self::new_identity();
        result.translate(v);
        result
    }

    /// Post-multiplies this matrix by a translation, `self = self * T(v)`.
    pub fn translate(&mut self, v: [f32; 3]) {
        let [x, y, z] = v;
        let d = &mut self.data;

        for row in 0..4 {
            d[12 + row] += d[row] * x + d[4 + row] * y + d[8 + row] * z;
        }
    }

    /// Returns the translation column (x, y, z).
    pub fn translation(&self) -> [f32; 3] {
        [self.data[12], self.data[13], self.data[14]]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::new_identity()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_4;

    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn test_identity() {
        let m = Mat4::new_identity();
        for (i, v) in m.data.iter().enumerate() {
            let expected = if i % 5 == 0 { 1.0 } else { 0.0 };
            assert_eq!(*v, expected, "index {i}");
        }
    }

    #[test]
    fn test_translate_accumulates() {
        let mut m = Mat4::new_identity();
        m.translate([1.0, 2.0, 3.0]);
        m.translate([0.5, -1.0, 0.0]);

        assert_eq!(m.translation(), [1.5, 1.0, 3.0]);
        assert_eq!(m.data[15], 1.0);
    }

    #[test]
    fn test_translate_is_right_multiplied() {
        // scale x by 2, then translate in local space
        let mut m = Mat4::new_identity();
        m.data[0] = 2.0;
        m.translate([1.0, 0.0, 0.0]);

        assert_eq!(m.translation(), [2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_perspective() {
        let m = Mat4::new_perspective(FRAC_PI_4, 2.0, 0.1, 100.0);
        let f = 1.0 / (FRAC_PI_4 / 2.0).tan();

        assert_close(m.data[0], f / 2.0);
        assert_close(m.data[5], f);
        assert_close(m.data[10], -100.1 / 99.9);
        assert_close(m.data[11], -1.0);
        assert_close(m.data[14], -20.0 / 99.9);
        assert_eq!(m.data[15], 0.0);
    }

    #[test]
    fn test_perspective_infinite_far() {
        let m = Mat4::new_perspective(FRAC_PI_4, 1.0, 0.5, f32::INFINITY);

        assert_eq!(m.data[10], -1.0);
        assert_eq!(m.data[14], -1.0);
        assert!(m.data.iter().all(|v| v.is_finite()));
    }
}
