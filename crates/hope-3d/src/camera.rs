/// A struct representing the intrinsic parameters of a pinhole camera.
#[derive(Debug, Clone)]
pub struct PinholeCameraIntrinsic {
    /// The focal length in pixels (fx, fy)
    pub focal_length: (f64, f64),
    /// The principal point in pixels (cx, cy)
    pub principal_point: (f64, f64),
    /// The image dimensions (width, height)
    pub image_size: (u32, u32),
}

impl PinholeCameraIntrinsic {
    /// Creates a new PinholeCameraIntrinsic with the given parameters.
    pub fn new(
        focal_length: (f64, f64),
        principal_point: (f64, f64),
        image_size: (u32, u32),
    ) -> Self {
        Self {
            focal_length,
            principal_point,
            image_size,
        }
    }

    /// Build the intrinsics from a row-major 3x3 camera matrix.
    ///
    /// Focal lengths come from the diagonal and the principal point from the
    /// last column, which is how annotation files store the matrix.
    pub fn from_matrix(matrix: &[[f64; 3]; 3], image_size: (u32, u32)) -> Self {
        Self {
            focal_length: (matrix[0][0], matrix[1][1]),
            principal_point: (matrix[0][2], matrix[1][2]),
            image_size,
        }
    }

    /// Returns the camera matrix as a row-major 3x3 array.
    pub fn camera_matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.focal_length.0, 0.0, self.principal_point.0],
            [0.0, self.focal_length.1, self.principal_point.1],
            [0.0, 0.0, 1.0],
        ]
    }
}
