use crate::camera::PinholeCameraIntrinsic;
use crate::pointcloud::PointCloud;

/// Error types for the RGB-D module.
#[derive(Debug, thiserror::Error)]
pub enum RgbdError {
    /// The RGB and depth buffers disagree on the pixel count.
    #[error("RGB and depth images must have the same dimensions, got {rgb} and {depth} pixels")]
    SizeMismatch {
        /// Number of RGB pixels.
        rgb: usize,
        /// Number of depth pixels.
        depth: usize,
    },

    /// The buffers do not match the given width and height.
    #[error("Image buffers do not match the size {width}x{height}")]
    InvalidImageSize {
        /// Expected width in pixels.
        width: usize,
        /// Expected height in pixels.
        height: usize,
    },
}

/// A struct representing an RGB-D image with depth in meters.
#[derive(Debug, Clone)]
pub struct RgbdImage {
    /// The width of the image
    pub width: usize,
    /// The height of the image
    pub height: usize,
    /// The RGB image as a row-major array of RGB values
    pub rgb: Vec<[u8; 3]>,
    /// The depth image as a row-major array of depth values in meters
    pub depth: Vec<f64>,
}

impl RgbdImage {
    /// Creates a new RgbdImage with the given RGB and depth buffers.
    pub fn new(
        rgb: Vec<[u8; 3]>,
        depth: Vec<f64>,
        width: usize,
        height: usize,
    ) -> Result<Self, RgbdError> {
        if rgb.len() != depth.len() {
            return Err(RgbdError::SizeMismatch {
                rgb: rgb.len(),
                depth: depth.len(),
            });
        }
        if rgb.len() != width * height {
            return Err(RgbdError::InvalidImageSize { width, height });
        }
        Ok(Self {
            rgb,
            depth,
            width,
            height,
        })
    }

    /// Get the depth value at a specific pixel.
    #[inline]
    pub fn get_depth(&self, x: usize, y: usize) -> f64 {
        self.depth[y * self.width + x]
    }

    /// Get the color value at a specific pixel.
    #[inline]
    pub fn get_color(&self, x: usize, y: usize) -> [u8; 3] {
        self.rgb[y * self.width + x]
    }
}

/// Back-project an RGB-D image into a colored point cloud.
///
/// Each pixel with a positive depth is lifted through the pinhole model:
/// `x = (u - cx) * z / fx`, `y = (v - cy) * z / fy`, `z = depth`.
/// Zero-depth pixels carry no measurement and are dropped.
pub fn create_point_cloud_from_rgbd(
    rgbd: &RgbdImage,
    intrinsic: &PinholeCameraIntrinsic,
) -> PointCloud {
    let (fx, fy) = intrinsic.focal_length;
    let (cx, cy) = intrinsic.principal_point;

    let mut points = Vec::with_capacity(rgbd.depth.len());
    let mut colors = Vec::with_capacity(rgbd.depth.len());

    for v in 0..rgbd.height {
        for u in 0..rgbd.width {
            let z = rgbd.get_depth(u, v);
            if z <= 0.0 {
                continue;
            }
            points.push([
                (u as f64 - cx) * z / fx,
                (v as f64 - cy) * z / fy,
                z,
            ]);
            colors.push(rgbd.get_color(u, v));
        }
    }

    PointCloud::new(points, Some(colors), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_intrinsic() -> PinholeCameraIntrinsic {
        PinholeCameraIntrinsic::new((100.0, 100.0), (1.0, 1.0), (2, 2))
    }

    #[test]
    fn test_new_rejects_mismatched_buffers() {
        let err = RgbdImage::new(vec![[0, 0, 0]; 4], vec![0.0; 3], 2, 2).unwrap_err();
        assert!(matches!(err, RgbdError::SizeMismatch { rgb: 4, depth: 3 }));

        let err = RgbdImage::new(vec![[0, 0, 0]; 4], vec![0.0; 4], 3, 2).unwrap_err();
        assert!(matches!(err, RgbdError::InvalidImageSize { .. }));
    }

    #[test]
    fn test_back_projection_drops_zero_depth() {
        let rgbd = RgbdImage::new(
            vec![[10, 0, 0], [0, 20, 0], [0, 0, 30], [40, 40, 40]],
            vec![0.0, 1.0, 2.0, 0.5],
            2,
            2,
        )
        .unwrap();
        let cloud = create_point_cloud_from_rgbd(&rgbd, &test_intrinsic());
        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.colors().unwrap()[0], [0, 20, 0]);
    }

    #[test]
    fn test_back_projection_pinhole_model() {
        // single pixel at (u=1, v=0) with depth 2.0
        let rgbd = RgbdImage::new(
            vec![[0, 0, 0], [255, 255, 255], [0, 0, 0], [0, 0, 0]],
            vec![0.0, 2.0, 0.0, 0.0],
            2,
            2,
        )
        .unwrap();
        let cloud = create_point_cloud_from_rgbd(&rgbd, &test_intrinsic());
        assert_eq!(cloud.len(), 1);
        let p = cloud.points()[0];
        // (1 - 1) * 2 / 100 = 0, (0 - 1) * 2 / 100 = -0.02
        assert_relative_eq!(p[0], 0.0);
        assert_relative_eq!(p[1], -0.02);
        assert_relative_eq!(p[2], 2.0);
    }

    #[test]
    fn test_principal_point_centering() {
        let rgbd = RgbdImage::new(vec![[0, 0, 0]; 4], vec![1.0; 4], 2, 2).unwrap();
        let cloud = create_point_cloud_from_rgbd(&rgbd, &test_intrinsic());
        // the pixel at the principal point (1, 1) projects to the optical axis
        let on_axis = cloud
            .points()
            .iter()
            .filter(|p| p[0] == 0.0 && p[1] == 0.0)
            .count();
        assert_eq!(on_axis, 1);
    }
}
