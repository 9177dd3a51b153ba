/// A point cloud with points, colors, and normals.
#[derive(Debug, Clone)]
pub struct PointCloud {
    // The points in the point cloud.
    points: Vec<[f64; 3]>,
    // The colors of the points.
    colors: Option<Vec<[u8; 3]>>,
    // The normals of the points.
    normals: Option<Vec<[f64; 3]>>,
}

impl PointCloud {
    /// Create a new point cloud from points, colors (optional), and normals (optional).
    pub fn new(
        points: Vec<[f64; 3]>,
        colors: Option<Vec<[u8; 3]>>,
        normals: Option<Vec<[f64; 3]>>,
    ) -> Self {
        Self {
            points,
            colors,
            normals,
        }
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &Vec<[f64; 3]> {
        &self.points
    }

    /// Get as reference the colors of the points in the point cloud.
    pub fn colors(&self) -> Option<&Vec<[u8; 3]>> {
        self.colors.as_ref()
    }

    /// Get as reference the normals of the points in the point cloud.
    pub fn normals(&self) -> Option<&Vec<[f64; 3]>> {
        self.normals.as_ref()
    }

    /// Apply a 4x4 rigid transform to all points and rotate the normals.
    pub fn transform(&mut self, transform: &[[f64; 4]; 4]) {
        for point in self.points.iter_mut() {
            *point = transform_point(transform, point);
        }
        if let Some(normals) = self.normals.as_mut() {
            for normal in normals.iter_mut() {
                *normal = rotate_vector(transform, normal);
            }
        }
    }

    /// Scale all points uniformly about the origin.
    pub fn scale(&mut self, factor: f64) {
        for point in self.points.iter_mut() {
            point[0] *= factor;
            point[1] *= factor;
            point[2] *= factor;
        }
    }

    /// Keep only the points inside an axis-aligned bounding box.
    pub fn crop(&self, min: &[f64; 3], max: &[f64; 3]) -> PointCloud {
        let inside = |p: &[f64; 3]| {
            p[0] >= min[0]
                && p[0] <= max[0]
                && p[1] >= min[1]
                && p[1] <= max[1]
                && p[2] >= min[2]
                && p[2] <= max[2]
        };

        let mut points = Vec::new();
        let mut colors = self.colors.as_ref().map(|_| Vec::new());
        let mut normals = self.normals.as_ref().map(|_| Vec::new());

        for (i, point) in self.points.iter().enumerate() {
            if !inside(point) {
                continue;
            }
            points.push(*point);
            if let (Some(out), Some(src)) = (colors.as_mut(), self.colors.as_ref()) {
                out.push(src[i]);
            }
            if let (Some(out), Some(src)) = (normals.as_mut(), self.normals.as_ref()) {
                out.push(src[i]);
            }
        }

        PointCloud::new(points, colors, normals)
    }

    /// Get the minimum bound of the point cloud.
    pub fn min_bound(&self) -> [f64; 3] {
        self.points.iter().fold(
            [f64::INFINITY, f64::INFINITY, f64::INFINITY],
            |acc, p| [acc[0].min(p[0]), acc[1].min(p[1]), acc[2].min(p[2])],
        )
    }

    /// Get the maximum bound of the point cloud.
    pub fn max_bound(&self) -> [f64; 3] {
        self.points.iter().fold(
            [f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY],
            |acc, p| [acc[0].max(p[0]), acc[1].max(p[1]), acc[2].max(p[2])],
        )
    }
}

/// Apply a row-major 4x4 rigid transform to a single point.
#[inline]
pub fn transform_point(transform: &[[f64; 4]; 4], point: &[f64; 3]) -> [f64; 3] {
    let [x, y, z] = *point;
    [
        transform[0][0] * x + transform[0][1] * y + transform[0][2] * z + transform[0][3],
        transform[1][0] * x + transform[1][1] * y + transform[1][2] * z + transform[1][3],
        transform[2][0] * x + transform[2][1] * y + transform[2][2] * z + transform[2][3],
    ]
}

/// Apply only the rotation part of a 4x4 transform to a vector.
#[inline]
pub fn rotate_vector(transform: &[[f64; 4]; 4], vector: &[f64; 3]) -> [f64; 3] {
    let [x, y, z] = *vector;
    [
        transform[0][0] * x + transform[0][1] * y + transform[0][2] * z,
        transform[1][0] * x + transform[1][1] * y + transform[1][2] * z,
        transform[2][0] * x + transform[2][1] * y + transform[2][2] * z,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pointcloud_accessors() {
        let pointcloud = PointCloud::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            Some(vec![[255, 0, 0], [0, 255, 0]]),
            None,
        );

        assert_eq!(pointcloud.len(), 2);
        assert!(!pointcloud.is_empty());
        assert!(pointcloud.normals().is_none());
        if let Some(colors) = pointcloud.colors() {
            assert_eq!(colors[1], [0, 255, 0]);
        }
    }

    #[test]
    fn test_transform_translation() {
        let mut pointcloud = PointCloud::new(vec![[1.0, 2.0, 3.0]], None, None);
        let transform = [
            [1.0, 0.0, 0.0, 10.0],
            [0.0, 1.0, 0.0, -1.0],
            [0.0, 0.0, 1.0, 0.5],
            [0.0, 0.0, 0.0, 1.0],
        ];
        pointcloud.transform(&transform);
        assert_relative_eq!(pointcloud.points()[0][0], 11.0);
        assert_relative_eq!(pointcloud.points()[0][1], 1.0);
        assert_relative_eq!(pointcloud.points()[0][2], 3.5);
    }

    #[test]
    fn test_transform_rotation_keeps_normals_unit() {
        // 90 degrees about z
        let transform = [
            [0.0, -1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let mut pointcloud =
            PointCloud::new(vec![[1.0, 0.0, 0.0]], None, Some(vec![[1.0, 0.0, 0.0]]));
        pointcloud.transform(&transform);
        assert_relative_eq!(pointcloud.points()[0][1], 1.0);
        let normal = pointcloud.normals().unwrap()[0];
        assert_relative_eq!(normal[1], 1.0);
        // normals must not pick up the translation
        assert_relative_eq!(normal[0], 0.0);
    }

    #[test]
    fn test_scale_meters_to_centimeters() {
        let mut pointcloud = PointCloud::new(vec![[0.01, 0.02, 1.0]], None, None);
        pointcloud.scale(100.0);
        assert_relative_eq!(pointcloud.points()[0][0], 1.0);
        assert_relative_eq!(pointcloud.points()[0][2], 100.0);
    }

    #[test]
    fn test_crop_filters_colors_with_points() {
        let pointcloud = PointCloud::new(
            vec![[0.0, 0.0, 0.5], [0.0, 0.0, 5.0], [0.5, 0.5, 1.0]],
            Some(vec![[1, 1, 1], [2, 2, 2], [3, 3, 3]]),
            None,
        );
        let cropped = pointcloud.crop(&[-1.0, -1.0, 0.0], &[1.0, 1.0, 2.0]);
        assert_eq!(cropped.len(), 2);
        assert_eq!(cropped.colors().unwrap().as_slice(), &[[1, 1, 1], [3, 3, 3]]);
    }

    #[test]
    fn test_bounds() {
        let pointcloud =
            PointCloud::new(vec![[1.0, -2.0, 3.0], [-1.0, 2.0, 0.0]], None, None);
        assert_eq!(pointcloud.min_bound(), [-1.0, -2.0, 0.0]);
        assert_eq!(pointcloud.max_bound(), [1.0, 2.0, 3.0]);
    }
}
