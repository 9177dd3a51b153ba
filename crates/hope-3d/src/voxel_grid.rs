use std::collections::HashMap;

use crate::pointcloud::PointCloud;

/// Accumulated voxel data: point sum, color sum, normal sum, point count.
type VoxelData = ([f64; 3], [u64; 3], [f64; 3], usize);

/// A 3D voxel grid for downsampling point clouds by centroid averaging.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    /// The edge length of a cubic voxel.
    leaf_size: f64,
}

impl VoxelGrid {
    /// Creates a new `VoxelGrid` with the given cubic leaf size.
    ///
    /// # Panics
    /// Panics if `leaf_size` is not positive.
    pub fn new(leaf_size: f64) -> Self {
        if leaf_size <= 0.0 {
            panic!("Leaf size must be positive");
        }
        VoxelGrid { leaf_size }
    }

    /// Downsamples the input point cloud by grouping points into voxels and
    /// computing per-voxel centroids. Colors and normals, when present, are
    /// averaged alongside the points.
    pub fn downsample(&self, point_cloud: &PointCloud) -> PointCloud {
        let mut grid: HashMap<(i32, i32, i32), VoxelData> = HashMap::new();

        for (i, point) in point_cloud.points().iter().enumerate() {
            let key = self.voxel_index(point);
            let entry = grid
                .entry(key)
                .or_insert(([0.0; 3], [0; 3], [0.0; 3], 0));
            entry.0[0] += point[0];
            entry.0[1] += point[1];
            entry.0[2] += point[2];
            entry.3 += 1;

            if let Some(colors) = point_cloud.colors() {
                let color = colors[i];
                entry.1[0] += color[0] as u64;
                entry.1[1] += color[1] as u64;
                entry.1[2] += color[2] as u64;
            }
            if let Some(normals) = point_cloud.normals() {
                let normal = normals[i];
                entry.2[0] += normal[0];
                entry.2[1] += normal[1];
                entry.2[2] += normal[2];
            }
        }

        let mut points = Vec::with_capacity(grid.len());
        let mut colors = point_cloud.colors().map(|_| Vec::with_capacity(grid.len()));
        let mut normals = point_cloud
            .normals()
            .map(|_| Vec::with_capacity(grid.len()));

        for (_key, (point_sum, color_sum, normal_sum, count)) in grid {
            let inv_count = 1.0 / count as f64;
            points.push([
                point_sum[0] * inv_count,
                point_sum[1] * inv_count,
                point_sum[2] * inv_count,
            ]);

            if let Some(ref mut colors_vec) = colors {
                colors_vec.push([
                    (color_sum[0] as f64 * inv_count).round() as u8,
                    (color_sum[1] as f64 * inv_count).round() as u8,
                    (color_sum[2] as f64 * inv_count).round() as u8,
                ]);
            }
            if let Some(ref mut normals_vec) = normals {
                let normal = [
                    normal_sum[0] * inv_count,
                    normal_sum[1] * inv_count,
                    normal_sum[2] * inv_count,
                ];
                let norm =
                    (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
                if norm > 0.0 {
                    normals_vec.push([normal[0] / norm, normal[1] / norm, normal[2] / norm]);
                } else {
                    normals_vec.push(normal);
                }
            }
        }

        PointCloud::new(points, colors, normals)
    }

    /// Computes the voxel index for a given point.
    #[inline]
    fn voxel_index(&self, point: &[f64; 3]) -> (i32, i32, i32) {
        (
            (point[0] / self.leaf_size).floor() as i32,
            (point[1] / self.leaf_size).floor() as i32,
            (point[2] / self.leaf_size).floor() as i32,
        )
    }
}
