#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pinhole camera intrinsics.
pub mod camera;

/// I/O utilities for reading 3D data.
pub mod io;

/// Point cloud container and rigid transforms.
pub mod pointcloud;

/// RGB-D images and back-projection into point clouds.
pub mod rgbd;

/// Voxel grid downsampling.
pub mod voxel_grid;
