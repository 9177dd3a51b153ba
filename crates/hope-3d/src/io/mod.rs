/// PLY point cloud reading.
pub mod ply;
