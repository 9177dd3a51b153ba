use std::io::{BufRead, Read};
use std::path::Path;

use super::{
    properties::{PlyDataType, PlyPropertyDefinition, VertexLayout},
    PlyError,
};
use crate::pointcloud::PointCloud;

#[derive(Debug)]
struct PlyHeader {
    pub vertex_count: usize,
    pub layout: VertexLayout,
}

fn parse_header<R: BufRead>(reader: &mut R) -> Result<PlyHeader, PlyError> {
    let mut line = String::new();
    let mut vertex_count = None;
    let mut is_binary_little_endian = false;
    let mut is_ply = false;
    let mut properties = Vec::new();
    let mut in_vertex_element = false;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(PlyError::MalformedHeader);
        }
        let trimmed = line.trim();

        if trimmed == "ply" {
            is_ply = true;
            continue;
        }

        if trimmed == "end_header" {
            break;
        }

        if trimmed.starts_with("format binary_little_endian") {
            is_binary_little_endian = true;
        } else if trimmed.starts_with("element vertex") {
            in_vertex_element = true;
            vertex_count = Some(
                trimmed
                    .split_whitespace()
                    .last()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
            );
        } else if trimmed.starts_with("element") {
            in_vertex_element = false;
        } else if trimmed.starts_with("property") && in_vertex_element {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            if parts.len() >= 3 {
                let data_type = parse_data_type(parts[1])?;
                let name = parts[2].to_string();
                properties.push(PlyPropertyDefinition { name, data_type });
            }
        }
    }

    if !is_ply || !is_binary_little_endian {
        return Err(PlyError::UnsupportedFormat);
    }

    let vertex_count = vertex_count.ok_or(PlyError::MalformedHeader)?;
    let layout = VertexLayout::detect(&properties)?;

    Ok(PlyHeader {
        vertex_count,
        layout,
    })
}

fn parse_data_type(type_str: &str) -> Result<PlyDataType, PlyError> {
    match type_str {
        "float" | "float32" => Ok(PlyDataType::Float32),
        "double" | "float64" => Ok(PlyDataType::Float64),
        "char" | "int8" => Ok(PlyDataType::Int8),
        "uchar" | "uint8" => Ok(PlyDataType::UInt8),
        "short" | "int16" => Ok(PlyDataType::Int16),
        "ushort" | "uint16" => Ok(PlyDataType::UInt16),
        "int" | "int32" => Ok(PlyDataType::Int32),
        "uint" | "uint32" => Ok(PlyDataType::UInt32),
        _ => Err(PlyError::UnsupportedLayout),
    }
}

/// Read a binary little-endian PLY file with automatic vertex layout detection.
///
/// Supports the colored (and optionally normal-carrying) vertex layouts the
/// HOPE scene reconstructions ship with.
pub fn read_ply_binary(path: impl AsRef<Path>) -> Result<PointCloud, PlyError> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let header = parse_header(&mut reader)?;
    let mut buffer = vec![0u8; header.layout.size_of()];

    let mut points = Vec::with_capacity(header.vertex_count);
    let mut colors = Vec::with_capacity(header.vertex_count);
    let mut normals = header
        .layout
        .has_normals()
        .then(|| Vec::with_capacity(header.vertex_count));

    for _ in 0..header.vertex_count {
        reader.read_exact(&mut buffer)?;
        let (point, color, normal) = header.layout.decode(&buffer);
        points.push(point);
        colors.push(color);
        if let (Some(normals), Some(normal)) = (normals.as_mut(), normal) {
            normals.push(normal);
        }
    }

    Ok(PointCloud::new(points, Some(colors), normals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_test_ply(vertices: &[([f32; 3], [u8; 3])]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "ply\nformat binary_little_endian 1.0\nelement vertex {}\n\
             property float x\nproperty float y\nproperty float z\n\
             property uchar red\nproperty uchar green\nproperty uchar blue\nend_header\n",
            vertices.len()
        )
        .unwrap();
        for (point, color) in vertices {
            for coord in point {
                file.write_all(&coord.to_le_bytes()).unwrap();
            }
            file.write_all(color).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_header_basic() {
        let header_text = "ply\nformat binary_little_endian 1.0\nelement vertex 10\n\
             property float x\nproperty float y\nproperty float z\n\
             property uchar red\nproperty uchar green\nproperty uchar blue\nend_header\n";
        let mut reader = std::io::BufReader::new(header_text.as_bytes());
        let header = parse_header(&mut reader).unwrap();
        assert_eq!(header.vertex_count, 10);
        assert_eq!(header.layout, VertexLayout::XyzRgb);
    }

    #[test]
    fn test_parse_header_rejects_ascii() {
        let header_text = "ply\nformat ascii 1.0\nelement vertex 1\n\
             property float x\nproperty float y\nproperty float z\n\
             property uchar red\nproperty uchar green\nproperty uchar blue\nend_header\n";
        let mut reader = std::io::BufReader::new(header_text.as_bytes());
        let err = parse_header(&mut reader).unwrap_err();
        assert!(matches!(err, PlyError::UnsupportedFormat));
    }

    #[test]
    fn test_parse_header_ignores_face_properties() {
        let header_text = "ply\nformat binary_little_endian 1.0\nelement vertex 2\n\
             property float x\nproperty float y\nproperty float z\n\
             property uchar red\nproperty uchar green\nproperty uchar blue\n\
             element face 0\nproperty list uchar int vertex_indices\nend_header\n";
        let mut reader = std::io::BufReader::new(header_text.as_bytes());
        let header = parse_header(&mut reader).unwrap();
        assert_eq!(header.vertex_count, 2);
        assert_eq!(header.layout, VertexLayout::XyzRgb);
    }

    #[test]
    fn test_read_ply_binary() {
        let file = write_test_ply(&[
            ([0.0, 0.0, 1.0], [255, 0, 0]),
            ([0.5, -0.5, 2.0], [0, 255, 0]),
        ]);
        let cloud = read_ply_binary(file.path()).unwrap();
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.points()[1], [0.5, -0.5, 2.0]);
        assert_eq!(cloud.colors().unwrap()[0], [255, 0, 0]);
        assert!(cloud.normals().is_none());
    }

    #[test]
    fn test_read_ply_truncated_body() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "ply\nformat binary_little_endian 1.0\nelement vertex 5\n\
             property float x\nproperty float y\nproperty float z\n\
             property uchar red\nproperty uchar green\nproperty uchar blue\nend_header\n"
        )
        .unwrap();
        file.flush().unwrap();
        let err = read_ply_binary(file.path()).unwrap_err();
        assert!(matches!(err, PlyError::Io(_)));
    }
}
