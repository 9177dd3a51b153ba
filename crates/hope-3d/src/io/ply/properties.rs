use super::PlyError;

/// A single vertex property declared in the PLY header.
#[derive(Debug, PartialEq, Clone)]
pub struct PlyPropertyDefinition {
    /// The property name (e.g. `x`, `red`, `nz`).
    pub name: String,
    /// The property storage type.
    pub data_type: PlyDataType,
}

/// The scalar storage types a PLY property can use.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlyDataType {
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
    /// signed 8-bit integer
    Int8,
    /// unsigned 8-bit integer
    UInt8,
    /// signed 16-bit integer
    Int16,
    /// unsigned 16-bit integer
    UInt16,
    /// signed 32-bit integer
    Int32,
    /// unsigned 32-bit integer
    UInt32,
}

impl PlyDataType {
    /// The size of one value in bytes.
    pub fn size(&self) -> usize {
        match self {
            PlyDataType::Float32 | PlyDataType::Int32 | PlyDataType::UInt32 => 4,
            PlyDataType::Float64 => 8,
            PlyDataType::Int16 | PlyDataType::UInt16 => 2,
            PlyDataType::Int8 | PlyDataType::UInt8 => 1,
        }
    }
}

/// The vertex layouts found in HOPE scene reconstructions.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VertexLayout {
    /// `x y z` floats followed by `red green blue` bytes.
    XyzRgb,
    /// `x y z` floats, `red green blue` bytes, `nx ny nz` floats.
    XyzRgbNormals,
}

impl VertexLayout {
    /// The size of one vertex record in bytes.
    pub fn size_of(&self) -> usize {
        match self {
            VertexLayout::XyzRgb => 15,
            VertexLayout::XyzRgbNormals => 27,
        }
    }

    /// Whether the layout carries normals.
    pub fn has_normals(&self) -> bool {
        matches!(self, VertexLayout::XyzRgbNormals)
    }

    /// Detect the layout from the header's property list.
    pub fn detect(properties: &[PlyPropertyDefinition]) -> Result<Self, PlyError> {
        let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
        let all_f32_xyz = properties[..properties.len().min(3)]
            .iter()
            .all(|p| p.data_type == PlyDataType::Float32);

        match names.as_slice() {
            ["x", "y", "z", "red", "green", "blue"] if all_f32_xyz => Ok(VertexLayout::XyzRgb),
            ["x", "y", "z", "red", "green", "blue", "nx", "ny", "nz"] if all_f32_xyz => {
                Ok(VertexLayout::XyzRgbNormals)
            }
            _ => Err(PlyError::UnsupportedLayout),
        }
    }

    /// Decode one vertex record from a little-endian byte buffer.
    pub fn decode(&self, buf: &[u8]) -> ([f64; 3], [u8; 3], Option<[f64; 3]>) {
        let point = [
            read_f32_le(buf, 0) as f64,
            read_f32_le(buf, 4) as f64,
            read_f32_le(buf, 8) as f64,
        ];
        let color = [buf[12], buf[13], buf[14]];
        let normal = self.has_normals().then(|| {
            [
                read_f32_le(buf, 15) as f64,
                read_f32_le(buf, 19) as f64,
                read_f32_le(buf, 23) as f64,
            ]
        });
        (point, color, normal)
    }
}

/// Read a little-endian f32 from a byte buffer.
#[inline]
fn read_f32_le(buf: &[u8], offset: usize) -> f32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buf[offset..offset + 4]);
    f32::from_le_bytes(bytes)
}
