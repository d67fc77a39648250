use cgmath::Vector3;

/// Fixed viewpoints reachable from the viewer's navigation dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPreset {
    /// High view from the water side
    Overview,
    West,
    East,
}

impl CameraPreset {
    pub const ALL: [CameraPreset; 3] = [CameraPreset::Overview, CameraPreset::West, CameraPreset::East];

    /// Preset for a navigation dot index, if there is one
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn eye_position(self) -> Vector3<f32> {
        match self {
            CameraPreset::Overview => Vector3::new(0.0, 800.0, 1200.0),
            CameraPreset::West => Vector3::new(-500.0, 600.0, 800.0),
            CameraPreset::East => Vector3::new(500.0, 600.0, 800.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lookup() {
        assert_eq!(CameraPreset::from_index(0), Some(CameraPreset::Overview));
        assert_eq!(CameraPreset::from_index(2), Some(CameraPreset::East));
        assert_eq!(CameraPreset::from_index(3), None);
    }

    #[test]
    fn test_side_views_mirror() {
        let west = CameraPreset::West.eye_position();
        let east = CameraPreset::East.eye_position();
        assert_eq!(west.x, -east.x);
        assert_eq!(west.y, east.y);
        assert_eq!(west.z, east.z);
    }
}
