//! Geometrie und Skalardaten des dargestellten Volumens.

use glam::DVec3;
use std::sync::Arc;

/// Voxel-Wert an einer Weltposition (z.B. HU-Wert am Fadenkreuz).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelSample {
    /// Skalarwert des Voxels
    pub value: f32,
    /// Gerundeter, geklemmter Voxel-Index
    pub index: [usize; 3],
}

/// Achsparalleles Volumen: Ursprung, Voxelabstand, Dimensionen, Skalarbereich.
#[derive(Debug, Clone)]
pub struct VolumeGeometry {
    /// Weltposition des ersten Voxels
    pub origin: DVec3,
    /// Voxelabstand pro Achse
    pub spacing: DVec3,
    /// Anzahl Voxel pro Achse
    pub dimensions: [usize; 3],
    /// Minimaler und maximaler Skalarwert (intrinsischer Dynamikbereich)
    pub scalar_range: [f64; 2],
    /// Optionale Skalardaten, x-schnellste Reihenfolge
    pub scalars: Option<Arc<[f32]>>,
}

impl VolumeGeometry {
    /// Erstellt ein Volumen ohne Skalardaten.
    pub fn new(origin: DVec3, spacing: DVec3, dimensions: [usize; 3], scalar_range: [f64; 2]) -> Self {
        Self {
            origin,
            spacing,
            dimensions,
            scalar_range,
            scalars: None,
        }
    }

    /// Hängt Skalardaten an. Die Länge muss dem Produkt der Dimensionen entsprechen,
    /// sonst werden die Daten verworfen.
    pub fn with_scalars(mut self, scalars: Arc<[f32]>) -> Self {
        let expected = self.voxel_count();
        if scalars.len() == expected {
            self.scalars = Some(scalars);
        } else {
            log::warn!(
                "Skalardaten verworfen: {} Werte, erwartet {}",
                scalars.len(),
                expected
            );
        }
        self
    }

    /// Anzahl Voxel.
    pub fn voxel_count(&self) -> usize {
        self.dimensions.iter().product()
    }

    /// Intrinsischer Dynamikbereich (max − min).
    pub fn dynamic_range(&self) -> f64 {
        self.scalar_range[1] - self.scalar_range[0]
    }

    /// Welt-Bounding-Box (min, max) über die Voxelzentren.
    pub fn bounds(&self) -> (DVec3, DVec3) {
        let extent = DVec3::new(
            self.dimensions[0].saturating_sub(1) as f64,
            self.dimensions[1].saturating_sub(1) as f64,
            self.dimensions[2].saturating_sub(1) as f64,
        ) * self.spacing;
        let a = self.origin;
        let b = self.origin + extent;
        (a.min(b), a.max(b))
    }

    /// Die acht Eckpunkte der Bounding-Box.
    pub fn corners(&self) -> [DVec3; 8] {
        let (min, max) = self.bounds();
        let mut corners = [DVec3::ZERO; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = DVec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
        }
        corners
    }

    /// Mittelpunkt der Bounding-Box.
    pub fn center(&self) -> DVec3 {
        let (min, max) = self.bounds();
        (min + max) / 2.0
    }

    /// Länge der Voxel-Diagonale.
    pub fn diagonal_spacing(&self) -> f64 {
        self.spacing.length()
    }

    /// Kleinster Voxelabstand (Schrittweite für Mausrad-Scroll).
    pub fn min_spacing(&self) -> f64 {
        self.spacing.abs().min_element()
    }

    /// Welt → kontinuierlicher Voxel-Index.
    pub fn world_to_index(&self, world: DVec3) -> DVec3 {
        (world - self.origin) / self.spacing
    }

    /// Liest den Skalarwert an einer Weltposition.
    ///
    /// Der Index wird gerundet und in die Dimensionen geklemmt. `None`, wenn keine
    /// Skalardaten vorhanden sind.
    pub fn sample(&self, world: DVec3) -> Option<VoxelSample> {
        let scalars = self.scalars.as_ref()?;
        let continuous = self.world_to_index(world);

        let mut index = [0usize; 3];
        for axis in 0..3 {
            let max = self.dimensions[axis].saturating_sub(1) as f64;
            let value = continuous[axis];
            index[axis] = if value.is_nan() {
                0
            } else {
                value.round().clamp(0.0, max) as usize
            };
        }

        let [nx, ny, _] = self.dimensions;
        let flat = index[0] + index[1] * nx + index[2] * nx * ny;
        scalars.get(flat).map(|&value| VoxelSample { value, index })
    }
}
