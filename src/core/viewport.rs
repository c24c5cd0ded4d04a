//! Ein MPR-Viewport: Kamera, Slab, Slice-Steuerung, Transferfunktion, Fadenkreuz-Cache.
//!
//! Viewports kennen einander nicht. Geschwister werden ausschließlich über ihren
//! Index im Viewport-Array angesprochen.

use super::camera::Camera3D;
use super::overlay::CrosshairOverlay;
use super::volume::VolumeGeometry;
use super::window_level::WindowLevel;
use glam::{DVec2, DVec3};
use std::sync::Arc;

/// Minimale Slab-Dicke (dünne Schicht).
pub const MIN_SLAB_THICKNESS: f64 = 0.1;

/// Standard-Orientierungen der drei orthogonalen MPR-Ansichten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceAxis {
    Axial,
    Sagittal,
    Coronal,
}

impl SliceAxis {
    /// Slice-Normale (= Blickrichtung der Kamera).
    pub fn slice_normal(self) -> DVec3 {
        match self {
            Self::Axial => DVec3::Z,
            Self::Sagittal => DVec3::X,
            Self::Coronal => DVec3::Y,
        }
    }

    /// View-Up der Ansicht.
    pub fn view_up(self) -> DVec3 {
        match self {
            Self::Axial => DVec3::NEG_Y,
            Self::Sagittal | Self::Coronal => DVec3::Z,
        }
    }
}

/// Viewport-Handle mit allem, was die Interaktion am Renderer verändern darf.
pub struct MprViewport {
    /// Aktive Kamera des Renderers
    pub camera: Camera3D,
    size: DVec2,
    slab_thickness: f64,
    volume: Option<Arc<VolumeGeometry>>,
    mapping_range: [f64; 2],
    crosshair_world: DVec3,
    initial_crosshair_world: DVec3,
    overlay: Option<Box<dyn CrosshairOverlay>>,
}

impl MprViewport {
    /// Erstellt einen Viewport mit gegebener Kamera und Display-Größe (Pixel).
    pub fn new(camera: Camera3D, size: DVec2) -> Self {
        let mut viewport = Self {
            camera,
            size,
            slab_thickness: MIN_SLAB_THICKNESS,
            volume: None,
            mapping_range: [0.0, 1.0],
            crosshair_world: DVec3::ZERO,
            initial_crosshair_world: DVec3::ZERO,
            overlay: None,
        };
        viewport.reset_clipping_range();
        viewport
    }

    /// Erstellt einen orthogonalen Viewport, zentriert auf das Volumen.
    pub fn orthogonal(axis: SliceAxis, volume: Arc<VolumeGeometry>, size: DVec2) -> Self {
        let (min, max) = volume.bounds();
        let extent = max - min;
        let center = volume.center();
        let normal = axis.slice_normal();

        let mut camera = Camera3D::new();
        camera.focal_point = center;
        camera.position = center - normal * extent.length().max(1.0);
        camera.view_up = axis.view_up();
        camera.parallel_projection = true;
        camera.parallel_scale = (extent.max_element() / 2.0).max(1.0);

        let mapping_range = volume.scalar_range;
        let mut viewport = Self::new(camera, size);
        viewport.mapping_range = mapping_range;
        viewport.volume = Some(volume);
        viewport.crosshair_world = center;
        viewport.initial_crosshair_world = center;
        viewport
    }

    /// Hängt ein Overlay-Widget an.
    pub fn with_overlay(mut self, overlay: Box<dyn CrosshairOverlay>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Hängt ein Volumen an und übernimmt dessen Skalarbereich als Mapping-Range.
    pub fn with_volume(mut self, volume: Arc<VolumeGeometry>) -> Self {
        self.mapping_range = volume.scalar_range;
        self.volume = Some(volume);
        self
    }

    /// Display-Größe in Pixeln.
    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Setzt die Display-Größe (nach Resize des Host-Fensters).
    pub fn set_size(&mut self, size: DVec2) {
        self.size = size;
    }

    pub fn volume(&self) -> Option<&Arc<VolumeGeometry>> {
        self.volume.as_ref()
    }

    pub fn overlay(&self) -> Option<&dyn CrosshairOverlay> {
        self.overlay.as_deref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut (dyn CrosshairOverlay + 'static)> {
        self.overlay.as_deref_mut()
    }

    // ── Slab & Orientierung ─────────────────────────────────────────

    pub fn slab_thickness(&self) -> f64 {
        self.slab_thickness
    }

    /// Setzt die Slab-Dicke (min. `MIN_SLAB_THICKNESS`) und passt das Clipping an.
    pub fn set_slab_thickness(&mut self, thickness: f64) {
        self.slab_thickness = thickness.max(MIN_SLAB_THICKNESS);
        self.reset_clipping_range();
    }

    /// Clipping-Range = Fokusdistanz ± halbe Slab-Dicke.
    pub fn reset_clipping_range(&mut self) {
        self.camera.reset_clipping_range(self.slab_thickness);
    }

    /// Slice-Normale, zeigt von der Kamera in die Szene.
    pub fn slice_normal(&self) -> DVec3 {
        self.camera.direction_of_projection()
    }

    pub fn view_up(&self) -> DVec3 {
        self.camera.view_up
    }

    /// Richtet die Kamera neu aus; Fokuspunkt und Abstand bleiben erhalten.
    pub fn set_orientation(&mut self, slice_normal: DVec3, view_up: DVec3) {
        let Some(normal) = slice_normal.try_normalize() else {
            log::warn!("set_orientation mit Null-Normale ignoriert");
            return;
        };

        let distance = self.camera.distance().max(Camera3D::MIN_NEAR);
        self.camera.position = self.camera.focal_point - normal * distance;
        self.camera.view_up = view_up;
        self.camera.orthogonalize_view_up();
        self.reset_clipping_range();
    }

    // ── Slice ───────────────────────────────────────────────────────

    /// Aktueller Slice als Abstand des Fokuspunkts entlang der Normale.
    pub fn slice(&self) -> f64 {
        self.camera.focal_point.dot(self.slice_normal())
    }

    /// Gültiger Slice-Bereich: Projektion der Volumen-Ecken auf die Normale.
    ///
    /// Ohne Volumen ist der Bereich auf den aktuellen Slice beschränkt.
    pub fn slice_range(&self) -> [f64; 2] {
        let Some(volume) = self.volume.as_ref() else {
            let slice = self.slice();
            return [slice, slice];
        };

        let normal = self.slice_normal();
        volume
            .corners()
            .iter()
            .map(|corner| corner.dot(normal))
            .fold([f64::INFINITY, f64::NEG_INFINITY], |[low, high], d| {
                [low.min(d), high.max(d)]
            })
    }

    /// Verschiebt die Kamera entlang der Normale auf den gegebenen Slice.
    pub fn scroll_to_slice(&mut self, slice: f64) {
        let delta = slice - self.slice();
        let normal = self.slice_normal();
        self.camera.translate(normal * delta);
    }

    /// Verschiebt die Kamera entlang ihrer Normale, sodass die Fokusebene `world` enthält.
    ///
    /// Gibt die zurückgelegte Strecke (vorzeichenbehaftet) zurück.
    pub fn align_focal_plane(&mut self, world: DVec3) -> f64 {
        let normal = self.slice_normal();
        let delta = (world - self.camera.focal_point).dot(normal);
        self.camera.translate(normal * delta);
        delta
    }

    // ── Transferfunktion ────────────────────────────────────────────

    /// Mapping-Range der RGB-Transferfunktion.
    pub fn mapping_range(&self) -> [f64; 2] {
        self.mapping_range
    }

    pub fn set_mapping_range(&mut self, range: [f64; 2]) {
        self.mapping_range = range;
    }

    pub fn window_level(&self) -> WindowLevel {
        WindowLevel::from_range(self.mapping_range)
    }

    // ── Fadenkreuz-Cache ────────────────────────────────────────────

    /// Gecachte 3D-Position des gemeinsamen Fadenkreuzes.
    pub fn crosshair_world(&self) -> DVec3 {
        self.crosshair_world
    }

    pub fn set_crosshair_world(&mut self, world: DVec3) {
        self.crosshair_world = world;
    }

    /// Fadenkreuz-Position beim Initialisieren (Rotations-Pivot-Referenz).
    pub fn initial_crosshair_world(&self) -> DVec3 {
        self.initial_crosshair_world
    }

    pub fn set_initial_crosshair_world(&mut self, world: DVec3) {
        self.initial_crosshair_world = world;
    }

    // ── Koordinaten ─────────────────────────────────────────────────

    pub fn world_to_display(&self, world: DVec3) -> DVec3 {
        self.camera.world_to_display(world, self.size)
    }

    pub fn display_to_world(&self, display: DVec3) -> DVec3 {
        self.camera.display_to_world(display, self.size)
    }
}
