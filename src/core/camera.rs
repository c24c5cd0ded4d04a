//! 3D-Kamera eines MPR-Viewports (Position, Fokus, View-Up, Projektion).
//!
//! Der externe Renderer liest diesen Zustand; die Interaktion verändert ihn nur
//! über die hier angebotenen Operationen.

use glam::{DMat4, DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// 3D-Kamera mit Parallel- oder Perspektivprojektion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera3D {
    /// Kameraposition in Welt-Koordinaten
    pub position: DVec3,
    /// Fokuspunkt in Welt-Koordinaten
    pub focal_point: DVec3,
    /// Aufwärts-Vektor der Ansicht
    pub view_up: DVec3,
    /// `true` = orthographische Projektion
    pub parallel_projection: bool,
    /// Halbe sichtbare Höhe in Welteinheiten (nur Parallelprojektion)
    pub parallel_scale: f64,
    /// Vertikaler Öffnungswinkel in Grad (nur Perspektive)
    pub view_angle_deg: f64,
    /// Near/Far-Clipping-Distanz entlang der Blickrichtung
    pub clipping_range: [f64; 2],
    /// Fokuspunkt beim Perspektiv-Zoom nicht mitbewegen
    pub freeze_focal_point: bool,
}

impl Camera3D {
    /// Minimale Near-Distanz, damit die Projektion gültig bleibt.
    pub const MIN_NEAR: f64 = 1e-3;

    /// Erstellt eine Kamera bei (0,0,1), Blick auf den Ursprung.
    pub fn new() -> Self {
        Self {
            position: DVec3::Z,
            focal_point: DVec3::ZERO,
            view_up: DVec3::Y,
            parallel_projection: true,
            parallel_scale: 1.0,
            view_angle_deg: 30.0,
            clipping_range: [0.01, 1000.01],
            freeze_focal_point: false,
        }
    }

    /// Abstand zwischen Position und Fokuspunkt.
    pub fn distance(&self) -> f64 {
        self.position.distance(self.focal_point)
    }

    /// Normierte Blickrichtung (Position → Fokus).
    pub fn direction_of_projection(&self) -> DVec3 {
        (self.focal_point - self.position).normalize_or_zero()
    }

    /// Normale der Bildebene, zeigt zur Kamera.
    pub fn view_plane_normal(&self) -> DVec3 {
        -self.direction_of_projection()
    }

    /// Macht `view_up` orthogonal zur Blickrichtung und normiert ihn.
    pub fn orthogonalize_view_up(&mut self) {
        let direction = self.direction_of_projection();
        let up = self.view_up - direction * self.view_up.dot(direction);
        self.view_up = up
            .try_normalize()
            .unwrap_or_else(|| direction.any_orthonormal_vector());
    }

    /// Setzt die Clipping-Range symmetrisch um den Fokuspunkt (± halbe Slab-Dicke).
    ///
    /// Damit liegt Display-Tiefe 0 exakt auf der vorderen Slab-Fläche.
    pub fn reset_clipping_range(&mut self, slab_thickness: f64) {
        let distance = self.distance();
        let half = slab_thickness / 2.0;
        let near = (distance - half).max(Self::MIN_NEAR);
        let far = (distance + half).max(near + Self::MIN_NEAR);
        self.clipping_range = [near, far];
    }

    /// Wendet eine affine Transformation auf Position, Fokus und View-Up an.
    pub fn apply_transform(&mut self, matrix: &DMat4) {
        let view_up_point = self.position + self.view_up;

        self.position = matrix.transform_point3(self.position);
        self.focal_point = matrix.transform_point3(self.focal_point);

        let new_up = matrix.transform_point3(view_up_point) - self.position;
        self.view_up = new_up.try_normalize().unwrap_or(self.view_up);
    }

    /// Verschiebt Position und Fokuspunkt gemeinsam (Pan, Slice-Scroll).
    pub fn translate(&mut self, delta: DVec3) {
        self.position += delta;
        self.focal_point += delta;
    }

    /// View-Matrix (rechtshändig, OpenGL-Konvention).
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.focal_point, self.view_up)
    }

    /// Projektionsmatrix für das gegebene Seitenverhältnis.
    pub fn projection_matrix(&self, aspect: f64) -> DMat4 {
        let [near, far] = self.clipping_range;
        if self.parallel_projection {
            let half_height = self.parallel_scale;
            let half_width = half_height * aspect;
            DMat4::orthographic_rh_gl(-half_width, half_width, -half_height, half_height, near, far)
        } else {
            DMat4::perspective_rh_gl(self.view_angle_deg.to_radians(), aspect, near, far)
        }
    }

    fn view_projection(&self, viewport_size: DVec2) -> DMat4 {
        let aspect = viewport_size.x / viewport_size.y.max(1.0);
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Welt → Display. `z` ist die Tiefe im Bereich 0 (near) bis 1 (far).
    pub fn world_to_display(&self, world: DVec3, viewport_size: DVec2) -> DVec3 {
        let ndc = self.view_projection(viewport_size).project_point3(world);
        DVec3::new(
            (ndc.x + 1.0) * 0.5 * viewport_size.x,
            (ndc.y + 1.0) * 0.5 * viewport_size.y,
            (ndc.z + 1.0) * 0.5,
        )
    }

    /// Display → Welt. `display.z` ist die Tiefe (0 = near, 1 = far).
    pub fn display_to_world(&self, display: DVec3, viewport_size: DVec2) -> DVec3 {
        let width = viewport_size.x.max(1.0);
        let height = viewport_size.y.max(1.0);
        let ndc = DVec4::new(
            2.0 * display.x / width - 1.0,
            2.0 * display.y / height - 1.0,
            2.0 * display.z - 1.0,
            1.0,
        );

        let world = self.view_projection(viewport_size).inverse() * ndc;
        if world.w.abs() < f64::EPSILON {
            return world.truncate();
        }
        world.truncate() / world.w
    }

    /// Welteinheiten pro Display-Pixel in der Fokusebene.
    pub fn world_per_pixel(&self, viewport_size: DVec2) -> f64 {
        let depth = self.world_to_display(self.focal_point, viewport_size).z;
        let center = viewport_size / 2.0;
        let a = self.display_to_world(center.extend(depth), viewport_size);
        let b = self.display_to_world((center + DVec2::X).extend(depth), viewport_size);
        a.distance(b)
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}
