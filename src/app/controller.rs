//! Viewer-Controller: besitzt alle verknüpften Viewports und verteilt Zeiger-Events.

use super::callbacks::InteractionCallbacks;
use super::chain::{EventContext, HandlerChain, InteractionHandler};
use super::events::{InteractionEffect, PointerEvent};
use super::state::InteractionState;
use super::use_cases::crosshairs;
use crate::core::{MprViewport, VoxelSample};
use crate::error::{InteractionError, Result};
use crate::shared::InteractionOptions;
use glam::DVec3;

/// Interaktionszustand und Handler-Kette eines einzelnen Viewports.
pub struct MprInteractor {
    state: InteractionState,
    chain: HandlerChain,
}

impl MprInteractor {
    /// Erstellt einen Interaktor mit Standard-Kette und optionalen Host-Handlern.
    pub fn new(host_handlers: Vec<Box<dyn InteractionHandler>>) -> Self {
        Self {
            state: InteractionState::new(),
            chain: HandlerChain::standard(host_handlers),
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn chain(&self) -> &HandlerChain {
        &self.chain
    }
}

impl Default for MprInteractor {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Arena verknüpfter MPR-Viewports mit gemeinsamem Fadenkreuz.
///
/// Viewports referenzieren einander nur über ihren Index.
pub struct MprViewer {
    viewports: Vec<MprViewport>,
    interactors: Vec<MprInteractor>,
    options: InteractionOptions,
    callbacks: InteractionCallbacks,
}

impl MprViewer {
    /// Erstellt den Viewer und legt das Fadenkreuz auf die gecachte Position des
    /// ersten Viewports.
    pub fn new(viewports: Vec<MprViewport>, options: InteractionOptions) -> Self {
        let interactors = viewports.iter().map(|_| MprInteractor::default()).collect();
        let mut viewer = Self {
            viewports,
            interactors,
            options: options.validated(),
            callbacks: InteractionCallbacks::default(),
        };
        viewer.initialize_crosshairs(None);
        viewer
    }

    /// Baut die Handler-Ketten aller Viewports mit Host-Handlern neu auf.
    ///
    /// `factory` erhält den Viewport-Index.
    pub fn with_host_handlers<F>(mut self, factory: F) -> Self
    where
        F: Fn(usize) -> Vec<Box<dyn InteractionHandler>>,
    {
        self.interactors = (0..self.viewports.len())
            .map(|index| MprInteractor::new(factory(index)))
            .collect();
        self
    }

    pub fn with_callbacks(mut self, callbacks: InteractionCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: InteractionCallbacks) {
        self.callbacks = callbacks;
    }

    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: InteractionOptions) {
        self.options = options.validated();
    }

    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }

    pub fn viewports(&self) -> &[MprViewport] {
        &self.viewports
    }

    pub fn viewport(&self, index: usize) -> Option<&MprViewport> {
        self.viewports.get(index)
    }

    /// Direkter Zugriff (z.B. Resize); danach ggf. `set_crosshair_world` aufrufen,
    /// damit die Overlays neu berechnet werden.
    pub fn viewport_mut(&mut self, index: usize) -> Option<&mut MprViewport> {
        self.viewports.get_mut(index)
    }

    pub fn interaction_state(&self, index: usize) -> Option<&InteractionState> {
        self.interactors.get(index).map(MprInteractor::state)
    }

    pub fn interactor(&self, index: usize) -> Option<&MprInteractor> {
        self.interactors.get(index)
    }

    /// Gemeinsame Fadenkreuz-Position (aus dem Cache des ersten Viewports).
    pub fn crosshair_world(&self) -> DVec3 {
        self.viewports
            .first()
            .map(MprViewport::crosshair_world)
            .unwrap_or(DVec3::ZERO)
    }

    /// Setzt Start- und aktuelle Fadenkreuz-Position aller Viewports.
    ///
    /// Ohne Angabe wird die gecachte Position des ersten Viewports verwendet.
    /// Die Start-Position dient der Rotation als Referenz.
    pub fn initialize_crosshairs(&mut self, world: Option<DVec3>) -> Vec<InteractionEffect> {
        let world = world.unwrap_or_else(|| self.crosshair_world());
        for viewport in self.viewports.iter_mut() {
            viewport.set_initial_crosshair_world(world);
        }

        let mut effects = Vec::new();
        crosshairs::sync_crosshairs(&mut self.viewports, world, &mut effects);
        log::debug!(
            "Fadenkreuz initialisiert bei {:?} ({} Viewports)",
            world,
            self.viewports.len()
        );
        effects
    }

    /// Verschiebt das Fadenkreuz programmatisch (ohne Callbacks).
    pub fn set_crosshair_world(&mut self, world: DVec3) -> Vec<InteractionEffect> {
        let mut effects = Vec::new();
        crosshairs::sync_crosshairs(&mut self.viewports, world, &mut effects);
        effects
    }

    /// Skalarwert und Voxel-Index am Fadenkreuz des Viewports `index`.
    pub fn crosshair_value(&self, index: usize) -> Result<Option<VoxelSample>> {
        crosshairs::crosshair_value(&self.viewports, index)
    }

    /// Verarbeitet ein Zeiger-Event des Viewports `index`.
    ///
    /// Gibt die entstandenen Effekte zurück und ruft die Host-Callbacks auf. Bei
    /// einem Fehler ist die Operation bereits auf `None` zurückgesetzt.
    pub fn handle_pointer(
        &mut self,
        index: usize,
        event: PointerEvent,
    ) -> Result<Vec<InteractionEffect>> {
        let count = self.viewports.len();
        let interactor = self
            .interactors
            .get_mut(index)
            .ok_or(InteractionError::InvalidViewport { index, count })?;

        let mut effects = Vec::new();
        let mut ctx = EventContext::new(
            &mut self.viewports,
            index,
            &self.options,
            &mut interactor.state,
            &mut effects,
        );
        interactor.chain.dispatch(&event, &mut ctx)?;

        let crosshair_world = self.crosshair_world();
        self.callbacks.dispatch(&effects, crosshair_world);
        Ok(effects)
    }
}

impl std::fmt::Debug for MprViewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MprViewer")
            .field("viewports", &self.viewports.len())
            .field("options", &self.options)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
