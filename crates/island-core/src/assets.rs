//! Load state for the scene's external resources.
//!
//! The web loader fetches every manifest entry and reports back here. A
//! failed asset does not stop the scene; whatever depended on it renders a
//! fallback instead.

use crate::error::{AssetError, IslandError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    IslandModel,
    SharkModel,
    WaterNormals,
    DayEnvironment,
    NightEnvironment,
}

impl AssetKind {
    pub const ALL: [AssetKind; 5] = [
        AssetKind::IslandModel,
        AssetKind::SharkModel,
        AssetKind::WaterNormals,
        AssetKind::DayEnvironment,
        AssetKind::NightEnvironment,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AssetKind::IslandModel => "island.glb",
            AssetKind::SharkModel => "shark-transformed.glb",
            AssetKind::WaterNormals => "waternormals.jpg",
            AssetKind::DayEnvironment => "venice_sunset_1k.hdr",
            AssetKind::NightEnvironment => "night_sky.jpg",
        }
    }

    pub fn from_path(path: &str) -> Option<AssetKind> {
        AssetKind::ALL.into_iter().find(|k| k.path() == path)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssetState {
    Pending,
    Ready { bytes: usize },
    Failed(AssetError),
}

#[derive(Clone, Debug, PartialEq)]
struct AssetSlot {
    kind: AssetKind,
    state: AssetState,
}

#[derive(Clone, Debug)]
pub struct AssetRegistry {
    slots: Vec<AssetSlot>,
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self {
            slots: AssetKind::ALL
                .into_iter()
                .map(|kind| AssetSlot {
                    kind,
                    state: AssetState::Pending,
                })
                .collect(),
        }
    }

    fn slot_mut(&mut self, path: &str) -> Result<&mut AssetSlot> {
        let kind = AssetKind::from_path(path).ok_or_else(|| AssetError::Unknown(path.to_owned()))?;
        self.slots
            .iter_mut()
            .find(|s| s.kind == kind)
            .ok_or_else(|| IslandError::from(AssetError::Unknown(path.to_owned())))
    }

    pub fn mark_ready(&mut self, path: &str, bytes: usize) -> Result<()> {
        let slot = self.slot_mut(path)?;
        slot.state = AssetState::Ready { bytes };
        log::info!("[assets] {path} ready ({bytes} bytes)");
        Ok(())
    }

    pub fn mark_failed(&mut self, path: &str, err: AssetError) -> Result<()> {
        let slot = self.slot_mut(path)?;
        log::warn!("[assets] {err}; using fallback");
        slot.state = AssetState::Failed(err);
        Ok(())
    }

    pub fn state(&self, kind: AssetKind) -> Option<&AssetState> {
        self.slots.iter().find(|s| s.kind == kind).map(|s| &s.state)
    }

    pub fn is_ready(&self, kind: AssetKind) -> bool {
        matches!(self.state(kind), Some(AssetState::Ready { .. }))
    }

    pub fn is_failed(&self, kind: AssetKind) -> bool {
        matches!(self.state(kind), Some(AssetState::Failed(_)))
    }

    /// Every slot has resolved, successfully or not.
    pub fn all_settled(&self) -> bool {
        self.slots.iter().all(|s| !matches!(s.state, AssetState::Pending))
    }

    /// Fraction of resolved slots, for the loading screen.
    pub fn progress(&self) -> f32 {
        if self.slots.is_empty() {
            return 1.0;
        }
        let done = self.slots.iter().filter(|s| !matches!(s.state, AssetState::Pending)).count();
        done as f32 / self.slots.len() as f32
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssetError> {
        self.slots.iter().filter_map(|s| match &s.state {
            AssetState::Failed(e) => Some(e),
            _ => None,
        })
    }
}
