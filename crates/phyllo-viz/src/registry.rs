//! Keyed, insertion-ordered collection of the scene's drawables.

use anyhow::{bail, Result};
use phyllo_engine::scene::Drawable;

use crate::config::Side;

/// Names the four shapes of the scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKey {
    Sphere,
    Disk,
    GoldenDisk,
    Sunflower,
}

/// Page sections a shape can follow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SectionId {
    Intro,
    Disk,
    GoldenAngle,
    Sunflower,
}

impl SectionId {
    pub const ALL: [SectionId; 4] =
        [SectionId::Intro, SectionId::Disk, SectionId::GoldenAngle, SectionId::Sunflower];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Intro => "intro",
            SectionId::Disk => "disk",
            SectionId::GoldenAngle => "golden-angle",
            SectionId::Sunflower => "sunflower",
        }
    }
}

/// One drawable and the section it tracks.
#[derive(Debug, Clone)]
pub struct SceneItem {
    pub drawable: Drawable,
    section: SectionId,
    side: Side,
}

impl SceneItem {
    #[inline]
    pub fn section(&self) -> SectionId {
        self.section
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
}

/// Append-only registry. Iteration follows registration order.
#[derive(Debug, Default)]
pub struct Registry {
    items: Vec<(ShapeKey, SceneItem)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `drawable` under `key`. A key can be registered once.
    pub fn register(
        &mut self,
        key: ShapeKey,
        section: SectionId,
        side: Side,
        drawable: Drawable,
    ) -> Result<()> {
        if self.items.iter().any(|(k, _)| *k == key) {
            bail!("shape {key:?} is already registered");
        }
        log::debug!(
            "registered {key:?}: {} points tracking #{}",
            drawable.geometry.point_count(),
            section.as_str()
        );
        self.items.push((key, SceneItem { drawable, section, side }));
        Ok(())
    }

    pub fn get(&self, key: ShapeKey) -> Option<&SceneItem> {
        self.items.iter().find(|(k, _)| *k == key).map(|(_, item)| item)
    }

    pub fn get_mut(&mut self, key: ShapeKey) -> Option<&mut SceneItem> {
        self.items.iter_mut().find(|(k, _)| *k == key).map(|(_, item)| item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeKey, &SceneItem)> {
        self.items.iter().map(|(k, item)| (*k, item))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ShapeKey, &mut SceneItem)> {
        self.items.iter_mut().map(|(k, item)| (*k, item))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
