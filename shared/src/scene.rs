//! Frame-loop-owned view of the shared objects.
//!
//! This is the engine-facing half of the protocol: visibility, transforms and playback tracks
//! for every catalog object. Only the frame loop holds a `&mut SceneRegistry`; async completions
//! and store notifications reach it through [`SyncSession`](crate::SyncSession), never directly.

use std::collections::BTreeMap;

use crate::{
    catalog::{ObjectCatalog, ObjectSpec},
    placement::ObjectId,
    pose::WorldTransform,
};

/// Local playback clock of an animated object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackTrack {
    time: f32,
}

impl PlaybackTrack {
    pub fn current_time(&self) -> f32 {
        self.time
    }

    /// Hard seek. No blending with the previous time.
    pub fn seek(&mut self, time: f32) {
        self.time = time;
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub spec: ObjectSpec,
    pub load: LoadState,
    pub visible: bool,
    pub transform: WorldTransform,
    pub track: Option<PlaybackTrack>,
}

impl SceneObject {
    fn new(spec: ObjectSpec) -> Self {
        Self {
            spec,
            load: LoadState::Loading,
            visible: false,
            transform: WorldTransform::default(),
            track: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    objects: BTreeMap<ObjectId, SceneObject>,
}

impl SceneRegistry {
    /// Every catalog object starts hidden, loading and without a track.
    pub fn from_catalog(catalog: &ObjectCatalog) -> Self {
        Self {
            objects: catalog
                .iter()
                .map(|spec| (spec.id.clone(), SceneObject::new(spec.clone())))
                .collect(),
        }
    }

    pub fn get(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &SceneObject)> {
        self.objects.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ObjectId> {
        self.objects.keys()
    }

    /// Marks the asset as loaded. Animated objects get a playback track starting at zero.
    pub fn mark_loaded(&mut self, id: &ObjectId) -> bool {
        let Some(object) = self.objects.get_mut(id) else {
            log::warn!("asset loaded for unknown object {id}");
            return false;
        };
        object.load = LoadState::Ready;
        if object.spec.animated && object.track.is_none() {
            object.track = Some(PlaybackTrack::default());
        }
        true
    }

    pub fn mark_failed(&mut self, id: &ObjectId, reason: impl Into<String>) {
        if let Some(object) = self.objects.get_mut(id) {
            object.load = LoadState::Failed(reason.into());
        }
    }

    pub fn set_visible(&mut self, id: &ObjectId, visible: bool) {
        if let Some(object) = self.objects.get_mut(id) {
            object.visible = visible;
        }
    }

    pub fn set_transform(&mut self, id: &ObjectId, transform: WorldTransform) {
        if let Some(object) = self.objects.get_mut(id) {
            object.transform = transform;
        }
    }

    /// Seeks the object's track. Returns `false` when the object has no track yet.
    pub fn seek(&mut self, id: &ObjectId, time: f32) -> bool {
        match self.objects.get_mut(id).and_then(|o| o.track.as_mut()) {
            Some(track) => {
                track.seek(time);
                true
            }
            None => false,
        }
    }

    pub fn track_time(&self, id: &ObjectId) -> Option<f32> {
        self.objects
            .get(id)
            .and_then(|o| o.track.as_ref())
            .map(PlaybackTrack::current_time)
    }

    /// Objects with an active playback track and their current time.
    pub fn active_tracks(&self) -> impl Iterator<Item = (&ObjectId, f32)> {
        self.objects
            .iter()
            .filter_map(|(id, o)| o.track.as_ref().map(|t| (id, t.current_time())))
    }

    /// Advances every local track by one frame.
    pub fn advance(&mut self, dt: f32) {
        for track in self.objects.values_mut().filter_map(|o| o.track.as_mut()) {
            track.advance(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetFormat;

    fn registry() -> SceneRegistry {
        SceneRegistry::from_catalog(&ObjectCatalog::new([
            ObjectSpec::new("escultura", "exemplo.glb", AssetFormat::Gltf).animated(),
            ObjectSpec::new("quadro", "quadro.glb", AssetFormat::Gltf),
        ]))
    }

    #[test]
    fn catalog_objects_start_hidden_and_loading() {
        let scene = registry();
        for (_, object) in scene.iter() {
            assert!(!object.visible);
            assert_eq!(object.load, LoadState::Loading);
            assert!(object.track.is_none());
        }
    }

    #[test]
    fn only_animated_objects_get_tracks() {
        let mut scene = registry();
        assert!(scene.mark_loaded(&"escultura".into()));
        assert!(scene.mark_loaded(&"quadro".into()));
        assert!(!scene.mark_loaded(&"lustre".into()));

        assert_eq!(scene.track_time(&"escultura".into()), Some(0.0));
        assert_eq!(scene.track_time(&"quadro".into()), None);
        assert_eq!(scene.active_tracks().count(), 1);
    }

    #[test]
    fn seek_is_exact_and_advance_continues_from_it() {
        let mut scene = registry();
        scene.mark_loaded(&"escultura".into());
        scene.advance(0.5);

        assert!(scene.seek(&"escultura".into(), 2.5));
        assert_eq!(scene.track_time(&"escultura".into()), Some(2.5));

        scene.advance(0.25);
        assert_eq!(scene.track_time(&"escultura".into()), Some(2.75));
    }

    #[test]
    fn seek_without_track_is_rejected() {
        let mut scene = registry();
        assert!(!scene.seek(&"escultura".into(), 1.0));
        assert!(!scene.seek(&"quadro".into(), 1.0));
    }
}
