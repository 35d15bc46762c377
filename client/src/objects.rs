//! Catalog objects as Bevy entities.
//!
//! Entities mirror the session's scene registry every frame: visibility, transform and the
//! playback time of animated objects. Nothing here decides placement.

use anchor_sync::{AssetFormat, ObjectId, SyncSession, WorldTransform};
use bevy::{asset::LoadState, gltf::Gltf, prelude::*};

use crate::sync::SessionUpdate;

#[derive(Component, Debug)]
pub struct SharedObject(pub ObjectId);

/// Scene asset still loading for this object.
#[derive(Component)]
struct LoadingScene(Handle<Scene>);

/// glTF document whose clips become the object's animation graph once it loads.
#[derive(Component)]
struct PendingClips(Handle<Gltf>);

/// Animation graph playing every clip of the object's asset together.
#[derive(Component)]
struct ObjectAnimation {
    graph: Handle<AnimationGraph>,
    nodes: Vec<AnimationNodeIndex>,
}

/// The scene's animation player, once the scene has spawned.
#[derive(Component)]
struct BoundPlayer(Entity);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_objects);
    app.add_systems(
        Update,
        (track_loading, build_animation_graphs, bind_animation_players)
            .chain()
            .before(SessionUpdate),
    );
    app.add_systems(Update, (mirror_scene, mirror_playback).after(SessionUpdate));
}

fn spawn_objects(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut session: NonSendMut<SyncSession>,
) {
    let specs: Vec<_> = session
        .scene()
        .iter()
        .map(|(_, object)| object.spec.clone())
        .collect();

    for spec in specs {
        let mut entity = commands.spawn((
            Name::new(spec.id.to_string()),
            SharedObject(spec.id.clone()),
            Transform::default(),
            Visibility::Hidden,
        ));

        match spec.source.format {
            AssetFormat::Gltf => {
                let scene = asset_server
                    .load(GltfAssetLabel::Scene(0).from_asset(spec.source.uri.clone()));
                entity.insert((SceneRoot(scene.clone()), LoadingScene(scene)));

                if spec.animated {
                    entity.insert(PendingClips(asset_server.load(spec.source.uri.clone())));
                }
            }
            AssetFormat::Usdz => {
                session.asset_failed(&spec.id, "USDZ assets are not supported by this viewer");
            }
        }
    }
}

fn track_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    loading: Query<(Entity, &SharedObject, &LoadingScene)>,
    mut session: NonSendMut<SyncSession>,
) {
    for (entity, object, scene) in &loading {
        match asset_server.load_state(scene.0.id()) {
            LoadState::Loaded if asset_server.is_loaded_with_dependencies(scene.0.id()) => {
                debug!("Asset for {} loaded", object.0);
                session.asset_loaded(&object.0);
                commands.entity(entity).remove::<LoadingScene>();
            }
            LoadState::Failed(err) => {
                session.asset_failed(&object.0, err.to_string());
                commands.entity(entity).remove::<LoadingScene>();
            }
            _ => {}
        }
    }
}

/// One graph node per clip, or `None` for an asset without animations.
fn clip_graph(clips: &[Handle<AnimationClip>]) -> Option<(AnimationGraph, Vec<AnimationNodeIndex>)> {
    if clips.is_empty() {
        return None;
    }
    Some(AnimationGraph::from_clips(clips.iter().cloned()))
}

fn build_animation_graphs(
    mut commands: Commands,
    pending: Query<(Entity, &SharedObject, &PendingClips)>,
    gltfs: Res<Assets<Gltf>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
) {
    for (entity, object, clips) in &pending {
        let Some(gltf) = gltfs.get(&clips.0) else {
            continue;
        };
        let mut entity = commands.entity(entity);
        entity.remove::<PendingClips>();
        match clip_graph(&gltf.animations) {
            Some((graph, nodes)) => {
                debug!("{} plays {} clips", object.0, nodes.len());
                entity.insert(ObjectAnimation {
                    graph: graphs.add(graph),
                    nodes,
                });
            }
            None => warn!("{} is marked animated but its asset has no clips", object.0),
        }
    }
}

fn bind_animation_players(
    mut commands: Commands,
    unbound: Query<(Entity, &ObjectAnimation), (Without<BoundPlayer>, Without<LoadingScene>)>,
    children: Query<&Children>,
    mut players: Query<&mut AnimationPlayer>,
) {
    for (entity, animation) in &unbound {
        let Some(player_entity) = children
            .iter_descendants(entity)
            .find(|e| players.contains(*e))
        else {
            continue;
        };
        let Ok(mut player) = players.get_mut(player_entity) else {
            continue;
        };
        // Time comes from the session's playback track, so the player never advances on its own.
        for node in &animation.nodes {
            player.play(*node).repeat().pause();
        }
        commands
            .entity(player_entity)
            .insert(AnimationGraphHandle(animation.graph.clone()));
        commands.entity(entity).insert(BoundPlayer(player_entity));
    }
}

fn to_bevy_transform(world: &WorldTransform) -> Transform {
    let q = world.rotation.into_inner();
    Transform {
        translation: Vec3::new(world.translation.x, world.translation.y, world.translation.z),
        rotation: Quat::from_xyzw(q.i, q.j, q.k, q.w),
        scale: Vec3::new(world.scale.x, world.scale.y, world.scale.z),
    }
}

fn mirror_scene(
    mut objects: Query<(&SharedObject, &mut Transform, &mut Visibility)>,
    session: NonSend<SyncSession>,
) {
    for (object, mut transform, mut visibility) in &mut objects {
        let Some(state) = session.scene().get(&object.0) else {
            continue;
        };
        let target = if state.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(target);
        transform.set_if_neq(to_bevy_transform(&state.transform));
    }
}

fn mirror_playback(
    bound: Query<(&SharedObject, &ObjectAnimation, &BoundPlayer)>,
    mut players: Query<&mut AnimationPlayer>,
    session: NonSend<SyncSession>,
) {
    for (object, animation, bound) in &bound {
        let Some(time) = session.scene().track_time(&object.0) else {
            continue;
        };
        let Ok(mut player) = players.get_mut(bound.0) else {
            continue;
        };
        for node in &animation.nodes {
            if let Some(active) = player.animation_mut(*node) {
                active.seek_to(time);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{UnitQuaternion, Vector3};

    #[test]
    fn every_clip_gets_its_own_node() {
        let clips = vec![Handle::<AnimationClip>::default(); 3];
        let (graph, nodes) = clip_graph(&clips).expect("clips present");

        assert_eq!(nodes.len(), 3);
        assert!(nodes.windows(2).all(|pair| pair[0] != pair[1]));
        assert!(nodes.iter().all(|node| graph.get(*node).is_some()));
        assert!(clip_graph(&[]).is_none());
    }

    #[test]
    fn world_transform_maps_component_wise() {
        let rotation = UnitQuaternion::from_euler_angles(0.0, 1.2, 0.0);
        let transform = to_bevy_transform(&WorldTransform {
            translation: Vector3::new(1.0, 2.0, -3.0),
            rotation,
            scale: Vector3::new(0.5, 0.5, 2.0),
        });

        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, -3.0));
        assert_eq!(transform.scale, Vec3::new(0.5, 0.5, 2.0));
        let expected = Quat::from_rotation_y(1.2);
        assert!(transform.rotation.dot(expected).abs() > 1.0 - 1.0e-5);
    }
}
