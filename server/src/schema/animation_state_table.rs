use spacetimedb::*;

/// Latest playback time per animated object (`animationState/<objectId>`).
///
/// Each object is an independent row so admins overwrite samples without touching other objects.
#[table(name = animation_state, public)]
pub struct AnimationState {
    #[primary_key]
    pub object_id: String,

    /// Seconds since the start of the object's animation clip.
    pub time: f32,

    pub updated_at: Timestamp,
}
