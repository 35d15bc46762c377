mod reducers {
    pub(crate) mod admin;
    mod connection;
    pub mod publish_animation_sample;
    pub mod publish_placement;
}
pub mod schema;
pub mod types;

use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    reducers::admin::seed_owner(ctx);
}
