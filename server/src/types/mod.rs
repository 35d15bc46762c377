mod db_placement;
mod db_quat;
mod db_vec3;

pub use db_placement::DbPlacement;
pub use db_quat::DbQuat;
pub use db_vec3::DbVec3;
