use spacetimedb::*;

/// Identities allowed to publish placements and animation samples.
///
/// Private: clients learn their role from the reducers' results, not by reading this table.
#[table(name = admin)]
pub struct Admin {
    #[primary_key]
    pub identity: Identity,

    /// Who granted the capability. The database owner grants itself at `init`.
    pub granted_by: Identity,
    pub granted_at: Timestamp,
}
