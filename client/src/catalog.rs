use anchor_sync::{AssetFormat, ObjectCatalog, ObjectSpec};

/// Objects the gallery knows how to show. Paths are relative to the `assets/` folder.
pub fn gallery_catalog() -> ObjectCatalog {
    ObjectCatalog::new([
        ObjectSpec::new("escultura", "models/exemplo.glb", AssetFormat::Gltf).animated(),
        ObjectSpec::new("quadro", "models/quadro.glb", AssetFormat::Gltf),
    ])
}
