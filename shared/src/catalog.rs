//! The fixed set of shared objects every participant knows ahead of time.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::placement::ObjectId;

/// Supported asset encodings. Chosen from declared metadata, never from the URI suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    /// glTF 2.0, JSON or binary container.
    Gltf,
    /// Universal Scene Description zip package.
    Usdz,
}

impl FromStr for AssetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gltf" | "glb" | "model/gltf+json" | "model/gltf-binary" => Ok(Self::Gltf),
            "usdz" | "model/vnd.usdz+zip" => Ok(Self::Usdz),
            other => Err(format!("unsupported asset format `{other}`")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSource {
    pub uri: String,
    pub format: AssetFormat,
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub id: ObjectId,
    pub source: AssetSource,
    /// Whether the asset carries a playback track that should be replicated.
    pub animated: bool,
}

impl ObjectSpec {
    pub fn new(id: impl Into<ObjectId>, uri: impl Into<String>, format: AssetFormat) -> Self {
        Self {
            id: id.into(),
            source: AssetSource {
                uri: uri.into(),
                format,
            },
            animated: false,
        }
    }

    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectCatalog {
    objects: Vec<ObjectSpec>,
}

impl ObjectCatalog {
    /// Builds a catalog, keeping the first entry for any repeated id.
    pub fn new(objects: impl IntoIterator<Item = ObjectSpec>) -> Self {
        let mut catalog = Self::default();
        for spec in objects {
            if catalog.get(&spec.id).is_some() {
                log::warn!("duplicate catalog entry for {}, keeping the first", spec.id);
                continue;
            }
            catalog.objects.push(spec);
        }
        catalog
    }

    pub fn get(&self, id: &ObjectId) -> Option<&ObjectSpec> {
        self.objects.iter().find(|spec| &spec.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ObjectId> {
        self.objects.iter().map(|spec| &spec.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectSpec> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_comes_from_declared_metadata() {
        assert_eq!("glb".parse::<AssetFormat>(), Ok(AssetFormat::Gltf));
        assert_eq!("model/vnd.usdz+zip".parse::<AssetFormat>(), Ok(AssetFormat::Usdz));
        assert!("obj".parse::<AssetFormat>().is_err());

        // A `.usdz` suffix on the URI does not override the declared format.
        let spec = ObjectSpec::new("quadro", "https://example.com/quadro.usdz", AssetFormat::Gltf);
        assert_eq!(spec.source.format, AssetFormat::Gltf);
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let catalog = ObjectCatalog::new([
            ObjectSpec::new("escultura", "a.glb", AssetFormat::Gltf).animated(),
            ObjectSpec::new("escultura", "b.glb", AssetFormat::Gltf),
        ]);

        assert_eq!(catalog.len(), 1);
        let spec = catalog.get(&ObjectId::from("escultura")).expect("present");
        assert_eq!(spec.source.uri, "a.glb");
        assert!(spec.animated);
    }
}
