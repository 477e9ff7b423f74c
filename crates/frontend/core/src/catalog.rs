//! Image asset catalog used to resolve trait references to URLs.
use std::collections::BTreeMap;

/// Resolves an image name referenced by a trait to a displayable URL.
///
/// The returned URL may borrow from either the catalog or the name.
pub trait AssetCatalog {
    fn image_url<'a>(&'a self, name: &'a str) -> Option<&'a str>;
}

/// Treats every reference as a URL already.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectUrls;

impl AssetCatalog for DirectUrls {
    fn image_url<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        Some(name)
    }
}

/// An uploaded image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub id: u64,
    pub name: String,
    pub url: String,
}

impl ImageAsset {
    pub fn new(id: u64, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("image #{0} is not in the catalog")]
    UnknownImage(u64),

    #[error("an image named '{0}' already exists")]
    NameTaken(String),
}

/// Uploaded images indexed by id and by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageCatalog {
    by_id: BTreeMap<u64, ImageAsset>,
    by_name: BTreeMap<String, u64>,
}

impl ImageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_assets(assets: impl IntoIterator<Item = ImageAsset>) -> Self {
        let mut catalog = Self::new();
        for asset in assets {
            catalog.insert(asset);
        }
        catalog
    }

    /// Adds or replaces an image. A previous image with the same id loses its
    /// name mapping.
    pub fn insert(&mut self, asset: ImageAsset) {
        if let Some(previous) = self.by_id.remove(&asset.id) {
            self.by_name.remove(&previous.name);
        }
        self.by_name.insert(asset.name.clone(), asset.id);
        self.by_id.insert(asset.id, asset);
    }

    /// Renames an image and returns its previous name.
    pub fn rename(&mut self, id: u64, name: &str) -> Result<String, CatalogError> {
        if self.by_name.get(name).is_some_and(|owner| *owner != id) {
            return Err(CatalogError::NameTaken(name.to_owned()));
        }

        let asset = self
            .by_id
            .get_mut(&id)
            .ok_or(CatalogError::UnknownImage(id))?;
        let previous = std::mem::replace(&mut asset.name, name.to_owned());

        self.by_name.remove(&previous);
        self.by_name.insert(name.to_owned(), id);
        Ok(previous)
    }

    pub fn remove(&mut self, id: u64) -> Option<ImageAsset> {
        let asset = self.by_id.remove(&id)?;
        self.by_name.remove(&asset.name);
        Some(asset)
    }

    pub fn get(&self, id: u64) -> Option<&ImageAsset> {
        self.by_id.get(&id)
    }

    pub fn by_name(&self, name: &str) -> Option<&ImageAsset> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl AssetCatalog for ImageCatalog {
    fn image_url<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        self.by_name(name).map(|asset| asset.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ImageCatalog {
        ImageCatalog::from_assets([
            ImageAsset::new(1, "forest", "https://cdn.example/forest.jpg"),
            ImageAsset::new(2, "lake", "https://cdn.example/lake.jpg"),
        ])
    }

    #[test]
    fn resolves_names_to_urls() {
        let catalog = catalog();
        assert_eq!(
            catalog.image_url("forest"),
            Some("https://cdn.example/forest.jpg")
        );
        assert_eq!(catalog.image_url("desert"), None);
    }

    #[test]
    fn rename_moves_the_name_index() {
        let mut catalog = catalog();
        assert_eq!(catalog.rename(1, "woods").unwrap(), "forest");
        assert_eq!(catalog.image_url("forest"), None);
        assert_eq!(
            catalog.image_url("woods"),
            Some("https://cdn.example/forest.jpg")
        );
    }

    #[test]
    fn rename_onto_another_image_is_refused() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.rename(1, "lake"),
            Err(CatalogError::NameTaken("lake".to_owned()))
        );
        assert_eq!(catalog.rename(9, "x"), Err(CatalogError::UnknownImage(9)));
    }

    #[test]
    fn remove_drops_both_indexes() {
        let mut catalog = catalog();
        assert!(catalog.remove(2).is_some());
        assert_eq!(catalog.image_url("lake"), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn direct_urls_pass_references_through() {
        assert_eq!(DirectUrls.image_url("a.png"), Some("a.png"));
    }
}
