use crate::domain::model::ClothingItem;

/// Read-only, ordered view over the wardrobe.
pub trait CatalogSource: Send + Sync {
    fn items(&self) -> &[ClothingItem];
}

impl CatalogSource for Vec<ClothingItem> {
    fn items(&self) -> &[ClothingItem] {
        self
    }
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn items(&self) -> &[ClothingItem] {
        (**self).items()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn default_user_id(&self) -> &str;
    fn allow_origin(&self) -> &str;
    fn catalog_path(&self) -> Option<&str>;
}
