use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for deriving item ids from catalog identifiers.
const ITEM_NAMESPACE: Uuid = Uuid::from_u128(0x8f3c_2a6e_51d4_4b7a_9e0f_3d6c_b1a2_7e45);

/// Kind of media a catalog entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Parse the catalog's `media_type` discriminator. Unknown values
    /// (e.g. `person`) are not browsable media and yield `None`.
    pub fn from_catalog(value: &str) -> Option<Self> {
        match value {
            "movie" => Some(MediaKind::Movie),
            "tv" => Some(MediaKind::Tv),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identity of a catalog item.
///
/// Derived deterministically from the media kind and numeric catalog id, so
/// the same entry keeps its id across refetches and reorderings. Movies and
/// series share the catalog's numeric id space, which is why the kind is part
/// of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn from_catalog(kind: MediaKind, catalog_id: u64) -> Self {
        let name = format!("{kind}:{catalog_id}");
        ItemId(Uuid::new_v5(&ITEM_NAMESPACE, name.as_bytes()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ItemId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
