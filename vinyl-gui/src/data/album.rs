use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use serde::{Deserialize, Serialize};

/// One album as served by the API.  Immutable once decoded.
#[derive(Clone, Debug, Data, Lens, Eq, PartialEq, Deserialize, Serialize)]
pub struct Album {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub artist: Arc<str>,
    pub cover_url: Arc<str>,
    #[serde(default)]
    pub description: Option<Arc<str>>,
}

impl Album {
    pub fn link(&self) -> AlbumLink {
        AlbumLink {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }

    pub fn about(&self) -> Arc<str> {
        self.description
            .clone()
            .unwrap_or_else(|| "No description available.".into())
    }
}

/// Reference to an album, used as navigation payload and as the deferral
/// token of the detail fetch.
#[derive(Clone, Debug, Data, Lens, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct AlbumLink {
    pub id: Arc<str>,
    pub title: Arc<str>,
}

/// The API has no track listing, the detail screen shows a fixed number of
/// placeholder rows derived from the album itself.
pub const TRACK_SLOT_COUNT: usize = 10;

#[derive(Clone, Debug, Data, Lens)]
pub struct TrackSlot {
    pub number: usize,
    pub album: Arc<Album>,
}

pub fn track_slots(album: &Arc<Album>) -> Vector<TrackSlot> {
    (1..=TRACK_SLOT_COUNT)
        .map(|number| TrackSlot {
            number,
            album: album.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALBUM_JSON: &str = r#"{
        "id": "a1",
        "title": "Blue Train",
        "artist": "John Coltrane",
        "cover_url": "https://example.com/covers/a1.jpg",
        "description": "Hard bop landmark."
    }"#;

    #[test]
    fn decode_then_encode_preserves_all_fields() {
        let album: Album = serde_json::from_str(ALBUM_JSON).unwrap();
        let encoded = serde_json::to_value(&album).unwrap();
        let original: serde_json::Value = serde_json::from_str(ALBUM_JSON).unwrap();
        assert_eq!(encoded, original);
    }

    #[test]
    fn null_and_missing_description_decode_to_none() {
        let with_null: Album = serde_json::from_str(
            r#"{"id":"a2","title":"T","artist":"A","cover_url":"u","description":null}"#,
        )
        .unwrap();
        assert_eq!(with_null.description, None);

        let without: Album =
            serde_json::from_str(r#"{"id":"a2","title":"T","artist":"A","cover_url":"u"}"#)
                .unwrap();
        assert_eq!(without.description, None);
    }

    #[test]
    fn list_decoding_preserves_order() {
        let albums: Vector<Arc<Album>> = serde_json::from_str(
            r#"[
                {"id":"a1","title":"One","artist":"X","cover_url":"u1","description":null},
                {"id":"a2","title":"Two","artist":"Y","cover_url":"u2","description":null}
            ]"#,
        )
        .unwrap();
        let ids: Vec<&str> = albums.iter().map(|a| &*a.id).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[test]
    fn about_falls_back_when_description_is_missing() {
        let mut album: Album = serde_json::from_str(ALBUM_JSON).unwrap();
        assert_eq!(&*album.about(), "Hard bop landmark.");
        album.description = None;
        assert_eq!(&*album.about(), "No description available.");
    }

    #[test]
    fn track_slots_are_numbered_from_one() {
        let album: Arc<Album> = Arc::new(serde_json::from_str(ALBUM_JSON).unwrap());
        let slots = track_slots(&album);
        assert_eq!(slots.len(), TRACK_SLOT_COUNT);
        assert_eq!(slots.front().unwrap().number, 1);
        assert_eq!(slots.back().unwrap().number, TRACK_SLOT_COUNT);
        assert!(slots.iter().all(|slot| slot.album.id == album.id));
    }
}
