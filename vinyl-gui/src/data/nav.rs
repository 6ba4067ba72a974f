use druid::Data;
use serde::{Deserialize, Serialize};

use crate::data::AlbumLink;

#[derive(Clone, Debug, Data, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Nav {
    Home,
    AlbumDetail(AlbumLink),
}

impl Nav {
    pub fn title(&self) -> String {
        match self {
            Nav::Home => "Home".to_string(),
            Nav::AlbumDetail(link) => link.title.to_string(),
        }
    }

    pub fn full_title(&self) -> String {
        match self {
            Nav::Home => "Home".to_string(),
            Nav::AlbumDetail(link) => format!("Album “{}”", link.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_name_the_album() {
        let nav = Nav::AlbumDetail(AlbumLink {
            id: "a1".into(),
            title: "Blue Train".into(),
        });
        assert_eq!(nav.title(), "Blue Train");
        assert_eq!(nav.full_title(), "Album “Blue Train”");
        assert_eq!(Nav::Home.title(), "Home");
    }
}
