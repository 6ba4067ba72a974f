mod album;
mod config;
mod nav;
mod promise;

use std::{mem, sync::Arc};

use druid::{im::Vector, Data, Lens};

pub use crate::data::{
    album::{track_slots, Album, AlbumLink, TrackSlot, TRACK_SLOT_COUNT},
    config::{Config, Theme},
    nav::Nav,
    promise::{Promise, PromiseState},
};

/// How many albums the "Recently Played" section shows.
pub const RECENTLY_PLAYED_COUNT: usize = 4;

#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub route: Nav,
    pub history: Vector<Nav>,
    pub config: Config,
    pub home: HomeState,
    pub album_detail: AlbumDetail,
}

#[derive(Clone, Data, Lens)]
pub struct HomeState {
    pub albums: Promise<Vector<Arc<Album>>, ()>,
}

#[derive(Clone, Data, Lens)]
pub struct AlbumDetail {
    pub album: Promise<Arc<Album>, AlbumLink>,
}

impl AppState {
    pub fn default_with_config(config: Config) -> Self {
        Self {
            route: Nav::Home,
            history: Vector::new(),
            config,
            home: HomeState {
                albums: Promise::Empty,
            },
            album_detail: AlbumDetail {
                album: Promise::Empty,
            },
        }
    }

    pub fn navigate(&mut self, nav: &Nav) {
        if &self.route != nav {
            let previous = mem::replace(&mut self.route, nav.to_owned());
            self.history.push_back(previous);
            self.config.last_route.replace(nav.to_owned());
        }
    }

    pub fn navigate_back(&mut self) {
        if let Some(previous) = self.history.pop_back() {
            self.route = previous;
            self.config.last_route.replace(self.route.to_owned());
        }
    }

    /// The album the mini player summarizes: the fetched album on the
    /// detail screen, the first listed album at home.  `None` while the
    /// relevant fetch has not succeeded.
    pub fn playing_album(&self) -> Option<Arc<Album>> {
        match &self.route {
            Nav::Home => self
                .home
                .albums
                .resolved()
                .and_then(|albums| albums.front().cloned()),
            Nav::AlbumDetail(_) => self.album_detail.album.resolved().cloned(),
        }
    }
}

pub fn recently_played(albums: &Vector<Arc<Album>>) -> Vector<Arc<Album>> {
    albums.iter().take(RECENTLY_PLAYED_COUNT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(id: &str) -> Arc<Album> {
        Arc::new(Album {
            id: id.into(),
            title: format!("Album {}", id).into(),
            artist: "Artist".into(),
            cover_url: format!("https://example.com/{}.jpg", id).into(),
            description: None,
        })
    }

    fn link(id: &str) -> AlbumLink {
        AlbumLink {
            id: id.into(),
            title: format!("Album {}", id).into(),
        }
    }

    fn state() -> AppState {
        AppState::default_with_config(Config::default())
    }

    #[test]
    fn navigation_pushes_and_pops_history() {
        let mut state = state();
        state.navigate(&Nav::AlbumDetail(link("a1")));
        assert_eq!(state.route, Nav::AlbumDetail(link("a1")));
        assert_eq!(state.history.len(), 1);

        state.navigate_back();
        assert_eq!(state.route, Nav::Home);
        assert!(state.history.is_empty());
    }

    #[test]
    fn back_at_home_is_a_no_op() {
        let mut state = state();
        state.navigate_back();
        assert_eq!(state.route, Nav::Home);
    }

    #[test]
    fn navigating_to_the_current_route_does_not_stack() {
        let mut state = state();
        state.navigate(&Nav::Home);
        assert!(state.history.is_empty());
    }

    #[test]
    fn each_detail_visit_starts_loading_fresh() {
        let mut state = state();

        state.navigate(&Nav::AlbumDetail(link("a1")));
        state.album_detail.album.defer(link("a1"));
        state
            .album_detail
            .album
            .update((link("a1"), Ok(album("a1"))));
        assert!(state.album_detail.album.is_resolved());

        state.navigate_back();
        state.navigate(&Nav::AlbumDetail(link("a2")));
        state.album_detail.album.defer(link("a2"));

        // No stale "a1" data is visible while "a2" loads.
        assert!(state.album_detail.album.is_deferred(&link("a2")));
        assert_eq!(state.playing_album(), None);
    }

    #[test]
    fn overlapping_detail_fetches_last_requested_wins() {
        let mut state = state();
        state.album_detail.album.defer(link("a1"));
        state.album_detail.album.defer(link("a2"));

        // "a1" resolves after "a2" was requested and is discarded.
        state
            .album_detail
            .album
            .update((link("a1"), Ok(album("a1"))));
        assert!(state.album_detail.album.is_deferred(&link("a2")));

        state
            .album_detail
            .album
            .update((link("a2"), Ok(album("a2"))));
        assert_eq!(
            state.album_detail.album.resolved().map(|a| &*a.id),
            Some("a2")
        );
    }

    #[test]
    fn recently_played_is_the_first_four_in_order() {
        let albums: Vector<_> = ["a1", "a2", "a3", "a4", "a5"].iter().map(|id| album(id)).collect();
        let recent = recently_played(&albums);
        let ids: Vec<&str> = recent.iter().map(|a| &*a.id).collect();
        assert_eq!(ids, vec!["a1", "a2", "a3", "a4"]);

        let few: Vector<_> = albums.iter().take(2).cloned().collect();
        assert_eq!(recently_played(&few).len(), 2);
    }

    #[test]
    fn mini_player_projects_the_relevant_album() {
        let mut state = state();
        assert_eq!(state.playing_album(), None);

        let albums: Vector<_> = vec![album("a1"), album("a2")].into_iter().collect();
        state.home.albums.defer(());
        state.home.albums.update(((), Ok(albums)));
        assert_eq!(state.playing_album().map(|a| a.id.to_string()), Some("a1".into()));

        state.navigate(&Nav::AlbumDetail(link("a2")));
        state.album_detail.album.defer(link("a2"));
        assert_eq!(state.playing_album(), None);

        state
            .album_detail
            .album
            .update((link("a2"), Ok(album("a2"))));
        assert_eq!(state.playing_album().map(|a| a.id.to_string()), Some("a2".into()));
    }

    #[test]
    fn list_fetch_errors_reject_and_keep_no_albums() {
        let mut state = state();
        state.home.albums.defer(());
        state
            .home
            .albums
            .update(((), Err(crate::error::Error::Http(500))));
        assert!(state.home.albums.is_rejected());
        assert_eq!(state.playing_album(), None);
    }
}
