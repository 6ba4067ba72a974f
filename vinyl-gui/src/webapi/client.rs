use std::{io::Read, num::NonZeroUsize, sync::Arc, time::Duration};

use druid::{
    im::Vector,
    image::{self, ImageFormat},
    ImageBuf,
};
use lru::LruCache;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use ureq::Agent;
use url::Url;

use crate::{data::Album, error::Error};

/// Origin of the album API.
pub const BASE_URL: &str = "https://music.juanfrausto.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const IMAGE_CACHE_SIZE: usize = 256;

pub struct WebApi {
    agent: Agent,
    base_url: Url,
    image_cache: Mutex<LruCache<Arc<str>, ImageBuf>>,
}

impl WebApi {
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        let cache_size = NonZeroUsize::new(IMAGE_CACHE_SIZE).expect("Cache size must be non-zero");
        Self {
            agent,
            base_url: Url::parse(base_url).expect("Invalid base URL"),
            image_cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Build an endpoint URL, path-escaping every segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("Base URL cannot be a base")
            .pop_if_empty()
            .extend(segments);
        url
    }

    fn load<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        log::debug!("GET {}", url);
        let mut response = self.agent.get(url.as_str()).call()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status.as_u16()));
        }
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(Error::network)?;
        serde_json::from_str(&body).map_err(Error::decode)
    }
}

/// Album endpoints.
impl WebApi {
    pub fn get_albums(&self) -> Result<Vector<Arc<Album>>, Error> {
        self.load(self.endpoint(&["api", "albums"]))
    }

    pub fn get_album(&self, id: &str) -> Result<Arc<Album>, Error> {
        self.load(self.endpoint(&["api", "albums", id]))
    }
}

/// Cover image endpoints.
impl WebApi {
    pub fn get_cached_image(&self, uri: &Arc<str>) -> Option<ImageBuf> {
        self.image_cache.lock().get(uri).cloned()
    }

    pub fn get_image(&self, uri: Arc<str>) -> Result<ImageBuf, Error> {
        if let Some(cached) = self.get_cached_image(&uri) {
            return Ok(cached);
        }

        let response = self.agent.get(&*uri).call()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status.as_u16()));
        }
        let mut body = Vec::new();
        response
            .into_body()
            .into_reader()
            .read_to_end(&mut body)?;

        let format = infer::get(&body).and_then(|kind| match kind.mime_type() {
            "image/jpeg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            _ => None,
        });
        let image = match format {
            Some(format) => image::load_from_memory_with_format(&body, format),
            None => image::load_from_memory(&body),
        }
        .map_err(Error::decode)?;

        let image_buf = ImageBuf::from_dynamic_image(image);
        self.image_cache.lock().put(uri, image_buf.clone());
        Ok(image_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_the_fixed_base() {
        let api = WebApi::new(BASE_URL);
        assert_eq!(
            api.endpoint(&["api", "albums"]).as_str(),
            "https://music.juanfrausto.com/api/albums"
        );
        assert_eq!(
            api.endpoint(&["api", "albums", "a1"]).as_str(),
            "https://music.juanfrausto.com/api/albums/a1"
        );
    }

    #[test]
    fn album_ids_are_path_escaped() {
        let api = WebApi::new(BASE_URL);
        assert_eq!(
            api.endpoint(&["api", "albums", "odd id/../x"]).as_str(),
            "https://music.juanfrausto.com/api/albums/odd%20id%2F..%2Fx"
        );
    }
}
