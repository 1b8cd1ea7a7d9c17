use url::Url;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub strip_fragment: bool,
}

/// Turns a raw href into the key used by [`crate::link_index::LinkIndex`].
pub trait UrlNormalizer {
    fn normalize(&self, raw: &str, options: NormalizeOptions) -> Result<String>;
}

/// WHATWG url parsing and serialization.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardNormalizer;

impl UrlNormalizer for StandardNormalizer {
    fn normalize(&self, raw: &str, options: NormalizeOptions) -> Result<String> {
        let mut url = Url::parse(raw.trim()).map_err(|source| Error::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;
        if options.strip_fragment {
            url.set_fragment(None);
        }
        Ok(url.into())
    }
}
