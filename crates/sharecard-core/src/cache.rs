//! Two-slot bitmap cache with a content version guard.
//!
//! The cache holds the last rendered PNG and its data URL. Editing the content
//! bumps the version and empties both slots. A render is started by taking a
//! [`RenderTicket`] for the current version and may only be committed while
//! that version is still current, so an in-flight render of old content can't
//! repopulate the cache after an edit invalidated it.

use std::rc::Rc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A rendered image in both representations.
///
/// Cheap to clone; both slots are reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    png: Rc<[u8]>,
    data_url: Rc<str>,
}

impl Bitmap {
    /// Wrap PNG bytes, deriving the embeddable data URL from the same bytes.
    pub fn from_png(png: Vec<u8>) -> Self {
        let data_url = png_data_url(&png);
        Self {
            png: png.into(),
            data_url: data_url.into(),
        }
    }

    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// `data:image/png;base64,<bytes>`
pub fn png_data_url(png: &[u8]) -> String {
    let mut out = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len().div_ceil(3) * 4);
    out.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(png, &mut out);
    out
}

/// Proof that a render was started for a particular content version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket(u64);

impl RenderTicket {
    pub fn version(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct BitmapCache {
    version: u64,
    png: Option<Rc<[u8]>>,
    data_url: Option<Rc<str>>,
}

impl BitmapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// The cached bitmap, if both slots are filled.
    pub fn get(&self) -> Option<Bitmap> {
        match (&self.png, &self.data_url) {
            (Some(png), Some(data_url)) => Some(Bitmap {
                png: png.clone(),
                data_url: data_url.clone(),
            }),
            _ => None,
        }
    }

    /// The cached data URL alone. Download only needs this slot.
    pub fn data_url(&self) -> Option<Rc<str>> {
        self.data_url.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.png.is_none() && self.data_url.is_none()
    }

    pub fn ticket(&self) -> RenderTicket {
        RenderTicket(self.version)
    }

    /// Store `bitmap` if `ticket` is for the current version.
    ///
    /// Returns false, leaving the cache untouched, for a stale ticket.
    pub fn commit(&mut self, ticket: RenderTicket, bitmap: &Bitmap) -> bool {
        if ticket.0 != self.version {
            return false;
        }
        self.png = Some(bitmap.png.clone());
        self.data_url = Some(bitmap.data_url.clone());
        true
    }

    /// Empty both slots and move to a new content version.
    pub fn invalidate(&mut self) {
        self.version += 1;
        self.png = None;
        self.data_url = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_prefix_and_payload() {
        assert_eq!(png_data_url(b"PNG"), "data:image/png;base64,UE5H");
        assert_eq!(png_data_url(&[]), "data:image/png;base64,");
    }

    #[test]
    fn test_commit_then_get() {
        let mut cache = BitmapCache::new();
        assert!(cache.get().is_none());

        let ticket = cache.ticket();
        let bitmap = Bitmap::from_png(vec![1, 2, 3]);
        assert!(cache.commit(ticket, &bitmap));
        assert_eq!(cache.get(), Some(bitmap));
    }

    #[test]
    fn test_invalidate_empties_both_slots() {
        let mut cache = BitmapCache::new();
        let ticket = cache.ticket();
        cache.commit(ticket, &Bitmap::from_png(vec![9]));

        cache.invalidate();
        assert!(cache.is_empty());
        assert!(cache.data_url().is_none());
        assert_eq!(cache.version(), 1);
    }

    #[test]
    fn test_stale_ticket_rejected() {
        let mut cache = BitmapCache::new();
        let stale = cache.ticket();
        cache.invalidate();

        assert!(!cache.commit(stale, &Bitmap::from_png(vec![1])));
        assert!(cache.is_empty());

        let fresh = cache.ticket();
        assert!(cache.commit(fresh, &Bitmap::from_png(vec![2])));
        assert_eq!(cache.get().unwrap().png(), &[2]);
    }
}
