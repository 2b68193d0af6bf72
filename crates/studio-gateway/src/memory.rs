//! In-memory gateway for tests and offline use.
//!
//! Implements every gateway seam over `BTreeMap`s. Individual operations can
//! be made to fail with [`MemoryGateway::fail`] to exercise error paths.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::auth::{AuthProvider, User};
use crate::metadata::{FontMetadataStore, FontQuery, FontRecord, NewFontRecord};
use crate::storage::{ObjectStorage, StorageEntry, StoredObject};
use crate::GatewayError;

/// Base of the public URLs handed out by [`MemoryGateway`]
const PUBLIC_URL_BASE: &str = "https://memory.local/storage/v1/object/public";

/// Gateway operations that can be forced to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    Upload,
    Remove,
    List,
    InsertFont,
    GetFont,
    QueryFonts,
    DeleteFont,
    CurrentUser,
}

struct StoredBytes {
    bytes: Vec<u8>,
    created_at: u64,
}

/// In-memory gateway.
pub struct MemoryGateway {
    /// Objects keyed by (bucket, path)
    objects: RefCell<BTreeMap<(String, String), StoredBytes>>,
    /// Font rows keyed by id
    fonts: RefCell<BTreeMap<String, FontRecord>>,
    /// Signed-in user
    user: RefCell<Option<User>>,
    /// Operations that currently fail
    failing: RefCell<BTreeSet<Operation>>,
    /// Timestamp stamped on stored objects
    now: RefCell<u64>,
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGateway {
    /// Create an empty gateway with nobody signed in.
    pub fn new() -> Self {
        Self {
            objects: RefCell::new(BTreeMap::new()),
            fonts: RefCell::new(BTreeMap::new()),
            user: RefCell::new(None),
            failing: RefCell::new(BTreeSet::new()),
            now: RefCell::new(1000),
        }
    }

    /// Sign a user in (or out with `None`).
    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    /// Set the timestamp used for stored objects.
    pub fn set_now(&self, timestamp: u64) {
        *self.now.borrow_mut() = timestamp;
    }

    /// Make `op` fail until [`Self::recover`] is called.
    pub fn fail(&self, op: Operation) {
        self.failing.borrow_mut().insert(op);
    }

    /// Let `op` succeed again.
    pub fn recover(&self, op: Operation) {
        self.failing.borrow_mut().remove(&op);
    }

    /// Check whether an object exists.
    pub fn contains_object(&self, bucket: &str, path: &str) -> bool {
        self.objects
            .borrow()
            .contains_key(&(bucket.to_string(), path.to_string()))
    }

    /// Number of stored objects across buckets.
    pub fn object_count(&self) -> usize {
        self.objects.borrow().len()
    }

    /// Number of font rows.
    pub fn font_count(&self) -> usize {
        self.fonts.borrow().len()
    }

    /// Bytes of a stored object.
    pub fn object_bytes(&self, bucket: &str, path: &str) -> Option<Vec<u8>> {
        self.objects
            .borrow()
            .get(&(bucket.to_string(), path.to_string()))
            .map(|o| o.bytes.clone())
    }

    fn check(&self, op: Operation) -> Result<(), GatewayError> {
        if !self.failing.borrow().contains(&op) {
            return Ok(());
        }
        let msg = format!("{:?} unavailable", op);
        Err(match op {
            Operation::Upload | Operation::Remove | Operation::List => GatewayError::Storage(msg),
            Operation::CurrentUser => GatewayError::Auth(msg),
            _ => GatewayError::Database(msg),
        })
    }
}

impl ObjectStorage for MemoryGateway {
    fn upload(&self, bucket: &str, path: &str, bytes: &[u8]) -> Result<StoredObject, GatewayError> {
        self.check(Operation::Upload)?;

        let key = (bucket.to_string(), path.to_string());
        let mut objects = self.objects.borrow_mut();
        if objects.contains_key(&key) {
            return Err(GatewayError::AlreadyExists(path.to_string()));
        }
        objects.insert(
            key,
            StoredBytes {
                bytes: bytes.to_vec(),
                created_at: *self.now.borrow(),
            },
        );

        Ok(StoredObject {
            path: path.to_string(),
            public_url: self.public_url(bucket, path),
        })
    }

    fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), GatewayError> {
        self.check(Operation::Remove)?;

        let mut objects = self.objects.borrow_mut();
        for path in paths {
            objects.remove(&(bucket.to_string(), path.clone()));
        }
        Ok(())
    }

    fn list(&self, bucket: &str, folder: &str) -> Result<Vec<StorageEntry>, GatewayError> {
        self.check(Operation::List)?;

        let prefix = if folder.is_empty() {
            String::new()
        } else {
            format!("{}/", folder.trim_end_matches('/'))
        };

        Ok(self
            .objects
            .borrow()
            .iter()
            .filter(|((b, _), _)| b == bucket)
            .filter_map(|((_, path), object)| {
                let rest = path.strip_prefix(&prefix)?;
                if rest.is_empty() || rest.contains('/') {
                    return None;
                }
                Some(StorageEntry {
                    name: rest.to_string(),
                    size: object.bytes.len() as u64,
                    created_at: object.created_at,
                })
            })
            .collect())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/{}/{}", PUBLIC_URL_BASE, bucket, path)
    }
}

impl FontMetadataStore for MemoryGateway {
    fn insert_font(&self, record: NewFontRecord, now_ms: u64) -> Result<FontRecord, GatewayError> {
        self.check(Operation::InsertFont)?;

        let record = record.into_record(uuid::Uuid::new_v4().to_string(), now_ms);
        self.fonts
            .borrow_mut()
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn get_font(&self, id: &str) -> Result<FontRecord, GatewayError> {
        self.check(Operation::GetFont)?;

        self.fonts
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::not_found("Font"))
    }

    fn query_fonts(&self, query: &FontQuery) -> Result<Vec<FontRecord>, GatewayError> {
        self.check(Operation::QueryFonts)?;

        let mut fonts: Vec<FontRecord> = self
            .fonts
            .borrow()
            .values()
            .filter(|f| query.matches(f))
            .cloned()
            .collect();
        fonts.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(fonts)
    }

    fn delete_font(&self, id: &str) -> Result<(), GatewayError> {
        self.check(Operation::DeleteFont)?;

        self.fonts
            .borrow_mut()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| GatewayError::not_found("Font"))
    }
}

impl AuthProvider for MemoryGateway {
    fn current_user(&self) -> Result<Option<User>, GatewayError> {
        self.check(Operation::CurrentUser)?;
        Ok(self.user.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_never_overwrites() {
        let gw = MemoryGateway::new();
        gw.upload("fonts", "fonts/a.ttf", b"one").unwrap();
        let err = gw.upload("fonts", "fonts/a.ttf", b"two").unwrap_err();
        assert!(matches!(err, GatewayError::AlreadyExists(_)));
        assert_eq!(gw.object_bytes("fonts", "fonts/a.ttf"), Some(b"one".to_vec()));
    }

    #[test]
    fn test_list_returns_direct_children() {
        let gw = MemoryGateway::new();
        gw.set_now(5);
        gw.upload("backgrounds", "backgrounds/a.png", b"a").unwrap();
        gw.upload("backgrounds", "backgrounds/u1/b.png", b"bb").unwrap();
        gw.upload("fonts", "backgrounds/c.png", b"c").unwrap();

        let entries = gw.list("backgrounds", "backgrounds").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.png");
        assert_eq!(entries[0].size, 1);
        assert_eq!(entries[0].created_at, 5);

        let nested = gw.list("backgrounds", "backgrounds/u1/").unwrap();
        assert_eq!(nested[0].name, "b.png");
    }

    #[test]
    fn test_query_orders_newest_first() {
        let gw = MemoryGateway::new();
        for (name, at) in [("Old", 1), ("New", 3), ("Mid", 2)] {
            gw.insert_font(
                NewFontRecord {
                    filename: format!("{}.ttf", name),
                    title: name.to_string(),
                    description: None,
                    file_size: 1,
                    file_url: String::new(),
                    folder_id: "fonts".to_string(),
                    format: "ttf".to_string(),
                    font_family: name.to_string(),
                    font_weight: "400".to_string(),
                    font_style: "normal".to_string(),
                    uploaded_by: None,
                },
                at,
            )
            .unwrap();
        }

        let titles: Vec<String> = gw
            .query_fonts(&FontQuery::All)
            .unwrap()
            .into_iter()
            .map(|f| f.title)
            .collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn test_failure_injection() {
        let gw = MemoryGateway::new();
        gw.fail(Operation::Upload);
        assert!(matches!(
            gw.upload("fonts", "x", b"").unwrap_err(),
            GatewayError::Storage(_)
        ));
        gw.recover(Operation::Upload);
        assert!(gw.upload("fonts", "x", b"").is_ok());

        gw.fail(Operation::CurrentUser);
        assert!(matches!(gw.current_user().unwrap_err(), GatewayError::Auth(_)));
    }

    #[test]
    fn test_missing_font() {
        let gw = MemoryGateway::new();
        assert!(gw.get_font("nope").unwrap_err().is_not_found());
        assert!(gw.delete_font("nope").unwrap_err().is_not_found());
    }
}
