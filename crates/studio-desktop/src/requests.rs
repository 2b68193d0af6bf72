//! Gateway requests issued by views and their completions
//!
//! Views never call the gateway directly. They emit a [`GatewayRequest`];
//! the engine records it in [`PendingRequests`] against the issuing window
//! and the page (or [`execute`] in-process) reports a [`RequestOutcome`]
//! back. Completions for windows that have since closed are dropped.

use std::collections::{BTreeMap, VecDeque};

use log::debug;
use serde::{Deserialize, Serialize};
use studio_gateway::{
    BackgroundImage, BackgroundLibrary, FontLibrary, FontLimits, FontMetadata, FontRecord,
    Gateway, GatewayError, UploadFile, User,
};

use crate::media::IMAGES_BUCKET;
use crate::window::WindowId;

/// Identifier for an issued request
pub type RequestId = u64;

/// A gateway call requested by a view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GatewayRequest {
    /// Every font in the library
    LoadFonts,
    /// Validated font upload
    UploadFont { file: UploadFile, metadata: FontMetadata },
    #[serde(rename_all = "camelCase")]
    DeleteFont { font_id: String },
    /// Background image upload
    UploadBackground { file: UploadFile },
    /// Uploaded backgrounds under `folder`
    ListBackgrounds { folder: String },
    DeleteBackground { path: String },
    /// Remove gallery images (`ids` are view ids, `paths` storage paths)
    DeleteImages { ids: Vec<String>, paths: Vec<String> },
}

/// Result of a [`GatewayRequest`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RequestOutcome {
    FontsLoaded { fonts: Vec<FontRecord> },
    FontUploaded { font: FontRecord },
    #[serde(rename_all = "camelCase")]
    FontDeleted { font_id: String },
    BackgroundUploaded { image: BackgroundImage },
    BackgroundsListed { images: Vec<BackgroundImage> },
    BackgroundDeleted { path: String },
    ImagesDeleted { ids: Vec<String> },
    /// Any failure, with a user-facing message
    Failed { message: String },
}

impl RequestOutcome {
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, RequestOutcome::Failed { .. })
    }
}

impl From<GatewayError> for RequestOutcome {
    fn from(err: GatewayError) -> Self {
        RequestOutcome::Failed {
            message: err.to_string(),
        }
    }
}

/// Run `request` against `gateway` on behalf of `user`.
pub fn execute<G: Gateway + ?Sized>(
    gateway: &G,
    request: &GatewayRequest,
    user: Option<&User>,
    limits: &FontLimits,
    now_ms: u64,
) -> RequestOutcome {
    let user_id = user.map(|u| u.id.as_str());
    let fonts = FontLibrary::with_limits(gateway, limits.clone());
    let backgrounds = BackgroundLibrary::new(gateway);

    let result = match request {
        GatewayRequest::LoadFonts => fonts
            .all_fonts()
            .map(|fonts| RequestOutcome::FontsLoaded { fonts }),
        GatewayRequest::UploadFont { file, metadata } => fonts
            .upload_font(file, metadata.clone(), user_id, now_ms)
            .map(|font| RequestOutcome::FontUploaded { font }),
        GatewayRequest::DeleteFont { font_id } => fonts
            .delete_font(font_id, user)
            .map(|_| RequestOutcome::FontDeleted {
                font_id: font_id.clone(),
            }),
        // Backgrounds are shared by all admins and listed from the bucket root folder
        GatewayRequest::UploadBackground { file } => backgrounds
            .upload(file, None, now_ms)
            .map(|image| RequestOutcome::BackgroundUploaded { image }),
        GatewayRequest::ListBackgrounds { folder } => backgrounds
            .list(folder)
            .map(|images| RequestOutcome::BackgroundsListed { images }),
        GatewayRequest::DeleteBackground { path } => backgrounds
            .delete(path)
            .map(|_| RequestOutcome::BackgroundDeleted { path: path.clone() }),
        GatewayRequest::DeleteImages { ids, paths } => gateway
            .remove(IMAGES_BUCKET, paths)
            .map(|_| RequestOutcome::ImagesDeleted { ids: ids.clone() }),
    };

    result.unwrap_or_else(RequestOutcome::from)
}

/// A request waiting for its completion.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequest {
    pub id: RequestId,
    pub window_id: WindowId,
    pub request: GatewayRequest,
}

/// In-flight requests keyed by id, plus the queue not yet handed out.
#[derive(Debug, Default)]
pub struct PendingRequests {
    next_id: RequestId,
    in_flight: BTreeMap<RequestId, PendingRequest>,
    outbox: VecDeque<RequestId>,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Record a request issued by `window_id`
    pub fn register(&mut self, window_id: WindowId, request: GatewayRequest) -> RequestId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        debug!("request {} issued by window {}: {:?}", id, window_id, request);
        self.in_flight.insert(
            id,
            PendingRequest {
                id,
                window_id,
                request,
            },
        );
        self.outbox.push_back(id);
        id
    }

    /// Hand out every request issued since the last call
    pub fn drain_outbox(&mut self) -> Vec<PendingRequest> {
        let ids: Vec<RequestId> = self.outbox.drain(..).collect();
        ids.into_iter()
            .filter_map(|id| self.in_flight.get(&id).cloned())
            .collect()
    }

    /// Remove a request on completion
    pub fn take(&mut self, id: RequestId) -> Option<PendingRequest> {
        self.outbox.retain(|queued| *queued != id);
        self.in_flight.remove(&id)
    }

    pub fn contains(&self, id: RequestId) -> bool {
        self.in_flight.contains_key(&id)
    }

    /// Requests issued by `window_id` still in flight
    pub fn for_window(&self, window_id: WindowId) -> impl Iterator<Item = &PendingRequest> {
        self.in_flight.values().filter(move |p| p.window_id == window_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_gateway::{MemoryGateway, Operation};

    #[test]
    fn test_register_and_take() {
        let mut pending = PendingRequests::new();
        let a = pending.register(1, GatewayRequest::LoadFonts);
        let b = pending.register(2, GatewayRequest::LoadFonts);
        assert_ne!(a, b);
        assert_eq!(pending.len(), 2);

        let out = pending.drain_outbox();
        assert_eq!(out.len(), 2);
        assert!(pending.drain_outbox().is_empty());
        assert_eq!(pending.len(), 2);

        let taken = pending.take(a).unwrap();
        assert_eq!(taken.window_id, 1);
        assert!(pending.take(a).is_none());
        assert_eq!(pending.for_window(2).count(), 1);
    }

    #[test]
    fn test_take_before_drain_unqueues() {
        let mut pending = PendingRequests::new();
        let id = pending.register(1, GatewayRequest::LoadFonts);
        pending.take(id);
        assert!(pending.drain_outbox().is_empty());
    }

    #[test]
    fn test_execute_upload_and_load() {
        let gw = MemoryGateway::new();
        let limits = FontLimits::default();
        let file = UploadFile::new("my-brand.ttf", vec![1u8; 32]);
        let request = GatewayRequest::UploadFont {
            metadata: FontMetadata::from_filename(&file.name),
            file,
        };

        let outcome = execute(&gw, &request, None, &limits, 5);
        let RequestOutcome::FontUploaded { font } = outcome else {
            panic!("expected upload, got {:?}", outcome);
        };
        assert_eq!(font.font_family, "My Brand");

        match execute(&gw, &GatewayRequest::LoadFonts, None, &limits, 6) {
            RequestOutcome::FontsLoaded { fonts } => assert_eq!(fonts.len(), 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_execute_maps_errors_to_failed() {
        let gw = MemoryGateway::new();
        gw.fail(Operation::QueryFonts);
        let outcome = execute(&gw, &GatewayRequest::LoadFonts, None, &FontLimits::default(), 1);
        assert!(outcome.is_failure());

        let outcome = execute(
            &gw,
            &GatewayRequest::DeleteFont { font_id: "x".into() },
            None,
            &FontLimits::default(),
            1,
        );
        assert_eq!(
            outcome,
            RequestOutcome::Failed {
                message: "Font not found".into()
            }
        );
    }

    #[test]
    fn test_request_json_shape() {
        let json = serde_json::to_value(GatewayRequest::DeleteFont { font_id: "f1".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "deleteFont", "fontId": "f1"}));

        let outcome: RequestOutcome =
            serde_json::from_str(r#"{"type":"failed","message":"Upload failed"}"#).unwrap();
        assert!(outcome.is_failure());
    }
}
