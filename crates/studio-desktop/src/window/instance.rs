//! Open window record

use serde::{Deserialize, Serialize};

use crate::math::Vec2;
use super::{WindowId, WindowKind};

/// An open window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowInstance {
    pub id: WindowId,
    pub kind: WindowKind,
    /// Top-left corner in desktop pixels
    pub position: Vec2,
}

impl WindowInstance {
    /// Stable label of the hosted content
    #[inline]
    pub fn label(&self) -> &str {
        self.kind.label()
    }
}
