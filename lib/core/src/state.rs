use serde::{Deserialize, Serialize};

use crate::comment::Comment;

/// Capabilities of the current viewer, determined by the host page. Rendering
/// is a pure function of (comment, viewer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub is_authenticated: bool,
}

/// Payload embedded by the host page to configure the widget: the target
/// analysis, the viewer's capabilities and the initially known comments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetBootstrap {
    pub analysis_id: i64,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl WidgetBootstrap {
    pub fn viewer(&self) -> Viewer {
        Viewer {
            is_authenticated: self.is_authenticated,
        }
    }
}
