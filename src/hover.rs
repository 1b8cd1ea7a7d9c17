use serde::{Deserialize, Serialize};

/// Bounding box of a hovered link, as measured by the page at hover time.
///
/// `width` is negative for right-to-left runs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn is_backward(self) -> bool {
        self.width < 0.0
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoveredLink {
    pub url: String,
    pub rect: Rect,
}

impl HoveredLink {
    pub fn new(url: impl Into<String>, rect: Rect) -> Self {
        Self {
            url: url.into(),
            rect,
        }
    }

    /// Two hovers hit the same link when their urls match, whatever the geometry.
    pub fn is_same_link(&self, other: &HoveredLink) -> bool {
        self.url == other.url
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Over,
    Out,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Over => "over",
            Status::Out => "out",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TargetLink {
    pub status: Status,
    pub link: HoveredLink,
}

/// Applies one hover event to the tracked target.
///
/// A link always becomes the new `Over` target. `None` moves `Over` to `Out` and leaves
/// every other state alone; clearing `Out` belongs to the caller.
pub fn transition(target: Option<TargetLink>, hovered: Option<HoveredLink>) -> Option<TargetLink> {
    match (target, hovered) {
        (previous, Some(link)) => {
            if previous.is_some_and(|t| t.link.is_same_link(&link)) {
                log::trace!("re-hover of {}", link.url);
            }
            Some(TargetLink {
                status: Status::Over,
                link,
            })
        }
        (None, None) => None,
        (Some(target), None) => Some(TargetLink {
            status: Status::Out,
            ..target
        }),
    }
}
