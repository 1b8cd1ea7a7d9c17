//! Pure projections from [`Model`] to what each surface shows.
//!
//! Every projection goes through [`Model::read`] so the target/index join happens in one
//! place. Nothing here is cached between renders.

use crate::config::OVERLAY_CLASS;
use crate::hover::Status;
use crate::link_index::Siblink;
use crate::model::Model;
use crate::protocol::BackLink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarMode {
    Active,
    Disabled,
}

impl SidebarMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SidebarMode::Active => "active",
            SidebarMode::Disabled => "disabled",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarView<'a> {
    pub links: &'a [BackLink],
    pub mode: SidebarMode,
}

/// Sidebar keeps listing the resolved target's links through the `Out` phase.
pub fn sidebar(model: &Model) -> SidebarView<'_> {
    match model.read() {
        Some(ready) => SidebarView {
            links: &ready.siblinks.links,
            mode: match ready.status {
                Status::Over => SidebarMode::Active,
                Status::Out => SidebarMode::Disabled,
            },
        },
        None => SidebarView {
            links: &[],
            mode: SidebarMode::Disabled,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipView<'a> {
    pub open: bool,
    pub top: f64,
    pub left: f64,
    pub links: &'a [BackLink],
}

impl TooltipView<'_> {
    pub fn style(&self) -> String {
        format!("top: {}px; left:{}px;", self.top, self.left)
    }
}

/// Anchored at the far corner of the link box; open only while the pointer is over it.
pub fn tooltip(model: &Model) -> Option<TooltipView<'_>> {
    let ready = model.read()?;
    let rect = ready.link.rect;
    Some(TooltipView {
        open: ready.status == Status::Over,
        top: rect.top + rect.height,
        left: rect.left + rect.width,
        links: &ready.siblinks.links,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Forward,
    Backward,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Forward => "forward",
            Orientation::Backward => "backward",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleView<'a> {
    pub orientation: Orientation,
    pub status: Status,
    pub top: f64,
    pub left: f64,
    pub font_size: f64,
    pub line_height: f64,
    pub count: usize,
    pub links: &'a [BackLink],
}

impl BubbleView<'_> {
    pub fn class(&self) -> String {
        format!(
            "bubble {} {} {}",
            OVERLAY_CLASS,
            self.orientation.as_str(),
            self.status.as_str()
        )
    }

    pub fn style(&self) -> String {
        format!(
            "top:{}px; left:{}px; font-size:{}px; line-height:{}px",
            self.top, self.left, self.font_size, self.line_height
        )
    }
}

/// Shown in both phases so the `out` class can drive the exit transition.
///
/// A negative width means a right-to-left run, so the badge sits at `left` instead of
/// the trailing edge. Text is sized to the link's line height.
pub fn bubble(model: &Model) -> Option<BubbleView<'_>> {
    let ready = model.read()?;
    let rect = ready.link.rect;
    let (orientation, left) = if rect.is_backward() {
        (Orientation::Backward, rect.left)
    } else {
        (Orientation::Forward, rect.left + rect.width)
    };
    Some(BubbleView {
        orientation,
        status: ready.status,
        top: rect.top,
        left,
        font_size: rect.height,
        line_height: rect.height,
        count: ready.siblinks.links.len(),
        links: &ready.siblinks.links,
    })
}

/// One inline `[‡N]` decoration placed after a matching link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationView {
    pub url: String,
    pub count: usize,
}

impl AnnotationView {
    pub fn new(url: impl Into<String>, siblink: &Siblink) -> Self {
        Self {
            url: url.into(),
            count: siblink.links.len(),
        }
    }
}
