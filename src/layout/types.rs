use serde::{Deserialize, Serialize};

use crate::ir::BillingNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub(crate) fn direction(self) -> (f32, f32) {
        match self {
            Side::Top => (0.0, -1.0),
            Side::Right => (1.0, 0.0),
            Side::Bottom => (0.0, 1.0),
            Side::Left => (-1.0, 0.0),
        }
    }

    pub(crate) fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// Measured screen-space rectangle of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl NodeBox {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Midpoint of the given edge; where a connector leaves or enters.
    pub fn anchor_point(&self, side: Side) -> (f32, f32) {
        match side {
            Side::Top => ((self.left + self.right) / 2.0, self.top),
            Side::Right => (self.right, (self.top + self.bottom) / 2.0),
            Side::Bottom => ((self.left + self.right) / 2.0, self.bottom),
            Side::Left => (self.left, (self.top + self.bottom) / 2.0),
        }
    }

    pub(crate) fn unscale(&self, scale: f32) -> Self {
        Self {
            left: self.left / scale,
            top: self.top / scale,
            right: self.right / scale,
            bottom: self.bottom / scale,
        }
    }
}

/// Abstract grid coordinate assigned before any pixel measurement exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct PlacedNode {
    pub node: BillingNode,
    pub anchor: Anchor,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutedPath {
    pub node_id: String,
    pub path: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub nodes: Vec<PlacedNode>,
    pub regular_paths: Vec<RoutedPath>,
    pub highlighted_paths: Vec<RoutedPath>,
    pub width: f32,
    pub height: f32,
}
