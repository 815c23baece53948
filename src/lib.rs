pub mod canvas;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod parser;
pub mod registry;
pub mod render;
pub mod scene_dump;
pub mod selection;
pub mod theme;
pub mod transform;

pub use canvas::CostCanvas;
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, load_config};
pub use ir::{BillingGraph, BillingNode, GraphError, NodeKind};
pub use layout::{NodeBox, RoutedPath, Scene, Side, compute_scene};
pub use parser::parse_graph;
pub use registry::{Measure, NodeObserver, NodeRegistry};
pub use render::render_svg;
pub use selection::{Selection, SelectionOutcome};
pub use theme::Theme;
pub use transform::TransformContext;
