use crate::LayoutError;
use crate::area::FlowArea;
use crate::builder::{NodeSpec, TreeBuilder};
use crate::config::LayoutConfig;
use crate::engine::{LayoutEngine, PageOutput};
use crate::interface::{LayoutContext, LayoutEnvironment, LayoutStatus};
use crate::nodes::TextMeasure;
use crate::tree::FoTree;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A text leaf where every character has an extent of one point.
pub fn text(content: &str) -> NodeSpec {
    NodeSpec::text(content, TextMeasure::Uniform(1.0))
}

pub fn build(spec: NodeSpec) -> FoTree {
    TreeBuilder::build(spec).expect("test tree should assemble")
}

/// Runs one layout call into a fresh area of `capacity` and returns the
/// status together with the glyphs the area accepted.
pub fn layout_into(tree: &mut FoTree, capacity: f32) -> Result<(LayoutStatus, String), LayoutError> {
    let mut area = FlowArea::new(capacity);
    let status = {
        let mut ctx = LayoutContext::new(&mut area, LayoutEnvironment::default());
        tree.layout(&mut ctx)?
    };
    Ok((status, area.text()))
}

/// Lays the whole tree out into a single unbounded area, following every
/// forced break until the tree completes.
pub fn layout_unbounded(tree: &mut FoTree) -> String {
    let mut out = String::new();
    for _ in 0..10_000 {
        let (status, placed) = layout_into(tree, f32::INFINITY).expect("unbounded layout should not fail");
        out.push_str(&placed);
        if status.is_complete() {
            return out;
        }
    }
    panic!("tree did not complete");
}

pub fn paginate(config: LayoutConfig, spec: NodeSpec) -> Result<Vec<PageOutput>, LayoutError> {
    init_logger();
    let engine = LayoutEngine::new(config)?;
    let mut tree = build(spec);
    engine.paginate_all(&mut tree)
}

pub fn config_with_extent(area_extent: f32) -> LayoutConfig {
    LayoutConfig {
        area_extent,
        ..Default::default()
    }
}

/// Page numbers paired with page text; blank pages show as `None`.
pub fn page_summary(pages: &[PageOutput]) -> Vec<(usize, Option<String>)> {
    pages
        .iter()
        .map(|p| (p.number, (!p.is_blank).then(|| p.text())))
        .collect()
}
