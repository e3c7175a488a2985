//! Fragment ingestion: typed sources into the flat fragment stream.

use log::debug;

use crate::model::Fragment;
use crate::parser::source::{GlyphFragmentSource, RegionSource, StructuredLineSource};

/// Pick the region most likely to be the primary body text: the one with
/// the greatest total recognized-text length. Ties go to the first region
/// in document order, which also covers the all-empty case.
///
/// Layout segmentation on scanned pages frequently detects marginal
/// annotations, page-number stamps, or decorative borders as their own
/// regions; maximum text length is a cheap proxy for the running text.
pub fn select_main_region(regions: &[RegionSource]) -> Option<&RegionSource> {
    let mut best: Option<(&RegionSource, usize)> = None;
    for region in regions {
        let len = region.text_len();
        match best {
            Some((_, best_len)) if len <= best_len => {}
            _ => best = Some((region, len)),
        }
    }
    best.map(|(region, _)| region)
}

/// Build fragments from a structured-XML page.
///
/// Only the main region contributes. Each declared line becomes one
/// fragment: the baseline's first point gives the horizontal start, the
/// mean of all baseline ys gives the vertical position. A line whose
/// baseline carries no point has no placement and is dropped.
pub fn fragments_from_structured(source: &StructuredLineSource) -> Vec<Fragment> {
    let Some(region) = select_main_region(&source.regions) else {
        return Vec::new();
    };

    region
        .lines
        .iter()
        .filter_map(|line| {
            let first = match line.baseline.first() {
                Some(point) => point,
                None => {
                    debug!("dropping declared line without baseline geometry");
                    return None;
                }
            };
            let y_mean =
                line.baseline.iter().map(|p| p.y).sum::<f32>() / line.baseline.len() as f32;
            Some(Fragment::new(line.text.clone(), y_mean, first.x, 0.0))
        })
        .collect()
}

/// Build fragments from a glyph-level page, preserving the engine's native
/// emission order.
///
/// Vertex 0 is the top-left corner and vertex 2 the bottom-right one, so
/// the vertical midpoint is their y average and the height their y span.
pub fn fragments_from_glyphs(source: &GlyphFragmentSource) -> Vec<Fragment> {
    source
        .glyphs
        .iter()
        .filter_map(|glyph| {
            let top = glyph.vertices.first()?;
            let bottom = glyph.vertices.get(2)?;
            Some(Fragment::new(
                Some(glyph.text.clone()),
                (top.y + bottom.y) / 2.0,
                top.x,
                (bottom.y - top.y).abs(),
            ))
        })
        .collect()
}
