//! Structured-XML engine output parsing.
//!
//! Consumes region/line page XML where each declared line carries a
//! baseline polyline (`points="x1,y1 x2,y2 …"`) and an optional recognized
//! text element. Only the elements the reading-order pipeline needs are
//! extracted; everything else in the tree is skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::Result;
use crate::model::Point;
use crate::parser::source::{LineSource, RegionSource, StructuredLineSource};

/// Parse a structured-XML page into its typed source representation.
///
/// Element names are matched by local name, so namespace prefixes used by
/// different exporters do not matter.
pub fn parse_structured(xml: &str) -> Result<StructuredLineSource> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut regions: Vec<RegionSource> = Vec::new();
    let mut current_region: Option<RegionSource> = None;
    let mut current_line: Option<LineSource> = None;
    let mut in_line_unicode = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"TextRegion" => current_region = Some(RegionSource::default()),
                b"TextLine" => {
                    if current_region.is_some() {
                        current_line = Some(LineSource::default());
                    }
                }
                b"Baseline" => read_baseline(&e, current_line.as_mut())?,
                b"Unicode" => in_line_unicode = current_line.is_some(),
                _ => {}
            },
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"Baseline" {
                    read_baseline(&e, current_line.as_mut())?;
                }
            }
            Event::Text(t) => {
                if in_line_unicode {
                    if let Some(line) = current_line.as_mut() {
                        line.text = Some(t.unescape()?.into_owned());
                    }
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"Unicode" => in_line_unicode = false,
                b"TextLine" => {
                    if let (Some(region), Some(line)) =
                        (current_region.as_mut(), current_line.take())
                    {
                        region.lines.push(line);
                    }
                }
                b"TextRegion" => {
                    if let Some(region) = current_region.take() {
                        regions.push(region);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(StructuredLineSource { regions })
}

fn read_baseline(element: &BytesStart<'_>, line: Option<&mut LineSource>) -> Result<()> {
    let Some(line) = line else {
        return Ok(());
    };
    if let Some(attr) = element
        .try_get_attribute("points")
        .map_err(quick_xml::Error::from)?
    {
        let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
        line.baseline = parse_points(&value);
    }
    Ok(())
}

/// Parse a `"x1,y1 x2,y2 …"` point list. Unparseable entries are skipped
/// rather than failing the page; a line left without any baseline point is
/// dropped later under the missing-geometry policy.
fn parse_points(value: &str) -> Vec<Point> {
    value
        .split_whitespace()
        .filter_map(|pair| {
            let (x, y) = pair.split_once(',')?;
            Some(Point::new(
                x.trim().parse::<f32>().ok()?,
                y.trim().parse::<f32>().ok()?,
            ))
        })
        .collect()
}
