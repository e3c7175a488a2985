//! Per-page pipeline, volume aggregation, and the batch surface.
//!
//! One page is ingested, clustered, assembled, and (on the glyph path)
//! space-restored independently of every other page, so a volume's pages
//! are dispatched in parallel and merged back in filename order. Per-page
//! failures are isolated: a malformed page contributes a placeholder
//! marker, never aborts the volume.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::cluster::{AdaptiveCluster, BucketCluster, ClusterStrategy};
use crate::error::{Error, Result};
use crate::model::{Page, PageResult, Volume};
use crate::parser::{
    fragments_from_glyphs, fragments_from_structured, parse_page_bytes, PageSource, ParseOptions,
};
use crate::spacing::transfer_spaces;

/// Process one page file into its reconstructed text, using the default
/// space aligner.
pub fn process_page<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<PageResult> {
    process_page_with_aligner(path, options, transfer_spaces)
}

/// Process one page file with a caller-supplied space aligner.
///
/// The aligner is a pure function from (spaced reference, space-less
/// candidate) to the spaced candidate; it is only invoked on the glyph path
/// and only when `options.restore_spacing` is set.
pub fn process_page_with_aligner<P, F>(
    path: P,
    options: &ParseOptions,
    align: F,
) -> Result<PageResult>
where
    P: AsRef<Path>,
    F: Fn(&str, &str) -> String,
{
    let path = path.as_ref();
    let id = page_id(path);
    let bytes = fs::read(path)?;

    let source = match parse_page_bytes(&bytes) {
        Ok(source) => source,
        // A page the engine mangled is a result, not a failure: mark it
        // and let the volume continue
        Err(Error::MalformedResponse(msg)) => {
            warn!("page {id}: {msg}");
            return Ok(PageResult::malformed(id));
        }
        Err(err) => return Err(err),
    };

    match source {
        PageSource::Structured(source) => {
            let fragments = fragments_from_structured(&source);
            if fragments.is_empty() {
                debug!("page {id}: no main region or no usable fragments");
                return Ok(PageResult::empty(id));
            }
            let lines = BucketCluster::new(options.bucket_size).cluster(fragments);
            let page = Page::new(&id, lines);
            Ok(PageResult::ok(id, page.text(options.min_fragment_len)))
        }
        PageSource::Glyph(source) => {
            let fragments = fragments_from_glyphs(&source);
            if fragments.is_empty() {
                return Ok(PageResult::empty(id));
            }

            let lines = AdaptiveCluster::new(options.threshold_divisor).cluster(fragments);
            let page = Page::new(&id, lines);
            // No minimum-length filter on the glyph path: single glyphs are
            // legitimate fragments there
            let mut text = page.text(0);

            if options.restore_spacing {
                if let Some(reference) = source.page_text.as_deref() {
                    text = align(reference, &text);
                }
            }
            Ok(PageResult::ok(id, text))
        }
    }
}

/// Process every page file in a volume directory, in filename-sort order,
/// and aggregate the results.
///
/// Pages are processed in parallel (unless `options.parallel` is off) and
/// merged back in order. A page that fails outright is logged and recorded
/// as malformed; the volume always completes.
pub fn process_volume<P: AsRef<Path>>(input_dir: P, options: &ParseOptions) -> Result<Volume> {
    let dir = input_dir.as_ref();
    let id = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let pages: Vec<PageResult> = if options.parallel {
        paths
            .par_iter()
            .map(|path| isolate(process_page(path, options), path))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| isolate(process_page(path, options), path))
            .collect()
    };

    let mut volume = Volume::new(id);
    for page in pages {
        volume.add_page(page);
    }
    info!(
        "volume {}: {} pages processed",
        volume.id,
        volume.page_count()
    );
    Ok(volume)
}

/// Process a volume and write its aggregated text to `output_path`.
pub fn write_volume<P: AsRef<Path>>(volume: &Volume, output_path: P) -> Result<()> {
    fs::write(output_path.as_ref(), volume.plain_text())?;
    info!(
        "volume {}: written to {}",
        volume.id,
        output_path.as_ref().display()
    );
    Ok(())
}

/// Process a numeric range of volume identifiers in one invocation.
///
/// Each identifier `{prefix}{n}` selects the input directory
/// `input_root/{id}` and the output file `output_root/{id}.txt`. A missing
/// volume directory is logged and skipped; the batch continues. Returns the
/// number of volumes written.
pub fn process_volume_range<P, Q>(
    input_root: P,
    output_root: Q,
    prefix: &str,
    range: std::ops::RangeInclusive<u32>,
    options: &ParseOptions,
) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    if range.is_empty() {
        return Err(Error::InvalidVolumeRange(format!(
            "{}..={}",
            range.start(),
            range.end()
        )));
    }

    let mut written = 0;
    for n in range {
        let id = format!("{prefix}{n}");
        let input_dir = input_root.as_ref().join(&id);
        if !input_dir.is_dir() {
            warn!("volume {id}: input directory not found, skipping");
            continue;
        }
        let volume = process_volume(&input_dir, options)?;
        let output_path = output_root.as_ref().join(format!("{id}.txt"));
        write_volume(&volume, &output_path)?;
        written += 1;
    }
    Ok(written)
}

fn isolate(result: Result<PageResult>, path: &Path) -> PageResult {
    match result {
        Ok(page) => {
            debug!("page {}: {:?}", page.id, page.status);
            page
        }
        Err(err) => {
            warn!("page {}: {err}", path.display());
            PageResult::malformed(page_id(path))
        }
    }
}

/// The page identifier: the input file's stem.
fn page_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
