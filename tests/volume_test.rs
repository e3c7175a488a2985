//! Integration tests for volume aggregation and the batch surface.

use std::fs;

use tempfile::tempdir;

use unocr::{
    process_volume, process_volume_range, write_volume, PageStatus, ParseOptions,
};

const SIMPLE_XML: &str = r#"<PcGts><Page><TextRegion>
    <TextLine>
        <Baseline points="100,70 900,70"/>
        <TextEquiv><Unicode>page body text</Unicode></TextEquiv>
    </TextLine>
</TextRegion></Page></PcGts>"#;

const EMPTY_XML: &str = "<PcGts><Page/></PcGts>";

fn make_volume_dir(root: &std::path::Path, id: &str) -> std::path::PathBuf {
    let dir = root.join(id);
    fs::create_dir_all(&dir).unwrap();
    // Page files deliberately created out of name order
    fs::write(dir.join("0003.xml"), SIMPLE_XML).unwrap();
    fs::write(dir.join("0001.xml"), SIMPLE_XML).unwrap();
    fs::write(dir.join("0002.xml"), EMPTY_XML).unwrap();
    fs::write(dir.join("0004.json"), "{ this is not json").unwrap();
    dir
}

#[test]
fn volume_pages_come_back_in_filename_order() {
    let root = tempdir().unwrap();
    let dir = make_volume_dir(root.path(), "VOL001");

    let volume = process_volume(&dir, &ParseOptions::default()).unwrap();
    assert_eq!(volume.id, "VOL001");
    assert_eq!(volume.page_count(), 4);

    let ids: Vec<&str> = volume.pages.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["0001", "0002", "0003", "0004"]);
}

#[test]
fn per_page_failures_are_isolated() {
    let root = tempdir().unwrap();
    let dir = make_volume_dir(root.path(), "VOL002");

    let volume = process_volume(&dir, &ParseOptions::default()).unwrap();
    let statuses: Vec<PageStatus> = volume.pages.iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![
            PageStatus::Ok,
            PageStatus::Empty,
            PageStatus::Ok,
            PageStatus::Malformed,
        ]
    );
}

#[test]
fn sequential_processing_matches_parallel() {
    let root = tempdir().unwrap();
    let dir = make_volume_dir(root.path(), "VOL003");

    let parallel = process_volume(&dir, &ParseOptions::default()).unwrap();
    let sequential = process_volume(&dir, &ParseOptions::default().sequential()).unwrap();
    assert_eq!(parallel.plain_text(), sequential.plain_text());
}

#[test]
fn aggregated_text_keeps_headers_and_separators() {
    let root = tempdir().unwrap();
    let dir = make_volume_dir(root.path(), "VOL004");

    let volume = process_volume(&dir, &ParseOptions::default()).unwrap();
    let text = volume.plain_text();

    assert!(text.starts_with("VOL004\n\n"));
    // Every page keeps its header, the empty page included
    assert!(text.contains("0001\npage body text\n\n"));
    assert!(text.contains("0002\n\n\n"));
    assert!(text.contains("0004\n[malformed page]\n\n"));
}

#[test]
fn write_volume_produces_utf8_file() {
    let root = tempdir().unwrap();
    let dir = make_volume_dir(root.path(), "VOL005");
    let out = root.path().join("VOL005.txt");

    let volume = process_volume(&dir, &ParseOptions::default()).unwrap();
    write_volume(&volume, &out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, volume.plain_text());
}

#[test]
fn volume_range_skips_missing_directories() {
    let root = tempdir().unwrap();
    let input_root = root.path().join("in");
    let output_root = root.path().join("out");
    fs::create_dir_all(&output_root).unwrap();

    make_volume_dir(&input_root, "PI2KG210407");
    make_volume_dir(&input_root, "PI2KG210409");
    // 408 deliberately missing

    let written = process_volume_range(
        &input_root,
        &output_root,
        "PI2KG210",
        407..=409,
        &ParseOptions::default(),
    )
    .unwrap();

    assert_eq!(written, 2);
    assert!(output_root.join("PI2KG210407.txt").exists());
    assert!(!output_root.join("PI2KG210408.txt").exists());
    assert!(output_root.join("PI2KG210409.txt").exists());
}
