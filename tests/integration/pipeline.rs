//! End-to-end matching pipeline: listings in, ordered entries out

use shotmatch::assemble::SortKey;
use shotmatch::error::MatchError;
use shotmatch::ingest::{parse_frame_records, parse_locations};
use shotmatch::matcher::DuplicatePolicy;
use shotmatch::pass::run_pass;

const XYTECH: &str = "\
Xytech Workorder 1109
Producer: Joan Jett
Location:
/hpsans13/production/starwars/reel1/partA/1920x1080
/hpsans14/production/starwars/reel1/VFX/Hydraulx
/hpsans13/production/starwars/reel1/partA/1920x1080
/hpsans12/production/starwars/pickups/shot_1ab/1920x1080
/hpsans15/production/starwars/reel2/partB/1920x1080
Notes: deliver by Friday
";

const BASELIGHT: &str = "\
/baselightfilesystem1/starwars/reel1/partA/1920x1080 2 3 4 31 32 33 67 68 <err> 228 229 230
/baselightfilesystem1/starwars/reel1/VFX/Hydraulx 1260 1261 1262 1267

/baselightfilesystem1/starwars/pickups/shot_1ab/1920x1080 5000 5001 5002 <null>
";

#[test]
fn test_pipeline_orders_entries_by_first_frame() {
    let locations = parse_locations(XYTECH);
    let frames = parse_frame_records(BASELIGHT);
    assert_eq!(locations.len(), 4, "duplicate location line is dropped");
    assert_eq!(frames.len(), 3, "blank line is skipped");

    let outcome = run_pass(&locations, &frames, DuplicatePolicy::default()).unwrap();
    assert_eq!(outcome.matched, 3);
    assert_eq!(outcome.unmatched, 1);

    let rows: Vec<(&str, &str)> = outcome
        .entries
        .iter()
        .map(|e| {
            (
                e.location.rsplit("production/").next().unwrap(),
                e.frame_ranges.first().map(String::as_str).unwrap_or(""),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("starwars/reel1/partA/1920x1080", "1-52"),
            ("starwars/reel1/partA/1920x1080", "1-81"),
            ("starwars/reel1/partA/1920x1080", "19-116"),
            ("starwars/reel1/partA/1920x1080", "180-278"),
            ("starwars/reel1/VFX/Hydraulx", "1212-1310"),
            ("starwars/reel1/VFX/Hydraulx", "1219-1315"),
            ("starwars/pickups/shot_1ab/1920x1080", "4952-5050"),
            ("starwars/reel2/partB/1920x1080", ""),
        ]
    );
    assert_eq!(outcome.entries[7].first_frame, SortKey::Unmatched);
}

#[test]
fn test_pipeline_timecodes_align_with_ranges() {
    let outcome = run_pass(
        &parse_locations(XYTECH),
        &parse_frame_records(BASELIGHT),
        DuplicatePolicy::default(),
    )
    .unwrap();

    for entry in &outcome.entries {
        assert_eq!(entry.frame_ranges.len(), entry.timecodes.len());
    }
    let pickup = outcome
        .entries
        .iter()
        .find(|e| e.location.contains("pickups"))
        .unwrap();
    // 4952 / 24 = 206s + 8 frames; 5050 / 24 = 210s + 10 frames
    assert_eq!(pickup.timecodes, vec!["00:03:26:08 to 00:03:30:10"]);
}

#[test]
fn test_pipeline_is_idempotent() {
    let locations = parse_locations(XYTECH);
    let frames = parse_frame_records(BASELIGHT);

    let first = run_pass(&locations, &frames, DuplicatePolicy::default()).unwrap();
    let second = run_pass(&locations, &frames, DuplicatePolicy::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.entries).unwrap(),
        serde_json::to_string(&second.entries).unwrap()
    );
}

#[test]
fn test_duplicate_common_path_policies() {
    let locations = parse_locations("/hpsans1/production/show/shot\n");
    let frames = parse_frame_records(
        "/baselightfilesystem1/show/shot 10\n/baselightfilesystem2/show/shot 500\n",
    );

    let outcome = run_pass(&locations, &frames, DuplicatePolicy::LastWriteWins).unwrap();
    assert_eq!(outcome.duplicates.len(), 1);
    assert_eq!(outcome.duplicates[0].kept, "/baselightfilesystem2/show/shot");
    assert_eq!(outcome.entries[0].frame_ranges, vec!["452-548"]);

    let err = run_pass(&locations, &frames, DuplicatePolicy::Reject).unwrap_err();
    assert!(matches!(err, MatchError::DuplicateCommonPath { .. }));
}
