use item_stat_rows::render::{build_rows, render_document};
use item_stat_rows::{
    EnglishTranslations, ItemStatsDocument, OutputFormat, SegmentCategory, StatMetadata,
};

const DEMO: &str = "demos/fatebringer.json";

async fn demo() -> ItemStatsDocument {
    ItemStatsDocument::load_from_file(DEMO).await.unwrap()
}

#[tokio::test]
async fn test_rows_for_demo_weapon() {
    let document = demo().await;
    let rows = build_rows(&document, &StatMetadata::default(), &EnglishTranslations::new());

    assert_eq!(rows.len(), 5);

    let impact = &rows[0];
    assert_eq!(impact.classes, vec!["stat-box-row"]);
    assert_eq!(impact.bar.as_ref().unwrap().len(), 1);

    let stability = &rows[1];
    assert_eq!(stability.classes, vec!["stat-box-row", "masterworked"]);
    let widths: Vec<_> = stability
        .bar
        .as_ref()
        .unwrap()
        .iter()
        .map(|f| (f.category, f.width_percent))
        .collect();
    // The ornament socket also lists Stability but is not a mod.
    assert_eq!(
        widths,
        vec![(SegmentCategory::Base, 46), (SegmentCategory::Masterwork, 10)]
    );

    let handling = &rows[2];
    assert_eq!(handling.classes, vec!["stat-box-row", "modded"]);
    let magnitudes: Vec<_> = handling.bar.as_ref().unwrap().iter().map(|f| f.magnitude).collect();
    assert_eq!(magnitudes, vec![54, 10]);

    assert!(rows[3].recoil.is_some());
    assert!(rows[3].bar.is_none());
    assert!(rows[4].bar.is_none());
}

#[tokio::test]
async fn test_render_formats() {
    let document = demo().await;
    let metadata = StatMetadata::default();
    let translations = EnglishTranslations::new();

    let text = render_document(&document, &metadata, &translations, OutputFormat::Text, 20).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Fatebringer (Timelost)");
    assert_eq!(lines.len(), 6);
    assert!(lines[2].ends_with("(masterworked)"));

    let html = render_document(&document, &metadata, &translations, OutputFormat::Html, 20).unwrap();
    assert!(html.starts_with("<div class=\"stats\">"));
    assert!(html.contains("stat-box-inner masterwork-stats\" style=\"width: 10%\""));
    assert!(html.contains("stat-box-inner modded-stats"));
    assert!(html.contains("<span class=\"stat-recoil\"><svg"));

    let json = render_document(&document, &metadata, &translations, OutputFormat::Json, 20).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 5);
    assert_eq!(parsed[1]["bar"][1]["category"], "masterwork");
}

#[tokio::test]
async fn test_rendering_twice_is_identical() {
    let document = demo().await;
    let metadata = StatMetadata::default();
    let translations = EnglishTranslations::new();

    let first = render_document(&document, &metadata, &translations, OutputFormat::Html, 20).unwrap();
    let second = render_document(&document, &metadata, &translations, OutputFormat::Html, 20).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_extreme_values_render_without_panicking() {
    let document = ItemStatsDocument::from_json(
        r#"{
            "item": {
                "generation": "destiny2",
                "id": "1",
                "masterworkInfo": {"statHash": 1, "statValue": 10},
                "sockets": [
                    {"plug": {"plugItem": {"itemCategoryHashes": [4062965806]}, "stats": {"2": 2147483647}}},
                    {"plug": {"plugItem": {"itemCategoryHashes": [4062965806]}, "stats": {"2": 1}}}
                ]
            },
            "stats": [
                {"statHash": 1, "value": -2147483648, "maximumValue": 100, "bar": true},
                {"statHash": 2, "value": 10, "maximumValue": 100, "bar": true}
            ]
        }"#,
    )
    .unwrap();

    let rows = build_rows(&document, &StatMetadata::default(), &EnglishTranslations::new());

    let masterworked = rows[0].bar.as_ref().unwrap();
    assert_eq!(masterworked[0].magnitude, i32::MIN);
    assert_eq!(masterworked[0].width_percent, 0);

    let modded = rows[1].bar.as_ref().unwrap();
    assert_eq!(modded[1].magnitude, i32::MAX);
    assert_eq!(modded[1].width_percent, 100);
}
