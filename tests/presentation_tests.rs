// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Popup, sidebar and detail views built from the fixture data.

mod common;

use common::load_fixture_state;
use treasure_map::models::view::MapFrame;
use treasure_map::models::FilterQuery;
use treasure_map::services::presentation::NO_DESCRIPTION;

#[tokio::test]
async fn test_popup_for_fixture_record() {
    let state = load_fixture_state().await;
    let popup = state.popup("lion-den").expect("lion-den should exist");

    assert_eq!(popup.name, "Lion's Den Gorge");
    assert_eq!(popup.icon, "data/icons/nature-preserve.png");
    assert_eq!(popup.activities, vec!["Hiking", "Bird Watching"]);
    assert_eq!(popup.teaser, "<p>Bluffs, ravines and a gorge above Lake Michigan.</p>");
    assert!(popup.directions_url.contains("daddr=Lion's%20Den%20Gorge"));

    let ulao = state.popup("ulao").unwrap();
    assert_eq!(ulao.teaser, NO_DESCRIPTION);
    assert_eq!(ulao.website, None);
}

#[tokio::test]
async fn test_detail_suggests_same_category() {
    let state = load_fixture_state().await;
    let detail = state.detail("mee-kwon").expect("mee-kwon should exist");

    assert_eq!(detail.category, "parks");
    assert_eq!(detail.location.as_deref(), Some("Mequon"));
    let names: Vec<&str> = detail.similar.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Harrington Beach State Park", "Pigeon Creek Park"]);

    assert!(state.detail("lost-marker").is_none());
}

#[tokio::test]
async fn test_sidebar_subtitles() {
    let state = load_fixture_state().await;
    let outcome = state.filter(&FilterQuery::default().with_location("Grafton"));
    let items = state.sidebar(&outcome);

    let subtitles: Vec<(&str, &str)> = items
        .iter()
        .map(|i| (i.id.as_str(), i.subtitle.as_str()))
        .collect();
    assert_eq!(
        subtitles,
        vec![
            ("lion-den", "Bluffs, ravines and a gorge above Lake Michigan."),
            ("ulao", "Grafton"),
            ("lime-kiln", "Historic lime kilns along the Milwaukee River."),
        ]
    );
}

#[tokio::test]
async fn test_map_frame_follows_results() {
    let state = load_fixture_state().await;

    let outcome = state.filter(&FilterQuery::default().with_category("wpa"));
    match state.frame(&outcome) {
        MapFrame::Bounds {
            south_west,
            north_east,
        } => {
            // Single point: zero extent, no padding
            assert_eq!(south_west, (43.2867, -87.9406));
            assert_eq!(north_east, (43.2867, -87.9406));
        }
        other => panic!("expected bounds, got {:?}", other),
    }

    let outcome = state.filter(&FilterQuery::default().with_text("nothing here"));
    assert_eq!(
        state.frame(&outcome),
        MapFrame::Default {
            center: (43.38, -87.95),
            zoom: 11
        }
    );
}
