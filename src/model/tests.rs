use reqwest::StatusCode;

use super::*;

fn song(id: SongId, title: &str, artist: Option<&str>) -> Song {
    Song {
        id,
        title: title.into(),
        artist: artist.map(Into::into),
        album: None,
        description: None,
        length_in_seconds: 180,
        is_favorite: false,
    }
}

fn catalog_of(songs: Vec<Song>) -> CatalogStore {
    let mut catalog = CatalogStore::default();
    catalog.finish_load(Ok(songs)).unwrap();
    catalog
}

// ----------------------------------------------------------------------------
// filter
// ----------------------------------------------------------------------------

#[test]
fn filter_all_returns_whole_catalog() {
    let songs = vec![song(1, "A", Some("X")), song(2, "B", None), song(3, "C", Some("Y"))];
    let result = filter::filter(&songs, &ArtistFilter::All);
    assert_eq!(result, songs.iter().collect::<Vec<_>>());
}

#[test]
fn filter_by_artist_returns_exact_matches_only() {
    let songs = vec![song(1, "One", Some("A")), song(2, "Two", Some("B"))];

    let result = filter::filter(&songs, &ArtistFilter::Artist("B".into()));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 2);
}

#[test]
fn filter_is_case_sensitive_and_keeps_order() {
    let songs = vec![
        song(1, "One", Some("Hillsong")),
        song(2, "Two", Some("hillsong")),
        song(3, "Three", Some("Hillsong")),
    ];

    let ids: Vec<SongId> = filter::filter(&songs, &ArtistFilter::Artist("Hillsong".into()))
        .iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn filter_result_is_always_a_subset() {
    let songs = vec![song(1, "One", Some("A")), song(2, "Two", None), song(3, "Three", Some(""))];
    for selection in filter::artist_options(&songs)
        .into_iter()
        .chain([ArtistFilter::Artist("missing".into())])
    {
        for s in filter::filter(&songs, &selection) {
            assert!(songs.contains(s));
        }
    }
}

#[test]
fn stale_artist_selection_yields_empty_result() {
    let songs = vec![song(1, "One", Some("A"))];
    assert!(filter::filter(&songs, &ArtistFilter::Artist("Gone".into())).is_empty());
}

#[test]
fn distinct_artists_dedupes_in_first_seen_order_and_skips_blanks() {
    let songs = vec![
        song(1, "1", Some("B")),
        song(2, "2", None),
        song(3, "3", Some("A")),
        song(4, "4", Some("")),
        song(5, "5", Some("B")),
    ];

    assert_eq!(filter::distinct_artists(&songs), vec!["B".to_string(), "A".to_string()]);
    assert_eq!(
        filter::artist_options(&songs),
        vec![
            ArtistFilter::All,
            ArtistFilter::Artist("B".into()),
            ArtistFilter::Artist("A".into()),
        ]
    );
}

#[test]
fn distinct_artists_of_empty_catalog_is_empty() {
    assert!(filter::distinct_artists(&[]).is_empty());
    assert_eq!(filter::artist_options(&[]), vec![ArtistFilter::All]);
}

// ----------------------------------------------------------------------------
// catalog
// ----------------------------------------------------------------------------

#[test]
fn successful_load_replaces_songs_and_clears_error() {
    let mut catalog = catalog_of(vec![song(9, "Old", None)]);
    catalog.set_error(DashboardError::RecordNotFound { id: 4 });

    let count = catalog
        .finish_load(Ok(vec![song(1, "A", None), song(2, "B", None)]))
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(catalog.songs().iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(catalog.last_error(), None);
}

#[test]
fn failed_load_keeps_songs_and_sets_fetch_error() {
    let mut catalog = catalog_of(vec![song(1, "A", Some("X")), song(2, "B", None)]);
    let before = catalog.songs().to_vec();

    let err = catalog
        .finish_load(Err(ServiceError::Status(StatusCode::BAD_GATEWAY)))
        .unwrap_err();

    assert!(matches!(err, DashboardError::Fetch { .. }));
    assert_eq!(catalog.songs(), before.as_slice());
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.last_error(), Some(&err));
    assert_eq!(err.to_string(), "Failed to fetch records");
}

#[test]
fn empty_load_leaves_an_empty_catalog() {
    let mut catalog = catalog_of(vec![song(1, "A", None)]);
    assert!(!catalog.is_empty());

    assert_eq!(catalog.finish_load(Ok(vec![])), Ok(0));
    assert!(catalog.is_empty());
}

#[test]
fn apply_update_replaces_in_place() {
    let mut catalog = catalog_of(vec![
        song(1, "A", None),
        song(2, "B", None),
        song(3, "C", None),
    ]);
    let mut updated = song(2, "B (live)", Some("Z"));
    updated.is_favorite = true;

    let previous = catalog.apply_update(updated.clone());

    assert_eq!(previous.map(|s| s.title), Some("B".to_string()));
    assert_eq!(catalog.songs()[1], updated);
    assert_eq!(catalog.songs()[0].title, "A");
    assert_eq!(catalog.songs()[2].title, "C");
    assert_eq!(catalog.len(), 3);
}

#[test]
fn apply_update_for_unknown_id_changes_nothing() {
    let mut catalog = catalog_of(vec![song(1, "A", None)]);
    let before = catalog.clone();

    assert_eq!(catalog.apply_update(song(5, "E", None)), None);
    assert_eq!(catalog, before);
}

#[test]
fn newer_error_replaces_older_one() {
    let mut catalog = CatalogStore::default();
    catalog.set_error(DashboardError::RecordNotFound { id: 1 });
    catalog.set_error(DashboardError::FavoriteSync {
        id: 2,
        cause: "timeout".into(),
    });

    assert_eq!(
        catalog.last_error().map(ToString::to_string),
        Some("Failed to update favorite for song 2".to_string())
    );
    catalog.clear_error();
    assert_eq!(catalog.last_error(), None);
}

// ----------------------------------------------------------------------------
// app model
// ----------------------------------------------------------------------------

fn model_with(songs: Vec<Song>) -> AppModel {
    let mut model = AppModel::new();
    model.catalog.finish_load(Ok(songs)).unwrap();
    model
}

#[test]
fn cycling_artist_filter_wraps_around_and_resets_selection() {
    let mut model = model_with(vec![
        song(1, "1", Some("A")),
        song(2, "2", Some("B")),
        song(3, "3", Some("A")),
    ]);
    model.move_selection_down();

    model.cycle_artist_filter_forward();
    assert_eq!(model.artist_filter(), &ArtistFilter::Artist("A".into()));
    assert_eq!(model.ui_state().selected_index, 0);
    assert_eq!(model.visible_songs().len(), 2);

    model.cycle_artist_filter_forward();
    model.cycle_artist_filter_forward();
    assert_eq!(model.artist_filter(), &ArtistFilter::All);

    model.cycle_artist_filter_backward();
    assert_eq!(model.artist_filter(), &ArtistFilter::Artist("B".into()));
}

#[test]
fn selection_is_clamped_to_visible_songs() {
    let mut model = model_with(vec![song(1, "1", Some("A")), song(2, "2", Some("B"))]);
    model.set_artist_filter(ArtistFilter::Artist("B".into()));

    model.move_selection_down();
    model.move_selection_down();
    assert_eq!(model.selected_song().map(|s| s.id), Some(2));

    model.move_selection_up();
    model.move_selection_up();
    assert_eq!(model.ui_state().selected_index, 0);
}

#[test]
fn selection_follows_rows_that_leave_the_filter() {
    let mut model = model_with(vec![song(1, "1", Some("A")), song(2, "2", Some("A"))]);
    model.set_artist_filter(ArtistFilter::Artist("A".into()));
    model.move_selection_down();
    assert_eq!(model.selected_song().map(|s| s.id), Some(2));

    // The service answers with a different artist for song 1.
    model.apply_song_update(song(1, "1", Some("B")));

    assert_eq!(model.visible_songs().len(), 1);
    assert_eq!(model.ui_state().selected_index, 0);
    assert_eq!(model.selected_song().map(|s| s.id), Some(2));
}

#[test]
fn reload_that_shrinks_the_view_clamps_selection() {
    let mut model = model_with(vec![song(1, "1", None), song(2, "2", None), song(3, "3", None)]);
    model.move_selection_down();
    model.move_selection_down();

    model.finish_load(Ok(vec![song(1, "1", None)])).unwrap();

    assert_eq!(model.ui_state().selected_index, 0);
    assert_eq!(model.selected_song().map(|s| s.id), Some(1));
}

#[test]
fn selected_song_is_none_for_empty_view() {
    let mut model = model_with(vec![song(1, "1", Some("A"))]);
    model.set_artist_filter(ArtistFilter::Artist("Nobody".into()));
    assert_eq!(model.selected_song(), None);
}

#[test]
fn now_playing_is_derived_from_the_catalog() {
    let mut model = model_with(vec![song(1, "Amazing Grace", Some("John Newton"))]);
    let selected = model.selected_song().unwrap();
    model.playback.select_track(&selected);

    let mut updated = selected.clone();
    updated.is_favorite = true;
    model.catalog.apply_update(updated);

    let now_playing = model.now_playing().unwrap();
    assert!(now_playing.song.is_favorite);
    assert!(now_playing.is_playing);
}

#[test]
fn snapshot_carries_filtered_songs_and_error_message() {
    let mut model = model_with(vec![song(1, "1", Some("A")), song(2, "2", Some("B"))]);
    model.set_artist_filter(ArtistFilter::Artist("A".into()));
    model.set_error(DashboardError::RecordNotFound { id: 42 });

    let snapshot = model.snapshot();

    assert_eq!(snapshot.songs.len(), 1);
    assert_eq!(snapshot.artist_options.len(), 3);
    assert_eq!(snapshot.error_message.as_deref(), Some("Song 42 not found"));
    assert_eq!(snapshot.now_playing, None);
}

#[test]
fn tabs_cycle_in_both_directions() {
    let mut model = AppModel::new();
    model.next_tab();
    assert_eq!(model.active_tab(), ActiveTab::Sermons);
    model.prev_tab();
    model.prev_tab();
    assert_eq!(model.active_tab(), ActiveTab::Podcast);
}
