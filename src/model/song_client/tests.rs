use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode as AxumStatus,
    routing::{get, put},
};
use serde_json::json;

use super::*;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn amazing_grace() -> Song {
    Song {
        id: 1,
        title: "Amazing Grace".into(),
        artist: Some("John Newton".into()),
        album: None,
        description: None,
        length_in_seconds: 245,
        is_favorite: false,
    }
}

#[test]
fn song_json_uses_camel_case_and_tolerates_missing_optionals() {
    let song: Song = serde_json::from_value(json!({
        "id": 7,
        "title": "It Is Well",
        "album": null,
        "isFavorite": true
    }))
    .unwrap();

    assert_eq!(song.id, 7);
    assert_eq!(song.artist, None);
    assert_eq!(song.album, None);
    assert_eq!(song.length_in_seconds, 0);
    assert!(song.is_favorite);

    let value = serde_json::to_value(amazing_grace()).unwrap();
    assert_eq!(value["lengthInSeconds"], 245);
    assert_eq!(value["isFavorite"], false);
}

#[test]
fn legacy_favorite_field_is_not_accepted() {
    let result: Result<Song, _> = serde_json::from_value(json!({
        "id": 1,
        "title": "Amazing Grace",
        "favorite": true
    }));
    assert!(result.is_err());
}

#[tokio::test]
async fn fetch_all_returns_songs_in_server_order() {
    let router = Router::new().route(
        "/api/songs/all",
        get(|| async {
            Json(json!([
                {"id": 2, "title": "B", "artist": "Beta", "lengthInSeconds": 10, "isFavorite": false},
                {"id": 1, "title": "A", "artist": null, "description": "first", "lengthInSeconds": 20, "isFavorite": true}
            ]))
        }),
    );
    let client = HttpSongClient::new(serve(router).await);

    let songs = client.fetch_all().await.unwrap();

    assert_eq!(songs.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(songs[1].description.as_deref(), Some("first"));
}

#[tokio::test]
async fn fetch_all_reports_non_success_status() {
    let router = Router::new().route(
        "/api/songs/all",
        get(|| async { AxumStatus::INTERNAL_SERVER_ERROR }),
    );
    let client = HttpSongClient::new(serve(router).await);

    let err = client.fetch_all().await.unwrap_err();

    assert!(matches!(err, ServiceError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn fetch_all_reports_malformed_payload() {
    let router = Router::new().route("/api/songs/all", get(|| async { "not json" }));
    let client = HttpSongClient::new(serve(router).await);

    let err = client.fetch_all().await.unwrap_err();

    assert!(matches!(err, ServiceError::Decode(_)));
}

#[tokio::test]
async fn fetch_all_reports_connection_failure() {
    let client = HttpSongClient::new("http://127.0.0.1:1");

    let err = client.fetch_all().await.unwrap_err();

    assert!(matches!(err, ServiceError::Http(_)));
}

#[tokio::test]
async fn update_song_puts_full_record_to_its_id() {
    let router = Router::new().route(
        "/api/songs/update/:id",
        put(|Path(id): Path<i64>, Json(mut song): Json<Song>| async move {
            assert_eq!(id, song.id);
            song.description = Some(format!("updated {id}"));
            Json(song)
        }),
    );
    let client = HttpSongClient::new(format!("{}/", serve(router).await));

    let sent = amazing_grace().with_favorite_toggled();
    let stored = client.update_song(&sent).await.unwrap();

    assert!(stored.is_favorite);
    assert_eq!(stored.title, "Amazing Grace");
    assert_eq!(stored.description.as_deref(), Some("updated 1"));
}

#[tokio::test]
async fn update_song_reports_rejection() {
    let router = Router::new().route(
        "/api/songs/update/:id",
        put(|| async { AxumStatus::BAD_REQUEST }),
    );
    let client = HttpSongClient::new(serve(router).await);

    let err = client.update_song(&amazing_grace()).await.unwrap_err();

    assert!(matches!(err, ServiceError::Status(s) if s == StatusCode::BAD_REQUEST));
}
