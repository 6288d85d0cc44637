use spotopcli::types::{Artist, TopItems, Track};

// Trimmed-down capture of a /me/top/tracks response. The API sends far more
// fields than the application consumes; decoding must ignore the rest.
fn top_tracks_json() -> &'static str {
    r#"{
      "items": [
        {
          "album": {
            "album_type": "ALBUM",
            "total_tracks": 10,
            "href": "https://api.spotify.com/v1/albums/5vkqYmiPBYLaalcmjujWxK",
            "id": "5vkqYmiPBYLaalcmjujWxK",
            "images": [
              { "url": "https://i.scdn.co/image/ab67616d0000b273de3c04b5fc", "height": 640, "width": 640 },
              { "url": "https://i.scdn.co/image/ab67616d00001e02de3c04b5fc", "height": 300, "width": 300 }
            ],
            "name": "In Rainbows",
            "release_date": "2007-10-10",
            "release_date_precision": "day",
            "type": "album",
            "uri": "spotify:album:5vkqYmiPBYLaalcmjujWxK"
          },
          "artists": [
            {
              "href": "https://api.spotify.com/v1/artists/4Z8W4fKeB5YxbusRsdQVPb",
              "id": "4Z8W4fKeB5YxbusRsdQVPb",
              "name": "Radiohead",
              "type": "artist",
              "uri": "spotify:artist:4Z8W4fKeB5YxbusRsdQVPb"
            }
          ],
          "disc_number": 1,
          "duration_ms": 254920,
          "explicit": false,
          "href": "https://api.spotify.com/v1/tracks/6trNtQUoC8cznrYmiZbTfK",
          "id": "6trNtQUoC8cznrYmiZbTfK",
          "name": "Weird Fishes/ Arpeggi",
          "popularity": 73,
          "preview_url": null,
          "track_number": 4,
          "type": "track",
          "uri": "spotify:track:6trNtQUoC8cznrYmiZbTfK"
        },
        {
          "album": {
            "album_type": "SINGLE",
            "id": "2dIGnmEIy1WZIcZCFSj6i8",
            "images": [],
            "name": "Deceptacon",
            "release_date": "1999-10-25",
            "release_date_precision": "day"
          },
          "artists": [
            { "id": "2uH0RyPcX7fnCcT90HFDQX", "name": "Le Tigre" },
            { "id": "0X380XXQSNBYuleKzav5UO", "name": "JD Samson" }
          ],
          "duration_ms": 185000,
          "id": "1rfORG1HnlMnJcLYyYzAZX",
          "name": "Deceptacon",
          "popularity": 58
        }
      ],
      "total": 2,
      "limit": 5,
      "offset": 0,
      "href": "https://api.spotify.com/v1/me/top/tracks?limit=5",
      "next": null,
      "previous": null
    }"#
}

fn top_artists_json() -> &'static str {
    r#"{
      "items": [
        {
          "external_urls": { "spotify": "https://open.spotify.com/artist/4Z8W4fKeB5YxbusRsdQVPb" },
          "followers": { "href": null, "total": 11661446 },
          "genres": ["alternative rock", "art rock"],
          "id": "4Z8W4fKeB5YxbusRsdQVPb",
          "images": [
            { "url": "https://i.scdn.co/image/ab6761610000e5eba03696716c", "height": 640, "width": 640 }
          ],
          "name": "Radiohead",
          "popularity": 83,
          "type": "artist",
          "uri": "spotify:artist:4Z8W4fKeB5YxbusRsdQVPb"
        },
        {
          "id": "0X380XXQSNBYuleKzav5UO",
          "name": "Le Tigre",
          "popularity": 61
        }
      ],
      "total": 2,
      "limit": 5,
      "offset": 0
    }"#
}

#[test]
fn test_decode_top_tracks_response() {
    let decoded: TopItems<Track> = serde_json::from_str(top_tracks_json()).unwrap();
    assert_eq!(decoded.items.len(), 2);

    // Ranking order of the payload is preserved
    let first = &decoded.items[0];
    assert_eq!(first.id, "6trNtQUoC8cznrYmiZbTfK");
    assert_eq!(first.name, "Weird Fishes/ Arpeggi");
    assert_eq!(first.popularity, 73);
    assert_eq!(first.duration_ms, 254920);
    assert_eq!(first.album.name, "In Rainbows");
    assert_eq!(first.album.images.len(), 2);
    assert_eq!(
        first.album.images[0].url,
        "https://i.scdn.co/image/ab67616d0000b273de3c04b5fc"
    );
    assert_eq!(first.artists.len(), 1);
    assert_eq!(first.artists[0].name, "Radiohead");
}

#[test]
fn test_decode_track_with_multiple_artists_and_no_art() {
    let decoded: TopItems<Track> = serde_json::from_str(top_tracks_json()).unwrap();

    let second = &decoded.items[1];
    assert_eq!(second.artists.len(), 2);
    assert_eq!(second.artists[0].name, "Le Tigre");
    assert_eq!(second.artists[1].name, "JD Samson");
    assert!(second.album.images.is_empty());
}

#[test]
fn test_decode_top_artists_response() {
    let decoded: TopItems<Artist> = serde_json::from_str(top_artists_json()).unwrap();
    assert_eq!(decoded.items.len(), 2);
    assert_eq!(decoded.items[0].id, "4Z8W4fKeB5YxbusRsdQVPb");
    assert_eq!(decoded.items[0].name, "Radiohead");
    assert_eq!(decoded.items[1].name, "Le Tigre");
}

#[test]
fn test_decode_empty_item_list() {
    let decoded: TopItems<Track> =
        serde_json::from_str(r#"{ "items": [], "total": 0, "limit": 5 }"#).unwrap();
    assert!(decoded.items.is_empty());

    let decoded: TopItems<Artist> = serde_json::from_str(r#"{ "items": [] }"#).unwrap();
    assert!(decoded.items.is_empty());
}

#[test]
fn test_decode_rejects_missing_items_field() {
    // An error body has no items envelope; it must not decode silently
    let result: Result<TopItems<Track>, _> = serde_json::from_str(
        r#"{ "error": { "status": 401, "message": "The access token expired" } }"#,
    );
    assert!(result.is_err());
}
