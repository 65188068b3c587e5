use chrono::NaiveDate;
use marquee_model::{ItemId, MediaKind, ModelError, decode_items, decode_listing};

const TRENDING_PAGE: &str = r#"{
  "page": 1,
  "results": [
    {
      "id": 693134,
      "media_type": "movie",
      "title": "Dune: Part Two",
      "vote_average": 8.2,
      "vote_count": 5120,
      "poster_path": "/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg",
      "release_date": "2024-02-27"
    },
    {
      "id": 1396,
      "media_type": "tv",
      "name": "Breaking Bad",
      "vote_average": 8.9,
      "vote_count": 14000,
      "poster_path": null,
      "first_air_date": "2008-01-20"
    },
    {
      "id": 17419,
      "media_type": "person",
      "name": "Bryan Cranston"
    },
    {
      "media_type": "movie",
      "title": "No identifier"
    },
    {
      "id": "not-a-number",
      "title": "Broken"
    },
    {
      "id": 42,
      "title": "Upcoming",
      "vote_average": 0,
      "vote_count": 0,
      "poster_path": "",
      "release_date": ""
    }
  ],
  "total_pages": 500,
  "total_results": 10000
}"#;

#[test]
fn trending_page_keeps_browsable_media() {
    let listing = decode_listing(TRENDING_PAGE, MediaKind::Movie).unwrap();

    assert_eq!(listing.page, Some(1));
    assert_eq!(listing.total_pages, Some(500));
    assert_eq!(listing.total_results, Some(10000));
    assert_eq!(listing.items.len(), 3);
    assert_eq!(listing.skipped, 3);

    let dune = &listing.items[0];
    assert_eq!(dune.kind(), MediaKind::Movie);
    assert_eq!(dune.title(), "Dune: Part Two");
    assert_eq!(dune.rating(), Some(8.2));
    assert_eq!(
        dune.image().map(|p| p.as_str()),
        Some("/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg")
    );
    assert_eq!(dune.date(), NaiveDate::from_ymd_opt(2024, 2, 27));

    let breaking_bad = &listing.items[1];
    assert_eq!(breaking_bad.kind(), MediaKind::Tv);
    assert_eq!(breaking_bad.title(), "Breaking Bad");
    assert!(breaking_bad.image().is_none());
    assert_eq!(breaking_bad.year(), Some(2008));
    assert_eq!(breaking_bad.id(), ItemId::from_catalog(MediaKind::Tv, 1396));
}

#[test]
fn sparse_record_degrades_to_absent_fields() {
    let items = decode_items(TRENDING_PAGE, MediaKind::Movie).unwrap();
    let upcoming = items.last().unwrap();

    assert_eq!(upcoming.catalog_id(), 42);
    assert_eq!(upcoming.kind(), MediaKind::Movie);
    assert_eq!(upcoming.rating(), None);
    assert!(upcoming.image().is_none());
    assert!(upcoming.date().is_none());
}

#[test]
fn bare_array_uses_default_kind() {
    let json = r#"[{ "id": 1399, "name": "Game of Thrones" }]"#;
    let items = decode_items(json, MediaKind::Tv).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind(), MediaKind::Tv);
    assert_eq!(items[0].title(), "Game of Thrones");
}

#[test]
fn empty_results_are_not_an_error() {
    let listing = decode_listing(r#"{ "page": 3, "results": [] }"#, MediaKind::Movie)
        .unwrap();
    assert!(listing.items.is_empty());
    assert_eq!(listing.skipped, 0);
}

#[test]
fn non_catalog_json_is_rejected() {
    assert!(matches!(
        decode_listing("{ \"status_code\": 7 }", MediaKind::Movie),
        Err(ModelError::Json(_))
    ));
    assert!(matches!(
        decode_listing("<html>", MediaKind::Movie),
        Err(ModelError::Json(_))
    ));
}

#[test]
fn mistyped_optional_fields_keep_the_record() {
    let json = r#"[
      {"id": 5, "title": "Keep me", "vote_average": "7.5", "poster_path": "/k.jpg"},
      {"id": 6, "title": "Also", "release_date": 20240101, "vote_average": 6.1},
      {"id": 7, "title": "Poster", "poster_path": {"w342": "/p.jpg"}, "vote_count": "many"}
    ]"#;
    let listing = decode_listing(json, MediaKind::Tv).unwrap();
    assert_eq!(listing.skipped, 0);
    assert_eq!(listing.items.len(), 3);

    let keep = &listing.items[0];
    assert_eq!(keep.title(), "Keep me");
    assert_eq!(keep.rating(), None);
    assert_eq!(keep.image().map(|p| p.as_str()), Some("/k.jpg"));

    let also = &listing.items[1];
    assert_eq!(also.date(), None);
    assert_eq!(also.rating(), Some(6.1));

    let poster = &listing.items[2];
    assert!(poster.image().is_none());
    assert_eq!(poster.kind(), MediaKind::Tv);
}
