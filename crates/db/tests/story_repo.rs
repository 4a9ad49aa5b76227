//! Story repository tests against the in-process document store.

use assert_matches::assert_matches;
use magicbook_core::story::{build_story, StoryRequest, Variant};
use magicbook_core::types::DocumentId;
use magicbook_db::repositories::{StoryRepo, STORY_COLLECTION};
use magicbook_db::{DocumentFilter, DocumentStore, MemoryDocumentStore, StoreError};

fn request(name: &str, theme: &str) -> StoryRequest {
    StoryRequest {
        child_name: name.to_string(),
        age: 7,
        theme: theme.to_string(),
        tone: None,
        language: None,
        pages: 8,
    }
}

#[tokio::test]
async fn create_then_find_by_id_returns_same_story() {
    let store = MemoryDocumentStore::new();
    let story = build_story(&request("Noé", "espace"), Variant::Full);

    let id = StoryRepo::create(&store, &story).await.unwrap();
    let found = StoryRepo::find_by_id(&store, id).await.unwrap().unwrap();

    assert_eq!(found.id, id);
    assert_eq!(found.story, story);
}

#[tokio::test]
async fn find_by_unknown_id_is_none() {
    let store = MemoryDocumentStore::new();
    StoryRepo::create(&store, &build_story(&request("Noé", "espace"), Variant::Preview))
        .await
        .unwrap();

    let found = StoryRepo::find_by_id(&store, DocumentId::generate()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn list_is_bounded_by_limit() {
    let store = MemoryDocumentStore::new();
    for name in ["A", "B", "C"] {
        StoryRepo::create(&store, &build_story(&request(name, "jungle"), Variant::Preview))
            .await
            .unwrap();
    }

    let listed = StoryRepo::list(&store, 2).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|r| r.story.child_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[tokio::test]
async fn stories_land_in_story_collection_as_flat_documents() {
    let store = MemoryDocumentStore::new();
    let story = build_story(&request("Léa", "pirates"), Variant::Preview);
    StoryRepo::create(&store, &story).await.unwrap();

    let raw = store
        .find(STORY_COLLECTION, &DocumentFilter::all().with_field("variant", "preview"), 10)
        .await
        .unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].body["price_cents"], 1000);
    assert_eq!(raw[0].body["pages_data"].as_array().unwrap().len(), 3);
    assert!(raw[0].body.get("id").is_none());
}

#[tokio::test]
async fn undecodable_document_surfaces_codec_error() {
    let store = MemoryDocumentStore::new();
    let id = store
        .insert(STORY_COLLECTION, serde_json::json!({"title": "broken"}))
        .await
        .unwrap();

    let err = StoryRepo::find_by_id(&store, id).await.unwrap_err();
    assert_matches!(err, StoreError::Codec(_));
}
