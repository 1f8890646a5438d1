use portal_core::model::{ViewCategory, ViewId};
use storage::{CatalogError, LessonCatalog, PortalManifest};

#[tokio::test]
async fn loads_manifest_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.json");
    tokio::fs::write(
        &path,
        r#"{
            "views": [
                {"id": "view-archive", "category": "listing"},
                {"id": "view-detail-1", "category": "detail"}
            ],
            "news": [
                {"target": "view-detail-1", "title": "Roundup", "date": "2025-01-31"}
            ]
        }"#,
    )
    .await
    .unwrap();

    let manifest = PortalManifest::load(&path).await.unwrap();
    assert_eq!(manifest.views()[1].category, ViewCategory::Detail);
    assert_eq!(manifest.news().len(), 1);
    assert!(manifest.catalog().lesson_ids().is_empty());
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PortalManifest::load(dir.path().join("absent.json"))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn sample_lessons_are_reachable_by_view_id() {
    let manifest = PortalManifest::sample().unwrap();
    let id = ViewId::new("view-lesson-ga4-basics").unwrap();
    let lesson = manifest.catalog().lesson(&id).unwrap();
    assert_eq!(lesson.playable_quiz().unwrap().len(), 3);

    let consent = ViewId::new("view-lesson-consent-mode").unwrap();
    let consent = manifest.catalog().lesson(&consent).unwrap();
    assert!(consent.playable_quiz().is_none());
    assert!(consent.has_warnings());
}
