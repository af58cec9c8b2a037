mod test_utils;

use mockall::{mock, predicate::eq};
use portfolio_content::{
    constants::BUNDLE_FILE_NAME,
    entities::{
        blog_post::BlogPost,
        bundle::ContentBundle,
        project::Project,
        schema::{ContentKind, ContentRecord},
        OptionField, Timestamp,
    },
    errors::AppError,
    export::bundle_writer::export_bundle,
    repositories::content_source::{ContentSource, JsonFileSource},
    use_cases::{catalog::CatalogHandler, stamp::{Stamper, SystemStamper}},
};
use serde_json::{json, Value};
use test_utils::*;

mock! {
    pub Source {}

    #[async_trait::async_trait]
    impl ContentSource for Source {
        async fn read_collection(&self, kind: ContentKind) -> Result<Option<String>, AppError>;
    }
}

fn catalog_for(dir: &TestContentDir) -> CatalogHandler<JsonFileSource, SequenceStamper> {
    CatalogHandler::new(JsonFileSource::new(dir.path()), SequenceStamper::default())
}

#[actix_rt::test]
async fn loads_all_collections_in_file_order() {
    let dir = TestContentDir::new();
    let mut second = sample_project_json();
    second["id"] = json!("p2");
    second["title"] = json!("Second");
    dir.write_collection(ContentKind::Project, &json!([sample_project_json(), second]));
    dir.write_collection(ContentKind::BlogPost, &json!([sample_blog_post_json()]));
    dir.write_collection(ContentKind::Publication, &json!([sample_publication_json()]));

    let bundle = catalog_for(&dir).load().await.unwrap();

    let ids: Vec<&str> = bundle.projects.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
    assert_eq!(bundle.blog_posts, vec![sample_blog_post()]);
    assert_eq!(bundle.publications, vec![sample_publication()]);
}

#[actix_rt::test]
async fn missing_collection_is_empty() {
    let dir = TestContentDir::new();
    dir.write_collection(ContentKind::Project, &json!([sample_project_json()]));

    let bundle = catalog_for(&dir).load().await.unwrap();

    assert_eq!(bundle.projects.len(), 1);
    assert!(bundle.blog_posts.is_empty());
    assert!(bundle.publications.is_empty());
}

#[actix_rt::test]
async fn drafts_are_stamped_with_system_fields() {
    let dir = TestContentDir::new();
    let draft = serde_json::to_value(draft_project("Draft tool")).unwrap();
    dir.write_collection(ContentKind::Project, &json!([sample_project_json(), draft]));
    let post = serde_json::to_value(draft_blog_post("draft-post")).unwrap();
    dir.write_collection(ContentKind::BlogPost, &json!([post]));

    let catalog = catalog_for(&dir);
    let projects: Vec<Project> = catalog.load_collection().await.unwrap();
    let posts: Vec<BlogPost> = catalog.load_collection().await.unwrap();

    assert_eq!(projects[0], sample_project());
    assert_eq!(projects[1].id, "id-1");
    assert_eq!(projects[1].title, "Draft tool");
    assert_eq!(projects[1].created_at, Timestamp::Date(fixed_instant()));
    assert_eq!(projects[1].github_url, OptionField::Absent);
    assert_eq!(projects[1].live_url, OptionField::Null);

    assert_eq!(posts[0].id, "id-2");
    assert_eq!(posts[0].published_at, Timestamp::Date(fixed_instant()));
    assert_eq!(posts[0].created_at, posts[0].published_at);
}

#[actix_rt::test]
async fn duplicate_ids_are_a_conflict() {
    let dir = TestContentDir::new();
    dir.write_collection(
        ContentKind::Project,
        &json!([sample_project_json(), sample_project_json()]),
    );

    let err = catalog_for(&dir).load().await.unwrap_err();

    match err {
        AppError::Conflict(msg) => assert!(msg.contains("'p1'"), "{msg}"),
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[actix_rt::test]
async fn same_id_in_different_collections_is_allowed() {
    let dir = TestContentDir::new();
    let mut post = sample_blog_post_json();
    post["id"] = json!("p1");
    dir.write_collection(ContentKind::Project, &json!([sample_project_json()]));
    dir.write_collection(ContentKind::BlogPost, &json!([post]));

    assert!(catalog_for(&dir).load().await.is_ok());
}

#[actix_rt::test]
async fn malformed_file_names_the_collection() {
    let dir = TestContentDir::new();
    dir.write_raw(ContentKind::Publication, "{ not json");

    let err = catalog_for(&dir).load().await.unwrap_err();

    match err {
        AppError::InvalidContent(msg) => assert!(msg.starts_with("publications.json"), "{msg}"),
        other => panic!("expected invalid content, got {other:?}"),
    }
}

#[actix_rt::test]
async fn bad_entry_reports_its_index() {
    let dir = TestContentDir::new();
    let mut broken = sample_blog_post_json();
    broken.as_object_mut().unwrap().remove("slug");
    dir.write_collection(ContentKind::BlogPost, &json!([sample_blog_post_json(), broken]));

    let err = catalog_for(&dir).load().await.unwrap_err();

    match err {
        AppError::InvalidContent(msg) => {
            assert!(msg.contains("blog-posts.json entry 1"), "{msg}");
            assert!(msg.contains("slug"), "{msg}");
        }
        other => panic!("expected invalid content, got {other:?}"),
    }
}

#[actix_rt::test]
async fn reads_each_collection_once_from_the_source() {
    let mut source = MockSource::new();
    source
        .expect_read_collection()
        .with(eq(ContentKind::Project))
        .times(1)
        .returning(|_| Ok(Some(json!([sample_project_json()]).to_string())));
    source
        .expect_read_collection()
        .with(eq(ContentKind::BlogPost))
        .times(1)
        .returning(|_| Ok(None));
    source
        .expect_read_collection()
        .with(eq(ContentKind::Publication))
        .times(1)
        .returning(|_| Ok(Some("[]".to_string())));

    let bundle = CatalogHandler::new(source, SequenceStamper::default())
        .load()
        .await
        .unwrap();

    assert_eq!(bundle.counts().projects, 1);
    assert_eq!(bundle.counts().blog_posts, 0);
    assert_eq!(bundle.counts().publications, 0);
}

#[actix_rt::test]
async fn source_errors_propagate() {
    let mut source = MockSource::new();
    source
        .expect_read_collection()
        .returning(|_| Err(AppError::Io("disk on fire".into())));

    let err = CatalogHandler::new(source, SequenceStamper::default())
        .load()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn system_stamper_assigns_uuid_and_millisecond_time() {
    let stamper = SystemStamper;
    let project = stamper.stamp(draft_project("Stamped"));

    assert!(uuid::Uuid::parse_str(&project.id).is_ok());
    let created = project.created_at.to_datetime().unwrap();
    assert_eq!(created.timestamp_subsec_nanos() % 1_000_000, 0);

    let back: Project = serde_json::from_value(serde_json::to_value(&project).unwrap()).unwrap();
    assert_eq!(back, project);
}

// ───── Export ───────────────────────────────────────────────────────

#[actix_rt::test]
async fn export_writes_bundle_and_collection_files() {
    let out = TestContentDir::new();
    let out_dir = out.path().join("dist/public");
    let bundle = ContentBundle {
        projects: vec![sample_project()],
        blog_posts: vec![sample_blog_post()],
        publications: vec![],
    };

    let written = export_bundle(&bundle, &out_dir, true).await.unwrap();

    assert_eq!(written.len(), 4);
    let combined: ContentBundle =
        serde_json::from_slice(&std::fs::read(out_dir.join(BUNDLE_FILE_NAME)).unwrap()).unwrap();
    assert_eq!(combined, bundle);

    let projects: Value =
        serde_json::from_slice(&std::fs::read(out_dir.join("projects.json")).unwrap()).unwrap();
    assert_eq!(projects[0]["id"], json!("p1"));
    let publications: Value =
        serde_json::from_slice(&std::fs::read(out_dir.join("publications.json")).unwrap()).unwrap();
    assert_eq!(publications, json!([]));
}

#[actix_rt::test]
async fn export_empties_the_output_directory_when_asked() {
    let out = TestContentDir::new();
    let out_dir = out.path().join("public");
    std::fs::create_dir_all(&out_dir).unwrap();
    std::fs::write(out_dir.join("stale.js"), "old").unwrap();

    export_bundle(&ContentBundle::default(), &out_dir, false).await.unwrap();
    assert!(out_dir.join("stale.js").exists());

    export_bundle(&ContentBundle::default(), &out_dir, true).await.unwrap();
    assert!(!out_dir.join("stale.js").exists());
    assert!(out_dir.join(BUNDLE_FILE_NAME).exists());
}
