mod common;

use common::{create_test_pool, seed_quizzes};
use quizgroups::db::{self, DbError};

#[tokio::test]
async fn group_create_and_find() {
    let pool = create_test_pool().await;

    let group = db::group::create(&pool, "Animals").await.unwrap();
    assert!(group.id > 0);
    assert_eq!(group.name, "Animals");

    let found = db::group::find(&pool, group.id).await.unwrap();
    assert_eq!(found, group);

    let all = db::group::all(&pool).await.unwrap();
    assert_eq!(all, vec![group]);
}

#[tokio::test]
async fn group_create_rejects_empty_name() {
    let pool = create_test_pool().await;

    let err = db::group::create(&pool, "   ").await.unwrap_err();
    let DbError::Validation(errors) = err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert_eq!(errors.len(), 1);

    // Nothing was persisted.
    assert!(db::group::all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn group_find_missing_is_not_found() {
    let pool = create_test_pool().await;

    let err = db::group::find(&pool, 42).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound(_)));
    assert!(err.to_string().contains("id=42"));
}

#[tokio::test]
async fn group_update_replaces_association_set_exactly() {
    let pool = create_test_pool().await;
    let ids = seed_quizzes(
        &pool,
        &[("q1", "a1"), ("q2", "a2"), ("q3", "a3"), ("q4", "a4"), ("q5", "a5")],
    )
    .await;
    let group = db::group::create(&pool, "Geography").await.unwrap();

    db::group::update(&pool, group.id, "Geography", &[ids[0], ids[1]])
        .await
        .unwrap();
    assert_eq!(
        db::group::quiz_ids(&pool, group.id).await.unwrap(),
        vec![ids[0], ids[1]]
    );

    // Full replace: prior associations are gone, regardless of overlap.
    db::group::update(&pool, group.id, "Geography", &[ids[1], ids[4]])
        .await
        .unwrap();
    assert_eq!(
        db::group::quiz_ids(&pool, group.id).await.unwrap(),
        vec![ids[1], ids[4]]
    );

    db::group::update(&pool, group.id, "Geography", &[])
        .await
        .unwrap();
    assert!(db::group::quiz_ids(&pool, group.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn group_update_validation_failure_changes_nothing() {
    let pool = create_test_pool().await;
    let ids = seed_quizzes(&pool, &[("q1", "a1")]).await;
    let group = db::group::create(&pool, "History").await.unwrap();
    db::group::update(&pool, group.id, "History", &ids)
        .await
        .unwrap();

    let err = db::group::update(&pool, group.id, "", &[]).await.unwrap_err();
    assert!(matches!(err, DbError::Validation(_)));

    let found = db::group::find(&pool, group.id).await.unwrap();
    assert_eq!(found.name, "History");
    assert_eq!(db::group::quiz_ids(&pool, group.id).await.unwrap(), ids);
}

#[tokio::test]
async fn group_update_missing_is_not_found() {
    let pool = create_test_pool().await;

    let err = db::group::update(&pool, 42, "Name", &[]).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound(_)));
}

#[tokio::test]
async fn group_delete_removes_row_and_associations() {
    let pool = create_test_pool().await;
    let ids = seed_quizzes(&pool, &[("q1", "a1"), ("q2", "a2")]).await;
    let group = db::group::create(&pool, "Science").await.unwrap();
    db::group::update(&pool, group.id, "Science", &ids)
        .await
        .unwrap();

    db::group::delete(&pool, group.id).await.unwrap();

    let err = db::group::find(&pool, group.id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound(_)));
    assert!(db::group::quiz_ids(&pool, group.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn quiz_count_and_find() {
    let pool = create_test_pool().await;
    assert_eq!(db::quiz::count(&pool).await.unwrap(), 0);

    let ids = seed_quizzes(&pool, &[("q1", "a1"), ("q2", "a2")]).await;
    assert_eq!(db::quiz::count(&pool).await.unwrap(), 2);

    let quiz = db::quiz::find(&pool, ids[0]).await.unwrap();
    assert_eq!(quiz.question, "q1");

    let err = db::quiz::find(&pool, 999).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound(_)));
    assert!(db::quiz::find_opt(&pool, 999).await.unwrap().is_none());
}

#[tokio::test]
async fn pick_excluding_skips_resolved_ids() {
    let pool = create_test_pool().await;
    let ids = seed_quizzes(&pool, &[("q1", "a1"), ("q2", "a2"), ("q3", "a3")]).await;

    // Excluding the middle quiz, offsets walk q1 then q3.
    let first = db::quiz::pick_excluding(&pool, &[ids[1]], 0).await.unwrap();
    assert_eq!(first.unwrap().id, ids[0]);
    let second = db::quiz::pick_excluding(&pool, &[ids[1]], 1).await.unwrap();
    assert_eq!(second.unwrap().id, ids[2]);

    // Offset past the filtered set yields nothing.
    assert!(db::quiz::pick_excluding(&pool, &[ids[1]], 2)
        .await
        .unwrap()
        .is_none());

    // Everything excluded yields nothing.
    assert!(db::quiz::pick_excluding(&pool, &ids, 0)
        .await
        .unwrap()
        .is_none());

    // Nothing excluded works without a filter clause.
    let any = db::quiz::pick_excluding(&pool, &[], 2).await.unwrap();
    assert_eq!(any.unwrap().id, ids[2]);
}
