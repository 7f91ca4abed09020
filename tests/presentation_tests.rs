//! Flash notices for real lifecycle results

mod common;

use common::*;
use survey_core::presentation::{notice_for, NoticeLevel, Operation, Redirect};
use survey_core::{InMemorySurveyStore, SurveyLifecycle};
use uuid::Uuid;

#[tokio::test]
async fn test_run_notices() {
    let lifecycle = SurveyLifecycle::new(InMemorySurveyStore::new());
    let uuid = SurveyBuilder::new().create(&lifecycle).await.uuid.to_string();

    let first = notice_for(Operation::Run, &uuid, &lifecycle.run(&uuid, OWNER).await);
    assert_eq!(first.level, NoticeLevel::Success);
    assert_eq!(first.message, format!("Survey \"{uuid}\" is now running."));
    assert_eq!(first.redirect, Redirect::EditSurvey(uuid.clone()));

    let second = notice_for(Operation::Run, &uuid, &lifecycle.run(&uuid, OWNER).await);
    assert_eq!(second.level, NoticeLevel::Warning);
    assert_eq!(second.message, format!("Survey \"{uuid}\" already running."));
    assert_eq!(second.redirect, Redirect::EditSurvey(uuid.clone()));
}

#[tokio::test]
async fn test_pause_draft_notice() {
    let lifecycle = SurveyLifecycle::new(InMemorySurveyStore::new());
    let uuid = SurveyBuilder::new().create(&lifecycle).await.uuid.to_string();

    let notice = notice_for(Operation::Pause, &uuid, &lifecycle.pause(&uuid, OWNER).await);
    assert_eq!(
        notice.message,
        format!("Survey \"{uuid}\" invalid status, it should be \"ready\".")
    );
    assert_eq!(notice.redirect, Redirect::EditSurvey(uuid));
}

#[tokio::test]
async fn test_foreign_survey_notice_matches_missing() {
    let lifecycle = SurveyLifecycle::new(InMemorySurveyStore::new());
    let uuid = SurveyBuilder::new().create(&lifecycle).await.uuid.to_string();
    let missing = Uuid::new_v4().to_string();

    let foreign = notice_for(
        Operation::Delete,
        &uuid,
        &lifecycle.delete(&uuid, OTHER_OWNER).await,
    );
    let absent = notice_for(
        Operation::Delete,
        &missing,
        &lifecycle.delete(&missing, OTHER_OWNER).await,
    );

    assert_eq!(foreign.level, absent.level);
    assert_eq!(foreign.redirect, Redirect::Dashboard);
    assert_eq!(absent.redirect, Redirect::Dashboard);
    assert_eq!(foreign.message, format!("Survey \"{uuid}\" not found."));
}

#[tokio::test]
async fn test_create_notices() {
    let lifecycle = SurveyLifecycle::new(InMemorySurveyStore::new());

    let result = lifecycle.create(OWNER, &payload("Onboarding", None)).await;
    let uuid = result.as_ref().unwrap().uuid.to_string();
    let notice = notice_for(Operation::Create, &uuid, &result);
    assert_eq!(notice.message, format!("Survey {uuid} successfully created!"));
    assert_eq!(notice.redirect, Redirect::EditSurvey(uuid));

    let rejected = lifecycle.create(OWNER, &payload("No", None)).await;
    let notice = notice_for(Operation::Create, "", &rejected);
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "The name must be at least 3 characters.");
    assert_eq!(notice.redirect, Redirect::Dashboard);
}
