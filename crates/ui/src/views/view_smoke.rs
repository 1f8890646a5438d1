use services::{AdvanceOutcome, AnswerOutcome, SubmissionConfig};

use super::test_harness::{answer_now, enabled_submissions, setup_shell, view};

#[tokio::test(flavor = "current_thread")]
async fn landing_renders_course_grid_only() {
    let mut harness = setup_shell(SubmissionConfig::default(), None, |_| {});
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("GA4 Fundamentals"), "missing course in {html}");
    assert!(html.contains("Server-Side Tagging"), "missing course in {html}");
    assert!(html.contains("35 Min"), "missing duration in {html}");
    assert!(
        !html.contains("Q1 Measurement Roundup"),
        "archive content rendered while hidden: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn clock_renders_fixed_time() {
    let mut harness = setup_shell(SubmissionConfig::default(), None, |_| {});
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Tuesday, November 14, 2023"), "missing date in {html}");
    assert!(html.contains("22:13:20 UTC"), "missing time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn archive_lists_newest_issue_first() {
    let mut harness = setup_shell(SubmissionConfig::default(), None, |portal| {
        portal.switch_view(&view("view-archive"));
    });
    harness.rebuild();
    let html = harness.render();

    let newest = html.find("Q1 Measurement Roundup").expect("newest issue");
    let oldest = html
        .find("Preparing for Cookie Deprecation")
        .expect("oldest issue");
    assert!(newest < oldest, "archive out of order: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deep_link_opens_news_detail() {
    let mut harness = setup_shell(SubmissionConfig::default(), Some("view-detail-1"), |_| {});
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Q1 Measurement Roundup"), "missing title in {html}");
    assert!(html.contains("March 28, 2025"), "missing date in {html}");
    assert!(html.contains("Back to overview"), "missing detail nav in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_page_renders_meta_and_quiz_intro() {
    let mut harness = setup_shell(SubmissionConfig::default(), None, |portal| {
        portal.switch_view(&view("view-lesson-ga4-basics"));
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("15 Min"), "missing duration in {html}");
    assert!(html.contains("Updated: Mar 2025"), "missing updated in {html}");
    assert!(html.contains("Related lessons"), "missing related in {html}");
    assert!(html.contains("Start Quiz"), "missing quiz intro in {html}");
    assert!(!html.contains("Common pitfalls"), "empty warning panel shown: {html}");
    assert!(!html.contains("Question 1 of 3"), "progress shown in intro: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answered_question_shows_feedback_and_progress() {
    let mut harness = setup_shell(SubmissionConfig::default(), None, |portal| {
        portal.switch_view(&view("view-lesson-ga4-basics"));
        portal.start_quiz();
        assert!(matches!(portal.answer(1), AnswerOutcome::Accepted { .. }));
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("quiz-option correct"), "missing mark in {html}");
    assert!(html.contains("quiz-option dimmed"), "missing dimmed options in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn imperfect_attempt_lists_corrections_without_certificate() {
    let mut harness = setup_shell(SubmissionConfig::default(), None, |portal| {
        portal.switch_view(&view("view-lesson-ga4-basics"));
        portal.start_quiz();
        answer_now(portal, 1);
        answer_now(portal, 0);
        answer_now(portal, 2);
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("You scored 2 out of 3"), "missing score in {html}");
    assert!(html.contains("Correct answer: 30 minutes"), "missing correction in {html}");
    assert!(!html.contains("Certificate of Completion"), "certificate shown: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn perfect_attempt_presents_certificate() {
    let mut harness = setup_shell(SubmissionConfig::default(), None, |portal| {
        portal.switch_view(&view("view-lesson-ga4-basics"));
        portal.start_quiz();
        answer_now(portal, 1);
        answer_now(portal, 1);
        let AnswerOutcome::Accepted { pending, .. } = portal.answer(2) else {
            panic!("answer rejected");
        };
        let AdvanceOutcome::Completed(results) = portal.advance(pending) else {
            panic!("quiz did not complete");
        };
        let certificate = results.certificate.expect("certified");
        assert!(portal.present_certificate(certificate).is_some());
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("You scored 3 out of 3"), "missing score in {html}");
    assert!(html.contains("Certificate of Completion"), "missing modal in {html}");
    assert!(html.contains("certificate-lesson"), "missing lesson name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_quiz_is_hidden_and_warnings_shown() {
    let mut harness = setup_shell(SubmissionConfig::default(), None, |portal| {
        portal.switch_view(&view("view-lesson-consent-mode"));
    });
    harness.rebuild();
    let html = harness.render();

    assert!(!html.contains("Knowledge check"), "empty quiz rendered: {html}");
    assert!(html.contains("Common pitfalls"), "missing warning panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submission_controls_follow_configuration() {
    let prepare = |portal: &mut services::Portal| {
        portal.switch_view(&view("view-lesson-ga4-basics"));
    };

    let mut harness = setup_shell(SubmissionConfig::default(), None, prepare);
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Was this lesson helpful?"), "feedback without endpoint: {html}");
    assert!(!html.contains("Request access"), "interest without endpoint: {html}");

    let mut harness = setup_shell(enabled_submissions(), None, prepare);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Was this lesson helpful?"), "missing feedback form in {html}");
    assert!(html.contains("5/5"), "missing rating label in {html}");
    assert!(html.contains("GA4 Fundamentals workbook"), "missing upsell in {html}");
}
