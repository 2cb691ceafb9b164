//! End-to-end page loads through the manager.

use notice_popup::{
    select_active, NoticeConfig, NotificationDescriptor, NotificationKind, Outcome, Prepared,
};
use notice_policy::SuppressReason;
use notice_store::{Clock, CookieJar, FixedClock, JarFile, ViewStore};
use notice_test_utils::{date, harness, harness_with, immediate_config, popup};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

const PAGE_N1: &str = r#"{
    "id": "n1",
    "enabled": true,
    "maxDisplays": 1,
    "expirationDate": "2099-01-01",
    "title": "Hi",
    "message": "**bold** and *italic*"
}"#;

fn page_n1() -> NotificationDescriptor {
    NotificationDescriptor::from_page_json(PAGE_N1).unwrap().unwrap()
}

#[tokio::test]
async fn first_visit_shows_and_records() {
    let h = harness(date(2026, 10, 16));
    let d = page_n1();

    assert!(h.manager.policy().should_show(&d.id, d.display_limit(), d.expiration_date.as_deref()));
    let outcome = h.manager.init(Some(&d)).await;
    assert_eq!(outcome, Some(Outcome::Presented { views: 1 }));

    let fragment = h.overlay.last().unwrap();
    assert!(fragment
        .html
        .contains("<div class=\"modal-body\"><strong>bold</strong> and <em>italic</em></div>"));
    assert!(fragment.html.contains(">Hi</h5>"));
    assert_eq!(h.manager.policy().view_count("n1"), 1);
}

#[tokio::test]
async fn second_visit_is_suppressed_without_increment() {
    let h = harness(date(2026, 10, 16));
    let d = page_n1();
    h.manager.init(Some(&d)).await;

    let outcome = h.manager.init(Some(&d)).await;
    assert_eq!(
        outcome,
        Some(Outcome::Suppressed(SuppressReason::LimitReached { views: 1, max: 1 }))
    );
    assert_eq!(h.overlay.len(), 1);
    assert_eq!(h.manager.policy().view_count("n1"), 1);
}

#[tokio::test]
async fn expired_yesterday_is_never_shown() {
    let today = date(2026, 10, 16);
    let h = harness(today);
    let yesterday = today.pred_opt().unwrap().format("%Y-%m-%d").to_string();
    let d = popup("Old", "gone").with_expiration(yesterday.clone());

    assert!(h.manager.policy().is_expired(Some(&yesterday)));
    let outcome = h.manager.present(&d).await;
    assert!(matches!(outcome, Outcome::Suppressed(SuppressReason::Expired { .. })));
    assert!(h.overlay.is_empty());
    assert!(h.jar.is_empty());
}

#[tokio::test]
async fn expired_regardless_of_count() {
    let h = harness(date(2026, 10, 16));
    let d = popup("", "").with_expiration("2026-10-15").with_max_displays(5);
    h.manager.policy().increment_view_count(&d.id);
    assert!(!h.manager.present(&d).await.is_presented());
    assert_eq!(h.manager.policy().view_count(&d.id), 1);
}

#[tokio::test]
async fn script_message_is_inert() {
    let h = harness(date(2026, 10, 16));
    let d = popup("<script>x</script>", "<script>alert(1)</script>");
    h.manager.present(&d).await;

    let html = h.overlay.last().unwrap().html;
    assert!(!html.contains("<script"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;</h5>"));
}

#[tokio::test]
async fn expiration_day_is_still_shown_until_midnight() {
    let h = harness(date(2026, 10, 16));
    let d = popup("", "").with_expiration("2026-10-16");
    assert!(h.manager.present(&d).await.is_presented());

    h.clock.advance_days(1);
    assert!(!h.manager.present(&d).await.is_presented());
    assert_eq!(h.manager.policy().view_count(&d.id), 1);
}

#[tokio::test]
async fn limit_of_three() {
    let h = harness(date(2026, 10, 16));
    let d = popup("", "").with_max_displays(3);
    let mut shown = 0;
    for _ in 0..5 {
        if h.manager.present(&d).await.is_presented() {
            shown += 1;
        }
    }
    assert_eq!(shown, 3);
    assert_eq!(h.manager.policy().view_count(&d.id), 3);
}

#[tokio::test]
async fn unlimited_keeps_counting() {
    let h = harness(date(2026, 10, 16));
    let mut d = popup("", "");
    d.max_displays = Some(0);
    for expected in 1..=4 {
        assert_eq!(h.manager.present(&d).await, Outcome::Presented { views: expected });
    }
}

#[tokio::test]
async fn disabled_and_missing_page_data() {
    let h = harness(date(2026, 10, 16));
    let d = NotificationDescriptor::from_page_json(r#"{"id":"n2"}"#).unwrap().unwrap();
    assert_eq!(
        h.manager.init(Some(&d)).await,
        Some(Outcome::Suppressed(SuppressReason::Disabled))
    );

    let none = NotificationDescriptor::from_page_json("null").unwrap();
    assert_eq!(h.manager.init(none.as_ref()).await, None);
    assert!(h.overlay.is_empty());
    assert!(h.jar.is_empty());
}

#[tokio::test]
async fn malformed_expiration_never_expires() {
    let h = harness(date(2026, 10, 16));
    let d = popup("", "").with_expiration("next friday");
    assert!(h.manager.present(&d).await.is_presented());
}

#[tokio::test]
async fn tampered_count_is_read_as_prefix() {
    let h = harness(date(2026, 10, 16));
    let d = popup("", "").with_max_displays(3);
    let name = h.manager.policy().cookie_name(&d.id);
    h.jar.set(notice_store::Cookie::persistent(&name, "2abc", h.clock.now(), 365));
    assert_eq!(h.manager.present(&d).await, Outcome::Presented { views: 3 });

    h.jar.set(notice_store::Cookie::persistent(&name, "garbage", h.clock.now(), 365));
    assert_eq!(h.manager.present(&d).await, Outcome::Presented { views: 1 });
}

#[tokio::test]
async fn record_outlives_a_year_only() {
    let h = harness(date(2026, 10, 16));
    let d = popup("", "").with_max_displays(1);
    assert!(h.manager.present(&d).await.is_presented());

    h.clock.advance_days(364);
    assert!(!h.manager.present(&d).await.is_presented());

    h.clock.advance_days(2);
    assert!(h.manager.present(&d).await.is_presented());
}

#[tokio::test]
async fn prepare_then_present_counts_twice() {
    let h = harness(date(2026, 10, 16));
    let d = popup("", "");
    assert!(matches!(h.manager.prepare(&d), Prepared::Ready { views: 1, .. }));
    assert_eq!(h.manager.present(&d).await, Outcome::Presented { views: 2 });
}

#[tokio::test(start_paused = true)]
async fn presentation_is_deferred() {
    let config = NoticeConfig::default().with_presentation_delay(Duration::from_millis(500));
    let h = Arc::new(harness_with(date(2026, 10, 16), config));
    let d = popup("", "");

    let task = {
        let h = Arc::clone(&h);
        let d = d.clone();
        tokio::spawn(async move { h.manager.present(&d).await })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(h.manager.policy().view_count(&d.id), 1);
    assert!(h.overlay.is_empty());

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(task.await.unwrap().is_presented());
    assert_eq!(h.overlay.len(), 1);
}

#[tokio::test]
async fn jar_survives_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let file = JarFile::new(dir.path().join("jar.json"));
    let d = page_n1();

    let clock = Arc::new(FixedClock::ymd(2026, 10, 16).unwrap());
    let first = notice_popup::NotificationManager::new(
        file.load(Arc::clone(&clock)).await.unwrap(),
        Arc::clone(&clock),
        notice_popup::RecordingOverlay::new(),
        immediate_config(),
    );
    assert!(first.present(&d).await.is_presented());
    file.save(first.policy().store()).await.unwrap();

    let reloaded: CookieJar<_> = file.load(Arc::clone(&clock)).await.unwrap();
    assert_eq!(reloaded.get("notification_views_n1").as_deref(), Some("1"));
    let second = notice_popup::NotificationManager::new(
        reloaded,
        clock,
        notice_popup::RecordingOverlay::new(),
        immediate_config(),
    );
    assert!(!second.present(&d).await.is_presented());
}

#[test]
fn active_popups_for_today() {
    let today = date(2026, 10, 16);
    let all = vec![
        popup("a", "").with_expiration("2026-12-01"),
        popup("b", "").with_kind(NotificationKind::Banner),
        popup("c", "").with_expiration("2026-10-01"),
    ];
    let active = select_active(&all, NotificationKind::Popup, today);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "a");
}
