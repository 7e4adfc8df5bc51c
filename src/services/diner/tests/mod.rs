#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use chrono::{Duration, Utc};
use tempfile::TempDir;

use super::{DinerError, DinerService, OtpChallenge, OTP_RESEND_WINDOW_SECS};
use crate::services::store::LocalStore;

fn service() -> (DinerService, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::at(dir.path().join("local-store.json"));
    (DinerService::new(store), dir)
}

#[test]
fn phone_normalization_strips_formatting() {
    let phone = DinerService::normalize_phone("(987) 654-3210").unwrap();
    assert_eq!(phone, "9876543210");

    assert!(matches!(
        DinerService::normalize_phone("12345"),
        Err(DinerError::InvalidPhone)
    ));
    assert!(matches!(
        DinerService::normalize_phone("abc"),
        Err(DinerError::InvalidPhone)
    ));
}

#[test]
fn challenge_verifies_its_own_code() {
    let (service, _dir) = service();
    let challenge = service.start_challenge("9876543210").unwrap();

    assert_eq!(challenge.code().len(), 4);
    assert!(challenge.verify(challenge.code()).is_ok());
    assert!(matches!(challenge.verify("12"), Err(DinerError::InvalidOtp)));
    assert!(matches!(challenge.verify("abcd"), Err(DinerError::InvalidOtp)));

    let wrong = if challenge.code() == "0000" { "0001" } else { "0000" };
    assert!(matches!(challenge.verify(wrong), Err(DinerError::OtpMismatch)));
}

#[test]
fn resend_is_gated_for_thirty_seconds() {
    let (service, _dir) = service();
    let fresh = service.start_challenge("9876543210").unwrap();

    let err = service.resend_challenge(&fresh).unwrap_err();
    assert!(matches!(err, DinerError::ResendNotReady { seconds_left } if seconds_left > 0));

    let stale = OtpChallenge {
        phone: fresh.phone().to_string(),
        code: fresh.code().to_string(),
        issued_at: Utc::now() - Duration::seconds(OTP_RESEND_WINDOW_SECS + 1),
    };
    assert!(stale.can_resend(Utc::now()));
    let reissued = service.resend_challenge(&stale).unwrap();
    assert_eq!(reissued.phone(), "9876543210");
}

#[test]
fn register_keeps_first_name_and_opens_session() {
    let (service, _dir) = service();
    let challenge = service.start_challenge("9876543210").unwrap();
    challenge.verify(challenge.code()).unwrap();

    let user = service.register(&challenge, "  Priya Sharma ").unwrap();
    assert_eq!(user.name, "Priya");
    assert_eq!(user.phone, "9876543210");

    let session = service.session().unwrap().unwrap();
    assert_eq!(session.phone, "9876543210");
}

#[test]
fn register_rejects_short_names() {
    let (service, _dir) = service();
    let challenge = service.start_challenge("9876543210").unwrap();
    assert!(matches!(
        service.register(&challenge, "P"),
        Err(DinerError::NameTooShort)
    ));
}

#[test]
fn login_requires_registration() {
    let (service, _dir) = service();
    assert!(matches!(
        service.login("9876543210"),
        Err(DinerError::UserNotFound)
    ));

    let challenge = service.start_challenge("9876543210").unwrap();
    service.register(&challenge, "Priya").unwrap();
    service.logout().unwrap();
    assert!(service.session().unwrap().is_none());

    let user = service.login("987-654-3210").unwrap();
    assert_eq!(user.name, "Priya");
}

#[test]
fn lists_require_a_session() {
    let (service, _dir) = service();
    assert!(matches!(service.add_favorite("dish-1"), Err(DinerError::NoSession)));
    assert!(matches!(service.eat_later(), Err(DinerError::NoSession)));

    let challenge = service.start_challenge("9876543210").unwrap();
    service.register(&challenge, "Priya").unwrap();

    service.add_favorite("dish-1").unwrap();
    service.add_favorite("dish-2").unwrap();
    service.remove_favorite("dish-1").unwrap();
    assert_eq!(service.favorites().unwrap(), vec!["dish-2".to_string()]);

    service.add_eat_later("dish-9").unwrap();
    assert_eq!(service.eat_later().unwrap(), vec!["dish-9".to_string()]);
}
