//! Diner accounts, favorites, and eat-later lists.
//!
//! Registration and login are local-first, mirroring the diner surface:
//! a phone number plus a 4-digit OTP challenge, with accounts and lists
//! persisted through the [`LocalStore`]. There is no SMS backend here;
//! the issued code is handed back to the caller for delivery.

mod error;

#[cfg(test)]
mod tests;

pub use error::DinerError;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::services::store::{DinerUser, LocalStore};

/// How long a diner must wait before requesting a fresh OTP.
pub const OTP_RESEND_WINDOW_SECS: i64 = 30;

/// Minimum name length accepted at registration.
pub const MIN_NAME_LEN: usize = 2;

/// An issued OTP challenge, parked until the diner verifies it.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    phone: String,
    code: String,
    issued_at: DateTime<Utc>,
}

impl OtpChallenge {
    /// The phone number this challenge was issued for.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The issued code. Callers deliver this out of band.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Checks an OTP input against this challenge.
    ///
    /// # Errors
    /// Returns [`DinerError::InvalidOtp`] for inputs that are not 4
    /// digits and [`DinerError::OtpMismatch`] for wrong codes.
    pub fn verify(&self, input: &str) -> Result<(), DinerError> {
        if input.len() != 4 || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(DinerError::InvalidOtp);
        }
        if input != self.code {
            return Err(DinerError::OtpMismatch);
        }
        Ok(())
    }

    /// Seconds left on the resend timer at `now`, zero when elapsed.
    pub fn seconds_until_resend(&self, now: DateTime<Utc>) -> i64 {
        let elapsed = (now - self.issued_at).num_seconds();
        (OTP_RESEND_WINDOW_SECS - elapsed).max(0)
    }

    /// Whether resending is allowed at `now`.
    pub fn can_resend(&self, now: DateTime<Utc>) -> bool {
        self.seconds_until_resend(now) == 0
    }
}

/// Diner account service over the local store.
pub struct DinerService {
    store: LocalStore,
}

impl DinerService {
    /// Builds the service over a store.
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Normalizes a typed phone number: strips non-digits, caps at 10,
    /// and requires exactly 10 digits.
    ///
    /// # Errors
    /// Returns [`DinerError::InvalidPhone`] for anything shorter.
    pub fn normalize_phone(input: &str) -> Result<String, DinerError> {
        let digits: String = input.chars().filter(char::is_ascii_digit).take(10).collect();
        if digits.len() != 10 {
            return Err(DinerError::InvalidPhone);
        }
        Ok(digits)
    }

    /// Issues an OTP challenge for a phone number.
    ///
    /// # Errors
    /// Returns [`DinerError::InvalidPhone`] for a bad number.
    pub fn start_challenge(&self, phone: &str) -> Result<OtpChallenge, DinerError> {
        let phone = Self::normalize_phone(phone)?;
        Ok(Self::issue(phone, Utc::now()))
    }

    /// Re-issues a challenge once the resend window has elapsed.
    ///
    /// # Errors
    /// Returns [`DinerError::ResendNotReady`] when called too early.
    pub fn resend_challenge(&self, previous: &OtpChallenge) -> Result<OtpChallenge, DinerError> {
        let now = Utc::now();
        let seconds_left = previous.seconds_until_resend(now);
        if seconds_left > 0 {
            return Err(DinerError::ResendNotReady { seconds_left });
        }
        Ok(Self::issue(previous.phone.clone(), now))
    }

    /// Completes registration after a verified challenge.
    ///
    /// Stores the first name only, the way the diner surface displays
    /// it, and logs the diner in.
    ///
    /// # Errors
    /// Returns [`DinerError::NameTooShort`] for names under
    /// [`MIN_NAME_LEN`] characters, or a store error.
    pub fn register(&self, challenge: &OtpChallenge, name: &str) -> Result<DinerUser, DinerError> {
        let trimmed = name.trim();
        if trimmed.chars().count() < MIN_NAME_LEN {
            return Err(DinerError::NameTooShort);
        }
        let first = trimmed.split_whitespace().next().unwrap_or(trimmed);

        let user = DinerUser {
            phone: challenge.phone.clone(),
            name: first.to_string(),
        };
        self.store.add_user(user.clone())?;
        self.store.set_session_user(Some(user.clone()))?;
        info!(phone = %user.phone, "Diner registered");
        Ok(user)
    }

    /// Logs a known diner in by phone.
    ///
    /// # Errors
    /// Returns [`DinerError::UserNotFound`] for unknown numbers, or a
    /// store error.
    pub fn login(&self, phone: &str) -> Result<DinerUser, DinerError> {
        let phone = Self::normalize_phone(phone)?;
        let user = self.store.find_user(&phone)?.ok_or(DinerError::UserNotFound)?;
        self.store.set_session_user(Some(user.clone()))?;
        Ok(user)
    }

    /// Logs the current diner out.
    ///
    /// # Errors
    /// Returns a store error if the session cannot be cleared.
    pub fn logout(&self) -> Result<(), DinerError> {
        self.store.set_session_user(None)?;
        Ok(())
    }

    /// The logged-in diner, if any.
    ///
    /// # Errors
    /// Returns a store error if the session cannot be read.
    pub fn session(&self) -> Result<Option<DinerUser>, DinerError> {
        Ok(self.store.session_user()?)
    }

    /// Adds a dish to the logged-in diner's favorites.
    ///
    /// # Errors
    /// Returns [`DinerError::NoSession`] when nobody is logged in.
    pub fn add_favorite(&self, dish_id: &str) -> Result<(), DinerError> {
        let user = self.require_session()?;
        self.store.add_favorite(&user.phone, dish_id)?;
        Ok(())
    }

    /// Removes a dish from the logged-in diner's favorites.
    ///
    /// # Errors
    /// Returns [`DinerError::NoSession`] when nobody is logged in.
    pub fn remove_favorite(&self, dish_id: &str) -> Result<(), DinerError> {
        let user = self.require_session()?;
        self.store.remove_favorite(&user.phone, dish_id)?;
        Ok(())
    }

    /// The logged-in diner's favorite dish ids.
    ///
    /// # Errors
    /// Returns [`DinerError::NoSession`] when nobody is logged in.
    pub fn favorites(&self) -> Result<Vec<String>, DinerError> {
        let user = self.require_session()?;
        Ok(self.store.favorites(&user.phone)?)
    }

    /// Adds a dish to the logged-in diner's eat-later list.
    ///
    /// # Errors
    /// Returns [`DinerError::NoSession`] when nobody is logged in.
    pub fn add_eat_later(&self, dish_id: &str) -> Result<(), DinerError> {
        let user = self.require_session()?;
        self.store.add_eat_later(&user.phone, dish_id)?;
        Ok(())
    }

    /// Removes a dish from the logged-in diner's eat-later list.
    ///
    /// # Errors
    /// Returns [`DinerError::NoSession`] when nobody is logged in.
    pub fn remove_eat_later(&self, dish_id: &str) -> Result<(), DinerError> {
        let user = self.require_session()?;
        self.store.remove_eat_later(&user.phone, dish_id)?;
        Ok(())
    }

    /// The logged-in diner's eat-later dish ids.
    ///
    /// # Errors
    /// Returns [`DinerError::NoSession`] when nobody is logged in.
    pub fn eat_later(&self) -> Result<Vec<String>, DinerError> {
        let user = self.require_session()?;
        Ok(self.store.eat_later(&user.phone)?)
    }

    /// The underlying store.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    fn require_session(&self) -> Result<DinerUser, DinerError> {
        self.store.session_user()?.ok_or(DinerError::NoSession)
    }

    fn issue(phone: String, now: DateTime<Utc>) -> OtpChallenge {
        // Derived, not random: good enough for a code that is handed
        // straight back to the caller for delivery.
        let code = format!("{:04}", now.timestamp_subsec_micros() % 10_000);
        OtpChallenge {
            phone,
            code,
            issued_at: now,
        }
    }
}
