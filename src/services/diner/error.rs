use thiserror::Error;

use crate::services::store::StoreError;

/// Errors from diner account flows.
#[derive(Error, Debug)]
pub enum DinerError {
    /// The phone number is not a 10-digit number.
    #[error("Enter a valid 10-digit phone number")]
    InvalidPhone,

    /// The OTP input is not 4 digits.
    #[error("Enter the 4-digit OTP")]
    InvalidOtp,

    /// The OTP did not match the issued challenge.
    #[error("Incorrect OTP, try again")]
    OtpMismatch,

    /// Resend requested before the resend window elapsed.
    #[error("Resend OTP in {seconds_left}s")]
    ResendNotReady {
        /// Seconds until resend becomes available.
        seconds_left: i64,
    },

    /// The name is too short to register with.
    #[error("Enter your name")]
    NameTooShort,

    /// Login attempted for an unknown phone.
    #[error("User not found. Please register first.")]
    UserNotFound,

    /// The operation needs a logged-in diner.
    #[error("Register or log in first")]
    NoSession,

    /// The local store failed underneath.
    #[error(transparent)]
    Store(#[from] StoreError),
}
