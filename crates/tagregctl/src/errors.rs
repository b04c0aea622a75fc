//! Exit codes for tagregctl

/// Exit code for success
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for validation failures and unreadable input
pub const EXIT_GENERAL_ERROR: u8 = 1;
