//! Build-time constants shared by the gate and the page chrome.

pub const PAGE_TITLE: &str = "実務で使える　AI×建築セミナー";

/// Invite code printed on the registration material. Case-sensitive.
pub const INVITE_CODE: &str = "AP-2025-SEMINAR";

/// localStorage key set to "1" once the invite code has been accepted.
pub const UNLOCK_KEY: &str = "ap_invite_ok";

/// Path segment the page is served under. The gate redirects here first.
pub const PATH_SLUG: &str = "aixarch-20250928-8dC2p";
