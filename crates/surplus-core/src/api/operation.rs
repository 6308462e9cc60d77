//! Catalogue of remote operations.

use strum::Display;

/// Every operation the client issues, with the text reported when the
/// server gives no message of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ApiOperation {
    Register,
    Login,
    GetProfile,
    UpdateProfile,
    UploadProfilePicture,
    CreateDonation,
    ListDonations,
    GetDonation,
    ListPendingRequests,
    CreateRequest,
    AcceptRequest,
    FetchAvailableFoods,
    GetLeaderboard,
    SubmitFeedback,
    CreateReferral,
    ListReferrals,
}

impl ApiOperation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiOperation::Register => "Registration failed",
            ApiOperation::Login => "Login failed",
            ApiOperation::GetProfile => "Failed to fetch profile",
            ApiOperation::UpdateProfile => "Failed to update profile",
            ApiOperation::UploadProfilePicture => "Failed to upload profile picture",
            ApiOperation::CreateDonation => "Failed to create donation",
            ApiOperation::ListDonations => "Failed to fetch donations",
            ApiOperation::GetDonation => "Failed to fetch donation details",
            ApiOperation::ListPendingRequests => "Failed to fetch requests",
            ApiOperation::CreateRequest => "Failed to create request",
            ApiOperation::AcceptRequest => "Failed to accept request",
            ApiOperation::FetchAvailableFoods => "Failed to fetch available foods",
            ApiOperation::GetLeaderboard => "Failed to retrieve leaderboard",
            ApiOperation::SubmitFeedback => "Failed to submit feedback",
            ApiOperation::CreateReferral => "Failed to create referral",
            ApiOperation::ListReferrals => "Failed to fetch referrals",
        }
    }

    /// Whether the operation sends a bearer token.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            ApiOperation::Register | ApiOperation::Login | ApiOperation::GetLeaderboard
        )
    }
}
