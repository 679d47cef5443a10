use serde::{Deserialize, Serialize};

/// Narration language, a closed set matching the languages the voice guide
/// UI offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GuideLanguage {
    Zh,
    En,
    Ja,
    Ko,
    Fr,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GuideRequestDto {
    pub attraction_id: i32,
    pub language: GuideLanguage,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GuideDto {
    /// Narration text for the requested attraction, ready for speech
    /// synthesis on the client.
    pub narration: String,
}
