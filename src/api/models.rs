use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Missing and empty are treated the same: both are validation failures.
    #[serde(default)]
    pub url: String,
}

/// One slice of a full-page screenshot.
///
/// Every chunk of a given screenshot currently carries the identical,
/// undivided image payload; only the descriptors differ. Real pixel cropping
/// is an acknowledged gap, kept as-is so chunk counts and heights stay
/// meaningful to downstream import tooling.
#[derive(Serialize, Deserialize, Clone)]
pub struct Chunk {
    #[serde(rename = "chunkNumber")]
    pub chunk_number: u32,
    pub height: u32,
    #[serde(rename = "imageData")]
    pub image_data: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct FullPageScreenshot {
    /// "desktop" or "mobile".
    #[serde(rename = "type")]
    pub profile: String,
    #[serde(rename = "totalHeight")]
    pub total_height: u32,
    pub chunks: Vec<Chunk>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct AnalysisResult {
    pub desktop: FullPageScreenshot,
    pub mobile: FullPageScreenshot,
}

#[derive(Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub screenshots: Vec<AnalysisResult>,
}
