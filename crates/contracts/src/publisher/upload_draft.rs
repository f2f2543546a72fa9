use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_SCREENSHOTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Tên game không được để trống")]
    MissingTitle,
    #[error("Giá không hợp lệ: {0}")]
    InvalidPrice(String),
    #[error("Chưa tải ảnh bìa")]
    MissingCover,
    #[error("Chưa tải bản build")]
    MissingBuild,
    #[error("Tối đa {max} ảnh chụp màn hình")]
    TooManyScreenshots { max: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Details,
    Media,
    Build,
    Review,
}

impl WizardStep {
    pub fn all() -> Vec<WizardStep> {
        vec![
            WizardStep::Details,
            WizardStep::Media,
            WizardStep::Build,
            WizardStep::Review,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Details => 0,
            WizardStep::Media => 1,
            WizardStep::Build => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Details => "Thông tin",
            WizardStep::Media => "Hình ảnh",
            WizardStep::Build => "Bản build",
            WizardStep::Review => "Xác nhận",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::all().get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(|i| Self::all().get(i).copied())
    }
}

/// Everything the wizard has collected so far. Serialized to local storage
/// after each change so a reload resumes where the publisher left off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadDraft {
    pub draft_id: Uuid,
    #[serde(default)]
    pub step: WizardStep,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Raw price input; parsed only when the step is left.
    #[serde(default)]
    pub price_input: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub build_url: Option<String>,
    #[serde(default)]
    pub screenshot_urls: Vec<String>,
}

/// Body of `POST /api/games`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub cover_image: String,
    pub build_url: String,
    pub screenshots: Vec<String>,
}

/// Response of the media host after an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUploadResponse {
    #[serde(alias = "secureUrl", alias = "url")]
    pub secure_url: String,
}

impl Default for UploadDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadDraft {
    pub fn new() -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            step: WizardStep::Details,
            title: String::new(),
            description: String::new(),
            category: String::new(),
            price_input: String::new(),
            cover_url: None,
            build_url: None,
            screenshot_urls: Vec::new(),
        }
    }

    /// Price in VND. Accepts `150000`, `150.000` and `150 000`.
    pub fn price(&self) -> Result<f64, DraftError> {
        let cleaned: String = self
            .price_input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '.')
            .collect();
        match cleaned.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
            _ => Err(DraftError::InvalidPrice(self.price_input.clone())),
        }
    }

    /// Checks what the current step must have collected before moving on.
    pub fn check_step(&self, step: WizardStep) -> Result<(), DraftError> {
        match step {
            WizardStep::Details => {
                if self.title.trim().is_empty() {
                    return Err(DraftError::MissingTitle);
                }
                self.price().map(|_| ())
            }
            WizardStep::Media => {
                if self.cover_url.is_none() {
                    return Err(DraftError::MissingCover);
                }
                Ok(())
            }
            WizardStep::Build => {
                if self.build_url.is_none() {
                    return Err(DraftError::MissingBuild);
                }
                Ok(())
            }
            WizardStep::Review => self.to_create_request().map(|_| ()),
        }
    }

    /// Moves to the next step if the current one is complete.
    pub fn advance(&mut self) -> Result<WizardStep, DraftError> {
        self.check_step(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn add_screenshot(&mut self, url: String) -> Result<(), DraftError> {
        if self.screenshot_urls.len() >= MAX_SCREENSHOTS {
            return Err(DraftError::TooManyScreenshots {
                max: MAX_SCREENSHOTS,
            });
        }
        self.screenshot_urls.push(url);
        Ok(())
    }

    pub fn remove_screenshot(&mut self, index: usize) {
        if index < self.screenshot_urls.len() {
            self.screenshot_urls.remove(index);
        }
    }

    /// Assembles the creation payload from every step of the draft.
    pub fn to_create_request(&self) -> Result<CreateGameRequest, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let price = self.price()?;
        let cover_image = self.cover_url.clone().ok_or(DraftError::MissingCover)?;
        let build_url = self.build_url.clone().ok_or(DraftError::MissingBuild)?;
        if self.screenshot_urls.len() > MAX_SCREENSHOTS {
            return Err(DraftError::TooManyScreenshots {
                max: MAX_SCREENSHOTS,
            });
        }

        Ok(CreateGameRequest {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            price,
            cover_image,
            build_url,
            screenshots: self.screenshot_urls.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> UploadDraft {
        UploadDraft {
            title: " Sông Núi ".to_string(),
            description: "Phiêu lưu".to_string(),
            category: "Adventure".to_string(),
            price_input: "150.000".to_string(),
            cover_url: Some("https://media.example/cover.png".to_string()),
            build_url: Some("https://media.example/build.zip".to_string()),
            screenshot_urls: vec!["https://media.example/s1.png".to_string()],
            ..UploadDraft::new()
        }
    }

    #[test]
    fn test_steps_advance_in_order() {
        let mut draft = filled_draft();
        assert_eq!(draft.advance(), Ok(WizardStep::Media));
        assert_eq!(draft.advance(), Ok(WizardStep::Build));
        assert_eq!(draft.advance(), Ok(WizardStep::Review));
        assert_eq!(draft.advance(), Ok(WizardStep::Review));
        assert_eq!(draft.back(), WizardStep::Build);
        assert_eq!(WizardStep::Details.previous(), None);
    }

    #[test]
    fn test_advance_blocks_on_missing_data() {
        let mut draft = UploadDraft::new();
        assert_eq!(draft.advance(), Err(DraftError::MissingTitle));

        draft.title = "Game".to_string();
        draft.price_input = "free".to_string();
        assert_eq!(
            draft.advance(),
            Err(DraftError::InvalidPrice("free".to_string()))
        );

        draft.price_input = "0".to_string();
        assert_eq!(draft.advance(), Ok(WizardStep::Media));
        assert_eq!(draft.advance(), Err(DraftError::MissingCover));
        assert_eq!(draft.step, WizardStep::Media);
    }

    #[test]
    fn test_create_request_payload() {
        let request = filled_draft().to_create_request().unwrap();
        assert_eq!(request.title, "Sông Núi");
        assert_eq!(request.price, 150000.0);
        assert_eq!(request.screenshots.len(), 1);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["coverImage"], "https://media.example/cover.png");
        assert_eq!(json["buildUrl"], "https://media.example/build.zip");
    }

    #[test]
    fn test_create_request_requires_build() {
        let mut draft = filled_draft();
        draft.build_url = None;
        assert_eq!(draft.to_create_request(), Err(DraftError::MissingBuild));
    }

    #[test]
    fn test_screenshot_limit() {
        let mut draft = UploadDraft::new();
        for i in 0..MAX_SCREENSHOTS {
            draft.add_screenshot(format!("s{}.png", i)).unwrap();
        }
        assert_eq!(
            draft.add_screenshot("extra.png".to_string()),
            Err(DraftError::TooManyScreenshots { max: MAX_SCREENSHOTS })
        );
        draft.remove_screenshot(0);
        draft.remove_screenshot(99);
        assert_eq!(draft.screenshot_urls.len(), MAX_SCREENSHOTS - 1);
        assert_eq!(draft.screenshot_urls[0], "s1.png");
    }

    #[test]
    fn test_draft_survives_storage_round_trip() {
        let draft = filled_draft();
        let stored = serde_json::to_string(&draft).unwrap();
        let restored: UploadDraft = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, draft);
    }
}
