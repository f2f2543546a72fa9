//! Signed-in user's own profile: `GET`/`PUT /api/users/profile`.

use serde::{Deserialize, Serialize};

use super::auth::{UserInfo, UserRole};
use crate::reports::dto::non_blank;

pub const MAX_USERNAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Tên hiển thị không được để trống")]
    MissingName,
    #[error("Tên hiển thị tối đa {max} ký tự")]
    NameTooLong { max: usize },
    #[error("Số điện thoại không hợp lệ")]
    InvalidPhone,
}

/// Profile row exactly as the backend sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default, alias = "name")]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, alias = "phoneNumber")]
    pub phone: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<String>,
}

impl From<RawProfile> for Profile {
    fn from(raw: RawProfile) -> Self {
        Self {
            id: non_blank(raw.id).unwrap_or_default(),
            username: non_blank(raw.username).unwrap_or_default(),
            email: non_blank(raw.email),
            role: raw.role,
            avatar: non_blank(raw.avatar),
            bio: non_blank(raw.bio),
            phone: non_blank(raw.phone),
            created_at: non_blank(raw.created_at),
        }
    }
}

impl Profile {
    /// Local copy after a successful update; the backend answers without a body.
    pub fn apply(&mut self, update: &UpdateProfileRequest) {
        self.username = update.username.clone();
        self.avatar = update.avatar.clone();
        self.bio = update.bio.clone();
        self.phone = update.phone.clone();
    }

    /// The session's user record, refreshed from the profile.
    pub fn to_user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
        }
    }
}

/// Body of `PUT /api/users/profile`. Cleared fields are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone: Option<String>,
}

/// Editable text of the profile form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            avatar: profile.avatar.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<UpdateProfileRequest, ProfileError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ProfileError::MissingName);
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(ProfileError::NameTooLong {
                max: MAX_USERNAME_LEN,
            });
        }
        let phone = non_blank(Some(self.phone.clone()));
        if let Some(phone) = &phone {
            if !is_valid_phone(phone) {
                return Err(ProfileError::InvalidPhone);
            }
        }
        Ok(UpdateProfileRequest {
            username: username.to_string(),
            avatar: non_blank(Some(self.avatar.clone())),
            bio: non_blank(Some(self.bio.clone())),
            phone,
        })
    }
}

/// Digits with an optional leading `+`, spaces and dots ignored, 9 to 15 digits.
fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !matches!(c, ' ' | '.')).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    (9..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        let raw: RawProfile = serde_json::from_str(
            r#"{"_id":"u1","name":"Lan","email":"lan@shop.vn","role":"customer",
                "phoneNumber":"0901 234 567","bio":"  ","createdAt":"2024-01-02T03:04:05Z"}"#,
        )
        .unwrap();
        raw.into()
    }

    #[test]
    fn test_normalize_profile() {
        let p = profile();
        assert_eq!(p.id, "u1");
        assert_eq!(p.username, "Lan");
        assert_eq!(p.phone.as_deref(), Some("0901 234 567"));
        assert_eq!(p.bio, None);
        assert_eq!(p.role, UserRole::Customer);
    }

    #[test]
    fn test_form_validation() {
        let mut form = ProfileForm::from_profile(&profile());
        let request = form.validate().unwrap();
        assert_eq!(request.username, "Lan");
        assert_eq!(request.bio, None);

        form.username = "   ".to_string();
        assert_eq!(form.validate(), Err(ProfileError::MissingName));

        form.username = "x".repeat(MAX_USERNAME_LEN + 1);
        assert_eq!(
            form.validate(),
            Err(ProfileError::NameTooLong { max: MAX_USERNAME_LEN })
        );

        form.username = "Lan".to_string();
        form.phone = "abc123".to_string();
        assert_eq!(form.validate(), Err(ProfileError::InvalidPhone));

        form.phone = "+84 901.234.567".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_update_request_wire_names() {
        let form = ProfileForm {
            username: "Minh".to_string(),
            phone: "0901234567".to_string(),
            ..ProfileForm::default()
        };
        let json = serde_json::to_value(form.validate().unwrap()).unwrap();
        assert_eq!(json["phoneNumber"], "0901234567");
        assert!(json["avatar"].is_null());
    }

    #[test]
    fn test_apply_updates_session_user() {
        let mut p = profile();
        let form = ProfileForm {
            username: "Lan Anh".to_string(),
            avatar: "https://cdn/a.png".to_string(),
            ..ProfileForm::default()
        };
        p.apply(&form.validate().unwrap());
        let user = p.to_user_info();
        assert_eq!(user.username, "Lan Anh");
        assert_eq!(user.avatar.as_deref(), Some("https://cdn/a.png"));
        assert_eq!(p.phone, None);
    }
}
