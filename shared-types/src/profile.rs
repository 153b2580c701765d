use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Profile shown on the profile tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub currency: String,
}

/// Partial profile update; missing fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub currency: Option<String>,
}

impl UserProfile {
    pub fn apply(&mut self, update: UpdateProfileRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
    }
}
