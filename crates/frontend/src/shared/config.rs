//! Widget configuration
//!
//! Defaults match the production SmartAir site. The host page can point the
//! widget at another endpoint or phone number through data attributes on the
//! mount element:
//!
//! ```html
//! <div id="smartair-reservation"
//!      data-api-endpoint="https://staging.smartair.space/reservations"
//!      data-phone="+421 900 000 000"></div>
//! ```

pub const DEFAULT_API_ENDPOINT: &str = "https://api.smartair.space/reservations";
pub const DEFAULT_PHONE: &str = "+421 915 033 440";
pub const PRODUCTS_STORAGE_KEY: &str = "smartair_selected_products";
pub const MOUNT_ELEMENT_ID: &str = "smartair-reservation";

pub const API_ENDPOINT_ATTR: &str = "data-api-endpoint";
pub const PHONE_ATTR: &str = "data-phone";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub api_endpoint: String,
    pub phone: String,
    pub products_storage_key: String,
    pub mount_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            products_storage_key: PRODUCTS_STORAGE_KEY.to_string(),
            mount_id: MOUNT_ELEMENT_ID.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Apply host overrides; blank values keep the current setting
    pub fn with_overrides(mut self, api_endpoint: Option<String>, phone: Option<String>) -> Self {
        if let Some(endpoint) = non_blank(api_endpoint) {
            self.api_endpoint = endpoint;
        }
        if let Some(phone) = non_blank(phone) {
            self.phone = phone;
        }
        self
    }

    /// Read overrides from the mount element's data attributes
    pub fn from_element(self, element: &web_sys::Element) -> Self {
        self.with_overrides(
            element.get_attribute(API_ENDPOINT_ATTR),
            element.get_attribute(PHONE_ATTR),
        )
    }

    /// `tel:` href for the contact link
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
