use std::env;
use std::str::FromStr;

use crate::contact::validate_email;
use crate::error::{Result, SiteError};

pub const DEFAULT_CONTACT_EMAIL: &str = "yashwanthkumarv155@gmail.com";
pub const DEFAULT_CONTACT_PHONE: &str = "+919951810271";

/// Read-only settings shared by every page component.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub contact_email: String,
    pub contact_phone: String,
    /// Vertical offset past which the navbar switches to its compact style.
    pub navbar_threshold_px: f64,
    pub reveal_delay_ms: u32,
    pub conceal_delay_ms: u32,
    pub banner_ttl_ms: u32,
    pub skill_bar_delay_ms: u32,
    /// Height kept clear above an in-page anchor target.
    pub scroll_offset_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            navbar_threshold_px: 100.0,
            reveal_delay_ms: 100,
            conceal_delay_ms: 300,
            banner_ttl_ms: 3000,
            skill_bar_delay_ms: 100,
            scroll_offset_px: 80.0,
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by `PORTFOLIO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(email) = lookup("PORTFOLIO_CONTACT_EMAIL") {
            config.set_contact_email("PORTFOLIO_CONTACT_EMAIL", &email)?;
        }
        if let Some(phone) = lookup("PORTFOLIO_CONTACT_PHONE") {
            config.contact_phone = phone.trim().to_string();
        }

        override_number(&lookup, "PORTFOLIO_NAVBAR_THRESHOLD", &mut config.navbar_threshold_px)?;
        override_number(&lookup, "PORTFOLIO_REVEAL_DELAY_MS", &mut config.reveal_delay_ms)?;
        override_number(&lookup, "PORTFOLIO_CONCEAL_DELAY_MS", &mut config.conceal_delay_ms)?;
        override_number(&lookup, "PORTFOLIO_BANNER_TTL_MS", &mut config.banner_ttl_ms)?;
        override_number(&lookup, "PORTFOLIO_SKILL_BAR_DELAY_MS", &mut config.skill_bar_delay_ms)?;
        override_number(&lookup, "PORTFOLIO_SCROLL_OFFSET", &mut config.scroll_offset_px)?;

        Ok(config)
    }

    /// `source` names where the value came from, for the error message.
    pub fn set_contact_email(&mut self, source: &'static str, email: &str) -> Result<()> {
        let email = email.trim();
        if !validate_email(email) {
            return Err(SiteError::InvalidConfig {
                key: source,
                value: email.to_string(),
                reason: "not an email address",
            });
        }
        self.contact_email = email.to_string();
        Ok(())
    }
}

fn override_number<F, T>(lookup: &F, key: &'static str, target: &mut T) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };

    *target = raw.trim().parse().map_err(|_| SiteError::InvalidConfig {
        key,
        value: raw.clone(),
        reason: "not a valid number",
    })?;
    Ok(())
}
