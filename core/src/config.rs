use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{env, num::NonZeroU32};

use crate::services::leave_policy::{
    LeavePolicy, DEFAULT_BIRTH_DAYS, DEFAULT_MARRIAGE_DAYS, DEFAULT_MOTHERHOOD_DAYS,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub time_zone: Tz,
    pub leave_policy: LeavePolicy,
}

impl Config {
    /// Loads configuration from the process environment, after reading `.env`.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_with(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn load_with<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let time_zone_name = lookup("APP_TIMEZONE").unwrap_or_else(|| "UTC".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let leave_policy = LeavePolicy {
            marriage_days: working_days_var(&lookup, "LEAVE_MARRIAGE_DAYS", DEFAULT_MARRIAGE_DAYS)?,
            birth_days: working_days_var(&lookup, "LEAVE_BIRTH_DAYS", DEFAULT_BIRTH_DAYS)?,
            motherhood_days: working_days_var(
                &lookup,
                "LEAVE_MOTHERHOOD_DAYS",
                DEFAULT_MOTHERHOOD_DAYS,
            )?,
        };

        Ok(Config {
            time_zone,
            leave_policy,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_zone: chrono_tz::UTC,
            leave_policy: LeavePolicy::default(),
        }
    }
}

fn working_days_var<F>(lookup: &F, key: &str, default: u32) -> anyhow::Result<NonZeroU32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse::<NonZeroU32>()
        .with_context(|| format!("{} must be a positive number of working days, got {:?}", key, raw))
}
