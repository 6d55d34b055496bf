//! Target classification and name resolution.
//!
//! A target made only of digits and dots is passed to the geolocation step
//! as-is. Anything else is treated as a domain and resolved to one IPv4
//! address through a [`HostResolver`].

use std::net::{IpAddr, Ipv4Addr};

use anyhow::{Error, Result};
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::error_handling::LookupError;

/// A lookup target after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Dotted numeric literal, used without resolution
    Address(String),
    /// Anything else; must be resolved first
    Domain(String),
}

/// Classifies a trimmed, non-empty target.
///
/// Only ASCII digits and dots with at least one digit count as an address.
/// Numeric strings that are not valid IPv4 literals (`"1.2.3"`) still skip
/// resolution; the geolocation service rejects them.
pub fn classify_target(target: &str) -> Target {
    let numeric = target.chars().all(|c| c.is_ascii_digit() || c == '.')
        && target.chars().any(|c| c.is_ascii_digit());
    if numeric {
        Target::Address(target.to_string())
    } else {
        Target::Domain(target.to_string())
    }
}

/// Resolves domain names to IPv4 addresses.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns the first IPv4 address of `host`.
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr>;
}

#[async_trait]
impl HostResolver for TokioAsyncResolver {
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr> {
        let response = self.lookup_ip(host).await.map_err(Error::new)?;
        response
            .iter()
            .find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| Error::msg("No IPv4 addresses found"))
    }
}

/// Turns a classified target into the IP string sent to geolocation.
///
/// Addresses pass through untouched. Domains cost exactly one resolver call.
///
/// # Errors
///
/// Returns `LookupError::ResolutionError` if the domain cannot be resolved.
pub async fn resolve_target(
    target: &Target,
    resolver: &dyn HostResolver,
) -> Result<String, LookupError> {
    match target {
        Target::Address(ip) => Ok(ip.clone()),
        Target::Domain(host) => {
            debug!("Resolving {host}");
            let ip = resolver
                .resolve_ipv4(host)
                .await
                .map_err(|e| LookupError::ResolutionError {
                    target: host.clone(),
                    reason: e.to_string(),
                })?;
            debug!("Resolved {host} to {ip}");
            Ok(ip.to_string())
        }
    }
}
