//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::warn;

/// Initializes the DNS resolver for domain targets.
///
/// Reads the system resolver configuration (`/etc/resolv.conf` and the hosts
/// file) so names resolve the way the rest of the machine sees them. Falls back
/// to the built-in default configuration when the system one cannot be read.
///
/// Only A records are requested: the geolocation step works on IPv4.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            warn!("Could not read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    TokioAsyncResolver::tokio(config, lookup_opts(opts))
}

/// One query per name server, A records only, fixed timeout.
fn lookup_opts(mut opts: ResolverOpts) -> ResolverOpts {
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 1;
    opts.ip_strategy = LookupIpStrategy::Ipv4Only;
    opts
}
