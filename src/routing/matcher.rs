//! Host matching helpers.
//!
//! # Design Decisions
//! - Host matching is case-insensitive (per HTTP spec)
//! - The port is never part of the routing key
//! - IPv6 literals lose their brackets (`[::1]:8000` → `::1`)

/// Extract the host name from a `Host` header / URI authority value.
pub fn host_name(authority: &str) -> &str {
    let authority = authority.trim();
    let authority = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);

    if let Some(rest) = authority.strip_prefix('[') {
        return rest.split_once(']').map_or(rest, |(host, _)| host);
    }

    match authority.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => authority,
    }
}

/// Case-folded lookup key for a host.
pub fn host_key(host: &str) -> String {
    host.to_ascii_lowercase()
}
