//! Credential gate
//!
//! A single shared secret, configured out of band, guards every mutating
//! operation. There is no per-user identity, no expiry, and no rotation
//! mechanism beyond a process restart.

pub mod middleware;

use subtle::ConstantTimeEq;

/// Shared-secret gate for mutating operations.
#[derive(Clone)]
pub struct CredentialGate {
    secret: Option<String>,
}

impl CredentialGate {
    /// `secret` is `None` (or empty) when PROFESSOR_PASSWORD is not
    /// configured; the gate then rejects every presented credential.
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Exact, case-sensitive check of a presented secret. Constant-time on
    /// equal-length inputs.
    pub fn authenticate(&self, presented: Option<&str>) -> bool {
        let Some(ref secret) = self.secret else {
            // Server misconfiguration; never exposed to the caller.
            tracing::error!("PROFESSOR_PASSWORD is not configured; rejecting all credentials");
            return false;
        };

        match presented {
            Some(p) if !p.is_empty() => secure_compare(p, secret),
            _ => false,
        }
    }
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
