//! Authentication
//!
//! No identity provider sits behind the dashboard yet. The trait keeps the
//! seam; the stub supplies the fixed demo admin unconditionally. A `None`
//! from the provider must abort the render cycle before any dashboard
//! output.

use serde::{Deserialize, Serialize};

/// Authenticated operator identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub tenant: String,
    pub role: String,
}

impl Identity {
    /// Check if the operator has the admin role
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Identity source consulted once per render cycle
pub trait AuthProvider: Send + Sync {
    fn authenticate(&self) -> Option<Identity>;
}

/// Unconditional demo identity
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAuthProvider;

impl AuthProvider for StubAuthProvider {
    fn authenticate(&self) -> Option<Identity> {
        Some(Identity {
            username: "admin".to_string(),
            tenant: "Demo MSP".to_string(),
            role: "admin".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_identity_is_fixed_admin() {
        let identity = StubAuthProvider.authenticate().unwrap();
        assert_eq!(identity.username, "admin");
        assert_eq!(identity.tenant, "Demo MSP");
        assert_eq!(identity.role, "admin");
        assert!(identity.is_admin());
    }
}
