//! Session Cookie Signing
//!
//! The cookie carries `<session id>.<hex HMAC-SHA256 of the id>`. Only ids
//! signed with the server's secret are accepted back.

use std::fmt;

use hmac::{digest::InvalidLength, Hmac, Mac};
use sha2::Sha256;

use super::models::SessionId;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies session tokens with a server secret
#[derive(Clone)]
pub struct TokenSigner {
    mac: HmacSha256,
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner").finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Creates a signer keyed by `secret`.
    ///
    /// # Errors
    ///
    /// HMAC accepts keys of any length, so this only fails if the
    /// underlying implementation changes that guarantee.
    pub fn new(secret: &str) -> Result<Self, InvalidLength> {
        let mac = HmacSha256::new_from_slice(secret.as_bytes())?;
        Ok(Self { mac })
    }

    /// Produces the cookie value for `id`.
    pub fn sign(&self, id: &SessionId) -> String {
        let id = id.to_string();
        let mut mac = self.mac.clone();
        mac.update(id.as_bytes());

        format!("{}.{}", id, hex::encode(mac.finalize().into_bytes()))
    }

    /// Returns the session id carried by `token` if its signature is valid.
    pub fn verify(&self, token: &str) -> Option<SessionId> {
        let (id, signature) = token.split_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac.clone();
        mac.update(id.as_bytes());
        mac.verify_slice(&signature).ok()?;

        SessionId::parse(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_token_verifies() {
        let signer = TokenSigner::new("test-secret").unwrap();
        let id = SessionId::new();

        assert_eq!(signer.verify(&signer.sign(&id)), Some(id));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let signer = TokenSigner::new("test-secret").unwrap();
        let token = signer.sign(&SessionId::new());
        let (_, signature) = token.split_once('.').unwrap();

        let forged = format!("{}.{}", SessionId::new(), signature);
        assert_eq!(signer.verify(&forged), None);
        assert_eq!(signer.verify("garbage"), None);
        assert_eq!(signer.verify("abc.zz"), None);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let ours = TokenSigner::new("test-secret").unwrap();
        let theirs = TokenSigner::new("another-secret").unwrap();

        assert_eq!(ours.verify(&theirs.sign(&SessionId::new())), None);
    }
}
