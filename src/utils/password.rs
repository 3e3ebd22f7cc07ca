use crate::{
    config::PasswordScheme,
    error::{AppError, Result},
};

/// Password storage rules shared by login and registration.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    pub scheme: PasswordScheme,
    pub bcrypt_cost: u32,
}

impl PasswordPolicy {
    pub fn new(scheme: PasswordScheme, bcrypt_cost: u32) -> Self {
        Self {
            scheme,
            bcrypt_cost,
        }
    }

    pub async fn hash(&self, password: &str) -> Result<String> {
        let password = password.to_string();
        let cost = self.bcrypt_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("Hashing task failed: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))
    }

    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("Verification task failed: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))
    }
}

/// Rows written before bcrypt hold a 32-char MD5 hex digest instead.
pub fn is_bcrypt_hash(stored: &str) -> bool {
    stored.starts_with("$2")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let policy = PasswordPolicy::new(PasswordScheme::Bcrypt, 4);
        let hash = policy.hash("x").await.unwrap();

        assert!(is_bcrypt_hash(&hash));
        assert!(policy.verify("x", &hash).await.unwrap());
        assert!(!policy.verify("y", &hash).await.unwrap());
    }

    #[test]
    fn md5_digest_is_not_bcrypt() {
        assert!(!is_bcrypt_hash("9dd4e461268c8034f5c8564e155c67a6"));
    }
}
