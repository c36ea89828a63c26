use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User id
    pub exp: usize,  // Expiration timestamp
}

// JWT_SECRET is validated non-empty at startup in main.
fn secret() -> String {
    env::var("JWT_SECRET").expect("JWT_SECRET must be set")
}

/// Mints a token for exercising the auth layer in tests. Production
/// tokens come from the external identity provider.
#[cfg(test)]
pub fn generate_token(user_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::days(7))
        .expect("Invalid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret().as_ref()),
    )
}

pub fn validate_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret().as_ref()),
        &Validation::new(jsonwebtoken::Algorithm::HS256),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        env::set_var("JWT_SECRET", "test-secret");
        let token = generate_token("42").unwrap();
        let claims = validate_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
    }

    #[test]
    fn garbage_token_is_rejected() {
        env::set_var("JWT_SECRET", "test-secret");
        assert!(validate_token("not-a-token").is_err());
    }
}
