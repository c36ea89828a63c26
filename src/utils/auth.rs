use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::errors::ApiError;
use crate::utils::jwt;

/// Extractor enforcing the bearer-token requirement. Every handler takes
/// one, so unauthenticated requests are rejected uniformly with 401
/// before any repository call.
#[derive(Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|auth| auth.to_str().ok())
        .and_then(|auth| auth.split_whitespace().nth(1))
        .ok_or_else(|| ApiError::Unauthorized("Missing token".to_string()))?;

    let claims = jwt::validate_token(token)
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn missing_token_is_rejected() {
        std::env::set_var("JWT_SECRET", "test-secret");
        let req = TestRequest::default().to_http_request();
        let result = authenticate(&req);
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn garbage_token_is_rejected() {
        std::env::set_var("JWT_SECRET", "test-secret");
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_http_request();
        assert!(matches!(authenticate(&req), Err(ApiError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn valid_token_is_accepted() {
        std::env::set_var("JWT_SECRET", "test-secret");
        let token = jwt::generate_token("7").unwrap();
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();
        let user = authenticate(&req).unwrap();
        assert_eq!(user.user_id, "7");
    }
}
