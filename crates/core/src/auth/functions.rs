use jsonwebtoken::{decode, DecodingKey, Validation};

use super::{AuthError, Claims, UserId};

/// Extract the token from an `Authorization` header value (`Bearer <token>`).
pub fn bearer_token(header_value: &str) -> Result<&str, AuthError> {
    let mut parts = header_value.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MissingCredentials),
    }
}

/// Read the user id (`sub` claim) out of a JWT.
///
/// Signature, expiry and audience are not checked here: the token has
/// already been verified by the authorizer in front of the API.
pub fn parse_user_id(token: &str) -> Result<UserId, AuthError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| AuthError::MalformedToken(format!("{:?}", e.kind())))?;

    match data.claims.sub {
        Some(sub) if !sub.trim().is_empty() => Ok(UserId::new(sub)),
        _ => Err(AuthError::MissingSubject),
    }
}
