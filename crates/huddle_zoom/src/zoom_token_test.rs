#[cfg(test)]
mod tests {
    use crate::service::ZoomError;
    use crate::zoom_token::{generate_zoom_jwt, ZoomClaims, ZOOM_AUDIENCE};
    use chrono::Utc;
    use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[ZOOM_AUDIENCE]);
        validation
    }

    #[test]
    fn test_claims_round_trip_with_secret() {
        let before = Utc::now().timestamp();
        let token = generate_zoom_jwt("key-123", "s3cret", 3600).unwrap();

        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);

        let claims = decode::<ZoomClaims>(
            &token,
            &DecodingKey::from_secret(b"s3cret"),
            &validation(),
        )
        .unwrap()
        .claims;

        assert_eq!(claims.iss, "key-123");
        assert_eq!(claims.app_key, "key-123");
        assert_eq!(claims.aud, "zoom");
        assert_eq!(claims.alg, "HS256");
        assert_eq!(claims.exp, claims.token_exp);
        assert!(claims.iat >= before);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = generate_zoom_jwt("key-123", "s3cret", 3600).unwrap();
        let result = decode::<ZoomClaims>(
            &token,
            &DecodingKey::from_secret(b"other"),
            &validation(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        for ttl in [i64::MAX, i64::MIN] {
            let err = generate_zoom_jwt("key-123", "s3cret", ttl).unwrap_err();
            assert!(matches!(err, ZoomError::InvalidTokenTtl(t) if t == ttl));
        }
    }
}
