use tracing::instrument;

use crate::config::credentials::Credentials;
use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(credentials, jwt_config, dto))]
    pub async fn login(
        credentials: &Credentials,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        if !credentials.verify(&dto.username, &dto.password)? {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let access_token = create_access_token(&dto.username, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }
}
