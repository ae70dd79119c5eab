use crate::{
    auth::{
        hash_password, verify_password, LoginRequest, RegisterRequest, TokenResponse, TokenService,
    },
    error::AppError,
    store::UserStore,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Register a new user
///
/// Creates a credential record for the submitted email. The plaintext
/// password is hashed before it reaches the store; registering an email
/// that already has a record is a conflict.
#[post("/register")]
pub async fn register(
    users: web::Data<UserStore>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Check if email already exists
    if users.find_by_email(&register_data.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    // Hash password and persist the new credential record
    let password_hash = hash_password(&register_data.password)?;
    let user = users.create(&register_data.email, &password_hash).await?;
    log::info!("Registered user {}", user.email);

    Ok(HttpResponse::Created().json(json!({
        "message": "Successfully registered"
    })))
}

/// Login user
///
/// Verifies the submitted credentials and responds with a signed bearer
/// token asserting the email identity. Unknown email and wrong password
/// are indistinguishable to the caller.
#[post("/login")]
pub async fn login(
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let user = users.find_by_email(&login_data.email).await?;

    match user {
        Some(user) => {
            // Verify password
            if verify_password(&login_data.password, &user.password_hash)? {
                let token = tokens.issue(&user.email)?;
                Ok(HttpResponse::Ok().json(TokenResponse { token }))
            } else {
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}
