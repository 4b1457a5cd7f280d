use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use sqlx::SqlitePool;

use super::login_models::{
    CheckUsernameRequest, CheckUsernameResponse,
    RegisterRequest, RegisterResponse,
    LoginRequest, LoginResponse,
};
use crate::auth::{self, RegisterError};

pub async fn login_get() -> impl Responder {
    info!("Received request on /login_get endpoint");
    HttpResponse::Ok().body("Hello, this is the Agro Vision login endpoint.")
}

// Check if username is unique
pub async fn check_username(
    pool: web::Data<SqlitePool>,
    req: web::Json<CheckUsernameRequest>,
) -> impl Responder {
    let username = &req.username;
    info!("Received request to check username: {}", username);

    match auth::username_taken(pool.get_ref(), username).await {
        Ok(taken) => {
            info!("Username {} is unique: {}", username, !taken);
            HttpResponse::Ok().json(CheckUsernameResponse { is_unique: !taken })
        }
        Err(e) => {
            error!("Failed to execute query: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

// register user to DB
pub async fn register(
    pool: web::Data<SqlitePool>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    let username = &req.username;
    info!("Received request to register user: {}", username);

    match auth::register_user(pool.get_ref(), username, &req.password).await {
        Ok(()) => {
            info!("User {} registered successfully", username);
            HttpResponse::Ok().json(RegisterResponse {
                success: true,
                message: "Registered successfully! You can now log in.".into(),
            })
        }
        Err(RegisterError::Duplicate) => {
            info!("Username {} already exists", username);
            HttpResponse::Conflict().json(RegisterResponse {
                success: false,
                message: "Username already exists.".into(),
            })
        }
        Err(RegisterError::Unavailable) => {
            error!("Registration unavailable for user {}", username);
            HttpResponse::InternalServerError().json(RegisterResponse {
                success: false,
                message: "Registration error, please try again later.".into(),
            })
        }
    }
}

// login logic; no session is issued, the client keeps the logged-in state
pub async fn login(
    pool: web::Data<SqlitePool>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    let username = &req.username;
    info!("Received login request for user: {}", username);

    match auth::login_user(pool.get_ref(), username, &req.password).await {
        Ok(Some(user)) => {
            info!("User {} logged in successfully", username);
            HttpResponse::Ok().json(LoginResponse {
                success: true,
                message: format!("Welcome back, {}!", user.username),
                username: user.username,
            })
        }
        Ok(None) => {
            info!("Invalid credentials for user: {}", username);
            HttpResponse::Unauthorized().json(LoginResponse {
                success: false,
                message: "Invalid username or password.".into(),
                username: "".into(),
            })
        }
        Err(e) => {
            error!("Failed to execute query: {}", e);
            HttpResponse::InternalServerError().json(LoginResponse {
                success: false,
                message: "Login error, please try again later.".into(),
                username: "".into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use super::super::login_models::{LoginResponse, RegisterResponse};
    use crate::routes::routes::login_configure;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::auth::ensure_schema(&pool).await.unwrap();
        pool
    }

    #[actix_web::test]
    async fn register_then_login_round_trip() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .configure(login_configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api-login/register")
            .set_json(serde_json::json!({"username": "ramesh", "password": "gat123"}))
            .to_request();
        let resp: RegisterResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);

        let req = test::TestRequest::post()
            .uri("/api-login/login")
            .set_json(serde_json::json!({"username": "ramesh", "password": "gat123"}))
            .to_request();
        let resp: LoginResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        assert_eq!(resp.username, "ramesh");
    }

    #[actix_web::test]
    async fn duplicate_register_answers_conflict() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .configure(login_configure),
        )
        .await;

        for expected in [200u16, 409u16] {
            let req = test::TestRequest::post()
                .uri("/api-login/register")
                .set_json(serde_json::json!({"username": "savita", "password": "mala25"}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), expected);
        }
    }

    #[actix_web::test]
    async fn login_of_unknown_user_is_unauthorized() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .configure(login_configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api-login/login")
            .set_json(serde_json::json!({"username": "nobody", "password": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);
    }
}
