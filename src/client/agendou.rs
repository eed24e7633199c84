//! Agendou API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::SessionState;
use super::api::{AuthApi, DetailApi, ListingApi, MutationApi};
use super::models::{
    AdminProfile, Appointment, AppointmentStatus, Barber, BarberForm, Customer, LoginRequest,
    LoginResponse, RegisterAdminRequest, Review, StatusUpdate, StatusUpdateResponse,
};
use super::request::RequestOptions;
use crate::config::{Config, DEFAULT_LOGIN_PATH, LEGACY_LOGIN_PATH};
use crate::error::{ApiError, Error, Result};
use crate::navigation::Route;
use crate::session::{Session, SessionStore};

/// Request timeout when none is configured
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Body fields the backend uses for error messages, in lookup order
const MESSAGE_FIELDS: [&str; 4] = ["message", "error", "erro", "mensagem"];

/// Agendou API client
pub struct AgendouClient {
    http: HttpClient,
    base_url: String,
    login_path: String,
    session: Arc<dyn SessionStore>,
}

impl AgendouClient {
    /// Create a client for `base_url` backed by `session`
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Result<Self> {
        Self::with_timeout(base_url, session, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom per-request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url: String = base_url.into();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            session,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config, session: Arc<dyn SessionStore>) -> Result<Self> {
        let client = Self::with_timeout(
            config.require_api_url()?,
            session,
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(client.with_login_path(config.login_path.clone()))
    }

    /// Override the login endpoint
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether `path` is a login endpoint. Auth failures there are bad
    /// credentials, not an expired session.
    pub fn is_login_path(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let path = path.trim_end_matches('/');
        path == self.login_path.trim_end_matches('/')
            || path == DEFAULT_LOGIN_PATH
            || path == LEGACY_LOGIN_PATH
    }

    /// Make an authenticated API request.
    ///
    /// Returns `Ok(None)` for 204 and 404, the parsed JSON body for any other
    /// success. A 401/403 outside the login endpoints clears the session and
    /// fails with [`ApiError::SessionExpired`].
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Option<Value>> {
        self.send(path, options, true).await
    }

    /// [`request`](Self::request) followed by deserialization into `T`
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<T>> {
        match self.request(path, options).await? {
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e))
                    .into()
            }),
            None => Ok(None),
        }
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        Ok(self
            .request_as::<Vec<T>>(path, RequestOptions::get())
            .await?
            .unwrap_or_default())
    }

    async fn send(
        &self,
        path: &str,
        options: RequestOptions,
        with_session: bool,
    ) -> Result<Option<Value>> {
        let RequestOptions {
            method,
            mut headers,
            body,
        } = options;

        if with_session && let Some(token) = self.session.token()? {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ApiError::InvalidRequest("Stored token is not a valid header value".to_string())
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        log::debug!("{} {} -> {}", method, path, status.as_u16());

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            && !self.is_login_path(path)
        {
            self.session.clear()?;
            log::info!(
                "Backend rejected the session ({}); stored token cleared",
                status.as_u16()
            );
            return Err(ApiError::SessionExpired.into());
        }

        match status {
            StatusCode::NO_CONTENT => return Ok(None),
            StatusCode::NOT_FOUND => {
                log::debug!("{} not found, treating as empty", path);
                return Ok(None);
            }
            _ => {}
        }

        let text = response.text().await.map_err(ApiError::from)?;
        let parsed = serde_json::from_str::<Value>(&text);

        if !status.is_success() {
            let message = parsed
                .ok()
                .as_ref()
                .and_then(backend_message)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        parsed.map(Some).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e))
                .into()
        })
    }
}

/// Message the backend attached to an error body
fn backend_message(body: &Value) -> Option<String> {
    MESSAGE_FIELDS.iter().find_map(|field| {
        body.get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    })
}

/// Build `collection/id`, rejecting ids that would change the path
fn resource_path(collection: &str, id: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() || id.contains(['/', '?', '#']) || id.chars().any(char::is_whitespace) {
        return Err(ApiError::InvalidRequest(format!("Invalid id '{}'", id)).into());
    }
    Ok(format!("{}/{}", collection, id))
}

#[async_trait]
impl AuthApi for AgendouClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let options = RequestOptions::post().json(&credentials)?;

        // Never present a previous token to the login endpoint
        let value = self.send(&self.login_path, options, false).await?;

        let response: LoginResponse = match value {
            Some(value) => serde_json::from_value(value).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
            })?,
            None => LoginResponse::default(),
        };

        match response.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                self.session.set(Session::new(token))?;
                log::info!("Signed in as {}", email);
            }
            None => log::warn!("Login response carried no token; session left unchanged"),
        }

        Ok(response)
    }

    async fn logout(&self) -> Result<Route> {
        self.session.clear()?;
        log::info!("Signed out");
        Ok(Route::Login)
    }

    async fn verify_session(&self) -> Result<SessionState> {
        match self
            .request_as::<AdminProfile>("/auth/verify-admin", RequestOptions::get())
            .await
        {
            Ok(Some(profile)) => Ok(SessionState::Authenticated { profile }),
            Ok(None) => Ok(SessionState::Anonymous),
            Err(Error::Api(ApiError::SessionExpired)) => Ok(SessionState::Anonymous),
            Err(e) => Err(e),
        }
    }

    async fn verify_user(&self) -> Result<Option<AdminProfile>> {
        self.request_as("/auth/verify", RequestOptions::get())
            .await
    }

    async fn register_admin(&self, request: &RegisterAdminRequest) -> Result<Option<Value>> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::InvalidRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))
            .into());
        }

        let options = RequestOptions::post().json(request)?;
        self.request("/auth/register-admin", options).await
    }
}

#[async_trait]
impl ListingApi for AgendouClient {
    async fn dashboard(&self) -> Result<Option<Value>> {
        self.request("/admin/dashboard", RequestOptions::get()).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        self.list("/agendamentos").await
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.list("/usuarios").await
    }

    async fn list_barbers(&self) -> Result<Vec<Barber>> {
        self.list("/barbeiros").await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.list("/avaliacoes/admin/todas-avaliacoes").await
    }
}

#[async_trait]
impl DetailApi for AgendouClient {
    async fn get_appointment(&self, id: &str) -> Result<Option<Appointment>> {
        let path = resource_path("/agendamentos", id)?;
        self.request_as(&path, RequestOptions::get()).await
    }

    async fn get_customer(&self, id: &str) -> Result<Option<Customer>> {
        let path = resource_path("/usuarios", id)?;
        self.request_as(&path, RequestOptions::get()).await
    }

    async fn get_barber(&self, id: &str) -> Result<Option<Barber>> {
        let path = resource_path("/barbeiros", id)?;
        self.request_as(&path, RequestOptions::get()).await
    }

    async fn get_appointment_review(&self, appointment_id: &str) -> Result<Option<Review>> {
        let path = resource_path("/avaliacoes/agendamento", appointment_id)?;
        self.request_as(&path, RequestOptions::get()).await
    }

    async fn barber_stats(&self) -> Result<Option<Value>> {
        self.request("/barbeiros/admin/estatisticas", RequestOptions::get())
            .await
    }
}

#[async_trait]
impl MutationApi for AgendouClient {
    async fn update_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<StatusUpdateResponse> {
        let path = resource_path("/agendamentos", id)?;
        let options = RequestOptions::patch().json(&StatusUpdate::from(status))?;
        Ok(self
            .request_as::<StatusUpdateResponse>(&path, options)
            .await?
            .unwrap_or_default())
    }

    async fn create_barber(&self, form: &BarberForm) -> Result<Option<Value>> {
        let options = RequestOptions::post().json(form)?;
        self.request("/barbeiros", options).await
    }

    async fn update_barber(&self, id: &str, form: &BarberForm) -> Result<Option<Value>> {
        let path = resource_path("/barbeiros", id)?;
        let options = RequestOptions::put().json(form)?;
        self.request(&path, options).await
    }

    async fn toggle_barber_status(&self, id: &str) -> Result<Option<Value>> {
        let path = format!("{}/toggle-status", resource_path("/barbeiros", id)?);
        self.request(&path, RequestOptions::patch()).await
    }

    async fn delete_barber(&self, id: &str) -> Result<()> {
        let path = resource_path("/barbeiros", id)?;
        self.request(&path, RequestOptions::delete()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use mockito::Matcher;
    use serde_json::json;

    fn client_with(server: &mockito::Server, store: Arc<MemorySessionStore>) -> AgendouClient {
        AgendouClient::new(server.url(), store).unwrap()
    }

    fn signed_in(token: &str) -> Arc<MemorySessionStore> {
        Arc::new(MemorySessionStore::with_token(token))
    }

    #[tokio::test]
    async fn test_no_session_omits_authorization() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/barbeiros")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_with(&server, Arc::new(MemorySessionStore::new()));
        let result = client.request("/barbeiros", RequestOptions::get()).await.unwrap();

        assert_eq!(result, Some(json!([])));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_session_sends_exact_bearer_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/agendamentos/1")
            .match_header("authorization", "Bearer abc")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"id":1,"status":"pendente"}"#)
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        let result = client
            .request("/agendamentos/1", RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(result, Some(json!({"id": 1, "status": "pendente"})));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_caller_content_type_is_kept() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .match_header("content-type", "text/plain")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        let options = RequestOptions::post()
            .header("Content-Type", "text/plain")
            .unwrap()
            .body("hello");
        client.request("/upload", options).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_forbidden_clears_session() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/usuarios")
            .with_status(403)
            .with_body(r#"{"message":"Acesso negado"}"#)
            .create_async()
            .await;

        let store = signed_in("abc");
        let client = client_with(&server, store.clone());
        let err = client
            .request("/usuarios", RequestOptions::get())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::SessionExpired)));
        assert_eq!(err.redirect(), Some(Route::Login));
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_without_body_clears_session() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/agendamentos")
            .with_status(401)
            .create_async()
            .await;

        let store = signed_in("abc");
        let client = client_with(&server, store.clone());
        let err = client.list_appointments().await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::SessionExpired)));
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_content_is_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/barbeiros/4")
            .with_status(204)
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        let result = client
            .request("/barbeiros/4", RequestOptions::delete())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_not_found_is_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/agendamentos/999")
            .with_status(404)
            .with_body(r#"{"message":"Agendamento não encontrado"}"#)
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        assert!(client.get_appointment("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_backend_message_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/barbeiros")
            .with_status(400)
            .with_body(r#"{"erro":"Nome é obrigatório"}"#)
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        let err = client
            .create_barber(&BarberForm::default())
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::Backend { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Nome é obrigatório");
            }
            other => panic!("Expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_backend_error_fallback_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/admin/dashboard")
            .with_status(500)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        let err = client.dashboard().await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[tokio::test]
    async fn test_invalid_json_on_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/usuarios")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        let err = client.list_customers().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_network_failure() {
        let store = signed_in("abc");
        let client = AgendouClient::new("http://127.0.0.1:1", store.clone()).unwrap();

        let err = client
            .request("/agendamentos", RequestOptions::get())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Network(_))));
        assert!(store.get().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login-admin")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::Json(json!({"email": "a@b.com", "senha": "x"})))
            .with_status(200)
            .with_body(r#"{"token":"abc"}"#)
            .create_async()
            .await;

        let store = Arc::new(MemorySessionStore::new());
        let client = client_with(&server, store.clone());
        client.login("a@b.com", "x").await.unwrap();

        mock.assert_async().await;
        let session = store.get().unwrap().unwrap();
        assert_eq!(session.token, "abc");
        assert!(session.set_cookie(false).starts_with("token=abc;"));
    }

    #[tokio::test]
    async fn test_login_does_not_send_previous_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login-admin")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"token":"fresh"}"#)
            .create_async()
            .await;

        let store = signed_in("stale");
        let client = client_with(&server, store.clone());
        client.login("a@b.com", "x").await.unwrap();

        mock.assert_async().await;
        assert_eq!(store.token().unwrap().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_login_without_token_leaves_session_unset() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login-admin")
            .with_status(200)
            .with_body(r#"{"message":"ok"}"#)
            .create_async()
            .await;

        let store = Arc::new(MemorySessionStore::new());
        let client = client_with(&server, store.clone());
        let response = client.login("a@b.com", "x").await.unwrap();

        assert!(response.token.is_none());
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_is_verbatim_and_keeps_session() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login-admin")
            .with_status(401)
            .with_body(r#"{"message":"Credenciais inválidas"}"#)
            .create_async()
            .await;

        let store = signed_in("existing");
        let client = client_with(&server, store.clone());
        let err = client.login("a@b.com", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "Credenciais inválidas");
        assert_eq!(store.token().unwrap().as_deref(), Some("existing"));
    }

    #[tokio::test]
    async fn test_legacy_login_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/admin/login")
            .with_status(200)
            .with_body(r#"{"token":"legacy"}"#)
            .create_async()
            .await;

        let store = Arc::new(MemorySessionStore::new());
        let client = client_with(&server, store.clone()).with_login_path(LEGACY_LOGIN_PATH);
        client.login("a@b.com", "x").await.unwrap();

        mock.assert_async().await;
        assert_eq!(store.token().unwrap().as_deref(), Some("legacy"));
    }

    #[tokio::test]
    async fn test_logout_always_clears() {
        let store = Arc::new(MemorySessionStore::new());
        let client = AgendouClient::new("http://127.0.0.1:1", store.clone()).unwrap();

        assert_eq!(client.logout().await.unwrap(), Route::Login);

        store.set(Session::new("abc")).unwrap();
        assert_eq!(client.logout().await.unwrap(), Route::Login);
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_verify_session_authenticated() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/verify-admin")
            .match_header("authorization", "Bearer abc")
            .with_status(200)
            .with_body(r#"{"usuario":{"id":1,"nome":"Admin","tipo":"admin"}}"#)
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        let state = client.verify_session().await.unwrap();

        assert_eq!(state.landing_route(), Route::Dashboard);
        match state {
            SessionState::Authenticated { profile } => {
                assert_eq!(profile.display_name().as_deref(), Some("Admin"));
            }
            SessionState::Anonymous => panic!("Expected authenticated session"),
        }
    }

    #[tokio::test]
    async fn test_verify_session_rejected_is_anonymous() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/verify-admin")
            .with_status(401)
            .create_async()
            .await;

        let store = signed_in("abc");
        let client = client_with(&server, store.clone());
        let state = client.verify_session().await.unwrap();

        assert_eq!(state.landing_route(), Route::Login);
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_not_found_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/avaliacoes/admin/todas-avaliacoes")
            .with_status(404)
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        assert!(client.list_reviews().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_status_wrapped_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/agendamentos/7")
            .match_body(Matcher::Json(json!({"status": "confirmado"})))
            .with_status(200)
            .with_body(r#"{"agendamento":{"id":7,"status":"confirmado"}}"#)
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        let response = client
            .update_appointment_status("7", AppointmentStatus::Confirmado)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            response.appointment.unwrap().status_kind(),
            Some(AppointmentStatus::Confirmado)
        );
    }

    #[tokio::test]
    async fn test_toggle_and_delete_barber_paths() {
        let mut server = mockito::Server::new_async().await;
        let toggle = server
            .mock("PATCH", "/barbeiros/3/toggle-status")
            .with_status(200)
            .with_body(r#"{"ativo":false}"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/barbeiros/3")
            .with_status(204)
            .create_async()
            .await;

        let client = client_with(&server, signed_in("abc"));
        client.toggle_barber_status("3").await.unwrap();
        client.delete_barber("3").await.unwrap();

        toggle.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let client =
            AgendouClient::new("http://127.0.0.1:1", Arc::new(MemorySessionStore::new())).unwrap();
        let request = RegisterAdminRequest {
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
            phone: String::new(),
            cpf: String::new(),
        };

        let err = client.register_admin(&request).await.unwrap_err();
        assert!(err.to_string().contains("telefone, cpf"));
    }

    #[tokio::test]
    async fn test_invalid_id_is_rejected_locally() {
        let client =
            AgendouClient::new("http://127.0.0.1:1", Arc::new(MemorySessionStore::new())).unwrap();
        let err = client.get_customer("1/../admin").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_is_login_path() {
        let client =
            AgendouClient::new("http://localhost", Arc::new(MemorySessionStore::new())).unwrap();
        assert!(client.is_login_path("/auth/login-admin"));
        assert!(client.is_login_path("/admin/login?next=/"));
        assert!(!client.is_login_path("/auth/verify-admin"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            AgendouClient::new("http://localhost:3001/", Arc::new(MemorySessionStore::new()))
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001");
    }

    #[test]
    fn test_backend_message_lookup_order() {
        assert_eq!(
            backend_message(&json!({"error": "e", "message": "m"})).as_deref(),
            Some("m")
        );
        assert_eq!(
            backend_message(&json!({"mensagem": "falhou"})).as_deref(),
            Some("falhou")
        );
        assert!(backend_message(&json!({"message": ""})).is_none());
        assert!(backend_message(&json!([1, 2])).is_none());
    }
}
