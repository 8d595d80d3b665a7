/// User form endpoints
///
/// The form page is served under the reversible name `form_example_get`;
/// submissions arrive on the same path as `form_example_post`.
///
/// # Endpoints
///
/// ```text
/// GET  /users/form    -> 200, HTML form
/// POST /users/form    -> 201, created user as JSON
/// ```
///
/// Submissions are validated before touching the database and the insert
/// runs inside a scoped transaction: committed on success, rolled back on
/// every other exit path.
use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, http::StatusCode, response::Html, Form, Json};
use quotient_shared::models::user::{CreateUser, User};
use serde::Deserialize;
use validator::Validate;

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Create user</title>
  </head>
  <body>
    <form method="post" action="/users/form">
      <label for="username">Username</label>
      <input type="text" id="username" name="username" required>
      <label for="email">Email</label>
      <input type="email" id="email" name="email" required>
      <button type="submit">Create</button>
    </form>
  </body>
</html>
"#;

/// User form submission
#[derive(Debug, Deserialize, Validate)]
pub struct UserForm {
    /// Username (1-150 characters)
    #[validate(length(min = 1, max = 150, message = "username must be 1-150 characters"))]
    pub username: String,

    /// Email address
    #[validate(email(message = "invalid email address"))]
    pub email: String,
}

/// Form page handler
///
/// Serves the static HTML form. Always responds 200.
pub async fn form_example_get() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Form submission handler
///
/// Validates the submission, inserts the user inside a scoped transaction,
/// and returns the stored row (with its database-assigned id) as JSON.
///
/// # Errors
///
/// - 422 when validation fails
/// - 409 when the username or email is already taken
pub async fn form_example_post(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> ApiResult<(StatusCode, Json<User>)> {
    form.validate()?;

    let mut tx = state.db.begin().await?;
    let user = User::create(
        &mut *tx,
        CreateUser {
            username: form.username,
            email: form.email,
        },
    )
    .await?;
    tx.commit().await?;

    tracing::info!(user_id = %user.id, "Created user");

    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_form_validation_accepts_valid_input() {
        let form = UserForm {
            username: "test".to_string(),
            email: "test@example.com".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_user_form_validation_rejects_bad_email() {
        let form = UserForm {
            username: "test".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_user_form_validation_rejects_empty_username() {
        let form = UserForm {
            username: String::new(),
            email: "test@example.com".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_page_posts_back_to_itself() {
        assert!(FORM_PAGE.contains(r#"action="/users/form""#));
    }
}
