use super::*;
use ecocity_core::gateways::notify::NotificationEvent;

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    notify: &State<Notify>,
    cfg: &State<Cfg>,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
) -> Result<()> {
    let login = login?.into_inner();
    let email = login.email.parse::<EmailAddress>()?;
    {
        let credentials = usecases::Credentials {
            email: &email,
            password: &login.password,
        };
        let db = db.shared()?;
        if let Err(err) = usecases::login_with_email(&db, &credentials) {
            if let ParameterError::EmailNotConfirmed = err {
                // Send a fresh confirmation link along with the rejection.
                let user = db.get_user_by_email(&email)?;
                let token = EmailNonce {
                    email: user.email.as_str().to_owned(),
                    nonce: Nonce::new(),
                }
                .encode_to_string();
                let confirmation_url = format!(
                    "{}/confirm-email?token={}",
                    cfg.public_url.trim_end_matches('/'),
                    token
                );
                notify.notify(NotificationEvent::UserEmailConfirmationRequested {
                    user: &user,
                    confirmation_url: &confirmation_url,
                });
            }
            debug!("Login with email '{}' failed: {}", login.email, err);
            return Err(err.into());
        }
    }
    cookies.add_private(
        Cookie::build((COOKIE_EMAIL_KEY, email.into_string()))
            .same_site(rocket::http::SameSite::None),
    );
    Ok(Json(()))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<()> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    Json(())
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    notify: &State<Notify>,
    cfg: &State<Cfg>,
    new_user: JsonResult<json::NewUser>,
) -> Result<()> {
    let new_user = from_json::try_new_user(new_user?.into_inner())?;
    let user = {
        let db = db.exclusive()?;
        usecases::create_new_user(&db, new_user.clone())?;
        db.get_user_by_email(&new_user.email)?
    };
    let token = EmailNonce {
        email: user.email.as_str().to_owned(),
        nonce: Nonce::new(),
    }
    .encode_to_string();
    let confirmation_url = format!(
        "{}/confirm-email?token={}",
        cfg.public_url.trim_end_matches('/'),
        token
    );
    notify.notify(NotificationEvent::UserRegistered {
        user: &user,
        confirmation_url: &confirmation_url,
    });
    Ok(Json(()))
}

#[post(
    "/confirm-email-address",
    format = "application/json",
    data = "<token>"
)]
pub fn confirm_email_address(
    db: sqlite::Connections,
    token: JsonResult<json::ConfirmEmailAddress>,
) -> Result<()> {
    let token = token?.into_inner().token;
    usecases::confirm_email_address(&db.exclusive()?, &token)?;
    Ok(Json(()))
}

#[post(
    "/users/reset-password-request",
    format = "application/json",
    data = "<data>"
)]
pub fn post_request_password_reset(
    connections: sqlite::Connections,
    notify: &State<Notify>,
    cfg: &State<Cfg>,
    data: JsonResult<json::RequestPasswordReset>,
) -> Result<()> {
    let req = data?.into_inner();
    let reset_url = format!("{}/reset-password", cfg.public_url.trim_end_matches('/'));
    flows::reset_password_request(&connections, &*notify.0, &req.email.parse()?, &reset_url)?;
    Ok(Json(()))
}

#[post("/users/reset-password", format = "application/json", data = "<data>")]
pub fn post_reset_password(
    connections: sqlite::Connections,
    data: JsonResult<json::ResetPassword>,
) -> Result<()> {
    let req = data?.into_inner();

    let email_nonce = EmailNonce::decode_from_str(&req.token)?;
    let new_password = req.new_password.parse::<Password>()?;
    flows::reset_password_with_email_nonce(&connections, email_nonce, new_password)?;

    Ok(Json(()))
}

#[get("/users/current", format = "application/json")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.email(), account.email())?;
    Ok(Json(user.into()))
}

#[post("/users/current", format = "application/json", data = "<update>")]
pub fn post_current_user(
    db: sqlite::Connections,
    account: Account,
    update: JsonResult<json::UpdateUserProfile>,
) -> Result<json::User> {
    let update = from_json::user_profile_update(update?.into_inner());
    let user = usecases::update_user_profile(&db.exclusive()?, account.email(), update)?;
    Ok(Json(user.into()))
}

#[post("/users/create", format = "application/json", data = "<new_user>")]
pub fn post_user_create(
    db: sqlite::Connections,
    account: Account,
    new_user: JsonResult<json::NewUser>,
) -> Result<()> {
    {
        let db = db.shared()?;
        usecases::authorize_user_by_email(&db, account.email(), Role::Admin)?;
    }
    let new_user = from_json::try_new_user(new_user?.into_inner())?;
    let db = db.exclusive()?;
    usecases::create_new_user(&db, new_user.clone())?;
    // Accounts created by an administrator start out confirmed,
    // no confirmation e-mail is sent.
    let mut user = db.get_user_by_email(&new_user.email)?;
    user.email_confirmed = true;
    db.update_user(&user)?;
    Ok(Json(()))
}

#[delete("/users/current", format = "application/json")]
pub fn delete_current_user(
    db: sqlite::Connections,
    account: Account,
    cookies: &CookieJar<'_>,
) -> Result<()> {
    usecases::delete_user(&db.exclusive()?, account.email(), account.email())?;
    cookies.remove_private(COOKIE_EMAIL_KEY);
    Ok(Json(()))
}

#[get("/users", format = "application/json", rank = 2)]
pub fn get_users(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let users = db.all_users()?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[post("/users/<email>/role", format = "application/json", data = "<data>")]
pub fn post_user_role(
    db: sqlite::Connections,
    account: Account,
    email: &str,
    data: JsonResult<json::ChangeUserRole>,
) -> Result<()> {
    let role: Role = data?.into_inner().role.into();
    flows::change_user_role(&db, account.email(), &email.parse()?, role)?;
    Ok(Json(()))
}
