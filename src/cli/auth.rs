use crate::{
    cli::{flush_notices, logged_in_session, open_session, render},
    error, success,
};

pub async fn auth() {
    let mut session = open_session().await;

    match session.login().await {
        Ok(user) => {
            success!("Authentication successful!");
            render::user(user);
        }
        Err(e) => error!("Authentication failed: {}", e),
    }
    flush_notices(&mut session, 0);
}

pub async fn me() {
    let session = logged_in_session().await;
    if let Some(user) = session.user() {
        render::user(user);
        if let Some(image) = &user.image {
            println!("  {}", image);
        }
    }
}
