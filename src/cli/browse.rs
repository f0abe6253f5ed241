use crate::{
    cli::{flush_notices, logged_in_session, render, spinner},
    error, info,
    session::Phase,
    types::{ItemKind, TimeRange},
};

pub async fn top(kind: ItemKind, time_range: TimeRange, pages: u32) {
    let mut session = logged_in_session().await;

    let pb = spinner(&format!("Fetching top {}...", kind));
    let mut result = session.request_top_items(kind, time_range, 0).await;
    for _ in 1..pages.max(1) {
        if result.is_err() || !session.has_next(Phase::browsing(kind)) {
            break;
        }
        pb.set_message(format!(
            "Fetching top {} (page {})...",
            kind,
            session.cursor(kind) + 2
        ));
        result = session.load_more().await;
    }
    pb.finish_and_clear();

    flush_notices(&mut session, 0);
    if let Err(e) = result {
        error!("Cannot load top {}: {}", kind, e);
    }

    info!("Top {} ({})", kind, time_range.label());
    render::browsed(&session);
}

pub async fn genres() {
    let mut session = logged_in_session().await;

    let pb = spinner("Fetching genre seeds...");
    let result = session.request_genres().await;
    pb.finish_and_clear();

    flush_notices(&mut session, 0);
    if let Err(e) = result {
        error!("Cannot load genres: {}", e);
    }

    render::browsed(&session);
}
