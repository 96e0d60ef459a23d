/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - どの route が Bearer 必須かを route table の Access フラグで宣言する
 *   (認可の免除は handler 内の分岐ではなく、ここで決める)
 */
use axum::{
    Router,
    routing::{MethodRouter, get, post},
};

use crate::middleware;
use crate::state::AppState;

use super::handlers::{
    auth::authenticate_user,
    health::health,
    users::{get_user, list_users, me},
};

/// Whether a route requires a verified bearer token.
///
/// The dispatcher consults this flag while assembling the Router: exempt
/// (`Public`) routes never pass through the authenticator at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

fn route_table() -> Vec<(Access, &'static str, MethodRouter<AppState>)> {
    vec![
        (Access::Public, "/health", get(health)),
        (Access::Public, "/users/authenticate", post(authenticate_user)),
        (Access::Protected, "/users", get(list_users)),
        (Access::Protected, "/users/me", get(me)),
        (Access::Protected, "/users/{user_id}", get(get_user)),
    ]
}

pub fn routes(state: AppState) -> Router<AppState> {
    let mut public = Router::new();
    let mut protected = Router::new();

    for (access, path, handler) in route_table() {
        match access {
            Access::Public => public = public.route(path, handler),
            Access::Protected => protected = protected.route(path, handler),
        }
    }

    public.merge(middleware::auth::access::apply(protected, state))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Access, route_table};

    #[test]
    fn login_and_health_are_exempt_from_authentication() {
        let exempt: HashSet<&str> = route_table()
            .iter()
            .filter(|(access, _, _)| *access == Access::Public)
            .map(|(_, path, _)| *path)
            .collect();

        assert_eq!(exempt, HashSet::from(["/health", "/users/authenticate"]));
    }
}
