/// Named destinations consumed by the navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Movies,
    MovieDetail(u64),
    Watchlist,
    Profile,
    Player(u64),
    SignIn,
    SignUp,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Movies => "/movies".to_string(),
            Route::MovieDetail(id) => format!("/movie/{}", id),
            Route::Watchlist => "/watchlist".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Player(id) => format!("/player/{}", id),
            Route::SignIn => "/auth/login".to_string(),
            Route::SignUp => "/auth/signup".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::MovieDetail(603).path(), "/movie/603");
        assert_eq!(Route::Player(603).path(), "/player/603");
        assert_eq!(Route::SignIn.path(), "/auth/login");
        assert_eq!(Route::SignUp.path(), "/auth/signup");
    }
}
