//! Routing definitions for the Moviebox UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/")]
    Home,
    #[at("/browse")]
    Browse,
    #[at("/add-movie")]
    AddMovie,
    #[at("/movies/:id/edit")]
    EditMovie { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
