//! Session gate for restricted routes.

use crate::app::Route;
use crate::core::store::AppStore;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct RequireSessionProps {
    pub children: Children,
}

/// Renders its children only when a usable session is present.
///
/// Until storage has been consulted nothing renders, so a signed-in user
/// reloading the page is not bounced through the login screen.
#[function_component(RequireSession)]
pub(crate) fn require_session(props: &RequireSessionProps) -> Html {
    let slice = use_selector(|store: &AppStore| store.session.clone());
    if !slice.restored {
        return html! {};
    }
    if !slice.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    html! { <>{ for props.children.iter() }</> }
}
