use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
    pub user: String,
    pub on_logout: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="app-shell">
            <header class="top-nav">
                <div class="nav-left">
                    <Link<Route> to={Route::Home} classes="logo">
                        <span class="logo-icon">{"🎬"}</span>
                        <span class="logo-text">{"MOVIEBOX"}</span>
                    </Link<Route>>
                </div>
                <nav class="nav-links">
                    {nav_item(Route::Home, "Home", &props.active)}
                    {nav_item(Route::Browse, "Browse", &props.active)}
                    {nav_item(Route::AddMovie, "Add Movie", &props.active)}
                </nav>
                <div class="nav-right">
                    {if props.user.is_empty() { html! {} } else {
                        html! {
                            <div class="user-profile">
                                <span class="welcome-text">{format!("Welcome, {}", props.user)}</span>
                                <button class="logout-btn" onclick={logout}>{"Logout"}</button>
                            </div>
                        }
                    }}
                </div>
            </header>
            <main>
                {for props.children.iter()}
            </main>
            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-section">
                        <h3 class="footer-title">{"Moviebox"}</h3>
                        <p class="footer-description">
                            {"Track, rate, and organize your favorite films all in one place."}
                        </p>
                    </div>
                    <div class="footer-section">
                        <h4 class="footer-subtitle">{"Quick Links"}</h4>
                        <ul class="footer-links">
                            <li><Link<Route> to={Route::Home} classes="footer-link">{"Home"}</Link<Route>></li>
                            <li><Link<Route> to={Route::AddMovie} classes="footer-link">{"Add Movie"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Browse} classes="footer-link">{"Browse Movies"}</Link<Route>></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="copyright">{"© Moviebox. All rights reserved."}</p>
                </div>
            </footer>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let classes = classes!("nav-link", if *active == route { Some("active") } else { None });
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
