//! Home dashboard: greeting, collection stats, and a recent-movies preview.

use crate::app::Route;
use crate::core::logic::{PLACEHOLDER_POSTER, collection_stats, preview};
use crate::features::movies::state::MovieRow;
use yew::prelude::*;
use yew_router::prelude::Link;

/// How many movies the preview strip shows before pointing at browse.
const PREVIEW_COUNT: usize = 4;

#[derive(Properties, PartialEq)]
pub(crate) struct HomeProps {
    pub rows: Vec<MovieRow>,
    pub loading: bool,
    pub user: String,
    pub on_refresh: Callback<()>,
}

#[function_component(HomePage)]
pub(crate) fn home_page(props: &HomeProps) -> Html {
    let stats = collection_stats(&props.rows);
    let refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };

    html! {
        <div class="home-page">
            <div class="hero-section">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {"Welcome to "}<span class="highlight">{"Moviebox"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {format!(
                            "Good to see you, {}. Track what you watch, rate your favorites, and build your ultimate movie library.",
                            props.user
                        )}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::AddMovie} classes="hero-btn primary">{"Add New Movie"}</Link<Route>>
                        <Link<Route> to={Route::Browse} classes="hero-btn secondary">{"Browse Collection"}</Link<Route>>
                        <button class="hero-btn tertiary" onclick={refresh}>{"Refresh"}</button>
                    </div>
                </div>
            </div>

            <div class="stats-section">
                <h2 class="section-title">{"Your Collection at a Glance"}</h2>
                {if props.loading {
                    html! {
                        <div class="stats-loading">
                            <div class="spinner"></div>
                            <span>{"Loading your movie stats..."}</span>
                        </div>
                    }
                } else {
                    html! {
                        <div class="stats-grid">
                            {stat_card("🎬", &stats.total.to_string(), "Total Movies")}
                            {stat_card("⭐", &format!("{:.1}", stats.average_rating), "Avg Rating")}
                            {stat_card("🎭", stats.top_genre.as_deref().unwrap_or("Not Set"), "Top Genre")}
                            {stat_card("⏱", &format!("{}h", stats.total_runtime_hours), "Total Runtime")}
                        </div>
                    }
                }}
            </div>

            <div class="movies-section">
                <div class="section-header">
                    <h2 class="section-title">{"Recent Movies"}</h2>
                    <Link<Route> to={Route::Browse} classes="action-link">{"View All"}</Link<Route>>
                </div>
                {if props.rows.is_empty() {
                    html! {
                        <div class="no-movies">
                            <h3>{"No movies yet"}</h3>
                            <p>{"Start building your collection by adding your first movie!"}</p>
                            <Link<Route> to={Route::AddMovie} classes="add-first-btn">{"Add Your First Movie"}</Link<Route>>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="movies-grid">
                                {for props.rows.iter().take(PREVIEW_COUNT).map(preview_card)}
                            </div>
                            {if props.rows.len() > PREVIEW_COUNT {
                                html! {
                                    <div class="view-more-container">
                                        <Link<Route> to={Route::Browse} classes="view-more-btn">
                                            {format!("View All {} Movies →", props.rows.len())}
                                        </Link<Route>>
                                    </div>
                                }
                            } else { html! {} }}
                        </>
                    }
                }}
            </div>
        </div>
    }
}

fn stat_card(icon: &str, value: &str, label: &str) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <h3 class="stat-number">{value}</h3>
                <p class="stat-label">{label}</p>
            </div>
        </div>
    }
}

fn preview_card(row: &MovieRow) -> Html {
    let poster = row
        .poster_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string());
    html! {
        <div class="movie-card" key={row.id.clone()}>
            <img class="movie-poster" src={poster} alt={row.title.clone()} />
            <div class="movie-info">
                <h3>{row.title.clone()}</h3>
                <div class="movie-meta">
                    <span class="genre">{row.genre.clone()}</span>
                    <span class="rating">{format!("⭐ {}", row.rating_label())}</span>
                </div>
                <p class="description">{preview(&row.description, 100)}</p>
            </div>
        </div>
    }
}
