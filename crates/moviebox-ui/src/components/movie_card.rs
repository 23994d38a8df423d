//! Poster card for the browse grid.

use crate::core::logic::{PLACEHOLDER_POSTER, format_runtime, preview};
use crate::features::movies::state::MovieRow;
use web_sys::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub row: MovieRow,
    pub show_delete_confirm: bool,
    pub on_edit: Callback<MovieRow>,
    pub on_request_delete: Callback<String>,
    pub on_confirm_delete: Callback<String>,
    pub on_cancel_delete: Callback<()>,
    pub on_trailer: Callback<String>,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let poster_broken = use_state(|| false);

    let src = if *poster_broken {
        PLACEHOLDER_POSTER.to_string()
    } else {
        props
            .row
            .poster_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string())
    };
    let on_poster_error = {
        let poster_broken = poster_broken.clone();
        Callback::from(move |_: Event| poster_broken.set(true))
    };

    let edit = {
        let on_edit = props.on_edit.clone();
        let row = props.row.clone();
        Callback::from(move |_| on_edit.emit(row.clone()))
    };
    let request_delete = {
        let on_request_delete = props.on_request_delete.clone();
        let id = props.row.id.clone();
        Callback::from(move |_| on_request_delete.emit(id.clone()))
    };
    let confirm_delete = {
        let on_confirm_delete = props.on_confirm_delete.clone();
        let id = props.row.id.clone();
        Callback::from(move |_| on_confirm_delete.emit(id.clone()))
    };
    let cancel_delete = {
        let on_cancel_delete = props.on_cancel_delete.clone();
        Callback::from(move |_| on_cancel_delete.emit(()))
    };

    html! {
        <div class="movie-card">
            <div class="movie-poster">
                <img class="movie-poster-img" src={src} alt={props.row.title.clone()} onerror={on_poster_error} />
                <div class="movie-poster-overlay">
                    {if let Some(trailer) = props.row.trailer_url.clone() {
                        let on_trailer = props.on_trailer.clone();
                        html! {
                            <button
                                class="trailer-play-btn"
                                title="Watch Trailer"
                                onclick={Callback::from(move |_| on_trailer.emit(trailer.clone()))}
                            >{"▶"}</button>
                        }
                    } else { html! {} }}
                    <div class="movie-rating-overlay">{format!("⭐ {}", props.row.rating_label())}</div>
                </div>
            </div>
            <div class="movie-info">
                <div class="movie-header">
                    <h3 class="movie-title">{props.row.title.clone()}</h3>
                    <div class="movie-meta">
                        <span class="movie-year">{props.row.release_year}</span>
                        <span class="movie-genre">{props.row.genre.clone()}</span>
                        <span class="movie-runtime">{format_runtime(props.row.runtime)}</span>
                    </div>
                </div>
                <p class="movie-description">{preview(&props.row.description, 120)}</p>
                <div class="movie-actions">
                    <button class="action-btn edit-btn" onclick={edit}>{"Edit"}</button>
                    <button class="action-btn delete-btn" onclick={request_delete}>{"Delete"}</button>
                </div>
                {if props.show_delete_confirm {
                    html! {
                        <div class="delete-confirmation-card">
                            <p>{"Are you sure you want to delete this movie?"}</p>
                            <div class="delete-confirm-buttons">
                                <button class="confirm-btn" onclick={confirm_delete}>{"Yes, Delete"}</button>
                                <button class="cancel-btn" onclick={cancel_delete}>{"Cancel"}</button>
                            </div>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
