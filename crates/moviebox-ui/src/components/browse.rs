//! Browse view: search, filters, grid/list layouts, and the row modals.

use crate::app::Route;
use crate::components::movie_card::MovieCard;
use crate::components::movie_form::current_year;
use crate::core::logic::{
    collection_stats, embed_trailer_url, filter_and_sort, format_runtime, preview, rating_class,
    unique_genres,
};
use crate::core::ui::{SortKey, ViewMode};
use crate::features::movies::form::{FormFields, build_draft};
use crate::features::movies::state::{DataSource, MovieFilters, MovieRow};
use moviebox_api_models::{GENRES, MovieDraft};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct BrowseProps {
    pub rows: Vec<MovieRow>,
    pub source: DataSource,
    pub loading: bool,
    pub last_error: Option<String>,
    pub search: String,
    pub on_search: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_update: Callback<(String, MovieDraft)>,
    pub on_refresh: Callback<()>,
}

#[function_component(BrowsePage)]
pub(crate) fn browse_page(props: &BrowseProps) -> Html {
    let view = use_state(ViewMode::default);
    let sort = use_state(SortKey::default);
    let genre = use_state(|| None as Option<String>);
    let editing = use_state(|| None as Option<MovieRow>);
    let confirm_delete = use_state(|| None as Option<String>);
    let trailer = use_state(|| None as Option<String>);

    let filters = MovieFilters {
        search: props.search.clone(),
        genre: (*genre).clone(),
    };
    let filtered = filter_and_sort(&props.rows, &filters, *sort);
    let stats = collection_stats(&props.rows);
    let genres = unique_genres(&props.rows);

    let set_search = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_search.emit(input.value());
            }
        })
    };
    let clear_search = {
        let on_search = props.on_search.clone();
        Callback::from(move |_| on_search.emit(String::new()))
    };
    let set_genre = {
        let genre = genre.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                genre.set(if value == "all" { None } else { Some(value) });
            }
        })
    };
    let set_sort = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>()
                && let Some(key) = SortKey::from_code(&select.value())
            {
                sort.set(key);
            }
        })
    };

    let open_trailer = {
        let trailer = trailer.clone();
        Callback::from(move |url: String| trailer.set(Some(url)))
    };
    let close_trailer = {
        let trailer = trailer.clone();
        Callback::from(move |_| trailer.set(None))
    };
    let open_edit = {
        let editing = editing.clone();
        Callback::from(move |row: MovieRow| editing.set(Some(row)))
    };
    let cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };
    let save_edit = {
        let editing = editing.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |payload: (String, MovieDraft)| {
            on_update.emit(payload);
            editing.set(None);
        })
    };
    let request_delete = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |id: String| confirm_delete.set(Some(id)))
    };
    let cancel_delete = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |()| confirm_delete.set(None))
    };
    let do_delete = {
        let confirm_delete = confirm_delete.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |id: String| {
            on_delete.emit(id);
            confirm_delete.set(None);
        })
    };
    let retry = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };

    if props.loading {
        return html! {
            <div class="loading-container">
                <div class="spinner"></div>
                <p>{"Loading your movie collection..."}</p>
            </div>
        };
    }

    html! {
        <div class="browse-page">
            <div class="browse-header">
                <div class="header-content">
                    <h1>{"Your Collection"}</h1>
                    <p class="subtitle">
                        {format!("You have {} movies in your collection.", props.rows.len())}
                        {if filtered.len() != props.rows.len() {
                            format!(" Showing {} after filtering.", filtered.len())
                        } else {
                            String::new()
                        }}
                    </p>
                </div>
                <div class="header-actions">
                    <Link<Route> to={Route::AddMovie} classes="add-btn">{"Add New Movie"}</Link<Route>>
                    <Link<Route> to={Route::Home} classes="back-link">{"← Back to Home"}</Link<Route>>
                </div>
            </div>

            {if let Some(error) = &props.last_error {
                html! {
                    <div class="error-alert">
                        {format!("⚠️ {error} — showing sample data instead.")}
                        <button class="retry-btn" onclick={retry.clone()}>{"Retry Connection"}</button>
                    </div>
                }
            } else { html! {} }}

            <div class="search-section">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search movies by title, description, or genre..."
                    value={props.search.clone()}
                    oninput={set_search}
                />
                {if props.search.is_empty() { html! {} } else {
                    html! { <button class="clear-search" title="Clear search" onclick={clear_search}>{"✕"}</button> }
                }}
            </div>

            <div class="browse-controls">
                <div class="view-controls">
                    <span class="control-label">{"View as:"}</span>
                    {for ViewMode::all().into_iter().map(|mode| {
                        let view = view.clone();
                        let active = *view == mode;
                        html! {
                            <button
                                class={classes!("view-btn", if active { Some("active") } else { None })}
                                onclick={Callback::from(move |_| view.set(mode))}
                            >{mode.label()}</button>
                        }
                    })}
                </div>
                <div class="filter-controls">
                    <label class="filter-group">
                        <span>{"Genre:"}</span>
                        <select class="filter-select" onchange={set_genre}>
                            <option value="all" selected={genre.is_none()}>{"All Genres"}</option>
                            {for genres.iter().map(|g| html! {
                                <option value={g.clone()} selected={genre.as_deref() == Some(g.as_str())}>{g.clone()}</option>
                            })}
                        </select>
                    </label>
                    <label class="filter-group">
                        <span>{"Sort by:"}</span>
                        <select class="filter-select" onchange={set_sort}>
                            {for SortKey::all().into_iter().map(|key| html! {
                                <option value={key.code()} selected={*sort == key}>{key.label()}</option>
                            })}
                        </select>
                    </label>
                </div>
            </div>

            {if filtered.is_empty() {
                let filtering = !props.search.is_empty() || genre.is_some();
                html! {
                    <div class="empty-state">
                        <h3>{"No movies found"}</h3>
                        <p>
                            {if filtering {
                                "Try adjusting your search or filter criteria"
                            } else {
                                "Your collection is empty. Add your first movie to get started!"
                            }}
                        </p>
                        <Link<Route> to={Route::AddMovie} classes="add-movie-btn">{"Add Your First Movie"}</Link<Route>>
                    </div>
                }
            } else if *view == ViewMode::Grid {
                html! {
                    <div class="movies-grid">
                        {for filtered.iter().map(|row| html! {
                            <MovieCard
                                key={row.id.clone()}
                                row={row.clone()}
                                show_delete_confirm={confirm_delete.as_deref() == Some(row.id.as_str())}
                                on_edit={open_edit.clone()}
                                on_request_delete={request_delete.clone()}
                                on_confirm_delete={do_delete.clone()}
                                on_cancel_delete={cancel_delete.clone()}
                                on_trailer={open_trailer.clone()}
                            />
                        })}
                    </div>
                }
            } else {
                html! {
                    <div class="movies-list">
                        <div class="list-header">
                            <div class="list-column movie-info-col">{"Movie"}</div>
                            <div class="list-column">{"Genre"}</div>
                            <div class="list-column">{"Year"}</div>
                            <div class="list-column">{"Rating"}</div>
                            <div class="list-column">{"Runtime"}</div>
                            <div class="list-column">{"Actions"}</div>
                        </div>
                        {for filtered.iter().map(|row| list_item(
                            row,
                            confirm_delete.as_deref() == Some(row.id.as_str()),
                            &open_trailer,
                            &request_delete,
                            &do_delete,
                            &cancel_delete,
                        ))}
                    </div>
                }
            }}

            {if filtered.is_empty() { html! {} } else {
                html! {
                    <div class="collection-stats">
                        <h4>{"Collection Statistics"}</h4>
                        <div class="stats-grid">
                            <div class="stat-item">
                                <span class="stat-label">{"Total Movies:"}</span>
                                <span class="stat-value">{stats.total}</span>
                            </div>
                            <div class="stat-item">
                                <span class="stat-label">{"Average Rating:"}</span>
                                <span class="stat-value">{format!("{:.1}", stats.average_rating)}</span>
                            </div>
                            <div class="stat-item">
                                <span class="stat-label">{"Total Runtime:"}</span>
                                <span class="stat-value">{format!("{} hours", stats.total_runtime_hours)}</span>
                            </div>
                            <div class="stat-item">
                                <span class="stat-label">{"Unique Genres:"}</span>
                                <span class="stat-value">{genres.len()}</span>
                            </div>
                        </div>
                    </div>
                }
            }}

            <div class="api-status">
                <p>
                    <strong>{"Status: "}</strong>
                    {match props.source {
                        DataSource::Remote => "Connected to backend API",
                        DataSource::Sample => "Using sample data (backend not connected)",
                    }}
                </p>
                <button class="refresh-btn" onclick={retry}>{"Refresh Collection"}</button>
            </div>

            {if let Some(url) = &*trailer {
                html! {
                    <div class="trailer-modal">
                        <div class="trailer-modal-content">
                            <div class="trailer-modal-header">
                                <h3>{"Movie Trailer"}</h3>
                                <button class="close-trailer-btn" onclick={close_trailer.clone()}>{"✕"}</button>
                            </div>
                            <iframe
                                src={embed_trailer_url(url)}
                                title="Movie Trailer"
                                allowfullscreen="true"
                            ></iframe>
                        </div>
                    </div>
                }
            } else { html! {} }}

            {if let Some(row) = (*editing).clone() {
                html! {
                    <EditMovieModal row={row} on_save={save_edit.clone()} on_cancel={cancel_edit.clone()} />
                }
            } else { html! {} }}
        </div>
    }
}

fn list_item(
    row: &MovieRow,
    show_delete_confirm: bool,
    on_trailer: &Callback<String>,
    on_request_delete: &Callback<String>,
    on_confirm_delete: &Callback<String>,
    on_cancel_delete: &Callback<()>,
) -> Html {
    let trailer = row.trailer_url.clone().map(|url| {
        let on_trailer = on_trailer.clone();
        html! {
            <button
                class="trailer-btn-list"
                onclick={Callback::from(move |_| on_trailer.emit(url.clone()))}
            >{"▶ Watch Trailer"}</button>
        }
    });
    let request_delete = {
        let on_request_delete = on_request_delete.clone();
        let id = row.id.clone();
        Callback::from(move |_| on_request_delete.emit(id.clone()))
    };
    let confirm = {
        let on_confirm_delete = on_confirm_delete.clone();
        let id = row.id.clone();
        Callback::from(move |_| on_confirm_delete.emit(id.clone()))
    };
    let cancel = {
        let on_cancel_delete = on_cancel_delete.clone();
        Callback::from(move |_| on_cancel_delete.emit(()))
    };

    html! {
        <div class="list-item" key={row.id.clone()}>
            <div class="list-cell movie-info">
                <div class="movie-details">
                    <h4>{row.title.clone()}</h4>
                    <p class="movie-description">{preview(&row.description, 100)}</p>
                    {trailer.unwrap_or_default()}
                </div>
            </div>
            <div class="list-cell"><span class="genre-badge">{row.genre.clone()}</span></div>
            <div class="list-cell">{row.release_year}</div>
            <div class="list-cell">
                <span class={classes!("rating-badge", rating_class(row.rating))}>
                    {format!("⭐ {}", row.rating_label())}
                </span>
            </div>
            <div class="list-cell">{format_runtime(row.runtime)}</div>
            <div class="list-cell movie-actions">
                <Link<Route> to={Route::EditMovie { id: row.id.clone() }} classes="action-btn edit-btn-list">
                    {"Edit"}
                </Link<Route>>
                <button class="action-btn delete-btn-list" onclick={request_delete}>{"Delete"}</button>
                {if show_delete_confirm {
                    html! {
                        <div class="delete-confirmation">
                            <p>{"Delete this movie?"}</p>
                            <button class="confirm-delete-btn" onclick={confirm}>{"Yes"}</button>
                            <button class="cancel-delete-btn" onclick={cancel}>{"No"}</button>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EditMovieModalProps {
    row: MovieRow,
    on_save: Callback<(String, MovieDraft)>,
    on_cancel: Callback<()>,
}

/// Inline edit modal; submits the full field set, unlike the add form.
#[function_component(EditMovieModal)]
fn edit_movie_modal(props: &EditMovieModalProps) -> Html {
    let fields = use_state(|| FormFields::from_row(&props.row));
    let error = use_state(|| None as Option<String>);

    let on_submit = {
        let fields = fields.clone();
        let error = error.clone();
        let id = props.row.id.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match build_draft(&fields, current_year()) {
                Ok(draft) => {
                    error.set(None);
                    on_save.emit((id.clone(), draft));
                }
                Err(issues) => {
                    let summary = issues
                        .iter()
                        .map(|issue| issue.message.clone())
                        .collect::<Vec<_>>()
                        .join("; ");
                    error.set(Some(summary));
                }
            }
        })
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    let text_field = |apply: fn(&mut FormFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*fields).clone();
                apply(&mut next, input.value());
                fields.set(next);
            }
        })
    };
    let set_genre = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                fields.set(FormFields {
                    genre: select.value(),
                    ..(*fields).clone()
                });
            }
        })
    };
    let set_description = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                fields.set(FormFields {
                    description: area.value(),
                    ..(*fields).clone()
                });
            }
        })
    };

    html! {
        <div class="edit-modal">
            <div class="edit-modal-content">
                <h3>{"Edit Movie"}</h3>
                {if let Some(message) = &*error {
                    html! { <div class="error-message">{format!("❌ {message}")}</div> }
                } else { html! {} }}
                <form onsubmit={on_submit}>
                    <label class="form-group">
                        <span>{"Movie Title"}</span>
                        <input
                            type="text"
                            value={fields.title.clone()}
                            oninput={text_field(|fields, value| fields.title = value)}
                        />
                    </label>
                    <label class="form-group">
                        <span>{"Genre"}</span>
                        <select onchange={set_genre}>
                            {for GENRES.iter().map(|g| html! {
                                <option value={*g} selected={fields.genre == *g}>{*g}</option>
                            })}
                        </select>
                    </label>
                    <div class="form-row">
                        <label class="form-group">
                            <span>{"Release Year"}</span>
                            <input
                                type="number"
                                value={fields.year.clone()}
                                oninput={text_field(|fields, value| fields.year = value)}
                            />
                        </label>
                        <label class="form-group">
                            <span>{"Rating (0-10)"}</span>
                            <input
                                type="number"
                                min="0"
                                max="10"
                                step="0.1"
                                value={fields.rating.clone()}
                                oninput={text_field(|fields, value| fields.rating = value)}
                            />
                        </label>
                        <label class="form-group">
                            <span>{"Runtime (minutes)"}</span>
                            <input
                                type="number"
                                min="1"
                                value={fields.runtime.clone()}
                                oninput={text_field(|fields, value| fields.runtime = value)}
                            />
                        </label>
                    </div>
                    <label class="form-group">
                        <span>{"Poster Image URL"}</span>
                        <input
                            type="url"
                            placeholder="https://example.com/poster.jpg"
                            value={fields.poster_url.clone()}
                            oninput={text_field(|fields, value| fields.poster_url = value)}
                        />
                    </label>
                    <label class="form-group">
                        <span>{"Trailer URL (YouTube)"}</span>
                        <input
                            type="url"
                            placeholder="https://youtube.com/watch?v=..."
                            value={fields.trailer_url.clone()}
                            oninput={text_field(|fields, value| fields.trailer_url = value)}
                        />
                    </label>
                    <label class="form-group">
                        <span>{"Description"}</span>
                        <textarea rows="4" value={fields.description.clone()} oninput={set_description}></textarea>
                    </label>
                    <div class="form-actions">
                        <button type="submit" class="save-edit-btn">{"Save Changes"}</button>
                        <button type="button" class="cancel-edit-btn" onclick={cancel}>{"Cancel"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
