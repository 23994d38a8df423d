//! Create/edit form panel and the pages that host it.
//!
//! # Design
//! - Field parsing/validation lives in `features::movies::form`; the panel
//!   only binds inputs and renders per-field errors.
//! - The panel owns its own submission so inline success/failure states stay
//!   local; the hosting page hears about saves via `on_saved`.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::features::movies::form::{FormFields, build_draft, issue_for};
use crate::features::movies::state::MovieRow;
use gloo_timers::callback::Timeout;
use moviebox_api_models::{DraftField, DraftIssue, GENRES, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, Movie};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

/// Current year from the browser clock, for release-year validation.
pub(crate) fn current_year() -> i32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let year = js_sys::Date::new_0().get_full_year() as i32;
    year
}

#[derive(Properties, PartialEq)]
pub(crate) struct MovieFormPanelProps {
    /// Record to edit; `None` runs the panel in add mode.
    #[prop_or_default]
    pub movie_id: Option<String>,
    pub on_saved: Callback<Movie>,
}

#[function_component(MovieFormPanel)]
pub(crate) fn movie_form_panel(props: &MovieFormPanelProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let fields = use_state(|| FormFields::blank(current_year()));
    let issues = use_state(Vec::<DraftIssue>::new);
    let submit_error = use_state(|| None as Option<String>);
    let fetch_error = use_state(|| None as Option<String>);
    let success = use_state(|| None as Option<String>);
    let busy = use_state(|| false);
    let loading = use_state(|| props.movie_id.is_some());

    let edit_mode = props.movie_id.is_some();

    let load = {
        let api_ctx = api_ctx.clone();
        let fields = fields.clone();
        let fetch_error = fetch_error.clone();
        let loading = loading.clone();
        let movie_id = props.movie_id.clone();
        Callback::from(move |_| {
            let Some(id) = movie_id.clone() else {
                return;
            };
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            let fields = fields.clone();
            let fetch_error = fetch_error.clone();
            let loading = loading.clone();
            loading.set(true);
            yew::platform::spawn_local(async move {
                match api_ctx.client().get_movie(&id).await {
                    Ok(movie) => {
                        fields.set(FormFields::from_row(&MovieRow::from(movie)));
                        fetch_error.set(None);
                    }
                    Err(err) => fetch_error.set(Some(format!("Failed to load movie data: {err}"))),
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |movie_id: &Option<String>| {
                if movie_id.is_some() {
                    load.emit(());
                }
                || ()
            },
            props.movie_id.clone(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {};
    };

    let on_submit = {
        let fields = fields.clone();
        let issues = issues.clone();
        let submit_error = submit_error.clone();
        let success = success.clone();
        let busy = busy.clone();
        let client = api_ctx.client();
        let movie_id = props.movie_id.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = match build_draft(&fields, current_year()) {
                Ok(draft) => draft,
                Err(found) => {
                    issues.set(found);
                    return;
                }
            };
            issues.set(Vec::new());
            submit_error.set(None);
            busy.set(true);
            let client = client.clone();
            let movie_id = movie_id.clone();
            let on_saved = on_saved.clone();
            let fields = fields.clone();
            let submit_error = submit_error.clone();
            let success = success.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                let result = match &movie_id {
                    Some(id) => client.update_movie(id, &draft).await,
                    None => client.create_movie(&draft).await,
                };
                match result {
                    Ok(movie) => {
                        success.set(Some(if movie_id.is_some() {
                            "Movie updated successfully!".to_string()
                        } else {
                            "Movie added successfully!".to_string()
                        }));
                        if movie_id.is_none() {
                            fields.set(FormFields::blank(current_year()));
                        }
                        on_saved.emit(movie);
                    }
                    Err(err) => submit_error.set(Some(format!(
                        "Failed to {} movie: {err}",
                        if movie_id.is_some() { "update" } else { "add" }
                    ))),
                }
                busy.set(false);
            });
        })
    };

    let on_reset = {
        let fields = fields.clone();
        let issues = issues.clone();
        let submit_error = submit_error.clone();
        let success = success.clone();
        let load = load.clone();
        Callback::from(move |_| {
            if edit_mode {
                load.emit(());
            } else {
                fields.set(FormFields::blank(current_year()));
            }
            issues.set(Vec::new());
            submit_error.set(None);
            success.set(None);
        })
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

    let field_error = |field: DraftField| -> Html {
        match issue_for(&issues, field) {
            Some(message) => html! { <span class="error-text">{message}</span> },
            None => html! {},
        }
    };

    if *loading {
        return html! {
            <div class="form-loading">
                <div class="spinner"></div>
                <p>{"Loading movie data..."}</p>
            </div>
        };
    }

    html! {
        <div class="movie-form-container">
            <div class="form-header">
                <h2>{if edit_mode { "Edit Movie" } else { "Add New Movie" }}</h2>
                <p class="form-subtitle">
                    {if edit_mode {
                        "Update the movie details below"
                    } else {
                        "Fill in the details to add a new movie to your collection"
                    }}
                </p>
            </div>

            {if let Some(error) = &*fetch_error {
                let load = load.clone();
                html! {
                    <div class="error-message fetch-error">
                        {format!("⚠️ {error}")}
                        <button class="retry-btn" onclick={Callback::from(move |_| load.emit(()))}>
                            {"Retry"}
                        </button>
                    </div>
                }
            } else { html! {} }}

            {if let Some(message) = &*success {
                html! { <div class="success-message">{format!("✅ {message}")}</div> }
            } else { html! {} }}

            <form class="movie-form" onsubmit={on_submit}>
                <div class="form-section">
                    <h3 class="section-title">{"Basic Information"}</h3>
                    <label class="form-group">
                        <span class="required">{"Movie Name"}</span>
                        <input
                            type="text"
                            placeholder="Enter movie name"
                            maxlength={MAX_TITLE_LEN.to_string()}
                            value={fields.title.clone()}
                            oninput={text_field(|fields, value| fields.title = value)}
                        />
                        <span class="char-count">{format!("{}/{}", fields.title.chars().count(), MAX_TITLE_LEN)}</span>
                        {field_error(DraftField::Title)}
                    </label>
                    <label class="form-group">
                        <span class="required">{"Genre"}</span>
                        <select onchange={set_genre}>
                            <option value="" selected={fields.genre.is_empty()}>{"Select a genre"}</option>
                            {for GENRES.iter().map(|g| html! {
                                <option value={*g} selected={fields.genre == *g}>{*g}</option>
                            })}
                        </select>
                        {field_error(DraftField::Genre)}
                    </label>
                </div>

                <div class="form-section">
                    <h3 class="section-title">{"Details"}</h3>
                    <div class="form-row">
                        <label class="form-group">
                            <span class="required">{"Release Year"}</span>
                            <input
                                type="number"
                                value={fields.year.clone()}
                                oninput={text_field(|fields, value| fields.year = value)}
                            />
                            {field_error(DraftField::ReleaseYear)}
                        </label>
                        <label class="form-group">
                            <span>{format!("Rating: {}/10", fields.rating)}</span>
                            <input
                                type="range"
                                min="0"
                                max="10"
                                step="0.1"
                                class="rating-slider"
                                value={fields.rating.clone()}
                                oninput={text_field(|fields, value| fields.rating = value)}
                            />
                            {field_error(DraftField::Rating)}
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
                        <span>{"Description "}<span class="optional">{"(Optional)"}</span></span>
                        <textarea
                            rows="4"
                            placeholder="Enter movie description..."
                            maxlength={MAX_DESCRIPTION_LEN.to_string()}
                            value={fields.description.clone()}
                            oninput={set_description}
                        ></textarea>
                        <span class="char-count">{format!("{}/{}", fields.description.chars().count(), MAX_DESCRIPTION_LEN)}</span>
                        {field_error(DraftField::Description)}
                    </label>
                </div>

                {if let Some(error) = &*submit_error {
                    html! { <div class="error-message submit-error">{format!("❌ {error}")}</div> }
                } else { html! {} }}

                <div class="form-actions">
                    <button type="submit" class="btn-submit" disabled={*busy}>
                        {match (edit_mode, *busy) {
                            (true, true) => "Updating...",
                            (true, false) => "Update Movie",
                            (false, true) => "Adding...",
                            (false, false) => "Add Movie",
                        }}
                    </button>
                    <button type="button" class="btn-reset" disabled={*busy} onclick={on_reset}>
                        {"Reset"}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AddMoviePageProps {
    pub on_saved: Callback<Movie>,
}

#[function_component(AddMoviePage)]
pub(crate) fn add_movie_page(props: &AddMoviePageProps) -> Html {
    let navigator = use_navigator();

    let on_saved = {
        let on_saved = props.on_saved.clone();
        Callback::from(move |movie: Movie| {
            on_saved.emit(movie);
            let navigator = navigator.clone();
            Timeout::new(1_500, move || {
                if let Some(nav) = navigator {
                    nav.push(&Route::Browse);
                }
            })
            .forget();
        })
    };

    html! {
        <div class="add-movie-page">
            <div class="page-header">
                <div class="header-actions">
                    <Link<Route> to={Route::Browse} classes="action-link">{"Browse"}</Link<Route>>
                    <Link<Route> to={Route::Home} classes="action-link">{"Home"}</Link<Route>>
                </div>
                <h1><span class="highlight">{"Add Movie"}</span>{" to Collection"}</h1>
                <p class="page-subtitle">
                    {"Fill in the details below to add a movie to your personal collection."}
                </p>
            </div>
            <div class="content-container">
                <div class="form-card">
                    <MovieFormPanel on_saved={on_saved} />
                </div>
                <aside class="sidebar-section">
                    <div class="sidebar-card tips-card">
                        <h3>{"Tips for Better Organization"}</h3>
                        <ul class="tips-list">
                            <li>{"Use the original movie title"}</li>
                            <li>{"Select the most specific genre"}</li>
                            <li>{"Add personal notes in the description"}</li>
                            <li>{"Rate immediately after watching"}</li>
                            <li>{"Use the original release year"}</li>
                        </ul>
                    </div>
                </aside>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EditMoviePageProps {
    pub id: String,
    pub on_saved: Callback<Movie>,
}

#[function_component(EditMoviePage)]
pub(crate) fn edit_movie_page(props: &EditMoviePageProps) -> Html {
    let navigator = use_navigator();

    let on_saved = {
        let on_saved = props.on_saved.clone();
        Callback::from(move |movie: Movie| {
            on_saved.emit(movie);
            let navigator = navigator.clone();
            Timeout::new(1_500, move || {
                if let Some(nav) = navigator {
                    nav.push(&Route::Browse);
                }
            })
            .forget();
        })
    };

    html! {
        <div class="edit-movie-page">
            <div class="page-header">
                <div class="header-actions">
                    <Link<Route> to={Route::Browse} classes="action-link">{"Browse"}</Link<Route>>
                    <Link<Route> to={Route::Home} classes="action-link">{"Home"}</Link<Route>>
                </div>
                <h1><span class="highlight">{"Edit Movie"}</span></h1>
            </div>
            <div class="content-container">
                <div class="form-card">
                    <MovieFormPanel movie_id={Some(props.id.clone())} on_saved={on_saved} />
                </div>
            </div>
        </div>
    }
}
