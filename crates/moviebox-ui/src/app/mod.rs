//! App wiring: session restore, list fetching/reconciliation, and routing.
//!
//! # Design
//! - Side effects for the shared movie list live here; views receive rows
//!   and emit typed requests via callbacks.
//! - Optimistic mutations apply to the store first; the remote outcome only
//!   decides which toast the user sees.

use crate::app::api::ApiCtx;
use crate::components::auth::{ForgotPasswordPage, LoginPage, ResetPasswordPage, SignupPage};
use crate::components::browse::BrowsePage;
use crate::components::guard::RequireSession;
use crate::components::home::HomePage;
use crate::components::movie_form::{AddMoviePage, EditMoviePage};
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::session::Session;
use crate::core::store::AppStore;
use crate::features::movies::actions::{MutationOutcome, delete_feedback, update_feedback};
use crate::features::movies::state::{
    DataSource, MovieRow, merge_draft, remove_row, replace_row, select_visible_rows, set_rows,
};
use crate::models::{Toast, ToastKind, sample_movies};
use moviebox_api_models::{Movie, MovieDraft};
use preferences::{api_base_url, clear_session, load_session};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

pub(crate) use routes::Route;

fn sample_rows() -> Vec<MovieRow> {
    sample_movies().into_iter().map(MovieRow::from).collect()
}

#[function_component(MovieboxApp)]
fn moviebox_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);

    let session = use_selector(|store: &AppStore| store.session.current.clone());
    let search = use_selector(|store: &AppStore| store.movies.filters.search.clone());
    let rows = use_selector(|store: &AppStore| select_visible_rows(&store.movies));
    let source = use_selector(|store: &AppStore| store.movies.source);
    let loading = use_selector(|store: &AppStore| store.movies.loading);
    let last_error = use_selector(|store: &AppStore| store.movies.last_error.clone());

    // Restore the stored session once, before the router gates anything.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let restored = load_session();
                dispatch.reduce_mut(|store| {
                    store.session.current = restored;
                    store.session.restored = true;
                });
                || ()
            },
            (),
        );
    }

    // Keep the shared client's token in line with the session.
    {
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |session: &Rc<Option<Session>>| {
                api_ctx.adopt_session((**session).as_ref());
                || ()
            },
            session.clone(),
        );
    }

    let refresh = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |_| {
            let dispatch = dispatch.clone();
            let client = api_ctx.client();
            dispatch.reduce_mut(|store| {
                store.movies.loading = true;
            });
            yew::platform::spawn_local(async move {
                let query = dispatch.get().movies.filters.search.trim().to_string();
                let fetched = if query.is_empty() {
                    client.list_movies().await
                } else {
                    client.search_movies(&query).await
                };
                match fetched {
                    Ok(list) if !list.is_empty() => dispatch.reduce_mut(|store| {
                        store.movies.last_error = None;
                        set_rows(
                            &mut store.movies,
                            list.into_iter().map(MovieRow::from).collect(),
                            DataSource::Remote,
                        );
                    }),
                    Ok(_) => dispatch.reduce_mut(|store| {
                        store.movies.last_error = None;
                        set_rows(&mut store.movies, sample_rows(), DataSource::Sample);
                    }),
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.movies.last_error = Some(format!("{err}"));
                        set_rows(&mut store.movies, sample_rows(), DataSource::Sample);
                    }),
                }
            });
        })
    };

    // Fetch whenever the session or the search query changes.
    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |(session, _search): &(Rc<Option<Session>>, Rc<String>)| {
                if (**session).is_some() {
                    refresh.emit(());
                }
                || ()
            },
            (session.clone(), search.clone()),
        );
    }

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };

    let set_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| {
            dispatch.reduce_mut(|store| {
                store.movies.filters.search = value;
            });
        })
    };

    let on_delete = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |id: String| {
            let title = dispatch
                .get()
                .movies
                .by_id
                .get(&id)
                .map_or_else(|| "this movie".to_string(), |row| row.title.clone());
            // Optimistic: the row disappears now; the outcome only picks the toast.
            dispatch.reduce_mut(|store| remove_row(&mut store.movies, &id));
            let client = api_ctx.client();
            let toasts = toasts.clone();
            let toast_id = toast_id.clone();
            yew::platform::spawn_local(async move {
                let outcome = match client.delete_movie(&id).await {
                    Ok(()) => MutationOutcome::Confirmed,
                    Err(err) => MutationOutcome::LocalOnly {
                        reason: format!("{err}"),
                    },
                };
                let (kind, message) = delete_feedback(&outcome, &title);
                push_toast(&toasts, &toast_id, kind, message);
            });
        })
    };

    let on_update = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |(id, draft): (String, MovieDraft)| {
            let client = api_ctx.client();
            let dispatch = dispatch.clone();
            let toasts = toasts.clone();
            let toast_id = toast_id.clone();
            let title = draft.title.clone();
            yew::platform::spawn_local(async move {
                let outcome = match client.update_movie(&id, &draft).await {
                    Ok(movie) => {
                        dispatch.reduce_mut(|store| {
                            replace_row(&mut store.movies, MovieRow::from(movie));
                        });
                        MutationOutcome::Confirmed
                    }
                    Err(err) => {
                        // Keep the user's edits locally even without confirmation.
                        dispatch.reduce_mut(|store| merge_draft(&mut store.movies, &id, &draft));
                        MutationOutcome::LocalOnly {
                            reason: format!("{err}"),
                        }
                    }
                };
                let (kind, message) = update_feedback(&outcome, &title);
                push_toast(&toasts, &toast_id, kind, message);
            });
        })
    };

    let on_saved = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        let refresh = refresh.clone();
        Callback::from(move |movie: Movie| {
            push_toast(
                &toasts,
                &toast_id,
                ToastKind::Success,
                format!("Saved {}", movie.title),
            );
            refresh.emit(());
        })
    };

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            clear_session();
            dispatch.reduce_mut(|store| {
                store.session.current = None;
            });
        })
    };

    let session_value = (*session).clone();
    let user = session_value
        .as_ref()
        .map(Session::display_name)
        .unwrap_or_default();
    let rows_value = (*rows).clone();
    let source_value = *source;
    let loading_value = *loading;
    let last_error_value = (*last_error).clone();
    let search_value = (*search).clone();

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={move |route| {
                    match route {
                        Route::Login => html! { <LoginPage /> },
                        Route::Signup => html! { <SignupPage /> },
                        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
                        Route::ResetPassword => html! { <ResetPasswordPage /> },
                        Route::Home => html! {
                            <RequireSession>
                                <AppShell active={Route::Home} user={user.clone()} on_logout={on_logout.clone()}>
                                    <HomePage
                                        rows={rows_value.clone()}
                                        loading={loading_value}
                                        user={user.clone()}
                                        on_refresh={refresh.clone()}
                                    />
                                </AppShell>
                            </RequireSession>
                        },
                        Route::Browse => html! {
                            <RequireSession>
                                <AppShell active={Route::Browse} user={user.clone()} on_logout={on_logout.clone()}>
                                    <BrowsePage
                                        rows={rows_value.clone()}
                                        source={source_value}
                                        loading={loading_value}
                                        last_error={last_error_value.clone()}
                                        search={search_value.clone()}
                                        on_search={set_search.clone()}
                                        on_delete={on_delete.clone()}
                                        on_update={on_update.clone()}
                                        on_refresh={refresh.clone()}
                                    />
                                </AppShell>
                            </RequireSession>
                        },
                        Route::AddMovie => html! {
                            <RequireSession>
                                <AppShell active={Route::AddMovie} user={user.clone()} on_logout={on_logout.clone()}>
                                    <AddMoviePage on_saved={on_saved.clone()} />
                                </AppShell>
                            </RequireSession>
                        },
                        Route::EditMovie { id } => html! {
                            <RequireSession>
                                <AppShell active={Route::Browse} user={user.clone()} on_logout={on_logout.clone()}>
                                    <EditMoviePage id={id} on_saved={on_saved.clone()} />
                                </AppShell>
                            </RequireSession>
                        },
                        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
                    }
                }} />
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn push_toast(
    toasts: &UseStateHandle<Vec<Toast>>,
    next_id: &UseStateHandle<u64>,
    kind: ToastKind,
    message: String,
) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    list.push(Toast { id, message, kind });
    if list.len() > 4 {
        let drain = list.len() - 4;
        list.drain(0..drain);
    }
    toasts.set(list);
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MovieboxApp>::with_root(root).render();
    } else {
        yew::Renderer::<MovieboxApp>::new().render();
    }
}
