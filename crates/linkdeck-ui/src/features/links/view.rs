//! Link listing page.

use crate::app::ApiCtx;
use crate::components::daisy::{Button, DaisySize, DaisyVariant, Loading};
use crate::core::display::pretty_shortlink;
use crate::core::store::AppStore;
use crate::features::archive::logic::LinkScope;
use crate::features::archive::view::use_archive_link_modal;
use crate::features::links::api::refresh_key;
use crate::features::links::state::{
    LinksKeys, archive_action_for, keys_to_fetch, report_refresh_failure, select_count,
    select_links,
};
use gloo::console;
use linkdeck_api_models::{Link, LinksQuery};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store_value};

#[derive(Properties, PartialEq)]
pub(crate) struct LinksPageProps {
    pub scope: LinkScope,
}

#[function_component(LinksPage)]
pub(crate) fn links_page(props: &LinksPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let show_archived = use_state(|| false);
    let keys = {
        let query = LinksQuery {
            show_archived: *show_archived,
        };
        LinksKeys::new(&props.scope, query)
    };
    let fetching = use_mut_ref(HashSet::<String>::new);

    let store = use_store_value::<AppStore>();
    let links = select_links(&store.cache, &keys);
    let count = select_count(&store.cache, &keys);
    let to_fetch = keys_to_fetch(&store.cache, &keys);

    {
        let fetching = fetching.clone();
        use_effect_with_deps(
            move |pending: &Vec<String>| {
                if let Some(ctx) = api_ctx {
                    for key in pending {
                        spawn_refresh(&ctx, &fetching, key.clone());
                    }
                } else if !pending.is_empty() {
                    console::error!("api client context missing");
                }
                || ()
            },
            to_fetch,
        );
    }

    let on_toggle_archived = {
        let show_archived = show_archived.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            show_archived.set(input.checked());
        })
    };

    let title = props
        .scope
        .slug()
        .map_or_else(|| "Links".to_string(), |slug| format!("{slug} links"));
    let body = match links {
        None => html! {
            <div class="flex justify-center py-10"><Loading label="Loading links" /></div>
        },
        Some(rows) if rows.is_empty() => html! {
            <p class="py-10 text-center text-sm text-base-content/60">{"No links yet."}</p>
        },
        Some(rows) => html! {
            <ul class="divide-y divide-base-300">
                {for rows.into_iter().map(|link| html! { <LinkRow key={link.id.clone()} link={link} /> })}
            </ul>
        },
    };

    html! {
        <section class="mx-auto max-w-3xl space-y-4 p-6">
            <header class="flex items-center justify-between">
                <h1 class="text-xl font-semibold">
                    {title}
                    {count.map(|total| html! {
                        <span class="badge badge-ghost ml-2">{total}</span>
                    }).unwrap_or_default()}
                </h1>
                <label class="label cursor-pointer gap-2">
                    <span class="label-text">{"Show archived"}</span>
                    <input
                        type="checkbox"
                        class="toggle toggle-sm"
                        checked={*show_archived}
                        onchange={on_toggle_archived}
                    />
                </label>
            </header>
            <div class="card bg-base-100 shadow-sm">{body}</div>
        </section>
    }
}

fn spawn_refresh(ctx: &ApiCtx, fetching: &Rc<RefCell<HashSet<String>>>, key: String) {
    if !fetching.borrow_mut().insert(key.clone()) {
        return;
    }
    let client = ctx.client.clone();
    let fetching = fetching.clone();
    yew::platform::spawn_local(async move {
        let dispatch = Dispatch::<AppStore>::new();
        if let Err(err) = refresh_key(&client, &dispatch, &key).await {
            report_refresh_failure(&dispatch, &err);
        }
        fetching.borrow_mut().remove(&key);
    });
}

#[derive(Properties, PartialEq)]
struct LinkRowProps {
    link: Link,
}

#[function_component(LinkRow)]
fn link_row(props: &LinkRowProps) -> Html {
    let archived = archive_action_for(&props.link);
    let dialog = use_archive_link_modal(props.link.clone(), archived);
    let on_open = {
        let set_show = dialog.set_show.clone();
        Callback::from(move |_: MouseEvent| set_show.emit(true))
    };
    let label = if archived { "Archive" } else { "Unarchive" };

    html! {
        <li class="flex items-center justify-between gap-4 px-4 py-3">
            <div class="min-w-0">
                <p class="truncate font-medium">
                    {pretty_shortlink(&props.link)}
                    {props.link.archived.then(|| html! {
                        <span class="badge badge-outline badge-sm ml-2">{"Archived"}</span>
                    }).unwrap_or_default()}
                </p>
                <p class="truncate text-sm text-base-content/60">{props.link.url.clone()}</p>
            </div>
            <div class="flex items-center gap-3">
                <span class="text-sm text-base-content/60">{format!("{} clicks", props.link.clicks)}</span>
                <Button size={DaisySize::Xs} variant={DaisyVariant::Outline} onclick={on_open}>
                    {label}
                </Button>
            </div>
            {dialog.modal}
        </li>
    }
}
