//! Archive confirmation dialog.
//!
//! # Design
//! - Each mounted dialog owns its in-flight flag; the yew state mirrors it for rendering.
//! - Visibility is the parent's `show` prop; every close path goes through `on_show_change`.
//! - Clicks and dismissal are ignored while a toggle is outstanding.

use crate::app::{ApiCtx, Route};
use crate::components::daisy::{Button, DaisyColor, Modal};
use crate::components::favicon::Favicon;
use crate::core::config::UiConfig;
use crate::core::display::{apex_domain, favicon_url, pretty_shortlink};
use crate::core::notifications::Notifier;
use crate::core::store::AppStore;
use crate::features::archive::controller::{ToggleController, ToggleRequest};
use crate::features::archive::logic::{ArchiveDirection, LinkScope};
use crate::features::archive::state::{ArchiveDialogState, DialogHandle, confirm_control};
use gloo::console;
use linkdeck_api_models::Link;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::use_route;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct ArchiveLinkModalProps {
    pub link: Link,
    /// Action to perform: archive when true, unarchive when false.
    pub archived: bool,
    pub show: bool,
    pub on_show_change: Callback<bool>,
}

/// Bridges the in-flight flag to yew state and closes through the parent's show flag.
struct YewDialog {
    state: Rc<ArchiveDialogState>,
    busy: UseStateHandle<bool>,
    on_show_change: Callback<bool>,
}

impl DialogHandle for YewDialog {
    fn in_flight(&self) -> bool {
        self.state.in_flight()
    }

    fn set_in_flight(&self, value: bool) {
        self.state.set_in_flight(value);
        self.busy.set(value);
    }

    fn close(&self) {
        self.on_show_change.emit(false);
    }
}

#[function_component(ArchiveLinkModal)]
pub(crate) fn archive_link_modal(props: &ArchiveLinkModalProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let config = use_context::<UiConfig>().unwrap_or_default();
    let scope = use_route::<Route>().map_or(LinkScope::Unscoped, |route| route.scope());
    let dialog_state = use_memo(|_| ArchiveDialogState::new(), ());
    let busy = use_state(|| false);

    let direction = ArchiveDirection::from_archived(props.archived);
    let apex = apex_domain(&props.link.url);
    let shortlink = use_memo(pretty_shortlink, props.link.clone());
    let control = confirm_control(direction, *busy);

    let on_confirm = {
        let link = props.link.clone();
        let archived = props.archived;
        let scope = scope.clone();
        let dialog_state = dialog_state.clone();
        let busy = busy.clone();
        let on_show_change = props.on_show_change.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let dispatch = Dispatch::<AppStore>::new();
            let request = match ToggleRequest::new(&link, archived, scope.clone()) {
                Ok(request) => request,
                Err(err) => {
                    dispatch.error(&err.to_string());
                    return;
                }
            };
            let Some(ctx) = api_ctx.clone() else {
                console::error!("api client context missing");
                return;
            };
            let dialog = YewDialog {
                state: dialog_state.clone(),
                busy: busy.clone(),
                on_show_change: on_show_change.clone(),
            };
            yew::platform::spawn_local(async move {
                ToggleController::new(ctx.client.as_ref(), &dispatch, &dispatch)
                    .toggle(&request, &dialog)
                    .await;
            });
        })
    };

    let on_close = {
        let on_show_change = props.on_show_change.clone();
        Callback::from(move |()| on_show_change.emit(false))
    };

    let header = html! {
        <>
            <Favicon
                src={favicon_url(&config.favicon_service, &apex)}
                alt={apex.clone()}
                class="h-10 w-10 rounded-full"
            />
            <h3 class="text-lg font-medium">{direction.title(&shortlink)}</h3>
            <p class="text-sm text-base-content/60">{direction.description()}</p>
        </>
    };

    html! {
        <Modal
            open={props.show}
            header={header}
            dismissible={!control.loading}
            on_close={on_close}
        >
            <Button
                tone={DaisyColor::Neutral}
                full_width=true
                autofocus=true
                disabled={control.disabled}
                loading={control.loading}
                onclick={on_confirm}
            >
                {control.label.clone()}
            </Button>
        </Modal>
    }
}

/// Setter plus rendered dialog for one link.
pub(crate) struct ArchiveLinkModalHandle {
    pub set_show: Callback<bool>,
    pub modal: Html,
}

/// Own an archive dialog for `link`; `archived` is the action to perform.
#[hook]
pub(crate) fn use_archive_link_modal(link: Link, archived: bool) -> ArchiveLinkModalHandle {
    let show = use_state(|| false);
    let set_show = {
        let show = show.clone();
        Callback::from(move |value: bool| show.set(value))
    };
    let modal = html! {
        <ArchiveLinkModal
            link={link}
            archived={archived}
            show={*show}
            on_show_change={set_show.clone()}
        />
    };
    ArchiveLinkModalHandle { set_show, modal }
}
