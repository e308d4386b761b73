use crate::components::toast::ToastHost;
use crate::core::config::UiConfig;
use crate::core::store::AppStore;
use crate::features::links::view::LinksPage;
pub(crate) use api::ApiCtx;
use preferences::load_config;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;
mod routes;

#[function_component(LinkdeckApp)]
pub(crate) fn linkdeck_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let api_ctx = {
        let config = (*config).clone();
        use_memo(move |_| ApiCtx::new(config), ())
    };
    let toasts = use_selector(|store: &AppStore| store.notifications.toasts.clone());
    let on_dismiss = {
        let dispatch = Dispatch::<AppStore>::new();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| store.notifications.dismiss(id));
        })
    };

    html! {
        <ContextProvider<UiConfig> context={(*config).clone()}>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <BrowserRouter>
                    <main class="min-h-screen bg-base-200">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
                <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
            </ContextProvider<ApiCtx>>
        </ContextProvider<UiConfig>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Links | Route::ProjectLinks { .. } => html! { <LinksPage scope={route.scope()} /> },
        Route::NotFound => html! {
            <div class="hero min-h-[50vh]">
                <div class="hero-content text-center">
                    <h1 class="text-lg font-medium">{"Page not found"}</h1>
                </div>
            </div>
        },
    }
}

/// Mount the dashboard into the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<LinkdeckApp>::new().render();
}
