//! Centered dialog with a header band above its actions.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub open: bool,
    /// Rendered on a bordered band above the body.
    #[prop_or_default]
    pub header: Html,
    #[prop_or_default]
    pub children: Children,
    /// Whether the backdrop and Escape close the dialog.
    #[prop_or(true)]
    pub dismissible: bool,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let dismiss = {
        let on_close = props.on_close.clone();
        let dismissible = props.dismissible;
        Callback::from(move |()| {
            if dismissible {
                on_close.emit(());
            }
        })
    };
    let on_backdrop = dismiss.reform(|_: MouseEvent| ());
    let on_keydown =
        dismiss.filter_reform(|event: KeyboardEvent| (event.key() == "Escape").then_some(()));

    html! {
        <div
            class={classes!("modal", props.open.then_some("modal-open"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!props.open).then_some("true")}
            onkeydown={on_keydown}
        >
            <div class="modal-box overflow-hidden p-0">
                <header class="flex flex-col items-center justify-center space-y-3 border-b border-base-300 px-4 py-4 pt-8 text-center sm:px-16">
                    {props.header.clone()}
                </header>
                <div class="flex flex-col space-y-6 bg-base-200 px-4 py-8 text-left sm:px-16">
                    { for props.children.iter() }
                </div>
            </div>
            <button
                class="modal-backdrop"
                aria-label="Close"
                disabled={!props.dismissible}
                onclick={on_backdrop}
            ></button>
        </div>
    }
}
