use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, tone_class};
use crate::components::daisy::loading::Loading;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub size: DaisySize,
    #[prop_or(DaisyVariant::Solid)]
    pub variant: DaisyVariant,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Shows a spinner and blocks clicks.
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub autofocus: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let tone = tone_class("btn", props.tone);
    let size = props.size.with_prefix("btn");
    let mut classes = classes!(
        "btn",
        props.variant.as_class(),
        size,
        props.full_width.then_some("btn-block"),
        props.class.clone()
    );
    if let Some(tone) = tone {
        classes.push(tone);
    }

    html! {
        <button
            class={classes}
            type="button"
            disabled={props.disabled || props.loading}
            aria-busy={props.loading.then_some("true")}
            autofocus={props.autofocus}
            onclick={props.onclick.clone()}
        >
            { props.loading.then(|| html! { <Loading /> }).unwrap_or_default() }
            { for props.children.iter() }
        </button>
    }
}
