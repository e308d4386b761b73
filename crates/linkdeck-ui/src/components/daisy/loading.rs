use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingProps {
    #[prop_or(DaisySize::Sm)]
    pub size: DaisySize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Loading)]
pub(crate) fn loading(props: &LoadingProps) -> Html {
    let size = props.size.with_prefix("loading");
    let classes = classes!("loading", "loading-spinner", size, props.class.clone());
    html! {
        <span class={classes} role="status" aria-label={props.label.clone()} />
    }
}
