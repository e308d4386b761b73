//! Link favicon with a blur-in placeholder.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FaviconProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Favicon)]
pub(crate) fn favicon(props: &FaviconProps) -> Html {
    let loaded_src = use_state(|| None::<AttrValue>);
    let on_load = {
        let loaded_src = loaded_src.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| loaded_src.set(Some(src.clone())))
    };
    let loaded = (*loaded_src).as_ref() == Some(&props.src);
    let classes = classes!(
        "transition",
        (!loaded).then_some("blur-sm"),
        props.class.clone()
    );

    html! {
        <img
            class={classes}
            src={props.src.clone()}
            alt={props.alt.clone()}
            width={props.size.to_string()}
            height={props.size.to_string()}
            onload={on_load}
        />
    }
}
