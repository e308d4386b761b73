//! Routing definitions for the Linkdeck UI.
use crate::features::archive::logic::LinkScope;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Links,
    #[at("/:slug")]
    ProjectLinks { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Workspace scope implied by the route.
    pub(crate) fn scope(&self) -> LinkScope {
        match self {
            Self::ProjectLinks { slug } => LinkScope::from_slug(Some(slug)),
            Self::Links | Self::NotFound => LinkScope::Unscoped,
        }
    }
}
