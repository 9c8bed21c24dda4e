//! Routes of the application.

use crate::components::views::{EpisodeDetail, Home, NotFound};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/episodes/:slug")]
        EpisodeDetail { slug: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Browser tab title for a page.
pub fn page_title(label: &str) -> String {
    format!("{label} | Podcastr")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_route_round_trips_through_path() {
        let route = AppView::EpisodeDetail {
            slug: "como-virar-lider-desenvolvimento".to_string(),
        };
        assert_eq!(route.to_string(), "/episodes/como-virar-lider-desenvolvimento");
        assert_eq!(
            "/episodes/como-virar-lider-desenvolvimento".parse::<AppView>().ok(),
            Some(route)
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(matches!(
            "/nada/aqui".parse::<AppView>(),
            Ok(AppView::NotFound { .. })
        ));
    }

    #[test]
    fn titles_carry_the_app_name() {
        assert_eq!(page_title("Home"), "Home | Podcastr");
    }
}
