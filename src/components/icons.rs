use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconName {
    Play,
    Pause,
    Previous,
    Next,
    Shuffle,
    Repeat,
    ArrowLeft,
    Headphones,
    Loader,
}

impl IconName {
    /// Accessible label, in the app's language.
    pub fn label(self) -> &'static str {
        match self {
            IconName::Play => "Tocar",
            IconName::Pause => "Pausar",
            IconName::Previous => "Tocar anterior",
            IconName::Next => "Tocar próximo",
            IconName::Shuffle => "Embaralhar",
            IconName::Repeat => "Repetir",
            IconName::ArrowLeft => "Voltar",
            IconName::Headphones => "Tocando agora",
            IconName::Loader => "Carregando",
        }
    }
}

#[component]
pub fn Icon(name: IconName, #[props(default, into)] class: String) -> Element {
    let label = name.label();
    match name {
        IconName::Play => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                role: "img",
                "aria-label": label,
                polygon { points: "6 3 20 12 6 21 6 3" }
            }
        },
        IconName::Pause => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                role: "img",
                "aria-label": label,
                rect { x: "6", y: "4", width: "4", height: "16", rx: "1" }
                rect { x: "14", y: "4", width: "4", height: "16", rx: "1" }
            }
        },
        IconName::Previous => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                role: "img",
                "aria-label": label,
                polygon { points: "19 20 9 12 19 4 19 20" }
                rect { x: "4", y: "5", width: "2", height: "14" }
            }
        },
        IconName::Next => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                role: "img",
                "aria-label": label,
                polygon { points: "5 4 15 12 5 20 5 4" }
                rect { x: "18", y: "5", width: "2", height: "14" }
            }
        },
        IconName::Shuffle => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                role: "img",
                "aria-label": label,
                polyline { points: "16 3 21 3 21 8" }
                path { d: "M4 20L21 3" }
                polyline { points: "21 16 21 21 16 21" }
                path { d: "M15 15l6 6M4 4l5 5" }
            }
        },
        IconName::Repeat => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                role: "img",
                "aria-label": label,
                polyline { points: "17 1 21 5 17 9" }
                path { d: "M3 11V9a4 4 0 0 1 4-4h14" }
                polyline { points: "7 23 3 19 7 15" }
                path { d: "M21 13v2a4 4 0 0 1-4 4H3" }
            }
        },
        IconName::ArrowLeft => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                role: "img",
                "aria-label": label,
                path { d: "M19 12H5M12 19l-7-7 7-7" }
            }
        },
        IconName::Headphones => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                role: "img",
                "aria-label": label,
                path { d: "M3 18v-6a9 9 0 0 1 18 0v6" }
                path { d: "M21 19a2 2 0 0 1-2 2h-1v-6h3zM3 19a2 2 0 0 0 2 2h1v-6H3z" }
            }
        },
        IconName::Loader => rsx! {
            svg {
                class: "{class} animate-spin",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                role: "img",
                "aria-label": label,
                path { d: "M21 12a9 9 0 1 1-6.22-8.56" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_an_accessible_label() {
        let all = [
            IconName::Play,
            IconName::Pause,
            IconName::Previous,
            IconName::Next,
            IconName::Shuffle,
            IconName::Repeat,
            IconName::ArrowLeft,
            IconName::Headphones,
            IconName::Loader,
        ];
        for name in all {
            assert!(!name.label().is_empty(), "{name:?} has no label");
        }
    }
}
