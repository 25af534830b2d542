use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::hooks::dom::observe_intersections;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger applied as `transition-delay`.
    #[prop_or(0)]
    pub delay_ms: u32,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let set_visible = visible.setter();
        let show_now = visible.setter();
        use_effect_with_deps(
            move |_| {
                let guard = node.cast::<Element>().and_then(|element| {
                    let result = observe_intersections(
                        &[element],
                        config::REVEAL_THRESHOLD,
                        move |entries, observer| {
                            if entries.iter().any(|entry| entry.is_intersecting()) {
                                set_visible.set(true);
                                observer.disconnect();
                            }
                        },
                    );
                    match result {
                        Ok(guard) => Some(guard),
                        Err(e) => {
                            warn!("Reveal observer unavailable, showing content: {}", e);
                            None
                        }
                    }
                });
                if guard.is_none() {
                    show_now.set(true);
                }
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
