use yew::prelude::*;

use crate::hooks::use_pointer_follower::use_pointer_follower;
use crate::pointer::FollowerOptions;

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or(0.2)]
    pub strength: f64,
    #[prop_or_default]
    pub disabled: bool,
    /// `"submit"` to submit the enclosing form.
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
}

/// A button that leans toward the cursor and springs back when it leaves.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let follow = use_pointer_follower(
        node.clone(),
        FollowerOptions {
            strength: props.strength,
            ..FollowerOptions::default()
        },
    );

    html! {
        <button
            ref={node}
            type={props.button_type.clone()}
            class={classes!("magnetic-button", props.class.clone())}
            style={follow.translate_style()}
            onmousemove={follow.onmousemove.clone()}
            onmouseleave={follow.onmouseleave.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            { for props.children.iter() }
        </button>
    }
}
