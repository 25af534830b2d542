use yew::prelude::*;

use crate::hooks::use_pointer_follower::use_pointer_follower;
use crate::pointer::FollowerOptions;

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    // Half the pointer distance, so the card edge reaches full tilt.
    let follow = use_pointer_follower(
        node.clone(),
        FollowerOptions {
            strength: 0.5,
            ..FollowerOptions::default()
        },
    );

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone())}
            style={follow.tilt_style(900)}
            onmousemove={follow.onmousemove.clone()}
            onmouseleave={follow.onmouseleave.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}
