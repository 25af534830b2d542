use yew::prelude::*;

use crate::hooks::use_pointer_follower::use_pointer_follower;
use crate::pointer::FollowerOptions;

#[derive(Properties, PartialEq)]
pub struct GlowSphereProps {
    #[prop_or(320)]
    pub size_px: u32,
    /// Base hue of the inner glow.
    #[prop_or(215)]
    pub hue: u16,
}

/// Hue a third of the way to the complement, wrapped to `0..360`.
fn accent_hue(hue: u16) -> u16 {
    (hue % 360 + 60) % 360
}

/// Layered radial gradients standing in for a shaded 3D orb. Tilts toward the
/// pointer.
#[function_component(GlowSphere)]
pub fn glow_sphere(props: &GlowSphereProps) -> Html {
    let node = use_node_ref();
    let follow = use_pointer_follower(
        node.clone(),
        FollowerOptions {
            strength: 0.35,
            ..FollowerOptions::default()
        },
    );
    let hue = props.hue;
    let core = format!(
        "width: {size}px; height: {size}px; background: \
         radial-gradient(circle at 30% 28%, hsla({hue}, 100%, 92%, 0.95) 0%, hsla({hue}, 95%, 62%, 0.85) 22%, transparent 60%), \
         radial-gradient(circle at 70% 75%, hsla({accent}, 90%, 55%, 0.8) 0%, transparent 55%), \
         radial-gradient(circle at 50% 50%, hsla({hue}, 80%, 28%, 1) 0%, hsla({hue}, 90%, 8%, 1) 70%);",
        size = props.size_px,
        hue = hue,
        accent = accent_hue(hue),
    );

    html! {
        <div
            ref={node}
            class="glow-sphere-wrap"
            style={follow.tilt_style(1000)}
            onmousemove={follow.onmousemove.clone()}
            onmouseleave={follow.onmouseleave.clone()}
            aria-hidden="true"
        >
            <div class="glow-sphere-halo" style={format!("width: {0}px; height: {0}px;", props.size_px * 3 / 2)}></div>
            <div class="glow-sphere" style={core}></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_hue_wraps_for_any_input() {
        assert_eq!(accent_hue(215), 275);
        assert_eq!(accent_hue(330), 30);
        assert_eq!(accent_hue(u16::MAX), 75);
    }
}
