use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: AttrValue,
    #[prop_or(18)]
    pub size: u32,
}

/// Stable hue per name so a user keeps the same colour across renders.
fn hue_for(name: &str) -> u32 {
    name.bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)))
        % 360
}

/// Round initial badge drawn as inline SVG so it survives snapshot capture.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let initial = props
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let fill = format!("hsl({}, 65%, 55%)", hue_for(&props.name));
    let size = props.size.to_string();

    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width={size.clone()} height={size} viewBox="0 0 20 20">
            <circle cx="10" cy="10" r="10" fill={fill} />
            <text x="10" y="14" text-anchor="middle" font-size="11" font-weight="700" fill="#FFF">{initial}</text>
        </svg>
    }
}
