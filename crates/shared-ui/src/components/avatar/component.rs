use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "legal-avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "legal-avatar-fallback",
        None,
        false,
    ));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Avatar size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    #[default]
    Default,
    Large,
    ExtraLarge,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Default => "default",
            AvatarSize::Large => "lg",
            AvatarSize::ExtraLarge => "xl",
        }
    }
}

/// Fallback fill of an initials avatar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarTone {
    #[default]
    Muted,
    Tinted,
    Primary,
}

impl AvatarTone {
    fn class(&self) -> &'static str {
        match self {
            AvatarTone::Muted => "muted",
            AvatarTone::Tinted => "tinted",
            AvatarTone::Primary => "primary",
        }
    }
}

/// Image-less avatar showing precomputed initials.
#[component]
pub fn InitialsAvatar(
    initials: String,
    #[props(default)] size: AvatarSize,
    #[props(default)] tone: AvatarTone,
) -> Element {
    rsx! {
        div {
            class: "legal-avatar-frame",
            "data-size": size.class(),
            "data-tone": tone.class(),
            Avatar {
                AvatarFallback { "{initials}" }
            }
        }
    }
}
