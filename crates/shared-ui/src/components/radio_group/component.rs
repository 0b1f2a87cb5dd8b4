use dioxus::prelude::*;
use dioxus_primitives::radio_group as prim;

/// Radio group with roving focus and arrow-key navigation.
#[component]
pub fn RadioGroup(mut props: prim::RadioGroupProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "radio-group", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::RadioGroup { ..props }
    }
}

/// One option of a [`RadioGroup`]. Children render inside the focusable
/// item, so a whole card can act as the option.
#[component]
pub fn RadioGroupItem(mut props: prim::RadioItemProps) -> Element {
    if props.class.is_none() {
        props.class = Some("radio-item".to_string());
    }

    rsx! {
        prim::RadioItem { ..props }
    }
}
