use super::Icon;
use crate::content::SubLink;
use leptos::prelude::*;

/// One entry of a header dropdown menu.
#[component]
pub fn DropdownItem(link: SubLink) -> impl IntoView {
    view! {
        <a href=link.href class="dropdown-item">
            {link.icon.map(|path| view! { <Icon path=path size="24" class="dropdown-item-icon" /> })}
            <div>
                <p class="dropdown-item-label">{link.label}</p>
                <p class="dropdown-item-description">{link.description}</p>
            </div>
        </a>
    }
}
