use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"L"</div>
                <span class="brand-text">"Lumen"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item active">
                    <a href="/">
                        <span class="nav-icon">"\u{25A3}"</span>
                        <span>"Dashboard"</span>
                    </a>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn should_only_link_to_dashboard() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Nav /> }.to_html());
        assert_eq!(html.matches("nav-item").count(), 1);
        assert!(html.contains("href=\"/\""));
        assert!(!html.contains("disabled"));
    }
}
