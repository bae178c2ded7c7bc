use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Shared document shell. Pages ship their own CSS inline; this app has no
/// static asset directory.
pub fn page_layout(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}
