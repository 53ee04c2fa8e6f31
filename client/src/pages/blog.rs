//! Blog page with switchable code highlighting.

use leptos::prelude::*;

use crate::components::syntax_toggle::SyntaxToggle;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <main class="blog container">
            <header class="blog__header">
                <h1>"Blog"</h1>
                <SyntaxToggle/>
            </header>
            <article class="blog__post">
                <h2>"Centering the last row"</h2>
                <p>
                    "A three-wide grid leaves one or two items dangling when the count is not a "
                    "multiple of three. Offsetting the first dangling item keeps the row centred."
                </p>
                <pre class="highlight"><code>
                    <span class="k">"fn"</span>" "<span class="nf">"placement_class"</span>"(total: "
                    <span class="kt">"usize"</span>", index: "<span class="kt">"usize"</span>") -> "
                    <span class="nc">"LayoutTag"</span>" {\n    "
                    <span class="k">"if"</span>" index < "<span class="mi">"3"</span>" * (total / "
                    <span class="mi">"3"</span>") { "<span class="k">"return"</span>" OneThird; }\n    "
                    <span class="c1">"// centre the trailing row"</span>"\n}"
                </code></pre>
            </article>
        </main>
    }
}
