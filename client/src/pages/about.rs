//! Static "About" content page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="content-page">
            <div class="content-page__hero">
                <h1>"About Printmart"</h1>
                <p>"Printer hardware and consumables, resold with a straight face."</p>
            </div>
            <div class="content-page__body">
                <section>
                    <h2>"Who we are"</h2>
                    <p>
                        "Printmart is a hardware reseller focused on office printing: "
                        "printers, ink, toner, drums, and the paper that goes through them. "
                        "We stock six brands, keep the catalog shallow on purpose, and ship "
                        "from a single warehouse so stock numbers mean something."
                    </p>
                </section>
                <section>
                    <h2>"Why only printers"</h2>
                    <p>
                        "Specialists answer support calls better than generalists. Every "
                        "product we list is something we have installed, unjammed, or "
                        "refilled ourselves."
                    </p>
                </section>
                <section>
                    <h2>"Guarantees"</h2>
                    <p>
                        "Thirty-day returns on unopened consumables, one-year workmanship "
                        "cover on hardware, and free shipping on every order."
                    </p>
                </section>
            </div>
        </div>
    }
}
