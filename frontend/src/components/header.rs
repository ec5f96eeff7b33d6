use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub book_count: usize,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"My Library"}</h1>
                <span class="book-count">
                    {match props.book_count {
                        1 => "1 book".to_string(),
                        n => format!("{} books", n),
                    }}
                </span>
            </div>
        </header>
    }
}
