use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page_count: usize,
    pub current_page: usize,
    pub on_page: Callback<usize>,
}

/// One button per page; clicking jumps straight to that page
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    html! {
        <nav class="pagination">
            {for (1..=props.page_count).map(|page| {
                let on_page = props.on_page.clone();
                let class = if page == props.current_page { "page-btn active" } else { "page-btn" };
                let onclick = Callback::from(move |_: MouseEvent| on_page.emit(page));
                html! {
                    <button key={page} class={class} onclick={onclick}>
                        {page}
                    </button>
                }
            })}
        </nav>
    }
}
